/// Renders `bytes` as text when a text MIME type (or none) is declared and
/// the bytes are valid UTF-8, otherwise as lowercase hex.
pub fn bytes_or_text(bytes: &[u8], mime_type: Option<&str>) -> String {
    let textual = mime_type.is_none_or(|mime| mime.starts_with("text"));
    match std::str::from_utf8(bytes) {
        Ok(text) if textual => text.to_owned(),
        _ => hex::encode(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_mime() {
        assert_eq!(bytes_or_text(b"hello", None), "hello");
        assert_eq!(bytes_or_text(b"hello", Some("text/plain")), "hello");
        assert_eq!(bytes_or_text(b"", None), "");
    }

    #[test]
    fn test_binary_mime_is_hex() {
        assert_eq!(bytes_or_text(b"hello", Some("image/png")), "68656c6c6f");
    }

    #[test]
    fn test_invalid_utf8_is_hex() {
        assert_eq!(bytes_or_text(&[0xff, 0xfe], None), "fffe");
        assert_eq!(bytes_or_text(&[0xc3], Some("text/plain")), "c3");
    }
}
