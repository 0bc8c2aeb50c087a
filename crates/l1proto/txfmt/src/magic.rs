use std::fmt;
use std::str;

/// Length of magic bytes in bytes.
pub const MAGIC_BYTES_LEN: usize = 8;

/// Magic prefix of every Counterparty message.
pub const PROTOCOL_MAGIC: MagicBytes = MagicBytes::new(*b"CNTRPRTY");

/// Magic bytes identifier ([`MAGIC_BYTES_LEN`]-byte ASCII string).
///
/// This type wraps a [`MAGIC_BYTES_LEN`]-byte array and provides convenient conversion to/from
/// ASCII strings for readability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MagicBytes([u8; MAGIC_BYTES_LEN]);

impl MagicBytes {
    /// Creates a new `MagicBytes` from a [`MAGIC_BYTES_LEN`]-byte array.
    pub const fn new(bytes: [u8; MAGIC_BYTES_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the magic bytes as a byte slice.
    pub const fn as_bytes(&self) -> &[u8; MAGIC_BYTES_LEN] {
        &self.0
    }

    /// Returns the magic bytes as a string slice if valid ASCII.
    pub fn as_str(&self) -> Option<&str> {
        str::from_utf8(&self.0).ok()
    }

    /// Splits the magic off the front of a buffer, returning the remainder if
    /// the buffer starts with it.
    pub fn strip_from<'b>(&self, buf: &'b [u8]) -> Option<&'b [u8]> {
        buf.strip_prefix(self.0.as_slice())
    }
}

impl Default for MagicBytes {
    fn default() -> Self {
        PROTOCOL_MAGIC
    }
}

impl From<[u8; MAGIC_BYTES_LEN]> for MagicBytes {
    fn from(bytes: [u8; MAGIC_BYTES_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<MagicBytes> for [u8; MAGIC_BYTES_LEN] {
    fn from(magic: MagicBytes) -> Self {
        magic.0
    }
}

impl AsRef<[u8]> for MagicBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for MagicBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "{:?}", self.0),
        }
    }
}

impl str::FromStr for MagicBytes {
    type Err = InvalidMagicBytes;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != MAGIC_BYTES_LEN {
            return Err(InvalidMagicBytes::InvalidLength);
        }
        if !s.is_ascii() {
            return Err(InvalidMagicBytes::NotAscii);
        }
        let mut bytes = [0u8; MAGIC_BYTES_LEN];
        bytes.copy_from_slice(s.as_bytes());
        Ok(Self(bytes))
    }
}

/// Error type for invalid magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMagicBytes {
    /// The input string is not exactly [`MAGIC_BYTES_LEN`] bytes long.
    InvalidLength,
    /// The input string contains non-ASCII characters.
    NotAscii,
}

impl fmt::Display for InvalidMagicBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => write!(
                f,
                "magic bytes must be exactly {} characters",
                MAGIC_BYTES_LEN
            ),
            Self::NotAscii => write!(f, "magic bytes must be ASCII"),
        }
    }
}

impl std::error::Error for InvalidMagicBytes {}
