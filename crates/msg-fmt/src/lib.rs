//! Implements the Counterparty typed message framing.
//!
//! A message is a type id followed by its body.  The id is encoded either in
//! short form, a single non-zero byte, or in long form, a zero marker byte
//! followed by the id as a 4 byte big-endian integer:
//!
//! ```text
//! [id]                 short form, id in 1..=255
//! [0x00, id(4, BE)]    long form, any u32 id
//! ```

use thiserror::Error;

pub mod registry;

pub use registry::{MessageType, message_type_name};

/// Alias for type IDs.
pub type TypeId = u32;

/// Marker byte introducing a long form type id.
pub const LONG_FORM_MARKER: u8 = 0x00;

/// Length of a long form type id prefix, including the marker.
pub const LONG_FORM_LEN: usize = 5;

/// Error types from parsing messages.
#[derive(Debug, Error)]
pub enum Error {
    /// Message provided is empty.
    #[error("empty buffer")]
    BufEmpty,

    /// Message buffer too short to hold a long form type id.
    #[error("buffer too short for long form type id ({0} bytes)")]
    BufTooShort(usize),

    /// A short form type id must be non-zero.
    #[error("short form type id must be non-zero")]
    ZeroShortForm,
}

/// A formatted message.
pub trait Msg {
    /// Gets the type.
    fn ty(&self) -> TypeId;

    /// Gets a slice of the body.
    fn body(&self) -> &[u8];

    /// Encodes the message into a vec, using the short form when the type
    /// fits.
    fn to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        encode_into_buf(self.ty(), self.body().iter().copied(), &mut buf);
        buf
    }
}

/// Parsed formatted message.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct MsgRef<'b> {
    ty: TypeId,
    body: &'b [u8],
}

impl<'b> MsgRef<'b> {
    /// Constructs a new instance from type and body.
    pub fn new(ty: TypeId, body: &'b [u8]) -> Self {
        Self { ty, body }
    }
}

impl<'b> TryFrom<&'b [u8]> for MsgRef<'b> {
    type Error = Error;

    fn try_from(value: &'b [u8]) -> Result<Self, Self::Error> {
        let (ty, body) = read_type_id(value)?;
        Ok(Self { ty, body })
    }
}

impl Msg for MsgRef<'_> {
    fn ty(&self) -> TypeId {
        self.ty
    }

    fn body(&self) -> &[u8] {
        self.body
    }
}

/// Reads the type id prefix of a buffer, returning the id and the rest of the
/// buffer.
pub fn read_type_id(buf: &[u8]) -> Result<(TypeId, &[u8]), Error> {
    let Some((&first, rest)) = buf.split_first() else {
        return Err(Error::BufEmpty);
    };

    if first != LONG_FORM_MARKER {
        return Ok((TypeId::from(first), rest));
    }

    if buf.len() < LONG_FORM_LEN {
        return Err(Error::BufTooShort(buf.len()));
    }

    let mut id = [0; 4];
    id.copy_from_slice(&buf[1..LONG_FORM_LEN]);
    Ok((TypeId::from_be_bytes(id), &buf[LONG_FORM_LEN..]))
}

/// Encodes a type id in short form.
pub fn encode_short_form(ty: u8) -> Result<[u8; 1], Error> {
    if ty == LONG_FORM_MARKER {
        return Err(Error::ZeroShortForm);
    }

    Ok([ty])
}

/// Encodes a type id in long form.  Any id is accepted, including ids that
/// would also fit the short form.
pub fn encode_long_form(ty: TypeId) -> [u8; LONG_FORM_LEN] {
    let mut buf = [LONG_FORM_MARKER; LONG_FORM_LEN];
    buf[1..].copy_from_slice(&ty.to_be_bytes());
    buf
}

/// Encodes a message into a vec from parts, picking the short form whenever
/// the id fits in it.
pub fn encode_into_buf(ty: TypeId, body: impl IntoIterator<Item = u8>, into: &mut Vec<u8>) {
    match u8::try_from(ty).map(encode_short_form) {
        Ok(Ok(short)) => into.extend_from_slice(&short),
        _ => into.extend_from_slice(&encode_long_form(ty)),
    }

    into.extend(body);
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_short_form() {
        let buf = [0x02, 0xaa, 0xbb];
        let (ty, rest) = read_type_id(&buf).unwrap();
        assert_eq!(ty, 2);
        assert_eq!(rest, &[0xaa, 0xbb]);
    }

    #[test]
    fn test_long_form() {
        let buf = [0x00, 0x00, 0x00, 0x04, 0xd2, 0xaa];
        let (ty, rest) = read_type_id(&buf).unwrap();
        assert_eq!(ty, 1234);
        assert_eq!(rest, &[0xaa]);
    }

    #[test]
    fn test_long_form_small_id() {
        let buf = [0x00, 0x00, 0x00, 0x00, 0x02];
        let (ty, rest) = read_type_id(&buf).unwrap();
        assert_eq!(ty, 2);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_empty_buf() {
        assert!(matches!(read_type_id(&[]), Err(Error::BufEmpty)));
    }

    #[test]
    fn test_truncated_long_form() {
        assert!(matches!(
            read_type_id(&[0x00, 0x01, 0x02]),
            Err(Error::BufTooShort(3))
        ));
    }

    #[test]
    fn test_short_form_rejects_zero() {
        assert!(encode_short_form(0).is_err());
        assert_eq!(encode_short_form(30).unwrap(), [30]);
    }

    #[test]
    fn test_msg_ref_to_vec() {
        let body = [1, 2, 3];
        assert_eq!(MsgRef::new(20, &body).to_vec(), vec![20, 1, 2, 3]);
        assert_eq!(
            MsgRef::new(0, &body).to_vec(),
            vec![0, 0, 0, 0, 0, 1, 2, 3]
        );
        assert_eq!(
            MsgRef::new(1234, &body).to_vec(),
            vec![0, 0, 0, 0x04, 0xd2, 1, 2, 3]
        );
    }

    proptest! {
        #[test]
        fn prop_long_form_roundtrip(ty: u32, body: Vec<u8>) {
            let mut buf = encode_long_form(ty).to_vec();
            buf.extend_from_slice(&body);
            let msg = MsgRef::try_from(buf.as_slice()).unwrap();
            prop_assert_eq!(msg.ty(), ty);
            prop_assert_eq!(msg.body(), body.as_slice());
        }

        #[test]
        fn prop_canonical_roundtrip(ty: u32, body: Vec<u8>) {
            let buf = MsgRef::new(ty, &body).to_vec();
            let (parsed, rest) = read_type_id(&buf).unwrap();
            prop_assert_eq!(parsed, ty);
            prop_assert_eq!(rest, body.as_slice());
        }
    }
}
