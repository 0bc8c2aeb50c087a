use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::magic::{MAGIC_BYTES_LEN, MagicBytes};

impl Serialize for MagicBytes {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match (s.is_human_readable(), self.as_str()) {
            (true, Some(text)) => s.serialize_str(text),
            _ => s.serialize_bytes(self.as_bytes()),
        }
    }
}

/// Accepts the ASCII form, raw bytes, or a byte sequence, so configs written
/// by hand and binary encodings both load.
struct MagicVisitor;

impl<'de> Visitor<'de> for MagicVisitor {
    type Value = MagicBytes;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {MAGIC_BYTES_LEN}-byte magic string or byte array")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<MagicBytes, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<MagicBytes, E> {
        <[u8; MAGIC_BYTES_LEN]>::try_from(v)
            .map(MagicBytes::new)
            .map_err(|_| E::invalid_length(v.len(), &self))
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<MagicBytes, A::Error> {
        let mut bytes = [0u8; MAGIC_BYTES_LEN];
        for (i, slot) in bytes.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<u8>()?.is_some() {
            return Err(de::Error::invalid_length(MAGIC_BYTES_LEN + 1, &self));
        }
        Ok(MagicBytes::new(bytes))
    }
}

impl<'de> Deserialize<'de> for MagicBytes {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        if d.is_human_readable() {
            d.deserialize_any(MagicVisitor)
        } else {
            d.deserialize_bytes(MagicVisitor)
        }
    }
}
