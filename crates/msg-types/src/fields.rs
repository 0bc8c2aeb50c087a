//! CBOR array payloads.
//!
//! Decoded values are normalized into [`Field`] as soon as they leave the
//! CBOR decoder: byte strings and tag 64 typed arrays both become
//! [`Field::Bytes`], and tag 2/3 bignums become [`Field::Int`] when they fit.
//! Decoders then read fields by position through [`CborFields`].

use ciborium::value::Value;
use xcp_primitives::AssetId;

use crate::errors::{DecodeError, DecodeResult};

const TAG_POS_BIGNUM: u64 = 2;
const TAG_NEG_BIGNUM: u64 = 3;
const TAG_UINT8_ARRAY: u64 = 64;

/// A normalized CBOR array element.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Any integer, including bignums that fit.
    Int(i128),
    /// Byte string or `uint8` typed array.
    Bytes(Vec<u8>),
    /// Text string.
    Text(String),
    /// Boolean.
    Bool(bool),
    /// Floating point number.
    Float(f64),
    /// Null or undefined.
    Null,
    /// Anything else (maps, nested arrays, unknown tags).
    Other,
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        match value {
            Value::Integer(int) => Self::Int(i128::from(int)),
            Value::Bytes(bytes) => Self::Bytes(bytes),
            Value::Text(text) => Self::Text(text),
            Value::Bool(b) => Self::Bool(b),
            Value::Float(f) => Self::Float(f),
            Value::Null => Self::Null,
            Value::Tag(TAG_UINT8_ARRAY, inner) => match *inner {
                Value::Bytes(bytes) => Self::Bytes(bytes),
                _ => Self::Other,
            },
            Value::Tag(tag @ (TAG_POS_BIGNUM | TAG_NEG_BIGNUM), inner) => match *inner {
                Value::Bytes(bytes) => bignum(&bytes, tag == TAG_NEG_BIGNUM),
                _ => Self::Other,
            },
            _ => Self::Other,
        }
    }
}

fn bignum(be_bytes: &[u8], negative: bool) -> Field {
    let digits = match be_bytes.iter().position(|b| *b != 0) {
        Some(first) => &be_bytes[first..],
        None => &[],
    };
    if digits.len() > 16 {
        return Field::Other;
    }

    let magnitude = digits.iter().fold(0u128, |acc, b| (acc << 8) | *b as u128);
    let Ok(magnitude) = i128::try_from(magnitude) else {
        return Field::Other;
    };

    if negative {
        Field::Int(-1 - magnitude)
    } else {
        Field::Int(magnitude)
    }
}

impl Field {
    /// Renders a numeric field as a decimal string.
    fn to_number_string(&self) -> Option<String> {
        match self {
            Self::Int(i) => Some(i.to_string()),
            Self::Float(f) => Some(f.to_string()),
            _ => None,
        }
    }
}

/// Positional view of a decoded CBOR array.
#[derive(Debug, Clone)]
pub struct CborFields {
    fields: Vec<Field>,
}

impl CborFields {
    /// Decodes `buf` as a CBOR array of at least `min_fields` elements.
    pub fn decode(buf: &[u8], message: &'static str, min_fields: usize) -> DecodeResult<Self> {
        let value: Value =
            ciborium::from_reader(buf).map_err(|e| DecodeError::Cbor(e.to_string()))?;
        let Value::Array(items) = value else {
            return Err(DecodeError::NotArray);
        };

        if items.len() < min_fields {
            return Err(DecodeError::TooFewFields {
                message,
                expected: min_fields,
                actual: items.len(),
            });
        }

        Ok(Self {
            fields: items.into_iter().map(Field::from).collect(),
        })
    }

    /// Gets a field, treating `null` like an absent field.
    pub fn get(&self, index: usize) -> Option<&Field> {
        self.fields.get(index).filter(|f| **f != Field::Null)
    }

    fn require(&self, index: usize, expected: &'static str) -> DecodeResult<&Field> {
        self.get(index)
            .ok_or(DecodeError::FieldType { index, expected })
    }

    /// Reads an integer field.
    pub fn int(&self, index: usize) -> DecodeResult<i128> {
        match self.require(index, "an integer")? {
            Field::Int(i) => Ok(*i),
            _ => Err(DecodeError::FieldType {
                index,
                expected: "an integer",
            }),
        }
    }

    /// Reads a non-negative integer that fits a `u64`.
    pub fn u64(&self, index: usize) -> DecodeResult<u64> {
        u64::try_from(self.int(index)?).map_err(|_| DecodeError::FieldType {
            index,
            expected: "an unsigned 64 bit integer",
        })
    }

    /// Reads an asset id.
    pub fn asset_id(&self, index: usize) -> DecodeResult<AssetId> {
        AssetId::try_from(self.int(index)?).map_err(|_| DecodeError::FieldType {
            index,
            expected: "an asset id",
        })
    }

    /// Reads a quantity, a non-negative integer, as a decimal string.
    pub fn quantity(&self, index: usize) -> DecodeResult<String> {
        self.u64(index).map(|q| q.to_string())
    }

    /// Reads an integer or float field as a decimal string.
    pub fn number(&self, index: usize) -> DecodeResult<String> {
        self.require(index, "a number")?
            .to_number_string()
            .ok_or(DecodeError::FieldType {
                index,
                expected: "a number",
            })
    }

    /// Reads a flag, given as a boolean or as an integer.
    pub fn bool(&self, index: usize) -> DecodeResult<bool> {
        match self.require(index, "a boolean")? {
            Field::Bool(b) => Ok(*b),
            Field::Int(i) => Ok(*i != 0),
            _ => Err(DecodeError::FieldType {
                index,
                expected: "a boolean",
            }),
        }
    }

    /// Reads a byte string field.
    pub fn bytes(&self, index: usize) -> DecodeResult<&[u8]> {
        match self.require(index, "a byte string")? {
            Field::Bytes(b) => Ok(b),
            _ => Err(DecodeError::FieldType {
                index,
                expected: "a byte string",
            }),
        }
    }

    /// Reads an optional text field.
    pub fn opt_text(&self, index: usize) -> DecodeResult<Option<&str>> {
        match self.get(index) {
            None => Ok(None),
            Some(Field::Text(t)) => Ok(Some(t)),
            Some(_) => Err(DecodeError::FieldType {
                index,
                expected: "a text string",
            }),
        }
    }

    /// Reads an optional field holding either bytes or text, rendering
    /// bytes with [`crate::text::bytes_or_text`].
    pub fn opt_bytes_or_text(
        &self,
        index: usize,
        mime_type: Option<&str>,
    ) -> DecodeResult<Option<String>> {
        match self.get(index) {
            None => Ok(None),
            Some(Field::Text(t)) => Ok(Some(t.clone())),
            Some(Field::Bytes(b)) => Ok(Some(crate::text::bytes_or_text(b, mime_type))),
            Some(_) => Err(DecodeError::FieldType {
                index,
                expected: "bytes or text",
            }),
        }
    }
}
