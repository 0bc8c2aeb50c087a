use thiserror::Error;

/// Errors from decoding a message payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A fixed layout payload was shorter than its required fields.
    #[error("{message} payload needs at least {expected} bytes, got {actual}")]
    TooShort {
        /// Name of the message being decoded.
        message: &'static str,
        /// Minimum length of the layout.
        expected: usize,
        /// Length of the payload.
        actual: usize,
    },

    /// The payload is not valid CBOR.
    #[error("invalid cbor: {0}")]
    Cbor(String),

    /// The CBOR value is not an array.
    #[error("cbor payload is not an array")]
    NotArray,

    /// A CBOR array had fewer fields than the message requires.
    #[error("{message} needs at least {expected} fields, got {actual}")]
    TooFewFields {
        /// Name of the message being decoded.
        message: &'static str,
        /// Number of required fields.
        expected: usize,
        /// Number of fields present.
        actual: usize,
    },

    /// A CBOR field had an unexpected type or value.
    #[error("field {index} is not {expected}")]
    FieldType {
        /// Position of the field in the array.
        index: usize,
        /// Description of the expected value.
        expected: &'static str,
    },

    /// A dispense payload other than the single byte `0x00`.
    #[error("dispense payload must be exactly [0x00]")]
    InvalidDispense,

    /// A text payload that is not UTF-8.
    #[error("payload is not valid utf-8")]
    InvalidUtf8,

    /// A delimited text payload with too few parts.
    #[error("{message} needs at least {expected} '|' separated parts, got {actual}")]
    TooFewParts {
        /// Name of the message being decoded.
        message: &'static str,
        /// Number of required parts.
        expected: usize,
        /// Number of parts present.
        actual: usize,
    },

    /// A destroy tag longer than allowed.
    #[error("tag is {0} bytes, longer than the maximum")]
    TagTooLong(usize),

    /// Tried to read past the end of the payload.
    #[error("would overrun end of input")]
    OverrunInput,
}

/// Result of decoding a message payload.
pub type DecodeResult<T> = Result<T, DecodeError>;
