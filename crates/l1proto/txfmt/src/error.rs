use thiserror::Error;

use crate::magic::MagicBytes;
use crate::rc4::Rc4Error;

/// Errors for decoding tx format types.
#[derive(Debug, Error)]
pub enum TxFmtError {
    /// The script was empty.
    #[error("empty script")]
    EmptyScript,

    /// The script does not start with `OP_RETURN`.
    #[error("script not OP_RETURN")]
    NotOpret,

    /// The byte after `OP_RETURN` is not a data push opcode.
    #[error("malformed OP_RETURN, no data push")]
    MalformedOpret,

    /// A push opcode's length field runs past the end of the script.
    #[error("push length field truncated")]
    TruncatedPushLength,

    /// A push's data runs past the end of the script.
    #[error("push of {expected} bytes truncated, {available} available")]
    TruncatedPush {
        /// Length declared by the push opcode.
        expected: usize,
        /// Bytes left in the script.
        available: usize,
    },

    /// Decrypted data did not start with the expected magic.
    #[error("decrypted data has incorrect magic (found {0:?})")]
    MismatchMagic(Vec<u8>),

    /// Decrypted data holds nothing after the magic.
    #[error("empty message after magic {0}")]
    EmptyMessage(MagicBytes),

    /// The cipher rejected its key.
    #[error("cipher: {0}")]
    Cipher(#[from] Rc4Error),
}

/// Wrapper result type.
pub type TxFmtResult<T> = Result<T, TxFmtError>;
