//! Parsing logic for legacy `OP_RETURN` carriers.
//!
//! The output script is `OP_RETURN <push opcode> <ciphertext>`, where the
//! ciphertext is RC4 encrypted with the first input's txid bytes:
//!
//! ```text
//! [0..8]   ASCII 8 byte magic
//! [8..]    framed message (type id + payload)
//! ```
//!
//! A bare, unencrypted magic marks a taproot commit transaction, the first
//! half of a commit/reveal pair whose message lives in the reveal's witness.

use bitcoin::opcodes::all::OP_RETURN;

use crate::error::{TxFmtError, TxFmtResult};
use crate::magic::{MAGIC_BYTES_LEN, MagicBytes};
use crate::rc4;
use crate::script::read_push_header;

/// Data carried by a protocol `OP_RETURN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpReturnData {
    /// The output holds only the plaintext magic.
    TaprootCommit,

    /// Decrypted message with the magic stripped off.
    Message(Vec<u8>),
}

/// Config for parsing `OP_RETURN` carriers.
#[derive(Clone, Debug)]
pub struct OpReturnParser {
    magic_bytes: MagicBytes,
}

impl OpReturnParser {
    /// Constructs a new instance.
    pub fn new(magic_bytes: MagicBytes) -> Self {
        Self { magic_bytes }
    }

    /// Attempts to extract protocol data from a raw `OP_RETURN` output
    /// script, decrypting it with `key`.
    pub fn try_parse_script(&self, script: &[u8], key: &[u8]) -> TxFmtResult<OpReturnData> {
        let candidate = extract_opret_data(script)?;
        if candidate == self.magic_bytes.as_bytes() {
            return Ok(OpReturnData::TaprootCommit);
        }

        let decrypted = rc4::keystream_xor(key, candidate)?;
        let message = self.magic_bytes.strip_from(&decrypted).ok_or_else(|| {
            let found = decrypted.len().min(MAGIC_BYTES_LEN);
            TxFmtError::MismatchMagic(decrypted[..found].to_vec())
        })?;

        if message.is_empty() {
            return Err(TxFmtError::EmptyMessage(self.magic_bytes));
        }

        Ok(OpReturnData::Message(message.to_vec()))
    }

    /// Constructs an `OP_RETURN` script carrying `message` encrypted with
    /// `key`.  Used to build fixtures for the parser.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn encode_script(
        &self,
        message: &[u8],
        key: &[u8],
        width: crate::script::PushWidth,
    ) -> TxFmtResult<Vec<u8>> {
        let mut plain = self.magic_bytes.as_bytes().to_vec();
        plain.extend_from_slice(message);
        let encrypted = rc4::keystream_xor(key, &plain)?;

        let mut script = vec![OP_RETURN.to_u8()];
        crate::script::write_push(&mut script, &encrypted, width);
        Ok(script)
    }
}

impl Default for OpReturnParser {
    fn default() -> Self {
        Self::new(MagicBytes::default())
    }
}

/// Slices the candidate ciphertext out of an `OP_RETURN` script: everything
/// after the first push opcode and its length field.
pub fn extract_opret_data(script: &[u8]) -> TxFmtResult<&[u8]> {
    let (&first, rest) = script.split_first().ok_or(TxFmtError::EmptyScript)?;
    if first != OP_RETURN.to_u8() {
        return Err(TxFmtError::NotOpret);
    }

    if rest.is_empty() {
        return Err(TxFmtError::MalformedOpret);
    }

    let header = read_push_header(rest)?.ok_or(TxFmtError::MalformedOpret)?;
    Ok(&rest[header.header_len()..])
}
