//! Raw script push-opcode grammar.
//!
//! ```text
//! 0x00..=0x4b    push of `opcode` bytes
//! 0x4c <n>       OP_PUSHDATA1, 1 byte length
//! 0x4d <n n>     OP_PUSHDATA2, 2 byte little-endian length
//! 0x4e <n n n n> OP_PUSHDATA4, 4 byte little-endian length
//! ```
//!
//! Carrier scripts are read byte-wise rather than through
//! [`bitcoin::Script::instructions`], since the envelope grammars must keep
//! going past opcodes a strict instruction iterator would reject.

use bitcoin::opcodes::all::{OP_PUSHDATA1, OP_PUSHDATA2, OP_PUSHDATA4};

use crate::error::{TxFmtError, TxFmtResult};

/// Header of a data push: how many bytes the opcode and its length field
/// take, and how many data bytes follow them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushHeader {
    header_len: usize,
    data_len: usize,
}

impl PushHeader {
    /// Length of the opcode plus its length field.
    pub fn header_len(&self) -> usize {
        self.header_len
    }

    /// Length of the pushed data.
    pub fn data_len(&self) -> usize {
        self.data_len
    }

    /// Total bytes the push spans.
    pub fn total_len(&self) -> usize {
        self.header_len + self.data_len
    }
}

/// Reads the push header at the start of `buf`.
///
/// Returns `Ok(None)` if the first byte is not a push opcode.
pub fn read_push_header(buf: &[u8]) -> TxFmtResult<Option<PushHeader>> {
    let Some(&opcode) = buf.first() else {
        return Err(TxFmtError::EmptyScript);
    };

    let width = if opcode == OP_PUSHDATA1.to_u8() {
        1
    } else if opcode == OP_PUSHDATA2.to_u8() {
        2
    } else if opcode == OP_PUSHDATA4.to_u8() {
        4
    } else if opcode < OP_PUSHDATA1.to_u8() {
        return Ok(Some(PushHeader {
            header_len: 1,
            data_len: opcode as usize,
        }));
    } else {
        return Ok(None);
    };

    let field = buf
        .get(1..1 + width)
        .ok_or(TxFmtError::TruncatedPushLength)?;
    let data_len = field
        .iter()
        .rev()
        .fold(0usize, |acc, b| (acc << 8) | *b as usize);

    Ok(Some(PushHeader {
        header_len: 1 + width,
        data_len,
    }))
}

/// Reads a full data push at the start of `buf`, returning the pushed bytes
/// and the number of script bytes consumed.
///
/// Returns `Ok(None)` if the first byte is not a push opcode.
pub fn read_push(buf: &[u8]) -> TxFmtResult<Option<(&[u8], usize)>> {
    let Some(header) = read_push_header(buf)? else {
        return Ok(None);
    };

    let available = buf.len() - header.header_len();
    let data = buf
        .get(header.header_len()..header.total_len())
        .ok_or(TxFmtError::TruncatedPush {
            expected: header.data_len(),
            available,
        })?;

    Ok(Some((data, header.total_len())))
}

/// Opcode width used when encoding a push.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushWidth {
    /// Smallest encoding that fits the data.
    Minimal,
    /// Forces `OP_PUSHDATA1`.
    PushData1,
    /// Forces `OP_PUSHDATA2`.
    PushData2,
    /// Forces `OP_PUSHDATA4`.
    PushData4,
}

/// Appends a push of `data` to `script` using the requested opcode width.
///
/// # Panics
///
/// If `data` does not fit the requested width.
#[cfg(any(test, feature = "test-utils"))]
pub fn write_push(script: &mut Vec<u8>, data: &[u8], width: PushWidth) {
    let len = data.len();
    let width = match width {
        PushWidth::Minimal if len < OP_PUSHDATA1.to_u8() as usize => {
            script.push(len as u8);
            script.extend_from_slice(data);
            return;
        }
        PushWidth::Minimal if len <= u8::MAX as usize => PushWidth::PushData1,
        PushWidth::Minimal if len <= u16::MAX as usize => PushWidth::PushData2,
        PushWidth::Minimal => PushWidth::PushData4,
        forced => forced,
    };

    match width {
        PushWidth::PushData1 => {
            let len = u8::try_from(len).expect("test: push too long for PUSHDATA1");
            script.push(OP_PUSHDATA1.to_u8());
            script.push(len);
        }
        PushWidth::PushData2 => {
            let len = u16::try_from(len).expect("test: push too long for PUSHDATA2");
            script.push(OP_PUSHDATA2.to_u8());
            script.extend_from_slice(&len.to_le_bytes());
        }
        _ => {
            let len = u32::try_from(len).expect("test: push too long for PUSHDATA4");
            script.push(OP_PUSHDATA4.to_u8());
            script.extend_from_slice(&len.to_le_bytes());
        }
    }
    script.extend_from_slice(data);
}
