use bitcoin::{
    Opcode,
    opcodes::{
        OP_FALSE,
        all::{OP_ENDIF, OP_IF},
    },
};
use xcp_l1_txfmt::script::read_push;

use crate::errors::EnvelopeParseError;
use crate::ord::{OrdEnvelope, parse_ord_body};

/// Length of the `OP_FALSE OP_IF` marker.
pub const ENVELOPE_MARKER_LEN: usize = 2;

/// Payload of an envelope, by grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    /// Concatenated pushes of a plain envelope.
    Generic(Vec<u8>),

    /// An ord-style envelope tagged with the `xcp` metaprotocol.
    Ord(OrdEnvelope),
}

/// How a run of pushes ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Terminator {
    /// Only `OP_ENDIF` ends the run.
    Endif,
    /// `OP_ENDIF` or a bare `OP_FALSE` ends the run.
    EndifOrFalse,
}

/// Explicit cursor over raw script bytes.
#[derive(Debug)]
pub(crate) struct Cursor<'s> {
    script: &'s [u8],
    at: usize,
}

impl<'s> Cursor<'s> {
    pub(crate) fn new(script: &'s [u8]) -> Self {
        Self { script, at: 0 }
    }

    pub(crate) fn rest(&self) -> &'s [u8] {
        &self.script[self.at..]
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.rest().first().copied()
    }

    pub(crate) fn advance(&mut self, n: usize) {
        self.at = (self.at + n).min(self.script.len());
    }

    /// Consumes `prefix` if the remaining bytes start with it.
    pub(crate) fn eat(&mut self, prefix: &[u8]) -> bool {
        let matched = self.rest().starts_with(prefix);
        if matched {
            self.advance(prefix.len());
        }
        matched
    }
}

/// Checks whether a script opens with `OP_FALSE OP_IF`.
pub fn has_envelope_marker(script: &[u8]) -> bool {
    script.starts_with(&[OP_FALSE.to_u8(), OP_IF.to_u8()])
}

/// Parse the envelope at the start of a script.
///
/// The script must open with `OP_FALSE OP_IF`.  An ord/xcp envelope is
/// recognized by the `ord` marker right after it; anything else is read with
/// the generic grammar.
///
/// # Errors
///
/// Returns [`EnvelopeParseError`] if the marker is missing, a push is
/// truncated, the envelope is not closed, or an ord envelope is malformed.
pub fn parse_envelope(script: &[u8]) -> Result<Envelope, EnvelopeParseError> {
    if !has_envelope_marker(script) {
        return Err(EnvelopeParseError::MissingEnvelopeMarker);
    }

    let mut cursor = Cursor::new(script);
    cursor.advance(ENVELOPE_MARKER_LEN);

    if let Some(ord) = parse_ord_body(&mut cursor)? {
        return Ok(Envelope::Ord(ord));
    }

    let payload = collect_pushes(&mut cursor, Terminator::Endif)?;
    Ok(Envelope::Generic(payload))
}

/// Parse envelope payload from a script using the generic grammar only.
///
/// # Errors
///
/// Returns [`EnvelopeParseError`] if the script does not contain a valid
/// envelope structure or if the payload cannot be extracted.
pub fn parse_envelope_payload(script: &[u8]) -> Result<Vec<u8>, EnvelopeParseError> {
    if !has_envelope_marker(script) {
        return Err(EnvelopeParseError::MissingEnvelopeMarker);
    }

    let mut cursor = Cursor::new(script);
    cursor.advance(ENVELOPE_MARKER_LEN);
    collect_pushes(&mut cursor, Terminator::Endif)
}

/// Accumulates pushed bytes until the terminator.  Opcodes that are not
/// pushes are stepped over one byte at a time.
pub(crate) fn collect_pushes(
    cursor: &mut Cursor<'_>,
    terminator: Terminator,
) -> Result<Vec<u8>, EnvelopeParseError> {
    let mut data = vec![];

    loop {
        let Some(byte) = cursor.peek() else {
            return Err(EnvelopeParseError::MissingEndif);
        };

        match Opcode::from(byte) {
            OP_ENDIF => {
                cursor.advance(1);
                return Ok(data);
            }
            op if op == OP_FALSE && terminator == Terminator::EndifOrFalse => {
                cursor.advance(1);
                return Ok(data);
            }
            _ => {}
        }

        match read_push(cursor.rest())? {
            Some((chunk, consumed)) => {
                data.extend_from_slice(chunk);
                cursor.advance(consumed);
            }
            None => cursor.advance(1),
        }
    }
}
