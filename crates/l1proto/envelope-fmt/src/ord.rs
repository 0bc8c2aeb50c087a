//! Ord-style envelopes carrying the `xcp` metaprotocol.
//!
//! ```text
//! OP_FALSE OP_IF
//!   "ord"
//!   [tag 7] "xcp"
//!   [tag 1] <content type>
//!   [tag 5] <metadata push> ...
//! [ OP_0 <content push> ... ]
//! OP_ENDIF
//! ```
//!
//! Each tag is accepted as a one byte push (`0x01 <tag>`), a bare tag byte or
//! the matching `OP_PUSHNUM_n`.  The `ord` and `xcp` markers may carry their
//! own length prefix.  Metadata ends at `OP_ENDIF` or at the `OP_0` that
//! separates it from the content body, which is not read.

use bitcoin::opcodes::all::OP_PUSHNUM_1;
use xcp_l1_txfmt::script::read_push;

use crate::errors::EnvelopeParseError;
use crate::parser::{Cursor, Terminator, collect_pushes};

/// Marker opening an ord envelope.
pub const ORD_MARKER: &[u8; 3] = b"ord";

/// Metaprotocol marker of Counterparty ord envelopes.
pub const XCP_MARKER: &[u8; 3] = b"xcp";

const TAG_CONTENT_TYPE: u8 = 1;
const TAG_METADATA: u8 = 5;
const TAG_METAPROTOCOL: u8 = 7;

/// Fields of an ord/xcp envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdEnvelope {
    mime_type: String,
    metadata: Vec<u8>,
}

impl OrdEnvelope {
    /// Content type declared by the envelope.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Concatenated metadata pushes.
    pub fn metadata(&self) -> &[u8] {
        &self.metadata
    }
}

/// Reads an ord body after the envelope marker.
///
/// Returns `Ok(None)`, leaving the cursor untouched, if the body does not
/// open with the `ord` marker.
pub(crate) fn parse_ord_body(
    cursor: &mut Cursor<'_>,
) -> Result<Option<OrdEnvelope>, EnvelopeParseError> {
    if !eat_marker(cursor, ORD_MARKER) {
        return Ok(None);
    }

    skip_tag(cursor, TAG_METAPROTOCOL);
    if !eat_marker(cursor, XCP_MARKER) {
        return Err(EnvelopeParseError::MissingXcpMarker);
    }

    skip_tag(cursor, TAG_CONTENT_TYPE);
    let (mime, consumed) =
        read_push(cursor.rest())?.ok_or(EnvelopeParseError::MissingContentType)?;
    let mime_type = std::str::from_utf8(mime)
        .map_err(|_| EnvelopeParseError::InvalidContentType)?
        .to_owned();
    cursor.advance(consumed);

    skip_tag(cursor, TAG_METADATA);
    let metadata = collect_pushes(cursor, Terminator::EndifOrFalse)?;

    Ok(Some(OrdEnvelope {
        mime_type,
        metadata,
    }))
}

/// Consumes a marker, with or without its push length byte.
fn eat_marker(cursor: &mut Cursor<'_>, marker: &[u8; 3]) -> bool {
    let mut pushed = [0u8; 4];
    pushed[0] = marker.len() as u8;
    pushed[1..].copy_from_slice(marker);

    cursor.eat(&pushed) || cursor.eat(marker)
}

/// Consumes an optional tag in any of its accepted encodings.
fn skip_tag(cursor: &mut Cursor<'_>, tag: u8) {
    let pushnum = OP_PUSHNUM_1.to_u8() + tag - 1;
    let _ = cursor.eat(&[1, tag]) || cursor.eat(&[pushnum]) || cursor.eat(&[tag]);
}
