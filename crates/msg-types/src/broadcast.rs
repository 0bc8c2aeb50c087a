//! Oracle broadcasts.

use xcp_primitives::NetworkParams;

use crate::errors::DecodeResult;
use crate::fields::CborFields;
use crate::payload::Payload;

/// `[timestamp, value, fee_fraction_int, text?, mime_type?]`
pub(crate) fn decode_broadcast(buf: &[u8], _network: &NetworkParams) -> DecodeResult<Payload> {
    let fields = CborFields::decode(buf, "broadcast", 3)?;
    let mime_type = fields.opt_text(4)?;
    let text = fields.opt_bytes_or_text(3, mime_type)?.unwrap_or_default();

    Ok(Payload::Broadcast {
        timestamp: fields.u64(0)?,
        value: fields.number(1)?,
        fee_fraction_int: fields.u64(2)?,
        text,
        mime_type: mime_type.map(str::to_owned),
    })
}
