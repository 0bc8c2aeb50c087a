//! Asset issuance, including subassets.
//!
//! ```text
//! [asset_id, quantity, divisible, lock, reset, description?, mime_type?]
//! [asset_id, quantity, divisible, lock, reset, compacted_longname, description?, mime_type?]
//! ```

use xcp_primitives::{NetworkParams, asset_name, expand_subasset_longname};

use crate::errors::DecodeResult;
use crate::fields::CborFields;
use crate::payload::Payload;

pub(crate) fn decode_issuance(buf: &[u8], _network: &NetworkParams) -> DecodeResult<Payload> {
    let fields = CborFields::decode(buf, "issuance", 5)?;
    let asset_id = fields.asset_id(0)?;
    let mime_type = fields.opt_text(6)?;
    let description = fields
        .opt_bytes_or_text(5, mime_type)?
        .unwrap_or_default();

    Ok(Payload::Issuance {
        asset: asset_name(asset_id),
        asset_id: asset_id.to_string(),
        quantity: fields.quantity(1)?,
        divisible: fields.bool(2)?,
        lock: fields.bool(3)?,
        reset: fields.bool(4)?,
        description,
        mime_type: mime_type.map(str::to_owned),
    })
}

pub(crate) fn decode_issuance_subasset(
    buf: &[u8],
    _network: &NetworkParams,
) -> DecodeResult<Payload> {
    let fields = CborFields::decode(buf, "issuance_subasset", 6)?;
    let asset_id = fields.asset_id(0)?;
    let mime_type = fields.opt_text(7)?;
    let description = fields
        .opt_bytes_or_text(6, mime_type)?
        .unwrap_or_default();

    Ok(Payload::IssuanceSubasset {
        asset: asset_name(asset_id),
        asset_id: asset_id.to_string(),
        quantity: fields.quantity(1)?,
        divisible: fields.bool(2)?,
        lock: fields.bool(3)?,
        reset: fields.bool(4)?,
        subasset_longname: expand_subasset_longname(fields.bytes(5)?),
        description,
        mime_type: mime_type.map(str::to_owned),
    })
}
