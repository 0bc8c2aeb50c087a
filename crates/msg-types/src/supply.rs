//! Dividends and destruction of supply.

use xcp_primitives::{AssetId, NetworkParams, asset::XCP_ASSET_ID, asset_name};

use crate::errors::{DecodeError, DecodeResult};
use crate::payload::Payload;
use crate::reader::BufReader;
use crate::text::bytes_or_text;

/// Longest tag a destroy may carry.
pub const MAX_DESTROY_TAG_LEN: usize = 34;

/// `quantity_per_unit u64 | asset u64 [| dividend_asset u64]`
pub(crate) fn decode_dividend(buf: &[u8], _network: &NetworkParams) -> DecodeResult<Payload> {
    let mut reader = BufReader::with_min_len(buf, "dividend", 16)?;
    let quantity_per_unit = reader.read_u64()?;
    let asset = reader.read_u64()?;
    let dividend_asset = reader
        .read_optional_u64()
        .map_or(XCP_ASSET_ID, AssetId::from);

    Ok(Payload::Dividend {
        quantity_per_unit: quantity_per_unit.to_string(),
        asset: asset_name(asset.into()),
        dividend_asset: asset_name(dividend_asset),
    })
}

/// `asset u64 | quantity u64 [| tag]`, the tag running to the end.
pub(crate) fn decode_destroy(buf: &[u8], _network: &NetworkParams) -> DecodeResult<Payload> {
    let mut reader = BufReader::with_min_len(buf, "destroy", 16)?;
    let asset = reader.read_u64()?;
    let quantity = reader.read_u64()?;

    let tag = reader.rest();
    if tag.len() > MAX_DESTROY_TAG_LEN {
        return Err(DecodeError::TagTooLong(tag.len()));
    }

    Ok(Payload::Destroy {
        asset: asset_name(asset.into()),
        quantity: quantity.to_string(),
        tag: bytes_or_text(tag, None),
    })
}
