//! Fair minting.
//!
//! ```text
//! fairminter: [asset_id, asset_parent_id, price, quantity_by_price,
//!              max_mint_per_tx, hard_cap, premint_quantity, start_block,
//!              end_block, soft_cap, soft_cap_deadline_block,
//!              minted_asset_commission_int, burn_payment, lock_description,
//!              lock_quantity, divisible, description?, mime_type?]
//! fairmint:   [asset_id, quantity?]
//! ```

use xcp_primitives::{NetworkParams, asset_name};

use crate::errors::DecodeResult;
use crate::fields::CborFields;
use crate::payload::Payload;

const FAIRMINTER_REQUIRED_FIELDS: usize = 16;

pub(crate) fn decode_fairminter(buf: &[u8], _network: &NetworkParams) -> DecodeResult<Payload> {
    let fields = CborFields::decode(buf, "fairminter", FAIRMINTER_REQUIRED_FIELDS)?;
    let mime_type = fields.opt_text(17)?;
    let description = fields
        .opt_bytes_or_text(16, mime_type)?
        .unwrap_or_default();

    // A zero parent id means the asset is not a subasset.
    let asset_parent = match fields.asset_id(1)? {
        0 => String::new(),
        parent => asset_name(parent),
    };

    Ok(Payload::Fairminter {
        asset: asset_name(fields.asset_id(0)?),
        asset_parent,
        price: fields.quantity(2)?,
        quantity_by_price: fields.quantity(3)?,
        max_mint_per_tx: fields.quantity(4)?,
        hard_cap: fields.quantity(5)?,
        premint_quantity: fields.quantity(6)?,
        start_block: fields.u64(7)?,
        end_block: fields.u64(8)?,
        soft_cap: fields.quantity(9)?,
        soft_cap_deadline_block: fields.u64(10)?,
        minted_asset_commission_int: fields.quantity(11)?,
        burn_payment: fields.bool(12)?,
        lock_description: fields.bool(13)?,
        lock_quantity: fields.bool(14)?,
        divisible: fields.bool(15)?,
        description,
        mime_type: mime_type.map(str::to_owned),
    })
}

pub(crate) fn decode_fairmint(buf: &[u8], _network: &NetworkParams) -> DecodeResult<Payload> {
    let fields = CborFields::decode(buf, "fairmint", 1)?;
    let quantity = match fields.get(1) {
        Some(_) => fields.quantity(1)?,
        None => "0".to_owned(),
    };

    Ok(Payload::Fairmint {
        asset: asset_name(fields.asset_id(0)?),
        quantity,
    })
}
