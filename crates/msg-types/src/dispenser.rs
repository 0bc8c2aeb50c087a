//! Dispensers: opening or refilling a dispenser and dispensing from it.

use xcp_primitives::{NetworkParams, asset_name, short_address_to_string};

use crate::errors::{DecodeError, DecodeResult};
use crate::payload::Payload;
use crate::reader::BufReader;

/// Length of the short addresses a dispenser may carry.
const DISPENSER_ADDRESS_LEN: usize = 21;

/// ```text
/// asset u64 | give_quantity u64 | escrow_quantity u64 | mainchainrate u64
/// | status u8 [| action_address [21] [| oracle_address [21]]]
/// ```
pub(crate) fn decode_dispenser(buf: &[u8], network: &NetworkParams) -> DecodeResult<Payload> {
    let mut reader = BufReader::with_min_len(buf, "dispenser", 33)?;
    let asset = reader.read_u64()?;
    let give_quantity = reader.read_u64()?;
    let escrow_quantity = reader.read_u64()?;
    let mainchainrate = reader.read_u64()?;
    let status = reader.read_u8()?;

    let mut read_address = || {
        reader
            .read_optional(DISPENSER_ADDRESS_LEN)
            .map(|short| short_address_to_string(short, network))
    };
    let action_address = read_address();
    let oracle_address = read_address();

    Ok(Payload::Dispenser {
        asset: asset_name(asset.into()),
        give_quantity: give_quantity.to_string(),
        escrow_quantity: escrow_quantity.to_string(),
        mainchainrate: mainchainrate.to_string(),
        status,
        action_address,
        oracle_address,
    })
}

/// Exactly `[0x00]`.
pub(crate) fn decode_dispense(buf: &[u8], _network: &NetworkParams) -> DecodeResult<Payload> {
    if buf != [0x00] {
        return Err(DecodeError::InvalidDispense);
    }

    Ok(Payload::Dispense {
        data: hex::encode(buf),
    })
}
