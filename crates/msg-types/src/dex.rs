//! Decentralized exchange messages.

use xcp_primitives::{NetworkParams, asset_name};

use crate::errors::DecodeResult;
use crate::payload::Payload;
use crate::reader::BufReader;

const HASH_LEN: usize = 32;

/// ```text
/// give_asset u64 | give_quantity u64 | get_asset u64 | get_quantity u64
/// | expiration u16 [| fee_required u64]
/// ```
pub(crate) fn decode_order(buf: &[u8], _network: &NetworkParams) -> DecodeResult<Payload> {
    let mut reader = BufReader::with_min_len(buf, "order", 34)?;
    let give_asset = reader.read_u64()?;
    let give_quantity = reader.read_u64()?;
    let get_asset = reader.read_u64()?;
    let get_quantity = reader.read_u64()?;
    let expiration = reader.read_u16()?;
    let fee_required = reader.read_optional_u64().unwrap_or(0);

    Ok(Payload::Order {
        give_asset: asset_name(give_asset.into()),
        give_quantity: give_quantity.to_string(),
        get_asset: asset_name(get_asset.into()),
        get_quantity: get_quantity.to_string(),
        expiration,
        fee_required: fee_required.to_string(),
    })
}

/// `tx0_hash [32] | tx1_hash [32]`
pub(crate) fn decode_btc_pay(buf: &[u8], _network: &NetworkParams) -> DecodeResult<Payload> {
    let mut reader = BufReader::with_min_len(buf, "btc_pay", 2 * HASH_LEN)?;
    let tx0_hash = hex::encode(reader.read_arr::<HASH_LEN>()?);
    let tx1_hash = hex::encode(reader.read_arr::<HASH_LEN>()?);
    let order_match_id = format!("{tx0_hash}_{tx1_hash}");

    Ok(Payload::BtcPay {
        tx0_hash,
        tx1_hash,
        order_match_id,
    })
}

/// `offer_hash [32]`
pub(crate) fn decode_cancel(buf: &[u8], _network: &NetworkParams) -> DecodeResult<Payload> {
    let mut reader = BufReader::with_min_len(buf, "cancel", HASH_LEN)?;
    let offer_hash = hex::encode(reader.read_arr::<HASH_LEN>()?);
    Ok(Payload::Cancel { offer_hash })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DecodeError;

    fn order_buf(fee: Option<u64>) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&1u64.to_be_bytes());
        buf.extend_from_slice(&100u64.to_be_bytes());
        buf.extend_from_slice(&0u64.to_be_bytes());
        buf.extend_from_slice(&5000u64.to_be_bytes());
        buf.extend_from_slice(&1000u16.to_be_bytes());
        if let Some(fee) = fee {
            buf.extend_from_slice(&fee.to_be_bytes());
        }
        buf
    }

    #[test]
    fn test_order() {
        let payload = decode_order(&order_buf(Some(7)), &NetworkParams::mainnet()).unwrap();
        assert_eq!(
            payload,
            Payload::Order {
                give_asset: "XCP".into(),
                give_quantity: "100".into(),
                get_asset: "BTC".into(),
                get_quantity: "5000".into(),
                expiration: 1000,
                fee_required: "7".into(),
            }
        );
    }

    #[test]
    fn test_order_without_fee() {
        let mut buf = order_buf(None);
        // Fewer than 8 trailing bytes are not a fee.
        buf.extend_from_slice(&[0xff; 4]);

        let Payload::Order { fee_required, .. } =
            decode_order(&buf, &NetworkParams::mainnet()).unwrap()
        else {
            panic!("test: expected order");
        };
        assert_eq!(fee_required, "0");
    }

    #[test]
    fn test_order_too_short() {
        assert!(matches!(
            decode_order(&[0; 33], &NetworkParams::mainnet()),
            Err(DecodeError::TooShort { expected: 34, actual: 33, .. })
        ));
    }

    #[test]
    fn test_btc_pay() {
        let mut buf = vec![0xaa; 32];
        buf.extend_from_slice(&[0xbb; 32]);

        let Payload::BtcPay {
            tx0_hash,
            tx1_hash,
            order_match_id,
        } = decode_btc_pay(&buf, &NetworkParams::mainnet()).unwrap()
        else {
            panic!("test: expected btc_pay");
        };
        assert_eq!(tx0_hash, "aa".repeat(32));
        assert_eq!(tx1_hash, "bb".repeat(32));
        assert_eq!(order_match_id, format!("{}_{}", "aa".repeat(32), "bb".repeat(32)));
    }

    #[test]
    fn test_cancel() {
        let payload = decode_cancel(&[0x01; 40], &NetworkParams::mainnet()).unwrap();
        assert_eq!(
            payload,
            Payload::Cancel {
                offer_hash: "01".repeat(32)
            }
        );
        assert!(decode_cancel(&[0x01; 31], &NetworkParams::mainnet()).is_err());
    }
}
