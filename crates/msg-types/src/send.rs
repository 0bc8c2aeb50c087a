//! Asset transfers: legacy send, enhanced send and sweep.

use xcp_primitives::{NetworkParams, asset_name, short_address_to_string};

use crate::errors::DecodeResult;
use crate::fields::CborFields;
use crate::payload::Payload;
use crate::reader::BufReader;

/// `asset u64 | quantity u64`
pub(crate) fn decode_send(buf: &[u8], _network: &NetworkParams) -> DecodeResult<Payload> {
    let mut reader = BufReader::with_min_len(buf, "send", 16)?;
    let asset = reader.read_u64()?;
    let quantity = reader.read_u64()?;

    Ok(Payload::Send {
        asset: asset_name(asset.into()),
        quantity: quantity.to_string(),
    })
}

/// `[asset_id, quantity, short_address, memo?]`
pub(crate) fn decode_enhanced_send(buf: &[u8], network: &NetworkParams) -> DecodeResult<Payload> {
    let fields = CborFields::decode(buf, "enhanced_send", 3)?;

    Ok(Payload::EnhancedSend {
        asset: asset_name(fields.asset_id(0)?),
        quantity: fields.quantity(1)?,
        address: short_address_to_string(fields.bytes(2)?, network),
        memo: fields.opt_bytes_or_text(3, None)?,
    })
}

/// `[short_address, flags, memo?]`
pub(crate) fn decode_sweep(buf: &[u8], network: &NetworkParams) -> DecodeResult<Payload> {
    let fields = CborFields::decode(buf, "sweep", 2)?;

    Ok(Payload::Sweep {
        destination: short_address_to_string(fields.bytes(0)?, network),
        flags: fields.u64(1)?,
        memo: fields.opt_bytes_or_text(2, None)?,
    })
}

#[cfg(test)]
mod tests {
    use ciborium::value::Value;

    use super::*;
    use crate::errors::DecodeError;
    use crate::test_utils::cbor;

    fn p2pkh(hash: u8) -> Vec<u8> {
        let mut short = vec![0x01];
        short.extend_from_slice(&[hash; 20]);
        short
    }

    #[test]
    fn test_send() {
        let mut buf = 1u64.to_be_bytes().to_vec();
        buf.extend_from_slice(&500u64.to_be_bytes());

        let payload = decode_send(&buf, &NetworkParams::mainnet()).unwrap();
        assert_eq!(
            payload,
            Payload::Send {
                asset: "XCP".into(),
                quantity: "500".into()
            }
        );
    }

    #[test]
    fn test_enhanced_send() {
        let buf = cbor(vec![
            Value::Integer(1.into()),
            Value::Integer(1000.into()),
            Value::Bytes(p2pkh(0)),
        ]);

        let payload = decode_enhanced_send(&buf, &NetworkParams::mainnet()).unwrap();
        assert_eq!(
            payload,
            Payload::EnhancedSend {
                asset: "XCP".into(),
                quantity: "1000".into(),
                address: "1111111111111111111114oLvT2".into(),
                memo: None,
            }
        );
    }

    #[test]
    fn test_enhanced_send_memo() {
        let buf = cbor(vec![
            Value::Integer(17576.into()),
            Value::Integer(1.into()),
            Value::Bytes(p2pkh(0)),
            Value::Bytes(vec![0xbe, 0xef]),
        ]);

        let Payload::EnhancedSend { asset, memo, .. } =
            decode_enhanced_send(&buf, &NetworkParams::mainnet()).unwrap()
        else {
            panic!("test: expected enhanced send");
        };
        assert_eq!(asset, "YYZ");
        assert_eq!(memo.as_deref(), Some("beef"));
    }

    #[test]
    fn test_enhanced_send_too_few_fields() {
        let buf = cbor(vec![Value::Integer(1.into()), Value::Integer(1.into())]);
        assert!(matches!(
            decode_enhanced_send(&buf, &NetworkParams::mainnet()),
            Err(DecodeError::TooFewFields { expected: 3, actual: 2, .. })
        ));
    }

    #[test]
    fn test_sweep() {
        let buf = cbor(vec![
            Value::Bytes(p2pkh(0)),
            Value::Integer(3.into()),
            Value::Text("bye".into()),
        ]);

        let payload = decode_sweep(&buf, &NetworkParams::mainnet()).unwrap();
        assert_eq!(
            payload,
            Payload::Sweep {
                destination: "1111111111111111111114oLvT2".into(),
                flags: 3,
                memo: Some("bye".into()),
            }
        );
    }
}
