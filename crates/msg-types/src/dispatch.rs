//! Selects the decoder for a message type id.

use tracing::*;
use xcp_msg_fmt::{MessageType, TypeId};
use xcp_primitives::NetworkParams;

use crate::broadcast::decode_broadcast;
use crate::dex::{decode_btc_pay, decode_cancel, decode_order};
use crate::dispenser::{decode_dispense, decode_dispenser};
use crate::errors::DecodeResult;
use crate::fairminter::{decode_fairmint, decode_fairminter};
use crate::issuance::{decode_issuance, decode_issuance_subasset};
use crate::payload::Payload;
use crate::send::{decode_enhanced_send, decode_send, decode_sweep};
use crate::supply::{decode_destroy, decode_dividend};
use crate::utxo::{decode_attach, decode_detach};

/// Signature shared by the payload decoders.
type DecodeFn = fn(&[u8], &NetworkParams) -> DecodeResult<Payload>;

/// Returns the decoder for a message type, if one is implemented.
fn decoder_for(ty: MessageType) -> Option<DecodeFn> {
    let decoder: DecodeFn = match ty {
        MessageType::Send => decode_send,
        MessageType::EnhancedSend => decode_enhanced_send,
        MessageType::Sweep => decode_sweep,
        MessageType::Order => decode_order,
        MessageType::BtcPay => decode_btc_pay,
        MessageType::Dispenser => decode_dispenser,
        MessageType::Dispense => decode_dispense,
        MessageType::Issuance => decode_issuance,
        MessageType::IssuanceSubasset => decode_issuance_subasset,
        MessageType::Broadcast => decode_broadcast,
        MessageType::Dividend => decode_dividend,
        MessageType::Cancel => decode_cancel,
        MessageType::Fairminter => decode_fairminter,
        MessageType::Fairmint => decode_fairmint,
        MessageType::Attach => decode_attach,
        MessageType::Detach => decode_detach,
        MessageType::Destroy => decode_destroy,
        MessageType::MpmaSend
        | MessageType::Bet
        | MessageType::Burn
        | MessageType::Rps
        | MessageType::RpsResolve
        | MessageType::Utxo => return None,
    };
    Some(decoder)
}

/// Decodes a message payload.
///
/// Never fails: ids without a decoder yield [`Payload::Unknown`] with no
/// error, and payloads a decoder rejects yield [`Payload::Unknown`] carrying
/// the failure.
pub fn decode(id: TypeId, payload: &[u8], network: &NetworkParams) -> Payload {
    let Some(decoder) = MessageType::from_id(id).and_then(decoder_for) else {
        debug!(%id, "no decoder for message type");
        return Payload::unknown(payload, None);
    };

    match decoder(payload, network) {
        Ok(decoded) => decoded,
        Err(e) => {
            debug!(%id, %e, "failed to decode payload");
            Payload::unknown(payload, Some(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use ciborium::value::Value;
    use serde_json::json;

    use super::*;
    use crate::test_utils::cbor;

    #[test]
    fn test_unknown_id() {
        let payload = decode(999, &[0x01, 0x02], &NetworkParams::mainnet());
        assert_eq!(
            payload,
            Payload::Unknown {
                raw: "0102".into(),
                error: None
            }
        );
    }

    #[test]
    fn test_registered_without_decoder() {
        // Bet is registered but has no decoder.
        let payload = decode(40, &[0xaa], &NetworkParams::mainnet());
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({ "raw": "aa" }));
    }

    #[test]
    fn test_decoder_error_reported() {
        let payload = decode(13, &[0x01], &NetworkParams::mainnet());
        let Payload::Unknown { raw, error } = payload else {
            panic!("test: expected unknown");
        };
        assert_eq!(raw, "01");
        assert_eq!(error.as_deref(), Some("dispense payload must be exactly [0x00]"));
    }

    #[test]
    fn test_issuance_ids_share_decoder() {
        let buf = cbor(vec![
            Value::Integer(17576.into()),
            Value::Integer(1.into()),
            Value::Bool(false),
            Value::Bool(false),
            Value::Bool(false),
        ]);

        for id in [20, 22] {
            let payload = decode(id, &buf, &NetworkParams::mainnet());
            assert!(matches!(payload, Payload::Issuance { .. }), "id {id}");
        }
    }

    #[test]
    fn test_enhanced_send_json_shape() {
        let mut short = vec![0x01];
        short.extend_from_slice(&[0; 20]);
        let buf = cbor(vec![
            Value::Integer(1.into()),
            Value::Integer(1000.into()),
            Value::Bytes(short),
        ]);

        let payload = decode(2, &buf, &NetworkParams::mainnet());
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "asset": "XCP",
                "quantity": "1000",
                "address": "1111111111111111111114oLvT2",
                "memo": null,
            })
        );
    }
}
