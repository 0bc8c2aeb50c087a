//! Taproot reveal transactions carrying an envelope in their witness.

use bitcoin::Transaction;
use ciborium::value::Value;
use tracing::*;
use xcp_l1_envelope_fmt::{
    ord::OrdEnvelope,
    parser::{Envelope, has_envelope_marker, parse_envelope},
};
use xcp_msg_fmt::{Msg, MsgRef, TypeId, encode_long_form};

use crate::config::ParseConfig;
use crate::error::{ExtractError, ExtractResult};
use crate::types::ParsedMessage;

/// Extracts and decodes the envelope message of a raw reveal transaction.
pub fn try_parse_reveal_tx(raw_tx_hex: &str, config: &ParseConfig) -> ExtractResult<ParsedMessage> {
    let raw = hex::decode(raw_tx_hex.trim()).map_err(ExtractError::InvalidTxHex)?;
    let tx: Transaction = bitcoin::consensus::deserialize(&raw)?;

    let script = find_envelope_script(&tx)?;
    let framed = match parse_envelope(script)? {
        Envelope::Generic(buf) => match config.magic().strip_from(&buf) {
            Some(stripped) => stripped.to_vec(),
            None => buf,
        },
        Envelope::Ord(ord) => reframe_ord(&ord)?,
    };

    let msg = MsgRef::try_from(framed.as_slice())?;
    trace!(ty = msg.ty(), len = msg.body().len(), "framed envelope message");
    Ok(ParsedMessage::decode(msg.ty(), msg.body(), config.network()))
}

/// Finds the first witness item opening an envelope.  Every item of each
/// stack is a candidate except the last one.
fn find_envelope_script(tx: &Transaction) -> ExtractResult<&[u8]> {
    if tx.input.iter().all(|txin| txin.witness.is_empty()) {
        return Err(ExtractError::NoWitness);
    }

    tx.input
        .iter()
        .filter(|txin| txin.witness.len() >= 2)
        .find_map(|txin| {
            let candidates = txin.witness.len() - 1;
            txin.witness
                .iter()
                .take(candidates)
                .find(|item| has_envelope_marker(item))
        })
        .ok_or(ExtractError::NoEnvelope)
}

/// Rewrites ord metadata `[id, fields..]` as a long form framed message whose
/// body is `[fields.., mime_type]`.
///
/// The mime type always lands right after the last metadata field, whatever
/// the message.  A send without a memo therefore decodes with the mime type
/// as its memo.
fn reframe_ord(ord: &OrdEnvelope) -> ExtractResult<Vec<u8>> {
    let value: Value = ciborium::from_reader(ord.metadata())
        .map_err(|e| ExtractError::OrdCbor(e.to_string()))?;
    let Value::Array(mut items) = value else {
        return Err(ExtractError::OrdNotArray);
    };
    if items.is_empty() {
        return Err(ExtractError::OrdEmptyArray);
    }

    let id = match items.remove(0) {
        Value::Integer(id) => TypeId::try_from(id).map_err(|_| ExtractError::OrdInvalidTypeId)?,
        _ => return Err(ExtractError::OrdInvalidTypeId),
    };
    items.push(Value::Text(ord.mime_type().to_owned()));

    let mut framed = encode_long_form(id).to_vec();
    ciborium::into_writer(&Value::Array(items), &mut framed)
        .map_err(|e| ExtractError::OrdCbor(e.to_string()))?;
    Ok(framed)
}

#[cfg(test)]
mod tests {
    use bitcoin::{
        Amount, OutPoint, ScriptBuf, Sequence, TxIn, TxOut, Witness, absolute::LockTime,
        consensus::encode::serialize_hex, transaction::Version,
    };
    use xcp_l1_envelope_fmt::builder::{build_envelope_script, build_ord_envelope_script};
    use xcp_l1_txfmt::{PROTOCOL_MAGIC, script::PushWidth};
    use xcp_msg_types::Payload;

    use super::*;

    const CONTROL_BLOCK: [u8; 33] = [0xc0; 33];

    fn reveal_tx(witnesses: Vec<Vec<Vec<u8>>>) -> String {
        let input = witnesses
            .into_iter()
            .map(|items| TxIn {
                previous_output: OutPoint::null(),
                script_sig: ScriptBuf::new(),
                sequence: Sequence::MAX,
                witness: Witness::from_slice(&items),
            })
            .collect();

        let tx = Transaction {
            version: Version::TWO,
            lock_time: LockTime::ZERO,
            input,
            output: vec![TxOut {
                value: Amount::from_sat(546),
                script_pubkey: ScriptBuf::new(),
            }],
        };
        serialize_hex(&tx)
    }

    fn cbor(value: &Value) -> Vec<u8> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf).unwrap();
        buf
    }

    #[test]
    fn test_generic_envelope_with_magic() {
        let mut payload = PROTOCOL_MAGIC.as_bytes().to_vec();
        payload.push(13);
        payload.push(0x00);
        let script = build_envelope_script(&payload, PushWidth::Minimal);

        let raw = reveal_tx(vec![vec![vec![0x01; 64], script, CONTROL_BLOCK.to_vec()]]);
        let parsed = try_parse_reveal_tx(&raw, &ParseConfig::default()).unwrap();
        assert_eq!(parsed.message_name(), "dispense");
    }

    #[test]
    fn test_generic_envelope_without_magic() {
        let script = build_envelope_script(&[13, 0x00], PushWidth::Minimal);

        let raw = reveal_tx(vec![vec![script, CONTROL_BLOCK.to_vec()]]);
        let parsed = try_parse_reveal_tx(&raw, &ParseConfig::default()).unwrap();
        assert_eq!(parsed.message_id(), 13);
    }

    #[test]
    fn test_ord_envelope_reframed() {
        let metadata = cbor(&Value::Array(vec![
            Value::Integer(91.into()),
            Value::Integer(18_279.into()),
            Value::Integer(250.into()),
        ]));
        let script = build_ord_envelope_script("text/plain", &metadata, None);

        let raw = reveal_tx(vec![vec![script, CONTROL_BLOCK.to_vec()]]);
        let parsed = try_parse_reveal_tx(&raw, &ParseConfig::default()).unwrap();
        assert_eq!(parsed.message_name(), "fairmint");
        assert_eq!(
            parsed.params(),
            &Payload::Fairmint {
                asset: "AAAA".into(),
                quantity: "250".into(),
            }
        );
    }

    #[test]
    fn test_ord_send_mime_as_memo() {
        let mut short = vec![0x01];
        short.extend_from_slice(&[0; 20]);
        let metadata = cbor(&Value::Array(vec![
            Value::Integer(2.into()),
            Value::Integer(1.into()),
            Value::Integer(5.into()),
            Value::Bytes(short),
        ]));
        let script = build_ord_envelope_script("text/plain", &metadata, None);

        let raw = reveal_tx(vec![vec![script, CONTROL_BLOCK.to_vec()]]);
        let parsed = try_parse_reveal_tx(&raw, &ParseConfig::default()).unwrap();
        let Payload::EnhancedSend { memo, .. } = parsed.params() else {
            panic!("test: expected enhanced send");
        };
        assert_eq!(memo.as_deref(), Some("text/plain"));
    }

    #[test]
    fn test_reframe_layout() {
        let metadata = cbor(&Value::Array(vec![
            Value::Integer(2.into()),
            Value::Integer(1.into()),
        ]));
        let script = build_ord_envelope_script("text/plain", &metadata, None);
        let Envelope::Ord(ord) = parse_envelope(&script).unwrap() else {
            panic!("test: expected ord envelope");
        };

        let framed = reframe_ord(&ord).unwrap();
        assert_eq!(&framed[..5], &[0, 0, 0, 0, 2]);
        assert_eq!(
            framed[5..],
            cbor(&Value::Array(vec![
                Value::Integer(1.into()),
                Value::Text("text/plain".into()),
            ]))
        );
    }

    #[test]
    fn test_ord_issuance_mime_in_last_slot() {
        let metadata = cbor(&Value::Array(vec![
            Value::Integer(22.into()),
            Value::Integer(17576.into()),
            Value::Integer(10.into()),
            Value::Bool(true),
            Value::Bool(false),
            Value::Bool(false),
            Value::Bytes(b"hello".to_vec()),
        ]));
        let script = build_ord_envelope_script("text/plain", &metadata, None);

        let raw = reveal_tx(vec![vec![script, CONTROL_BLOCK.to_vec()]]);
        let parsed = try_parse_reveal_tx(&raw, &ParseConfig::default()).unwrap();
        let Payload::Issuance {
            description,
            mime_type,
            ..
        } = parsed.into_params()
        else {
            panic!("test: expected issuance");
        };
        assert_eq!(description, "hello");
        assert_eq!(mime_type.as_deref(), Some("text/plain"));
    }

    #[test]
    fn test_ord_metadata_errors() {
        for (metadata, expect_empty) in [
            (cbor(&Value::Array(vec![])), true),
            (cbor(&Value::Integer(2.into())), false),
        ] {
            let script = build_ord_envelope_script("text/plain", &metadata, None);
            let Envelope::Ord(ord) = parse_envelope(&script).unwrap() else {
                panic!("test: expected ord envelope");
            };
            let err = reframe_ord(&ord).unwrap_err();
            if expect_empty {
                assert!(matches!(err, ExtractError::OrdEmptyArray));
            } else {
                assert!(matches!(err, ExtractError::OrdNotArray));
            }
        }

        let script = build_ord_envelope_script("text/plain", &[0xff, 0xff], None);
        let Envelope::Ord(ord) = parse_envelope(&script).unwrap() else {
            panic!("test: expected ord envelope");
        };
        assert!(matches!(reframe_ord(&ord), Err(ExtractError::OrdCbor(_))));
    }

    #[test]
    fn test_envelope_in_second_input() {
        let script = build_envelope_script(&[13, 0x00], PushWidth::PushData2);
        let raw = reveal_tx(vec![
            vec![vec![0x02; 64]],
            vec![vec![0x01; 64], script, CONTROL_BLOCK.to_vec()],
        ]);

        let parsed = try_parse_reveal_tx(&raw, &ParseConfig::default()).unwrap();
        assert_eq!(parsed.message_name(), "dispense");
    }

    #[test]
    fn test_last_witness_item_ignored() {
        let script = build_envelope_script(&[13, 0x00], PushWidth::Minimal);
        let raw = reveal_tx(vec![vec![vec![0x01; 64], script]]);
        let raw_single = reveal_tx(vec![vec![build_envelope_script(&[13, 0], PushWidth::Minimal)]]);

        // Only the last item opens an envelope, so nothing is found.
        assert!(matches!(
            try_parse_reveal_tx(&raw, &ParseConfig::default()),
            Err(ExtractError::NoEnvelope)
        ));
        assert!(matches!(
            try_parse_reveal_tx(&raw_single, &ParseConfig::default()),
            Err(ExtractError::NoEnvelope)
        ));
    }

    #[test]
    fn test_no_witness() {
        let raw = reveal_tx(vec![vec![]]);
        assert!(matches!(
            try_parse_reveal_tx(&raw, &ParseConfig::default()),
            Err(ExtractError::NoWitness)
        ));
    }

    #[test]
    fn test_invalid_hex() {
        assert!(matches!(
            try_parse_reveal_tx("not hex", &ParseConfig::default()),
            Err(ExtractError::InvalidTxHex(_))
        ));
        assert!(matches!(
            try_parse_reveal_tx("00", &ParseConfig::default()),
            Err(ExtractError::TxDecode(_))
        ));
    }
}
