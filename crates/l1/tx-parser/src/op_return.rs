//! `OP_RETURN` carrier.

use xcp_l1_txfmt::{OpReturnData, OpReturnParser};
use xcp_msg_fmt::{Msg, MsgRef};

use crate::config::ParseConfig;
use crate::error::{ExtractError, ExtractResult};
use crate::types::ParsedMessage;

/// Extracts and decodes the message in an `OP_RETURN` output script.
///
/// The RC4 key is the first input's txid exactly as its hex reads, without
/// reversing to internal byte order.
pub fn try_parse_op_return(
    script: &[u8],
    first_input_txid_hex: &str,
    config: &ParseConfig,
) -> ExtractResult<ParsedMessage> {
    let key = hex::decode(first_input_txid_hex).map_err(ExtractError::InvalidTxidHex)?;
    let parser = OpReturnParser::new(*config.magic());

    match parser.try_parse_script(script, &key)? {
        OpReturnData::TaprootCommit => Ok(ParsedMessage::taproot_commit(config.magic())),
        OpReturnData::Message(framed) => {
            let msg = MsgRef::try_from(framed.as_slice())?;
            Ok(ParsedMessage::decode(msg.ty(), msg.body(), config.network()))
        }
    }
}

#[cfg(test)]
mod tests {
    use xcp_l1_txfmt::{PROTOCOL_MAGIC, TxFmtError, script::PushWidth};
    use xcp_msg_types::Payload;

    use super::*;

    const TXID: &str = "6f3a1c9e0b0d2f4e5a6b7c8d9e0f1a2b3c4d5e6f708192a3b4c5d6e7f8091a2b";

    fn encrypted(message: &[u8]) -> Vec<u8> {
        let key = hex::decode(TXID).unwrap();
        OpReturnParser::new(PROTOCOL_MAGIC)
            .encode_script(message, &key, PushWidth::PushData1)
            .unwrap()
    }

    #[test]
    fn test_decodes_cancel() {
        let mut message = vec![70];
        message.extend_from_slice(&[0xab; 32]);

        let parsed =
            try_parse_op_return(&encrypted(&message), TXID, &ParseConfig::default()).unwrap();
        assert_eq!(parsed.message_name(), "cancel");
        assert_eq!(parsed.message_id(), 70);
        assert_eq!(
            parsed.params(),
            &Payload::Cancel {
                offer_hash: "ab".repeat(32)
            }
        );
    }

    #[test]
    fn test_long_form_id() {
        let mut message = vec![0x00, 0x00, 0x00, 0x00, 0x0d];
        message.push(0x00);

        let parsed =
            try_parse_op_return(&encrypted(&message), TXID, &ParseConfig::default()).unwrap();
        assert_eq!(parsed.message_name(), "dispense");
    }

    #[test]
    fn test_truncated_long_form() {
        let err = try_parse_op_return(&encrypted(&[0x00, 0x01]), TXID, &ParseConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ExtractError::Framing(xcp_msg_fmt::Error::BufTooShort(2))
        ));
    }

    #[test]
    fn test_bad_txid_hex() {
        assert!(matches!(
            try_parse_op_return(&encrypted(&[70]), "zz", &ParseConfig::default()),
            Err(ExtractError::InvalidTxidHex(_))
        ));
    }

    #[test]
    fn test_other_magic_rejected() {
        let config = ParseConfig::default().with_magic("XCPTEST1".parse().unwrap());
        assert!(matches!(
            try_parse_op_return(&encrypted(&[70]), TXID, &config),
            Err(ExtractError::OpReturn(TxFmtError::MismatchMagic(_)))
        ));
    }
}
