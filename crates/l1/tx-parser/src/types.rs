use serde::Serialize;
use xcp_l1_txfmt::MagicBytes;
use xcp_msg_fmt::{TypeId, message_type_name};
use xcp_msg_types::{Payload, decode};
use xcp_primitives::NetworkParams;

/// Name reported for taproot commit transactions.
pub const TAPROOT_COMMIT_NAME: &str = "taproot_commit";

/// A decoded protocol message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedMessage {
    message_name: String,
    message_id: TypeId,
    params: Payload,
}

impl ParsedMessage {
    /// Decodes a framed message body.
    pub fn decode(id: TypeId, body: &[u8], network: &NetworkParams) -> Self {
        Self {
            message_name: message_type_name(id).to_owned(),
            message_id: id,
            params: decode(id, body, network),
        }
    }

    /// The commit half of a commit/reveal pair, carrying only the magic.
    pub fn taproot_commit(magic: &MagicBytes) -> Self {
        Self {
            message_name: TAPROOT_COMMIT_NAME.to_owned(),
            message_id: 0,
            params: Payload::TaprootCommit {
                data: magic.to_string(),
            },
        }
    }

    /// Canonical name of the message type.
    pub fn message_name(&self) -> &str {
        &self.message_name
    }

    /// Message type id.
    pub fn message_id(&self) -> TypeId {
        self.message_id
    }

    /// Decoded payload.
    pub fn params(&self) -> &Payload {
        &self.params
    }

    /// Consumes the message, returning its payload.
    pub fn into_params(self) -> Payload {
        self.params
    }
}
