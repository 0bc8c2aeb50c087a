//! Extracts Counterparty messages from Bitcoin transactions.
//!
//! Two carriers are supported:
//!
//! - `OP_RETURN` outputs, RC4 encrypted with the first input's txid.  See
//!   [`parse_op_return`].
//! - Taproot reveal transactions whose witness holds an `OP_FALSE OP_IF`
//!   envelope, either generic or ord-style.  See [`parse_reveal_tx`].
//!
//! Both return `None` when the input does not carry a protocol message.  A
//! message whose payload cannot be decoded is still returned, with its raw
//! bytes in a [`Payload::Unknown`].
//!
//! [`Payload::Unknown`]: xcp_msg_types::Payload::Unknown

mod config;
mod error;
mod op_return;
mod reveal;
mod types;

pub use config::ParseConfig;
pub use error::{ExtractError, ExtractResult};
pub use op_return::try_parse_op_return;
pub use reveal::try_parse_reveal_tx;
pub use types::{ParsedMessage, TAPROOT_COMMIT_NAME};
use xcp_primitives::NetworkParams;

/// Parses an `OP_RETURN` output script using the protocol magic.
pub fn parse_op_return(
    script: &[u8],
    first_input_txid_hex: &str,
    network: &NetworkParams,
) -> Option<ParsedMessage> {
    ParseConfig::for_network(network.clone()).parse_op_return(script, first_input_txid_hex)
}

/// Parses a raw reveal transaction using the protocol magic.
pub fn parse_reveal_tx(raw_tx_hex: &str, network: &NetworkParams) -> Option<ParsedMessage> {
    ParseConfig::for_network(network.clone()).parse_reveal_tx(raw_tx_hex)
}
