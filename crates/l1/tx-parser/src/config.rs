use serde::{Deserialize, Serialize};
use tracing::*;
use xcp_l1_txfmt::MagicBytes;
use xcp_primitives::NetworkParams;

use crate::op_return::try_parse_op_return;
use crate::reveal::try_parse_reveal_tx;
use crate::types::ParsedMessage;

/// Parameters for extracting messages from transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Magic prefixing every message.
    magic: MagicBytes,

    /// Network the short addresses are rendered for.
    network: NetworkParams,
}

impl ParseConfig {
    /// Constructs a new instance.
    pub fn new(magic: MagicBytes, network: NetworkParams) -> Self {
        Self { magic, network }
    }

    /// Default magic for the given network.
    pub fn for_network(network: NetworkParams) -> Self {
        Self::new(MagicBytes::default(), network)
    }

    /// Replaces the magic.
    pub fn with_magic(mut self, magic: MagicBytes) -> Self {
        self.magic = magic;
        self
    }

    /// Gets the magic.
    pub fn magic(&self) -> &MagicBytes {
        &self.magic
    }

    /// Gets the network parameters.
    pub fn network(&self) -> &NetworkParams {
        &self.network
    }

    /// Parses an `OP_RETURN` output script, keyed by the first input's txid.
    /// Returns `None` if the script does not carry a message.
    pub fn parse_op_return(
        &self,
        script: &[u8],
        first_input_txid_hex: &str,
    ) -> Option<ParsedMessage> {
        try_parse_op_return(script, first_input_txid_hex, self)
            .inspect_err(|e| debug!(%e, "op_return did not yield a message"))
            .ok()
    }

    /// Parses a raw reveal transaction.  Returns `None` if it does not carry
    /// an envelope message.
    pub fn parse_reveal_tx(&self, raw_tx_hex: &str) -> Option<ParsedMessage> {
        try_parse_reveal_tx(raw_tx_hex, self)
            .inspect_err(|e| debug!(%e, "reveal tx did not yield a message"))
            .ok()
    }
}
