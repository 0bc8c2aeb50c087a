//! Address encoding parameters for a target network.

use bitcoin::Network;
use serde::{Deserialize, Serialize};

/// Parameters consumed by the short address codec.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkParams {
    /// Base58Check version byte of pubkey-hash addresses.
    pubkey_hash: u8,

    /// Base58Check version byte of script-hash addresses.
    script_hash: u8,

    /// Human readable part of segwit addresses.
    bech32_hrp: String,
}

impl NetworkParams {
    /// Constructs a new instance from raw parameters.
    pub fn new(pubkey_hash: u8, script_hash: u8, bech32_hrp: impl Into<String>) -> Self {
        Self {
            pubkey_hash,
            script_hash,
            bech32_hrp: bech32_hrp.into(),
        }
    }

    /// Bitcoin mainnet.
    pub fn mainnet() -> Self {
        Self::new(0x00, 0x05, "bc")
    }

    /// Bitcoin testnet.  Also used for testnet4 and signet, which share the
    /// same encoding.
    pub fn testnet() -> Self {
        Self::new(0x6f, 0xc4, "tb")
    }

    /// Bitcoin regtest.
    pub fn regtest() -> Self {
        Self::new(0x6f, 0xc4, "bcrt")
    }

    /// Gets the pubkey-hash version byte.
    pub fn pubkey_hash(&self) -> u8 {
        self.pubkey_hash
    }

    /// Gets the script-hash version byte.
    pub fn script_hash(&self) -> u8 {
        self.script_hash
    }

    /// Gets the bech32 human readable part.
    pub fn bech32_hrp(&self) -> &str {
        &self.bech32_hrp
    }
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self::mainnet()
    }
}

impl From<Network> for NetworkParams {
    fn from(network: Network) -> Self {
        match network {
            Network::Bitcoin => Self::mainnet(),
            Network::Regtest => Self::regtest(),
            _ => Self::testnet(),
        }
    }
}
