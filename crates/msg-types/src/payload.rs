//! Decoded message payloads.
//!
//! Quantities are decimal strings so 64 bit values survive JSON consumers.
//! [`Payload`] serializes untagged, as a flat object of its fields.

use serde::Serialize;

/// A decoded message payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
#[expect(missing_docs, reason = "fields are named after the protocol fields")]
pub enum Payload {
    /// Legacy send.
    Send { asset: String, quantity: String },

    /// Send to a short address with an optional memo.
    EnhancedSend {
        asset: String,
        quantity: String,
        address: String,
        memo: Option<String>,
    },

    /// Sweep of all balances to a destination.
    Sweep {
        destination: String,
        flags: u64,
        memo: Option<String>,
    },

    /// DEX order.
    Order {
        give_asset: String,
        give_quantity: String,
        get_asset: String,
        get_quantity: String,
        expiration: u16,
        fee_required: String,
    },

    /// BTC payment settling an order match.
    BtcPay {
        tx0_hash: String,
        tx1_hash: String,
        order_match_id: String,
    },

    /// Dispenser creation or update.
    Dispenser {
        asset: String,
        give_quantity: String,
        escrow_quantity: String,
        mainchainrate: String,
        status: u8,
        action_address: Option<String>,
        oracle_address: Option<String>,
    },

    /// Dispense from a dispenser.
    Dispense { data: String },

    /// Asset issuance.
    Issuance {
        asset: String,
        asset_id: String,
        quantity: String,
        divisible: bool,
        lock: bool,
        reset: bool,
        description: String,
        mime_type: Option<String>,
    },

    /// Subasset issuance.
    IssuanceSubasset {
        asset: String,
        asset_id: String,
        quantity: String,
        divisible: bool,
        lock: bool,
        reset: bool,
        subasset_longname: String,
        description: String,
        mime_type: Option<String>,
    },

    /// Oracle broadcast.
    Broadcast {
        timestamp: u64,
        value: String,
        fee_fraction_int: u64,
        text: String,
        mime_type: Option<String>,
    },

    /// Dividend distribution.
    Dividend {
        quantity_per_unit: String,
        asset: String,
        dividend_asset: String,
    },

    /// Cancellation of an open offer.
    Cancel { offer_hash: String },

    /// Fair minting configuration.
    Fairminter {
        asset: String,
        asset_parent: String,
        price: String,
        quantity_by_price: String,
        max_mint_per_tx: String,
        hard_cap: String,
        premint_quantity: String,
        start_block: u64,
        end_block: u64,
        soft_cap: String,
        soft_cap_deadline_block: u64,
        minted_asset_commission_int: String,
        burn_payment: bool,
        lock_description: bool,
        lock_quantity: bool,
        divisible: bool,
        description: String,
        mime_type: Option<String>,
    },

    /// Mint from a fair minter.
    Fairmint { asset: String, quantity: String },

    /// Attach assets to a UTXO.
    Attach {
        asset: String,
        quantity: String,
        destination_vout: String,
    },

    /// Detach assets from a UTXO.
    Detach { destination: String },

    /// Destruction of an asset quantity.
    Destroy {
        asset: String,
        quantity: String,
        tag: String,
    },

    /// Commit half of a taproot commit/reveal pair.
    TaprootCommit { data: String },

    /// Unrecognized or undecodable payload.
    Unknown {
        raw: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

impl Payload {
    /// Constructs an [`Payload::Unknown`] holding the raw payload.
    pub fn unknown(raw: &[u8], error: Option<String>) -> Self {
        Self::Unknown {
            raw: hex::encode(raw),
            error,
        }
    }

    /// Returns if this is a [`Payload::Unknown`].
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }
}
