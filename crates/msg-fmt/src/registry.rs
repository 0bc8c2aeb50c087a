//! Static registry of message type ids.

use crate::TypeId;

/// Name reported for ids missing from the registry.
pub const UNKNOWN_MESSAGE_NAME: &str = "unknown";

/// Known message types.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[expect(missing_docs, reason = "variants are named after their messages")]
pub enum MessageType {
    Send,
    EnhancedSend,
    MpmaSend,
    Sweep,
    Order,
    BtcPay,
    Dispenser,
    Dispense,
    Issuance,
    IssuanceSubasset,
    Broadcast,
    Bet,
    Dividend,
    Burn,
    Cancel,
    Rps,
    RpsResolve,
    Fairminter,
    Fairmint,
    Utxo,
    Attach,
    Detach,
    Destroy,
}

/// Id to type table.  Issuances have two ids each, the later one from the
/// protocol revision that moved to the current issuance layout.
const REGISTRY: &[(TypeId, MessageType)] = &[
    (0, MessageType::Send),
    (2, MessageType::EnhancedSend),
    (3, MessageType::MpmaSend),
    (4, MessageType::Sweep),
    (10, MessageType::Order),
    (11, MessageType::BtcPay),
    (12, MessageType::Dispenser),
    (13, MessageType::Dispense),
    (20, MessageType::Issuance),
    (21, MessageType::IssuanceSubasset),
    (22, MessageType::Issuance),
    (23, MessageType::IssuanceSubasset),
    (30, MessageType::Broadcast),
    (40, MessageType::Bet),
    (50, MessageType::Dividend),
    (60, MessageType::Burn),
    (70, MessageType::Cancel),
    (80, MessageType::Rps),
    (81, MessageType::RpsResolve),
    (90, MessageType::Fairminter),
    (91, MessageType::Fairmint),
    (100, MessageType::Utxo),
    (101, MessageType::Attach),
    (102, MessageType::Detach),
    (110, MessageType::Destroy),
];

impl MessageType {
    /// Looks up the type registered for an id.
    pub fn from_id(id: TypeId) -> Option<Self> {
        REGISTRY
            .iter()
            .find(|(ty_id, _)| *ty_id == id)
            .map(|(_, ty)| *ty)
    }

    /// Canonical name of the type.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Send => "send",
            Self::EnhancedSend => "enhanced_send",
            Self::MpmaSend => "mpma_send",
            Self::Sweep => "sweep",
            Self::Order => "order",
            Self::BtcPay => "btc_pay",
            Self::Dispenser => "dispenser",
            Self::Dispense => "dispense",
            Self::Issuance => "issuance",
            Self::IssuanceSubasset => "issuance_subasset",
            Self::Broadcast => "broadcast",
            Self::Bet => "bet",
            Self::Dividend => "dividend",
            Self::Burn => "burn",
            Self::Cancel => "cancel",
            Self::Rps => "rps",
            Self::RpsResolve => "rps_resolve",
            Self::Fairminter => "fairminter",
            Self::Fairmint => "fairmint",
            Self::Utxo => "utxo",
            Self::Attach => "attach",
            Self::Detach => "detach",
            Self::Destroy => "destroy",
        }
    }
}

/// Returns the canonical name for an id, or [`UNKNOWN_MESSAGE_NAME`].
pub fn message_type_name(id: TypeId) -> &'static str {
    MessageType::from_id(id).map_or(UNKNOWN_MESSAGE_NAME, MessageType::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(message_type_name(2), "enhanced_send");
        assert_eq!(message_type_name(20), "issuance");
        assert_eq!(message_type_name(22), "issuance");
        assert_eq!(message_type_name(23), "issuance_subasset");
        assert_eq!(message_type_name(110), "destroy");
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(message_type_name(1), UNKNOWN_MESSAGE_NAME);
        assert_eq!(message_type_name(999), UNKNOWN_MESSAGE_NAME);
        assert_eq!(message_type_name(u32::MAX), UNKNOWN_MESSAGE_NAME);
    }

    #[test]
    fn test_registry_ids_unique() {
        for (i, (id, _)) in REGISTRY.iter().enumerate() {
            assert!(
                REGISTRY[i + 1..].iter().all(|(other, _)| other != id),
                "duplicate id {id}"
            );
        }
    }
}
