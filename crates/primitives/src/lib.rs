//! Primitive codecs shared by the Counterparty message decoders.
//!
//! This covers the mapping between numeric asset ids and asset names, the
//! compacted subasset longname encoding, and the short address format used
//! inside message payloads in place of full address strings.

pub mod address;
pub mod asset;
mod errors;
pub mod network;
pub mod subasset;

pub use address::short_address_to_string;
pub use asset::{AssetId, asset_id, asset_name};
pub use errors::AssetNameError;
pub use network::NetworkParams;
pub use subasset::{compact_subasset_longname, expand_subasset_longname};
