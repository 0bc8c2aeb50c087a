//! This crate contains the types and logic for the Counterparty `OP_RETURN`
//! carrier: the protocol magic, the raw push-opcode grammar shared with the
//! envelope carrier, and the RC4 obfuscation layer.

mod error;
mod magic;
mod opret;
pub mod rc4;
pub mod script;
#[cfg(feature = "serde")]
mod serde;

pub use error::{TxFmtError, TxFmtResult};
pub use magic::{InvalidMagicBytes, MAGIC_BYTES_LEN, MagicBytes, PROTOCOL_MAGIC};
pub use opret::{OpReturnData, OpReturnParser, extract_opret_data};
