//! Typed Counterparty message payloads.
//!
//! Once a carrier has been unwrapped and the type id framed off, [`decode`]
//! turns the remaining bytes into a [`Payload`].  Payloads are either fixed
//! width big-endian layouts, CBOR arrays, or short delimited text, depending
//! on the message type.

mod broadcast;
mod dex;
mod dispatch;
mod dispenser;
mod errors;
mod fairminter;
pub mod fields;
mod issuance;
mod payload;
mod reader;
mod send;
mod supply;
pub mod text;
mod utxo;

pub use dispatch::decode;
pub use errors::{DecodeError, DecodeResult};
pub use payload::Payload;
pub use supply::MAX_DESTROY_TAG_LEN;
