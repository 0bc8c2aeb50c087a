//! Taproot envelope carrier for Counterparty messages.
//!
//! Reveal transactions carry their message in a tapscript witness item
//! wrapped in an `OP_FALSE OP_IF ... OP_ENDIF` block.  Two grammars are read
//! from the same marker.
//!
//! # Generic envelope
//!
//! ```text
//! OP_FALSE OP_IF <data_chunks> OP_ENDIF
//! ```
//!
//! The pushed chunks are concatenated in order.  Opcodes that are not pushes
//! are skipped, and any push width is accepted.
//!
//! # Ord envelope
//!
//! An ord-style inscription whose metaprotocol is `xcp`.  The metadata pushes
//! hold the CBOR-encoded message and the content type is returned alongside
//! them.  See [`ord`] for the layout.
//!
//! # Examples
//!
//! ```
//! use xcp_l1_envelope_fmt::parser::{Envelope, parse_envelope};
//!
//! let script = [0x00, 0x63, 0x03, 0x01, 0x02, 0x03, 0x68];
//! let envelope = parse_envelope(&script).unwrap();
//! assert_eq!(envelope, Envelope::Generic(vec![1, 2, 3]));
//! ```

/// Envelope script builders for fixtures.
#[cfg(any(test, feature = "test-utils"))]
pub mod builder;

/// Error types for envelope operations.
pub mod errors;

pub mod ord;

/// Bitcoin script envelope parser utilities.
pub mod parser;
