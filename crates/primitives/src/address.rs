//! Short address codec.
//!
//! Message payloads carry destinations as a tag byte followed by a hash or
//! witness program:
//!
//! ```text
//! 0x01 <20 bytes>                  P2PKH
//! 0x02 <20 bytes>                  P2SH
//! 0x03 <version> <program>         segwit
//! 0x80 + version <program>         segwit (legacy marker)
//! <pubkey_hash byte> <20 bytes>    P2PKH (legacy)
//! <script_hash byte> <20 bytes>    P2SH (legacy)
//! ```
//!
//! Anything that does not match one of these layouts is rendered as a `0x`
//! prefixed hex literal of the whole input.

use bitcoin::{
    base58,
    bech32::{Fe32, Hrp, segwit},
};

use crate::network::NetworkParams;

/// Tag of a P2PKH short address.
pub const TAG_P2PKH: u8 = 0x01;

/// Tag of a P2SH short address.
pub const TAG_P2SH: u8 = 0x02;

/// Tag of a segwit short address with an explicit version byte.
pub const TAG_SEGWIT: u8 = 0x03;

/// First legacy segwit marker tag, for witness version 0.
pub const LEGACY_SEGWIT_MIN: u8 = 0x80;

/// Last legacy segwit marker tag, for witness version 15.
pub const LEGACY_SEGWIT_MAX: u8 = 0x8f;

const HASH160_LEN: usize = 20;
const MAX_WITNESS_VERSION: u8 = 16;

/// Renders a short address as an address string for the given network.
///
/// This never fails: unrecognized or malformed inputs fall back to
/// `"0x" + hex(bytes)`.
pub fn short_address_to_string(bytes: &[u8], network: &NetworkParams) -> String {
    decode_short_address(bytes, network).unwrap_or_else(|| hex_literal(bytes))
}

fn decode_short_address(bytes: &[u8], network: &NetworkParams) -> Option<String> {
    let (&tag, body) = bytes.split_first()?;
    if body.is_empty() {
        return None;
    }

    match tag {
        TAG_P2PKH => encode_base58(network.pubkey_hash(), body),
        TAG_P2SH => encode_base58(network.script_hash(), body),
        TAG_SEGWIT => {
            let (&version, program) = body.split_first()?;
            encode_segwit(network, version, program)
        }
        LEGACY_SEGWIT_MIN..=LEGACY_SEGWIT_MAX => {
            encode_segwit(network, tag - LEGACY_SEGWIT_MIN, body)
        }
        t if t == network.pubkey_hash() || t == network.script_hash() => encode_base58(t, body),
        _ => None,
    }
}

fn encode_base58(version: u8, hash: &[u8]) -> Option<String> {
    if hash.len() != HASH160_LEN {
        return None;
    }

    let mut payload = Vec::with_capacity(1 + HASH160_LEN);
    payload.push(version);
    payload.extend_from_slice(hash);
    Some(base58::encode_check(&payload))
}

fn encode_segwit(network: &NetworkParams, version: u8, program: &[u8]) -> Option<String> {
    if !is_valid_program_len(version, program.len()) {
        return None;
    }

    let hrp = Hrp::parse(network.bech32_hrp()).ok()?;
    let version = Fe32::try_from(version).ok()?;
    segwit::encode(hrp, version, program).ok()
}

/// Checks witness program lengths: v0 is P2WPKH or P2WSH, v1 is P2TR and
/// future versions follow the generic 2..=40 byte rule.
fn is_valid_program_len(version: u8, len: usize) -> bool {
    match version {
        0 => len == 20 || len == 32,
        1 => len == 32,
        2..=MAX_WITNESS_VERSION => (2..=40).contains(&len),
        _ => false,
    }
}

fn hex_literal(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
