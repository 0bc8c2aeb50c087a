//! Moving balances onto and off UTXOs.

use xcp_primitives::NetworkParams;

use crate::errors::{DecodeError, DecodeResult};
use crate::payload::Payload;

const ATTACH_SEPARATOR: char = '|';

/// Detach payload naming the sending address itself.
const DETACH_SELF: &[u8] = b"0";

/// `asset|quantity|destination_vout`, trailing parts may be missing.
pub(crate) fn decode_attach(buf: &[u8], _network: &NetworkParams) -> DecodeResult<Payload> {
    let text = std::str::from_utf8(buf).map_err(|_| DecodeError::InvalidUtf8)?;
    let parts: Vec<&str> = text.split(ATTACH_SEPARATOR).collect();
    if parts.len() < 2 {
        return Err(DecodeError::TooFewParts {
            message: "attach",
            expected: 2,
            actual: parts.len(),
        });
    }

    let part = |i: usize| parts.get(i).copied().unwrap_or_default().to_owned();
    Ok(Payload::Attach {
        asset: part(0),
        quantity: part(1),
        destination_vout: part(2),
    })
}

/// A UTF-8 destination, or `0` for the sender.
pub(crate) fn decode_detach(buf: &[u8], _network: &NetworkParams) -> DecodeResult<Payload> {
    let destination = if buf == DETACH_SELF {
        "self".to_owned()
    } else {
        std::str::from_utf8(buf)
            .map_err(|_| DecodeError::InvalidUtf8)?
            .to_owned()
    };

    Ok(Payload::Detach { destination })
}
