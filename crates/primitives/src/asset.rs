//! Numeric asset id to asset name mapping.
//!
//! ```text
//! 0                      BTC
//! 1                      XCP
//! [2, 26^3)              "A" + decimal id
//! [26^3, 26^12 + 1)      bijective base-26, A = 1 .. Z = 26
//! [26^12 + 1, ..)        "A" + decimal id
//! ```

use crate::errors::AssetNameError;

/// Numeric asset identifier.
pub type AssetId = u128;

/// Id of the native chain asset.
pub const BTC_ASSET_ID: AssetId = 0;

/// Id of the protocol asset.
pub const XCP_ASSET_ID: AssetId = 1;

/// First id rendered as an alphabetic name (`26^3`).
pub const MIN_ALPHABETIC_ID: AssetId = 17_576;

/// First id past the alphabetic range (`26^12 + 1`).
pub const MIN_NUMERIC_ID: AssetId = 95_428_956_661_682_177;

/// Longest alphabetic name that can land in the alphabetic range.
const MAX_ALPHABETIC_LEN: usize = 12;

const BTC_NAME: &str = "BTC";
const XCP_NAME: &str = "XCP";

/// Returns the asset name for an id.  Total over the whole id space.
pub fn asset_name(id: AssetId) -> String {
    match id {
        BTC_ASSET_ID => BTC_NAME.to_owned(),
        XCP_ASSET_ID => XCP_NAME.to_owned(),
        id if is_numeric_id(id) => format!("A{id}"),
        mut n => {
            let mut letters = Vec::new();
            while n > 0 {
                n -= 1;
                letters.push(char::from(b'A' + (n % 26) as u8));
                n /= 26;
            }
            letters.iter().rev().collect()
        }
    }
}

/// Parses an asset name back into its id.
///
/// Names of the `A<digits>` form must decode into one of the numeric ranges,
/// alphabetic names into the alphabetic range.
pub fn asset_id(name: &str) -> Result<AssetId, AssetNameError> {
    match name {
        "" => return Err(AssetNameError::Empty),
        BTC_NAME => return Ok(BTC_ASSET_ID),
        XCP_NAME => return Ok(XCP_ASSET_ID),
        _ => {}
    }

    if let Some(digits) = name.strip_prefix('A') {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            let id = digits
                .parse::<AssetId>()
                .map_err(|_| AssetNameError::Overflow)?;
            if id <= XCP_ASSET_ID || !is_numeric_id(id) {
                return Err(AssetNameError::NumericOutOfRange(id));
            }
            return Ok(id);
        }
    }

    if let Some(c) = name.chars().find(|c| !c.is_ascii_uppercase()) {
        return Err(AssetNameError::InvalidCharacter(c));
    }

    if name.len() > MAX_ALPHABETIC_LEN {
        return Err(AssetNameError::AlphabeticOutOfRange(name.to_owned()));
    }

    let id = name
        .bytes()
        .fold(0, |acc: AssetId, b| acc * 26 + AssetId::from(b - b'A' + 1));

    if !(MIN_ALPHABETIC_ID..MIN_NUMERIC_ID).contains(&id) {
        return Err(AssetNameError::AlphabeticOutOfRange(name.to_owned()));
    }

    Ok(id)
}

fn is_numeric_id(id: AssetId) -> bool {
    id < MIN_ALPHABETIC_ID || id >= MIN_NUMERIC_ID
}
