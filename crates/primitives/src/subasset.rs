//! Compacted subasset longnames.
//!
//! A longname such as `PARENT.child` is carried as a big-endian integer
//! whose base-68 digits index into [`SUBASSET_DIGITS`] offset by one.  A zero
//! digit wraps around to the last character of the alphabet.

use crate::errors::AssetNameError;

/// Alphabet of subasset longnames.
pub const SUBASSET_DIGITS: &[u8; 67] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.-_@!";

const BASE: u32 = 68;

/// Expands a compacted longname.  An all-zero or empty buffer expands to an
/// empty string.
pub fn expand_subasset_longname(raw: &[u8]) -> String {
    let mut num = trim_leading_zeros(raw.to_vec());
    let mut out = Vec::new();

    while !num.is_empty() {
        let rem = div_rem_in_place(&mut num, BASE);
        let idx = match rem {
            0 => SUBASSET_DIGITS.len() - 1,
            r => r as usize - 1,
        };
        out.push(char::from(SUBASSET_DIGITS[idx]));
    }

    out.iter().rev().collect()
}

/// Compacts a longname into its minimal big-endian integer form.
pub fn compact_subasset_longname(name: &str) -> Result<Vec<u8>, AssetNameError> {
    if name.is_empty() {
        return Err(AssetNameError::Empty);
    }

    let mut num = Vec::new();
    for c in name.chars() {
        let digit = u8::try_from(c)
            .ok()
            .and_then(|b| SUBASSET_DIGITS.iter().position(|d| *d == b))
            .ok_or(AssetNameError::InvalidCharacter(c))?;
        mul_add_in_place(&mut num, BASE, digit as u32 + 1);
    }

    Ok(num)
}

/// Divides a big-endian integer in place, returning the remainder.
fn div_rem_in_place(num: &mut Vec<u8>, divisor: u32) -> u32 {
    let mut rem = 0u32;
    for byte in num.iter_mut() {
        let acc = (rem << 8) | u32::from(*byte);
        *byte = (acc / divisor) as u8;
        rem = acc % divisor;
    }
    *num = trim_leading_zeros(std::mem::take(num));
    rem
}

/// Computes `num * mul + add` in place on a big-endian integer.
fn mul_add_in_place(num: &mut Vec<u8>, mul: u32, add: u32) {
    let mut carry = add;
    for byte in num.iter_mut().rev() {
        let acc = u32::from(*byte) * mul + carry;
        *byte = (acc & 0xff) as u8;
        carry = acc >> 8;
    }
    while carry > 0 {
        num.insert(0, (carry & 0xff) as u8);
        carry >>= 8;
    }
}

fn trim_leading_zeros(mut num: Vec<u8>) -> Vec<u8> {
    let leading = num.iter().take_while(|b| **b == 0).count();
    num.drain(..leading);
    num
}
