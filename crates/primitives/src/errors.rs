use thiserror::Error;

/// Errors from mapping an asset name or subasset longname back to its numeric
/// form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetNameError {
    /// The name was empty.
    #[error("empty asset name")]
    Empty,

    /// The name contained a character outside its alphabet.
    #[error("invalid character {0:?} in asset name")]
    InvalidCharacter(char),

    /// A numeric `A<digits>` name does not fit the integer type.
    #[error("numeric asset name overflows")]
    Overflow,

    /// A numeric `A<digits>` name decodes to an id reserved for alphabetic
    /// names.
    #[error("numeric asset id {0} is in the alphabetic range")]
    NumericOutOfRange(u128),

    /// An alphabetic name decodes to an id outside the alphabetic range.
    #[error("alphabetic asset name {0:?} is out of range")]
    AlphabeticOutOfRange(String),
}
