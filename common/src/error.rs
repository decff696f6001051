use thiserror::Error;

/// Everything that can go wrong while normalizing or decoding a WWN.
///
/// Each variant carries the offending value so the caller can report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WwnError {
    /// Input matches none of the accepted hex/colon shapes.
    #[error("Invalid FC address: {0:?}")]
    InvalidFormat(String),

    /// Well-formed address whose NAA type is not 6.
    #[error("Invalid FC address: {0:?} (till now only NAA 6 is supported)")]
    UnsupportedNaa(String),

    /// Leading nibble is not a known NAA type at all.
    #[error("Invalid FC address: {0:?} (no normalized NAA)")]
    UnnormalizedAddress(String),

    #[error("Invalid serial field in FC address: {0:?}")]
    InvalidSerial(String),

    /// The LUN id tail does not decode to text.
    #[error("Cannot decode LUN id from FC address: {0:?}")]
    LunDecode(String),
}
