//! # WWN Handling
//!
//! Parsing, validation and decoding of Fibre Channel World Wide Names.
//!
//! * **[`wwn`]**: The [`wwn::Wwn`] value type and everything derived from it.
//! * **[`vendors`]**: Static OUI to vendor mapping.
//! * **[`error`]**: Validation and decoding failures.
//! * **[`utils`]**: Hex string helpers.

pub mod error;
pub mod utils;
pub mod vendors;
pub mod wwn;

pub use error::WwnError;
pub use wwn::{Wwn, WwnReport};
