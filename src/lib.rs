//! Exchange rates from theforexapi.com and a bundled currency code
//! directory. Rates decode as `f64` by default, or as exact
//! [`rust_decimal::Decimal`] values when decimal mode is forced.

pub mod codes;
pub mod core;
pub mod providers;

pub use crate::codes::{CurrencyDirectory, CurrencyRecord};
pub use crate::core::currency::CurrencyRateProvider;
pub use crate::core::error::{Error, Result};
pub use crate::core::money::Amount;
pub use crate::providers::forex_api::ForexApiProvider;
