//! Currency conversion abstractions

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::core::error::Result;
use crate::core::money::Amount;

/// A source of exchange rates quoted against a base currency.
///
/// `date` selects the rates published on a specific day; `None` asks
/// for the most recent rates the source has.
#[async_trait]
pub trait CurrencyRateProvider: Send + Sync {
    /// All rates for `base`, keyed by destination currency code.
    async fn get_rates(
        &self,
        base: &str,
        date: Option<NaiveDate>,
    ) -> Result<HashMap<String, Amount>>;

    /// The single rate from `base` to `dest`.
    async fn get_rate(&self, base: &str, dest: &str, date: Option<NaiveDate>) -> Result<Amount>;

    /// `amount` of `base`, re-expressed in `dest`.
    async fn convert(
        &self,
        base: &str,
        dest: &str,
        amount: Amount,
        date: Option<NaiveDate>,
    ) -> Result<Amount>;
}
