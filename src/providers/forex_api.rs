use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::core::currency::CurrencyRateProvider;
use crate::core::error::{Error, Result};
use crate::core::money::Amount;

/// Production endpoint root of the rates source.
pub const DEFAULT_BASE_URL: &str = "https://theforexapi.com/api";

/// Fixed rate-type selector the source expects on every request.
const RATE_TYPE: &str = "fpy";

const USER_AGENT: &str = "fxrates/0.1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the theforexapi.com JSON rates endpoint.
///
/// Each operation issues at most one GET to `<base_url>/<date>` where
/// `<date>` is `YYYY-MM-DD` or the literal `latest`. Responses are
/// never cached and failed requests are never retried.
pub struct ForexApiProvider {
    base_url: String,
    force_decimal: bool,
}

impl ForexApiProvider {
    /// Client against `base_url`, decoding rates as `f64`.
    pub fn new(base_url: &str) -> Self {
        ForexApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            force_decimal: false,
        }
    }

    /// Forces every subsequent call to decode rates as exact decimals,
    /// regardless of the amount type handed to [`convert`].
    ///
    /// [`convert`]: CurrencyRateProvider::convert
    pub fn force_decimal(mut self, on: bool) -> Self {
        self.force_decimal = on;
        self
    }

    #[instrument(name = "FetchRates", skip(self), fields(base = %base))]
    async fn fetch_rates(
        &self,
        base: &str,
        dest: Option<&str>,
        date_token: &str,
        decimal: bool,
    ) -> Result<HashMap<String, Amount>> {
        let url = format!("{}/{}", self.base_url, date_token);
        let mut query: Vec<(&str, &str)> = vec![("base", base)];
        if let Some(dest) = dest {
            query.push(("symbols", dest));
        }
        query.push(("rtype", RATE_TYPE));
        debug!("Requesting rates from {}", url);

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let response = client.get(&url).query(&query).send().await?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "Rates source not ready");
            return Err(Error::RatesUnavailable("source not ready".to_string()));
        }

        let text = response.text().await?;
        let rates = if decimal {
            let payload: DecimalRatesPayload = serde_json::from_str(&text)?;
            payload
                .rates
                .into_iter()
                .map(|(code, rate)| (code, Amount::Decimal(rate)))
                .collect()
        } else {
            let payload: FloatRatesPayload = serde_json::from_str(&text)?;
            payload
                .rates
                .into_iter()
                .map(|(code, rate)| (code, Amount::Float(rate)))
                .collect()
        };
        Ok(rates)
    }

    async fn fetch_rate(
        &self,
        base: &str,
        dest: &str,
        date_token: &str,
        decimal: bool,
    ) -> Result<Amount> {
        let mut rates = self.fetch_rates(base, Some(dest), date_token, decimal).await?;
        // A zero rate counts as unpublished, same as a missing entry.
        match rates.remove(dest) {
            Some(rate) if !rate.is_zero() => Ok(rate),
            _ => Err(Error::RatesUnavailable(format!(
                "{base} => {dest} has no rate for {date_token}"
            ))),
        }
    }
}

impl Default for ForexApiProvider {
    /// Production endpoint, float decoding.
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// `YYYY-MM-DD` path segment, or `latest` when no date is given.
fn date_token(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => "latest".to_string(),
    }
}

#[derive(Debug, Deserialize)]
struct FloatRatesPayload {
    #[serde(default)]
    rates: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct DecimalRatesPayload {
    #[serde(default)]
    rates: HashMap<String, Decimal>,
}

#[async_trait]
impl CurrencyRateProvider for ForexApiProvider {
    async fn get_rates(
        &self,
        base: &str,
        date: Option<NaiveDate>,
    ) -> Result<HashMap<String, Amount>> {
        self.fetch_rates(base, None, &date_token(date), self.force_decimal)
            .await
    }

    /// Rate from `base` to `dest`. Identical codes short-circuit to the
    /// multiplicative identity without touching the network. A decoded
    /// rate of exactly zero reports as unavailable.
    async fn get_rate(&self, base: &str, dest: &str, date: Option<NaiveDate>) -> Result<Amount> {
        if base == dest {
            return Ok(Amount::one(self.force_decimal));
        }
        self.fetch_rate(base, dest, &date_token(date), self.force_decimal)
            .await
    }

    /// Decimal mode is active when `amount` is already a decimal, or
    /// when the client forces it; the fetched rate then decodes in the
    /// same representation as the amount it multiplies.
    async fn convert(
        &self,
        base: &str,
        dest: &str,
        amount: Amount,
        date: Option<NaiveDate>,
    ) -> Result<Amount> {
        let use_decimal = amount.is_decimal() || self.force_decimal;
        if base == dest {
            return if use_decimal {
                amount.into_decimal().map(Amount::Decimal)
            } else {
                Ok(amount)
            };
        }
        let rate = self
            .fetch_rate(base, dest, &date_token(date), use_decimal)
            .await?;
        rate.try_mul(amount)
    }
}
