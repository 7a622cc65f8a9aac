//! Static currency metadata: code, display symbol, English name.
//!
//! The table ships inside the crate and is parsed at most once per
//! process, on the first lookup. Lookup misses are not errors.

use std::sync::OnceLock;

use serde::Deserialize;

static CURRENCY_DATA: &str = include_str!("data/currencies.json");

static TABLE: OnceLock<Vec<CurrencyRecord>> = OnceLock::new();

/// One entry of the bundled currency table.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyRecord {
    /// ISO 4217 code, e.g. `USD`.
    pub cc: String,
    pub symbol: String,
    pub name: String,
}

fn table() -> &'static [CurrencyRecord] {
    TABLE.get_or_init(|| {
        serde_json::from_str(CURRENCY_DATA).expect("bundled currency table is valid JSON")
    })
}

/// Point lookups over the bundled currency table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyDirectory;

impl CurrencyDirectory {
    pub fn new() -> Self {
        CurrencyDirectory
    }

    fn find(pred: impl Fn(&CurrencyRecord) -> bool) -> Option<&'static CurrencyRecord> {
        table().iter().find(|&record| pred(record))
    }

    /// Display symbol for a currency code, e.g. `$` for `USD`.
    pub fn get_symbol(&self, code: &str) -> Option<&'static str> {
        Self::find(|record| record.cc == code).map(|record| record.symbol.as_str())
    }

    /// English name for a currency code.
    pub fn get_currency_name(&self, code: &str) -> Option<&'static str> {
        Self::find(|record| record.cc == code).map(|record| record.name.as_str())
    }

    /// Reverse lookup; the first code whose symbol matches wins.
    pub fn get_currency_code_from_symbol(&self, symbol: &str) -> Option<&'static str> {
        Self::find(|record| record.symbol == symbol).map(|record| record.cc.as_str())
    }
}
