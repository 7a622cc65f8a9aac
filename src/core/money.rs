//! Numeric values carried through rate lookups and conversions

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::core::error::{Error, Result};

/// A money quantity or an exchange rate.
///
/// The variant mirrors the decoding mode of the rates source:
/// approximate floating point by default, exact decimals when the
/// caller opts in. A single conversion never mixes the two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    Float(f64),
    Decimal(Decimal),
}

impl Amount {
    /// Multiplicative identity in the requested representation.
    pub fn one(decimal: bool) -> Self {
        if decimal {
            Amount::Decimal(Decimal::ONE)
        } else {
            Amount::Float(1.0)
        }
    }

    pub fn is_decimal(&self) -> bool {
        matches!(self, Amount::Decimal(_))
    }

    /// Approximate view of the value, whichever the representation.
    pub fn as_f64(&self) -> f64 {
        match self {
            Amount::Float(v) => *v,
            Amount::Decimal(d) => d.to_f64().unwrap_or(f64::NAN),
        }
    }

    /// Multiplies two values, rejecting mixed representations.
    pub fn try_mul(self, other: Amount) -> Result<Amount> {
        match (self, other) {
            (Amount::Float(a), Amount::Float(b)) => Ok(Amount::Float(a * b)),
            (Amount::Decimal(a), Amount::Decimal(b)) => Ok(Amount::Decimal(a * b)),
            _ => Err(Error::DecimalFloatMismatch),
        }
    }

    /// Re-expresses the value as an exact decimal. Non-finite floats
    /// have no decimal form.
    pub(crate) fn into_decimal(self) -> Result<Decimal> {
        match self {
            Amount::Decimal(d) => Ok(d),
            Amount::Float(v) => Decimal::from_f64(v).ok_or(Error::DecimalFloatMismatch),
        }
    }

    /// True for values the rates source treats as "no rate published".
    pub(crate) fn is_zero(&self) -> bool {
        match self {
            Amount::Float(v) => *v == 0.0,
            Amount::Decimal(d) => d.is_zero(),
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Float(value)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::Decimal(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Float(v) => write!(f, "{v}"),
            Amount::Decimal(d) => write!(f, "{d}"),
        }
    }
}
