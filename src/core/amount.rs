//! Lenient parsing of user-entered numbers.
//!
//! Every function here is total: anything that does not parse becomes zero.
//! Malformed input means "no value", never an error.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::currency::Currency;

/// Parses a loosely formatted amount such as `"1,234.56"`.
///
/// Thousands-separator commas are removed and the rest is read as a decimal
/// with `.` as the decimal separator. A leading currency symbol is ignored so
/// formatted output parses back to its value. Anything besides digits, `.`
/// and a sign (underscores, exponents) falls back to zero.
pub fn parse_amount(raw: &str) -> Decimal {
    let trimmed = strip_currency_symbol(raw.trim());
    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();

    if cleaned.is_empty() || !cleaned.chars().all(is_amount_char) {
        return Decimal::ZERO;
    }

    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}

/// Parses a whole, non-negative count. Stricter than [`parse_amount`]:
/// separators, decimals and signs all fall back to zero.
pub fn parse_count(raw: &str) -> u64 {
    raw.trim().parse::<u64>().unwrap_or(0)
}

fn is_amount_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+')
}

fn strip_currency_symbol(raw: &str) -> &str {
    Currency::ALL
        .iter()
        .find_map(|currency| raw.strip_prefix(currency.symbol()))
        .map(str::trim_start)
        .unwrap_or(raw)
}

/// A numeric field as it arrives from a client: either a JSON number or a
/// string the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawAmount {
    Number(Decimal),
    Text(String),
}

impl RawAmount {
    /// Numbers pass through unchanged; text goes through [`parse_amount`].
    pub fn to_amount(&self) -> Decimal {
        match self {
            RawAmount::Number(value) => *value,
            RawAmount::Text(text) => parse_amount(text),
        }
    }

    /// Same rule for numbers and text: only whole, non-negative values count,
    /// anything else is zero.
    pub fn to_count(&self) -> u64 {
        match self {
            RawAmount::Number(value) if value.fract().is_zero() => value.to_u64().unwrap_or(0),
            RawAmount::Number(_) => 0,
            RawAmount::Text(text) => parse_count(text),
        }
    }
}

impl Default for RawAmount {
    fn default() -> Self {
        RawAmount::Text(String::new())
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

impl From<Decimal> for RawAmount {
    fn from(value: Decimal) -> Self {
        RawAmount::Number(value)
    }
}

impl From<u64> for RawAmount {
    fn from(value: u64) -> Self {
        RawAmount::Number(Decimal::from(value))
    }
}

impl Serialize for RawAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RawAmount::Number(value) => serializer.serialize_str(&value.to_string()),
            RawAmount::Text(text) => serializer.serialize_str(text),
        }
    }
}

struct RawAmountVisitor;

impl<'de> Visitor<'de> for RawAmountVisitor {
    type Value = RawAmount;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<RawAmount, E> {
        Ok(RawAmount::Number(Decimal::from(value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<RawAmount, E> {
        Ok(RawAmount::Number(Decimal::from(value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<RawAmount, E> {
        // Shortest round-trip text keeps 1234.56 as 1234.56 rather than its binary expansion.
        Ok(RawAmount::Number(
            Decimal::from_str(&value.to_string()).unwrap_or(Decimal::ZERO),
        ))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<RawAmount, E> {
        Ok(RawAmount::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<RawAmount, E> {
        Ok(RawAmount::Text(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawAmount, E> {
        Ok(RawAmount::default())
    }
}

impl<'de> Deserialize<'de> for RawAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawAmountVisitor)
    }
}
