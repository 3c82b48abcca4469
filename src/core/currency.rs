use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 1 GBP = 1.18 EUR
pub const GBP_TO_EUR_RATE: Decimal = Decimal::from_parts(118, 0, 0, false, 2);

/// 1 DKK = 0.134 EUR
pub const DKK_TO_EUR_RATE: Decimal = Decimal::from_parts(134, 0, 0, false, 3);

/// Supported display currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro, the base currency every stored fee is expressed in
    EUR,
    /// British Pound
    GBP,
    /// Danish Krone
    DKK,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::EUR, Currency::GBP, Currency::DKK];

    /// Display amounts always carry two decimal places
    pub fn scale(&self) -> u32 {
        2
    }

    /// Symbol prefixed to formatted amounts
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::DKK => "kr",
        }
    }

    /// Rounds to the display scale, midpoints away from zero
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(self.scale(), RoundingStrategy::MidpointAwayFromZero)
    }

    /// Formats an amount for display: symbol, comma thousands separator,
    /// period decimal separator, exactly two decimals.
    ///
    /// Every currency uses the same separators regardless of its usual locale,
    /// so `1234567.891` in DKK renders as `kr1,234,567.89`.
    pub fn format_amount(&self, amount: Decimal) -> String {
        let rounded = self.round(amount);
        let digits = format!("{:.width$}", rounded.abs(), width = self.scale() as usize);
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        format!(
            "{}{}{}.{}",
            self.symbol(),
            sign,
            group_thousands(whole),
            fraction
        )
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::EUR => write!(f, "EUR"),
            Currency::GBP => write!(f, "GBP"),
            Currency::DKK => write!(f, "DKK"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "DKK" => Ok(Currency::DKK),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}

impl TryFrom<&str> for Currency {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Fixed EUR conversion rates.
///
/// Stored fees are EUR base values; they are divided by the rate to land in the
/// display currency. Amounts entered in the display currency are multiplied by
/// the rate to compare them against EUR thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExchangeRates {
    gbp_to_eur: Decimal,
    dkk_to_eur: Decimal,
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self {
            gbp_to_eur: GBP_TO_EUR_RATE,
            dkk_to_eur: DKK_TO_EUR_RATE,
        }
    }
}

impl ExchangeRates {
    /// Value of one unit of `currency` in EUR
    pub fn to_eur_rate(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::EUR => Decimal::ONE,
            Currency::GBP => self.gbp_to_eur,
            Currency::DKK => self.dkk_to_eur,
        }
    }

    /// Converts a EUR-denominated fee into `target`. No rounding.
    pub fn convert(&self, amount_eur: Decimal, target: Currency) -> Decimal {
        match target {
            Currency::EUR => amount_eur,
            _ => {
                let rate = self.to_eur_rate(target);
                amount_eur.checked_div(rate).unwrap_or(if amount_eur.is_sign_negative() {
                    Decimal::MIN
                } else {
                    Decimal::MAX
                })
            }
        }
    }

    /// Expresses an amount held in `source` as EUR (multiplies by the rate).
    pub fn convert_inverse(&self, amount: Decimal, source: Currency) -> Decimal {
        amount.saturating_mul(self.to_eur_rate(source))
    }
}
