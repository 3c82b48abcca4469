use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{AppError, Currency, RawAmount, Result};

use super::provider::ProviderId;

/// How often the merchant pays out to vendors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutFrequency {
    Monthly,
    Weekly,
    Daily,
}

impl fmt::Display for PayoutFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoutFrequency::Monthly => write!(f, "monthly"),
            PayoutFrequency::Weekly => write!(f, "weekly"),
            PayoutFrequency::Daily => write!(f, "daily"),
        }
    }
}

impl std::str::FromStr for PayoutFrequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(PayoutFrequency::Monthly),
            "weekly" => Ok(PayoutFrequency::Weekly),
            "daily" => Ok(PayoutFrequency::Daily),
            _ => Err(format!("Invalid payout frequency: {}", s)),
        }
    }
}

/// Which providers a request compares against the reference provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonMode {
    /// Reference vs the two fixed competitors
    #[default]
    Standard,
    /// Reference vs the user-defined provider
    Custom,
}

impl ComparisonMode {
    pub fn providers(&self) -> &'static [ProviderId] {
        match self {
            ComparisonMode::Standard => &[
                ProviderId::Reference,
                ProviderId::ProviderA,
                ProviderId::ProviderB,
            ],
            ComparisonMode::Custom => &[ProviderId::Reference, ProviderId::Custom],
        }
    }
}

impl std::str::FromStr for ComparisonMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(ComparisonMode::Standard),
            "custom" => Ok(ComparisonMode::Custom),
            _ => Err(format!("Invalid comparison mode: {}", s)),
        }
    }
}

/// Provider set actually computed for a request: duplicates removed, order
/// kept, and the reference provider first whenever it was not listed.
pub fn comparison_set(requested: &[ProviderId]) -> Vec<ProviderId> {
    let mut providers = Vec::with_capacity(requested.len() + 1);
    if !requested.contains(&ProviderId::Reference) {
        providers.push(ProviderId::Reference);
    }
    for id in requested {
        if !providers.contains(id) {
            providers.push(*id);
        }
    }
    providers
}

/// Custom provider fees, already in the display currency.
/// Percentages are fractions here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomFees {
    pub payin_percentage: Decimal,
    pub payin_fixed: Decimal,
    pub payout_percentage: Decimal,
    pub payout_fixed: Decimal,
    pub wallet_price: Decimal,
}

/// A merchant's monthly operational snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationInput {
    currency: Currency,
    gmv: Decimal,
    payin_count: u64,
    payout_count: u64,
    vendor_count: u64,
    payout_frequency: Option<PayoutFrequency>,
    custom_fees: Option<CustomFees>,
}

impl CalculationInput {
    /// Negative GMV is coerced to zero.
    /// `payout_frequency` is `None` when the client sent something unrecognized.
    pub fn new(
        currency: Currency,
        gmv: Decimal,
        payin_count: u64,
        payout_count: u64,
        vendor_count: u64,
        payout_frequency: Option<PayoutFrequency>,
    ) -> Self {
        Self {
            currency,
            gmv: gmv.max(Decimal::ZERO),
            payin_count,
            payout_count,
            vendor_count,
            payout_frequency,
            custom_fees: None,
        }
    }

    pub fn with_custom_fees(mut self, fees: CustomFees) -> Self {
        self.custom_fees = Some(fees);
        self
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// GMV per month, in the display currency
    pub fn gmv(&self) -> Decimal {
        self.gmv
    }

    pub fn payin_count(&self) -> u64 {
        self.payin_count
    }

    pub fn payout_count(&self) -> u64 {
        self.payout_count
    }

    pub fn vendor_count(&self) -> u64 {
        self.vendor_count
    }

    pub fn payout_frequency(&self) -> Option<PayoutFrequency> {
        self.payout_frequency
    }

    /// Custom fees, zero when none were supplied
    pub fn custom_fees(&self) -> CustomFees {
        self.custom_fees.unwrap_or_default()
    }
}

/// Custom provider fee fields as typed by the user.
/// Percentages are entered as percent (`"1.8"` means 1.8%).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCustomFees {
    #[serde(default)]
    pub payin_percentage: RawAmount,
    #[serde(default)]
    pub payin_fixed: RawAmount,
    #[serde(default)]
    pub payout_percentage: RawAmount,
    #[serde(default)]
    pub payout_fixed: RawAmount,
    #[serde(default)]
    pub wallet_price: RawAmount,
}

impl RawCustomFees {
    pub fn normalize(&self) -> CustomFees {
        let hundred = Decimal::ONE_HUNDRED;
        CustomFees {
            payin_percentage: self.payin_percentage.to_amount() / hundred,
            payin_fixed: self.payin_fixed.to_amount(),
            payout_percentage: self.payout_percentage.to_amount() / hundred,
            payout_fixed: self.payout_fixed.to_amount(),
            wallet_price: self.wallet_price.to_amount(),
        }
    }
}

/// Request body of `POST /estimates`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub gmv: RawAmount,
    #[serde(default)]
    pub payins: RawAmount,
    #[serde(default)]
    pub payouts: RawAmount,
    #[serde(default)]
    pub vendors: RawAmount,
    #[serde(default)]
    pub payout_frequency: String,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub providers: Option<Vec<String>>,
    #[serde(default)]
    pub custom: Option<RawCustomFees>,
}

fn default_currency() -> String {
    Currency::EUR.to_string()
}

impl EstimateRequest {
    /// Normalize the raw fields. Only the currency selector can fail;
    /// numeric fields degrade to zero and an unknown frequency to `None`.
    pub fn to_input(&self) -> Result<CalculationInput> {
        let currency: Currency = self.currency.parse().map_err(AppError::Validation)?;

        let payout_frequency = self.payout_frequency.parse::<PayoutFrequency>().ok();
        if payout_frequency.is_none() {
            tracing::debug!(
                payout_frequency = %self.payout_frequency,
                "Unrecognized payout frequency, using static payout fee"
            );
        }

        let input = CalculationInput::new(
            currency,
            self.gmv.to_amount(),
            self.payins.to_count(),
            self.payouts.to_count(),
            self.vendors.to_count(),
            payout_frequency,
        );

        Ok(match &self.custom {
            Some(custom) => input.with_custom_fees(custom.normalize()),
            None => input,
        })
    }

    /// Explicit `providers` win over `mode`; neither means the standard set.
    pub fn requested_providers(&self) -> Result<Vec<ProviderId>> {
        if let Some(providers) = &self.providers {
            return providers
                .iter()
                .map(|id| id.parse::<ProviderId>().map_err(AppError::Validation))
                .collect();
        }

        let mode = match &self.mode {
            Some(mode) => mode.parse::<ComparisonMode>().map_err(AppError::Validation)?,
            None => ComparisonMode::default(),
        };

        Ok(mode.providers().to_vec())
    }
}
