use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::core::{AppError, Result};

use super::calculation_input::PayoutFrequency;

/// Providers the calculator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderId {
    /// The promoted provider every other cost is compared against
    Reference,
    ProviderA,
    ProviderB,
    /// Fees entered by the user, in the display currency
    Custom,
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderId::Reference => write!(f, "reference"),
            ProviderId::ProviderA => write!(f, "provider-a"),
            ProviderId::ProviderB => write!(f, "provider-b"),
            ProviderId::Custom => write!(f, "custom"),
        }
    }
}

impl std::str::FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reference" => Ok(ProviderId::Reference),
            "provider-a" => Ok(ProviderId::ProviderA),
            "provider-b" => Ok(ProviderId::ProviderB),
            "custom" => Ok(ProviderId::Custom),
            _ => Err(format!("Invalid provider: {}", s)),
        }
    }
}

/// Static fee configuration of one provider.
///
/// `*_eur` fields are EUR base values and get converted to the display
/// currency at resolution time. Percentages are fractions (0.015 = 1.5%) and
/// are never converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderProfile {
    pub id: ProviderId,
    pub name: String,
    pub payin_percentage: Decimal,
    pub payin_fixed_eur: Decimal,
    pub payout_percentage: Decimal,
    pub payout_fixed_eur: Decimal,
    pub wallet_price_eur: Decimal,
    pub platform_fee_eur: Decimal,
}

impl ProviderProfile {
    fn validate(&self, expected: ProviderId) -> Result<()> {
        if self.id != expected {
            return Err(AppError::configuration(format!(
                "Profile in the {} slot is declared as {}",
                expected, self.id
            )));
        }

        for (field, value) in [
            ("payin_percentage", self.payin_percentage),
            ("payout_percentage", self.payout_percentage),
        ] {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(AppError::configuration(format!(
                    "{}.{} must be between 0 and 1, got {}",
                    self.id, field, value
                )));
            }
        }

        for (field, value) in [
            ("payin_fixed_eur", self.payin_fixed_eur),
            ("payout_fixed_eur", self.payout_fixed_eur),
            ("wallet_price_eur", self.wallet_price_eur),
            ("platform_fee_eur", self.platform_fee_eur),
        ] {
            if value < Decimal::ZERO {
                return Err(AppError::configuration(format!(
                    "{}.{} cannot be negative, got {}",
                    self.id, field, value
                )));
            }
        }

        Ok(())
    }
}

/// Reference provider pay-out fixed fee (EUR) per payout frequency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutFeeTable {
    pub monthly: Decimal,
    pub weekly: Decimal,
    pub daily: Decimal,
}

impl PayoutFeeTable {
    pub fn fee_for(&self, frequency: PayoutFrequency) -> Decimal {
        match frequency {
            PayoutFrequency::Monthly => self.monthly,
            PayoutFrequency::Weekly => self.weekly,
            PayoutFrequency::Daily => self.daily,
        }
    }
}

/// Reference provider platform fee (EUR) as a step function of GMV in EUR.
///
/// `gmv <= low_threshold` is the low tier, `gmv <= high_threshold` the middle
/// tier, anything above the high tier. Boundary values belong to the lower tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformFeeTiers {
    pub low_threshold_eur: Decimal,
    pub high_threshold_eur: Decimal,
    pub low_fee_eur: Decimal,
    pub mid_fee_eur: Decimal,
    pub high_fee_eur: Decimal,
}

impl PlatformFeeTiers {
    pub fn fee_for(&self, gmv_in_eur: Decimal) -> Decimal {
        if gmv_in_eur <= self.low_threshold_eur {
            self.low_fee_eur
        } else if gmv_in_eur <= self.high_threshold_eur {
            self.mid_fee_eur
        } else {
            self.high_fee_eur
        }
    }
}

/// Immutable fee data injected into the resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub reference: ProviderProfile,
    pub provider_a: ProviderProfile,
    pub provider_b: ProviderProfile,
    pub reference_payout_fees: PayoutFeeTable,
    pub reference_platform_tiers: PlatformFeeTiers,
    #[serde(default = "default_custom_name")]
    pub custom_name: String,
}

fn default_custom_name() -> String {
    "Custom Provider".to_string()
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            reference: ProviderProfile {
                id: ProviderId::Reference,
                name: "Partner & ComplyPay".to_string(),
                payin_percentage: Decimal::new(5, 3),
                payin_fixed_eur: Decimal::new(6, 2),
                payout_percentage: Decimal::ZERO,
                payout_fixed_eur: Decimal::ZERO,
                wallet_price_eur: Decimal::ONE,
                platform_fee_eur: Decimal::new(300, 0),
            },
            provider_a: ProviderProfile {
                id: ProviderId::ProviderA,
                name: "Stripe".to_string(),
                payin_percentage: Decimal::new(15, 3),
                payin_fixed_eur: Decimal::new(25, 2),
                payout_percentage: Decimal::new(25, 4),
                payout_fixed_eur: Decimal::new(10, 2),
                wallet_price_eur: Decimal::new(2, 0),
                platform_fee_eur: Decimal::ZERO,
            },
            provider_b: ProviderProfile {
                id: ProviderId::ProviderB,
                name: "Mangopay".to_string(),
                payin_percentage: Decimal::new(14, 3),
                payin_fixed_eur: Decimal::new(25, 2),
                payout_percentage: Decimal::ZERO,
                payout_fixed_eur: Decimal::new(2, 1),
                wallet_price_eur: Decimal::ZERO,
                platform_fee_eur: Decimal::new(249, 0),
            },
            reference_payout_fees: PayoutFeeTable {
                monthly: Decimal::ZERO,
                weekly: Decimal::new(50, 2),
                daily: Decimal::new(100, 2),
            },
            reference_platform_tiers: PlatformFeeTiers {
                low_threshold_eur: Decimal::new(250_000, 0),
                high_threshold_eur: Decimal::new(2_000_000, 0),
                low_fee_eur: Decimal::new(300, 0),
                mid_fee_eur: Decimal::new(600, 0),
                high_fee_eur: Decimal::new(999, 0),
            },
            custom_name: default_custom_name(),
        }
    }
}

impl FeeSchedule {
    /// Static profile for a provider; `None` for the custom provider
    pub fn profile(&self, id: ProviderId) -> Option<&ProviderProfile> {
        match id {
            ProviderId::Reference => Some(&self.reference),
            ProviderId::ProviderA => Some(&self.provider_a),
            ProviderId::ProviderB => Some(&self.provider_b),
            ProviderId::Custom => None,
        }
    }

    pub fn display_name(&self, id: ProviderId) -> &str {
        self.profile(id)
            .map(|profile| profile.name.as_str())
            .unwrap_or(self.custom_name.as_str())
    }

    /// Parse and validate a schedule from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let schedule: FeeSchedule = serde_yaml::from_str(yaml)?;
        schedule.validate()?;
        Ok(schedule)
    }

    /// Load a schedule from a YAML file on disk
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let schedule = Self::from_yaml_str(&contents)?;

        tracing::info!(
            path = %path.display(),
            reference = %schedule.reference.name,
            "Loaded fee schedule"
        );

        Ok(schedule)
    }

    pub fn validate(&self) -> Result<()> {
        self.reference.validate(ProviderId::Reference)?;
        self.provider_a.validate(ProviderId::ProviderA)?;
        self.provider_b.validate(ProviderId::ProviderB)?;

        let payout = &self.reference_payout_fees;
        if [payout.monthly, payout.weekly, payout.daily]
            .iter()
            .any(|fee| *fee < Decimal::ZERO)
        {
            return Err(AppError::configuration(
                "Reference payout fees cannot be negative",
            ));
        }

        let tiers = &self.reference_platform_tiers;
        if tiers.low_threshold_eur >= tiers.high_threshold_eur {
            return Err(AppError::configuration(format!(
                "Platform fee low threshold ({}) must be below the high threshold ({})",
                tiers.low_threshold_eur, tiers.high_threshold_eur
            )));
        }

        if [tiers.low_fee_eur, tiers.mid_fee_eur, tiers.high_fee_eur]
            .iter()
            .any(|fee| *fee < Decimal::ZERO)
        {
            return Err(AppError::configuration(
                "Platform fees cannot be negative",
            ));
        }

        Ok(())
    }
}
