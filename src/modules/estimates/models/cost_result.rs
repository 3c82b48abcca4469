use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Currency;

use super::provider::ProviderId;

/// Which side of a comparison is cheaper, read off the two annual totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsDirection {
    /// Choosing the reference provider saves money
    ReferenceCheaper,
    /// The compared provider is cheaper than the reference
    ProviderCheaper,
    Even,
}

/// Annual cost difference between the reference and another provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Savings {
    /// Always non-negative
    pub annual_amount: Decimal,
    pub direction: SavingsDirection,
}

impl Savings {
    pub fn between(reference_annual: Decimal, provider_annual: Decimal) -> Self {
        let direction = match reference_annual.cmp(&provider_annual) {
            std::cmp::Ordering::Less => SavingsDirection::ReferenceCheaper,
            std::cmp::Ordering::Greater => SavingsDirection::ProviderCheaper,
            std::cmp::Ordering::Equal => SavingsDirection::Even,
        };

        Self {
            annual_amount: reference_annual.saturating_sub(provider_annual).abs(),
            direction,
        }
    }
}

/// Cost of one provider for the current input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostResult {
    pub provider: ProviderId,
    pub name: String,
    pub total_monthly_cost: Decimal,
    pub total_annual_cost: Decimal,
    /// `None` for the reference provider itself
    pub savings: Option<Savings>,
}

/// Complete result set of one recomputation, in display currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostReport {
    pub currency: Currency,
    pub results: Vec<CostResult>,
}

impl CostReport {
    pub fn get(&self, provider: ProviderId) -> Option<&CostResult> {
        self.results.iter().find(|result| result.provider == provider)
    }

    pub fn reference(&self) -> Option<&CostResult> {
        self.get(ProviderId::Reference)
    }
}
