use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Currency, ExchangeRates};

use super::cost_result::{CostReport, CostResult, Savings, SavingsDirection};
use super::provider::ProviderId;

/// Savings line shown under a non-reference provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsView {
    pub amount: Decimal,
    pub amount_display: String,
    pub direction: SavingsDirection,
    pub label: String,
}

impl SavingsView {
    fn new(savings: &Savings, currency: Currency, reference_name: &str) -> Self {
        let amount_display = currency.format_amount(savings.annual_amount);
        let label = match savings.direction {
            SavingsDirection::ReferenceCheaper => {
                format!("Annual savings with {}: {}", reference_name, amount_display)
            }
            SavingsDirection::ProviderCheaper => {
                format!("Annual extra cost with {}: {}", reference_name, amount_display)
            }
            SavingsDirection::Even => format!("Same annual cost as {}", reference_name),
        };

        Self {
            amount: savings.annual_amount,
            amount_display,
            direction: savings.direction,
            label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderCostView {
    pub provider: ProviderId,
    pub name: String,
    pub monthly_cost: Decimal,
    pub monthly_cost_display: String,
    pub annual_cost: Decimal,
    pub annual_cost_display: String,
    pub savings: Option<SavingsView>,
}

/// Response body of `POST /estimates`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateView {
    pub currency: Currency,
    pub providers: Vec<ProviderCostView>,
    pub note: String,
}

impl EstimateView {
    pub fn from_report(report: &CostReport, rates: &ExchangeRates) -> Self {
        let currency = report.currency;
        let reference_name = report
            .reference()
            .map(|result| result.name.as_str())
            .unwrap_or("the reference provider");

        let providers = report
            .results
            .iter()
            .map(|result| provider_view(result, currency, reference_name))
            .collect();

        Self {
            currency,
            providers,
            note: footnote(report, currency, rates),
        }
    }
}

fn provider_view(
    result: &CostResult,
    currency: Currency,
    reference_name: &str,
) -> ProviderCostView {
    ProviderCostView {
        provider: result.provider,
        name: result.name.clone(),
        monthly_cost: result.total_monthly_cost,
        monthly_cost_display: currency.format_amount(result.total_monthly_cost),
        annual_cost: result.total_annual_cost,
        annual_cost_display: currency.format_amount(result.total_annual_cost),
        savings: result
            .savings
            .as_ref()
            .map(|savings| SavingsView::new(savings, currency, reference_name)),
    }
}

fn footnote(report: &CostReport, currency: Currency, rates: &ExchangeRates) -> String {
    let static_names: Vec<&str> = report
        .results
        .iter()
        .filter(|result| result.provider != ProviderId::Custom)
        .map(|result| result.name.as_str())
        .collect();

    let mut note = format!(
        "Values are estimates. All fees for {} are stored in EUR and converted to {} \
         using rates: 1 GBP = {} EUR, 1 DKK = {} EUR.",
        static_names.join(", "),
        currency,
        rates.to_eur_rate(Currency::GBP),
        rates.to_eur_rate(Currency::DKK),
    );

    if report.get(ProviderId::Custom).is_some() {
        note.push_str(&format!(
            " Custom provider fees are entered directly in {}.",
            currency
        ));
    }

    note
}
