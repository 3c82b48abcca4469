use rust_decimal::Decimal;

use crate::modules::estimates::models::{CalculationInput, CostResult, ProviderId, Savings};

use super::fee_resolver::EffectiveFees;

/// Share of GMV, by value, that flows back out as pay-outs
pub const PAYOUT_VOLUME_SHARE: Decimal = Decimal::from_parts(8, 0, 0, false, 1);

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Applies effective fees to a merchant's volumes.
///
/// All arithmetic saturates, so even absurd inputs yield a result.
pub struct CostCalculator;

impl CostCalculator {
    pub fn new() -> Self {
        Self
    }

    /// payin  = gmv × payin% + payins × payin fixed
    /// payout = (gmv × 0.8) × payout% + payouts × payout fixed
    /// wallet = vendors × wallet price
    /// total  = payin + payout + wallet + platform fee
    pub fn calculate(
        &self,
        provider: ProviderId,
        name: &str,
        fees: &EffectiveFees,
        input: &CalculationInput,
    ) -> CostResult {
        let gmv = input.gmv();
        let payins = Decimal::from(input.payin_count());
        let payouts = Decimal::from(input.payout_count());
        let vendors = Decimal::from(input.vendor_count());

        let payin_cost = gmv
            .saturating_mul(fees.payin_percentage)
            .saturating_add(payins.saturating_mul(fees.payin_fixed));

        let payout_volume = gmv.saturating_mul(PAYOUT_VOLUME_SHARE);
        let payout_cost = payout_volume
            .saturating_mul(fees.payout_percentage)
            .saturating_add(payouts.saturating_mul(fees.payout_fixed));

        let wallet_cost = vendors.saturating_mul(fees.wallet_price);

        let total_monthly_cost = payin_cost
            .saturating_add(payout_cost)
            .saturating_add(wallet_cost)
            .saturating_add(fees.platform_fee);

        CostResult {
            provider,
            name: name.to_string(),
            total_monthly_cost,
            total_annual_cost: self.annualize(total_monthly_cost),
            savings: None,
        }
    }

    pub fn annualize(&self, monthly: Decimal) -> Decimal {
        monthly.saturating_mul(MONTHS_PER_YEAR)
    }

    /// Fill in savings against the reference result for every other provider.
    /// Leaves everything untouched when no reference result is present.
    pub fn apply_savings(&self, results: &mut [CostResult]) {
        let reference_annual = match results
            .iter()
            .find(|result| result.provider == ProviderId::Reference)
        {
            Some(reference) => reference.total_annual_cost,
            None => return,
        };

        for result in results
            .iter_mut()
            .filter(|result| result.provider != ProviderId::Reference)
        {
            result.savings = Some(Savings::between(reference_annual, result.total_annual_cost));
        }
    }
}

impl Default for CostCalculator {
    fn default() -> Self {
        Self::new()
    }
}
