use tracing::debug;

use crate::modules::estimates::models::{
    comparison_set, CalculationInput, CostReport, FeeSchedule, ProviderId,
};

use super::cost_calculator::CostCalculator;
use super::fee_resolver::{FeeResolver, ResolutionContext};

/// Recomputes the full result set for an input snapshot.
///
/// Pure and synchronous: nothing is cached between calls, every call builds a
/// new [`CostReport`] from scratch.
#[derive(Debug, Clone, Default)]
pub struct EstimateService {
    resolver: FeeResolver,
}

impl EstimateService {
    pub fn new(resolver: FeeResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &FeeResolver {
        &self.resolver
    }

    pub fn schedule(&self) -> &FeeSchedule {
        self.resolver.schedule()
    }

    /// Compute costs for the reference provider plus `requested`.
    pub fn recompute(&self, input: &CalculationInput, requested: &[ProviderId]) -> CostReport {
        let calculator = CostCalculator::new();
        let rates = self.resolver.rates();

        let context = ResolutionContext {
            currency: input.currency(),
            payout_frequency: input.payout_frequency(),
            gmv_in_eur: rates.convert_inverse(input.gmv(), input.currency()),
            custom_fees: input.custom_fees(),
        };

        let mut results: Vec<_> = comparison_set(requested)
            .into_iter()
            .map(|provider| {
                let fees = self.resolver.resolve(provider, &context);
                calculator.calculate(
                    provider,
                    self.schedule().display_name(provider),
                    &fees,
                    input,
                )
            })
            .collect();

        calculator.apply_savings(&mut results);

        debug!(
            currency = %input.currency(),
            gmv = %input.gmv(),
            providers = results.len(),
            "Recomputed cost estimates"
        );

        CostReport {
            currency: input.currency(),
            results,
        }
    }
}
