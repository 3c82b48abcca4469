use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;

use crate::core::{Currency, ExchangeRates};
use crate::modules::estimates::models::{CustomFees, FeeSchedule, PayoutFrequency, ProviderId};

/// Fee parameters of one provider, expressed in the display currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EffectiveFees {
    pub payin_percentage: Decimal,
    pub payin_fixed: Decimal,
    pub payout_percentage: Decimal,
    pub payout_fixed: Decimal,
    pub wallet_price: Decimal,
    pub platform_fee: Decimal,
}

impl From<CustomFees> for EffectiveFees {
    /// Custom fees are already in the display currency and carry no platform fee
    fn from(fees: CustomFees) -> Self {
        Self {
            payin_percentage: fees.payin_percentage,
            payin_fixed: fees.payin_fixed,
            payout_percentage: fees.payout_percentage,
            payout_fixed: fees.payout_fixed,
            wallet_price: fees.wallet_price,
            platform_fee: Decimal::ZERO,
        }
    }
}

/// Inputs the dynamic fee rules depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionContext {
    pub currency: Currency,
    pub payout_frequency: Option<PayoutFrequency>,
    pub gmv_in_eur: Decimal,
    pub custom_fees: CustomFees,
}

/// Turns a provider id plus context into effective fees.
///
/// Rules are plain branches on provider identity; the schedule itself is
/// shared read-only and never adjusted per request.
#[derive(Debug, Clone)]
pub struct FeeResolver {
    schedule: Arc<FeeSchedule>,
    rates: ExchangeRates,
}

impl FeeResolver {
    pub fn new(schedule: Arc<FeeSchedule>, rates: ExchangeRates) -> Self {
        Self { schedule, rates }
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    pub fn rates(&self) -> &ExchangeRates {
        &self.rates
    }

    pub fn resolve(&self, provider: ProviderId, context: &ResolutionContext) -> EffectiveFees {
        let profile = match self.schedule.profile(provider) {
            Some(profile) => profile,
            None => return EffectiveFees::from(context.custom_fees),
        };

        let convert = |amount_eur: Decimal| self.rates.convert(amount_eur, context.currency);

        let (payout_fixed_eur, platform_fee_eur) = match provider {
            ProviderId::Reference => (
                context
                    .payout_frequency
                    .map(|frequency| self.schedule.reference_payout_fees.fee_for(frequency))
                    .unwrap_or(profile.payout_fixed_eur),
                self.schedule
                    .reference_platform_tiers
                    .fee_for(context.gmv_in_eur),
            ),
            _ => (profile.payout_fixed_eur, profile.platform_fee_eur),
        };

        let fees = EffectiveFees {
            payin_percentage: profile.payin_percentage,
            payin_fixed: convert(profile.payin_fixed_eur),
            payout_percentage: profile.payout_percentage,
            payout_fixed: convert(payout_fixed_eur),
            wallet_price: convert(profile.wallet_price_eur),
            platform_fee: convert(platform_fee_eur),
        };

        tracing::debug!(
            provider = %provider,
            currency = %context.currency,
            gmv_in_eur = %context.gmv_in_eur,
            platform_fee = %fees.platform_fee,
            payout_fixed = %fees.payout_fixed,
            "Resolved provider fees"
        );

        fees
    }
}

impl Default for FeeResolver {
    fn default() -> Self {
        Self::new(Arc::new(FeeSchedule::default()), ExchangeRates::default())
    }
}
