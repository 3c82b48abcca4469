pub mod cost_calculator;
pub mod estimate_service;
pub mod fee_resolver;

pub use cost_calculator::{CostCalculator, PAYOUT_VOLUME_SHARE};
pub use estimate_service::EstimateService;
pub use fee_resolver::{EffectiveFees, FeeResolver, ResolutionContext};
