pub mod calculation_input;
pub mod cost_result;
pub mod estimate_view;
pub mod provider;

pub use calculation_input::{
    comparison_set, CalculationInput, ComparisonMode, CustomFees, EstimateRequest,
    PayoutFrequency, RawCustomFees,
};
pub use cost_result::{CostReport, CostResult, Savings, SavingsDirection};
pub use estimate_view::{EstimateView, ProviderCostView, SavingsView};
pub use provider::{FeeSchedule, PayoutFeeTable, PlatformFeeTiers, ProviderId, ProviderProfile};
