pub mod controllers;
pub mod models;
pub mod services;

pub use models::{CalculationInput, CostReport, CostResult, FeeSchedule, ProviderId};
pub use services::{CostCalculator, EstimateService, FeeResolver};
