//! PSP cost comparison library
//!
//! Estimates what each payment-service provider would charge a merchant per
//! month and per year, and how that compares with the reference provider.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::estimates;
