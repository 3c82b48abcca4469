pub mod amount;
pub mod currency;
pub mod error;

pub use amount::{parse_amount, parse_count, RawAmount};
pub use currency::{Currency, ExchangeRates, DKK_TO_EUR_RATE, GBP_TO_EUR_RATE};
pub use error::{AppError, Result};
