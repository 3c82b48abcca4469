//! HTTP application wiring shared by the binary and the HTTP tests

use std::sync::Arc;

use actix_web::{http::StatusCode, web, HttpResponse};

use crate::core::ExchangeRates;
use crate::middleware::{error_response, json_error_handler};
use crate::modules::estimates::{EstimateService, FeeResolver, FeeSchedule};
use crate::modules::{estimates, health};

/// Shared, read-only estimate service built from a fee schedule
pub fn estimate_service(schedule: FeeSchedule) -> web::Data<Arc<EstimateService>> {
    let resolver = FeeResolver::new(Arc::new(schedule), ExchangeRates::default());
    web::Data::new(Arc::new(EstimateService::new(resolver)))
}

/// Register every route plus the JSON extractor configuration
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .configure(health::configure)
        .configure(estimates::controllers::configure);
}

/// Fallback for unknown routes
pub async fn not_found() -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, "Route not found")
}
