use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::core::error::AppError;
use crate::core::ExchangeRates;
use crate::modules::estimates::models::{EstimateRequest, EstimateView, FeeSchedule};
use crate::modules::estimates::services::EstimateService;

/// Fee data exposed to collaborators
#[derive(Debug, Serialize)]
pub struct ScheduleResponse<'a> {
    pub exchange_rates: &'a ExchangeRates,
    pub schedule: &'a FeeSchedule,
}

/// Compute cost estimates for the submitted operational data
/// POST /estimates
pub async fn create_estimate(
    service: web::Data<Arc<EstimateService>>,
    payload: web::Json<EstimateRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    let input = request.to_input()?;
    let providers = request.requested_providers()?;

    let report = service.recompute(&input, &providers);

    tracing::info!(
        currency = %report.currency,
        providers = report.results.len(),
        "Estimate computed"
    );

    let view = EstimateView::from_report(&report, service.resolver().rates());
    Ok(HttpResponse::Ok().json(view))
}

/// Exchange rates and fee tables in use
/// GET /estimates/schedule
pub async fn get_schedule(service: web::Data<Arc<EstimateService>>) -> HttpResponse {
    HttpResponse::Ok().json(ScheduleResponse {
        exchange_rates: service.resolver().rates(),
        schedule: service.schedule(),
    })
}

/// Configure estimate routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/estimates")
            .route("", web::post().to(create_estimate))
            .route("/schedule", web::get().to(get_schedule)),
    );
}
