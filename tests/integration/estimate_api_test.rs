// HTTP tests for the estimate endpoints
//
// Builds the application in-process with the production route configuration
// and drives it through actix-web's test utilities.

use actix_web::{test, web, App};
use paycompare::app;
use paycompare::estimates::FeeSchedule;
use paycompare::middleware::RequestId;
use serde_json::{json, Value};

#[path = "../helpers/mod.rs"]
mod helpers;
use helpers::*;

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .wrap(RequestId)
                .app_data(app::estimate_service(FeeSchedule::default()))
                .configure(app::configure)
                .default_service(web::to(app::not_found)),
        )
        .await
    };
}

macro_rules! post_estimate {
    ($app:expr, $payload:expr) => {{
        let req = test::TestRequest::post()
            .uri("/estimates")
            .set_json($payload)
            .to_request();
        test::call_service(&$app, req).await
    }};
}

#[actix_web::test]
async fn test_standard_comparison_in_eur() {
    let app = test_app!();

    let resp = post_estimate!(app, TestDataFactory::merchant_payload("EUR"));
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["currency"], "EUR");
    assert_eq!(provider_ids(&body), vec!["reference", "provider-a", "provider-b"]);

    let reference = provider(&body, "reference");
    assert_eq!(reference["name"], "Partner & ComplyPay");
    assert_eq!(reference["monthly_cost_display"], "€6,500.00");
    assert_eq!(reference["annual_cost_display"], "€78,000.00");
    assert!(reference["savings"].is_null());

    let provider_a = provider(&body, "provider-a");
    assert_eq!(provider_a["annual_cost_display"], "€236,880.00");
    assert_eq!(provider_a["savings"]["direction"], "reference_cheaper");
    assert_eq!(
        provider_a["savings"]["label"],
        "Annual savings with Partner & ComplyPay: €158,880.00"
    );

    let provider_b = provider(&body, "provider-b");
    assert_eq!(provider_b["annual_cost_display"], "€201,948.00");
}

#[actix_web::test]
async fn test_custom_comparison() {
    let app = test_app!();

    let resp = post_estimate!(app, TestDataFactory::custom_payload("EUR"));
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(provider_ids(&body), vec!["reference", "custom"]);

    // 18000 + 2500 + 2000 + 100 + 100 per month
    let custom = provider(&body, "custom");
    assert_eq!(custom["name"], "Custom Provider");
    assert_eq!(custom["annual_cost_display"], "€272,400.00");
    assert_eq!(custom["savings"]["amount_display"], "€194,400.00");
    assert_eq!(custom["savings"]["direction"], "reference_cheaper");

    let note = body["note"].as_str().unwrap();
    assert!(note.contains("Custom provider fees are entered directly in EUR"));
}

#[actix_web::test]
async fn test_zero_custom_fees_cost_nothing_for_any_gmv() {
    let app = test_app!();

    for gmv in ["0", "12,345.67", "9,999,999.99"] {
        let resp = post_estimate!(app, TestDataFactory::zero_custom_payload(gmv));
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;

        assert_eq!(provider(&body, "custom")["annual_cost_display"], "€0.00");
    }
}

#[actix_web::test]
async fn test_display_currency_is_applied() {
    let app = test_app!();

    for (currency, symbol) in [("GBP", "£"), ("DKK", "kr")] {
        let resp = post_estimate!(app, TestDataFactory::merchant_payload(currency));
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;

        assert_eq!(body["currency"], currency);
        for view in body["providers"].as_array().unwrap() {
            assert!(view["annual_cost_display"].as_str().unwrap().starts_with(symbol));
        }
    }
}

#[actix_web::test]
async fn test_malformed_numbers_degrade_to_zero() {
    let app = test_app!();

    let resp = post_estimate!(
        app,
        json!({
            "currency": "EUR",
            "gmv": "lots",
            "payins": "many",
            "payouts": "1,000",
            "vendors": -5,
            "payout_frequency": "monthly",
        })
    );
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;

    // only the low-tier platform fee remains
    assert_eq!(provider(&body, "reference")["monthly_cost_display"], "€300.00");
    assert_eq!(provider(&body, "provider-a")["monthly_cost_display"], "€0.00");
}

#[actix_web::test]
async fn test_unknown_frequency_falls_back_to_static_payout_fee() {
    let app = test_app!();

    let mut payload = TestDataFactory::merchant_payload("EUR");
    payload["payout_frequency"] = json!("fortnightly");

    let resp = post_estimate!(app, payload);
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;

    // 5000 + 600 + 0 + 100 + 600
    assert_eq!(provider(&body, "reference")["monthly_cost_display"], "€6,300.00");
}

#[actix_web::test]
async fn test_explicit_provider_list() {
    let app = test_app!();

    let mut payload = TestDataFactory::custom_payload("EUR");
    payload["providers"] = json!(["provider-a", "custom", "provider-a"]);

    let resp = post_estimate!(app, payload);
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(provider_ids(&body), vec!["reference", "provider-a", "custom"]);
}

#[actix_web::test]
async fn test_unknown_selectors_are_rejected() {
    let app = test_app!();

    let mut bad_currency = TestDataFactory::merchant_payload("USD");
    bad_currency["currency"] = json!("USD");
    let mut bad_mode = TestDataFactory::merchant_payload("EUR");
    bad_mode["mode"] = json!("everything");
    let mut bad_provider = TestDataFactory::merchant_payload("EUR");
    bad_provider["providers"] = json!(["paypal"]);

    for payload in [bad_currency, bad_mode, bad_provider] {
        let resp = post_estimate!(app, payload);
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_error_body(&body, 400);
    }
}

#[actix_web::test]
async fn test_malformed_body_is_rejected() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/estimates")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"currency\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_error_body(&body, 400);
}

#[actix_web::test]
async fn test_schedule_endpoint_exposes_constants() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/estimates/schedule").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["exchange_rates"]["gbp_to_eur"], "1.18");
    assert_eq!(body["exchange_rates"]["dkk_to_eur"], "0.134");
    assert_eq!(body["schedule"]["provider_a"]["name"], "Stripe");
    assert_eq!(body["schedule"]["provider_b"]["name"], "Mangopay");
    assert_eq!(
        body["schedule"]["reference_platform_tiers"]["low_threshold_eur"],
        "250000"
    );
}

#[actix_web::test]
async fn test_health_and_unknown_route() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    assert!(resp.headers().contains_key("x-request-id"));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert!(body.get("checks").is_none());

    let req = test::TestRequest::get().uri("/ready").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_error_body(&body, 404);
}
