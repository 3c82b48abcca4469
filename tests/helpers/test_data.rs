// Test Data Factory
//
// Request payloads for the estimate endpoint.

use serde_json::{json, Value};

/// Test data factory for estimate requests
pub struct TestDataFactory;

impl TestDataFactory {
    /// The calculator's default merchant: 1M GMV, 10k pay-ins, 400 pay-outs,
    /// 100 vendors, weekly payouts
    pub fn merchant_payload(currency: &str) -> Value {
        json!({
            "currency": currency,
            "gmv": "1,000,000.00",
            "payins": 10000,
            "payouts": 400,
            "vendors": 100,
            "payout_frequency": "weekly",
        })
    }

    /// Merchant payload comparing against a custom provider.
    /// Percentages are entered as percent.
    pub fn custom_payload(currency: &str) -> Value {
        let mut payload = Self::merchant_payload(currency);
        payload["mode"] = json!("custom");
        payload["custom"] = json!({
            "payin_percentage": "1.8",
            "payin_fixed": "0.25",
            "payout_percentage": "0.25",
            "payout_fixed": "0.25",
            "wallet_price": "1.00",
        });
        payload
    }

    /// Custom provider with every fee zero and no vendors
    pub fn zero_custom_payload(gmv: &str) -> Value {
        json!({
            "currency": "EUR",
            "gmv": gmv,
            "payins": 500,
            "payouts": 50,
            "vendors": 0,
            "payout_frequency": "monthly",
            "mode": "custom",
            "custom": {
                "payin_percentage": "0",
                "payin_fixed": "0",
                "payout_percentage": "0",
                "payout_fixed": "0",
                "wallet_price": "0",
            },
        })
    }
}
