//! # Checkout Types
//!
//! Hosted payment links (Peru). The response shape is only partly
//! documented, so unknown fields are kept in `extra`.

use crate::common::{Currency, ListQuery};
use serde::{Deserialize, Serialize};

/// Customer data embedded in a merchant-level checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutCustomer {
    pub name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutInput {
    pub amount: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    pub currency: Currency,
    pub redirect_url: String,
    /// `yyyy-mm-dd HH:MM`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_email: Option<bool>,
    /// Required for merchant-level checkouts, omitted for customer checkouts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CheckoutCustomer>,
}

/// Status a checkout can be moved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutStatus {
    Available,
    Other(String),
}

impl CheckoutStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CheckoutStatus::Available => "available",
            CheckoutStatus::Other(s) => s.as_str(),
        }
    }
}

impl std::fmt::Display for CheckoutStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CheckoutUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Checkout {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(default)]
    pub checkout_link: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

pub type CheckoutListQuery = ListQuery;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_checkout_keeps_unknown_fields() {
        let json = r#"{
            "id": "chk_1",
            "status": "available",
            "amount": 250,
            "currency": "PEN",
            "checkout_link": "https://sandbox-api.openpay.pe/checkout/chk_1",
            "customer": { "name": "Juan" }
        }"#;

        let checkout: Checkout = serde_json::from_str(json).unwrap();
        assert_eq!(checkout.status.as_deref(), Some("available"));
        assert_eq!(checkout.currency, Some(Currency::PEN));
        assert!(checkout.extra.contains_key("customer"));
    }

    #[test]
    fn test_status_text() {
        assert_eq!(CheckoutStatus::Available.to_string(), "available");
        assert_eq!(CheckoutStatus::Other("expired".into()).as_str(), "expired");
    }
}
