//! # Webhook Types
//!
//! Only registration is covered here. Incoming webhook payloads are not
//! parsed or verified by this crate.

use serde::{Deserialize, Serialize};

/// Event names a webhook can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebhookEventType {
    #[serde(rename = "charge.refunded")]
    ChargeRefunded,
    #[serde(rename = "charge.failed")]
    ChargeFailed,
    #[serde(rename = "charge.cancelled")]
    ChargeCancelled,
    #[serde(rename = "charge.created")]
    ChargeCreated,
    #[serde(rename = "charge.succeeded")]
    ChargeSucceeded,
    #[serde(rename = "charge.rescored.to.decline")]
    ChargeRescoredToDecline,
    #[serde(rename = "subscription.charge.failed")]
    SubscriptionChargeFailed,
    #[serde(rename = "payout.created")]
    PayoutCreated,
    #[serde(rename = "payout.succeeded")]
    PayoutSucceeded,
    #[serde(rename = "payout.failed")]
    PayoutFailed,
    #[serde(rename = "transfer.succeeded")]
    TransferSucceeded,
    #[serde(rename = "fee.succeeded")]
    FeeSucceeded,
    #[serde(rename = "fee.refund.succeeded")]
    FeeRefundSucceeded,
    #[serde(rename = "spei.received")]
    SpeiReceived,
    #[serde(rename = "chargeback.created")]
    ChargebackCreated,
    #[serde(rename = "chargeback.rejected")]
    ChargebackRejected,
    #[serde(rename = "chargeback.accepted")]
    ChargebackAccepted,
    #[serde(rename = "order.created")]
    OrderCreated,
    #[serde(rename = "order.activated")]
    OrderActivated,
    #[serde(rename = "order.payment.received")]
    OrderPaymentReceived,
    #[serde(rename = "order.completed")]
    OrderCompleted,
    #[serde(rename = "order.expired")]
    OrderExpired,
    #[serde(rename = "order.cancelled")]
    OrderCancelled,
    #[serde(rename = "order.payment.cancelled")]
    OrderPaymentCancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookStatus {
    Verified,
    Unverified,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Webhook {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub event_types: Vec<WebhookEventType>,
    #[serde(default)]
    pub status: Option<WebhookStatus>,
}

/// Webhook registration; `user`/`password` enable HTTP basic auth on delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookInput {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub event_types: Vec<WebhookEventType>,
}

impl WebhookInput {
    pub fn new(url: impl Into<String>, event_types: Vec<WebhookEventType>) -> Self {
        Self {
            url: url.into(),
            user: None,
            password: None,
            event_types,
        }
    }

    pub fn with_basic_auth(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self.password = Some(password.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_names() {
        let input = WebhookInput::new(
            "https://example.com/hooks",
            vec![
                WebhookEventType::ChargeRefunded,
                WebhookEventType::ChargebackAccepted,
                WebhookEventType::OrderPaymentCancelled,
            ],
        );

        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(
            body["event_types"],
            serde_json::json!(["charge.refunded", "chargeback.accepted", "order.payment.cancelled"])
        );
        assert!(body.get("user").is_none());
    }

    #[test]
    fn test_parse_webhook() {
        let json = r#"{
            "id": "wxvanstudf4ssme8khmc",
            "url": "https://example.com/hooks",
            "user": "juanito",
            "event_types": ["charge.succeeded", "spei.received"],
            "status": "verified"
        }"#;

        let hook: Webhook = serde_json::from_str(json).unwrap();
        assert_eq!(hook.status, Some(WebhookStatus::Verified));
        assert_eq!(hook.event_types[1], WebhookEventType::SpeiReceived);
    }
}
