use crate::router::{Payload, Router};
use openpay_core::route::{Parent, WEBHOOK_CREATE, WEBHOOK_DELETE, WEBHOOK_GET, WEBHOOK_LIST};
use openpay_core::{OpenpayResult, Webhook, WebhookInput};

/// Webhook registrations. Registration only; deliveries are not verified here.
#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a> {
    router: &'a Router,
}

impl<'a> Webhooks<'a> {
    pub(crate) fn new(router: &'a Router) -> Self {
        Self { router }
    }

    pub async fn create(&self, input: &WebhookInput) -> OpenpayResult<Webhook> {
        self.router
            .send(&WEBHOOK_CREATE, Parent::Merchant, None, Payload::body(input)?)
            .await
    }

    pub async fn list(&self) -> OpenpayResult<Vec<Webhook>> {
        self.router
            .send(&WEBHOOK_LIST, Parent::Merchant, None, Payload::empty())
            .await
    }

    pub async fn get(&self, webhook_id: &str) -> OpenpayResult<Webhook> {
        self.router
            .send(&WEBHOOK_GET, Parent::Merchant, Some(webhook_id), Payload::empty())
            .await
    }

    pub async fn delete(&self, webhook_id: &str) -> OpenpayResult<()> {
        self.router
            .send_unit(&WEBHOOK_DELETE, Parent::Merchant, Some(webhook_id), Payload::empty())
            .await
    }
}
