use crate::router::{Payload, Router};
use openpay_core::route::{
    Parent, CARD_CREATE, CARD_DELETE, CARD_GET, CARD_LIST, CARD_UPDATE,
};
use openpay_core::{Card, CardInput, CardListQuery, CardUpdate, OpenpayResult};

/// Stored cards for the merchant or one customer
#[derive(Debug, Clone, Copy)]
pub struct Cards<'a> {
    router: &'a Router,
    parent: Parent<'a>,
}

impl<'a> Cards<'a> {
    pub(crate) fn new(router: &'a Router, parent: Parent<'a>) -> Self {
        Self { router, parent }
    }

    pub async fn create(&self, input: &CardInput) -> OpenpayResult<Card> {
        self.router
            .send(&CARD_CREATE, self.parent, None, Payload::body(input)?)
            .await
    }

    pub async fn list(&self, query: &CardListQuery) -> OpenpayResult<Vec<Card>> {
        self.router
            .send(&CARD_LIST, self.parent, None, Payload::query(query)?)
            .await
    }

    pub async fn get(&self, card_id: &str) -> OpenpayResult<Card> {
        self.router
            .send(&CARD_GET, self.parent, Some(card_id), Payload::empty())
            .await
    }

    /// Update the holder, expiry or CVV. Whatever body comes back is discarded.
    pub async fn update(&self, card_id: &str, input: &CardUpdate) -> OpenpayResult<()> {
        self.router
            .send_unit(&CARD_UPDATE, self.parent, Some(card_id), Payload::body(input)?)
            .await
    }

    pub async fn delete(&self, card_id: &str) -> OpenpayResult<()> {
        self.router
            .send_unit(&CARD_DELETE, self.parent, Some(card_id), Payload::empty())
            .await
    }
}
