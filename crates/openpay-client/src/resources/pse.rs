use crate::router::{Payload, Router};
use openpay_core::route::{Parent, PSE_CREATE};
use openpay_core::{ChargeInput, OpenpayResult, Transaction};

/// PSE bank-transfer charges (Colombia).
///
/// Posted to the charges endpoint; the returned transaction carries the
/// redirect URL for the bank.
#[derive(Debug, Clone, Copy)]
pub struct Pse<'a> {
    router: &'a Router,
    parent: Parent<'a>,
}

impl<'a> Pse<'a> {
    pub(crate) fn new(router: &'a Router, parent: Parent<'a>) -> Self {
        Self { router, parent }
    }

    pub async fn create(&self, input: &ChargeInput) -> OpenpayResult<Transaction> {
        self.router
            .send(&PSE_CREATE, self.parent, None, Payload::body(input)?)
            .await
    }
}
