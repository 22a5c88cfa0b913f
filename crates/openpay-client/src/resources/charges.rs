use crate::client::{Mexico, Refundable, Region};
use crate::router::{Payload, Router};
use openpay_core::route::{
    Parent, CHARGE_CAPTURE, CHARGE_CREATE, CHARGE_GET, CHARGE_LIST, CHARGE_REFUND,
};
use openpay_core::{
    CaptureInput, ChargeInput, ChargeListQuery, OpenpayResult, RefundInput, Transaction,
};
use std::marker::PhantomData;

/// Charges for the merchant or one customer.
///
/// Refunds exist for Mexico and Colombia, captures for Mexico only.
#[derive(Debug)]
pub struct Charges<'a, R: Region> {
    router: &'a Router,
    parent: Parent<'a>,
    _region: PhantomData<R>,
}

impl<'a, R: Region> Charges<'a, R> {
    pub(crate) fn new(router: &'a Router, parent: Parent<'a>) -> Self {
        Self {
            router,
            parent,
            _region: PhantomData,
        }
    }

    pub async fn create(&self, input: &ChargeInput) -> OpenpayResult<Transaction> {
        self.router
            .send(&CHARGE_CREATE, self.parent, None, Payload::body(input)?)
            .await
    }

    pub async fn list(&self, query: &ChargeListQuery) -> OpenpayResult<Vec<Transaction>> {
        self.router
            .send(&CHARGE_LIST, self.parent, None, Payload::query(query)?)
            .await
    }

    pub async fn get(&self, transaction_id: &str) -> OpenpayResult<Transaction> {
        self.router
            .send(&CHARGE_GET, self.parent, Some(transaction_id), Payload::empty())
            .await
    }
}

impl<R: Refundable> Charges<'_, R> {
    pub async fn refund(
        &self,
        transaction_id: &str,
        input: &RefundInput,
    ) -> OpenpayResult<Transaction> {
        self.router
            .send(
                &CHARGE_REFUND,
                self.parent,
                Some(transaction_id),
                Payload::body(input)?,
            )
            .await
    }
}

impl Charges<'_, Mexico> {
    /// Capture a charge created with `capture: false`.
    pub async fn capture(
        &self,
        transaction_id: &str,
        input: &CaptureInput,
    ) -> OpenpayResult<Transaction> {
        self.router
            .send(
                &CHARGE_CAPTURE,
                self.parent,
                Some(transaction_id),
                Payload::body(input)?,
            )
            .await
    }
}
