//! Mexico-only money movement: payouts, fees and customer transfers.

use crate::router::{Payload, Router};
use openpay_core::route::{
    Parent, FEE_CREATE, FEE_LIST, PAYOUT_CREATE, PAYOUT_GET, PAYOUT_LIST, TRANSFER_CREATE,
    TRANSFER_GET, TRANSFER_LIST,
};
use openpay_core::{
    FeeInput, FeeListQuery, OpenpayResult, PayoutInput, PayoutListQuery, Transaction,
    TransferInput, TransferListQuery,
};

/// Payouts to a bank account or card
#[derive(Debug, Clone, Copy)]
pub struct Payouts<'a> {
    router: &'a Router,
    parent: Parent<'a>,
}

impl<'a> Payouts<'a> {
    pub(crate) fn new(router: &'a Router, parent: Parent<'a>) -> Self {
        Self { router, parent }
    }

    pub async fn create(&self, input: &PayoutInput) -> OpenpayResult<Transaction> {
        self.router
            .send(&PAYOUT_CREATE, self.parent, None, Payload::body(input)?)
            .await
    }

    pub async fn list(&self, query: &PayoutListQuery) -> OpenpayResult<Vec<Transaction>> {
        self.router
            .send(&PAYOUT_LIST, self.parent, None, Payload::query(query)?)
            .await
    }

    pub async fn get(&self, transaction_id: &str) -> OpenpayResult<Transaction> {
        self.router
            .send(&PAYOUT_GET, self.parent, Some(transaction_id), Payload::empty())
            .await
    }
}

/// Fees charged to a customer balance
#[derive(Debug, Clone, Copy)]
pub struct Fees<'a> {
    router: &'a Router,
}

impl<'a> Fees<'a> {
    pub(crate) fn new(router: &'a Router) -> Self {
        Self { router }
    }

    pub async fn create(&self, input: &FeeInput) -> OpenpayResult<Transaction> {
        self.router
            .send(&FEE_CREATE, Parent::Merchant, None, Payload::body(input)?)
            .await
    }

    pub async fn list(&self, query: &FeeListQuery) -> OpenpayResult<Vec<Transaction>> {
        self.router
            .send(&FEE_LIST, Parent::Merchant, None, Payload::query(query)?)
            .await
    }
}

/// Transfers from one customer balance to another
#[derive(Debug, Clone, Copy)]
pub struct Transfers<'a> {
    router: &'a Router,
    customer_id: &'a str,
}

impl<'a> Transfers<'a> {
    pub(crate) fn new(router: &'a Router, customer_id: &'a str) -> Self {
        Self {
            router,
            customer_id,
        }
    }

    fn parent(&self) -> Parent<'a> {
        Parent::Customer(self.customer_id)
    }

    pub async fn create(&self, input: &TransferInput) -> OpenpayResult<Transaction> {
        self.router
            .send(&TRANSFER_CREATE, self.parent(), None, Payload::body(input)?)
            .await
    }

    pub async fn list(&self, query: &TransferListQuery) -> OpenpayResult<Vec<Transaction>> {
        self.router
            .send(&TRANSFER_LIST, self.parent(), None, Payload::query(query)?)
            .await
    }

    pub async fn get(&self, transaction_id: &str) -> OpenpayResult<Transaction> {
        self.router
            .send(
                &TRANSFER_GET,
                self.parent(),
                Some(transaction_id),
                Payload::empty(),
            )
            .await
    }
}
