use crate::router::{Payload, Router};
use openpay_core::route::{
    Parent, CHECKOUT_CREATE, CHECKOUT_GET, CHECKOUT_LIST, CHECKOUT_UPDATE,
};
use openpay_core::{
    Checkout, CheckoutInput, CheckoutListQuery, CheckoutStatus, CheckoutUpdate, OpenpayResult,
};

/// Hosted checkout links (Peru)
#[derive(Debug, Clone, Copy)]
pub struct Checkouts<'a> {
    router: &'a Router,
}

impl<'a> Checkouts<'a> {
    pub(crate) fn new(router: &'a Router) -> Self {
        Self { router }
    }

    pub async fn create(&self, input: &CheckoutInput) -> OpenpayResult<Checkout> {
        self.router
            .send(&CHECKOUT_CREATE, Parent::Merchant, None, Payload::body(input)?)
            .await
    }

    pub async fn list(&self, query: &CheckoutListQuery) -> OpenpayResult<Vec<Checkout>> {
        self.router
            .send(&CHECKOUT_LIST, Parent::Merchant, None, Payload::query(query)?)
            .await
    }

    pub async fn get(&self, checkout_id: &str) -> OpenpayResult<Checkout> {
        self.router
            .send(&CHECKOUT_GET, Parent::Merchant, Some(checkout_id), Payload::empty())
            .await
    }

    /// Move a checkout to `status`; the status travels as a query parameter.
    pub async fn update(
        &self,
        checkout_id: &str,
        status: &CheckoutStatus,
        input: &CheckoutUpdate,
    ) -> OpenpayResult<Checkout> {
        let payload = Payload::body(input)?.with_param("status", status.as_str());
        self.router
            .send(&CHECKOUT_UPDATE, Parent::Merchant, Some(checkout_id), payload)
            .await
    }
}

/// Checkouts created on behalf of one customer; create only
#[derive(Debug, Clone, Copy)]
pub struct CustomerCheckouts<'a> {
    router: &'a Router,
    customer_id: &'a str,
}

impl<'a> CustomerCheckouts<'a> {
    pub(crate) fn new(router: &'a Router, customer_id: &'a str) -> Self {
        Self {
            router,
            customer_id,
        }
    }

    pub async fn create(&self, input: &CheckoutInput) -> OpenpayResult<Checkout> {
        self.router
            .send(
                &CHECKOUT_CREATE,
                Parent::Customer(self.customer_id),
                None,
                Payload::body(input)?,
            )
            .await
    }
}
