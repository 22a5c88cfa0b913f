use super::{
    BankAccounts, Cards, Charges, CustomerCheckouts, Payouts, Pse, Subscriptions, Transfers,
};
use crate::client::{Colombia, Mexico, Peru, Region};
use crate::router::{Payload, Router};
use openpay_core::route::{
    Parent, CUSTOMER_CREATE, CUSTOMER_DELETE, CUSTOMER_GET, CUSTOMER_LIST, CUSTOMER_UPDATE,
};
use openpay_core::{Customer, CustomerInput, CustomerListQuery, CustomerUpdate, OpenpayResult};
use std::marker::PhantomData;

/// Customers, plus the resources nested under `customers/{id}/`
#[derive(Debug)]
pub struct Customers<'a, R: Region> {
    router: &'a Router,
    _region: PhantomData<R>,
}

impl<'a, R: Region> Customers<'a, R> {
    pub(crate) fn new(router: &'a Router) -> Self {
        Self {
            router,
            _region: PhantomData,
        }
    }

    pub async fn create(&self, input: &CustomerInput) -> OpenpayResult<Customer> {
        self.router
            .send(&CUSTOMER_CREATE, Parent::Merchant, None, Payload::body(input)?)
            .await
    }

    pub async fn list(&self, query: &CustomerListQuery) -> OpenpayResult<Vec<Customer>> {
        self.router
            .send(&CUSTOMER_LIST, Parent::Merchant, None, Payload::query(query)?)
            .await
    }

    pub async fn get(&self, customer_id: &str) -> OpenpayResult<Customer> {
        self.router
            .send(&CUSTOMER_GET, Parent::Merchant, Some(customer_id), Payload::empty())
            .await
    }

    pub async fn update(
        &self,
        customer_id: &str,
        input: &CustomerUpdate,
    ) -> OpenpayResult<Customer> {
        self.router
            .send(
                &CUSTOMER_UPDATE,
                Parent::Merchant,
                Some(customer_id),
                Payload::body(input)?,
            )
            .await
    }

    pub async fn delete(&self, customer_id: &str) -> OpenpayResult<()> {
        self.router
            .send_unit(
                &CUSTOMER_DELETE,
                Parent::Merchant,
                Some(customer_id),
                Payload::empty(),
            )
            .await
    }

    pub fn cards(&self, customer_id: &'a str) -> Cards<'a> {
        Cards::new(self.router, Parent::Customer(customer_id))
    }

    pub fn charges(&self, customer_id: &'a str) -> Charges<'a, R> {
        Charges::new(self.router, Parent::Customer(customer_id))
    }

    pub fn subscriptions(&self, customer_id: &'a str) -> Subscriptions<'a> {
        Subscriptions::new(self.router, customer_id)
    }
}

impl<'a> Customers<'a, Mexico> {
    pub fn transfers(&self, customer_id: &'a str) -> Transfers<'a> {
        Transfers::new(self.router, customer_id)
    }

    pub fn payouts(&self, customer_id: &'a str) -> Payouts<'a> {
        Payouts::new(self.router, Parent::Customer(customer_id))
    }

    pub fn bank_accounts(&self, customer_id: &'a str) -> BankAccounts<'a> {
        BankAccounts::new(self.router, customer_id)
    }
}

impl<'a> Customers<'a, Colombia> {
    pub fn pse(&self, customer_id: &'a str) -> Pse<'a> {
        Pse::new(self.router, Parent::Customer(customer_id))
    }
}

impl<'a> Customers<'a, Peru> {
    pub fn checkouts(&self, customer_id: &'a str) -> CustomerCheckouts<'a> {
        CustomerCheckouts::new(self.router, customer_id)
    }
}
