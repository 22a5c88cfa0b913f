use crate::router::{Payload, Router};
use openpay_core::route::{
    Parent, BANK_ACCOUNT_CREATE, BANK_ACCOUNT_DELETE, BANK_ACCOUNT_GET, BANK_ACCOUNT_LIST,
};
use openpay_core::{BankAccount, BankAccountInput, BankAccountListQuery, OpenpayResult};

/// A customer's CLABE bank accounts (Mexico)
#[derive(Debug, Clone, Copy)]
pub struct BankAccounts<'a> {
    router: &'a Router,
    customer_id: &'a str,
}

impl<'a> BankAccounts<'a> {
    pub(crate) fn new(router: &'a Router, customer_id: &'a str) -> Self {
        Self {
            router,
            customer_id,
        }
    }

    fn parent(&self) -> Parent<'a> {
        Parent::Customer(self.customer_id)
    }

    pub async fn create(&self, input: &BankAccountInput) -> OpenpayResult<BankAccount> {
        self.router
            .send(&BANK_ACCOUNT_CREATE, self.parent(), None, Payload::body(input)?)
            .await
    }

    pub async fn list(&self, query: &BankAccountListQuery) -> OpenpayResult<Vec<BankAccount>> {
        self.router
            .send(&BANK_ACCOUNT_LIST, self.parent(), None, Payload::query(query)?)
            .await
    }

    pub async fn get(&self, bank_account_id: &str) -> OpenpayResult<BankAccount> {
        self.router
            .send(
                &BANK_ACCOUNT_GET,
                self.parent(),
                Some(bank_account_id),
                Payload::empty(),
            )
            .await
    }

    pub async fn delete(&self, bank_account_id: &str) -> OpenpayResult<()> {
        self.router
            .send_unit(
                &BANK_ACCOUNT_DELETE,
                self.parent(),
                Some(bank_account_id),
                Payload::empty(),
            )
            .await
    }
}
