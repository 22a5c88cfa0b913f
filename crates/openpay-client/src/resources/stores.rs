use crate::router::{Payload, Router};
use openpay_core::route::{Parent, STORE_LIST};
use openpay_core::{OpenpayResult, Store, StoreLocationQuery};

/// Cash-payment stores near a location.
///
/// Served from `{host}/stores`, outside the merchant and version prefix.
#[derive(Debug, Clone, Copy)]
pub struct Stores<'a> {
    router: &'a Router,
}

impl<'a> Stores<'a> {
    pub(crate) fn new(router: &'a Router) -> Self {
        Self { router }
    }

    pub async fn list(&self, query: &StoreLocationQuery) -> OpenpayResult<Vec<Store>> {
        self.router
            .send(&STORE_LIST, Parent::Merchant, None, Payload::query(query)?)
            .await
    }
}
