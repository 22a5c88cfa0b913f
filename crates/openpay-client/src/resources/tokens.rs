use crate::router::{Payload, Router};
use openpay_core::route::{Parent, TOKEN_CREATE, TOKEN_GET};
use openpay_core::{OpenpayResult, Token, TokenInput};

#[derive(Debug, Clone, Copy)]
pub struct Tokens<'a> {
    router: &'a Router,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(router: &'a Router) -> Self {
        Self { router }
    }

    pub async fn create(&self, input: &TokenInput) -> OpenpayResult<Token> {
        self.router
            .send(&TOKEN_CREATE, Parent::Merchant, None, Payload::body(input)?)
            .await
    }

    pub async fn get(&self, token_id: &str) -> OpenpayResult<Token> {
        self.router
            .send(&TOKEN_GET, Parent::Merchant, Some(token_id), Payload::empty())
            .await
    }
}
