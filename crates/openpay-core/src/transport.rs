//! # HTTP Transport Trait
//!
//! The client never talks to the network directly. It hands a fully built
//! `HttpRequest` to a `Transport` and decodes whatever comes back. The
//! default implementation lives in `openpay-client` and uses reqwest;
//! tests plug in their own.

use crate::error::OpenpayResult;
use crate::route::Method;
use async_trait::async_trait;
use std::sync::Arc;

/// A single outbound request, already routed and authenticated.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// First header value with the given name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response handed back by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues HTTP requests on behalf of the client.
///
/// Implementations report network failures through
/// `OpenpayError::transport`, keeping their native error as the source.
/// Non-2xx statuses are not failures at this level; return them as a
/// normal `HttpResponse`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> OpenpayResult<HttpResponse>;
}

/// Type alias for a shared transport (dynamic dispatch)
pub type SharedTransport = Arc<dyn Transport>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_ignores_case() {
        let request = HttpRequest {
            method: Method::Get,
            url: "https://api.openpay.mx/v1/m/charges".into(),
            headers: vec![("Authorization".into(), "Basic YWJjOg==".into())],
            query: Vec::new(),
            body: None,
        };

        assert_eq!(request.header("authorization"), Some("Basic YWJjOg=="));
        assert!(request.header("X-Forwarded-For").is_none());
    }

    #[test]
    fn test_success_range() {
        assert!(HttpResponse::new(204, Vec::new()).is_success());
        assert!(!HttpResponse::new(404, "{}").is_success());
    }
}
