//! # Reqwest Transport
//!
//! Default `Transport` backed by a shared `reqwest::Client`.
//! Timeouts are enforced by the router, not here.

use async_trait::async_trait;
use openpay_core::transport::{HttpRequest, HttpResponse, Transport};
use openpay_core::{Method, OpenpayError, OpenpayResult};
use reqwest::Client;
use tracing::debug;

/// HTTP transport using reqwest with rustls
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with a fresh connection pool
    pub fn new() -> OpenpayResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("openpay-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                OpenpayError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Reuse an existing reqwest client (proxies, custom TLS, ...)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> OpenpayResult<HttpResponse> {
        let mut builder = self
            .client
            .request(Self::method(request.method), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(OpenpayError::transport)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(OpenpayError::transport)?;

        debug!("reqwest transport: status={}, {} bytes", status, body.len());

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(method: Method, url: String) -> HttpRequest {
        HttpRequest {
            method,
            url,
            headers: vec![("Authorization".into(), "Basic YWJjOg==".into())],
            query: Vec::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn test_sends_headers_query_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/M/charges"))
            .and(header("Authorization", "Basic YWJjOg=="))
            .and(query_param("limit", "10"))
            .and(body_json(serde_json::json!({ "amount": 50 })))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"tr_1"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let mut req = request(Method::Post, format!("{}/v1/M/charges", server.uri()));
        req.query.push(("limit".into(), "10".into()));
        req.body = Some(serde_json::json!({ "amount": 50 }));

        let transport = ReqwestTransport::new().unwrap();
        let response = transport.execute(req).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, br#"{"id":"tr_1"}"#.to_vec());
    }

    #[tokio::test]
    async fn test_non_success_status_is_not_a_transport_error() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v1/M/cards/c1"))
            .respond_with(ResponseTemplate::new(404).set_body_string("{}"))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new().unwrap();
        let response = transport
            .execute(request(Method::Delete, format!("{}/v1/M/cards/c1", server.uri())))
            .await
            .unwrap();

        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn test_connection_failure_keeps_reqwest_error() {
        let transport = ReqwestTransport::new().unwrap();
        let err = transport
            .execute(request(Method::Get, "http://127.0.0.1:1/v1/M/charges".into()))
            .await
            .unwrap_err();

        match err {
            OpenpayError::Transport(source) => assert!(source.is::<reqwest::Error>()),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
