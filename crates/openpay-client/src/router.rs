//! # Request Router
//!
//! Turns a route-table row plus identifiers, query and body into one
//! authenticated HTTP call, and decodes the answer.
//!
//! ```text
//! merchant scope:  {host}/v1/{merchant_id}/{path}
//! store lookup:    {host}/{path}
//! ```
//!
//! The host is picked once from the country table and the production flag.
//! The router never retries; a failed or timed-out call is returned as-is.

use crate::config::OpenpayConfig;
use openpay_core::route::{Parent, Route, Scope};
use openpay_core::transport::{HttpRequest, HttpResponse, SharedTransport};
use openpay_core::{
    query_pairs, ApiErrorBody, Endpoints, OpenpayError, OpenpayResult, API_VERSION,
};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Build a merchant-scoped URL: `{host}/{version}/{merchant_id}/{path}`.
pub fn build_url(
    endpoints: &Endpoints,
    is_sandbox: bool,
    merchant_id: &str,
    api_version: &str,
    path: &str,
) -> String {
    format!(
        "{}/{}/{}/{}",
        endpoints.select(is_sandbox),
        api_version,
        merchant_id,
        path
    )
}

/// Build an unversioned URL: `{host}/{path}`. Used by the store lookup.
pub fn build_store_url(endpoints: &Endpoints, is_sandbox: bool, path: &str) -> String {
    format!("{}/{}", endpoints.select(is_sandbox), path)
}

/// Query and body for one call
#[derive(Debug, Default)]
pub(crate) struct Payload {
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl Payload {
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn body<B: Serialize + ?Sized>(body: &B) -> OpenpayResult<Self> {
        Ok(Self {
            query: Vec::new(),
            body: Some(serde_json::to_value(body)?),
        })
    }

    pub(crate) fn query<Q: Serialize + ?Sized>(query: &Q) -> OpenpayResult<Self> {
        Ok(Self {
            query: query_pairs(query)?,
            body: None,
        })
    }

    pub(crate) fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Shared request dispatcher behind every resource facade
#[derive(Clone)]
pub struct Router {
    config: OpenpayConfig,
    endpoints: Endpoints,
    forward_client_ip: bool,
    transport: SharedTransport,
}

impl Router {
    pub(crate) fn new(
        config: OpenpayConfig,
        transport: SharedTransport,
        forward_client_ip: bool,
    ) -> Self {
        let endpoints = config.country.endpoints();
        Self {
            config,
            endpoints,
            forward_client_ip,
            transport,
        }
    }

    pub fn config(&self) -> &OpenpayConfig {
        &self.config
    }

    pub(crate) fn config_mut(&mut self) -> &mut OpenpayConfig {
        &mut self.config
    }

    /// Host currently receiving requests
    pub fn active_base_url(&self) -> &'static str {
        self.endpoints.select(self.config.is_sandbox())
    }

    pub(crate) fn set_timeout(&mut self, timeout: Duration) {
        self.config.timeout = timeout;
    }

    /// Full URL for a route
    pub fn url_for(&self, route: &Route, parent: Parent<'_>, id: Option<&str>) -> String {
        let path = route.render(parent, id);
        match route.scope() {
            Scope::Merchant => build_url(
                &self.endpoints,
                self.config.is_sandbox(),
                &self.config.merchant_id,
                API_VERSION,
                &path,
            ),
            Scope::Unversioned => {
                build_store_url(&self.endpoints, self.config.is_sandbox(), &path)
            }
        }
    }

    fn headers(&self, has_body: bool) -> Vec<(String, String)> {
        let mut headers = vec![
            ("Authorization".to_string(), self.config.auth_header()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        if has_body {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if self.forward_client_ip {
            if let Some(ip) = &self.config.client_ip {
                headers.push(("X-Forwarded-For".to_string(), ip.to_string()));
            }
        }
        headers
    }

    /// Send one request and decode the JSON answer as `T`.
    #[instrument(
        skip(self, payload),
        fields(method = %route.method, country = %self.config.country)
    )]
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        route: &Route,
        parent: Parent<'_>,
        id: Option<&str>,
        payload: Payload,
    ) -> OpenpayResult<T> {
        let request = HttpRequest {
            method: route.method,
            url: self.url_for(route, parent, id),
            headers: self.headers(payload.body.is_some()),
            query: payload.query,
            body: payload.body,
        };

        debug!("Openpay request: {} {}", request.method, request.url);

        let timeout = self.config.timeout;
        let response = tokio::time::timeout(timeout, self.transport.execute(request))
            .await
            .map_err(|_| OpenpayError::Timeout {
                after_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            })??;

        decode(response)
    }

    /// Send one request whose answer carries nothing the caller needs.
    ///
    /// Any 2xx body is accepted, empty or not.
    pub(crate) async fn send_unit(
        &self,
        route: &Route,
        parent: Parent<'_>,
        id: Option<&str>,
        payload: Payload,
    ) -> OpenpayResult<()> {
        self.send::<IgnoredAny>(route, parent, id, payload)
            .await
            .map(|_| ())
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("config", &self.config)
            .field("base_url", &self.active_base_url())
            .field("forward_client_ip", &self.forward_client_ip)
            .finish()
    }
}

/// Decode a transport response. Empty 2xx bodies decode from `null`.
fn decode<T: DeserializeOwned>(response: HttpResponse) -> OpenpayResult<T> {
    let status = response.status;

    if !response.is_success() {
        let body = String::from_utf8_lossy(&response.body).into_owned();
        error!("Openpay API error: status={}, body={}", status, body);

        let parsed = serde_json::from_str::<ApiErrorBody>(&body).ok();
        return Err(OpenpayError::Api {
            status,
            error: parsed,
            body,
        });
    }

    debug!("Openpay response: status={}", status);

    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_value(serde_json::Value::Null)?);
    }

    Ok(serde_json::from_slice(&response.body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use openpay_core::{resolve_base_url, Country};

    #[test]
    fn test_build_url_sandbox_and_production() {
        let co = resolve_base_url(Country::Co);
        assert_eq!(
            build_url(&co, true, "M", "v1", "charges"),
            "https://sandbox-api.openpay.co/v1/M/charges"
        );
        assert_eq!(
            build_url(&co, false, "M", "v1", "charges/tr_1"),
            "https://api.openpay.co/v1/M/charges/tr_1"
        );
    }

    #[test]
    fn test_build_store_url_omits_version_and_merchant() {
        let mx = resolve_base_url(Country::Mx);
        assert_eq!(build_store_url(&mx, true, "stores"), "https://sandbox-api.openpay.mx/stores");
        assert_eq!(build_store_url(&mx, false, "stores"), "https://api.openpay.mx/stores");
    }

    #[test]
    fn test_decode_empty_body_as_unit() {
        let decoded: OpenpayResult<()> = decode(HttpResponse::new(204, Vec::new()));
        assert!(decoded.is_ok());
    }

    #[test]
    fn test_decode_ignores_json_body() {
        let card = r#"{"id":"k1","holder_name":"Juan","card_number":"411111XXXXXX1111"}"#;
        assert!(decode::<IgnoredAny>(HttpResponse::new(200, card)).is_ok());
        assert!(decode::<IgnoredAny>(HttpResponse::new(200, "{}")).is_ok());
        assert!(decode::<IgnoredAny>(HttpResponse::new(204, Vec::new())).is_ok());
    }

    #[test]
    fn test_decode_api_error() {
        let body = r#"{"category":"request","error_code":1005,"description":"not found","http_code":404,"request_id":"r1"}"#;
        let err = decode::<serde_json::Value>(HttpResponse::new(404, body)).unwrap_err();

        match err {
            OpenpayError::Api { status, error, .. } => {
                assert_eq!(status, 404);
                assert_eq!(error.unwrap().error_code, 1005);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_decode_undecodable_error_keeps_body() {
        let err = decode::<serde_json::Value>(HttpResponse::new(502, "Bad Gateway")).unwrap_err();
        match err {
            OpenpayError::Api { error, body, .. } => {
                assert!(error.is_none());
                assert_eq!(body, "Bad Gateway");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
