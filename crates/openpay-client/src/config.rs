//! # Openpay Configuration
//!
//! Merchant credentials and per-client settings.
//! Credentials can be passed explicitly or loaded from environment variables.

use base64::Engine;
use openpay_core::{Country, OpenpayError, OpenpayResult};
use regex::Regex;
use std::env;
use std::fmt;
use std::sync::OnceLock;
use std::time::Duration;

/// Default request timeout (9 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(9000);

/// Dotted-quad IPv4; each octet 0-255, leading zeros allowed.
const CLIENT_IP_PATTERN: &str =
    r"^(25[0-5]|2[0-4][0-9]|[01]?[0-9]?[0-9])(\.(25[0-5]|2[0-4][0-9]|[01]?[0-9]?[0-9])){3}$";

fn client_ip_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(CLIENT_IP_PATTERN).expect("client IP pattern is valid"))
}

/// Validated buyer IP, forwarded to Openpay Mexico as `X-Forwarded-For`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientIp(String);

impl ClientIp {
    /// Validate an IPv4 address in dotted-quad form.
    pub fn parse(ip: &str) -> OpenpayResult<Self> {
        if client_ip_pattern().is_match(ip) {
            Ok(Self(ip.to_string()))
        } else {
            Err(OpenpayError::Configuration(format!(
                "invalid client IP address: {:?}",
                ip
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ClientIp {
    type Err = OpenpayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Openpay client configuration
#[derive(Clone)]
pub struct OpenpayConfig {
    /// Merchant identifier; scopes most resource paths
    pub merchant_id: String,

    /// Private API key (sk_...)
    pub private_key: String,

    /// `false` routes every call to the sandbox host
    pub is_production_ready: bool,

    /// Country deployment
    pub country: Country,

    /// Buyer IP (Mexico only)
    pub client_ip: Option<ClientIp>,

    /// Upper bound for a single request
    pub timeout: Duration,
}

impl OpenpayConfig {
    /// Create config with explicit values
    pub fn new(
        merchant_id: impl Into<String>,
        private_key: impl Into<String>,
        is_production_ready: bool,
    ) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            private_key: private_key.into(),
            is_production_ready,
            country: Country::default(),
            client_ip: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `OPENPAY_MERCHANT_ID`
    /// - `OPENPAY_PRIVATE_KEY`
    ///
    /// Optional: `OPENPAY_PRODUCTION_READY` (default `false`),
    /// `OPENPAY_COUNTRY` (default `mx`), `OPENPAY_CLIENT_IP`,
    /// `OPENPAY_TIMEOUT_MS` (default 9000).
    pub fn from_env() -> OpenpayResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let merchant_id = env::var("OPENPAY_MERCHANT_ID").map_err(|_| {
            OpenpayError::Configuration("OPENPAY_MERCHANT_ID not set".to_string())
        })?;

        let private_key = env::var("OPENPAY_PRIVATE_KEY").map_err(|_| {
            OpenpayError::Configuration("OPENPAY_PRIVATE_KEY not set".to_string())
        })?;

        let is_production_ready = match env::var("OPENPAY_PRODUCTION_READY") {
            Ok(v) => parse_flag(&v).ok_or_else(|| {
                OpenpayError::Configuration(format!(
                    "OPENPAY_PRODUCTION_READY must be true or false, got {:?}",
                    v
                ))
            })?,
            Err(_) => false,
        };

        let mut config = Self::new(merchant_id, private_key, is_production_ready);

        if let Ok(code) = env::var("OPENPAY_COUNTRY") {
            config.country = Country::from_code(&code);
        }

        if let Ok(ip) = env::var("OPENPAY_CLIENT_IP") {
            config.client_ip = Some(ClientIp::parse(&ip)?);
        }

        if let Ok(ms) = env::var("OPENPAY_TIMEOUT_MS") {
            let ms: u64 = ms.parse().map_err(|_| {
                OpenpayError::Configuration(format!(
                    "OPENPAY_TIMEOUT_MS must be a number of milliseconds, got {:?}",
                    ms
                ))
            })?;
            config.timeout = Duration::from_millis(ms);
        }

        Ok(config)
    }

    /// Builder: set the country
    pub fn with_country(mut self, country: Country) -> Self {
        self.country = country;
        self
    }

    /// Builder: set the country from its code; unknown codes fall back to `mx`
    pub fn with_country_code(self, code: &str) -> Self {
        self.with_country(Country::from_code(code))
    }

    /// Builder: set and validate the client IP
    pub fn with_client_ip(mut self, ip: &str) -> OpenpayResult<Self> {
        self.client_ip = Some(ClientIp::parse(ip)?);
        Ok(self)
    }

    /// Builder: set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check if requests go to the sandbox host
    pub fn is_sandbox(&self) -> bool {
        !self.is_production_ready
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        basic_auth(&self.private_key)
    }
}

impl fmt::Debug for OpenpayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenpayConfig")
            .field("merchant_id", &self.merchant_id)
            .field("private_key", &"<redacted>")
            .field("is_production_ready", &self.is_production_ready)
            .field("country", &self.country)
            .field("client_ip", &self.client_ip)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// `Basic base64(key + ":")`; Openpay uses the key as user with an empty password.
pub fn basic_auth(private_key: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(format!("{}:", private_key));
    format!("Basic {}", encoded)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
