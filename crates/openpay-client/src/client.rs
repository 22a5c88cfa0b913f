//! # Openpay Clients
//!
//! One client type per country, sharing a single router. The region type
//! parameter decides which resources and operations exist:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      Openpay<R: Region>                      │
//! │  charges · customers · cards · plans · webhooks · tokens ·   │
//! │  stores                                                      │
//! └──────────────────────────────────────────────────────────────┘
//!          ▲                     ▲                     ▲
//!  ┌───────┴───────┐     ┌───────┴───────┐     ┌───────┴───────┐
//!  │    Mexico     │     │   Colombia    │     │     Peru      │
//!  │ payouts, fees │     │ pse, refunds  │     │  checkouts    │
//!  │ transfers,    │     │               │     │               │
//!  │ bank accounts,│     │               │     │               │
//!  │ capture,      │     │               │     │               │
//!  │ refunds,      │     │               │     │               │
//!  │ client IP     │     │               │     │               │
//!  └───────────────┘     └───────────────┘     └───────────────┘
//! ```

use crate::config::{ClientIp, OpenpayConfig};
use crate::resources::{
    Cards, Charges, Checkouts, Customers, Fees, Payouts, Plans, Pse, Stores, Tokens, Webhooks,
};
use crate::router::Router;
use crate::transport::ReqwestTransport;
use openpay_core::route::Parent;
use openpay_core::transport::SharedTransport;
use openpay_core::{Country, OpenpayResult};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

mod sealed {
    pub trait Sealed {}
}

/// Country variant of the Openpay API
pub trait Region: sealed::Sealed + Send + Sync + 'static {
    const COUNTRY: Country;

    /// Whether the configured client IP is sent as `X-Forwarded-For`
    const FORWARDS_CLIENT_IP: bool = false;
}

/// Regions whose charges can be refunded through the API
pub trait Refundable: Region {}

#[derive(Debug, Clone, Copy)]
pub struct Mexico;

#[derive(Debug, Clone, Copy)]
pub struct Colombia;

#[derive(Debug, Clone, Copy)]
pub struct Peru;

impl sealed::Sealed for Mexico {}
impl sealed::Sealed for Colombia {}
impl sealed::Sealed for Peru {}

impl Region for Mexico {
    const COUNTRY: Country = Country::Mx;
    const FORWARDS_CLIENT_IP: bool = true;
}

impl Region for Colombia {
    const COUNTRY: Country = Country::Co;
}

impl Region for Peru {
    const COUNTRY: Country = Country::Pe;
}

impl Refundable for Mexico {}
impl Refundable for Colombia {}

/// Openpay client for one country
pub struct Openpay<R: Region> {
    router: Router,
    _region: PhantomData<R>,
}

pub type OpenpayMx = Openpay<Mexico>;
pub type OpenpayCo = Openpay<Colombia>;
pub type OpenpayPe = Openpay<Peru>;

impl<R: Region> Openpay<R> {
    /// Create a client using the default reqwest transport.
    pub fn new(config: OpenpayConfig) -> OpenpayResult<Self> {
        let transport: SharedTransport = Arc::new(ReqwestTransport::new()?);
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client on top of a custom transport.
    ///
    /// The region always wins over `config.country`.
    pub fn with_transport(mut config: OpenpayConfig, transport: SharedTransport) -> Self {
        if config.country != R::COUNTRY {
            debug!(
                "Overriding configured country {} with {}",
                config.country,
                R::COUNTRY
            );
            config.country = R::COUNTRY;
        }

        if !R::FORWARDS_CLIENT_IP && config.client_ip.is_some() {
            warn!("(Openpay): client IP is only used by the Mexico API; ignoring it");
            config.client_ip = None;
        }

        Self {
            router: Router::new(config, transport, R::FORWARDS_CLIENT_IP),
            _region: PhantomData,
        }
    }

    pub fn config(&self) -> &OpenpayConfig {
        self.router.config()
    }

    pub fn country(&self) -> Country {
        R::COUNTRY
    }

    pub fn merchant_id(&self) -> &str {
        &self.router.config().merchant_id
    }

    pub fn is_sandbox(&self) -> bool {
        self.router.config().is_sandbox()
    }

    /// Host currently receiving requests
    pub fn base_url(&self) -> &'static str {
        self.router.active_base_url()
    }

    pub fn timeout(&self) -> Duration {
        self.router.config().timeout
    }

    /// Change the per-request timeout
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.router.set_timeout(timeout);
    }

    pub fn charges(&self) -> Charges<'_, R> {
        Charges::new(&self.router, Parent::Merchant)
    }

    pub fn customers(&self) -> Customers<'_, R> {
        Customers::new(&self.router)
    }

    pub fn cards(&self) -> Cards<'_> {
        Cards::new(&self.router, Parent::Merchant)
    }

    pub fn plans(&self) -> Plans<'_> {
        Plans::new(&self.router)
    }

    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(&self.router)
    }

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens::new(&self.router)
    }

    pub fn stores(&self) -> Stores<'_> {
        Stores::new(&self.router)
    }
}

impl Openpay<Mexico> {
    pub fn payouts(&self) -> Payouts<'_> {
        Payouts::new(&self.router, Parent::Merchant)
    }

    pub fn fees(&self) -> Fees<'_> {
        Fees::new(&self.router)
    }

    pub fn client_ip(&self) -> Option<&ClientIp> {
        self.router.config().client_ip.as_ref()
    }

    pub fn set_merchant_id(&mut self, merchant_id: impl Into<String>) {
        self.router.config_mut().merchant_id = merchant_id.into();
    }

    pub fn set_private_key(&mut self, private_key: impl Into<String>) {
        self.router.config_mut().private_key = private_key.into();
    }

    /// Switch between the sandbox and production hosts
    pub fn set_production_ready(&mut self, is_production_ready: bool) {
        self.router.config_mut().is_production_ready = is_production_ready;
    }

    /// Validate and set the client IP; the previous value is kept on error.
    pub fn set_client_ip(&mut self, ip: &str) -> OpenpayResult<()> {
        let ip = ClientIp::parse(ip)?;
        self.router.config_mut().client_ip = Some(ip);
        Ok(())
    }
}

impl Openpay<Colombia> {
    /// PSE bank transfers
    pub fn pse(&self) -> Pse<'_> {
        Pse::new(&self.router, Parent::Merchant)
    }
}

impl Openpay<Peru> {
    pub fn checkouts(&self) -> Checkouts<'_> {
        Checkouts::new(&self.router)
    }
}

impl<R: Region> Clone for Openpay<R> {
    fn clone(&self) -> Self {
        Self {
            router: self.router.clone(),
            _region: PhantomData,
        }
    }
}

impl<R: Region> fmt::Debug for Openpay<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Openpay")
            .field("country", &R::COUNTRY)
            .field("router", &self.router)
            .finish()
    }
}

/// Client for whichever country the configuration names
#[derive(Debug, Clone)]
pub enum OpenpayClient {
    Mexico(OpenpayMx),
    Colombia(OpenpayCo),
    Peru(OpenpayPe),
}

impl OpenpayClient {
    /// Build the client matching `config.country`, using the reqwest transport.
    pub fn from_config(config: OpenpayConfig) -> OpenpayResult<Self> {
        let transport: SharedTransport = Arc::new(ReqwestTransport::new()?);
        Ok(Self::with_transport(config, transport))
    }

    pub fn with_transport(config: OpenpayConfig, transport: SharedTransport) -> Self {
        match config.country {
            Country::Mx => OpenpayClient::Mexico(Openpay::with_transport(config, transport)),
            Country::Co => OpenpayClient::Colombia(Openpay::with_transport(config, transport)),
            Country::Pe => OpenpayClient::Peru(Openpay::with_transport(config, transport)),
        }
    }

    /// Load configuration from the environment and build the matching client.
    pub fn from_env() -> OpenpayResult<Self> {
        Self::from_config(OpenpayConfig::from_env()?)
    }

    pub fn country(&self) -> Country {
        match self {
            OpenpayClient::Mexico(_) => Country::Mx,
            OpenpayClient::Colombia(_) => Country::Co,
            OpenpayClient::Peru(_) => Country::Pe,
        }
    }

    pub fn as_mexico(&self) -> Option<&OpenpayMx> {
        match self {
            OpenpayClient::Mexico(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_colombia(&self) -> Option<&OpenpayCo> {
        match self {
            OpenpayClient::Colombia(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_peru(&self) -> Option<&OpenpayPe> {
        match self {
            OpenpayClient::Peru(c) => Some(c),
            _ => None,
        }
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        match self {
            OpenpayClient::Mexico(c) => c.set_timeout(timeout),
            OpenpayClient::Colombia(c) => c.set_timeout(timeout),
            OpenpayClient::Peru(c) => c.set_timeout(timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use openpay_core::transport::{HttpRequest, HttpResponse, Transport};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    struct NoopTransport;

    #[async_trait]
    impl Transport for NoopTransport {
        async fn execute(&self, _request: HttpRequest) -> OpenpayResult<HttpResponse> {
            Ok(HttpResponse::new(204, Vec::new()))
        }
    }

    fn noop() -> SharedTransport {
        Arc::new(NoopTransport)
    }

    #[test]
    fn test_region_overrides_config_country() {
        let config = OpenpayConfig::new("M", "K", false).with_country(Country::Mx);
        let client = OpenpayPe::with_transport(config, noop());

        assert_eq!(client.country(), Country::Pe);
        assert_eq!(client.config().country, Country::Pe);
        assert_eq!(client.base_url(), "https://sandbox-api.openpay.pe");
    }

    struct CountWarnings(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for CountWarnings {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn count_warnings<T>(f: impl FnOnce() -> T) -> (T, usize) {
        let counter = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(CountWarnings(counter.clone()));
        let out = tracing::subscriber::with_default(subscriber, f);
        (out, counter.load(Ordering::SeqCst))
    }

    #[test]
    fn test_client_ip_dropped_outside_mexico() {
        let config = OpenpayConfig::new("M", "K", false)
            .with_client_ip("127.0.0.1")
            .unwrap();
        let (client, warnings) = count_warnings(|| OpenpayCo::with_transport(config, noop()));

        assert!(client.config().client_ip.is_none());
        assert_eq!(warnings, 1);
    }

    #[test]
    fn test_mexico_keeps_client_ip_silently() {
        let config = OpenpayConfig::new("M", "K", false)
            .with_client_ip("127.0.0.1")
            .unwrap();
        let (client, warnings) = count_warnings(|| OpenpayMx::with_transport(config, noop()));

        assert_eq!(client.client_ip().map(ClientIp::as_str), Some("127.0.0.1"));
        assert_eq!(warnings, 0);
    }

    #[test]
    fn test_mexico_setters() {
        let mut client = OpenpayMx::with_transport(OpenpayConfig::new("M", "K", false), noop());
        assert_eq!(client.base_url(), "https://sandbox-api.openpay.mx");

        client.set_production_ready(true);
        assert_eq!(client.base_url(), "https://api.openpay.mx");

        client.set_merchant_id("M2");
        assert_eq!(client.merchant_id(), "M2");

        client.set_client_ip("255.255.255.255").unwrap();
        assert!(client.set_client_ip("not-an-ip").is_err());
        assert_eq!(client.client_ip().unwrap().as_str(), "255.255.255.255");

        client.set_timeout(Duration::from_millis(3000));
        assert_eq!(client.timeout(), Duration::from_millis(3000));
    }

    #[test]
    fn test_dispatch_on_country() {
        let config = OpenpayConfig::new("M", "K", true).with_country_code("co");
        let client = OpenpayClient::with_transport(config, noop());

        assert_eq!(client.country(), Country::Co);
        assert!(client.as_colombia().is_some());
        assert!(client.as_mexico().is_none());
        assert_eq!(
            client.as_colombia().unwrap().base_url(),
            "https://api.openpay.co"
        );
    }
}
