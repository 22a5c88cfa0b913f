//! # Country Variants
//!
//! Openpay runs one deployment per country. Each has a fixed production
//! and sandbox host; nothing else about the host is configurable.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// API version segment used by both environments.
pub const API_VERSION: &str = "v1";

/// Production/sandbox host pair for one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub production: &'static str,
    pub sandbox: &'static str,
}

impl Endpoints {
    /// Pick the host for the given environment.
    pub fn select(&self, is_sandbox: bool) -> &'static str {
        if is_sandbox {
            self.sandbox
        } else {
            self.production
        }
    }
}

/// Supported Openpay countries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    #[default]
    Mx,
    Co,
    Pe,
}

impl Country {
    /// Parse a country code, falling back to Mexico on unknown input.
    ///
    /// Never fails; an unknown code logs a single warning.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "mx" => Country::Mx,
            "co" => Country::Co,
            "pe" => Country::Pe,
            other => {
                warn!(code = %other, "(Openpay): Invalid country code. Setting MX as default.");
                Country::Mx
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Mx => "mx",
            Country::Co => "co",
            Country::Pe => "pe",
        }
    }

    /// Host pair for this country
    pub fn endpoints(&self) -> Endpoints {
        resolve_base_url(*self)
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolve the production/sandbox host pair for a country.
pub fn resolve_base_url(country: Country) -> Endpoints {
    match country {
        Country::Mx => Endpoints {
            production: "https://api.openpay.mx",
            sandbox: "https://sandbox-api.openpay.mx",
        },
        Country::Co => Endpoints {
            production: "https://api.openpay.co",
            sandbox: "https://sandbox-api.openpay.co",
        },
        Country::Pe => Endpoints {
            production: "https://api.openpay.pe",
            sandbox: "https://sandbox-api.openpay.pe",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

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
    fn test_documented_domains() {
        let mx = resolve_base_url(Country::Mx);
        assert_eq!(mx.production, "https://api.openpay.mx");
        assert_eq!(mx.sandbox, "https://sandbox-api.openpay.mx");

        let co = resolve_base_url(Country::Co);
        assert_eq!(co.production, "https://api.openpay.co");
        assert_eq!(co.sandbox, "https://sandbox-api.openpay.co");

        let pe = resolve_base_url(Country::Pe);
        assert_eq!(pe.production, "https://api.openpay.pe");
        assert_eq!(pe.sandbox, "https://sandbox-api.openpay.pe");
    }

    #[test]
    fn test_known_codes_do_not_warn() {
        for (code, expected) in [("mx", Country::Mx), ("CO", Country::Co), ("pe", Country::Pe)] {
            let (country, warnings) = count_warnings(|| Country::from_code(code));
            assert_eq!(country, expected);
            assert_eq!(warnings, 0);
        }
    }

    #[test]
    fn test_unknown_code_falls_back_to_mexico() {
        let (country, warnings) = count_warnings(|| Country::from_code("br"));
        assert_eq!(country, Country::Mx);
        assert_eq!(country.endpoints(), resolve_base_url(Country::Mx));
        assert_eq!(warnings, 1);
    }

    #[test]
    fn test_select_environment() {
        let co = Country::Co.endpoints();
        assert_eq!(co.select(true), "https://sandbox-api.openpay.co");
        assert_eq!(co.select(false), "https://api.openpay.co");
    }
}
