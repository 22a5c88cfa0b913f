//! # Store and Bank Account Types

use crate::common::{Address, ListQuery};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Geolocation {
    pub lng: f64,
    pub lat: f64,
    #[serde(default)]
    pub place_id: Option<String>,
}

/// Retail chain a store belongs to
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaynetChain {
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub max_amount: Option<f64>,
}

/// Physical store accepting cash payments
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub id_store: Option<String>,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub last_update: Option<String>,
    #[serde(default)]
    pub geolocation: Option<Geolocation>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub paynet_chain: Option<PaynetChain>,
}

/// Stores near a point that accept the given amount.
///
/// Field names are the API's own (Spanish) parameter names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreLocationQuery {
    pub latitud: f64,
    pub longitud: f64,
    pub kilometers: f64,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BankAccount {
    pub id: String,
    pub holder_name: String,
    #[serde(default)]
    pub alias: Option<String>,
    pub clabe: String,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub bank_code: Option<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankAccountInput {
    pub holder_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub clabe: String,
}

pub type BankAccountListQuery = ListQuery;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::query_pairs;

    #[test]
    fn test_store_query_names() {
        let query = StoreLocationQuery {
            latitud: 4.65589142889691,
            longitud: -74.11335673251888,
            kilometers: 10.0,
            amount: 1.0,
        };

        let pairs = query_pairs(&query).unwrap();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert!(keys.contains(&"latitud"));
        assert!(keys.contains(&"longitud"));
        assert!(keys.contains(&"kilometers"));
        assert!(keys.contains(&"amount"));
    }

    #[test]
    fn test_parse_store() {
        let json = r#"{
            "id_store": "2",
            "id": "Q2Q0L",
            "name": "FARMACIA ABC",
            "last_update": "2021-03-04T13:00:48.000+0000",
            "geolocation": { "lng": -74.1133, "lat": 4.6558, "place_id": "ChIJ" },
            "paynet_chain": { "name": "Farmacias", "logo": "https://x/logo.png", "thumb": "https://x/t.png", "max_amount": 10000 }
        }"#;

        let store: Store = serde_json::from_str(json).unwrap();
        assert_eq!(store.paynet_chain.unwrap().max_amount, Some(10000.0));
        assert!(store.address.is_none());
    }
}
