//! # Shared Types
//!
//! Currencies, addresses and list filters used across resources.

use crate::error::{OpenpayError, OpenpayResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Currencies accepted by Openpay (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    MXN,
    USD,
    COP,
    PEN,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::MXN => "MXN",
            Currency::USD => "USD",
            Currency::COP => "COP",
            Currency::PEN => "PEN",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postal address
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line3: Option<String>,
    pub postal_code: String,
    pub state: String,
    pub city: String,
    pub country_code: String,
}

/// Colombian customer address (`customer_address`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomerAddress {
    pub department: String,
    pub city: String,
    pub additional: String,
}

/// Filters shared by every list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListQuery {
    /// Created on this date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation: Option<NaiveDate>,
    #[serde(rename = "creation[gte]", skip_serializing_if = "Option::is_none")]
    pub creation_gte: Option<NaiveDate>,
    #[serde(rename = "creation[lte]", skip_serializing_if = "Option::is_none")]
    pub creation_lte: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn created_on(mut self, date: NaiveDate) -> Self {
        self.creation = Some(date);
        self
    }

    pub fn created_since(mut self, date: NaiveDate) -> Self {
        self.creation_gte = Some(date);
        self
    }

    pub fn created_until(mut self, date: NaiveDate) -> Self {
        self.creation_lte = Some(date);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Flatten a serializable filter into query pairs.
///
/// Only flat objects are accepted: `null` fields are dropped, scalars are
/// rendered as text, nested arrays or objects are rejected.
pub fn query_pairs<Q: Serialize + ?Sized>(query: &Q) -> OpenpayResult<Vec<(String, String)>> {
    let value = serde_json::to_value(query)?;

    let map = match value {
        serde_json::Value::Null => return Ok(Vec::new()),
        serde_json::Value::Object(map) => map,
        other => {
            return Err(OpenpayError::Configuration(format!(
                "query must serialize to an object, got {}",
                other
            )))
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let rendered = match value {
            serde_json::Value::Null => continue,
            serde_json::Value::String(s) => s,
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            nested => {
                return Err(OpenpayError::Configuration(format!(
                    "query parameter {} is not a scalar: {}",
                    key, nested
                )))
            }
        };
        pairs.push((key, rendered));
    }

    Ok(pairs)
}

/// Accept a field the API documents as either text or a number.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
