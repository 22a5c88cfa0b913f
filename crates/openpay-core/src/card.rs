//! # Card and Token Types

use crate::common::{string_or_number, Address, ListQuery};
use serde::{Deserialize, Serialize};

/// Stored card, as returned by the API (card number is masked)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub holder_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub card_number: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub expiration_month: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub expiration_year: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub allows_charges: bool,
    #[serde(default)]
    pub allows_payouts: bool,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(rename = "type", default)]
    pub card_type: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub bank_code: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub points_card: bool,
}

/// Raw card data
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CardDetails {
    pub holder_name: String,
    pub card_number: String,
    pub cvv2: String,
    pub expiration_month: String,
    pub expiration_year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Input for registering a card: raw data or a previously created token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CardInput {
    Details(CardDetails),
    Token {
        token_id: String,
        device_session_id: String,
    },
}

impl CardInput {
    pub fn from_token(token_id: impl Into<String>, device_session_id: impl Into<String>) -> Self {
        CardInput::Token {
            token_id: token_id.into(),
            device_session_id: device_session_id.into(),
        }
    }
}

impl From<CardDetails> for CardInput {
    fn from(details: CardDetails) -> Self {
        CardInput::Details(details)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CardUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
}

pub type CardListQuery = ListQuery;

/// Single-use card token
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Token {
    pub id: String,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TokenInput {
    pub holder_name: String,
    pub card_number: String,
    pub cvv2: String,
    pub expiration_month: String,
    pub expiration_year: String,
    pub address: Address,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_card_input_shape() {
        let input = CardInput::from_token("tok_1", "dev_1");
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({ "token_id": "tok_1", "device_session_id": "dev_1" })
        );
    }

    #[test]
    fn test_card_accepts_numeric_expiration() {
        let json = r#"{
            "id": "kqgykn96i7bcs1wwhvgw",
            "type": "debit",
            "brand": "visa",
            "card_number": "411111XXXXXX1111",
            "holder_name": "Juan Perez Ramirez",
            "expiration_year": 25,
            "expiration_month": "12",
            "allows_charges": true,
            "allows_payouts": true,
            "bank_name": "Banamex",
            "bank_code": "002"
        }"#;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.expiration_year.as_deref(), Some("25"));
        assert_eq!(card.card_type.as_deref(), Some("debit"));
        assert!(!card.points_card);
    }
}
