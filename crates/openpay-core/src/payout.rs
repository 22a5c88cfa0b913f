//! # Payout, Fee and Transfer Types

use crate::common::ListQuery;
use serde::Serialize;

/// Bank account destination for a payout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayoutBankAccount {
    pub clabe: String,
    pub holder_name: String,
}

/// Card destination for a payout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayoutCard {
    pub card_number: String,
    pub holder_name: String,
    pub bank_code: String,
}

/// Where a payout goes: a stored destination or new account data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PayoutMethod {
    BankAccount {
        #[serde(skip_serializing_if = "Option::is_none")]
        destination_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        bank_account: Option<PayoutBankAccount>,
    },
    Card {
        #[serde(skip_serializing_if = "Option::is_none")]
        destination_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        card: Option<PayoutCard>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoutInput {
    pub amount: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(flatten)]
    pub method: PayoutMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutType {
    All,
    Automatic,
    Manual,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PayoutListQuery {
    #[serde(flatten)]
    pub base: ListQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(rename = "amount[gte]", skip_serializing_if = "Option::is_none")]
    pub amount_gte: Option<f64>,
    #[serde(rename = "amount[lte]", skip_serializing_if = "Option::is_none")]
    pub amount_lte: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_type: Option<PayoutType>,
}

/// Commission charged to a customer balance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeInput {
    pub customer_id: String,
    pub amount: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

pub type FeeListQuery = ListQuery;

/// Balance transfer to another customer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferInput {
    /// Receiving customer
    pub customer_id: String,
    pub amount: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

pub type TransferListQuery = ListQuery;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bank_payout_body() {
        let payout = PayoutInput {
            amount: 1.5,
            description: "Test bank payout".into(),
            order_id: None,
            method: PayoutMethod::BankAccount {
                destination_id: None,
                bank_account: Some(PayoutBankAccount {
                    clabe: "021180000118359717".into(),
                    holder_name: "Juan".into(),
                }),
            },
        };

        assert_eq!(
            serde_json::to_value(&payout).unwrap(),
            json!({
                "method": "bank_account",
                "amount": 1.5,
                "description": "Test bank payout",
                "bank_account": { "clabe": "021180000118359717", "holder_name": "Juan" }
            })
        );
    }

    #[test]
    fn test_existing_card_payout_body() {
        let payout = PayoutInput {
            amount: 1.5,
            description: "Test payout to existing card".into(),
            order_id: Some("oid-1".into()),
            method: PayoutMethod::Card {
                destination_id: Some("kqgykn96i7bcs1wwhvgw".into()),
                card: None,
            },
        };

        let body = serde_json::to_value(&payout).unwrap();
        assert_eq!(body["method"], "card");
        assert_eq!(body["destination_id"], "kqgykn96i7bcs1wwhvgw");
        assert!(body.get("card").is_none());
    }
}
