//! # Customer Types

use crate::common::{Address, CustomerAddress, ListQuery};
use serde::{Deserialize, Serialize};

/// Customer lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Deleted,
}

/// Store (cash payment) reference assigned to a customer
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct StoreReference {
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub barcode_url: String,
}

/// Openpay customer object
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub creation_date: Option<String>,
    pub name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub status: Option<CustomerStatus>,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub clabe: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub customer_address: Option<CustomerAddress>,
    #[serde(default)]
    pub store: Option<StoreReference>,
}

/// Input for creating a customer (also embedded in merchant-level charges)
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CustomerInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    /// Create a balance account for the customer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_account: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Colombia only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_address: Option<CustomerAddress>,
}

impl CustomerInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }
}

/// Customer update; `external_id` and `requires_account` are create-only
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_address: Option<CustomerAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomerListQuery {
    #[serde(flatten)]
    pub base: ListQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_input_skips_unset_fields() {
        let input = CustomerInput {
            requires_account: Some(true),
            ..CustomerInput::new("Juan", "juan@ejemplo.com")
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Juan",
                "email": "juan@ejemplo.com",
                "requires_account": true
            })
        );
    }

    #[test]
    fn test_parse_customer() {
        let json = r#"{
            "id": "anbnldwgni1way3yp2dw",
            "name": "customer name",
            "last_name": null,
            "email": "customer_email@me.com",
            "phone_number": null,
            "status": "active",
            "balance": 103,
            "clabe": "646180109400423323",
            "creation_date": "2014-05-20T16:47:47-05:00",
            "store": {
                "reference": "OPENPAY02DQ35YOY7",
                "barcode_url": "https://sandbox-api.openpay.mx/barcode/OPENPAY02DQ35YOY7?width=1&height=45&text=false"
            }
        }"#;

        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.status, Some(CustomerStatus::Active));
        assert_eq!(customer.balance, Some(103.0));
        assert_eq!(customer.store.unwrap().reference, "OPENPAY02DQ35YOY7");
        assert!(customer.address.is_none());
    }
}
