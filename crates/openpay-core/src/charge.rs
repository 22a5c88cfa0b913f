//! # Charge and Transaction Types
//!
//! Charges, payouts, fees and transfers all come back as a `Transaction`.
//! A charge request is a set of common fields plus one payment-method
//! variant, serialized with the API's `method` discriminator.

use crate::common::{Currency, ListQuery};
use crate::customer::CustomerInput;
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Fee,
    Charge,
    Payout,
    Transfer,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    In,
    Out,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Completed,
    InProgress,
    ChargePending,
    Failed,
    Cancelled,
    Refunded,
    #[serde(other)]
    Other,
}

/// Points used when paying with a points card
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CardPoints {
    pub used: f64,
    pub remaining: f64,
    pub amount: f64,
    #[serde(default)]
    pub caption: Option<String>,
}

/// Payment instructions for store, bank and redirect charges
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PaymentMethod {
    #[serde(rename = "type", default)]
    pub method_type: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub barcode_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub clabe: Option<String>,
    #[serde(default)]
    pub bank: Option<String>,
}

/// Openpay transaction (charge, payout, fee or transfer)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(default)]
    pub authorization: Option<String>,
    #[serde(default)]
    pub transaction_type: Option<TransactionType>,
    #[serde(default)]
    pub operation_type: Option<OperationType>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(default)]
    pub bank_account: Option<serde_json::Value>,
    #[serde(default)]
    pub card: Option<serde_json::Value>,
    #[serde(default)]
    pub card_points: Option<CardPoints>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
}

/// Interest-free installments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMonths {
    Three,
    Six,
    Nine,
    Twelve,
    Eighteen,
}

impl PaymentMonths {
    pub fn as_u8(&self) -> u8 {
        match self {
            PaymentMonths::Three => 3,
            PaymentMonths::Six => 6,
            PaymentMonths::Nine => 9,
            PaymentMonths::Twelve => 12,
            PaymentMonths::Eighteen => 18,
        }
    }
}

impl Serialize for PaymentMonths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentPlan {
    pub payments: PaymentMonths,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UseCardPoints {
    None,
    Mixed,
    OnlyPoints,
}

/// `confirm` flag; IVR charges send the literal `"ivr"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Confirm {
    Flag(bool),
    Mode(ConfirmMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmMode {
    Ivr,
}

/// Card charge fields (stored card, token, or IVR)
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CardCharge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_plan: Option<PaymentPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_card_points: Option<UseCardPoints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<Confirm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_3d_secure: Option<bool>,
}

/// Method-specific part of a charge request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ChargeMethod {
    Card(CardCharge),
    Store {
        #[serde(skip_serializing_if = "Option::is_none")]
        due_date: Option<String>,
    },
    /// SPEI transfer (Mexico) or PSE (Colombia)
    BankAccount {
        #[serde(skip_serializing_if = "Option::is_none")]
        due_date: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        currency: Option<Currency>,
        #[serde(skip_serializing_if = "Option::is_none")]
        iva: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        redirect_url: Option<String>,
    },
    Alipay {
        #[serde(skip_serializing_if = "Option::is_none")]
        due_date: Option<String>,
        redirect_url: String,
    },
}

impl ChargeMethod {
    /// Charge a stored card or token
    pub fn card(source_id: impl Into<String>, device_session_id: impl Into<String>) -> Self {
        ChargeMethod::Card(CardCharge {
            source_id: Some(source_id.into()),
            device_session_id: Some(device_session_id.into()),
            ..CardCharge::default()
        })
    }

    /// Card charge confirmed over IVR
    pub fn ivr() -> Self {
        ChargeMethod::Card(CardCharge {
            confirm: Some(Confirm::Mode(ConfirmMode::Ivr)),
            ..CardCharge::default()
        })
    }

    pub fn store() -> Self {
        ChargeMethod::Store { due_date: None }
    }

    pub fn bank_account() -> Self {
        ChargeMethod::BankAccount {
            due_date: None,
            currency: None,
            iva: None,
            redirect_url: None,
        }
    }
}

/// Charge request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChargeInput {
    pub amount: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Required for merchant-level charges, omitted for customer charges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerInput>,
    #[serde(flatten)]
    pub method: ChargeMethod,
}

impl ChargeInput {
    pub fn new(amount: f64, description: impl Into<String>, method: ChargeMethod) -> Self {
        Self {
            amount,
            description: description.into(),
            order_id: None,
            customer: None,
            method,
        }
    }

    pub fn with_customer(mut self, customer: CustomerInput) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CaptureInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RefundInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargeStatus {
    InProgress,
    Completed,
    Refunded,
    ChargebackPending,
    ChargebackAccepted,
    ChargebackAdjustment,
    ChargePending,
    Cancelled,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChargeListQuery {
    #[serde(flatten)]
    pub base: ListQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(rename = "amount[gte]", skip_serializing_if = "Option::is_none")]
    pub amount_gte: Option<f64>,
    #[serde(rename = "amount[lte]", skip_serializing_if = "Option::is_none")]
    pub amount_lte: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ChargeStatus>,
}
