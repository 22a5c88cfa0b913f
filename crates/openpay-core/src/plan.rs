//! # Plan and Subscription Types

use crate::card::{Card, CardDetails};
use crate::common::{string_or_number, Currency, ListQuery};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatUnit {
    Week,
    Month,
    Year,
}

/// What happens to a subscription once charge retries run out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusAfterRetry {
    Unpaid,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    Active,
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Plan {
    pub id: String,
    #[serde(default)]
    pub creation_date: Option<String>,
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<Currency>,
    pub repeat_every: u32,
    pub repeat_unit: RepeatUnit,
    #[serde(default)]
    pub retry_times: Option<u32>,
    #[serde(default)]
    pub status: Option<PlanStatus>,
    #[serde(default)]
    pub status_after_retry: Option<StatusAfterRetry>,
    #[serde(default)]
    pub trial_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanInput {
    pub name: String,
    pub amount: f64,
    pub repeat_every: u32,
    pub repeat_unit: RepeatUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_times: Option<u32>,
    pub status_after_retry: StatusAfterRetry,
    pub trial_days: u32,
}

/// Only the name and trial period of a plan can change
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PlanUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_days: Option<u32>,
}

pub type PlanListQuery = ListQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Trial,
    PastDue,
    Unpaid,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subscription {
    pub id: String,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub cancel_at_period_end: bool,
    #[serde(default, deserialize_with = "string_or_number")]
    pub charge_date: Option<String>,
    #[serde(default)]
    pub current_period_number: u32,
    #[serde(default, deserialize_with = "string_or_number")]
    pub period_end_date: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub trial_end_date: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub plan_id: Option<String>,
    #[serde(default)]
    pub status: Option<SubscriptionStatus>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub card: Option<Card>,
}

/// Subscribe a customer to a plan, paying with a stored card, a token or new card data
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SubscriptionInput {
    pub plan_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SubscriptionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_at_period_end: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardDetails>,
}

pub type SubscriptionListQuery = ListQuery;
