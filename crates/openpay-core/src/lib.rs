//! # openpay-core
//!
//! Core types for the Openpay client.
//!
//! This crate provides:
//! - `Country` and the fixed production/sandbox host table
//! - The route table (`route::ROUTES`) mapping every operation to a verb and path
//! - `Transport` trait for plugging in an HTTP client
//! - Request/response models for every Openpay resource
//! - `OpenpayError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use openpay_core::route::{Parent, CHARGE_CAPTURE};
//! use openpay_core::Country;
//!
//! let endpoints = Country::from_code("co").endpoints();
//! assert_eq!(endpoints.sandbox, "https://sandbox-api.openpay.co");
//!
//! let path = CHARGE_CAPTURE.render(Parent::Customer("cus_1"), Some("tr_1"));
//! assert_eq!(path, "customers/cus_1/charges/tr_1/capture");
//! ```

pub mod card;
pub mod charge;
pub mod checkout;
pub mod common;
pub mod country;
pub mod customer;
pub mod error;
pub mod payout;
pub mod plan;
pub mod route;
pub mod store;
pub mod transport;
pub mod webhook;

// Re-exports for convenience
pub use card::{Card, CardDetails, CardInput, CardListQuery, CardUpdate, Token, TokenInput};
pub use charge::{
    CaptureInput, CardCharge, CardPoints, ChargeInput, ChargeListQuery, ChargeMethod,
    ChargeStatus, Confirm, ConfirmMode, OperationType, PaymentMethod, PaymentMonths, PaymentPlan,
    RefundInput, Transaction, TransactionStatus, TransactionType, UseCardPoints,
};
pub use checkout::{
    Checkout, CheckoutCustomer, CheckoutInput, CheckoutListQuery, CheckoutStatus, CheckoutUpdate,
};
pub use common::{query_pairs, Address, Currency, CustomerAddress, ListQuery};
pub use country::{resolve_base_url, Country, Endpoints, API_VERSION};
pub use customer::{
    Customer, CustomerInput, CustomerListQuery, CustomerStatus, CustomerUpdate, StoreReference,
};
pub use error::{ApiErrorBody, BoxError, ErrorCategory, OpenpayError, OpenpayResult};
pub use payout::{
    FeeInput, FeeListQuery, PayoutBankAccount, PayoutCard, PayoutInput, PayoutListQuery,
    PayoutMethod, PayoutType, TransferInput, TransferListQuery,
};
pub use plan::{
    Plan, PlanInput, PlanListQuery, PlanStatus, PlanUpdate, RepeatUnit, StatusAfterRetry,
    Subscription, SubscriptionInput, SubscriptionListQuery, SubscriptionStatus,
    SubscriptionUpdate,
};
pub use route::{Method, Operation, Parent, Resource, Route, Scope};
pub use store::{
    BankAccount, BankAccountInput, BankAccountListQuery, Geolocation, PaynetChain, Store,
    StoreLocationQuery,
};
pub use transport::{HttpRequest, HttpResponse, SharedTransport, Transport};
pub use webhook::{Webhook, WebhookEventType, WebhookInput, WebhookStatus};
