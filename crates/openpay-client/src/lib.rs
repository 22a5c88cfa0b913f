//! # openpay-client
//!
//! Async client for the Openpay payment API (Mexico, Colombia, Peru).
//!
//! Each country gets its own client type, so operations a country does not
//! offer are simply not there:
//!
//! - `OpenpayMx` - charges with capture and refund, payouts, fees,
//!   transfers, bank accounts, client IP forwarding
//! - `OpenpayCo` - charges with refund, PSE bank transfers
//! - `OpenpayPe` - charges, hosted checkouts
//!
//! `OpenpayClient` picks the right one from `OpenpayConfig::country`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use openpay_client::{OpenpayCo, OpenpayConfig};
//! use openpay_core::{ChargeInput, ChargeMethod};
//!
//! let config = OpenpayConfig::new("mzdtln0bmtms6o3kck8f", "sk_...", false);
//! let openpay = OpenpayCo::new(config)?;
//!
//! let input = ChargeInput::new(
//!     100.0,
//!     "Order 42",
//!     ChargeMethod::card("kqgykn96i7bcs1wwhvgw", "W2Iq..."),
//! );
//! let transaction = openpay.charges().create(&input).await?;
//! println!("charged: {}", transaction.id);
//! ```
//!
//! ## Custom transports
//!
//! Anything implementing `openpay_core::Transport` can replace the default
//! reqwest transport through `Openpay::with_transport`. The router still
//! applies the configured timeout around it.

#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod resources;
pub mod router;
pub mod transport;

pub use client::{
    Colombia, Mexico, Openpay, OpenpayClient, OpenpayCo, OpenpayMx, OpenpayPe, Peru, Refundable,
    Region,
};
pub use config::{basic_auth, ClientIp, OpenpayConfig, DEFAULT_TIMEOUT};
pub use router::{build_store_url, build_url, Router};
pub use transport::ReqwestTransport;
