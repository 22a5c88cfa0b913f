//! Resource facades.
//!
//! Each facade borrows the client's router and a parent scope (the merchant,
//! or one customer) and maps its methods onto rows of the route table.

mod bank_accounts;
mod cards;
mod charges;
mod checkouts;
mod customers;
mod payouts;
mod plans;
mod pse;
mod stores;
mod tokens;
mod webhooks;

pub use bank_accounts::BankAccounts;
pub use cards::Cards;
pub use charges::Charges;
pub use checkouts::{Checkouts, CustomerCheckouts};
pub use customers::Customers;
pub use payouts::{Fees, Payouts, Transfers};
pub use plans::{Plans, Subscriptions};
pub use pse::Pse;
pub use stores::Stores;
pub use tokens::Tokens;
pub use webhooks::Webhooks;
