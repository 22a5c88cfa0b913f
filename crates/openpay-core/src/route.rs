//! # Route Table
//!
//! Every Openpay operation is one row: resource, operation, HTTP verb and
//! path template. Resource facades look their row up by name and hand it to
//! the router; no facade formats a path by hand.
//!
//! Templates are relative to the merchant scope (`{merchant_id}/`). Rows
//! that can be nested under a customer get a `customers/{customer_id}/`
//! prefix at render time.

use std::fmt;

/// HTTP verbs used by the Openpay API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// REST resources exposed by Openpay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Charges,
    Customers,
    Cards,
    Payouts,
    Fees,
    Transfers,
    Subscriptions,
    BankAccounts,
    Plans,
    Webhooks,
    Tokens,
    Stores,
    Checkouts,
    Pse,
}

impl Resource {
    /// How the URL is scoped for this resource
    pub const fn scope(&self) -> Scope {
        match self {
            Resource::Stores => Scope::Unversioned,
            _ => Scope::Merchant,
        }
    }
}

/// Operations a facade can perform on a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    List,
    Get,
    Update,
    Delete,
    Capture,
    Refund,
}

/// URL family a route belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// `{base}/{version}/{merchant_id}/{path}`
    Merchant,
    /// `{base}/{path}`; the remote API neither versions nor merchant-scopes it
    Unversioned,
}

/// Parent a nested route is rendered under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent<'a> {
    Merchant,
    Customer(&'a str),
}

/// One row of the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub resource: Resource,
    pub operation: Operation,
    pub method: Method,
    pub template: &'static str,
}

impl Route {
    pub const fn new(
        resource: Resource,
        operation: Operation,
        method: Method,
        template: &'static str,
    ) -> Self {
        Self {
            resource,
            operation,
            method,
            template,
        }
    }

    pub const fn scope(&self) -> Scope {
        self.resource.scope()
    }

    /// Whether the template needs an `{id}` value
    pub fn takes_id(&self) -> bool {
        self.template.contains("{id}")
    }

    /// Render the path relative to the merchant (or host, for unversioned routes).
    pub fn render(&self, parent: Parent<'_>, id: Option<&str>) -> String {
        let path = match id {
            Some(id) => self.template.replace("{id}", id),
            None => self.template.to_string(),
        };

        match parent {
            Parent::Merchant => path,
            Parent::Customer(customer_id) => format!("customers/{}/{}", customer_id, path),
        }
    }

    /// Look up a row by resource and operation
    pub fn find(resource: Resource, operation: Operation) -> Option<&'static Route> {
        ROUTES
            .iter()
            .find(|r| r.resource == resource && r.operation == operation)
    }
}

macro_rules! route_table {
    ($($name:ident => $resource:ident :: $op:ident, $method:ident, $template:literal;)*) => {
        $(
            pub const $name: Route =
                Route::new(Resource::$resource, Operation::$op, Method::$method, $template);
        )*

        /// All routes known to the client
        pub const ROUTES: &[Route] = &[$($name),*];
    };
}

route_table! {
    CHARGE_CREATE => Charges::Create, Post, "charges";
    CHARGE_LIST => Charges::List, Get, "charges";
    CHARGE_GET => Charges::Get, Get, "charges/{id}";
    CHARGE_CAPTURE => Charges::Capture, Post, "charges/{id}/capture";
    CHARGE_REFUND => Charges::Refund, Post, "charges/{id}/refund";

    CUSTOMER_CREATE => Customers::Create, Post, "customers";
    CUSTOMER_LIST => Customers::List, Get, "customers";
    CUSTOMER_GET => Customers::Get, Get, "customers/{id}";
    CUSTOMER_UPDATE => Customers::Update, Put, "customers/{id}";
    CUSTOMER_DELETE => Customers::Delete, Delete, "customers/{id}";

    CARD_CREATE => Cards::Create, Post, "cards";
    CARD_LIST => Cards::List, Get, "cards";
    CARD_GET => Cards::Get, Get, "cards/{id}";
    CARD_UPDATE => Cards::Update, Put, "cards/{id}";
    CARD_DELETE => Cards::Delete, Delete, "cards/{id}";

    PAYOUT_CREATE => Payouts::Create, Post, "payouts";
    PAYOUT_LIST => Payouts::List, Get, "payouts";
    PAYOUT_GET => Payouts::Get, Get, "payouts/{id}";

    FEE_CREATE => Fees::Create, Post, "fees";
    FEE_LIST => Fees::List, Get, "fees";

    TRANSFER_CREATE => Transfers::Create, Post, "transfers";
    TRANSFER_LIST => Transfers::List, Get, "transfers";
    TRANSFER_GET => Transfers::Get, Get, "transfers/{id}";

    SUBSCRIPTION_CREATE => Subscriptions::Create, Post, "subscriptions";
    SUBSCRIPTION_LIST => Subscriptions::List, Get, "subscriptions";
    SUBSCRIPTION_GET => Subscriptions::Get, Get, "subscriptions/{id}";
    SUBSCRIPTION_UPDATE => Subscriptions::Update, Put, "subscriptions/{id}";
    SUBSCRIPTION_DELETE => Subscriptions::Delete, Delete, "subscriptions/{id}";

    BANK_ACCOUNT_CREATE => BankAccounts::Create, Post, "bankaccounts";
    BANK_ACCOUNT_LIST => BankAccounts::List, Get, "bankaccounts";
    BANK_ACCOUNT_GET => BankAccounts::Get, Get, "bankaccounts/{id}";
    BANK_ACCOUNT_DELETE => BankAccounts::Delete, Delete, "bankaccounts/{id}";

    PLAN_CREATE => Plans::Create, Post, "plans";
    PLAN_LIST => Plans::List, Get, "plans";
    PLAN_GET => Plans::Get, Get, "plans/{id}";
    PLAN_UPDATE => Plans::Update, Put, "plans/{id}";
    PLAN_DELETE => Plans::Delete, Delete, "plans/{id}";

    WEBHOOK_CREATE => Webhooks::Create, Post, "webhooks";
    WEBHOOK_LIST => Webhooks::List, Get, "webhooks";
    WEBHOOK_GET => Webhooks::Get, Get, "webhooks/{id}";
    WEBHOOK_DELETE => Webhooks::Delete, Delete, "webhooks/{id}";

    TOKEN_CREATE => Tokens::Create, Post, "tokens";
    TOKEN_GET => Tokens::Get, Get, "tokens/{id}";

    STORE_LIST => Stores::List, Get, "stores";

    CHECKOUT_CREATE => Checkouts::Create, Post, "checkouts";
    CHECKOUT_LIST => Checkouts::List, Get, "checkouts";
    CHECKOUT_GET => Checkouts::Get, Get, "checkouts/{id}";
    CHECKOUT_UPDATE => Checkouts::Update, Put, "checkouts/{id}";

    // PSE is a bank_account charge posted to the charges collection
    PSE_CREATE => Pse::Create, Post, "charges";
}
