use crate::router::{Payload, Router};
use openpay_core::route::{
    Parent, PLAN_CREATE, PLAN_DELETE, PLAN_GET, PLAN_LIST, PLAN_UPDATE, SUBSCRIPTION_CREATE,
    SUBSCRIPTION_DELETE, SUBSCRIPTION_GET, SUBSCRIPTION_LIST, SUBSCRIPTION_UPDATE,
};
use openpay_core::{
    OpenpayResult, Plan, PlanInput, PlanListQuery, PlanUpdate, Subscription, SubscriptionInput,
    SubscriptionListQuery, SubscriptionUpdate,
};

/// Recurring billing plans
#[derive(Debug, Clone, Copy)]
pub struct Plans<'a> {
    router: &'a Router,
}

impl<'a> Plans<'a> {
    pub(crate) fn new(router: &'a Router) -> Self {
        Self { router }
    }

    pub async fn create(&self, input: &PlanInput) -> OpenpayResult<Plan> {
        self.router
            .send(&PLAN_CREATE, Parent::Merchant, None, Payload::body(input)?)
            .await
    }

    pub async fn list(&self, query: &PlanListQuery) -> OpenpayResult<Vec<Plan>> {
        self.router
            .send(&PLAN_LIST, Parent::Merchant, None, Payload::query(query)?)
            .await
    }

    pub async fn get(&self, plan_id: &str) -> OpenpayResult<Plan> {
        self.router
            .send(&PLAN_GET, Parent::Merchant, Some(plan_id), Payload::empty())
            .await
    }

    pub async fn update(&self, plan_id: &str, input: &PlanUpdate) -> OpenpayResult<Plan> {
        self.router
            .send(&PLAN_UPDATE, Parent::Merchant, Some(plan_id), Payload::body(input)?)
            .await
    }

    pub async fn delete(&self, plan_id: &str) -> OpenpayResult<()> {
        self.router
            .send_unit(&PLAN_DELETE, Parent::Merchant, Some(plan_id), Payload::empty())
            .await
    }
}

/// A customer's plan subscriptions
#[derive(Debug, Clone, Copy)]
pub struct Subscriptions<'a> {
    router: &'a Router,
    customer_id: &'a str,
}

impl<'a> Subscriptions<'a> {
    pub(crate) fn new(router: &'a Router, customer_id: &'a str) -> Self {
        Self {
            router,
            customer_id,
        }
    }

    fn parent(&self) -> Parent<'a> {
        Parent::Customer(self.customer_id)
    }

    pub async fn create(&self, input: &SubscriptionInput) -> OpenpayResult<Subscription> {
        self.router
            .send(&SUBSCRIPTION_CREATE, self.parent(), None, Payload::body(input)?)
            .await
    }

    pub async fn list(&self, query: &SubscriptionListQuery) -> OpenpayResult<Vec<Subscription>> {
        self.router
            .send(&SUBSCRIPTION_LIST, self.parent(), None, Payload::query(query)?)
            .await
    }

    pub async fn get(&self, subscription_id: &str) -> OpenpayResult<Subscription> {
        self.router
            .send(
                &SUBSCRIPTION_GET,
                self.parent(),
                Some(subscription_id),
                Payload::empty(),
            )
            .await
    }

    pub async fn update(
        &self,
        subscription_id: &str,
        input: &SubscriptionUpdate,
    ) -> OpenpayResult<Subscription> {
        self.router
            .send(
                &SUBSCRIPTION_UPDATE,
                self.parent(),
                Some(subscription_id),
                Payload::body(input)?,
            )
            .await
    }

    /// Cancel the subscription
    pub async fn delete(&self, subscription_id: &str) -> OpenpayResult<()> {
        self.router
            .send_unit(
                &SUBSCRIPTION_DELETE,
                self.parent(),
                Some(subscription_id),
                Payload::empty(),
            )
            .await
    }
}
