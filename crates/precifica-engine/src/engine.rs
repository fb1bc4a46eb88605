//! Deterministic pricing computation and what-if simulations
//!
//! ```text
//! Price = Rate × Hours × ComplexityFactor × UrgencyFactor
//! ComplexityFactor = 1 + complexity × complexity_step
//! UrgencyFactor    = 1 + urgency × urgency_step
//! ```
//!
//! Every operation is a pure function of the engine's policy and its
//! arguments. Simulations take the hypothetical value as a parameter and
//! never touch the stored request, so a request's observable state is
//! identical before and after any number of simulation calls. No rounding is
//! applied here; two-decimal rounding is a display concern of [`Quote`].

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;
use uuid::Uuid;

use precifica_core::{Level, Quote, ServiceRequest};

use crate::policy::PricingPolicy;

/// Service-pricing engine
#[derive(Debug, Clone)]
pub struct PricingEngine {
    policy: PricingPolicy,
}

impl PricingEngine {
    /// Create an engine with the given policy
    pub fn new(policy: PricingPolicy) -> Self {
        Self { policy }
    }

    /// The engine's policy
    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Multiplier for a complexity level: `1 + level × complexity_step`
    pub fn complexity_factor(&self, level: Level) -> Decimal {
        Decimal::ONE + Decimal::from(level.get()) * self.policy.complexity_step
    }

    /// Multiplier for an urgency level: `1 + level × urgency_step`
    ///
    /// Takes the level as an argument rather than reading it from a request,
    /// so hypothetical urgencies price through the same code path as stored
    /// ones.
    pub fn urgency_factor(&self, level: Level) -> Decimal {
        Decimal::ONE + Decimal::from(level.get()) * self.policy.urgency_step
    }

    /// Final price of a request under its stored complexity and urgency
    pub fn final_price(&self, request: &ServiceRequest) -> Decimal {
        self.price_with_urgency(request, request.urgency)
    }

    /// Price the request as if its urgency were `candidate`
    ///
    /// The candidate is clamped to [1, 5] like any level. The stored request
    /// is not modified; `final_price` afterwards is unchanged.
    pub fn simulate_urgency_adjustment(&self, request: &ServiceRequest, candidate: u8) -> Decimal {
        self.price_with_urgency(request, Level::new(candidate))
    }

    /// Price the request with a percentage discount applied
    ///
    /// `discount_percent` is deliberately unclamped: values above 100 yield
    /// negative prices and negative values yield increases. The stored
    /// request is not modified.
    pub fn simulate_discount(&self, request: &ServiceRequest, discount_percent: Decimal) -> Decimal {
        self.final_price(request) * (Decimal::ONE - discount_percent / dec!(100))
    }

    /// Produce the full quote envelope for a request
    pub fn quote(&self, request: &ServiceRequest) -> Quote {
        let complexity_factor = self.complexity_factor(request.complexity);
        let urgency_factor = self.urgency_factor(request.urgency);
        let final_price = self.final_price(request);

        let quote = Quote {
            quote_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            kind: request.kind,
            description: request.description.clone(),
            base_hourly_rate: request.base_hourly_rate,
            estimated_hours: request.estimated_hours,
            complexity: request.complexity,
            complexity_factor,
            urgency: request.urgency,
            urgency_factor,
            currency: self.policy.currency.clone(),
            final_price,
        };

        debug!(
            quote_id = %quote.quote_id,
            kind = %quote.kind,
            final_price = %quote.final_price,
            "Generated quote"
        );

        quote
    }

    fn price_with_urgency(&self, request: &ServiceRequest, urgency: Level) -> Decimal {
        request.base_hourly_rate
            * request.estimated_hours
            * self.complexity_factor(request.complexity)
            * self.urgency_factor(urgency)
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PricingPolicy::default())
    }
}
