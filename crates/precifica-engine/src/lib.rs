//! # Precifica Engine
//!
//! Deterministic service-pricing with what-if simulations.
//!
//! ## Pricing Formula
//!
//! ```text
//! Price = Rate × Hours × (1 + complexity × 0.1) × (1 + urgency × 0.05)
//! ```
//!
//! The step constants live in [`PricingPolicy`]; the defaults above can be
//! overridden per deployment via a JSON policy file or environment variables.
//! Simulations (urgency change, discount) are pure computations over a
//! hypothetical input and never mutate the request being priced.

pub mod engine;
pub mod policy;

pub use engine::PricingEngine;
pub use policy::PricingPolicy;
