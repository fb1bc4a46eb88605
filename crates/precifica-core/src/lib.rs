//! # Precifica Core
//!
//! Shared types and errors for the Precifica service-pricing engine.
//!
//! ## Core Types
//!
//! - [`ServiceRequest`]: the priced entity (description, hours, levels, rate)
//! - [`ServiceKind`]: the report-variant label for a request
//! - [`Level`]: a complexity/urgency level, clamped to [1, 5] at construction
//! - [`Quote`]: the per-computation envelope whose `Display` form is the
//!   cost-breakdown report

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{PrecificaError, Result};
pub use types::{
    level::Level,
    quote::{display_amount, Quote},
    service::{ServiceKind, ServiceRequest},
};

/// Precifica version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum complexity/urgency level
pub const MIN_SERVICE_LEVEL: u8 = 1;

/// Maximum complexity/urgency level
pub const MAX_SERVICE_LEVEL: u8 = 5;
