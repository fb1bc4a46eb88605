//! Pricing policy configuration
//!
//! The policy holds the configurable constants of the pricing formula. The
//! defaults reproduce the original model exactly (complexity step 0.1,
//! urgency step 0.05, prices in R$), so an engine built with the default
//! policy needs no configuration at all.

use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use precifica_core::{PrecificaError, Result};

/// Env var naming a JSON policy file to load
pub const POLICY_FILE_ENV: &str = "PRECIFICA_POLICY_FILE";

/// Pricing formula constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPolicy {
    /// Per-level increment of the complexity multiplier
    pub complexity_step: Decimal,
    /// Per-level increment of the urgency multiplier
    pub urgency_step: Decimal,
    /// Currency symbol used by reports
    pub currency: String,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            complexity_step: dec!(0.1),
            urgency_step: dec!(0.05),
            currency: "R$".to_string(),
        }
    }
}

impl PricingPolicy {
    /// Load the policy from environment and an optional JSON file
    ///
    /// Order: `.env` is loaded best-effort, then the file named by
    /// `PRECIFICA_POLICY_FILE` (if set), then `PRECIFICA_*` env overrides on
    /// top. Malformed numeric overrides are configuration errors, not
    /// silently skipped.
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let mut policy = match std::env::var(POLICY_FILE_ENV) {
            Ok(path) => Self::from_json_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(val) = std::env::var("PRECIFICA_COMPLEXITY_STEP") {
            policy.complexity_step = val.parse::<Decimal>().map_err(|e| {
                PrecificaError::Config(format!("Invalid PRECIFICA_COMPLEXITY_STEP: {}", e))
            })?;
        }
        if let Ok(val) = std::env::var("PRECIFICA_URGENCY_STEP") {
            policy.urgency_step = val.parse::<Decimal>().map_err(|e| {
                PrecificaError::Config(format!("Invalid PRECIFICA_URGENCY_STEP: {}", e))
            })?;
        }
        if let Ok(val) = std::env::var("PRECIFICA_CURRENCY") {
            policy.currency = val;
        }

        policy.validate()?;
        debug!(?policy, "Loaded pricing policy");
        Ok(policy)
    }

    /// Load the policy from a JSON file
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PrecificaError::Config(format!("Failed to read policy file {}: {}", path.display(), e))
        })?;

        let policy: Self = serde_json::from_str(&content).map_err(|e| {
            PrecificaError::Config(format!("Failed to parse policy JSON: {}", e))
        })?;

        Ok(policy)
    }

    /// Check the policy for unusable values
    pub fn validate(&self) -> Result<()> {
        if self.complexity_step < Decimal::ZERO {
            return Err(PrecificaError::Config(format!(
                "complexity_step must be non-negative, got {}",
                self.complexity_step
            )));
        }
        if self.urgency_step < Decimal::ZERO {
            return Err(PrecificaError::Config(format!(
                "urgency_step must be non-negative, got {}",
                self.urgency_step
            )));
        }
        if self.currency.is_empty() {
            return Err(PrecificaError::Config(
                "currency symbol must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
