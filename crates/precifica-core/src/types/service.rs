//! Service request types
//!
//! A [`ServiceRequest`] is the priced entity: descriptive text plus the
//! numeric inputs of the pricing formula. The engine never mutates a request;
//! simulations compute with hypothetical values passed as arguments.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PrecificaError, Result};
use crate::types::level::Level;

/// Kinds of professional service, selecting report-header text only
///
/// All kinds share identical pricing math; the label never enters the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    /// Engineering project work
    EngineeringProject,
    /// Technology assessment and analysis
    TechnologyAnalysis,
    /// Legal consulting
    LegalConsulting,
}

impl ServiceKind {
    /// Report-header title for this kind
    pub fn title(&self) -> &'static str {
        match self {
            ServiceKind::EngineeringProject => "Projeto de Engenharia",
            ServiceKind::TechnologyAnalysis => "Análise Tecnológica",
            ServiceKind::LegalConsulting => "Consultoria Legal",
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// A service request to be priced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRequest {
    /// Variant label, used for report headers only
    pub kind: ServiceKind,

    /// Free-form description, no semantic constraints
    pub description: String,

    /// Estimated effort in hours
    pub estimated_hours: Decimal,

    /// Task complexity level, clamped to [1, 5]
    pub complexity: Level,

    /// Delivery urgency level, clamped to [1, 5]
    pub urgency: Level,

    /// Hourly rate before factors are applied
    pub base_hourly_rate: Decimal,
}

impl ServiceRequest {
    /// Create a new service request
    ///
    /// Raw complexity and urgency are clamped into [1, 5]; construction never
    /// fails.
    pub fn new(
        kind: ServiceKind,
        description: impl Into<String>,
        estimated_hours: Decimal,
        complexity: u8,
        urgency: u8,
        base_hourly_rate: Decimal,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            estimated_hours,
            complexity: Level::new(complexity),
            urgency: Level::new(urgency),
            base_hourly_rate,
        }
    }

    /// Opt-in sanity check on the numeric inputs
    ///
    /// The pricing path never calls this: the original behavior accepts any
    /// numeric input, and negative hours or rates simply flow through the
    /// formula. Callers that want stricter intake can invoke it explicitly.
    pub fn validate(&self) -> Result<()> {
        if self.estimated_hours < Decimal::ZERO {
            return Err(PrecificaError::Validation(format!(
                "estimated_hours must be non-negative, got {}",
                self.estimated_hours
            )));
        }
        if self.base_hourly_rate < Decimal::ZERO {
            return Err(PrecificaError::Validation(format!(
                "base_hourly_rate must be non-negative, got {}",
                self.base_hourly_rate
            )));
        }
        Ok(())
    }
}
