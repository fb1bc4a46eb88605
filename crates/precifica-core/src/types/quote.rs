//! Quote - the materialized result of one price computation
//!
//! A quote echoes the request inputs alongside both factors and the final
//! price. It is a value object produced per call and is never stored. Its
//! `Display` implementation renders the cost-breakdown report; all rounding
//! to two decimal places happens there, never in the stored values.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::level::Level;
use crate::types::service::ServiceKind;

/// Round a value to the two-decimal display scale
///
/// Midpoints round away from zero (10359.375 displays as 10359.38). `{:.2}`
/// on a raw `Decimal` truncates the extra digits instead of rounding, so
/// every display site rounds through here first.
pub fn display_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Price quote with full cost breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Unique quote identifier
    pub quote_id: Uuid,

    /// Generation timestamp (UTC)
    pub generated_at: DateTime<Utc>,

    /// Variant label of the quoted request
    pub kind: ServiceKind,

    /// Request description
    pub description: String,

    /// Hourly rate before factors
    pub base_hourly_rate: Decimal,

    /// Estimated effort in hours
    pub estimated_hours: Decimal,

    /// Complexity level
    pub complexity: Level,

    /// Multiplier derived from the complexity level
    pub complexity_factor: Decimal,

    /// Urgency level
    pub urgency: Level,

    /// Multiplier derived from the urgency level
    pub urgency_factor: Decimal,

    /// Currency symbol used by the report
    pub currency: String,

    /// Final price, unrounded
    pub final_price: Decimal,
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header = format!("===== Detalhamento do Custo - {} =====", self.kind.title());
        writeln!(f, "{}", header)?;
        writeln!(f, "Descrição: {}", self.description)?;
        writeln!(
            f,
            "Valor Hora Base: {} {:.2}",
            self.currency,
            display_amount(self.base_hourly_rate)
        )?;
        writeln!(
            f,
            "Horas Estimadas: {:.2}",
            display_amount(self.estimated_hours)
        )?;
        writeln!(
            f,
            "Complexidade: {} (Fator: {:.2})",
            self.complexity,
            display_amount(self.complexity_factor)
        )?;
        writeln!(
            f,
            "Urgência: {} (Fator: {:.2})",
            self.urgency,
            display_amount(self.urgency_factor)
        )?;
        writeln!(
            f,
            "Preço Final: {} {:.2}",
            self.currency,
            display_amount(self.final_price)
        )?;
        // Closing ruler matches the header's character length
        write!(f, "{}", "=".repeat(header.chars().count()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_quote() -> Quote {
        Quote {
            quote_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            kind: ServiceKind::EngineeringProject,
            description: "Projeto Estrutural de Prédio".to_string(),
            base_hourly_rate: dec!(200),
            estimated_hours: dec!(40),
            complexity: Level::new(4),
            complexity_factor: dec!(1.4),
            urgency: Level::new(3),
            urgency_factor: dec!(1.15),
            currency: "R$".to_string(),
            final_price: dec!(12880),
        }
    }

    #[test]
    fn test_report_lines() {
        let report = sample_quote().to_string();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines[0],
            "===== Detalhamento do Custo - Projeto de Engenharia ====="
        );
        assert_eq!(lines[1], "Descrição: Projeto Estrutural de Prédio");
        assert_eq!(lines[2], "Valor Hora Base: R$ 200.00");
        assert_eq!(lines[3], "Horas Estimadas: 40.00");
        assert_eq!(lines[4], "Complexidade: 4 (Fator: 1.40)");
        assert_eq!(lines[5], "Urgência: 3 (Fator: 1.15)");
        assert_eq!(lines[6], "Preço Final: R$ 12880.00");
    }

    #[test]
    fn test_report_ruler_matches_header_length() {
        let report = sample_quote().to_string();
        let lines: Vec<&str> = report.lines().collect();

        let ruler = lines.last().unwrap();
        assert!(ruler.chars().all(|c| c == '='));
        assert_eq!(ruler.chars().count(), lines[0].chars().count());
    }

    #[test]
    fn test_display_amount_rounds_instead_of_truncating() {
        assert_eq!(display_amount(dec!(10359.375)), dec!(10359.38));
        assert_eq!(display_amount(dec!(0.129)), dec!(0.13));
        assert_eq!(display_amount(dec!(-10359.375)), dec!(-10359.38));
        assert_eq!(display_amount(dec!(200)), dec!(200));
    }

    #[test]
    fn test_report_rounds_values_with_extra_decimals() {
        let mut quote = sample_quote();
        quote.final_price = dec!(10359.375);
        quote.urgency_factor = dec!(1.005);

        let report = quote.to_string();
        assert!(report.contains("Preço Final: R$ 10359.38"));
        assert!(report.contains("(Fator: 1.01)"));
    }

    #[test]
    fn test_json_round_trip() {
        let quote = sample_quote();
        let json = serde_json::to_string(&quote).unwrap();
        let back: Quote = serde_json::from_str(&json).unwrap();

        assert_eq!(back.quote_id, quote.quote_id);
        assert_eq!(back.final_price, quote.final_price);
        assert_eq!(back.kind, quote.kind);
    }
}
