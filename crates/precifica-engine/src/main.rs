//! Precifica demonstration binary
//!
//! Prices one sample request per service kind and shows the what-if
//! simulations alongside the full cost-breakdown report.

use anyhow::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use precifica_core::{display_amount, ServiceKind, ServiceRequest, VERSION};
use precifica_engine::{PricingEngine, PricingPolicy};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting Precifica v{}", VERSION);

    // Load pricing policy
    let policy = PricingPolicy::load()?;
    info!("Loaded pricing policy: {:?}", policy);

    let engine = PricingEngine::new(policy);

    let scenarios = [
        (
            ServiceRequest::new(
                ServiceKind::EngineeringProject,
                "Projeto Estrutural de Prédio",
                dec!(40),
                4,
                3,
                dec!(200),
            ),
            dec!(10),
            5u8,
        ),
        (
            ServiceRequest::new(
                ServiceKind::TechnologyAnalysis,
                "Análise de Segurança de Rede",
                dec!(80),
                5,
                4,
                dec!(150),
            ),
            dec!(5),
            2u8,
        ),
        (
            ServiceRequest::new(
                ServiceKind::LegalConsulting,
                "Elaboração de Contrato Societário",
                dec!(25),
                3,
                5,
                dec!(300),
            ),
            dec!(15),
            1u8,
        ),
    ];

    for (request, discount_percent, candidate_urgency) in &scenarios {
        demonstrate(&engine, request, *discount_percent, *candidate_urgency);
    }

    info!("Priced {} sample requests", scenarios.len());
    Ok(())
}

/// Print the prices and breakdown report for one sample request
fn demonstrate(
    engine: &PricingEngine,
    request: &ServiceRequest,
    discount_percent: Decimal,
    candidate_urgency: u8,
) {
    let currency = &engine.policy().currency;

    println!();
    println!("--- {} ---", request.kind);
    println!(
        "Preço Final: {} {:.2}",
        currency,
        display_amount(engine.final_price(request))
    );
    println!(
        "Simulação com {}% de desconto: {} {:.2}",
        discount_percent,
        currency,
        display_amount(engine.simulate_discount(request, discount_percent))
    );
    println!(
        "Simulação com urgência {}: {} {:.2}",
        candidate_urgency,
        currency,
        display_amount(engine.simulate_urgency_adjustment(request, candidate_urgency))
    );
    println!("{}", engine.quote(request));
}
