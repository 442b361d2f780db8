//! DCF Engine CLI
//!
//! Runs a comprehensive analysis for one investment case and prints a yearly
//! yield table plus the IRR, liquidity, and NPV verdicts. `--json` emits the
//! full result for API-style consumption.

use anyhow::Result;
use clap::Parser;
use dcf_engine::analysis::LiquidityParams;
use dcf_engine::projection::ProjectionParams;
use dcf_engine::{DcfEngine, EngineConfig};

#[derive(Parser, Debug)]
#[command(name = "dcf_engine", about = "DCF analysis for a real-estate investment case")]
struct Cli {
    /// Initial invested capital (dollars)
    #[arg(long, default_value_t = 50_000_000.0)]
    investment: f64,

    /// Number of years to project
    #[arg(long, default_value_t = 10)]
    years: u32,

    /// Annual growth rate as a decimal
    #[arg(long, default_value_t = 0.12)]
    growth_rate: f64,

    /// Occupancy rate as a decimal
    #[arg(long, default_value_t = 0.92)]
    occupancy_rate: f64,

    /// Total asset value for the liquidity check (dollars)
    #[arg(long, default_value_t = 100_000_000.0)]
    total_asset_value: f64,

    /// Liquid capital currently held (dollars)
    #[arg(long, default_value_t = 15_000_000.0)]
    current_liquidity: f64,

    /// Required liquidity as a fraction of total asset value
    #[arg(long, default_value_t = 0.20)]
    required_ratio: f64,

    /// Emergency reserve floor as a fraction of total asset value
    #[arg(long, default_value_t = 0.05)]
    emergency_ratio: f64,

    /// Annual discount rate for NPV
    #[arg(long, default_value_t = 0.08)]
    discount_rate: f64,

    /// Project identifier for reporting
    #[arg(long, default_value = "Meridian Heights Development")]
    project_name: String,

    /// Location label for reporting
    #[arg(long, default_value = "Denver, CO")]
    location: String,

    /// Emit the full analysis as JSON instead of the report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = EngineConfig::new(cli.project_name.clone(), cli.location.clone())
        .with_discount_rate(cli.discount_rate);
    let projection_params = ProjectionParams {
        investment: cli.investment,
        years: cli.years,
        growth_rate: cli.growth_rate,
        occupancy_rate: cli.occupancy_rate,
    };
    let liquidity_params = LiquidityParams {
        total_asset_value: cli.total_asset_value,
        current_liquidity: cli.current_liquidity,
        required_ratio: cli.required_ratio,
        emergency_ratio: cli.emergency_ratio,
    };

    let mut engine = DcfEngine::new(config);
    let analysis = engine.synthesize(&projection_params, &liquidity_params)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("DCF Engine v0.1.0");
    println!("=================\n");
    println!("Project: {} ({})", cli.project_name, cli.location);
    println!("  Investment: ${:.0}", cli.investment);
    println!("  Horizon: {} years", cli.years);
    println!(
        "  Growth: {:.1}%  Occupancy: {:.1}%  Discount: {:.1}%\n",
        cli.growth_rate * 100.0,
        cli.occupancy_rate * 100.0,
        cli.discount_rate * 100.0
    );

    println!(
        "{:>4} {:>16} {:>16} {:>16} {:>18}",
        "Year", "Base Yield", "Adjusted", "Phi-Adjusted", "Cumulative"
    );
    println!("{}", "-".repeat(74));
    for row in &analysis.projection.rows {
        println!(
            "{:>4} {:>16.2} {:>16.2} {:>16.2} {:>18.2}",
            row.year, row.base_yield, row.adjusted_yield, row.phi_adjusted_yield, row.cumulative_yield
        );
    }

    println!("\nYield Summary:");
    println!("  Total Phi-Adjusted Yield: ${:.2}", analysis.projection.total_yield);
    println!("  Average Yearly Yield: ${:.2}", analysis.projection.average_yield);

    println!("\nIRR Analysis:");
    println!("  Base IRR: {:.2}%", analysis.irr.base_irr * 100.0);
    println!("  Hedged IRR: {:.2}%", analysis.irr.hedged_irr * 100.0);
    println!("  Sharpe Ratio: {:.2}", analysis.irr.sharpe_ratio);
    println!("  Sortino Ratio: {:.2}", analysis.irr.sortino_ratio);
    println!("  Recommendation: {}", analysis.irr.recommendation);

    println!("\nLiquidity Validation: {:?}", analysis.liquidity.status);
    println!("  Required: ${:.0}", analysis.liquidity.required_liquidity);
    println!("  Emergency Reserve: ${:.0}", analysis.liquidity.emergency_reserve);
    println!("  Actual Ratio: {:.2}%", analysis.liquidity.actual_ratio * 100.0);
    for recommendation in &analysis.liquidity.recommendations {
        println!("  - {}", recommendation);
    }

    println!("\nVerdict:");
    println!("  NPV: ${:.2} ({:?})", analysis.npv.value, analysis.npv.status);
    println!("  Viability: {:?}", analysis.investment_viability);
    println!("  Risk Level: {:?}", analysis.risk_level);

    let snapshot = engine.inspect_state();
    println!("\nEngine State: {} ledger records, pool ${:.0}",
        snapshot.ledger_len, snapshot.liquidity_pool);

    Ok(())
}
