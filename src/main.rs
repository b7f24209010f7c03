use analytics::SimulationResult;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Table};
use core_types::SimulationRequest;
use market_data::{DividendHistoryProvider, JsonFileSource, PriceHistoryProvider};
use rust_decimal::Decimal;
use simulator::Simulator;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the Dripline investment simulator.
fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate(args) => handle_simulate(args)?,
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A month-stepped dividend-reinvestment simulator for a single security.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct an investment month by month and report the returns.
    Simulate(SimulateArgs),
}

#[derive(Parser)]
struct SimulateArgs {
    /// The ticker symbol to simulate (e.g., "TSLY").
    #[arg(long)]
    ticker: String,

    /// Directory holding `<ticker>.prices.json` / `<ticker>.dividends.json`.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// The lump sum invested on the first trading day.
    #[arg(long, default_value = "10000")]
    initial_investment: Decimal,

    /// Accepted for interface compatibility; not applied during stepping.
    #[arg(long, default_value = "0")]
    monthly_investment: Decimal,

    /// The start date of the simulation (format: YYYY-MM-DD).
    #[arg(long)]
    from: NaiveDate,

    /// The end date of the simulation (format: YYYY-MM-DD).
    #[arg(long)]
    to: NaiveDate,

    /// Keep net dividends as cash instead of buying more shares.
    #[arg(long)]
    no_dividend_reinvestment: bool,

    /// Emit the full result as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Simulate Command Logic
// ==============================================================================

/// Loads the inputs, runs one simulation, and renders the result.
fn handle_simulate(args: SimulateArgs) -> Result<()> {
    let config = configuration::load_config().context("Failed to load configuration")?;

    let source = JsonFileSource::new(&args.data_dir);
    let prices = source
        .price_history(&args.ticker, args.from, args.to)
        .with_context(|| format!("Failed to load price history for {}", args.ticker))?;
    let dividends = source
        .dividend_history(&args.ticker)
        .with_context(|| format!("Failed to load dividend history for {}", args.ticker))?;

    let request = SimulationRequest {
        initial_investment: args.initial_investment,
        monthly_investment: args.monthly_investment,
        start_date: args.from,
        end_date: args.to,
        reinvest_dividends: !args.no_dividend_reinvestment,
    };

    let simulator = Simulator::new(&prices, &dividends, config.simulation);
    let result = simulator.simulate(&request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&args.ticker, &result);
    }

    Ok(())
}

// ==============================================================================
// Result Rendering
// ==============================================================================

fn format_currency(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

fn format_percentage(pct: Decimal) -> String {
    format!("{:.2}%", pct)
}

/// Renders the summary, the cost/dividend breakdown, and the ledger.
fn print_result(ticker: &str, result: &SimulationResult) {
    let mut summary = Table::new();
    summary.load_preset(UTF8_FULL).set_header(vec!["Metric", "Value"]);
    summary
        .add_row(vec!["Ticker".to_string(), ticker.to_string()])
        .add_row(vec![
            "Initial investment".to_string(),
            format_currency(result.initial_investment),
        ])
        .add_row(vec![
            "Total shares".to_string(),
            format!("{:.6}", result.total_shares),
        ])
        .add_row(vec![
            "Final share price".to_string(),
            format_currency(result.final_share_price),
        ])
        .add_row(vec![
            "Final value".to_string(),
            format_currency(result.final_value),
        ])
        .add_row(vec![
            "Pure capital gain".to_string(),
            format!(
                "{} ({})",
                format_currency(result.pure_capital_gain),
                format_percentage(result.pure_capital_gain_pct)
            ),
        ])
        .add_row(vec![
            "Reinvestment gain".to_string(),
            format_currency(result.reinvestment_gain),
        ])
        .add_row(vec![
            "Total gain".to_string(),
            format!(
                "{} ({})",
                format_currency(result.total_gain),
                format_percentage(result.total_gain_pct)
            ),
        ])
        .add_row(vec![
            "Annualized return".to_string(),
            format_percentage(result.annualized_return_pct),
        ]);
    println!("{summary}");

    let mut costs = Table::new();
    costs
        .load_preset(UTF8_FULL)
        .set_header(vec!["Dividends & Costs", "Value"]);
    costs
        .add_row(vec![
            "Gross dividends".to_string(),
            format_currency(result.total_dividends_received + result.total_taxes_paid),
        ])
        .add_row(vec![
            "Dividend tax withheld".to_string(),
            format_currency(result.total_taxes_paid),
        ])
        .add_row(vec![
            "Net dividends received".to_string(),
            format_currency(result.total_dividends_received),
        ])
        .add_row(vec![
            "Transaction fees".to_string(),
            format_currency(result.total_fees_paid),
        ]);
    println!("{costs}");

    let mut ledger = Table::new();
    ledger
        .load_preset(UTF8_FULL)
        .set_header(vec!["Date", "Kind", "Shares", "Price", "Cash", "Fee"]);
    for tx in &result.transactions {
        ledger.add_row(vec![
            tx.date.format("%Y-%m-%d").to_string(),
            format!("{:?}", tx.kind),
            format!("{:.6}", tx.shares),
            format_currency(tx.price),
            format_currency(tx.cash_amount),
            format_currency(tx.fee),
        ]);
    }
    println!("{ledger}");
}
