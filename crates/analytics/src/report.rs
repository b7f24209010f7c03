use core_types::Transaction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The terminal accumulators of one simulation run, handed to the
/// aggregator by the engine. The ledger moves into the final result.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalSnapshot {
    pub total_shares: Decimal,
    pub total_invested: Decimal,
    /// Net of withholding tax.
    pub total_dividends_received: Decimal,
    pub total_taxes_paid: Decimal,
    pub total_fees_paid: Decimal,
    pub transactions: Vec<Transaction>,
}

/// The complete, immutable outcome of one simulation run.
///
/// All monetary fields are exact decimals; percentage fields are derived
/// at the end of the run and carry display precision only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub initial_investment: Decimal,
    /// Accepted for interface compatibility; never applied during stepping.
    pub monthly_investment: Decimal,
    pub total_invested: Decimal,
    pub total_shares: Decimal,
    pub final_share_price: Decimal,
    pub final_value: Decimal,
    /// Price appreciation on the original lot only.
    pub pure_capital_gain: Decimal,
    pub pure_capital_gain_pct: Decimal,
    /// Value attributable to dividend-funded share accumulation.
    pub reinvestment_gain: Decimal,
    pub total_gain: Decimal,
    pub total_gain_pct: Decimal,
    pub total_dividends_received: Decimal,
    pub total_taxes_paid: Decimal,
    pub total_fees_paid: Decimal,
    pub annualized_return_pct: Decimal,
    /// The full ledger in chronological order.
    pub transactions: Vec<Transaction>,
}
