use analytics::TerminalSnapshot;
use core_types::{Position, Transaction};
use rust_decimal::Decimal;

/// The mutable accumulators of one simulation run.
///
/// Exclusively owned by the engine for the duration of `simulate`; a fresh
/// state is constructed per call, so no run can observe another's
/// bookkeeping. Shares only accumulate (no sells are modeled), and the
/// ledger is append-only in step order.
#[derive(Debug, Clone, Default)]
pub struct SimulationState {
    position: Position,
    total_invested: Decimal,
    total_dividends_received: Decimal,
    total_fees_paid: Decimal,
    total_taxes_paid: Decimal,
    ledger: Vec<Transaction>,
}

impl SimulationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a fill receipt from the executor: shares move into the
    /// position, the fee accumulates, and the transaction joins the ledger.
    pub fn apply_fill(&mut self, transaction: Transaction) {
        self.position.add_shares(transaction.shares);
        self.total_fees_paid += transaction.fee;
        self.ledger.push(transaction);
    }

    /// Records the capital committed by the opening purchase.
    pub fn record_investment(&mut self, amount: Decimal) {
        self.total_invested += amount;
    }

    /// Records one month's dividend outcome: the net amount is kept as
    /// received income (whether or not it is reinvested afterwards), the
    /// tax accumulates separately.
    pub fn record_dividend(&mut self, net: Decimal, tax: Decimal) {
        self.total_dividends_received += net;
        self.total_taxes_paid += tax;
    }

    pub fn total_shares(&self) -> Decimal {
        self.position.shares
    }

    pub fn total_invested(&self) -> Decimal {
        self.total_invested
    }

    pub fn ledger(&self) -> &[Transaction] {
        &self.ledger
    }

    /// Consumes the state into the terminal snapshot the aggregator reads.
    pub fn into_snapshot(self) -> TerminalSnapshot {
        TerminalSnapshot {
            total_shares: self.position.shares,
            total_invested: self.total_invested,
            total_dividends_received: self.total_dividends_received,
            total_taxes_paid: self.total_taxes_paid,
            total_fees_paid: self.total_fees_paid,
            transactions: self.ledger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_types::TransactionKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_apply_fill_accumulates() {
        let mut state = SimulationState::new();
        state.apply_fill(Transaction {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            kind: TransactionKind::InitialBuy,
            shares: dec!(100),
            price: dec!(100),
            cash_amount: dec!(10000),
            fee: dec!(25),
        });
        state.record_investment(dec!(10000));
        state.record_dividend(dec!(84.60), dec!(15.40));

        assert_eq!(state.total_shares(), dec!(100));
        assert_eq!(state.total_invested(), dec!(10000));
        assert_eq!(state.ledger().len(), 1);

        let snapshot = state.into_snapshot();
        assert_eq!(snapshot.total_fees_paid, dec!(25));
        assert_eq!(snapshot.total_dividends_received, dec!(84.60));
        assert_eq!(snapshot.total_taxes_paid, dec!(15.40));
    }
}
