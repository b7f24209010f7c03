use configuration::SimulationParams;
use rust_decimal::Decimal;

/// Pure fee and tax arithmetic for a brokerage profile.
///
/// Stateless: both functions are plain calculations over the configured
/// rates with no side effects.
#[derive(Debug, Clone)]
pub struct FeeTaxPolicy {
    params: SimulationParams,
}

impl FeeTaxPolicy {
    pub fn new(params: SimulationParams) -> Self {
        Self { params }
    }

    /// The fee charged on a buy order of `cash_amount`:
    /// `max(min_fee, fee_rate * cash_amount)`.
    pub fn transaction_fee(&self, cash_amount: Decimal) -> Decimal {
        let proportional = cash_amount * self.params.fee_rate;
        proportional.max(self.params.min_fee)
    }

    /// Withholding tax on a gross dividend cash amount.
    pub fn dividend_tax(&self, gross_dividend: Decimal) -> Decimal {
        gross_dividend * self.params.dividend_tax_rate
    }
}
