use crate::error::AnalyticsError;
use crate::report::{SimulationResult, TerminalSnapshot};
use calendar::TradingCalendar;
use core_types::SimulationRequest;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

const DAYS_PER_YEAR: f64 = 365.25;

/// A stateless calculator deriving the final return metrics from the
/// terminal state of a run.
#[derive(Debug, Default)]
pub struct ResultAggregator {}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values the terminal position and derives the gain decomposition.
    ///
    /// The valuation price is the close of the first trading day at or
    /// after the requested end date; if the series ends before that, the
    /// run as a whole fails with a no-trading-data error.
    pub fn aggregate(
        &self,
        request: &SimulationRequest,
        snapshot: TerminalSnapshot,
        calendar: &TradingCalendar<'_>,
    ) -> Result<SimulationResult, AnalyticsError> {
        let (_, final_price) = calendar.price_on_or_after(request.end_date)?;
        let final_value = snapshot.total_shares * final_price;

        // The original lot is the first ledger entry; every later entry is
        // dividend-funded accumulation.
        let initial_shares = snapshot
            .transactions
            .first()
            .filter(|tx| !tx.kind.is_reinvest())
            .map(|tx| tx.shares)
            .unwrap_or(Decimal::ZERO);

        let initial_value_now = initial_shares * final_price;
        let pure_capital_gain = initial_value_now - snapshot.total_invested;
        let reinvestment_gain = final_value - initial_value_now;
        let total_gain = final_value - snapshot.total_invested;

        let pure_capital_gain_pct = Self::percentage_of(pure_capital_gain, request.initial_investment);
        let total_gain_pct = Self::percentage_of(total_gain, snapshot.total_invested);

        let annualized_return_pct = self.annualized_return_pct(request, final_value)?;

        tracing::debug!(
            %final_price,
            %final_value,
            %total_gain,
            %annualized_return_pct,
            "simulation aggregated"
        );

        Ok(SimulationResult {
            initial_investment: request.initial_investment,
            monthly_investment: request.monthly_investment,
            total_invested: snapshot.total_invested,
            total_shares: snapshot.total_shares,
            final_share_price: final_price,
            final_value,
            pure_capital_gain,
            pure_capital_gain_pct,
            reinvestment_gain,
            total_gain,
            total_gain_pct,
            total_dividends_received: snapshot.total_dividends_received,
            total_taxes_paid: snapshot.total_taxes_paid,
            total_fees_paid: snapshot.total_fees_paid,
            annualized_return_pct,
            transactions: snapshot.transactions,
        })
    }

    /// `numerator / base * 100`, or zero when the base is not positive.
    fn percentage_of(numerator: Decimal, base: Decimal) -> Decimal {
        if base > Decimal::ZERO {
            numerator / base * Decimal::from(100)
        } else {
            Decimal::ZERO
        }
    }

    /// Geometric annualization of the whole-run growth factor.
    ///
    /// Defined as zero when the duration or the initial investment is not
    /// positive. This is the one place the fixed-point domain is left: the
    /// fractional power is a display-precision metric, computed in f64 the
    /// same way the result boundary renders it.
    fn annualized_return_pct(
        &self,
        request: &SimulationRequest,
        final_value: Decimal,
    ) -> Result<Decimal, AnalyticsError> {
        let duration_days = (request.end_date - request.start_date).num_days();
        if duration_days <= 0 || request.initial_investment <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }

        let growth = (final_value / request.initial_investment)
            .to_f64()
            .ok_or_else(|| {
                AnalyticsError::Calculation("growth factor not representable as f64".to_string())
            })?;
        let annualized = growth.powf(DAYS_PER_YEAR / duration_days as f64) - 1.0;

        Decimal::from_f64(annualized * 100.0).ok_or_else(|| {
            AnalyticsError::Calculation(format!(
                "annualized return {annualized} not representable as Decimal"
            ))
        })
    }
}
