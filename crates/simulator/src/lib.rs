//! # Dripline Simulation Engine
//!
//! The month-stepped loop that reconstructs a position from a daily
//! price/dividend history: one opening purchase, then one step per
//! calendar month in which that month's dividends are taxed, accumulated,
//! and (optionally) reinvested through the trade executor.
//!
//! ## Architectural Principles
//!
//! - **Owned state, threaded explicitly:** `SimulationState` is built
//!   fresh for every `simulate` call and passed by exclusive reference to
//!   each step; two runs over the same inputs produce bit-identical
//!   results.
//! - **Forward-only time:** the loop advances through
//!   `next_month_first_trading_day` and never revisits a completed step.
//!   `None` from the calendar is the termination signal — an explicit
//!   state transition, not a sentinel.
//!
//! ## Public API
//!
//! - `Simulator`: borrows the input series and runs simulations.
//! - `SimulationState`: the per-run accumulators (exposed for tests).
//! - `SimulationError`: every failure a run can surface.

use analytics::{ResultAggregator, SimulationResult};
use calendar::TradingCalendar;
use chrono::NaiveDate;
use configuration::SimulationParams;
use core_types::{DividendEvent, DividendSeries, PriceSeries, SimulationRequest, TransactionKind};
use executor::{FeeTaxPolicy, TradeExecutor};
use rust_decimal::Decimal;

pub mod error;
pub mod state;

pub use error::SimulationError;
pub use state::SimulationState;

/// The simulation engine for one security's history.
///
/// Borrows the validated price and dividend series for its lifetime; each
/// `simulate` call is an independent, idempotent run over those inputs.
pub struct Simulator<'a> {
    prices: &'a PriceSeries,
    dividends: &'a DividendSeries,
    params: SimulationParams,
    executor: TradeExecutor,
    policy: FeeTaxPolicy,
    aggregator: ResultAggregator,
}

impl<'a> Simulator<'a> {
    pub fn new(
        prices: &'a PriceSeries,
        dividends: &'a DividendSeries,
        params: SimulationParams,
    ) -> Self {
        let executor = TradeExecutor::new(params.clone());
        let policy = FeeTaxPolicy::new(params.clone());
        Self {
            prices,
            dividends,
            params,
            executor,
            policy,
            aggregator: ResultAggregator::new(),
        }
    }

    /// Runs one complete simulation and returns the terminal result.
    ///
    /// The run is a pure function of the borrowed series, the parameters,
    /// and the request: no state survives between calls.
    pub fn simulate(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResult, SimulationError> {
        request.validate()?;

        if request.monthly_investment > Decimal::ZERO {
            // Accepted at the interface but not applied during stepping;
            // kept this way deliberately until the intended semantics of
            // recurring contributions are settled.
            tracing::warn!(
                monthly_investment = %request.monthly_investment,
                "monthly_investment is accepted but not applied; only the initial lump sum and dividend reinvestment affect the position"
            );
        }

        let calendar = TradingCalendar::new(self.prices);
        // Only dividend events inside the requested window exist as far as
        // the run is concerned.
        let events = self
            .dividends
            .between(request.start_date, request.end_date);

        let mut state = SimulationState::new();

        // --- 1. Initialize: the opening purchase ---
        let (first_trading_day, _) = calendar.price_on_or_after(request.start_date)?;
        match self.executor.execute(
            self.prices,
            first_trading_day,
            request.initial_investment,
            TransactionKind::InitialBuy,
        )? {
            Some(fill) => {
                state.apply_fill(fill);
                state.record_investment(request.initial_investment);
            }
            None => {
                // A zero-volume first trading day under the participation
                // cap; nothing was deployed.
                tracing::warn!(
                    date = %first_trading_day,
                    "opening purchase could not be filled; the run continues with an empty position"
                );
            }
        }

        tracing::debug!(
            start = %request.start_date,
            first_trading_day = %first_trading_day,
            shares = %state.total_shares(),
            "simulation initialized"
        );

        // --- 2. Step: one iteration per calendar month ---
        let mut current = first_trading_day;
        while current <= request.end_date {
            self.step(current, events, request, &mut state)?;

            match calendar.next_month_first_trading_day(current) {
                Some(next) => current = next,
                // The series ends before the next month opens.
                None => break,
            }
        }

        // --- 3. Terminate: value the position and derive the metrics ---
        let result = self
            .aggregator
            .aggregate(request, state.into_snapshot(), &calendar)?;
        Ok(result)
    }

    /// Processes the calendar month containing `current`: accrue the
    /// month's dividends at the current share count, withhold tax, and
    /// reinvest the net cash when enabled and above the threshold.
    fn step(
        &self,
        current: NaiveDate,
        events: &[DividendEvent],
        request: &SimulationRequest,
        state: &mut SimulationState,
    ) -> Result<(), SimulationError> {
        let window = TradingCalendar::month_window(current);
        let gross = dividends::monthly_dividend(events, &window, state.total_shares());
        if gross <= Decimal::ZERO {
            return Ok(());
        }

        let tax = self.policy.dividend_tax(gross);
        let net = gross - tax;
        // Net dividend cash counts as received income even when it is
        // immediately reinvested below.
        state.record_dividend(net, tax);
        tracing::debug!(step = %current, %gross, %tax, %net, "dividends for the month");

        if request.reinvest_dividends && net > self.params.reinvest_threshold {
            if let Some(fill) =
                self.executor
                    .execute(self.prices, current, net, TransactionKind::Reinvest)?
            {
                state.apply_fill(fill);
            }
        }

        Ok(())
    }
}
