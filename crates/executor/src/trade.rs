use crate::error::ExecutorError;
use crate::fees::FeeTaxPolicy;
use configuration::SimulationParams;
use core_types::{PriceSeries, Transaction, TransactionKind};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Executes one buy order against a trading day's close price and volume.
///
/// The executor is a pure calculator in the sense that it never mutates
/// simulation state: it prices the order, applies the fee and the
/// volume-participation cap, and hands back a `Transaction` receipt. The
/// engine is responsible for applying the receipt to its own bookkeeping.
#[derive(Debug, Clone)]
pub struct TradeExecutor {
    params: SimulationParams,
    policy: FeeTaxPolicy,
}

impl TradeExecutor {
    pub fn new(params: SimulationParams) -> Self {
        let policy = FeeTaxPolicy::new(params.clone());
        Self { params, policy }
    }

    /// Executes a buy of `order_cash` on `date`.
    ///
    /// Returns `Ok(None)` when the order cannot acquire a positive number
    /// of shares (fee consumes the cash, or the volume cap bites down to
    /// zero); in that case no fee is charged and nothing is recorded.
    ///
    /// The fee funding rule depends on the transaction kind:
    /// - `InitialBuy`: the fee is financed on top of the order, so the
    ///   full lump sum is investable.
    /// - `Reinvest`: dividend cash is all there is, so the fee comes out
    ///   of the order before shares are bought.
    ///
    /// `MissingPrice` indicates the caller handed us a date the series
    /// does not contain — a precondition violation, since the calendar
    /// only produces dates taken from the series itself.
    pub fn execute(
        &self,
        prices: &PriceSeries,
        date: NaiveDate,
        order_cash: Decimal,
        kind: TransactionKind,
    ) -> Result<Option<Transaction>, ExecutorError> {
        let day = prices
            .get(date)
            .ok_or(ExecutorError::MissingPrice { date })?;
        let price = day.close;

        // 1. Fee and investable cash.
        let fee = self.policy.transaction_fee(order_cash);
        let investable = match kind {
            TransactionKind::InitialBuy => order_cash,
            TransactionKind::Reinvest => order_cash - fee,
        };
        if investable <= Decimal::ZERO {
            tracing::debug!(%date, %order_cash, %fee, "order too small to cover the fee; skipped");
            return Ok(None);
        }

        // 2. Volume-participation cap versus cash-limited size.
        let max_by_volume = day.volume * self.params.volume_participation_cap;
        let max_by_cash = investable / price;
        let shares = max_by_volume.min(max_by_cash).round_dp_with_strategy(
            self.params.share_precision,
            RoundingStrategy::MidpointAwayFromZero,
        );

        if shares <= Decimal::ZERO {
            tracing::debug!(%date, %order_cash, "no shares acquirable; skipped");
            return Ok(None);
        }

        let cash_amount = shares * price;
        tracing::debug!(%date, ?kind, %shares, %price, %cash_amount, %fee, "fill");

        Ok(Some(Transaction {
            date,
            kind,
            shares,
            price,
            cash_amount,
            fee,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::PricePoint;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn one_day(close: Decimal, volume: Decimal) -> PriceSeries {
        PriceSeries::new(vec![PricePoint {
            date: date(2024, 1, 2),
            open: close,
            high: close,
            low: close,
            close,
            volume,
        }])
        .unwrap()
    }

    fn executor() -> TradeExecutor {
        TradeExecutor::new(SimulationParams::default())
    }

    #[test]
    fn test_initial_buy_converts_full_lump_sum() {
        let prices = one_day(dec!(100), dec!(1_000_000));
        let tx = executor()
            .execute(
                &prices,
                date(2024, 1, 2),
                dec!(10000),
                TransactionKind::InitialBuy,
            )
            .unwrap()
            .unwrap();

        // The fee is financed on top: the full $10,000 buys 100 shares.
        assert_eq!(tx.shares, dec!(100));
        assert_eq!(tx.cash_amount, dec!(10000));
        assert_eq!(tx.fee, dec!(25.00));
        assert_eq!(tx.kind, TransactionKind::InitialBuy);
    }

    #[test]
    fn test_reinvest_deducts_fee_from_order() {
        let prices = one_day(dec!(100), dec!(1_000_000));
        let tx = executor()
            .execute(
                &prices,
                date(2024, 1, 2),
                dec!(84.60),
                TransactionKind::Reinvest,
            )
            .unwrap()
            .unwrap();

        // fee = max($0.50, 0.25% * 84.60) = $0.50; 84.10 buys 0.841 shares.
        assert_eq!(tx.fee, dec!(0.50));
        assert_eq!(tx.shares, dec!(0.841));
        assert_eq!(tx.cash_amount, dec!(84.10));
    }

    #[test]
    fn test_volume_cap_limits_order_size() {
        // 10% of 500 traded shares = 50 shares, well below what the cash
        // could buy.
        let prices = one_day(dec!(10), dec!(500));
        let tx = executor()
            .execute(
                &prices,
                date(2024, 1, 2),
                dec!(10000),
                TransactionKind::InitialBuy,
            )
            .unwrap()
            .unwrap();

        assert_eq!(tx.shares, dec!(50));
        assert_eq!(tx.cash_amount, dec!(500));
    }

    #[test]
    fn test_shares_rounded_half_up_to_precision() {
        // 84.10 / 97 = 0.8670103092... rounds to 0.867010 at 6 dp.
        let prices = one_day(dec!(97), dec!(1_000_000));
        let tx = executor()
            .execute(
                &prices,
                date(2024, 1, 2),
                dec!(84.60),
                TransactionKind::Reinvest,
            )
            .unwrap()
            .unwrap();

        assert_eq!(tx.shares, dec!(0.867010));
    }

    #[test]
    fn test_order_smaller_than_fee_is_skipped_without_charge() {
        let prices = one_day(dec!(100), dec!(1_000_000));
        let fill = executor()
            .execute(
                &prices,
                date(2024, 1, 2),
                dec!(0.40),
                TransactionKind::Reinvest,
            )
            .unwrap();

        assert!(fill.is_none());
    }

    #[test]
    fn test_zero_volume_day_is_skipped() {
        let prices = one_day(dec!(100), dec!(0));
        let fill = executor()
            .execute(
                &prices,
                date(2024, 1, 2),
                dec!(10000),
                TransactionKind::InitialBuy,
            )
            .unwrap();

        assert!(fill.is_none());
    }

    #[test]
    fn test_missing_price_is_a_hard_error() {
        let prices = one_day(dec!(100), dec!(1_000_000));
        let result = executor().execute(
            &prices,
            date(2024, 1, 3),
            dec!(10000),
            TransactionKind::InitialBuy,
        );

        assert_eq!(
            result,
            Err(ExecutorError::MissingPrice {
                date: date(2024, 1, 3)
            })
        );
    }
}
