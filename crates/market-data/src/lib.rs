//! # Dripline Market Data
//!
//! The collaborator interfaces the simulation core consumes: a price
//! history provider and a dividend history provider. Fetching from a real
//! market-data vendor (and caching it in a store) lives behind these
//! traits, outside this workspace; the crate ships a JSON-file-backed
//! implementation that the CLI and tests use.
//!
//! ## Public API
//!
//! - `PriceHistoryProvider` / `DividendHistoryProvider`: the contracts.
//! - `JsonFileSource`: a directory of `<ticker>.prices.json` /
//!   `<ticker>.dividends.json` documents.
//! - `DataError`: IO, parse, and validation failures.

use chrono::NaiveDate;
use core_types::{DividendEvent, DividendSeries, PricePoint, PriceSeries};
use std::fs;
use std::path::{Path, PathBuf};

pub mod error;

pub use error::DataError;

/// Supplies the daily price history for a ticker over a date range.
pub trait PriceHistoryProvider {
    fn price_history(
        &self,
        ticker: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PriceSeries, DataError>;
}

/// Supplies the full dividend history for a ticker.
pub trait DividendHistoryProvider {
    fn dividend_history(&self, ticker: &str) -> Result<DividendSeries, DataError>;
}

/// A provider backed by JSON documents on disk.
///
/// Expects `<dir>/<ticker>.prices.json` holding an array of daily bars
/// and `<dir>/<ticker>.dividends.json` holding an array of dividend
/// events. A missing dividend file is treated as "pays no dividends",
/// which is valid input; a missing price file is an error.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    data_dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn prices_path(&self, ticker: &str) -> PathBuf {
        self.data_dir.join(format!("{ticker}.prices.json"))
    }

    fn dividends_path(&self, ticker: &str) -> PathBuf {
        self.data_dir.join(format!("{ticker}.dividends.json"))
    }

    fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, DataError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl PriceHistoryProvider for JsonFileSource {
    fn price_history(
        &self,
        ticker: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PriceSeries, DataError> {
        let path = self.prices_path(ticker);
        let mut points: Vec<PricePoint> = Self::read_json(&path)?;
        points.retain(|p| start_date <= p.date && p.date <= end_date);
        tracing::debug!(%ticker, path = %path.display(), days = points.len(), "price history loaded");
        // An empty window surfaces as EmptyPriceSeries through validation.
        Ok(PriceSeries::new(points)?)
    }
}

impl DividendHistoryProvider for JsonFileSource {
    fn dividend_history(&self, ticker: &str) -> Result<DividendSeries, DataError> {
        let path = self.dividends_path(ticker);
        if !path.exists() {
            tracing::debug!(%ticker, "no dividend file; treating as a non-paying security");
            return Ok(DividendSeries::empty());
        }
        let events: Vec<DividendEvent> = Self::read_json(&path)?;
        tracing::debug!(%ticker, path = %path.display(), events = events.len(), "dividend history loaded");
        Ok(DividendSeries::new(events)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn write_fixtures(dir: &Path) {
        fs::write(
            dir.join("TSLY.prices.json"),
            r#"[
                {"date": "2024-01-02", "open": "100", "high": "101", "low": "99", "close": "100", "volume": "1000000"},
                {"date": "2024-02-02", "open": "100", "high": "102", "low": "98", "close": "101", "volume": "1200000"}
            ]"#,
        )
        .unwrap();
        fs::write(
            dir.join("TSLY.dividends.json"),
            r#"[
                {"ex_date": "2024-01-20", "amount_per_share": "0.85"}
            ]"#,
        )
        .unwrap();
    }

    #[test]
    fn test_loads_and_filters_price_history() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());
        let source = JsonFileSource::new(dir.path());

        let series = source
            .price_history("TSLY", date(2024, 1, 1), date(2024, 1, 31))
            .unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.first_date(), date(2024, 1, 2));
        assert_eq!(series.points()[0].close, dec!(100));
    }

    #[test]
    fn test_empty_window_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());
        let source = JsonFileSource::new(dir.path());

        let result = source.price_history("TSLY", date(2023, 1, 1), date(2023, 12, 31));
        assert!(matches!(result, Err(DataError::Validation(_))));
    }

    #[test]
    fn test_missing_dividend_file_is_a_non_payer() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());
        let source = JsonFileSource::new(dir.path());

        let series = source.dividend_history("NVDA").unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_loads_dividend_history() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());
        let source = JsonFileSource::new(dir.path());

        let series = source.dividend_history("TSLY").unwrap();
        assert_eq!(series.events().len(), 1);
        assert_eq!(series.events()[0].amount_per_share, dec!(0.85));
    }

    #[test]
    fn test_missing_price_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path());

        let result = source.price_history("GHOST", date(2024, 1, 1), date(2024, 12, 31));
        assert!(matches!(result, Err(DataError::Io(_))));
    }
}
