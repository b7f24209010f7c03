use crate::error::ConfigError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root configuration structure for the simulator.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationParams,
}

/// The cost and execution parameters of a simulation run.
///
/// The defaults are the reference brokerage profile; a `config.toml` can
/// override any subset of them.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationParams {
    /// Proportional transaction fee charged on every buy order.
    /// 0.0025 corresponds to 0.25%.
    pub fee_rate: Decimal,

    /// The minimum fee per transaction; applies whenever the proportional
    /// fee would fall below it.
    pub min_fee: Decimal,

    /// Withholding tax rate applied to gross dividend cash.
    /// 0.154 corresponds to 15.4%.
    pub dividend_tax_rate: Decimal,

    /// The maximum fraction of a day's traded volume a single simulated
    /// order may consume.
    pub volume_participation_cap: Decimal,

    /// Net dividend cash below this amount is kept as cash rather than
    /// reinvested.
    pub reinvest_threshold: Decimal,

    /// Number of fractional decimal places share quantities are rounded to
    /// (round-half-up).
    pub share_precision: u32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            fee_rate: dec!(0.0025),
            min_fee: dec!(0.50),
            dividend_tax_rate: dec!(0.154),
            volume_participation_cap: dec!(0.10),
            reinvest_threshold: dec!(5.0),
            share_precision: 6,
        }
    }
}

impl SimulationParams {
    /// Checks that the parameters are logical before they reach the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fee_rate < Decimal::ZERO || self.fee_rate >= Decimal::ONE {
            return Err(ConfigError::ValidationError(
                "fee_rate must be in [0, 1)".to_string(),
            ));
        }
        if self.min_fee < Decimal::ZERO {
            return Err(ConfigError::ValidationError(
                "min_fee must not be negative".to_string(),
            ));
        }
        if self.dividend_tax_rate < Decimal::ZERO || self.dividend_tax_rate >= Decimal::ONE {
            return Err(ConfigError::ValidationError(
                "dividend_tax_rate must be in [0, 1)".to_string(),
            ));
        }
        if self.volume_participation_cap <= Decimal::ZERO
            || self.volume_participation_cap > Decimal::ONE
        {
            return Err(ConfigError::ValidationError(
                "volume_participation_cap must be in (0, 1]".to_string(),
            ));
        }
        if self.reinvest_threshold < Decimal::ZERO {
            return Err(ConfigError::ValidationError(
                "reinvest_threshold must not be negative".to_string(),
            ));
        }
        if self.share_precision > 28 {
            return Err(ConfigError::ValidationError(
                "share_precision must not exceed 28 decimal places".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_defaults() {
        let params = SimulationParams::default();
        assert_eq!(params.fee_rate, dec!(0.0025));
        assert_eq!(params.min_fee, dec!(0.50));
        assert_eq!(params.dividend_tax_rate, dec!(0.154));
        assert_eq!(params.volume_participation_cap, dec!(0.10));
        assert_eq!(params.reinvest_threshold, dec!(5.0));
        assert_eq!(params.share_precision, 6);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_rates() {
        let params = SimulationParams {
            fee_rate: dec!(1.5),
            ..SimulationParams::default()
        };
        assert!(params.validate().is_err());

        let params = SimulationParams {
            volume_participation_cap: dec!(0),
            ..SimulationParams::default()
        };
        assert!(params.validate().is_err());
    }
}
