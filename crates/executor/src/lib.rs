//! # Dripline Executor
//!
//! Order execution against historical daily bars: fee and withholding-tax
//! arithmetic, the volume-participation cap, and share rounding.
//!
//! ## Architectural Principles
//!
//! - **State vs. logic decoupling:** the `TradeExecutor` is a pure
//!   calculator that determines the effect of a buy order without mutating
//!   anything. The simulation engine applies the returned `Transaction`
//!   receipt to its own state.
//! - **No partial charging:** an order that cannot acquire a positive
//!   number of shares produces no fill and no fee.
//!
//! ## Public API
//!
//! - `TradeExecutor`: prices and sizes one buy order.
//! - `FeeTaxPolicy`: the pure fee/tax formulas.
//! - `ExecutorError`: the faults this crate can surface.

// Declare the modules that constitute this crate.
pub mod error;
pub mod fees;
pub mod trade;

// Re-export the key components to provide a clean, public-facing API.
pub use error::ExecutorError;
pub use fees::FeeTaxPolicy;
pub use trade::TradeExecutor;
