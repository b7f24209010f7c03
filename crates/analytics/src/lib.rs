//! # Dripline Analytics
//!
//! Terminal metric derivation for a simulation run: the gain
//! decomposition (pure capital gain vs. reinvestment gain), total and
//! annualized returns, and the assembled `SimulationResult`.
//!
//! ## Architectural Principles
//!
//! - **Stateless calculation:** the `ResultAggregator` takes the terminal
//!   accumulators and the request, and produces the result. Nothing here
//!   mutates simulation state.
//! - **Decimal until the boundary:** all accumulation arrives as exact
//!   decimals; only the annualized power leaves the fixed-point domain,
//!   because it is a display-precision metric by nature.
//!
//! ## Public API
//!
//! - `ResultAggregator`: the terminal calculator.
//! - `SimulationResult`: the immutable outcome handed to callers.
//! - `TerminalSnapshot`: the engine-to-aggregator hand-off.
//! - `AnalyticsError`: the faults this crate can surface.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::ResultAggregator;
pub use error::AnalyticsError;
pub use report::{SimulationResult, TerminalSnapshot};
