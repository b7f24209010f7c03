//! # Dripline Core Types
//!
//! The shared vocabulary of the simulator: price and dividend history,
//! the transaction ledger, and the request that parameterizes a run.
//!
//! ## Architectural Principles
//!
//! - **Layer 0:** this crate depends on no other workspace crate. Every
//!   other component speaks in these types.
//! - **Validated at the boundary:** `PriceSeries` and `DividendSeries` can
//!   only be constructed through checks that enforce the ordering and sign
//!   invariants. Once a series exists, the engine never re-validates it.
//!
//! ## Public API
//!
//! - `PricePoint` / `PriceSeries`: one trading day and the ordered history.
//! - `DividendEvent` / `DividendSeries`: per-share dividend history.
//! - `Transaction` / `TransactionKind`: the immutable ledger record.
//! - `Position`: the aggregate share holding of a run.
//! - `SimulationRequest`: the caller-facing parameters of one run.
//! - `ValidationError`: everything that can be wrong with the inputs.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::TransactionKind;
pub use error::ValidationError;
pub use structs::{
    DividendEvent, DividendSeries, Position, PricePoint, PriceSeries, SimulationRequest,
    Transaction,
};
