//! # Dripline Configuration
//!
//! Typed access to the simulator's cost and execution parameters.
//!
//! ## Public API
//!
//! - `Config` / `SimulationParams`: the strongly-typed settings structs.
//! - `load_config`: reads `config.toml`, falling back to the reference
//!   defaults for anything the file omits (or when no file exists).
//! - `ConfigError`: load and validation failures.

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{Config, SimulationParams};

/// Loads the simulator configuration from the `config.toml` file.
///
/// The file is optional: every parameter has a reference default, so a
/// missing file (or a partial one) still yields a complete, validated
/// `Config`.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Look for a file named `config.toml` next to the binary's working
        // directory; absence is not an error.
        .add_source(config::File::with_name("config").required(false))
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    config.simulation.validate()?;

    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
