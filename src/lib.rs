//! Parametric equations for a secondary tapered helix wound around a primary tapered helix.
//!
//! The member crates are re-exported here so front-ends (the CLI today) depend on a
//! single library, and the interactive prompt loop lives alongside them.

pub mod session;

pub use nested_helix_config as config;
pub use nested_helix_core as numbers;
pub use nested_helix_formula as formula;
pub use nested_helix_report as report;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
