//! Closed-form equations for a secondary tapered helix wound around a primary tapered helix.
//!
//! Derivation turns the nine scalar inputs into five linear rates over the
//! parameter interval; assembly substitutes those rates into fixed X/Y/Z
//! templates with `pi` left symbolic for the host CAD tool.

pub mod coefficients;
pub mod equations;
pub mod request;

use log::debug;
use serde::Serialize;

pub use coefficients::{FormulaError, HelixCoefficients, derive};
pub use equations::{HelixEquations, assemble};
pub use request::HelixRequest;

/// Everything produced for a single request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HelixFormulas {
    pub request: HelixRequest,
    pub coefficients: HelixCoefficients,
    pub equations: HelixEquations,
}

/// Derive the coefficients for `request` and assemble the three equations.
pub fn generate(request: &HelixRequest) -> Result<HelixFormulas, FormulaError> {
    let coefficients = derive(request)?;
    debug!("coefficients: {:?}", coefficients);
    let equations = assemble(request, &coefficients);
    Ok(HelixFormulas {
        request: *request,
        coefficients,
        equations,
    })
}
