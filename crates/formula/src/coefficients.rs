//! Linear rates of the nested helix over the parameter interval.

use nested_helix_core::constants::{COEFFICIENT_DECIMALS, TURN_FACTOR};
use nested_helix_core::rounding::round_to;
use serde::Serialize;
use thiserror::Error;

use crate::request::HelixRequest;

/// Rates per unit `t`, rounded to three decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HelixCoefficients {
    /// Primary angle: theta(t) = theta_coeff * pi * t.
    pub theta_coeff: f64,
    /// Primary radius: r(t) = r0 + r_slope * t.
    pub r_slope: f64,
    /// Primary height: z(t) = h_slope * t.
    pub h_slope: f64,
    /// Secondary radius: rs(t) = rs0 + rs_slope * t.
    pub rs_slope: f64,
    /// Secondary angle: phi(t) = phi_coeff * pi * t.
    pub phi_coeff: f64,
}

/// Errors raised while deriving coefficients.
#[derive(Debug, Error, PartialEq)]
pub enum FormulaError {
    #[error("parameter range is empty: t1 ({t1}) equals t2 ({t2})")]
    DegenerateInterval { t1: f64, t2: f64 },
}

/// Derive the five coefficients for `request`.
pub fn derive(request: &HelixRequest) -> Result<HelixCoefficients, FormulaError> {
    let span = request.t2 - request.t1;
    if span == 0.0 {
        return Err(FormulaError::DegenerateInterval {
            t1: request.t1,
            t2: request.t2,
        });
    }

    let rate = |delta: f64| round_to(delta / span, COEFFICIENT_DECIMALS);

    Ok(HelixCoefficients {
        theta_coeff: rate(TURN_FACTOR * request.n),
        r_slope: rate(request.r1 - request.r0),
        h_slope: rate(request.h),
        rs_slope: rate(request.rs1 - request.rs0),
        phi_coeff: rate(TURN_FACTOR * request.m),
    })
}
