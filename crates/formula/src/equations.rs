//! Text templates for the X, Y and Z components.

use nested_helix_core::format::number;
use serde::Serialize;

use crate::coefficients::HelixCoefficients;
use crate::request::HelixRequest;

/// Cartesian equations in `t`, ready for an equation-driven curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HelixEquations {
    pub x: String,
    pub y: String,
    pub z: String,
}

/// Substitute the rounded coefficients and base radii into the fixed templates.
pub fn assemble(request: &HelixRequest, coefficients: &HelixCoefficients) -> HelixEquations {
    let r0 = number(request.r0);
    let rs0 = number(request.rs0);
    let r_slope = number(coefficients.r_slope);
    let h_slope = number(coefficients.h_slope);
    let rs_slope = number(coefficients.rs_slope);
    let theta = number(coefficients.theta_coeff);
    let phi = number(coefficients.phi_coeff);

    // Secondary radius rs(t) and the in-plane distance from the primary axis.
    let secondary_radius = format!("( {rs0} + ({rs_slope})*t )");
    let planar = format!("( {r0} + ({r_slope})*t + {secondary_radius}*cos( ({phi}*pi*t) ))");

    HelixEquations {
        x: format!("({planar}*cos( ({theta}*pi*t) ))"),
        y: format!("({planar}*sin( ({theta}*pi*t) ))"),
        z: format!("( ({h_slope})*t + {secondary_radius}*sin( ({phi}*pi*t) ) )"),
    }
}
