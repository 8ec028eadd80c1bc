//! Core constants, rounding, and number formatting shared across the nested helix workspace.

/// Fixed values used by the coefficient derivation.
pub mod constants {
    /// Decimal places kept on every derived coefficient.
    pub const COEFFICIENT_DECIMALS: usize = 3;
    /// Angular factor: one full turn is `2 * pi` radians, and `pi` stays symbolic in output.
    pub const TURN_FACTOR: f64 = 2.0;
}

/// Decimal rounding helpers.
pub mod rounding {
    /// Round `value` to `decimals` places.
    ///
    /// The decision is made on the exact binary value, so inputs such as `1.0005`
    /// (stored just below the tie) round down. Exact ties round half to even.
    /// Non-finite values pass through unchanged.
    pub fn round_to(value: f64, decimals: usize) -> f64 {
        if !value.is_finite() {
            return value;
        }
        // Fixed-precision formatting is exact; reparsing yields the nearest f64.
        format!("{value:.decimals$}").parse().unwrap_or(value)
    }
}

/// Number formatting for formula text.
pub mod format {
    /// Shortest round-trip decimal form of `value`.
    ///
    /// Integral values keep a trailing `.0` (`6.0`). Very large or very small
    /// magnitudes switch to exponent notation with a signed, at least two-digit
    /// exponent (`1e+16`, `1.234e-05`). NaN is written `nan`.
    pub fn number(value: f64) -> String {
        if value.is_nan() {
            return "nan".to_string();
        }
        let text = format!("{value:?}");
        match text.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => text,
        }
    }
}
