use nested_helix_config::HelixConfig;
use serde::Serialize;

/// The nine scalar inputs describing a nested tapered helix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HelixRequest {
    /// Initial radius of the primary helix.
    pub r0: f64,
    /// Final radius of the primary helix.
    pub r1: f64,
    /// Height of the primary helix.
    pub h: f64,
    /// Full turns of the primary helix.
    pub n: f64,
    /// Initial radius of the secondary helix.
    pub rs0: f64,
    /// Final radius of the secondary helix.
    pub rs1: f64,
    /// Full turns of the secondary helix.
    pub m: f64,
    /// Start of the parameter range.
    pub t1: f64,
    /// End of the parameter range.
    pub t2: f64,
}

impl From<&HelixConfig> for HelixRequest {
    fn from(config: &HelixConfig) -> Self {
        HelixRequest {
            r0: config.primary.initial_radius,
            r1: config.primary.final_radius,
            h: config.primary.height,
            n: config.primary.turns,
            rs0: config.secondary.initial_radius,
            rs1: config.secondary.final_radius,
            m: config.secondary.turns,
            t1: config.range.start,
            t2: config.range.end,
        }
    }
}
