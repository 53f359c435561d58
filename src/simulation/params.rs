//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime settings shared by every launch:
//! - gravitational acceleration `gravity` (m/s², acts along -z)
//! - number of evenly spaced samples per trajectory

/// Gravitational acceleration used when none is configured (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.8;

/// Samples per trajectory used when none is configured
pub const DEFAULT_SAMPLE_COUNT: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub gravity: f64,        // gravitational acceleration (m/s²)
    pub sample_count: usize, // points per trajectory
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            gravity: STANDARD_GRAVITY,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}
