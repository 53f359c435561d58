//! Configuration types for the projectile calculator.
//!
//! A thin, `serde`-friendly description of the fixed settings the shell runs
//! with. It consists of:
//!
//! - [`PlotSettings`]            – display scale factors for the drawn vectors
//! - [`InitialConditionsConfig`] – the defaults offered at every prompt
//! - [`SimulationConfig`]        – top-level wrapper, including gravity and sample count
//!
//! # YAML format
//! The defaults, written as YAML:
//!
//! ```yaml
//! gravity: 9.8            # m/s², acts along -z
//! sample_count: 200       # points per trajectory
//! plot:
//!   velocity_scale: 0.1   # drawn velocity arrow = v0 * scale
//!   gravity_scale: 0.5    # drawn gravity arrow = g * scale
//! defaults:
//!   x0: 0.0
//!   y0: 0.0
//!   z0: 0.0
//!   vx0: 5.0
//!   vy0: 3.0
//!   vz0: 10.0
//!   t_final: 2.5
//! ```
//!
//! `Scenario::build_scenario` maps this into the runtime `Parameters` and
//! `InitialConditions` types.

use serde::{Deserialize, Serialize};

use crate::simulation::params::{DEFAULT_SAMPLE_COUNT, STANDARD_GRAVITY};

/// Scale factors applied to the vectors drawn from the start point
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PlotSettings {
    pub velocity_scale: f64, // drawn length per m/s of initial velocity
    pub gravity_scale: f64,  // drawn length per m/s² of gravity
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            velocity_scale: 0.1,
            gravity_scale: 0.5,
        }
    }
}

/// Default initial conditions offered by the parameter prompts
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct InitialConditionsConfig {
    pub x0: f64,      // initial position x (m)
    pub y0: f64,      // initial position y (m)
    pub z0: f64,      // initial position z (m)
    pub vx0: f64,     // initial velocity x (m/s)
    pub vy0: f64,     // initial velocity y (m/s)
    pub vz0: f64,     // initial velocity z (m/s)
    pub t_final: f64, // simulated duration (s)
}

impl Default for InitialConditionsConfig {
    fn default() -> Self {
        Self {
            x0: 0.0,
            y0: 0.0,
            z0: 0.0,
            vx0: 5.0,
            vy0: 3.0,
            vz0: 10.0,
            t_final: 2.5,
        }
    }
}

/// Top-level configuration
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub gravity: f64,                      // gravitational acceleration (m/s²), not user-editable
    pub sample_count: usize,               // points per trajectory
    pub plot: PlotSettings,                // vector display scales
    pub defaults: InitialConditionsConfig, // prompt defaults
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: STANDARD_GRAVITY,
            sample_count: DEFAULT_SAMPLE_COUNT,
            plot: PlotSettings::default(),
            defaults: InitialConditionsConfig::default(),
        }
    }
}
