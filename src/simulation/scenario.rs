//! Build a fully-initialized launch scenario from configuration
//!
//! Takes a `SimulationConfig` plus one set of initial conditions and produces
//! the runtime bundle the shell works with:
//! - numerical parameters (`Parameters`)
//! - initial conditions (`InitialConditions`)
//!
//! A scenario is created per compute command and dropped afterwards.

use crate::configuration::config::{InitialConditionsConfig, SimulationConfig};
use crate::simulation::errors::SimulationError;
use crate::simulation::kinematics::position_at;
use crate::simulation::params::Parameters;
use crate::simulation::sampler::sample_trajectory;
use crate::simulation::states::{InitialConditions, LaunchState, NVec3, Trajectory};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub parameters: Parameters,
    pub initial: InitialConditions,
}

impl Scenario {
    pub fn build_scenario(cfg: &SimulationConfig, initial: &InitialConditionsConfig) -> Self {
        // Parameters (runtime) from the top-level config
        let parameters = Parameters {
            gravity: cfg.gravity,
            sample_count: cfg.sample_count,
        };

        // Launch state: map the seven scalars onto nalgebra vectors
        let launch = LaunchState::new(
            initial.x0,
            initial.y0,
            initial.z0,
            initial.vx0,
            initial.vy0,
            initial.vz0,
        );

        Self {
            parameters,
            initial: InitialConditions {
                launch,
                t_final: initial.t_final,
            },
        }
    }

    pub fn trajectory(&self) -> Result<Trajectory, SimulationError> {
        sample_trajectory(&self.initial, &self.parameters)
    }

    /// Position at `t_final`, evaluated directly rather than read off the samples
    pub fn final_position(&self) -> NVec3 {
        position_at(&self.initial.launch, self.parameters.gravity, self.initial.t_final)
    }
}
