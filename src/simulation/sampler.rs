//! Evenly spaced time sampling of a trajectory
//!
//! `TimeSamples` is a restartable (`Clone`) iterator over `n` times in
//! `[0, t_final]`, both ends included. `sample_trajectory` evaluates the
//! closed-form kinematics at each of them.

use tracing::debug;

use super::errors::SimulationError;
use super::kinematics::position_at;
use super::params::Parameters;
use super::states::{InitialConditions, Trajectory, TrajectoryPoint};

/// `n` evenly spaced times from 0 to `t_final` inclusive
///
/// The last sample is exactly `t_final`, and with `t_final == 0` every sample
/// is 0. A single sample yields only t = 0.
#[derive(Debug, Clone)]
pub struct TimeSamples {
    t_final: f64,
    n: usize,
    next: usize,
}

impl TimeSamples {
    pub fn new(t_final: f64, n: usize) -> Self {
        Self { t_final, n, next: 0 }
    }

    fn time_at(&self, i: usize) -> f64 {
        if self.n <= 1 || i == 0 {
            0.0
        } else if i == self.n - 1 {
            self.t_final
        } else {
            // fraction first, so a huge t_final cannot overflow
            self.t_final * (i as f64 / (self.n - 1) as f64)
        }
    }
}

impl Iterator for TimeSamples {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.n {
            return None;
        }
        let t = self.time_at(self.next);
        self.next += 1;
        Some(t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.n - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TimeSamples {}

/// Sample the trajectory described by `initial` at `parameters.sample_count` times
pub fn sample_trajectory(
    initial: &InitialConditions,
    parameters: &Parameters,
) -> Result<Trajectory, SimulationError> {
    validate(initial, parameters)?;

    let launch = &initial.launch;
    let points: Vec<TrajectoryPoint> = TimeSamples::new(initial.t_final, parameters.sample_count)
        .map(|t| TrajectoryPoint {
            t,
            x: position_at(launch, parameters.gravity, t),
        })
        .collect();

    debug!(
        samples = points.len(),
        t_final = initial.t_final,
        gravity = parameters.gravity,
        "sampled trajectory"
    );

    Ok(Trajectory { points })
}

fn validate(initial: &InitialConditions, parameters: &Parameters) -> Result<(), SimulationError> {
    if parameters.sample_count == 0 {
        return Err(SimulationError::NoSamples);
    }

    let launch = &initial.launch;
    let fields = [
        ("x0", launch.x.x),
        ("y0", launch.x.y),
        ("z0", launch.x.z),
        ("vx0", launch.v.x),
        ("vy0", launch.v.y),
        ("vz0", launch.v.z),
        ("t_final", initial.t_final),
        ("gravity", parameters.gravity),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(SimulationError::NonFinite { field, value });
        }
    }

    if initial.t_final < 0.0 {
        return Err(SimulationError::NegativeDuration(initial.t_final));
    }
    Ok(())
}
