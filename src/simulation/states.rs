//! Core state types for the projectile simulation.
//!
//! Defines the launch state, the seven initial-condition scalars
//! and the sampled trajectory:
//! - `LaunchState` / `InitialConditions` using `NVec3`
//! - `TrajectoryPoint` / `Trajectory` produced by the sampler

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchState {
    pub x: NVec3, // initial position (m)
    pub v: NVec3, // initial velocity (m/s)
}

impl LaunchState {
    pub fn new(x0: f64, y0: f64, z0: f64, vx0: f64, vy0: f64, vz0: f64) -> Self {
        Self {
            x: NVec3::new(x0, y0, z0),
            v: NVec3::new(vx0, vy0, vz0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialConditions {
    pub launch: LaunchState, // position and velocity at t = 0
    pub t_final: f64,        // simulated duration (s)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub t: f64,   // simulated time (s)
    pub x: NVec3, // position at `t`
}

/// Ordered positions of one launch, sampled at evenly spaced times
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    pub points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&TrajectoryPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectoryPoint> {
        self.points.iter()
    }

    /// Sample times in order
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.t)
    }

    /// Sampled positions in order
    pub fn positions(&self) -> impl Iterator<Item = NVec3> + '_ {
        self.points.iter().map(|p| p.x)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryPoint;
    type IntoIter = std::slice::Iter<'a, TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
