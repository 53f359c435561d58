//! Display-independent description of one trajectory plot
//!
//! `PlotScene` collects everything the 3D viewer draws: the sampled
//! polyline, start/end markers, the scaled initial-velocity and gravity
//! vectors anchored at the start point, and a cube that encloses all of it
//! so the three axes share one scale. Building it touches no window, so the
//! geometry is testable on its own.

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::configuration::config::PlotSettings;
use crate::simulation::kinematics::gravity_vector;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec3, Trajectory};

pub const PLOT_TITLE: &str = "3D projectile trajectory with vectors";

/// Extra room around the drawn elements, as a fraction of the half extent
const BOUNDS_MARGIN: f64 = 0.1;

/// Smallest half extent, keeps a single-point plot from collapsing
const MIN_HALF_EXTENT: f64 = 1.0;

/// Axis-aligned cube shared by all three axes (equal aspect ratio)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotBounds {
    pub center: NVec3,
    pub half_extent: f64,
}

impl PlotBounds {
    /// Smallest margin-padded cube containing every point
    pub fn enclosing<I>(points: I) -> Self
    where
        I: IntoIterator<Item = NVec3>,
    {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self {
                center: NVec3::zeros(),
                half_extent: MIN_HALF_EXTENT,
            };
        };

        let (lo, hi) = iter.fold((first, first), |(lo, hi), p| (lo.inf(&p), hi.sup(&p)));
        let center = 0.5 * (lo + hi);
        let half_extent = (0.5 * (hi - lo)).max() * (1.0 + BOUNDS_MARGIN);

        Self {
            center,
            half_extent: half_extent.max(MIN_HALF_EXTENT),
        }
    }

    pub fn min(&self) -> NVec3 {
        self.center - NVec3::repeat(self.half_extent)
    }

    pub fn max(&self) -> NVec3 {
        self.center + NVec3::repeat(self.half_extent)
    }

    pub fn contains(&self, p: &NVec3) -> bool {
        let (lo, hi) = (self.min(), self.max());
        (0..3).all(|i| p[i] >= lo[i] && p[i] <= hi[i])
    }
}

/// Bevy resource holding a fully prepared trajectory plot
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotScene {
    pub title: String,
    pub t_final: f64,        // simulated duration (s)
    pub path: Vec<NVec3>,    // sampled positions, in time order
    pub start: NVec3,        // position at t = 0
    pub end: NVec3,          // position at t_final
    pub velocity_tip: NVec3, // start + v0 * velocity_scale
    pub gravity_tip: NVec3,  // start + (0, 0, -g) * gravity_scale
    pub bounds: PlotBounds,
}

impl PlotScene {
    pub fn build(scenario: &Scenario, trajectory: &Trajectory, settings: &PlotSettings) -> Self {
        let launch = &scenario.initial.launch;
        let start = launch.x;
        let end = scenario.final_position();
        let velocity_tip = start + launch.v * settings.velocity_scale;
        let gravity_tip = start + gravity_vector(scenario.parameters.gravity) * settings.gravity_scale;

        let path: Vec<NVec3> = trajectory.positions().collect();
        let bounds = PlotBounds::enclosing(
            path.iter()
                .copied()
                .chain([start, end, velocity_tip, gravity_tip]),
        );

        debug!(
            points = path.len(),
            half_extent = bounds.half_extent,
            "built plot scene"
        );

        Self {
            title: PLOT_TITLE.to_string(),
            t_final: scenario.initial.t_final,
            path,
            start,
            end,
            velocity_tip,
            gravity_tip,
            bounds,
        }
    }
}
