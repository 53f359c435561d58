//! Closed-form kinematics under uniform gravity
//!
//! Horizontal axes (x, y) move at constant velocity, the vertical axis (z)
//! carries the constant acceleration `-gravity`. No integration step is
//! involved, so every sample is exact up to floating point.

use super::states::{LaunchState, NVec3};

/// Position of the projectile `t` seconds after launch
/// x = x0 + vx0 t
/// y = y0 + vy0 t
/// z = z0 + vz0 t - g t^2 / 2
pub fn position_at(launch: &LaunchState, gravity: f64, t: f64) -> NVec3 {
    let x = launch.x.x + launch.v.x * t;
    let y = launch.x.y + launch.v.y * t;
    let z = launch.x.z + launch.v.z * t - 0.5 * gravity * t.powi(2);
    NVec3::new(x, y, z)
}

/// Constant acceleration vector, pointing along -z
pub fn gravity_vector(gravity: f64) -> NVec3 {
    NVec3::new(0.0, 0.0, -gravity)
}
