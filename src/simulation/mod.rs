pub mod states;
pub mod params;
pub mod errors;
pub mod kinematics;
pub mod sampler;
pub mod scenario;
