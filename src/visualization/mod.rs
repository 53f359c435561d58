pub mod plot;
pub mod renderer;
pub mod trajectory_vis3d;
