pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod shell;

pub use simulation::states::{LaunchState, InitialConditions, Trajectory, TrajectoryPoint, NVec3};
pub use simulation::params::Parameters;
pub use simulation::kinematics::{position_at, gravity_vector};
pub use simulation::sampler::{sample_trajectory, TimeSamples};
pub use simulation::scenario::Scenario;
pub use simulation::errors::SimulationError;

pub use configuration::config::{SimulationConfig, PlotSettings, InitialConditionsConfig};

pub use visualization::plot::{PlotScene, PlotBounds};
pub use visualization::renderer::{TrajectoryRenderer, ViewerProcess, RenderError, VIEW_SUBCOMMAND};
pub use visualization::trajectory_vis3d::run_3d;

pub use shell::commands::ShellCommand;
pub use shell::input::{Input, LineSource, Terminal, BufferedLines};
pub use shell::repl::Shell;
