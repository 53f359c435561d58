//! Hand a prepared plot to a display
//!
//! The shell only sees [`TrajectoryRenderer`]. The production implementation,
//! [`ViewerProcess`], re-launches the running executable with the hidden
//! `view` subcommand, streams the scene to it as YAML on stdin and waits for
//! the window to be closed. A windowing event loop can only be created once
//! per process, so every plot gets a fresh viewer process.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::debug;

use super::plot::PlotScene;

/// Subcommand the viewer process is started with
pub const VIEW_SUBCOMMAND: &str = "view";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("could not start the plot viewer: {0}")]
    Spawn(#[source] io::Error),

    #[error("could not send the plot to the viewer: {0}")]
    Handoff(#[source] io::Error),

    #[error("lost track of the plot viewer: {0}")]
    Wait(#[source] io::Error),

    #[error("could not encode the plot: {0}")]
    Encode(#[from] serde_yaml::Error),

    #[error("plot viewer exited with {0}")]
    ViewerExited(ExitStatus),
}

/// Anything that can show a plot scene, blocking until it is dismissed
pub trait TrajectoryRenderer {
    fn render(&mut self, scene: &PlotScene) -> Result<(), RenderError>;
}

impl<T: TrajectoryRenderer + ?Sized> TrajectoryRenderer for &mut T {
    fn render(&mut self, scene: &PlotScene) -> Result<(), RenderError> {
        (**self).render(scene)
    }
}

/// Shows each plot in a child process running the bevy viewer
#[derive(Debug, Clone)]
pub struct ViewerProcess {
    program: PathBuf,
}

impl ViewerProcess {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Viewer backed by the currently running executable
    pub fn current_exe() -> io::Result<Self> {
        Ok(Self::new(std::env::current_exe()?))
    }
}

impl TrajectoryRenderer for ViewerProcess {
    fn render(&mut self, scene: &PlotScene) -> Result<(), RenderError> {
        let payload = serde_yaml::to_string(scene)?;

        debug!(program = %self.program.display(), bytes = payload.len(), "starting plot viewer");
        let mut child = Command::new(&self.program)
            .arg(VIEW_SUBCOMMAND)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(RenderError::Spawn)?;

        // stdin is closed when the handle drops, which ends the viewer's read
        let handoff = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(payload.as_bytes()),
            None => Ok(()),
        };

        // always reap the child, even when the handoff failed
        let status = child.wait().map_err(RenderError::Wait)?;
        if !status.success() {
            return Err(RenderError::ViewerExited(status));
        }
        handoff.map_err(RenderError::Handoff)
    }
}
