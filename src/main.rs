use projectile3d::{run_3d, PlotScene, Shell, SimulationConfig, Terminal, ViewerProcess};

use anyhow::{bail, Context, Result};
use bevy::app::AppExit;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use std::io::{self, BufReader};

#[derive(Parser, Debug)]
#[command(about = "Interactive 3D projectile-motion calculator")]
struct Args {
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Show one plot scene, read as YAML from stdin, and exit when its window closes
    #[command(hide = true)]
    View,
}

// stderr only, stdout belongs to the interactive session
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_scene_from_stdin() -> Result<PlotScene> {
    let reader = BufReader::new(io::stdin().lock());
    let scene: PlotScene = serde_yaml::from_reader(reader)?;
    Ok(scene)
}

fn interactive() -> Result<()> {
    init_logging();

    let renderer = ViewerProcess::current_exe().context("failed to locate the viewer executable")?;
    let terminal = Terminal::new().context("failed to open the terminal")?;
    let stdout = io::stdout();
    let mut shell = Shell::new(terminal, stdout.lock(), renderer, SimulationConfig::default());
    shell.run()?;

    Ok(())
}

// bevy installs its own log subscriber here
fn view() -> Result<()> {
    let scene = load_scene_from_stdin().context("failed to read plot scene")?;
    match run_3d(scene) {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("viewer exited with code {code}"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    match args.mode {
        Some(Mode::View) => view(),
        None => interactive(),
    }
}
