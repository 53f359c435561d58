//! Interactive command loop
//!
//! `Shell` owns its input, output and renderer; nothing about the session
//! lives outside of it. The loop blocks on each line, on each prompt and on
//! the renderer until the plot is dismissed.

use std::io::{self, Write};
use std::ops::ControlFlow;

use tracing::{debug, info};

use super::commands::ShellCommand;
use super::input::{Input, LineSource};
use super::prompts::{prompt_checked, prompt_with_default};
use crate::configuration::config::{InitialConditionsConfig, SimulationConfig};
use crate::simulation::scenario::Scenario;
use crate::visualization::plot::PlotScene;
use crate::visualization::renderer::TrajectoryRenderer;

const RULE_WIDTH: usize = 60;

pub struct Shell<S, W, V> {
    input: S,
    output: W,
    renderer: V,
    config: SimulationConfig,
}

impl<S: LineSource, W: Write, V: TrajectoryRenderer> Shell<S, W, V> {
    pub fn new(input: S, output: W, renderer: V, config: SimulationConfig) -> Self {
        Self {
            input,
            output,
            renderer,
            config,
        }
    }

    /// Read and execute commands until `quit` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        info!("session started");
        self.print_banner()?;

        loop {
            let command = match self.input.read_line("> ", &mut self.output)? {
                Input::Line(line) => {
                    if !line.trim().is_empty() {
                        self.input.add_history(&line);
                    }
                    ShellCommand::parse(&line)
                }
                // Ctrl+C abandons the current line only
                Input::Interrupted => continue,
                Input::Eof => {
                    writeln!(self.output)?;
                    ShellCommand::Quit
                }
            };

            if self.execute(command)?.is_break() {
                break;
            }
        }

        info!("session ended");
        Ok(())
    }

    /// Run one command, `Break` means the session is over
    pub fn execute(&mut self, command: ShellCommand) -> io::Result<ControlFlow<()>> {
        match command {
            ShellCommand::Help => self.print_help()?,
            ShellCommand::Compute => self.compute()?,
            ShellCommand::Quit => {
                writeln!(self.output, "\nGoodbye!")?;
                return Ok(ControlFlow::Break(()));
            }
            ShellCommand::Empty => {}
            ShellCommand::Unknown(text) => writeln!(
                self.output,
                "Command '{text}' not recognized. Type 'help' to see the available commands."
            )?,
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Collect parameters, report the final position and show the plot
    pub fn compute(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Trajectory calculation ---")?;
        writeln!(
            self.output,
            "Enter the parameters (press Enter to use the default values)"
        )?;

        let initial = self.collect_initial_conditions()?;

        writeln!(self.output, "\nComputing trajectory with:")?;
        writeln!(
            self.output,
            "  Initial position: ({}, {}, {}) m",
            initial.x0, initial.y0, initial.z0
        )?;
        writeln!(
            self.output,
            "  Initial velocity: ({}, {}, {}) m/s",
            initial.vx0, initial.vy0, initial.vz0
        )?;
        writeln!(self.output, "  Final time: {} s", initial.t_final)?;

        let scenario = Scenario::build_scenario(&self.config, &initial);
        let trajectory = match scenario.trajectory() {
            Ok(trajectory) => trajectory,
            Err(e) => {
                debug!(error = %e, "trajectory rejected");
                writeln!(self.output, "Could not compute the trajectory: {e}")?;
                return Ok(());
            }
        };

        let end = scenario.final_position();
        writeln!(
            self.output,
            "\nFinal position at t={}s: ({:.2}, {:.2}, {:.2}) m",
            initial.t_final, end.x, end.y, end.z
        )?;
        writeln!(self.output, "Showing plot...\n")?;
        self.output.flush()?;

        let scene = PlotScene::build(&scenario, &trajectory, &self.config.plot);
        if let Err(e) = self.renderer.render(&scene) {
            debug!(error = %e, "plot could not be shown");
            writeln!(self.output, "Warning: {e}")?;
        }
        Ok(())
    }

    fn collect_initial_conditions(&mut self) -> io::Result<InitialConditionsConfig> {
        let d = self.config.defaults;
        Ok(InitialConditionsConfig {
            x0: self.ask("Initial position X (m)", d.x0)?,
            y0: self.ask("Initial position Y (m)", d.y0)?,
            z0: self.ask("Initial position Z (m)", d.z0)?,
            vx0: self.ask("Initial velocity in X (m/s)", d.vx0)?,
            vy0: self.ask("Initial velocity in Y (m/s)", d.vy0)?,
            vz0: self.ask("Initial velocity in Z (m/s)", d.vz0)?,
            // negative durations are treated like any other invalid entry
            t_final: prompt_checked(
                &mut self.input,
                &mut self.output,
                "Final time (s)",
                d.t_final,
                |t| t >= 0.0,
            )?,
        })
    }

    fn ask(&mut self, label: &str, default: f64) -> io::Result<f64> {
        prompt_with_default(&mut self.input, &mut self.output, label, default)
    }

    fn print_banner(&mut self) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "3D Projectile Motion Simulator")?;
        writeln!(self.output, "{rule}")?;
        writeln!(
            self.output,
            "Type 'help' to see the help or 'quit' to exit"
        )?;
        writeln!(self.output, "{rule}\n")
    }

    fn print_help(&mut self) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        let d = self.config.defaults;
        let out = &mut self.output;

        writeln!(out, "\n{rule}")?;
        writeln!(out, "HELP - 3D Projectile Motion Simulator")?;
        writeln!(out, "{rule}")?;
        writeln!(out, "\nAVAILABLE COMMANDS:")?;
        writeln!(out, "  calcular  - Compute and plot a trajectory (also: calc, c)")?;
        writeln!(out, "  help      - Show this help (also: h, ayuda)")?;
        writeln!(out, "  salir     - Exit the program (also: exit, quit, q)")?;
        writeln!(out, "\nPROJECTILE PARAMETERS:")?;
        writeln!(out, "  x0, y0, z0    - Initial position (m)")?;
        writeln!(out, "  vx0, vy0, vz0 - Initial velocity along each axis (m/s)")?;
        writeln!(out, "  t_final       - Final simulation time (s)")?;
        writeln!(out, "\nEXAMPLE:")?;
        writeln!(out, "  Initial position: x0={}, y0={}, z0={}", d.x0, d.y0, d.z0)?;
        writeln!(out, "  Initial velocity: vx0={}, vy0={}, vz0={}", d.vx0, d.vy0, d.vz0)?;
        writeln!(out, "  Final time: t_final={}", d.t_final)?;
        writeln!(out, "\nNOTES:")?;
        writeln!(out, "  - Gravity is fixed at {} m/s²", self.config.gravity)?;
        writeln!(
            out,
            "  - The program computes the trajectory and shows a 3D plot"
        )?;
        writeln!(out, "{rule}\n")
    }
}
