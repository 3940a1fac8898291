//! Stride CLI
//!
//! Run scripted motion scenarios and headless simulations.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use stride_animation::MotionSnapshot;
use stride_app::{
    run_scenario, AppConfig, HeadlessRunConfig, HeadlessRuntime, MotionApp, Scenario,
    SceneTransforms,
};
use stride_platform::{ControlFlow, Event, EventLoop, InputEvent, LifecycleEvent};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

#[derive(Parser)]
#[command(name = "stride")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Stride motion engine CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./stride.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario file and print its report
    Run {
        /// Scenario JSON file
        scenario: PathBuf,

        /// Logical milliseconds per frame
        #[arg(long, default_value = "16")]
        tick_ms: u64,
    },

    /// Tick both loops for a number of frames and print the resulting state
    Simulate {
        /// Number of frames to run
        #[arg(short, long, default_value = "60")]
        frames: u32,

        /// Logical milliseconds per frame
        #[arg(long, default_value = "16")]
        tick_ms: u64,

        /// Pointer X position sent before the first frame
        #[arg(long)]
        pointer_x: Option<f32>,

        /// Pointer Y position sent before the first frame
        #[arg(long)]
        pointer_y: Option<f32>,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cwd = std::env::current_dir()?;
    let config = config::load(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Run { scenario, tick_ms } => cmd_run(&config, &scenario, tick_ms),

        Commands::Simulate {
            frames,
            tick_ms,
            pointer_x,
            pointer_y,
        } => cmd_simulate(&config, frames, tick_ms, pointer_x, pointer_y),

        Commands::Config => cmd_config(&config),
    }
}

fn cmd_run(config: &AppConfig, path: &Path, tick_ms: u64) -> Result<()> {
    let scenario = Scenario::from_path(path)?;
    info!("Running {} ({} steps)", path.display(), scenario.steps.len());

    let mut app = MotionApp::new(config)?;
    let report = run_scenario(&mut app, &scenario, tick_ms)?;
    report.write_to_writer(&mut std::io::stdout().lock())?;

    if !report.passed() {
        anyhow::bail!(
            "{} of {} assertions failed",
            report.failures().count(),
            report.assertions.len()
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct SimulationOutput {
    frames: u32,
    parallax_running: bool,
    parallax_ticks: u64,
    particle_frames: u64,
    snapshot: MotionSnapshot,
    transforms: SceneTransforms,
}

fn cmd_simulate(
    config: &AppConfig,
    frames: u32,
    tick_ms: u64,
    pointer_x: Option<f32>,
    pointer_y: Option<f32>,
) -> Result<()> {
    let mut app = MotionApp::new(config)?;
    app.handle_event(&Event::Lifecycle(LifecycleEvent::Ready));
    if pointer_x.is_some() || pointer_y.is_some() {
        app.handle_event(&Event::Input(InputEvent::PointerMoved {
            x: pointer_x,
            y: pointer_y,
        }));
    }

    HeadlessRuntime::new(HeadlessRunConfig {
        max_frames: frames,
        tick_ms,
    })
    .run(|event| {
        app.handle_event(&event);
        ControlFlow::Continue
    })?;

    let output = SimulationOutput {
        frames,
        parallax_running: app.parallax().is_running(),
        parallax_ticks: app.parallax().tick_count(),
        particle_frames: app.particle_frames(),
        snapshot: app.snapshot(),
        transforms: app.transforms(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn cmd_config(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
