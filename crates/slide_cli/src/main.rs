//! Slide CLI
//!
//! Replay gesture scripts against the snapping panel, validate panel
//! configurations and inspect resolved snap heights.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod script;

use config::SlideConfig;
use script::{GestureScript, Simulation};

#[derive(Parser)]
#[command(name = "slide")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Snapping bottom-panel gesture simulator", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to ./slide.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a gesture script
    Run {
        /// Script file
        script: PathBuf,
    },

    /// Validate a configuration
    Check,

    /// Show resolved snap heights
    Info {
        /// Override the container height in points
        #[arg(long)]
        container_height: Option<f32>,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Run { script } => cmd_run(config, &script),
        Commands::Check => cmd_check(config),
        Commands::Info { container_height } => cmd_info(config, container_height),
        Commands::Config => cmd_config(config),
    }
}

fn cmd_run(config_path: Option<&Path>, script_path: &Path) -> Result<()> {
    let config = SlideConfig::load(config_path)?;
    let script = GestureScript::load(script_path)?;

    info!(
        "Replaying {} steps from {}",
        script.steps.len(),
        script_path.display()
    );

    let mut sim = Simulation::new(&config)?;
    let outcome = sim.run(&script)?;

    println!();
    println!("Result");
    println!("======");
    println!("  Snap position:  {}", outcome.snap);
    println!("  Height:         {:.1}pt", outcome.height);
    println!(
        "  Presented:      {:.1}pt",
        sim.panel().presenter().presented_height()
    );
    println!("  Phase:          {:?}", outcome.phase);
    println!("  Elapsed:        {:.0}ms", outcome.elapsed_ms);
    println!(
        "  Scroll events:  {} consumed, {} passed through",
        outcome.consumed, outcome.passed_through
    );

    Ok(())
}

fn cmd_check(config_path: Option<&Path>) -> Result<()> {
    let config = SlideConfig::load(config_path)?;
    info!(
        "Configuration OK: {} snap positions, initial '{}'",
        config.panel.snap_points.len(),
        config.panel.initial_snap
    );
    Ok(())
}

fn cmd_info(config_path: Option<&Path>, container_height: Option<f32>) -> Result<()> {
    let config = SlideConfig::load(config_path)?;
    let (catalog, initial) = config.panel.validate()?;
    let container = container_height.unwrap_or(config.screen.container_height);
    let heights = catalog.resolve(container);

    println!("Slide panel");
    println!("===========");
    println!();
    println!("Container height: {:.0}pt", container);
    println!();
    println!("Snap positions:");
    for (position, height) in heights.iter() {
        let marker = if position == initial { " (initial)" } else { "" };
        println!(
            "  - {:<8} {:>5.1}%  {:>7.1}pt{}",
            catalog.name(position),
            catalog.fraction(position) * 100.0,
            height,
            marker
        );
    }
    println!();
    println!("Settle:");
    println!(
        "  - Fling threshold:  {:.0}pt/s",
        config.panel.velocity_threshold
    );
    println!(
        "  - Durations:        {:.2}s default, {:.2}s max",
        config.panel.default_duration, config.panel.max_duration
    );
    match config.panel.stretch {
        Some(stretch) => println!(
            "  - Stretch:          {:.0}% overshoot, {:.2} resistance",
            stretch.max_overshoot * 100.0,
            stretch.resistance
        ),
        None => println!("  - Stretch:          disabled"),
    }

    Ok(())
}

fn cmd_config(config_path: Option<&Path>) -> Result<()> {
    let config = SlideConfig::load(config_path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
