use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use crate::clock::ClockArgs;
use crate::projectile::{ProjectileArgs, TrajectoryArgs};
use crate::silhouette::SilhouetteArgs;

/// Log levels accepted by `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser)]
#[command(name = "lumen")]
#[command(
    about = "Small ray tracing demos: clock, projectile, silhouette and scene renders",
    long_about = None
)]
pub struct Cli {
    /// Logging level; RUST_LOG overrides it
    #[arg(long, global = true, default_value = "info")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plot the twelve hour marks of a clock face
    Clock(ClockArgs),
    /// Plot a projectile's flight under gravity and wind
    Projectile(ProjectileArgs),
    /// Print a projectile's position at every tick
    Trajectory(TrajectoryArgs),
    /// Render the silhouette of a single sphere
    Silhouette(SilhouetteArgs),
    /// Render every sphere of a scene file in its own color
    Render {
        /// Scene description (.toml or .json)
        #[arg(long)]
        scene: PathBuf,
        /// Output image (format determined by extension: .ppm, .png)
        #[arg(short, long, default_value = "render.ppm")]
        output: PathBuf,
    },
}

/// Parse `x,y,z` into three floats.
pub fn parse_triple(s: &str) -> Result<[f64; 3], String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    <[f64; 3]>::try_from(parts)
        .map_err(|parts| format!("expected x,y,z but got {} values", parts.len()))
}
