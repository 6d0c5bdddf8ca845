//! lumen CLI - small ray tracing demos
//!
//! Draws a clock face, plots projectile flights and renders sphere
//! silhouettes or whole scene files to PPM or PNG.

use anyhow::Result;
use clap::Parser;

mod camera;
mod cli;
mod clock;
mod logger;
mod plot;
mod projectile;
mod scene_file;
mod silhouette;

use cli::{Cli, Commands};
use logger::init_logger;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level.into());

    match cli.command {
        Commands::Clock(args) => clock::run(&args)?,
        Commands::Projectile(args) => projectile::run(&args)?,
        Commands::Trajectory(args) => projectile::run_trajectory(&args)?,
        Commands::Silhouette(args) => silhouette::run_silhouette(&args)?,
        Commands::Render { scene, output } => silhouette::run_render(&scene, &output)?,
    }

    Ok(())
}
