//! Projectile flight under constant gravity and wind.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use lumen_canvas::Canvas;
use lumen_math::{point, vector, Color, Tuple};

use crate::cli::parse_triple;
use crate::plot::plot;

/// A body in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub position: Tuple,
    pub velocity: Tuple,
}

/// Constant per-tick accelerations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub gravity: Tuple,
    pub wind: Tuple,
}

/// Advance one tick: move by the current velocity, then accelerate.
pub fn tick(env: &Environment, proj: &Projectile) -> Projectile {
    Projectile {
        position: proj.position + proj.velocity,
        velocity: proj.velocity + env.gravity + env.wind,
    }
}

/// Positions from launch until the projectile reaches `y <= 0`.
///
/// The launch position is included; the landing position is not. Fails when
/// the projectile is still airborne after `max_ticks`.
pub fn flight(env: &Environment, launch: Projectile, max_ticks: usize) -> Result<Vec<Tuple>> {
    let mut proj = launch;
    let mut path = Vec::new();
    while proj.position.y > 0.0 {
        if path.len() == max_ticks {
            bail!("projectile still airborne after {max_ticks} ticks");
        }
        path.push(proj.position);
        proj = tick(env, &proj);
    }
    Ok(path)
}

#[derive(Debug, Clone, Args)]
pub struct FlightArgs {
    /// Gravity per tick, as x,y,z
    #[arg(
        long,
        value_parser = parse_triple,
        default_value = "0,-0.1,0",
        allow_hyphen_values = true
    )]
    pub gravity: [f64; 3],
    /// Wind per tick, as x,y,z
    #[arg(
        long,
        value_parser = parse_triple,
        default_value = "-0.01,0,0",
        allow_hyphen_values = true
    )]
    pub wind: [f64; 3],
    /// Give up after this many ticks
    #[arg(long, default_value_t = 100_000)]
    pub max_ticks: usize,
}

impl FlightArgs {
    fn environment(&self) -> Environment {
        let [gx, gy, gz] = self.gravity;
        let [wx, wy, wz] = self.wind;
        Environment {
            gravity: vector(gx, gy, gz),
            wind: vector(wx, wy, wz),
        }
    }
}

#[derive(Debug, Args)]
pub struct ProjectileArgs {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 900)]
    pub width: usize,
    /// Canvas height in pixels
    #[arg(long, default_value_t = 550)]
    pub height: usize,
    /// Launch speed
    #[arg(long, default_value_t = 11.25)]
    pub speed: f64,
    /// Upward component of the launch direction (before normalizing against x = 1)
    #[arg(long, default_value_t = 1.8)]
    pub up: f64,
    #[command(flatten)]
    pub flight: FlightArgs,
    /// Output image (format determined by extension: .ppm, .png)
    #[arg(short, long, default_value = "projectile.ppm")]
    pub output: PathBuf,
}

/// Plot the flight path in red, with canvas y growing downward.
pub fn draw(args: &ProjectileArgs) -> Result<Canvas> {
    let launch = Projectile {
        position: point(0.0, 1.0, 0.0),
        velocity: vector(1.0, args.up, 0.0).normalize()? * args.speed,
    };
    let path = flight(&args.flight.environment(), launch, args.flight.max_ticks)?;

    let mut canvas = Canvas::new(args.width, args.height);
    let height = args.height as f64;
    let plotted = path
        .iter()
        .filter(|p| plot(&mut canvas, p.x, height - p.y, Color::RED))
        .count();
    log::info!("{} ticks, {plotted} on canvas", path.len());
    Ok(canvas)
}

pub fn run(args: &ProjectileArgs) -> Result<()> {
    let canvas = draw(args)?;
    canvas
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))
}

#[derive(Debug, Args)]
pub struct TrajectoryArgs {
    /// Launch speed along the normalized (1, 1, 0) direction
    #[arg(long, default_value_t = 1.0)]
    pub speed: f64,
    #[command(flatten)]
    pub flight: FlightArgs,
}

/// Log every position after launch and return the number of ticks to land.
pub fn trajectory(args: &TrajectoryArgs) -> Result<usize> {
    let env = args.flight.environment();
    let mut proj = Projectile {
        position: point(0.0, 1.0, 0.0),
        velocity: vector(1.0, 1.0, 0.0).normalize()? * args.speed,
    };
    let mut ticks = 0;
    while proj.position.y > 0.0 {
        if ticks == args.flight.max_ticks {
            bail!("projectile still airborne after {ticks} ticks");
        }
        proj = tick(&env, &proj);
        ticks += 1;
        log::info!("tick {ticks}: position {}", proj.position);
    }
    Ok(ticks)
}

pub fn run_trajectory(args: &TrajectoryArgs) -> Result<()> {
    let ticks = trajectory(args)?;
    println!("Projectile hit the ground after {ticks} ticks.");
    Ok(())
}
