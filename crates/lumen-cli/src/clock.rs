//! Clock face: twelve points rotated about Z.

use std::f64::consts::PI;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lumen_canvas::Canvas;
use lumen_math::{point, Color, Matrix};

use crate::plot::plot;

const HOURS: usize = 12;

#[derive(Debug, Args)]
pub struct ClockArgs {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 500)]
    pub width: usize,
    /// Canvas height in pixels
    #[arg(long, default_value_t = 500)]
    pub height: usize,
    /// Clock radius in pixels
    #[arg(long, default_value_t = 150.0)]
    pub scale: f64,
    /// Offset of the clock center from the canvas origin, on both axes
    #[arg(long, default_value_t = 250.0)]
    pub translate: f64,
    /// Output image (format determined by extension: .ppm, .png)
    #[arg(short, long, default_value = "clock.ppm")]
    pub output: PathBuf,
}

/// Draw the hour marks. Marks falling off the canvas are skipped.
pub fn draw(args: &ClockArgs) -> Result<Canvas> {
    let mut canvas = Canvas::new(args.width, args.height);
    let placement = Matrix::translation(args.translate, args.translate, 0.0)
        .multiply(&Matrix::scaling(args.scale, args.scale, 0.0))?;
    let twelve = point(0.0, 1.0, 0.0);

    for hour in 0..HOURS {
        let rotation = Matrix::rotation_z(hour as f64 * PI / 6.0);
        let mark = placement.multiply(&rotation)?.multiply_tuple(&twelve)?;
        if !plot(&mut canvas, mark.x, mark.y, Color::WHITE) {
            log::warn!("hour {hour} at ({:.1}, {:.1}) is off the canvas", mark.x, mark.y);
        }
    }
    Ok(canvas)
}

pub fn run(args: &ClockArgs) -> Result<()> {
    log::info!("drawing clock, radius {} on {}x{}", args.scale, args.width, args.height);
    let canvas = draw(args)?;
    canvas
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))
}
