//! Silhouette and scene renders: one ray per pixel, painted on a hit.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use lumen_canvas::Canvas;
use lumen_math::Color;

use crate::camera::Camera;
use crate::cli::parse_triple;
use crate::scene_file::{SceneFile, SphereSpec, TransformOp};

#[derive(Debug, Args)]
pub struct SilhouetteArgs {
    /// Canvas width and height in pixels
    #[arg(long, default_value_t = 100)]
    pub pixels: usize,
    /// Z of the wall the canvas is projected onto
    #[arg(long, default_value_t = 10.0)]
    pub wall_z: f64,
    /// Side length of the wall
    #[arg(long, default_value_t = 7.0)]
    pub wall_size: f64,
    /// Ray origin, as x,y,z
    #[arg(long, value_parser = parse_triple, default_value = "0,0,-5", allow_hyphen_values = true)]
    pub eye: [f64; 3],
    /// Silhouette color, as r,g,b
    #[arg(long, value_parser = parse_triple, default_value = "1,0,0")]
    pub color: [f64; 3],
    /// Sphere scale, as x,y,z
    #[arg(long, value_parser = parse_triple, default_value = "1,1,1", allow_hyphen_values = true)]
    pub scale: [f64; 3],
    /// Rotation about z in radians, applied after scaling
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub rotate_z: f64,
    /// Output image (format determined by extension: .ppm, .png)
    #[arg(short, long, default_value = "silhouette.ppm")]
    pub output: PathBuf,
}

impl SilhouetteArgs {
    /// The one-sphere scene these arguments describe.
    pub fn scene_file(&self) -> SceneFile {
        let [sx, sy, sz] = self.scale;
        let [r, g, b] = self.color;
        SceneFile {
            camera: Camera {
                eye: self.eye,
                wall_z: self.wall_z,
                wall_size: self.wall_size,
                pixels: self.pixels,
            },
            spheres: vec![SphereSpec {
                color: Color::new(r, g, b),
                transform: vec![
                    TransformOp::Scale { x: sx, y: sy, z: sz },
                    TransformOp::RotateZ { radians: self.rotate_z },
                ],
            }],
        }
    }
}

/// Render each sphere in its own color; pixels with no hit stay black.
pub fn render(file: &SceneFile) -> Result<Canvas> {
    let (scene, colors) = file.build()?;
    file.camera
        .render(&scene, |id| colors.get(id).copied())
}

pub fn run_silhouette(args: &SilhouetteArgs) -> Result<()> {
    log::info!("rendering {0}x{0} silhouette", args.pixels);
    save(&render(&args.scene_file())?, &args.output)
}

pub fn run_render(scene: &Path, output: &Path) -> Result<()> {
    let file = SceneFile::load(scene)?;
    log::info!(
        "rendering {} spheres from {} at {2}x{2}",
        file.spheres.len(),
        scene.display(),
        file.camera.pixels
    );
    save(&render(&file)?, output)
}

fn save(canvas: &Canvas, output: &Path) -> Result<()> {
    canvas
        .save(output)
        .with_context(|| format!("writing {}", output.display()))
}
