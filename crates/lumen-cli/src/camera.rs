//! Pinhole projection onto a square wall, one ray per pixel.

use anyhow::Result;
use lumen_canvas::Canvas;
use lumen_math::{point, Color};
use lumen_raytrace::{ObjectId, Ray, Scene};
use serde::{Deserialize, Serialize};

/// Eye position and the wall the canvas is mapped onto.
///
/// The wall is a `wall_size` square centered on the z axis at `z = wall_z`,
/// sampled by a `pixels x pixels` canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Camera {
    pub eye: [f64; 3],
    pub wall_z: f64,
    pub wall_size: f64,
    pub pixels: usize,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, -5.0],
            wall_z: 10.0,
            wall_size: 7.0,
            pixels: 100,
        }
    }
}

impl Camera {
    /// World units covered by one pixel.
    pub fn pixel_size(&self) -> f64 {
        self.wall_size / self.pixels as f64
    }

    /// Ray from the eye through the wall point of pixel `(x, y)`.
    pub fn ray_for_pixel(&self, x: usize, y: usize) -> Result<Ray> {
        let half = self.wall_size / 2.0;
        let world_x = -half + self.pixel_size() * x as f64;
        let world_y = half - self.pixel_size() * y as f64;
        let [ex, ey, ez] = self.eye;
        let eye = point(ex, ey, ez);
        let target = point(world_x, world_y, self.wall_z);
        Ok(Ray::new(eye, (target - eye).normalize()?))
    }

    /// Cast every pixel into `scene`. A pixel whose ray hits something is
    /// painted with `shade(hit object)`; `None` leaves it black.
    pub fn render<F>(&self, scene: &Scene, mut shade: F) -> Result<Canvas>
    where
        F: FnMut(ObjectId) -> Option<Color>,
    {
        let mut canvas = Canvas::new(self.pixels, self.pixels);
        let mut hits = 0usize;
        for y in 0..self.pixels {
            for x in 0..self.pixels {
                let ray = self.ray_for_pixel(x, y)?;
                let xs = scene.intersect(&ray)?;
                let Some(hit) = xs.hit() else { continue };
                if let Some(color) = shade(hit.object) {
                    canvas.write_pixel(x, y, color)?;
                    hits += 1;
                }
            }
        }
        log::debug!("{hits} of {} pixels hit", self.pixels * self.pixels);
        Ok(canvas)
    }
}
