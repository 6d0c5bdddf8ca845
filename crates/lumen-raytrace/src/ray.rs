//! Ray representation.

use std::fmt;

use lumen_math::{Matrix, Tuple};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A ray `origin + t * direction`.
///
/// The direction is not normalized: after transforming into object space its
/// length carries the transform's scale, and `t` stays comparable between
/// world and object space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Starting point (`w == 1`).
    pub origin: Tuple,
    /// Direction vector (`w == 0`).
    pub direction: Tuple,
}

impl Ray {
    /// Create a ray from an origin point and a direction vector.
    pub fn new(origin: Tuple, direction: Tuple) -> Self {
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `t`.
    #[inline]
    pub fn position(&self, t: f64) -> Tuple {
        self.origin + self.direction * t
    }

    /// Apply `m` to both origin and direction.
    ///
    /// The direction has `w == 0`, so translation does not affect it.
    pub fn transform(&self, m: &Matrix) -> Result<Ray> {
        Ok(Ray {
            origin: m.multiply_tuple(&self.origin)?,
            direction: m.multiply_tuple(&self.direction)?,
        })
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ray {{origin: {}, direction: {}}}", self.origin, self.direction)
    }
}
