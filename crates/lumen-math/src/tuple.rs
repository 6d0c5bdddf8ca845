//! Homogeneous 4-component tuples.
//!
//! A tuple with `w == 1.0` is a point and one with `w == 0.0` is a vector.
//! Arithmetic treats all four components uniformly, so the tag follows from
//! the operands: point - point is a vector, point + vector is a point.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::approx_eq;
use crate::error::{MathError, Result};

/// A homogeneous coordinate `(x, y, z, w)`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Tuple {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
    /// Homogeneous weight: 1 for points, 0 for vectors.
    pub w: f64,
}

/// A point at `(x, y, z)`.
pub fn point(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::new(x, y, z, 1.0)
}

/// A vector (direction) along `(x, y, z)`.
pub fn vector(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::new(x, y, z, 0.0)
}

impl Tuple {
    /// Build a tuple from raw components.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// The point at the origin.
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// True when `w` is 1 within tolerance.
    pub fn is_point(&self) -> bool {
        approx_eq(self.w, 1.0)
    }

    /// True when `w` is 0 within tolerance.
    pub fn is_vector(&self) -> bool {
        approx_eq(self.w, 0.0)
    }

    /// Euclidean norm over all four components.
    ///
    /// Components are divided by the largest one before squaring, so the
    /// result neither overflows nor underflows for representable inputs.
    pub fn magnitude(&self) -> f64 {
        let scale = self.max_abs_component();
        if scale == 0.0 || !scale.is_finite() {
            return scale;
        }
        let unit = *self / scale;
        scale * unit.dot(&unit).sqrt()
    }

    /// Scale to unit magnitude.
    ///
    /// Only the all-zero tuple has no direction; it returns
    /// [`MathError::ZeroLength`] instead of a tuple full of NaN.
    pub fn normalize(&self) -> Result<Self> {
        let scale = self.max_abs_component();
        if scale == 0.0 {
            return Err(MathError::ZeroLength);
        }
        let unit = *self / scale;
        Ok(unit / unit.dot(&unit).sqrt())
    }

    fn max_abs_component(&self) -> f64 {
        self.to_array().iter().fold(0.0_f64, |m, c| m.max(c.abs()))
    }

    /// Dot product over all four components, `w` included.
    pub fn dot(&self, other: &Tuple) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Cross product of the xyz parts; `w` is ignored and the result is a vector.
    pub fn cross(&self, other: &Tuple) -> Self {
        vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Components as an array `[x, y, z, w]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x)
            && approx_eq(self.y, other.y)
            && approx_eq(self.z, other.z)
            && approx_eq(self.w, other.w)
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl From<[f64; 4]> for Tuple {
    fn from(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl Add for Tuple {
    type Output = Tuple;

    fn add(self, rhs: Tuple) -> Tuple {
        Tuple::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Tuple {
    type Output = Tuple;

    fn sub(self, rhs: Tuple) -> Tuple {
        Tuple::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Neg for Tuple {
    type Output = Tuple;

    fn neg(self) -> Tuple {
        Tuple::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f64> for Tuple {
    type Output = Tuple;

    fn mul(self, k: f64) -> Tuple {
        Tuple::new(self.x * k, self.y * k, self.z * k, self.w * k)
    }
}

impl Mul<Tuple> for f64 {
    type Output = Tuple;

    fn mul(self, t: Tuple) -> Tuple {
        t * self
    }
}

impl Div<f64> for Tuple {
    type Output = Tuple;

    fn div(self, k: f64) -> Tuple {
        Tuple::new(self.x / k, self.y / k, self.z / k, self.w / k)
    }
}
