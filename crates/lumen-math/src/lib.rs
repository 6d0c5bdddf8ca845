#![warn(missing_docs)]

//! Math types for the lumen ray tracer.
//!
//! Homogeneous tuples (points and vectors), RGB colors, and general
//! `rows x cols` matrices with cofactor-expansion inversion and the standard
//! affine transform constructors.
//!
//! All floating comparisons go through [`approx_eq`], which uses an absolute
//! tolerance of [`EPSILON`]. The one exception is [`Matrix::is_invertible`],
//! which tests the determinant against zero exactly.
//!
//! # Example
//!
//! ```
//! use lumen_math::{point, Matrix};
//!
//! let m = Matrix::translation(5.0, -3.0, 2.0);
//! let p = m.multiply_tuple(&point(-3.0, 4.0, 5.0)).unwrap();
//! assert_eq!(p, point(2.0, 1.0, 7.0));
//! ```

mod color;
pub mod error;
mod matrix;
mod transform;
mod tuple;

pub use color::{scale_channel, Color, MAX_CHANNEL};
pub use error::{MathError, Result};
pub use matrix::Matrix;
pub use tuple::{point, vector, Tuple};

/// Absolute tolerance for floating-point equality.
pub const EPSILON: f64 = 1e-5;

/// True when `|a - b| < EPSILON`.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
