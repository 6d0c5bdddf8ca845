#![warn(missing_docs)]

//! Pixel canvas for the lumen ray tracer.
//!
//! A [`Canvas`] holds linear [`Color`](lumen_math::Color) pixels and writes
//! them out as plain-text PPM (`P3`) or 8-bit PNG.

mod canvas;
pub mod error;
pub mod ppm;

pub use canvas::Canvas;
pub use error::{CanvasError, Result};
