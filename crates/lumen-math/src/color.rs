//! RGB colors with floating-point channels.

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::approx_eq;
use crate::tuple::Tuple;

/// Maximum value of an 8-bit output channel.
pub const MAX_CHANNEL: u8 = 255;

/// A linear RGB color. Channels are nominally in `[0, 1]` but may exceed it
/// while accumulating; clamping happens on output.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Color {
    /// Red channel.
    pub red: f64,
    /// Green channel.
    pub green: f64,
    /// Blue channel.
    pub blue: f64,
}

impl Color {
    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// White.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    /// Pure red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);

    /// Build a color from channel values.
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Componentwise (Hadamard) product, used to blend colors.
    pub fn hadamard(&self, other: &Color) -> Self {
        Self::new(
            self.red * other.red,
            self.green * other.green,
            self.blue * other.blue,
        )
    }

    /// Channels scaled to `0..=255`, rounded and clamped.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            scale_channel(self.red),
            scale_channel(self.green),
            scale_channel(self.blue),
        ]
    }
}

/// Scale a `[0, 1]` channel to `0..=255`, rounding half away from zero.
pub fn scale_channel(c: f64) -> u8 {
    let scaled = (c * f64::from(MAX_CHANNEL)).round();
    if scaled.is_nan() || scaled <= 0.0 {
        0
    } else if scaled >= f64::from(MAX_CHANNEL) {
        MAX_CHANNEL
    } else {
        scaled as u8
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.red, other.red)
            && approx_eq(self.green, other.green)
            && approx_eq(self.blue, other.blue)
    }
}

impl From<[f64; 3]> for Color {
    fn from(c: [f64; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Color> for [f64; 3] {
    fn from(c: Color) -> Self {
        [c.red, c.green, c.blue]
    }
}

// Colors enter the matrix machinery as w = 0 tuples.
impl From<Color> for Tuple {
    fn from(c: Color) -> Self {
        Tuple::new(c.red, c.green, c.blue, 0.0)
    }
}

impl From<Tuple> for Color {
    fn from(t: Tuple) -> Self {
        Self::new(t.x, t.y, t.z)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.red + rhs.red, self.green + rhs.green, self.blue + rhs.blue)
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        Color::new(self.red - rhs.red, self.green - rhs.green, self.blue - rhs.blue)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, k: f64) -> Color {
        Color::new(self.red * k, self.green * k, self.blue * k)
    }
}

impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        self.hadamard(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let c = Color::new(-0.5, 0.4, 1.7);
        assert_eq!(c.red, -0.5);
        assert_eq!(c.green, 0.4);
        assert_eq!(c.blue, 1.7);
    }

    #[test]
    fn test_arithmetic() {
        let a = Color::new(0.9, 0.6, 0.75);
        let b = Color::new(0.7, 0.1, 0.25);
        assert_eq!(a + b, Color::new(1.6, 0.7, 1.0));
        assert_eq!(a - b, Color::new(0.2, 0.5, 0.5));
        assert_eq!(Color::new(0.2, 0.3, 0.4) * 2.0, Color::new(0.4, 0.6, 0.8));
    }

    #[test]
    fn test_hadamard() {
        let a = Color::new(1.0, 0.2, 0.4);
        let b = Color::new(0.9, 1.0, 0.1);
        assert_eq!(a * b, Color::new(0.9, 0.2, 0.04));
    }

    #[test]
    fn test_to_rgb8_clamps_and_rounds() {
        assert_eq!(Color::new(1.5, 0.0, 0.0).to_rgb8(), [255, 0, 0]);
        assert_eq!(Color::new(0.0, 0.5, 0.0).to_rgb8(), [0, 128, 0]);
        assert_eq!(Color::new(-0.5, 0.0, 1.0).to_rgb8(), [0, 0, 255]);
        assert_eq!(Color::new(1.0, 0.8, 0.6).to_rgb8(), [255, 204, 153]);
    }

    #[test]
    fn test_tuple_conversion() {
        let t: Tuple = Color::new(0.1, 0.2, 0.3).into();
        assert_eq!(t, Tuple::new(0.1, 0.2, 0.3, 0.0));
        assert_eq!(Color::from(t), Color::new(0.1, 0.2, 0.3));
    }
}
