//! Error types for canvas operations.

use thiserror::Error;

/// Errors that can occur while drawing or writing a canvas.
#[derive(Error, Debug)]
pub enum CanvasError {
    /// A pixel write landed outside the canvas.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
        /// Canvas width.
        width: usize,
        /// Canvas height.
        height: usize,
    },

    /// The canvas has no pixels and cannot be encoded as an image.
    #[error("cannot encode an empty canvas")]
    EmptyCanvas,

    /// The output path has no recognised image extension.
    #[error("unsupported output format: {0:?} (expected .ppm or .png)")]
    UnsupportedFormat(String),

    /// Writing the output file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image encoder failed.
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for canvas operations.
pub type Result<T> = std::result::Result<T, CanvasError>;
