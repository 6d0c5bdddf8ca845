//! Error types for ray casting.

use thiserror::Error;

use crate::object::ObjectId;

/// Errors that can occur while casting rays against objects.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RaytraceError {
    /// An underlying matrix or tuple operation failed, e.g. a singular transform.
    #[error(transparent)]
    Math(#[from] lumen_math::MathError),

    /// The handle does not name an object in the scene.
    #[error("unknown object: {0:?}")]
    UnknownObject(ObjectId),
}

/// Result type for ray casting operations.
pub type Result<T> = std::result::Result<T, RaytraceError>;
