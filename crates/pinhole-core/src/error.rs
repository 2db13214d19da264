//! Error types for pinhole-rs.

use thiserror::Error;

/// The main error type for pinhole-rs operations.
///
/// The plain conversion entry points never return these; they are produced by
/// the validated conversion path and by camera description loading.
#[derive(Error, Debug)]
pub enum PinholeError {
    /// Focal length is zero, negative, or not finite.
    #[error("invalid focal length {0}: must be finite and positive")]
    InvalidFocalLength(f64),

    /// Image has a zero dimension.
    #[error("invalid image size {width}x{height}: both dimensions must be non-zero")]
    InvalidImageSize { width: u32, height: u32 },

    /// Principal point has a non-finite coordinate.
    #[error("invalid principal point ({x}, {y}): coordinates must be finite")]
    InvalidPrincipalPoint { x: f64, y: f64 },

    /// Rotation matrix is not orthonormal within tolerance.
    #[error("rotation is not orthonormal (deviation {deviation:e} exceeds tolerance {tolerance:e})")]
    NonOrthonormalRotation { deviation: f64, tolerance: f64 },

    /// Translation has a non-finite component.
    #[error("invalid translation: components must be finite")]
    InvalidTranslation,

    /// Depth range is inverted, empty, or non-positive.
    #[error("invalid depth range [{near}, {far}]: requires 0 < near < far")]
    InvalidDepthRange { near: f64, far: f64 },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for pinhole-rs operations.
pub type Result<T> = std::result::Result<T, PinholeError>;
