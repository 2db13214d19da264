//! Configuration options for camera conversion.

use serde::{Deserialize, Serialize};

/// Options controlling the validated conversion path and its diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Maximum allowed deviation of the rotation from orthonormal.
    pub orthonormal_tolerance: f64,

    /// Whether to emit the computed view angle at `info` level.
    pub log_view_angle: bool,

    /// Whether to warn when the principal point lies outside the image.
    pub warn_on_off_image_principal_point: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            orthonormal_tolerance: 1e-6,
            log_view_angle: true,
            warn_on_off_image_principal_point: true,
        }
    }
}

impl ConversionOptions {
    /// Creates conversion options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the orthonormality tolerance.
    #[must_use]
    pub fn with_orthonormal_tolerance(mut self, tolerance: f64) -> Self {
        self.orthonormal_tolerance = tolerance;
        self
    }

    /// Enables or disables the view angle diagnostic.
    #[must_use]
    pub fn with_log_view_angle(mut self, enabled: bool) -> Self {
        self.log_view_angle = enabled;
        self
    }

    /// Enables or disables the off-image principal point warning.
    #[must_use]
    pub fn with_warn_on_off_image_principal_point(mut self, enabled: bool) -> Self {
        self.warn_on_off_image_principal_point = enabled;
        self
    }
}
