//! Pinhole intrinsics and depth range.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Pinhole camera intrinsics.
///
/// Square pixels and zero skew are assumed. All quantities are in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intrinsics {
    /// Focal length in pixels.
    pub focal_length: f64,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Intersection of the principal ray with the image plane, in pixels.
    pub principal_point: DVec2,
}

impl Intrinsics {
    /// Creates new intrinsics.
    #[must_use]
    pub fn new(focal_length: f64, width: u32, height: u32, principal_point: DVec2) -> Self {
        Self {
            focal_length,
            width,
            height,
            principal_point,
        }
    }

    /// Creates intrinsics with the principal point at the image center.
    #[must_use]
    pub fn centered(focal_length: f64, width: u32, height: u32) -> Self {
        let principal_point = DVec2::new(f64::from(width) / 2.0, f64::from(height) / 2.0);
        Self::new(focal_length, width, height, principal_point)
    }

    /// Recovers intrinsics from a vertical view angle (degrees) and a
    /// normalized window center.
    ///
    /// This inverts [`Intrinsics::window_center`] and
    /// [`Intrinsics::view_angle_degrees`].
    #[must_use]
    pub fn from_view_angle(
        view_angle_degrees: f64,
        width: u32,
        height: u32,
        window_center: DVec2,
    ) -> Self {
        let nx = f64::from(width);
        let ny = f64::from(height);
        let focal_length = (ny / 2.0) / (view_angle_degrees.to_radians() / 2.0).tan();
        let principal_point = DVec2::new(
            nx / 2.0 - window_center.x * nx / 2.0,
            ny / 2.0 + window_center.y * ny / 2.0,
        );
        Self::new(focal_length, width, height, principal_point)
    }

    /// Image width over height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Principal point expressed as a normalized window-center offset.
    ///
    /// `wcx = -2 (px - nx/2) / nx`, `wcy = 2 (py - ny/2) / ny`. The x sign flip
    /// accounts for pixel columns and the render camera's window axes running
    /// in opposite directions once the view-up points along -Y.
    #[must_use]
    pub fn window_center(&self) -> DVec2 {
        let nx = f64::from(self.width);
        let ny = f64::from(self.height);
        DVec2::new(
            -2.0 * (self.principal_point.x - nx / 2.0) / nx,
            2.0 * (self.principal_point.y - ny / 2.0) / ny,
        )
    }

    /// Full vertical opening angle in degrees: `2 atan2(ny/2, f)`.
    #[must_use]
    pub fn view_angle_degrees(&self) -> f64 {
        (2.0 * (f64::from(self.height) / 2.0).atan2(self.focal_length)).to_degrees()
    }

    /// Returns true if the principal point lies inside the image rectangle.
    #[must_use]
    pub fn principal_point_in_image(&self) -> bool {
        let pp = self.principal_point;
        (0.0..=f64::from(self.width)).contains(&pp.x)
            && (0.0..=f64::from(self.height)).contains(&pp.y)
    }
}

/// Near/far depth bounds of the rendered volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthRange {
    /// Near clipping distance.
    pub near: f64,
    /// Far clipping distance.
    pub far: f64,
}

impl DepthRange {
    /// Creates a new depth range. No ordering is enforced.
    #[must_use]
    pub fn new(near: f64, far: f64) -> Self {
        Self { near, far }
    }

    /// Returns true if `0 < near < far` and both are finite.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.near.is_finite() && self.far.is_finite() && self.near > 0.0 && self.near < self.far
    }
}

impl Default for DepthRange {
    fn default() -> Self {
        Self {
            near: 0.1,
            far: 1000.0,
        }
    }
}
