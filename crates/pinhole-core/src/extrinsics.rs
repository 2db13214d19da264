//! Camera extrinsics (world-to-camera rotation and translation).

use glam::{DMat3, DMat4, DQuat, DVec3};

use crate::transform::make_transform;

/// World-to-camera pose: `p_camera = rotation * p_world + translation`.
///
/// Camera coordinates follow the computer-vision convention: +Z along the
/// optical axis, +Y pointing down the image, +X to the right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrinsics {
    /// World-to-camera rotation (expected orthonormal).
    pub rotation: DMat3,
    /// World-to-camera translation.
    pub translation: DVec3,
}

impl Extrinsics {
    /// Creates new extrinsics from a rotation matrix and translation.
    #[must_use]
    pub fn new(rotation: DMat3, translation: DVec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Creates extrinsics from a unit quaternion and translation.
    #[must_use]
    pub fn from_quat(rotation: DQuat, translation: DVec3) -> Self {
        Self::new(DMat3::from_quat(rotation), translation)
    }

    /// Creates extrinsics from a rotation and the camera center in world space.
    #[must_use]
    pub fn from_camera_center(rotation: DMat3, center: DVec3) -> Self {
        Self::new(rotation, -(rotation * center))
    }

    /// Camera center in world coordinates: `-R^T t`.
    #[must_use]
    pub fn camera_center(&self) -> DVec3 {
        -(self.rotation.transpose() * self.translation)
    }

    /// Maps a world point into camera coordinates.
    #[must_use]
    pub fn world_to_camera(&self, point: DVec3) -> DVec3 {
        self.rotation * point + self.translation
    }

    /// Returns the 4x4 homogeneous world-to-camera transform.
    #[must_use]
    pub fn to_matrix(&self) -> DMat4 {
        make_transform(&self.rotation, self.translation)
    }

    /// Largest deviation of the rotation from a proper orthonormal matrix.
    ///
    /// Measured as the maximum of `|R^T R - I|` over all entries and
    /// `|det(R) - 1|`. Non-finite rotations report infinity.
    #[must_use]
    pub fn orthonormal_deviation(&self) -> f64 {
        if !self.rotation.is_finite() {
            return f64::INFINITY;
        }
        let gram = self.rotation.transpose() * self.rotation - DMat3::IDENTITY;
        let max_entry = gram
            .to_cols_array()
            .iter()
            .fold(0.0f64, |acc, v| acc.max(v.abs()));
        max_entry.max((self.rotation.determinant() - 1.0).abs())
    }
}

impl Default for Extrinsics {
    fn default() -> Self {
        Self::new(DMat3::IDENTITY, DVec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_center_roundtrip() {
        let r = DMat3::from_rotation_y(0.8);
        let center = DVec3::new(1.0, -2.0, 3.0);
        let e = Extrinsics::from_camera_center(r, center);
        assert!((e.camera_center() - center).length() < 1e-12);
        assert!(e.world_to_camera(center).length() < 1e-12);
    }

    #[test]
    fn test_to_matrix_matches_world_to_camera() {
        let e = Extrinsics::from_quat(
            DQuat::from_euler(glam::EulerRot::ZYX, 0.3, 0.2, -0.1),
            DVec3::new(0.0, 0.5, 4.0),
        );
        let p = DVec3::new(-1.0, 2.0, 0.5);
        assert!((e.to_matrix().transform_point3(p) - e.world_to_camera(p)).length() < 1e-12);
    }

    #[test]
    fn test_orthonormal_deviation() {
        let good = Extrinsics::new(DMat3::from_rotation_x(1.1), DVec3::ZERO);
        assert!(good.orthonormal_deviation() < 1e-12);

        let scaled = Extrinsics::new(DMat3::from_diagonal(DVec3::splat(2.0)), DVec3::ZERO);
        assert!(scaled.orthonormal_deviation() > 1.0);

        // A reflection is orthogonal but not a rotation.
        let mirrored =
            Extrinsics::new(DMat3::from_diagonal(DVec3::new(1.0, 1.0, -1.0)), DVec3::ZERO);
        assert!((mirrored.orthonormal_deviation() - 2.0).abs() < 1e-12);

        let mut broken = good;
        broken.rotation.y_axis.z = f64::NAN;
        assert_eq!(broken.orthonormal_deviation(), f64::INFINITY);
    }
}
