//! Input checks for the validated conversion path.

use crate::error::{PinholeError, Result};
use crate::extrinsics::Extrinsics;
use crate::intrinsics::{DepthRange, Intrinsics};
use crate::options::ConversionOptions;

/// Checks intrinsics: finite positive focal length, non-zero image size, and
/// a finite principal point.
///
/// A principal point outside the image is accepted; it only produces a
/// warning when the options ask for one.
pub fn validate_intrinsics(intrinsics: &Intrinsics, options: &ConversionOptions) -> Result<()> {
    let f = intrinsics.focal_length;
    if !f.is_finite() || f <= 0.0 {
        return Err(PinholeError::InvalidFocalLength(f));
    }
    if intrinsics.width == 0 || intrinsics.height == 0 {
        return Err(PinholeError::InvalidImageSize {
            width: intrinsics.width,
            height: intrinsics.height,
        });
    }
    let pp = intrinsics.principal_point;
    if !pp.is_finite() {
        return Err(PinholeError::InvalidPrincipalPoint { x: pp.x, y: pp.y });
    }
    if options.warn_on_off_image_principal_point && !intrinsics.principal_point_in_image() {
        log::warn!(
            "principal point ({}, {}) lies outside the {}x{} image",
            pp.x,
            pp.y,
            intrinsics.width,
            intrinsics.height
        );
    }
    Ok(())
}

/// Checks that the rotation is orthonormal within tolerance and the
/// translation is finite.
pub fn validate_extrinsics(extrinsics: &Extrinsics, options: &ConversionOptions) -> Result<()> {
    let deviation = extrinsics.orthonormal_deviation();
    if deviation > options.orthonormal_tolerance {
        return Err(PinholeError::NonOrthonormalRotation {
            deviation,
            tolerance: options.orthonormal_tolerance,
        });
    }
    if !extrinsics.translation.is_finite() {
        return Err(PinholeError::InvalidTranslation);
    }
    Ok(())
}

/// Checks `0 < near < far`.
pub fn validate_depth_range(depth: DepthRange) -> Result<()> {
    if depth.is_valid() {
        Ok(())
    } else {
        Err(PinholeError::InvalidDepthRange {
            near: depth.near,
            far: depth.far,
        })
    }
}

/// Runs every check in order: intrinsics, extrinsics, depth range.
pub fn validate(
    intrinsics: &Intrinsics,
    extrinsics: &Extrinsics,
    depth: DepthRange,
    options: &ConversionOptions,
) -> Result<()> {
    validate_intrinsics(intrinsics, options)?;
    validate_extrinsics(extrinsics, options)?;
    validate_depth_range(depth)
}
