//! Conversion from pinhole camera parameters to a [`RenderCamera`].
//!
//! The real extrinsics go into the model transform, so every piece of scene
//! geometry is moved into camera space and the render camera itself stays at
//! a canonical pose: origin, looking down +Z, with -Y up (image rows grow
//! downward).

use glam::{DMat3, DVec2, DVec3};
use pinhole_core::{
    make_transform, validate, ConversionOptions, DepthRange, Extrinsics, Intrinsics, Result,
};

use crate::camera::RenderCamera;

/// Converts pinhole intrinsics and world-to-camera extrinsics into a render
/// camera.
///
/// * `focal_len` - focal length in pixels
/// * `nx`, `ny` - image dimensions in pixels
/// * `principal_pt` - intersection of the principal ray with the image plane, in pixels
/// * `camera_rot`, `camera_trans` - rotation and translation mapping world points
///   to camera coordinates
/// * `depth_min`, `depth_max` - clipping range
///
/// Square pixels and zero skew are assumed. Inputs are not checked: a zero
/// image dimension or an inverted depth range produces a degenerate camera.
/// Use [`crate::try_make_render_camera`] for a checked conversion.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn make_vtk_camera(
    focal_len: f64,
    nx: u32,
    ny: u32,
    principal_pt: DVec2,
    camera_rot: &DMat3,
    camera_trans: DVec3,
    depth_min: f64,
    depth_max: f64,
) -> RenderCamera {
    let intrinsics = Intrinsics::new(focal_len, nx, ny, principal_pt);
    configure(
        &intrinsics,
        camera_rot,
        camera_trans,
        DepthRange::new(depth_min, depth_max),
        true,
    )
}

/// Typed form of [`make_vtk_camera`].
#[must_use]
pub fn make_render_camera(
    intrinsics: &Intrinsics,
    extrinsics: &Extrinsics,
    depth: DepthRange,
) -> RenderCamera {
    make_render_camera_with(intrinsics, extrinsics, depth, &ConversionOptions::default())
}

/// Same as [`make_render_camera`], with the view angle diagnostic controlled
/// by `options`.
#[must_use]
pub fn make_render_camera_with(
    intrinsics: &Intrinsics,
    extrinsics: &Extrinsics,
    depth: DepthRange,
    options: &ConversionOptions,
) -> RenderCamera {
    configure(
        intrinsics,
        &extrinsics.rotation,
        extrinsics.translation,
        depth,
        options.log_view_angle,
    )
}

/// Checks the inputs, then converts them like [`make_render_camera_with`].
///
/// # Errors
///
/// Returns the first [`pinhole_core::PinholeError`] found by [`pinhole_core::validate`].
pub fn try_make_render_camera(
    intrinsics: &Intrinsics,
    extrinsics: &Extrinsics,
    depth: DepthRange,
    options: &ConversionOptions,
) -> Result<RenderCamera> {
    validate(intrinsics, extrinsics, depth, options)?;
    Ok(make_render_camera_with(intrinsics, extrinsics, depth, options))
}

fn configure(
    intrinsics: &Intrinsics,
    camera_rot: &DMat3,
    camera_trans: DVec3,
    depth: DepthRange,
    log_view_angle: bool,
) -> RenderCamera {
    let mut camera = RenderCamera::new();

    camera.set_model_transform(make_transform(camera_rot, camera_trans));

    // The camera stays at the origin since the scene is transformed instead.
    camera.set_position(DVec3::ZERO);
    camera.set_focal_point(DVec3::Z);
    camera.set_view_up(DVec3::NEG_Y);

    camera.set_clipping_range(depth.near, depth.far);

    let wc = intrinsics.window_center();
    camera.set_window_center(wc.x, wc.y);

    let view_angle = intrinsics.view_angle_degrees();
    if log_view_angle {
        log::info!("view_angle = {view_angle}");
    }
    camera.set_view_angle(view_angle);

    camera
}
