//! Render-camera configuration for pinhole-rs.
//!
//! Converts pinhole intrinsics and world-to-camera extrinsics into a
//! [`RenderCamera`]: a model transform carrying the real pose, a camera fixed
//! at a canonical pose, a clipping range, a window center, and a view angle.
//! The camera also produces the view and off-center projection matrices a
//! rasterizer needs.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
// Short math names (nx, ny, wc) follow the camera-geometry literature
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod camera;
pub mod convert;

pub use camera::{CameraUniforms, RenderCamera};
pub use convert::{
    make_render_camera, make_render_camera_with, make_vtk_camera, try_make_render_camera,
};
