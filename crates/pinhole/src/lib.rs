//! pinhole-rs: turn calibrated pinhole cameras into render-camera configurations.
//!
//! Given a focal length, image size, and principal point (all in pixels) plus
//! the rotation and translation that map world points into camera
//! coordinates, this crate builds a [`RenderCamera`] that reproduces the
//! original projection inside a 3D rendering pipeline.
//!
//! # Quick Start
//!
//! ```
//! use pinhole::*;
//!
//! let camera = make_vtk_camera(
//!     500.0,
//!     640,
//!     480,
//!     DVec2::new(320.0, 240.0),
//!     &DMat3::IDENTITY,
//!     DVec3::new(0.0, 0.0, 5.0),
//!     0.1,
//!     100.0,
//! );
//! assert_eq!(camera.view_up, DVec3::NEG_Y);
//! ```
//!
//! # Conventions
//!
//! - Camera coordinates: +Z along the optical axis, +Y down the image.
//! - The real pose lives in [`RenderCamera::model_transform`]; the camera
//!   itself always sits at the origin looking down +Z with -Y up.
//! - Matrices are `glam` types. Element (r, c) of a transform is `m.row(r)[c]`.

mod init;

// Re-export core types
pub use pinhole_core::{
    description::CameraDescription,
    error::{PinholeError, Result},
    extrinsics::Extrinsics,
    intrinsics::{DepthRange, Intrinsics},
    options::ConversionOptions,
    transform::{element, make_transform, split_transform},
    validate, DMat3, DMat4, DQuat, DVec2, DVec3, DVec4, EulerRot,
};

// Re-export render types
pub use pinhole_render::{
    make_render_camera, make_render_camera_with, make_vtk_camera, try_make_render_camera,
    CameraUniforms, RenderCamera,
};

pub use init::{init_logging, load_camera, load_camera_with};
