//! Core types for pinhole-rs.
//!
//! This crate provides the value types shared by the rest of the workspace:
//! - [`Intrinsics`] and [`DepthRange`] for the projection
//! - [`Extrinsics`] for the world-to-camera pose
//! - [`make_transform`] for packing a pose into a 4x4 homogeneous matrix
//! - [`CameraDescription`] for loading cameras from JSON
//! - [`ConversionOptions`] and input validation for the checked conversion path

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Pixel dimensions and normalized offsets are compared exactly in tests
#![allow(clippy::float_cmp)]

pub mod description;
pub mod error;
pub mod extrinsics;
pub mod intrinsics;
pub mod options;
pub mod transform;
pub mod validation;

pub use description::CameraDescription;
pub use error::{PinholeError, Result};
pub use extrinsics::Extrinsics;
pub use intrinsics::{DepthRange, Intrinsics};
pub use options::ConversionOptions;
pub use transform::{element, make_transform, split_transform};
pub use validation::validate;

// Re-export glam types for convenience
pub use glam::{DMat3, DMat4, DQuat, DVec2, DVec3, DVec4, EulerRot};
