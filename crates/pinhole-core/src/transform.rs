//! Homogeneous transform construction.
//!
//! Matrices are `glam::DMat4`, which stores columns. Indexing in this module
//! and its callers follows row-major semantics: element (r, c) is
//! `m.row(r)[c]`, equivalently `m.col(c)[r]`.

use glam::{DMat3, DMat4, DVec3, DVec4};

/// Packs a rotation and translation into a 4x4 homogeneous transform.
///
/// The rotation fills the top-left 3x3 block, the translation fills rows 0-2
/// of the last column, and the bottom row is `[0, 0, 0, 1]`. Every entry is
/// written explicitly, so nothing depends on how the matrix type defaults.
///
/// # Example
///
/// ```
/// use glam::{DMat3, DMat4, DVec3};
/// use pinhole_core::make_transform;
///
/// let m = make_transform(&DMat3::IDENTITY, DVec3::ZERO);
/// assert_eq!(m, DMat4::IDENTITY);
/// ```
#[must_use]
pub fn make_transform(rotation: &DMat3, translation: DVec3) -> DMat4 {
    DMat4::from_cols(
        DVec4::new(rotation.x_axis.x, rotation.x_axis.y, rotation.x_axis.z, 0.0),
        DVec4::new(rotation.y_axis.x, rotation.y_axis.y, rotation.y_axis.z, 0.0),
        DVec4::new(rotation.z_axis.x, rotation.z_axis.y, rotation.z_axis.z, 0.0),
        DVec4::new(translation.x, translation.y, translation.z, 1.0),
    )
}

/// Returns element (row, col) of a homogeneous transform.
///
/// # Panics
///
/// Panics if `row` or `col` is greater than 3.
#[must_use]
pub fn element(m: &DMat4, row: usize, col: usize) -> f64 {
    m.col(col)[row]
}

/// Splits a homogeneous transform back into its rotation block and translation.
#[must_use]
pub fn split_transform(m: &DMat4) -> (DMat3, DVec3) {
    (DMat3::from_mat4(*m), m.w_axis.truncate())
}
