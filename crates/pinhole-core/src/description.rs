//! Serializable camera descriptions.
//!
//! A description bundles intrinsics, extrinsics, and the depth range in a
//! form that reads naturally as JSON. The rotation is stored as three rows so
//! the file matches the usual written form of a rotation matrix.

use std::path::Path;

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::extrinsics::Extrinsics;
use crate::intrinsics::{DepthRange, Intrinsics};

/// A complete pinhole camera, ready for conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraDescription {
    /// Intrinsic parameters.
    pub intrinsics: Intrinsics,
    /// World-to-camera rotation, row by row.
    pub rotation: [[f64; 3]; 3],
    /// World-to-camera translation.
    pub translation: [f64; 3],
    /// Depth range used for clipping.
    #[serde(default)]
    pub depth_range: DepthRange,
}

impl CameraDescription {
    /// Creates a description from typed parameters.
    #[must_use]
    pub fn new(intrinsics: Intrinsics, extrinsics: &Extrinsics, depth_range: DepthRange) -> Self {
        Self {
            intrinsics,
            rotation: extrinsics.rotation.transpose().to_cols_array_2d(),
            translation: extrinsics.translation.to_array(),
            depth_range,
        }
    }

    /// Returns the extrinsics stored in this description.
    #[must_use]
    pub fn extrinsics(&self) -> Extrinsics {
        // Rows of R are the columns of R^T.
        let rotation = DMat3::from_cols_array_2d(&self.rotation).transpose();
        Extrinsics::new(rotation, DVec3::from_array(self.translation))
    }

    /// Parses a description from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the description to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a description from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let description = Self::from_json_str(&contents)?;
        log::debug!("loaded camera description from {}", path.display());
        Ok(description)
    }

    /// Writes the description to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}
