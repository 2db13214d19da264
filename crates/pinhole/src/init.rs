//! Logging setup and file-based conversion.

use std::path::Path;

use pinhole_core::{CameraDescription, ConversionOptions};
use pinhole_render::{try_make_render_camera, RenderCamera};

use crate::Result;

/// Initializes the `env_logger` backend for the `log` diagnostics emitted
/// during conversion.
///
/// Safe to call more than once; later calls are ignored. The filter comes from
/// `RUST_LOG` as usual.
pub fn init_logging() {
    let _ = env_logger::try_init();
}

/// Loads a JSON camera description and converts it with default options.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the camera
/// fails validation.
///
/// # Example
///
/// ```no_run
/// use pinhole::*;
///
/// fn main() -> Result<()> {
///     init_logging();
///     let camera = load_camera("camera.json")?;
///     println!("view angle: {}", camera.view_angle);
///     Ok(())
/// }
/// ```
pub fn load_camera(path: impl AsRef<Path>) -> Result<RenderCamera> {
    load_camera_with(path, &ConversionOptions::default())
}

/// Loads a JSON camera description and converts it with the given options.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the camera
/// fails validation.
pub fn load_camera_with(
    path: impl AsRef<Path>,
    options: &ConversionOptions,
) -> Result<RenderCamera> {
    let description = CameraDescription::load(path)?;
    let camera = try_make_render_camera(
        &description.intrinsics,
        &description.extrinsics(),
        description.depth_range,
        options,
    )?;
    log::debug!(
        "converted {}x{} camera (f = {})",
        description.intrinsics.width,
        description.intrinsics.height,
        description.intrinsics.focal_length
    );
    Ok(camera)
}
