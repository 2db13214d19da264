//! Render-camera configuration.

use glam::{DMat4, DVec2, DVec3, DVec4, Mat4};
use pinhole_core::{DepthRange, Intrinsics};

/// A camera configuration for a rendering pipeline.
///
/// The fields mirror a VTK-style camera: scene geometry is moved into camera
/// space by `model_transform`, and the camera itself sits at a fixed pose
/// described by `position`, `focal_point`, and `view_up`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCamera {
    /// Transform applied to scene geometry before viewing.
    pub model_transform: DMat4,
    /// Camera position.
    pub position: DVec3,
    /// Point the camera is looking at.
    pub focal_point: DVec3,
    /// Up vector.
    pub view_up: DVec3,
    /// Near and far clipping distances.
    pub clipping_range: DepthRange,
    /// Normalized window-center offset in `[-1, 1]` units.
    pub window_center: DVec2,
    /// Vertical field of view in degrees.
    pub view_angle: f64,
}

impl RenderCamera {
    /// Creates a camera at the origin looking down +Z with -Y up, with an
    /// identity model transform.
    #[must_use]
    pub fn new() -> Self {
        Self {
            model_transform: DMat4::IDENTITY,
            position: DVec3::ZERO,
            focal_point: DVec3::Z,
            view_up: DVec3::NEG_Y,
            clipping_range: DepthRange::default(),
            window_center: DVec2::ZERO,
            view_angle: 30.0,
        }
    }

    /// Sets the model transform.
    pub fn set_model_transform(&mut self, transform: DMat4) {
        self.model_transform = transform;
    }

    /// Sets the camera position.
    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }

    /// Sets the focal point.
    pub fn set_focal_point(&mut self, focal_point: DVec3) {
        self.focal_point = focal_point;
    }

    /// Sets the view-up vector.
    pub fn set_view_up(&mut self, view_up: DVec3) {
        self.view_up = view_up;
    }

    /// Sets the clipping range. No ordering is enforced.
    pub fn set_clipping_range(&mut self, near: f64, far: f64) {
        self.clipping_range = DepthRange::new(near, far);
    }

    /// Sets the window center.
    pub fn set_window_center(&mut self, x: f64, y: f64) {
        self.window_center = DVec2::new(x, y);
    }

    /// Sets the vertical view angle in degrees.
    pub fn set_view_angle(&mut self, degrees: f64) {
        self.view_angle = degrees;
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.focal_point, self.view_up)
    }

    /// Returns the view matrix composed with the model transform.
    #[must_use]
    pub fn model_view_matrix(&self) -> DMat4 {
        self.view_matrix() * self.model_transform
    }

    /// Returns the projection matrix for the given aspect ratio (width / height).
    ///
    /// The frustum is `[(wcx - 1) w, (wcx + 1) w] x [(wcy - 1) h, (wcy + 1) h]`
    /// at the near plane, where `h = near * tan(view_angle / 2)` and
    /// `w = h * aspect`. The resulting diagonal scales are
    /// `scale_y = cot(view_angle / 2)` and `scale_x = scale_y / aspect`.
    /// Depth maps to `[0, 1]`. With a zero window center this is the same
    /// matrix as [`DMat4::perspective_rh`].
    #[must_use]
    pub fn projection_matrix(&self, aspect_ratio: f64) -> DMat4 {
        let DepthRange { near, far } = self.clipping_range;
        let (sin_half, cos_half) = (0.5 * self.view_angle.to_radians()).sin_cos();
        let scale_y = cos_half / sin_half;
        let scale_x = scale_y / aspect_ratio;
        let r = far / (near - far);
        // (r + l) / (r - l) reduces to wcx, likewise for y.
        DMat4::from_cols(
            DVec4::new(scale_x, 0.0, 0.0, 0.0),
            DVec4::new(0.0, scale_y, 0.0, 0.0),
            DVec4::new(self.window_center.x, self.window_center.y, r, -1.0),
            DVec4::new(0.0, 0.0, r * near, 0.0),
        )
    }

    /// Returns the combined model-view-projection matrix.
    #[must_use]
    pub fn model_view_projection_matrix(&self, aspect_ratio: f64) -> DMat4 {
        self.projection_matrix(aspect_ratio) * self.model_view_matrix()
    }

    /// Projects a world point to pixel coordinates in a `width` x `height`
    /// image, with rows increasing downward.
    ///
    /// Returns `None` for points on or behind the camera plane.
    #[must_use]
    pub fn project_to_pixel(&self, point: DVec3, width: u32, height: u32) -> Option<DVec2> {
        let nx = f64::from(width);
        let ny = f64::from(height);
        let clip = self.model_view_projection_matrix(nx / ny) * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(DVec2::new((ndc.x + 1.0) * nx / 2.0, (1.0 - ndc.y) * ny / 2.0))
    }

    /// Recovers pinhole intrinsics for an image of the given size.
    #[must_use]
    pub fn intrinsics(&self, width: u32, height: u32) -> Intrinsics {
        Intrinsics::from_view_angle(self.view_angle, width, height, self.window_center)
    }

    /// Returns GPU-ready uniforms for the given aspect ratio.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn uniforms(&self, aspect_ratio: f64) -> CameraUniforms {
        let model_view = self.model_view_matrix().as_mat4();
        let projection = self.projection_matrix(aspect_ratio).as_mat4();
        CameraUniforms {
            model_view: model_view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            window_center: self.window_center.as_vec2().to_array(),
            clipping_range: [
                self.clipping_range.near as f32,
                self.clipping_range.far as f32,
            ],
        }
    }
}

impl Default for RenderCamera {
    fn default() -> Self {
        Self::new()
    }
}

/// GPU-compatible camera uniforms.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    /// Model-view matrix (column-major).
    pub model_view: [[f32; 4]; 4],
    /// Projection matrix (column-major).
    pub projection: [[f32; 4]; 4],
    /// Window-center offset.
    pub window_center: [f32; 2],
    /// Near and far clipping distances.
    pub clipping_range: [f32; 2],
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self {
            model_view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            window_center: [0.0, 0.0],
            clipping_range: [0.1, 1000.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_defaults() {
        let camera = RenderCamera::default();
        assert_eq!(camera.position, DVec3::ZERO);
        assert_eq!(camera.focal_point, DVec3::Z);
        assert_eq!(camera.view_up, DVec3::NEG_Y);
        assert_eq!(camera.model_transform, DMat4::IDENTITY);
    }

    #[test]
    fn test_view_matrix_flips_y_and_z() {
        let camera = RenderCamera::new();
        let view = camera.view_matrix();
        // Looking down +Z with -Y up: camera-space (x, y, z) becomes (x, -y, -z).
        let p = view.transform_point3(DVec3::new(1.0, 2.0, 3.0));
        assert!((p - DVec3::new(1.0, -2.0, -3.0)).length() < 1e-12);
    }

    #[test]
    fn test_projection_matches_perspective_rh_when_centered() {
        let mut camera = RenderCamera::new();
        camera.set_view_angle(50.0);
        camera.set_clipping_range(0.5, 200.0);
        let ours = camera.projection_matrix(1.5);
        let reference = DMat4::perspective_rh(50.0f64.to_radians(), 1.5, 0.5, 200.0);
        assert!(ours.abs_diff_eq(reference, 1e-12));
    }

    #[test]
    fn test_projection_depth_range() {
        let mut camera = RenderCamera::new();
        camera.set_clipping_range(1.0, 10.0);
        let proj = camera.projection_matrix(1.0);
        let near = proj.project_point3(DVec3::new(0.0, 0.0, -1.0));
        let far = proj.project_point3(DVec3::new(0.0, 0.0, -10.0));
        assert!(near.z.abs() < 1e-12);
        assert!((far.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_window_center_shifts_optical_axis() {
        let mut camera = RenderCamera::new();
        camera.set_window_center(0.25, -0.5);
        let proj = camera.projection_matrix(1.0);
        // A point on the optical axis lands at NDC (-wcx, -wcy).
        let ndc = proj.project_point3(DVec3::new(0.0, 0.0, -5.0));
        assert!((ndc.x + 0.25).abs() < 1e-12);
        assert!((ndc.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_point_behind_camera_does_not_project() {
        let camera = RenderCamera::new();
        assert!(camera
            .project_to_pixel(DVec3::new(0.0, 0.0, -1.0), 640, 480)
            .is_none());
        assert!(camera
            .project_to_pixel(DVec3::new(0.0, 0.0, 1.0), 640, 480)
            .is_some());
    }

    #[test]
    fn test_uniforms_layout() {
        assert_eq!(std::mem::size_of::<CameraUniforms>(), 144);
        let uniforms = RenderCamera::new().uniforms(1.0);
        let bytes: &[u8] = bytemuck::bytes_of(&uniforms);
        assert_eq!(bytes.len(), 144);
        assert_eq!(uniforms.clipping_range, [0.1, 1000.0]);
    }
}
