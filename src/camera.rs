use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Perspective camera looking down -z from `position`.
#[derive(Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(config: &CameraConfig, aspect: f32) -> Self {
        let mut camera = Self {
            fov_deg: config.fov_deg,
            aspect,
            near: config.near,
            far: config.far,
            position: Vec3::new(0.0, 0.0, config.distance),
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Recomputes the projection after `fov_deg`, `aspect`, `near` or `far`
    /// changed. Uses GL clip space (z in [-1, 1]).
    pub fn update_projection_matrix(&mut self) {
        self.projection =
            Mat4::perspective_rh_gl(self.fov_deg.to_radians(), self.aspect, self.near, self.far);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// The camera never rotates, so the view is a plain translation.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn origin_projects_to_center() {
        let cam = PerspectiveCamera::new(&CameraConfig::default(), 16.0 / 9.0);
        let clip = cam.projection_matrix() * cam.view_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn aspect_change_needs_update() {
        let mut cam = PerspectiveCamera::new(&CameraConfig::default(), 1.0);
        let before = cam.projection_matrix();
        cam.aspect = 2.0;
        assert_eq!(cam.projection_matrix(), before);
        cam.update_projection_matrix();
        let p = cam.projection_matrix();
        // x scale halves when the aspect doubles.
        assert!((p.x_axis.x * 2.0 - before.x_axis.x).abs() < 1e-6);
        assert_eq!(p.y_axis.y, before.y_axis.y);
    }
}
