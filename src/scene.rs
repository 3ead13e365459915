use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::camera::PerspectiveCamera;
use crate::config::SceneConfig;
use crate::geometry::PlaneGeometry;
use crate::material::{ShaderMaterial, ShaderSources};
use crate::viewport::ViewportDimensions;

/// Position, rotation (XYZ Euler, radians) and scale of a mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    /// `T * R * S`.
    pub fn matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            self.position,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub geometry: PlaneGeometry,
    pub transform: Transform,
}

/// Everything the renderer draws: one camera looking at one shaded plane.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneGraph {
    pub camera: PerspectiveCamera,
    pub mesh: Mesh,
    pub material: ShaderMaterial,
}

impl SceneGraph {
    /// Builds the scene for the viewport at startup. The plane width tracks
    /// half the startup viewport width and is not rebuilt on resize.
    pub fn new(config: &SceneConfig, viewport: ViewportDimensions, sources: ShaderSources) -> Self {
        let camera = PerspectiveCamera::new(&config.camera, viewport.aspect());

        let plane = &config.plane;
        let geometry = PlaneGeometry::new(
            (viewport.width / 2.0) as f32,
            plane.height,
            plane.width_segments,
            plane.height_segments,
        );
        let transform = Transform {
            position: plane.position,
            rotation: plane.rotation,
            scale: Vec3::splat(plane.scale),
        };

        Self {
            camera,
            mesh: Mesh {
                geometry,
                transform,
            },
            material: ShaderMaterial::new(sources, &config.uniforms),
        }
    }

    /// `view * model`, as bound to `modelViewMatrix`.
    pub fn model_view_matrix(&self) -> Mat4 {
        self.camera.view_matrix() * self.mesh.transform.matrix()
    }
}
