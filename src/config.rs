//! Constants that shape the effect, gathered into one value so bootstrap and
//! tests build the scene from the same numbers.

use glam::{Vec2, Vec3};

/// Perspective camera parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    /// Distance from the origin along +z.
    pub distance: f32,
}

/// Plane mesh parameters. The plane width is derived from the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneConfig {
    pub height: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub position: Vec3,
    pub scale: f32,
    /// Euler angles (radians), applied in XYZ order.
    pub rotation: Vec3,
}

/// Initial uniform values. Colors are on a 0-255 scale; the fragment shader
/// divides by 255.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformDefaults {
    pub bg: Vec3,
    pub bg_main: Vec3,
    pub color1: Vec3,
    pub color2: Vec3,
    pub time: f32,
    pub randomise_position: Vec2,
}

/// Per-frame stepping of the animation state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    pub time_step: f64,
    pub phase_step: f64,
    /// `t % sweep_period == 0.0` gates the sweep update.
    pub sweep_period: f64,
    /// The sweep coordinate bounces between 0 and this value.
    pub sweep_max: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub plane: PlaneConfig,
    pub uniforms: UniformDefaults,
    pub animation: AnimationConfig,
    /// Upper bound on the device pixel ratio used for the drawing buffer.
    pub max_pixel_ratio: f64,
}

const GRAY: Vec3 = Vec3::new(100.0, 100.0, 100.0);

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            distance: 5.0,
        }
    }
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            height: 400.0,
            width_segments: 100,
            height_segments: 100,
            position: Vec3::new(-20.0, 0.0, -280.0),
            scale: 2.0,
            // The page authored (-1.0, 0.0, 0.1) on properties the renderer
            // never read, so the plane it shows is untilted.
            rotation: Vec3::ZERO,
        }
    }
}

impl Default for UniformDefaults {
    fn default() -> Self {
        Self {
            bg: GRAY,
            bg_main: GRAY,
            color1: GRAY,
            color2: GRAY,
            time: 30.0,
            randomise_position: Vec2::new(1.0, 2.0),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            time_step: 0.05,
            phase_step: 0.01,
            sweep_period: 0.1,
            sweep_max: 32,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            plane: PlaneConfig::default(),
            uniforms: UniformDefaults::default(),
            animation: AnimationConfig::default(),
            max_pixel_ratio: 2.0,
        }
    }
}
