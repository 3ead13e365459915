use gradient_wasm::config::AnimationConfig;
use gradient_wasm::viewport::{self, RenderSurface};
use gradient_wasm::{AnimationState, SceneConfig, SceneGraph, ShaderSources, ViewportDimensions};

/// Records what a browser canvas would be told.
struct FakeSurface {
    ratio: f64,
    buffer: (u32, u32),
}

impl RenderSurface for FakeSurface {
    fn pixel_ratio(&self) -> f64 {
        self.ratio
    }

    fn set_drawing_buffer_size(&mut self, width: u32, height: u32) {
        self.buffer = (width, height);
    }
}

fn scene() -> SceneGraph {
    SceneGraph::new(
        &SceneConfig::default(),
        ViewportDimensions::new(1024.0, 768.0),
        ShaderSources::builtin(),
    )
}

#[test]
fn n_frames_accumulate_time_and_phase() {
    let mut scene = scene();
    let mut state = AnimationState::new(12, 30, AnimationConfig::default());
    let (mut t, mut j) = (0.0_f64, 0.0_f64);
    for _ in 0..1000 {
        state = state.tick(&mut scene.material.uniforms);
        t += 0.05;
        j += 0.01;
    }
    assert_eq!(state.t, t);
    assert_eq!(state.j, j);
    assert!((state.t - 50.0).abs() < 1e-9);
    assert!((state.j - 10.0).abs() < 1e-9);
}

#[test]
fn sweep_stays_in_bounds_over_long_runs() {
    let mut scene = scene();
    let mut state = AnimationState::new(32, 0, AnimationConfig::default());
    for _ in 0..10_000 {
        state = state.tick(&mut scene.material.uniforms);
        assert!((0..=32).contains(&state.x));
        assert_eq!(state.y, 0);
    }
}

#[test]
fn sweep_from_zero_stays_in_bounds() {
    let mut scene = scene();
    let mut state = AnimationState::new(0, 0, AnimationConfig::default());
    for _ in 0..10_000 {
        state = state.tick(&mut scene.material.uniforms);
        assert!((-1..=32).contains(&state.x));
    }
    // Three triggered steps: 0 -> -1 (turn) -> 0 -> 1.
    assert_eq!(state.x, 1);
    assert!(state.reversing);
}

#[test]
fn sweep_fires_three_times_then_stalls() {
    let mut scene = scene();
    let mut state = AnimationState::new(16, 9, AnimationConfig::default());
    for _ in 0..200_000 {
        state = state.tick(&mut scene.material.uniforms);
    }
    assert_eq!(state.x, 13);
    assert!(!state.reversing);
}

#[test]
fn only_color1_moves() {
    let mut scene = scene();
    let before = scene.material.uniforms;
    let mut state = AnimationState::new(3, 4, AnimationConfig::default());
    for _ in 0..10 {
        state = state.tick(&mut scene.material.uniforms);
    }
    let after = scene.material.uniforms;
    assert_eq!(after.bg, before.bg);
    assert_eq!(after.bg_main, before.bg_main);
    assert_eq!(after.color2, before.color2);
    assert_ne!(after.time, before.time);
}

#[test]
fn resize_updates_buffer_and_camera_only() {
    let mut scene = scene();
    let mut surface = FakeSurface {
        ratio: viewport::capped_pixel_ratio(3.0, SceneConfig::default().max_pixel_ratio),
        buffer: (0, 0),
    };
    let width_before = scene.mesh.geometry.width;

    viewport::sync(
        &mut surface,
        &mut scene.camera,
        ViewportDimensions::new(800.0, 600.0),
    );

    assert_eq!(scene.camera.aspect, (800.0_f64 / 600.0) as f32);
    assert_eq!(surface.buffer, (1600, 1200));
    assert_eq!(scene.mesh.geometry.width, width_before);

    let fresh = gradient_wasm::camera::PerspectiveCamera::new(
        &SceneConfig::default().camera,
        (800.0_f64 / 600.0) as f32,
    );
    assert_eq!(scene.camera.projection_matrix(), fresh.projection_matrix());
}

#[test]
fn resize_at_unit_ratio() {
    let mut scene = scene();
    let mut surface = FakeSurface {
        ratio: 1.0,
        buffer: (0, 0),
    };
    viewport::sync(
        &mut surface,
        &mut scene.camera,
        ViewportDimensions::new(800.0, 600.0),
    );
    assert_eq!(surface.buffer, (800, 600));
}
