//! Animated gradient plane drawn with WebGL2 behind the page content.
//!
//! The scene model, color functions and animation state are plain Rust and
//! build on any target. Everything that touches the browser lives in the
//! wasm32-only `wasm` module.

pub mod animation;
pub mod camera;
pub mod color;
pub mod config;
pub mod geometry;
pub mod material;
pub mod scene;
pub mod viewport;

pub use animation::AnimationState;
pub use config::SceneConfig;
pub use material::{ShaderSources, ShaderUniforms};
pub use scene::SceneGraph;
pub use viewport::ViewportDimensions;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    mod frame;
    mod render;
    mod surface;

    pub use render::GlRenderer;
    pub use surface::{create_canvas, viewport_of, CANVAS_STYLE};

    use crate::viewport::RenderSurface as _;
    use crate::{SceneConfig, ShaderSources};

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let level = if cfg!(feature = "verbose") {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        // A second init (e.g. in tests) only fails because a logger exists.
        let _ = console_log::init_with_level(level);

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        if document.ready_state() == "loading" {
            let ready = Closure::once(move || {
                if let Err(e) = bootstrap(SceneConfig::default(), ShaderSources::builtin()) {
                    log::error!("gradient bootstrap failed: {e:?}");
                    wasm_bindgen::throw_val(e);
                }
            });
            document.add_event_listener_with_callback(
                "DOMContentLoaded",
                ready.as_ref().unchecked_ref(),
            )?;
            ready.forget();
            return Ok(());
        }

        bootstrap(SceneConfig::default(), ShaderSources::builtin())
    }

    /// Creates the canvas and renderer, builds the scene, hooks up resizing
    /// and starts the frame loop. Call once per page.
    pub fn bootstrap(config: SceneConfig, sources: ShaderSources) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let body = document.body().ok_or("no document body")?;

        let canvas = create_canvas(&document)?;
        body.append_child(&canvas)?;

        let mut renderer = GlRenderer::new(canvas)?;
        renderer.set_pixel_ratio(crate::viewport::capped_pixel_ratio(
            window.device_pixel_ratio(),
            config.max_pixel_ratio,
        ));

        let viewport = viewport_of(&window)?;
        let scene = crate::SceneGraph::new(&config, viewport, sources);
        renderer.upload(&scene)?;
        log::info!(
            "gradient started at {}x{} (pixel ratio {})",
            viewport.width,
            viewport.height,
            renderer.pixel_ratio()
        );

        let mut rng = fastrand::Rng::new();
        let state = crate::AnimationState::random(&mut rng, config.animation);

        let effect = frame::Effect::new(renderer, scene, state);
        surface::watch_resize(&window, effect.clone())?;
        frame::start(&window, effect)
    }
}
