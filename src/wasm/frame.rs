use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::Window;

use super::render::GlRenderer;
use crate::{AnimationState, SceneGraph};

/// Everything the resize listener and the frame callback share.
pub struct Effect {
    pub renderer: GlRenderer,
    pub scene: SceneGraph,
    pub state: AnimationState,
}

impl Effect {
    pub fn new(renderer: GlRenderer, scene: SceneGraph, state: AnimationState) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            renderer,
            scene,
            state,
        }))
    }

    fn frame(&mut self) {
        self.state = self.state.tick(&mut self.scene.material.uniforms);
        self.renderer.render(&self.scene);
    }
}

/// Starts the `requestAnimationFrame` loop. It reschedules itself before doing
/// any work and never stops.
pub fn start(window: &Window, effect: Rc<RefCell<Effect>>) -> Result<(), JsValue> {
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let win = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        // schedule next
        if let Some(cb) = f.borrow().as_ref() {
            if let Err(e) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {e:?}");
            }
        }

        effect.borrow_mut().frame();
    }) as Box<dyn FnMut()>));

    if let Some(cb) = g.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
