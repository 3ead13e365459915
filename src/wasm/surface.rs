use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, Window};

use super::frame::Effect;
use crate::viewport::{self, ViewportDimensions};

/// Pins the canvas to the viewport behind the content. The CSS size stays
/// fixed here; resizing only ever touches the drawing buffer.
pub const CANVAS_STYLE: [(&str, &str); 6] = [
    ("position", "fixed"),
    ("inset", "0"),
    ("width", "100vw"),
    // dvh tracks the visible height on mobile when the address bar moves.
    ("height", "100dvh"),
    ("display", "block"),
    // Clicks go through to the page.
    ("pointer-events", "none"),
];

/// Creates a detached canvas styled as a full-viewport backdrop.
pub fn create_canvas(document: &Document) -> Result<HtmlCanvasElement, JsValue> {
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    let style = canvas.style();
    for (name, value) in CANVAS_STYLE {
        style.set_property(name, value)?;
    }
    Ok(canvas)
}

pub fn viewport_of(window: &Window) -> Result<ViewportDimensions, JsValue> {
    let width = window.inner_width()?.as_f64().ok_or("innerWidth is not a number")?;
    let height = window.inner_height()?.as_f64().ok_or("innerHeight is not a number")?;
    Ok(ViewportDimensions::new(width, height))
}

/// Syncs once now and again on every `resize` event.
pub(super) fn watch_resize(window: &Window, effect: Rc<RefCell<Effect>>) -> Result<(), JsValue> {
    resize(window, &effect)?;

    let resize_closure = {
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            if let Err(e) = resize(&window, &effect) {
                log::error!("resize failed: {e:?}");
            }
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    // Lives as long as the page.
    resize_closure.forget();
    Ok(())
}

fn resize(window: &Window, effect: &Rc<RefCell<Effect>>) -> Result<(), JsValue> {
    let dims = viewport_of(window)?;
    let mut effect = effect.borrow_mut();
    let Effect {
        renderer, scene, ..
    } = &mut *effect;
    viewport::sync(renderer, &mut scene.camera, dims);
    log::debug!("resized to {}x{}", dims.width, dims.height);
    Ok(())
}
