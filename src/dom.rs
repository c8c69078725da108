// Small helpers over web_sys for the lookups and listeners every effect needs

use js_sys::Function;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, EventTarget, HtmlElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

// Current layout viewport in CSS pixels
pub fn viewport_size(window: &Window) -> Result<(u32, u32), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width.max(0.0) as u32, height.max(0.0) as u32))
}

pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

// Listener that promises never to call preventDefault
pub fn add_passive_listener(
    target: &EventTarget,
    event: &str,
    callback: &Function,
) -> Result<(), JsValue> {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(event, callback, &options)
}

pub fn request_animation_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}

// Browser-native smooth scrolling for the whole document
pub fn enable_smooth_scroll(document: &Document) -> Result<(), JsValue> {
    if let Some(root) = document
        .document_element()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    {
        root.style().set_property("scroll-behavior", "smooth")?;
    }
    Ok(())
}
