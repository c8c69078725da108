// Custom cursor: an element that follows the pointer via a CSS transform

use crate::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, HtmlElement, MouseEvent, Window};

pub fn cursor_transform(client_x: i32, client_y: i32) -> String {
    format!("translate3d({}px, {}px, 0)", client_x, client_y)
}

pub struct CursorFollower {
    _on_move: Closure<dyn FnMut(MouseEvent)>,
}

impl CursorFollower {
    // Ok(None) if the page has no cursor element
    pub fn install(
        window: &Window,
        document: &Document,
        cursor_id: &str,
    ) -> Result<Option<CursorFollower>, JsValue> {
        let cursor = match dom::element_by_id::<HtmlElement>(document, cursor_id) {
            Some(cursor) => cursor,
            None => return Ok(None),
        };
        let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
            let transform = cursor_transform(event.client_x(), event.client_y());
            if let Err(e) = cursor.style().set_property("transform", &transform) {
                console::error_1(&e);
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        dom::add_passive_listener(window, "mousemove", on_move.as_ref().unchecked_ref())?;
        Ok(Some(CursorFollower { _on_move: on_move }))
    }
}
