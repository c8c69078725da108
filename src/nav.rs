// In-page navigation: nav links to "#section" glide there instead of jumping

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions};

// The selector to look up for an anchor href, if it names a fragment
pub fn fragment_selector(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

pub fn smooth_scroll_to(document: &Document, href: &str) {
    let selector = match fragment_selector(href) {
        Some(selector) => selector,
        None => return,
    };
    // An id that isn't a valid selector throws; treat it like a missing target
    if let Ok(Some(target)) = document.query_selector(selector) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub struct AnchorNav {
    on_click: Vec<Closure<dyn FnMut(Event)>>,
}

impl AnchorNav {
    pub fn install(document: &Document, selector: &str) -> Result<AnchorNav, JsValue> {
        let anchors = document.query_selector_all(selector)?;
        let mut on_click = Vec::with_capacity(anchors.length() as usize);
        for i in 0..anchors.length() {
            let anchor = match anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                Some(anchor) => anchor,
                None => continue,
            };
            let document = document.clone();
            let link = anchor.clone();
            let handler = Closure::wrap(Box::new(move |event: Event| {
                event.prevent_default();
                if let Some(href) = link.get_attribute("href") {
                    smooth_scroll_to(&document, &href);
                }
            }) as Box<dyn FnMut(Event)>);
            anchor.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
            on_click.push(handler);
        }
        Ok(AnchorNav { on_click })
    }

    pub fn link_count(&self) -> usize {
        self.on_click.len()
    }
}
