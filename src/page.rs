// Owner of every effect installed on the page. Built once at start-up;
// dropping it unregisters nothing but frees the Rust side of the callbacks,
// so it has to outlive the page.

use crate::backdrop::BackdropAnimator;
use crate::config::PageConfig;
use crate::cursor::CursorFollower;
use crate::dom;
use crate::nav::AnchorNav;
use wasm_bindgen::JsValue;

#[derive(Default)]
pub struct PageController {
    pub backdrop: Option<BackdropAnimator>,
    pub cursor: Option<CursorFollower>,
    pub nav: Option<AnchorNav>,
}

impl PageController {
    // Effects are independent; a missing element only skips its own effect.
    // Outside a document (e.g. a worker) nothing is installed.
    pub fn install(config: &PageConfig) -> Result<PageController, JsValue> {
        let window = match dom::window() {
            Some(window) => window,
            None => return Ok(PageController::default()),
        };
        let document = match window.document() {
            Some(document) => document,
            None => return Ok(PageController::default()),
        };

        let cursor = CursorFollower::install(&window, &document, &config.cursor_id)?;
        let nav = AnchorNav::install(&document, &config.nav_anchor_selector)?;
        dom::enable_smooth_scroll(&document)?;
        let backdrop = BackdropAnimator::install(&window, &document, config)?;

        Ok(PageController {
            backdrop,
            cursor,
            nav: Some(nav),
        })
    }
}
