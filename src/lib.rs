// A macro to provide `println!(..)`-style syntax for `console.log` logging.
macro_rules! log {
    ( $( $t:tt )* ) => {
        web_sys::console::log_1(&format!( $( $t )* ).into());
    }
}

mod utils;
pub mod backdrop;
pub mod color;
pub mod config;
pub mod cursor;
pub mod debounce;
pub mod dom;
pub mod field;
pub mod nav;
pub mod page;
pub mod particle;
pub mod renderer;

use config::PageConfig;
use page::PageController;
use wasm_bindgen::prelude::*;
use web_sys::console;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

// Handle returned to JS. The page must hold on to it; freeing it drops the
// Rust closures behind every listener and the frame loop.
#[wasm_bindgen]
pub struct PageEffects {
    controller: PageController,
}

#[wasm_bindgen]
impl PageEffects {
    pub fn has_backdrop(&self) -> bool {
        self.controller.backdrop.is_some()
    }

    pub fn has_cursor(&self) -> bool {
        self.controller.cursor.is_some()
    }

    pub fn particle_count(&self) -> usize {
        self.controller
            .backdrop
            .as_ref()
            .map_or(0, |b| b.particle_count())
    }

    pub fn is_suspended(&self) -> bool {
        self.controller
            .backdrop
            .as_ref()
            .map_or(false, |b| b.is_suspended())
    }

    pub fn frame_count(&self) -> u64 {
        self.controller.backdrop.as_ref().map_or(0, |b| b.frame_count())
    }

    pub fn resize_count(&self) -> u64 {
        self.controller.backdrop.as_ref().map_or(0, |b| b.resize_count())
    }

    pub fn nav_link_count(&self) -> usize {
        self.controller.nav.as_ref().map_or(0, |n| n.link_count())
    }
}

// Installs every effect with the page's default element ids
#[wasm_bindgen]
pub fn initialize() -> Result<PageEffects, JsValue> {
    install(PageConfig::default())
}

// Same as `initialize`, drawing the backdrop on a different canvas
#[wasm_bindgen]
pub fn initialize_with_canvas(canvas_id: &str) -> Result<PageEffects, JsValue> {
    install(PageConfig {
        canvas_id: canvas_id.to_owned(),
        ..PageConfig::default()
    })
}

// Same as `initialize_with_canvas`, optionally timing every frame in the
// console under the "ParticleField::tick" label
#[wasm_bindgen]
pub fn initialize_with_profiling(canvas_id: &str, profile: bool) -> Result<PageEffects, JsValue> {
    let mut config = PageConfig {
        canvas_id: canvas_id.to_owned(),
        ..PageConfig::default()
    };
    config.field.profile_frames = profile;
    install(config)
}

fn install(config: PageConfig) -> Result<PageEffects, JsValue> {
    utils::set_panic_hook();
    match PageController::install(&config) {
        Ok(controller) => Ok(PageEffects { controller }),
        Err(e) => {
            console::error_1(&e);
            Err(e)
        }
    }
}
