// Browser wiring for the particle field: frame loop, debounced resize,
// and pausing while the page scrolls.

use crate::config::PageConfig;
use crate::debounce::Debounce;
use crate::dom;
use crate::field::ParticleField;
use crate::renderer::CanvasRenderer;
use crate::Timer;
use js_sys::Function;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, HtmlCanvasElement, Window};

struct Backdrop {
    field: ParticleField,
    renderer: CanvasRenderer,
    resize: Debounce<(u32, u32)>,
    scroll: Debounce<()>,
    profile_frames: bool,
    frames: u64,
    resizes: u64,
}

impl Backdrop {
    fn frame(&mut self) {
        let _timer = if self.profile_frames {
            Some(Timer::new("ParticleField::tick"))
        } else {
            None
        };
        if let Err(e) = self.field.tick(&mut self.renderer) {
            console::error_1(&e);
        }
        self.frames += 1;
    }

    fn resize_settled(&mut self) {
        if let Some((width, height)) = self.resize.fire() {
            self.field.resize(&mut self.renderer, width, height);
            self.resizes += 1;
            log!("particle field resized to {}x{}", width, height);
        }
    }

    fn scroll_settled(&mut self) {
        if self.scroll.fire().is_some() {
            self.field.set_suspended(false);
        }
    }
}

// Keeps the shared state and every callback registered with the browser
// alive for as long as the page runs.
pub struct BackdropAnimator {
    state: Rc<RefCell<Backdrop>>,
    _frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    _on_resize: Closure<dyn FnMut()>,
    _on_resize_settled: Closure<dyn FnMut()>,
    _on_scroll: Closure<dyn FnMut()>,
    _on_scroll_settled: Closure<dyn FnMut()>,
}

impl BackdropAnimator {
    // Returns Ok(None) when there is no canvas to draw on; nothing is
    // registered in that case.
    pub fn install(
        window: &Window,
        document: &Document,
        config: &PageConfig,
    ) -> Result<Option<BackdropAnimator>, JsValue> {
        let canvas = match dom::element_by_id::<HtmlCanvasElement>(document, &config.canvas_id) {
            Some(canvas) => canvas,
            None => return Ok(None),
        };
        let mut renderer = match CanvasRenderer::new(canvas) {
            Some(renderer) => renderer,
            None => return Ok(None),
        };

        let (width, height) = dom::viewport_size(window)?;
        let mut rng = rand::thread_rng();
        let field = ParticleField::new(&mut renderer, width, height, config.field.clone(), &mut rng);
        log!(
            "particle field: {} particles on {}x{}",
            field.particles().len(),
            width,
            height
        );

        let state = Rc::new(RefCell::new(Backdrop {
            field,
            renderer,
            resize: Debounce::new(config.resize_debounce_ms),
            scroll: Debounce::new(config.scroll_settle_ms),
            profile_frames: config.field.profile_frames,
            frames: 0,
            resizes: 0,
        }));

        let on_resize_settled = {
            let state = state.clone();
            Closure::wrap(Box::new(move || state.borrow_mut().resize_settled()) as Box<dyn FnMut()>)
        };
        let on_resize = {
            let state = state.clone();
            let window = window.clone();
            let settle: Function = on_resize_settled.as_ref().unchecked_ref::<Function>().clone();
            Closure::wrap(Box::new(move || {
                let result = dom::viewport_size(&window).and_then(|size| {
                    state.borrow_mut().resize.restart(&window, size, &settle)
                });
                if let Err(e) = result {
                    console::error_1(&e);
                }
            }) as Box<dyn FnMut()>)
        };
        dom::add_passive_listener(window, "resize", on_resize.as_ref().unchecked_ref())?;

        let on_scroll_settled = {
            let state = state.clone();
            Closure::wrap(Box::new(move || state.borrow_mut().scroll_settled()) as Box<dyn FnMut()>)
        };
        let on_scroll = {
            let state = state.clone();
            let window = window.clone();
            let settle: Function = on_scroll_settled.as_ref().unchecked_ref::<Function>().clone();
            Closure::wrap(Box::new(move || {
                let mut backdrop = state.borrow_mut();
                // Only pause once a timer is armed to resume
                match backdrop.scroll.restart(&window, (), &settle) {
                    Ok(()) => backdrop.field.set_suspended(true),
                    Err(e) => console::error_1(&e),
                }
            }) as Box<dyn FnMut()>)
        };
        dom::add_passive_listener(window, "scroll", on_scroll.as_ref().unchecked_ref())?;

        // The frame closure reschedules itself through its own Rc, so it
        // stays alive for the rest of the page.
        let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        {
            let next = frame.clone();
            let state = state.clone();
            let window = window.clone();
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                state.borrow_mut().frame();
                if let Some(callback) = next.borrow().as_ref() {
                    if let Err(e) = dom::request_animation_frame(&window, callback) {
                        console::error_1(&e);
                    }
                }
            }) as Box<dyn FnMut()>));
        }
        if let Some(callback) = frame.borrow().as_ref() {
            dom::request_animation_frame(window, callback)?;
        }

        Ok(Some(BackdropAnimator {
            state,
            _frame: frame,
            _on_resize: on_resize,
            _on_resize_settled: on_resize_settled,
            _on_scroll: on_scroll,
            _on_scroll_settled: on_scroll_settled,
        }))
    }

    pub fn particle_count(&self) -> usize {
        self.state.borrow().field.particles().len()
    }

    pub fn is_suspended(&self) -> bool {
        self.state.borrow().field.is_suspended()
    }

    pub fn size(&self) -> (f64, f64) {
        self.state.borrow().field.size()
    }

    // Frames rendered since install
    pub fn frame_count(&self) -> u64 {
        self.state.borrow().frames
    }

    // Debounced resizes applied since install
    pub fn resize_count(&self) -> u64 {
        self.state.borrow().resizes
    }
}
