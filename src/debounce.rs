// Coalesces a burst of events into one delayed action.
//
// Keeps the pending value and the handle of the timer currently armed for
// it, so each new event cancels the previous timer and only the last value
// is delivered.

use js_sys::Function;
use wasm_bindgen::JsValue;
use web_sys::Window;

// One-shot timers, i.e. setTimeout/clearTimeout
pub trait Timers {
    type Callback: ?Sized;
    type Error;

    fn set_timeout(&self, callback: &Self::Callback, delay_ms: i32) -> Result<i32, Self::Error>;
    fn clear_timeout(&self, handle: i32);
}

impl Timers for Window {
    type Callback = Function;
    type Error = JsValue;

    fn set_timeout(&self, callback: &Function, delay_ms: i32) -> Result<i32, JsValue> {
        self.set_timeout_with_callback_and_timeout_and_arguments_0(callback, delay_ms)
    }

    fn clear_timeout(&self, handle: i32) {
        self.clear_timeout_with_handle(handle);
    }
}

pub struct Debounce<T> {
    delay_ms: i32,
    pending: Option<T>,
    timer: Option<i32>,
}

impl<T> Debounce<T> {
    pub fn new(delay_ms: i32) -> Self {
        Debounce {
            delay_ms,
            pending: None,
            timer: None,
        }
    }

    pub fn delay_ms(&self) -> i32 {
        self.delay_ms
    }

    // Cancel-and-restart. `on_settle` should call `fire` when it runs.
    // The new timer is armed before the old one is cleared, so a failed
    // set_timeout leaves the previous value and timer in place.
    pub fn restart<H: Timers + ?Sized>(
        &mut self,
        timers: &H,
        value: T,
        on_settle: &H::Callback,
    ) -> Result<(), H::Error> {
        let timer = timers.set_timeout(on_settle, self.delay_ms)?;
        if let Some(stale) = self.timer.replace(timer) {
            timers.clear_timeout(stale);
        }
        self.pending = Some(value);
        Ok(())
    }

    // Called when the armed timer elapses. Yields the latest value once.
    pub fn fire(&mut self) -> Option<T> {
        self.timer = None;
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
