// Drawing surface abstraction the particle field renders into, and the
// canvas-backed implementation used in the browser.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

// Immediate-mode 2D target. Style strings are CSS colors.
pub trait Surface {
    type Error;

    fn width(&self) -> f64;
    fn height(&self) -> f64;

    // Sets the backing store size, which also wipes its contents
    fn resize(&mut self, width: u32, height: u32);

    fn clear(&mut self);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, style: &str) -> Result<(), Self::Error>;
    fn stroke_line(
        &mut self,
        from: [f64; 2],
        to: [f64; 2],
        style: &str,
    ) -> Result<(), Self::Error>;
}

pub struct CanvasRenderer {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    // Grabs the 2D context from the canvas. A canvas that can't hand one out
    // yields None rather than an error, since the backdrop is optional.
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(CanvasRenderer { canvas, context })
    }
}

impl Surface for CanvasRenderer {
    type Error = JsValue;

    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.width(), self.height());
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, style: &str) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context
            .arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0)?;
        #[allow(deprecated)]
        self.context.set_fill_style(&JsValue::from_str(style));
        self.context.fill();
        Ok(())
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], style: &str) -> Result<(), JsValue> {
        #[allow(deprecated)]
        self.context.set_stroke_style(&JsValue::from_str(style));
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
        Ok(())
    }
}
