//! Browser implementations of the engine's external contracts.
//!
//! This module is the only place that touches web-sys. It adapts
//! [`web_sys::CanvasRenderingContext2d`] into a [`Surface`],
//! [`web_sys::HtmlImageElement`] into an [`ImageSource`], and
//! `performance.now()` into a [`Clock`], plus small helpers for reading
//! canvas geometry and building engine events from raw DOM event fields.
//! The host JavaScript layer is responsible only for wiring DOM events to
//! the engine and scheduling [`crate::engine::Engine::render`] from an
//! animation-frame loop; on a render error the expected host policy is to
//! log and stop scheduling further frames.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Performance};

use crate::error::Error;
use crate::geom::Point;
use crate::input::{CanvasMetrics, PointerEvent, WheelDelta, WheelEvent};
use crate::surface::{Clock, ImageSource, Surface};

fn js_error(context: &str, value: &JsValue) -> Error {
    Error::Surface(format!("{context}: {value:?}"))
}

/// A decoded browser image.
#[derive(Debug, Clone)]
pub struct HtmlImage {
    element: HtmlImageElement,
}

impl HtmlImage {
    #[must_use]
    pub fn new(element: HtmlImageElement) -> Self {
        Self { element }
    }

    #[must_use]
    pub fn element(&self) -> &HtmlImageElement {
        &self.element
    }
}

impl ImageSource for HtmlImage {
    fn is_decoded(&self) -> bool {
        self.element.complete() && self.element.natural_width() > 0
    }

    fn width(&self) -> f64 {
        f64::from(self.element.natural_width())
    }

    fn height(&self) -> f64 {
        f64::from(self.element.natural_height())
    }
}

/// A 2D canvas context as a drawing surface.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    #[must_use]
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Acquire the `"2d"` context of a canvas element.
    ///
    /// # Errors
    ///
    /// `Surface` if the context is unavailable or of an unexpected type.
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, Error> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| js_error("get_context", &e))?
            .ok_or_else(|| Error::Surface("canvas has no 2d context".to_owned()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::Surface("2d context has unexpected type".to_owned()))?;
        Ok(Self::new(ctx))
    }
}

impl Surface for CanvasSurface {
    type Image = HtmlImage;

    fn set_transform(
        &mut self,
        scale_x: f64,
        scale_y: f64,
        translate_x: f64,
        translate_y: f64,
    ) -> Result<(), Error> {
        self.ctx
            .set_transform(scale_x, 0.0, 0.0, scale_y, translate_x, translate_y)
            .map_err(|e| js_error("set_transform", &e))
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    fn draw_image(
        &mut self,
        image: &Self::Image,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), Error> {
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(image.element(), x, y, width, height)
            .map_err(|e| js_error("draw_image", &e))
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<(), Error> {
        self.ctx
            .arc(cx, cy, radius, start_angle, end_angle)
            .map_err(|e| js_error("arc", &e))
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.ctx.set_stroke_style_str(style);
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ctx.set_fill_style_str(style);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Error> {
        self.ctx
            .fill_text(text, x, y)
            .map_err(|e| js_error("fill_text", &e))
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Error> {
        self.ctx
            .stroke_text(text, x, y)
            .map_err(|e| js_error("stroke_text", &e))
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        match self.ctx.measure_text(text) {
            Ok(metrics) => metrics.width(),
            Err(_) => f64::INFINITY,
        }
    }
}

/// Wall clock backed by `performance.now()`.
pub struct PerformanceClock {
    performance: Performance,
}

impl PerformanceClock {
    /// # Errors
    ///
    /// `Surface` when the performance API is unavailable.
    pub fn new() -> Result<Self, Error> {
        let performance = web_sys::window()
            .and_then(|w| w.performance())
            .ok_or_else(|| Error::Surface("performance API unavailable".to_owned()))?;
        Ok(Self { performance })
    }
}

impl Clock for PerformanceClock {
    fn now_ms(&mut self) -> f64 {
        self.performance.now()
    }
}

/// Read the canvas geometry the engine needs for device-pixel mapping.
/// Re-read after resizes, since both the CSS rect and the backing store
/// change independently.
#[must_use]
pub fn metrics_of(canvas: &HtmlCanvasElement) -> CanvasMetrics {
    let rect = canvas.get_bounding_client_rect();
    CanvasMetrics {
        rect_left: rect.left(),
        rect_top: rect.top(),
        css_width: rect.width(),
        css_height: rect.height(),
        backing_width: f64::from(canvas.width()),
        backing_height: f64::from(canvas.height()),
    }
}

/// Build a pointer event from a DOM event's `clientX` / `clientY`.
#[must_use]
pub fn pointer_event(client_x: f64, client_y: f64) -> PointerEvent {
    PointerEvent { client: Point::new(client_x, client_y) }
}

/// Build a wheel event from a DOM wheel event's client position and deltas.
#[must_use]
pub fn wheel_event(client_x: f64, client_y: f64, delta_x: f64, delta_y: f64) -> WheelEvent {
    WheelEvent {
        client: Point::new(client_x, client_y),
        delta: WheelDelta { dx: delta_x, dy: delta_y },
    }
}
