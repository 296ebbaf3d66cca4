//! Test doubles: a recording drawing surface, a stub image handle, and a
//! deterministic clock.

use crate::error::Error;
use crate::surface::{Clock, ImageSource, Surface};

/// A decoded (or deliberately undecoded) stub image.
#[derive(Debug, Clone, PartialEq)]
pub struct TestImage {
    pub name: &'static str,
    pub decoded: bool,
    pub width: f64,
    pub height: f64,
}

impl TestImage {
    pub fn decoded(name: &'static str) -> Self {
        Self { name, decoded: true, width: 16.0, height: 16.0 }
    }

    pub fn undecoded(name: &'static str) -> Self {
        Self { name, decoded: false, width: 0.0, height: 0.0 }
    }
}

impl ImageSource for TestImage {
    fn is_decoded(&self) -> bool {
        self.decoded
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    SetTransform { scale_x: f64, scale_y: f64, translate_x: f64, translate_y: f64 },
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    DrawImage { image: &'static str, x: f64, y: f64, width: f64, height: f64 },
    BeginPath,
    Arc { cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64 },
    Stroke,
    Fill,
    LineWidth(f64),
    StrokeStyle(String),
    FillStyle(String),
    Font(String),
    FillText { text: String, x: f64, y: f64 },
    StrokeText { text: String, x: f64, y: f64 },
}

/// A surface that records every call. Text measurement uses a fixed width
/// per character so wrap tests are deterministic.
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    pub char_width: f64,
    /// When set, the first fallible call fails with this message.
    pub fail_with: Option<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self { calls: Vec::new(), char_width: 10.0, fail_with: None }
    }

    fn check_failure(&mut self) -> Result<(), Error> {
        match self.fail_with.take() {
            Some(message) => Err(Error::Surface(message)),
            None => Ok(()),
        }
    }

    /// Only the fill_rect calls, in order.
    pub fn fill_rects(&self) -> Vec<(f64, f64, f64, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillRect { x, y, width, height } => Some((*x, *y, *width, *height)),
                _ => None,
            })
            .collect()
    }

    /// Only the drawn image names, in order.
    pub fn drawn_images(&self) -> Vec<&'static str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::DrawImage { image, .. } => Some(*image),
                _ => None,
            })
            .collect()
    }

    /// Only the fill styles set, in order.
    pub fn fill_styles(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillStyle(style) => Some(style.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    type Image = TestImage;

    fn set_transform(
        &mut self,
        scale_x: f64,
        scale_y: f64,
        translate_x: f64,
        translate_y: f64,
    ) -> Result<(), Error> {
        self.check_failure()?;
        self.calls.push(DrawCall::SetTransform { scale_x, scale_y, translate_x, translate_y });
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(DrawCall::FillRect { x, y, width, height });
    }

    fn draw_image(
        &mut self,
        image: &Self::Image,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), Error> {
        self.check_failure()?;
        self.calls.push(DrawCall::DrawImage { image: image.name, x, y, width, height });
        Ok(())
    }

    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<(), Error> {
        self.check_failure()?;
        self.calls.push(DrawCall::Arc { cx, cy, radius, start_angle, end_angle });
        Ok(())
    }

    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke);
    }

    fn fill(&mut self) {
        self.calls.push(DrawCall::Fill);
    }

    fn set_line_width(&mut self, width: f64) {
        self.calls.push(DrawCall::LineWidth(width));
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.calls.push(DrawCall::StrokeStyle(style.to_owned()));
    }

    fn set_fill_style(&mut self, style: &str) {
        self.calls.push(DrawCall::FillStyle(style.to_owned()));
    }

    fn set_font(&mut self, font: &str) {
        self.calls.push(DrawCall::Font(font.to_owned()));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Error> {
        self.check_failure()?;
        self.calls.push(DrawCall::FillText { text: text.to_owned(), x, y });
        Ok(())
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Error> {
        self.check_failure()?;
        self.calls.push(DrawCall::StrokeText { text: text.to_owned(), x, y });
        Ok(())
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_width
    }
}

/// A clock that advances a fixed amount every time it is read.
pub struct FakeClock {
    pub now: f64,
    pub step: f64,
}

impl FakeClock {
    pub fn new(step: f64) -> Self {
        Self { now: 0.0, step }
    }
}

impl Clock for FakeClock {
    fn now_ms(&mut self) -> f64 {
        self.now += self.step;
        self.now
    }
}
