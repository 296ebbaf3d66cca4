//! Word-wrapped drawable text.
//!
//! `set_text` wraps once against the surface's text metrics and caches the
//! resulting lines; drawing then replays the cached lines. Lines that fall
//! below `max_height` are lazily skipped at draw time — the data itself is
//! never truncated.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use crate::consts::{DEFAULT_FONT, DEFAULT_FONT_SIZE, TEXT_COLOR};
use crate::error::Error;
use crate::geom::{Point, Rect};
use crate::surface::Surface;

/// Multi-line text anchored at a point.
#[derive(Debug, Clone)]
pub struct Text {
    /// Anchor. Lines flow downward from here; with `centered` set, each line
    /// is centered horizontally on `pos.x`.
    pub pos: Point,
    pub font_size: f64,
    /// Font family, combined with `font_size` into a CSS font spec.
    pub font: String,
    pub color: String,
    /// When set, each line is additionally stroked in this color.
    pub border_color: Option<String>,
    pub centered: bool,
    /// Maximum line width in pixels. Infinite by default (no wrapping);
    /// zero makes `set_text` a defensive no-op.
    pub max_width: f64,
    /// Maximum block height in pixels. Lines below it are not drawn.
    pub max_height: f64,
    lines: Vec<String>,
}

impl Text {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            pos: Point::new(x, y),
            font_size: DEFAULT_FONT_SIZE,
            font: DEFAULT_FONT.to_owned(),
            color: TEXT_COLOR.to_owned(),
            border_color: None,
            centered: false,
            max_width: f64::INFINITY,
            max_height: f64::INFINITY,
            lines: Vec::new(),
        }
    }

    /// The wrapped lines produced by the last `set_text`.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn font_spec(&self) -> String {
        format!("{}px {}", self.font_size, self.font)
    }

    /// Re-wrap `text` into lines no wider than `max_width` pixels.
    ///
    /// Words are packed greedily: a word moves to the next line when its
    /// measured width plus the inter-word space would reach the limit. A
    /// `max_width` of zero leaves the current lines untouched.
    pub fn set_text<S: Surface>(&mut self, text: &str, surface: &mut S) {
        if self.max_width <= 0.0 {
            return;
        }

        surface.set_font(&self.font_spec());
        let space_width = surface.measure_text(" ");

        let mut words = text.split(' ');
        // `split` always yields at least one (possibly empty) item.
        let first = words.next().unwrap_or_default();
        let mut lines = Vec::new();
        let mut current = first.to_owned();
        let mut current_width = surface.measure_text(&current);

        for word in words {
            let word_width = surface.measure_text(word);
            let width = word_width + space_width;

            if current_width + width >= self.max_width {
                // This word would break the line; flush and start over.
                lines.push(std::mem::take(&mut current));
                current = word.to_owned();
                current_width = word_width;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += width;
            }
        }
        lines.push(current);
        self.lines = lines;
    }

    /// Box used for culling: anchored at `pos`, sized by the wrap limits.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.max_width, self.max_height)
    }

    pub(crate) fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), Error> {
        surface.set_font(&self.font_spec());
        surface.set_fill_style(&self.color);
        if let Some(border) = &self.border_color {
            surface.set_stroke_style(border);
            surface.set_line_width(0.2);
        }

        for (i, line) in self.lines.iter().enumerate() {
            let height = self.font_size * 0.33 + self.font_size * (i as f64);
            if height + self.font_size * 1.33 > self.max_height {
                continue;
            }

            let offset = if self.centered {
                surface.measure_text(line) / 2.0
            } else {
                0.0
            };

            surface.fill_text(line, self.pos.x - offset, self.pos.y + height)?;
            if self.border_color.is_some() {
                surface.stroke_text(line, self.pos.x - offset, self.pos.y + height)?;
            }
        }
        Ok(())
    }
}
