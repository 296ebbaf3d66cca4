//! Solid-color and circular widgets: tiles, discs, cooldown rings, loading
//! spinners, and interactive buttons.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use std::f64::consts::PI;

use crate::consts::{
    BUTTON_COLOR, BUTTON_HOVER_COLOR, SPINNER_CHASE_SPEED, SPINNER_LINE_WIDTH,
    SPINNER_TICKS_PER_ROTATION, TILE_SIZE, WIDGET_PRIMARY_COLOR, WIDGET_SECONDARY_COLOR,
};
use crate::error::Error;
use crate::geom::{Circle, Point, Rect};
use crate::surface::Surface;
use crate::text::Text;

/// Label color used inside circular widgets.
const LABEL_COLOR: &str = "#fff";

/// Label font size relative to a filled circle's radius.
const FILLED_CIRCLE_LABEL_RATIO: f64 = 1.2;

/// Label font size relative to a cooldown ring's radius.
const COOLDOWN_LABEL_RATIO: f64 = 0.75;

/// Base ring stroke width relative to radius.
const COOLDOWN_BASE_WIDTH_RATIO: f64 = 0.6;

/// Progress arc stroke width relative to radius.
const COOLDOWN_ARC_WIDTH_RATIO: f64 = 0.4;

/// A solid-color rectangle.
#[derive(Debug, Clone)]
pub struct ColorTile {
    pub rect: Rect,
    pub color: String,
}

impl ColorTile {
    /// Create a tile of the default size at the origin.
    #[must_use]
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, TILE_SIZE, TILE_SIZE),
            color: color.into(),
        }
    }

    pub(crate) fn draw<S: Surface>(&self, surface: &mut S) {
        surface.set_fill_style(&self.color);
        surface.fill_rect(self.rect.x, self.rect.y, self.rect.width, self.rect.height);
    }
}

/// A filled disc with a centered label.
#[derive(Debug, Clone)]
pub struct FilledCircle {
    pub circle: Circle,
    pub color: String,
    /// Centered label; empty text draws nothing. Its font size and position
    /// are re-derived from the circle every draw.
    pub label: Text,
}

impl FilledCircle {
    #[must_use]
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        let mut label = Text::new(x, y);
        label.centered = true;
        label.color = LABEL_COLOR.to_owned();
        Self {
            circle: Circle::new(x, y, radius),
            color: WIDGET_PRIMARY_COLOR.to_owned(),
            label,
        }
    }

    pub(crate) fn draw<S: Surface>(&mut self, surface: &mut S) -> Result<(), Error> {
        surface.set_fill_style(&self.color);
        surface.begin_path();
        surface.arc(self.circle.x, self.circle.y, self.circle.radius, 0.0, 2.0 * PI)?;
        surface.fill();

        self.label.font_size = self.circle.radius * FILLED_CIRCLE_LABEL_RATIO;
        self.label.pos = Point::new(self.circle.x, self.circle.y);
        self.label.draw(surface)
    }
}

/// A cooldown indicator: a full base ring plus a progress arc from angle 0.
#[derive(Debug, Clone)]
pub struct CooldownRing {
    pub circle: Circle,
    /// How far along the cooldown is, in `[0, 1]`.
    pub progress: f64,
    pub base_color: String,
    pub progress_color: String,
    /// Centered label; empty text draws nothing.
    pub label: Text,
}

impl CooldownRing {
    #[must_use]
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        let mut label = Text::new(x, y);
        label.centered = true;
        Self {
            circle: Circle::new(x, y, radius),
            progress: 0.0,
            base_color: WIDGET_PRIMARY_COLOR.to_owned(),
            progress_color: WIDGET_SECONDARY_COLOR.to_owned(),
            label,
        }
    }

    pub(crate) fn draw<S: Surface>(&mut self, surface: &mut S) -> Result<(), Error> {
        let Circle { x, y, radius } = self.circle;

        surface.set_line_width(radius * COOLDOWN_BASE_WIDTH_RATIO);
        surface.set_stroke_style(&self.base_color);
        surface.begin_path();
        surface.arc(x, y, radius, 0.0, 2.0 * PI)?;
        surface.stroke();

        surface.set_line_width(radius * COOLDOWN_ARC_WIDTH_RATIO);
        surface.set_stroke_style(&self.progress_color);
        surface.begin_path();
        surface.arc(x, y, radius, 0.0, 2.0 * PI * self.progress)?;
        surface.stroke();

        self.label.font_size = radius * COOLDOWN_LABEL_RATIO;
        self.label.color = LABEL_COLOR.to_owned();
        self.label.pos = Point::new(x, y);
        self.label.draw(surface)
    }
}

/// An indeterminate-progress spinner: two arc endpoints advance at different
/// speeds, alternating which one leads so the arc appears to chase itself.
#[derive(Debug, Clone)]
pub struct LoadingSpinner {
    pub circle: Circle,
    pub color: String,
    pub ticks_per_rotation: u32,
    pub chase_speed: f64,
    tick: u64,
    chasing: bool,
}

impl LoadingSpinner {
    #[must_use]
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            circle: Circle::new(x, y, radius),
            color: WIDGET_PRIMARY_COLOR.to_owned(),
            ticks_per_rotation: SPINNER_TICKS_PER_ROTATION,
            chase_speed: SPINNER_CHASE_SPEED,
            tick: 0,
            chasing: true,
        }
    }

    pub(crate) fn draw<S: Surface>(&mut self, surface: &mut S) -> Result<(), Error> {
        let phi = 2.0 * PI;
        self.tick += 1;

        let swap_every = (f64::from(self.ticks_per_rotation) / self.chase_speed).round().max(1.0) as u64;
        if self.tick % swap_every == 0 {
            self.chasing = !self.chasing;
        }

        let tpr = f64::from(self.ticks_per_rotation);
        let a1 = (self.tick % u64::from(self.ticks_per_rotation)) as f64 / tpr * phi;
        let a2 = (a1 + ((self.tick as f64 * self.chase_speed) % tpr) / tpr * phi) % phi;

        let (start, end) = if self.chasing { (a1, a2) } else { (a2, a1) };

        surface.set_line_width(SPINNER_LINE_WIDTH);
        surface.set_stroke_style(&self.color);
        surface.begin_path();
        surface.arc(self.circle.x, self.circle.y, self.circle.radius, start, end)?;
        surface.stroke();
        Ok(())
    }
}

/// An interactive rectangle that tracks pointer hover and fires a click
/// callback registered through the engine's binding registry.
#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub color: String,
    pub hover_color: String,
    hovering: Option<bool>,
}

impl Button {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            color: BUTTON_COLOR.to_owned(),
            hover_color: BUTTON_HOVER_COLOR.to_owned(),
            hovering: None,
        }
    }

    /// Tri-state hover: `None` until the first pointer move is observed.
    ///
    /// Click dispatch branches on `None` specifically — a click that arrives
    /// before any move evaluates hover inline — so this never collapses to a
    /// plain bool.
    #[must_use]
    pub fn hovering(&self) -> Option<bool> {
        self.hovering
    }

    /// Settle the hover state from a pointer position in view-local space.
    pub(crate) fn update_hover(&mut self, local: Point) {
        self.hovering = Some(self.rect.contains(local));
    }

    pub(crate) fn draw<S: Surface>(&self, surface: &mut S) {
        let fill = if self.hovering == Some(true) {
            &self.hover_color
        } else {
            &self.color
        };
        surface.set_fill_style(fill);
        surface.fill_rect(self.rect.x, self.rect.y, self.rect.width, self.rect.height);
    }
}
