//! Value geometry: points, rectangles, circles, and viewport bounds.
//!
//! These are plain `Copy` shapes with no identity of their own. Renderables
//! embed them for position and extent; the view engine derives axis-aligned
//! bounding boxes from them for culling.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in world, device, or view-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle: top-left corner plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Half-open containment test: `[x, x + width) × [y, y + height)`.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

/// A circle: center plus radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Circle {
    #[must_use]
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }

    /// The tightest axis-aligned box around the circle.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        Rect::new(
            self.x - self.radius,
            self.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}

/// World-space viewport bounds used for culling.
///
/// Built from a view's `center_mod` and footprint: everything whose bounding
/// box overlaps `[x1, x2] × [y1, y2]` gets drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
}

impl Bounds {
    /// Bounds of a viewport whose visible top-left is `top_left` and whose
    /// footprint is `width × height`.
    #[must_use]
    pub fn viewport(top_left: Point, width: f64, height: f64) -> Self {
        Self {
            x1: top_left.x,
            x2: width + top_left.x,
            y1: top_left.y,
            y2: height + top_left.y,
        }
    }

    /// Whether `rect` overlaps these bounds.
    ///
    /// All comparisons are strict, so a box exactly touching a boundary from
    /// either side is kept.
    #[must_use]
    pub fn intersects(&self, rect: &Rect) -> bool {
        !(rect.x + rect.width < self.x1
            || rect.x > self.x2
            || rect.y + rect.height < self.y1
            || rect.y > self.y2)
    }
}
