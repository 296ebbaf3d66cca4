//! Input model: pointer/wheel/keyboard events, device-pixel mapping, and the
//! binding registry for interactive widgets.
//!
//! Events arrive in client (CSS pixel) coordinates. [`CanvasMetrics`] maps
//! them to backing-store device pixels; the engine then subtracts the target
//! view's accumulated offset to reach view-local space, where buttons
//! hit-test against their boxes.
//!
//! Widgets never capture closures over the event source. Instead every
//! interactive widget gets an entry in [`Bindings`] identified by a
//! [`BindingId`]; bindings fire in registration order and are removed
//! explicitly (directly, or by the engine when their layer is deleted).

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::collections::HashSet;

use uuid::Uuid;

use crate::geom::Point;
use crate::renderable::ObjectId;
use crate::view::ViewId;

/// A keyboard key name as reported by the host (e.g. `"ArrowLeft"`, `"w"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key(pub String);

/// Wheel / trackpad scroll delta in pixels (positive `dy` = down).
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelDelta {
    pub dx: f64,
    pub dy: f64,
}

/// A pointer move or click in client (CSS pixel) coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    pub client: Point,
}

/// A wheel event in client coordinates.
#[derive(Debug, Clone, Copy)]
pub struct WheelEvent {
    pub client: Point,
    pub delta: WheelDelta,
}

/// Geometry needed to map client coordinates to backing-store pixels: the
/// canvas CSS bounding rect and its backing-store size.
#[derive(Debug, Clone, Copy)]
pub struct CanvasMetrics {
    pub rect_left: f64,
    pub rect_top: f64,
    pub css_width: f64,
    pub css_height: f64,
    pub backing_width: f64,
    pub backing_height: f64,
}

impl Default for CanvasMetrics {
    /// 1:1 mapping with the canvas at the client origin.
    fn default() -> Self {
        Self {
            rect_left: 0.0,
            rect_top: 0.0,
            css_width: 0.0,
            css_height: 0.0,
            backing_width: 0.0,
            backing_height: 0.0,
        }
    }
}

impl CanvasMetrics {
    /// Map a client-space point to backing-store device pixels. A degenerate
    /// CSS rect falls back to a 1:1 scale.
    #[must_use]
    pub fn to_device(&self, client: Point) -> Point {
        let scale_x = if self.css_width > 0.0 {
            self.backing_width / self.css_width
        } else {
            1.0
        };
        let scale_y = if self.css_height > 0.0 {
            self.backing_height / self.css_height
        } else {
            1.0
        };
        Point::new(
            (client.x - self.rect_left) * scale_x,
            (client.y - self.rect_top) * scale_y,
        )
    }
}

/// Explicit keyboard state, created with the engine and torn down with it.
#[derive(Debug, Default)]
pub struct InputState {
    down: HashSet<String>,
}

impl InputState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &Key) {
        self.down.insert(key.0.clone());
    }

    pub fn key_up(&mut self, key: &Key) {
        self.down.remove(&key.0);
    }

    /// Whether the named key is currently held.
    #[must_use]
    pub fn is_down(&self, key: &str) -> bool {
        self.down.contains(key)
    }

    /// Release everything, e.g. when the canvas loses focus.
    pub fn clear(&mut self) {
        self.down.clear();
    }
}

/// Handle for a registered binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(Uuid);

impl BindingId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Callback fired when a bound button is clicked while hovered.
pub type ClickHandler = Box<dyn FnMut(&PointerEvent)>;

pub(crate) struct ButtonBinding {
    pub id: BindingId,
    pub view: ViewId,
    pub object: ObjectId,
    /// `None` for hover-only bindings, and transiently while the handler is
    /// being invoked.
    pub on_click: Option<ClickHandler>,
}

pub(crate) struct ScrollBinding {
    pub id: BindingId,
    pub view: ViewId,
    /// Scroll-offset pixels applied per wheel notch, by delta sign.
    pub step: f64,
}

/// Registry of interactive-widget bindings, in registration order.
#[derive(Default)]
pub struct Bindings {
    pub(crate) buttons: Vec<ButtonBinding>,
    pub(crate) scrolls: Vec<ScrollBinding>,
}

impl Bindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn bind_button(
        &mut self,
        view: ViewId,
        object: ObjectId,
        on_click: Option<ClickHandler>,
    ) -> BindingId {
        let id = BindingId::new();
        self.buttons.push(ButtonBinding { id, view, object, on_click });
        id
    }

    pub(crate) fn bind_scroll(&mut self, view: ViewId, step: f64) -> BindingId {
        let id = BindingId::new();
        self.scrolls.push(ScrollBinding { id, view, step });
        id
    }

    /// Remove one binding by handle. Unknown handles are ignored.
    pub fn remove(&mut self, id: BindingId) {
        self.buttons.retain(|b| b.id != id);
        self.scrolls.retain(|s| s.id != id);
    }

    /// Remove every binding that references the given object.
    pub(crate) fn remove_for_object(&mut self, view: ViewId, object: ObjectId) {
        self.buttons.retain(|b| b.view != view || b.object != object);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buttons.len() + self.scrolls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty() && self.scrolls.is_empty()
    }
}
