//! Top-level engine: scene tree + binding registry + keyboard state +
//! telemetry, with the event dispatch that ties them together.
//!
//! The engine is driven by an external scheduling tick: the host calls
//! [`Engine::render`] once per animation frame and forwards pointer, wheel,
//! and keyboard events as they arrive. Everything runs on one logical
//! thread; callbacks interleave between frames and whatever they mutate is
//! what the next render sees.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::error::Error;
use crate::geom::Point;
use crate::input::{
    BindingId, Bindings, CanvasMetrics, InputState, Key, PointerEvent, WheelEvent,
};
use crate::renderable::ObjectId;
use crate::surface::{Clock, ImageSource, Surface};
use crate::telemetry::{Telemetry, TelemetrySnapshot};
use crate::view::{Scene, View, ViewId};

/// The scene engine.
pub struct Engine<I: ImageSource> {
    scene: Scene<I>,
    bindings: Bindings,
    input: InputState,
    metrics: CanvasMetrics,
    telemetry: Telemetry,
}

impl<I: ImageSource> Engine<I> {
    /// Create an engine around a root view.
    #[must_use]
    pub fn new(root: View<I>) -> Self {
        Self {
            scene: Scene::new(root),
            bindings: Bindings::new(),
            input: InputState::new(),
            metrics: CanvasMetrics::default(),
            telemetry: Telemetry::new(),
        }
    }

    #[must_use]
    pub fn scene(&self) -> &Scene<I> {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene<I> {
        &mut self.scene
    }

    #[must_use]
    pub fn root(&self) -> ViewId {
        self.scene.root()
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Update the canvas geometry used for device-pixel mapping. Call on
    /// resize and on device-pixel-ratio changes.
    pub fn set_metrics(&mut self, metrics: CanvasMetrics) {
        self.metrics = metrics;
    }

    #[must_use]
    pub fn metrics(&self) -> CanvasMetrics {
        self.metrics
    }

    // --- Bindings ---

    /// Register hover tracking for a button, without a click handler.
    ///
    /// # Errors
    ///
    /// `UnknownView` / `UnknownObject` if the ids do not resolve,
    /// `NotAButton` if the object is not a button.
    pub fn bind_hover(&mut self, view: ViewId, object: ObjectId) -> Result<BindingId, Error> {
        self.ensure_button(view, object)?;
        Ok(self.bindings.bind_button(view, object, None))
    }

    /// Register hover tracking plus a click handler for a button. Handlers
    /// fire in registration order.
    ///
    /// # Errors
    ///
    /// `UnknownView` / `UnknownObject` if the ids do not resolve,
    /// `NotAButton` if the object is not a button.
    pub fn bind_click(
        &mut self,
        view: ViewId,
        object: ObjectId,
        handler: impl FnMut(&PointerEvent) + 'static,
    ) -> Result<BindingId, Error> {
        self.ensure_button(view, object)?;
        Ok(self.bindings.bind_button(view, object, Some(Box::new(handler))))
    }

    /// Map wheel input over the view's footprint to its scroll offset,
    /// moving `step` pixels per event in the delta's direction. Initializes
    /// the scroll offset if the view has none yet.
    ///
    /// # Errors
    ///
    /// `UnknownView` if the id does not resolve.
    pub fn bind_scroll(&mut self, view: ViewId, step: f64) -> Result<BindingId, Error> {
        let target = self.scene.view_mut(view)?;
        if target.scroll_offset.is_none() {
            target.scroll_offset = Some(Point::ZERO);
        }
        Ok(self.bindings.bind_scroll(view, step))
    }

    /// Deregister a binding. Unknown handles are ignored.
    pub fn unbind(&mut self, id: BindingId) {
        self.bindings.remove(id);
    }

    fn ensure_button(&self, view: ViewId, object: ObjectId) -> Result<(), Error> {
        let target = self.scene.view(view)?;
        let renderable = target
            .object(object)
            .ok_or(Error::UnknownObject { view, object })?;
        if renderable.as_button().is_none() {
            return Err(Error::NotAButton(object));
        }
        Ok(())
    }

    // --- Layer lifecycle ---

    /// Delete a layer, deregistering every contained button's bindings
    /// first so no stale callback can fire against destroyed state.
    ///
    /// # Errors
    ///
    /// `UnknownView` if the id does not resolve.
    pub fn delete_layer(&mut self, view: ViewId, z: i32) -> Result<(), Error> {
        let buttons = self.scene.view(view)?.buttons_in_layer(z);
        for object in buttons {
            self.bindings.remove_for_object(view, object);
        }
        self.scene.view_mut(view)?.delete_layer(z);
        Ok(())
    }

    // --- Event dispatch ---

    /// Route a pointer move: every bound button settles its hover state from
    /// the offset-corrected pointer position.
    pub fn on_pointer_move(&mut self, event: &PointerEvent) {
        let device = self.metrics.to_device(event.client);
        for i in 0..self.bindings.buttons.len() {
            let (view, object) = {
                let binding = &self.bindings.buttons[i];
                (binding.view, binding.object)
            };
            let Ok(offset) = self.scene.offset_of(view) else {
                continue;
            };
            let local = Point::new(device.x - offset.x, device.y - offset.y);
            let Ok(renderable) = self.scene.object_mut(view, object) else {
                continue;
            };
            if let Some(button) = renderable.as_button_mut() {
                button.update_hover(local);
            }
        }
    }

    /// Route a click: a button whose hover state is still unset (no move
    /// observed yet) evaluates it inline first; handlers then fire for every
    /// hovered button, in registration order.
    pub fn on_click(&mut self, event: &PointerEvent) {
        let device = self.metrics.to_device(event.client);
        let mut fired = Vec::new();

        for i in 0..self.bindings.buttons.len() {
            let (view, object) = {
                let binding = &self.bindings.buttons[i];
                (binding.view, binding.object)
            };
            let Ok(offset) = self.scene.offset_of(view) else {
                continue;
            };
            let local = Point::new(device.x - offset.x, device.y - offset.y);
            let Ok(renderable) = self.scene.object_mut(view, object) else {
                continue;
            };
            let Some(button) = renderable.as_button_mut() else {
                continue;
            };
            if button.hovering().is_none() {
                button.update_hover(local);
            }
            if button.hovering() == Some(true) && self.bindings.buttons[i].on_click.is_some() {
                fired.push(self.bindings.buttons[i].id);
            }
        }

        for id in fired {
            // Take the handler out so it can run without borrowing the
            // registry; it may itself unbind things.
            let Some(position) = self.bindings.buttons.iter().position(|b| b.id == id) else {
                continue;
            };
            let Some(mut handler) = self.bindings.buttons[position].on_click.take() else {
                continue;
            };
            handler(event);
            if let Some(position) = self.bindings.buttons.iter().position(|b| b.id == id) {
                self.bindings.buttons[position].on_click = Some(handler);
            }
        }
    }

    /// Route a wheel event: scroll bindings whose visible view footprint
    /// contains the device-space pointer pan their scroll offset.
    pub fn on_wheel(&mut self, event: &WheelEvent) {
        let device = self.metrics.to_device(event.client);
        for i in 0..self.bindings.scrolls.len() {
            let (view, step) = {
                let binding = &self.bindings.scrolls[i];
                (binding.view, binding.step)
            };
            let Ok(target) = self.scene.view_mut(view) else {
                continue;
            };
            if !target.visible {
                continue;
            }
            let inside = device.x >= target.origin.x
                && device.x < target.origin.x + target.width
                && device.y >= target.origin.y
                && device.y < target.origin.y + target.height;
            if !inside {
                continue;
            }
            if let Some(scroll) = &mut target.scroll_offset {
                if event.delta.dx != 0.0 {
                    scroll.x += event.delta.dx.signum() * step;
                }
                if event.delta.dy != 0.0 {
                    scroll.y += event.delta.dy.signum() * step;
                }
            }
        }
    }

    pub fn on_key_down(&mut self, key: &Key) {
        self.input.key_down(key);
    }

    pub fn on_key_up(&mut self, key: &Key) {
        self.input.key_up(key);
    }

    // --- Render ---

    /// Render the scene tree and fold the root view's timing into the
    /// smoothed telemetry.
    ///
    /// # Errors
    ///
    /// Propagates the first surface failure; the frame is abandoned and the
    /// scheduling loop decides whether to keep ticking.
    pub fn render<S: Surface<Image = I>>(
        &mut self,
        surface: &mut S,
        clock: &mut dyn Clock,
    ) -> Result<(), Error> {
        self.scene.render(surface, clock)?;
        let root = self.scene.root();
        let timing = *self.scene.view(root)?.timing();
        self.telemetry.record(&timing);
        Ok(())
    }

    /// Smoothed timing snapshot, `None` before the first rendered frame.
    #[must_use]
    pub fn telemetry(&self) -> Option<TelemetrySnapshot> {
        self.telemetry.snapshot()
    }

    /// Telemetry as JSON for a host stats overlay.
    #[must_use]
    pub fn telemetry_json(&self) -> String {
        self.telemetry.to_json()
    }
}
