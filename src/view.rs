//! The view tree: nested coordinate transforms, z-ordered layers, viewport
//! culling, and per-node frame timing.
//!
//! Views live in a [`Scene`] arena keyed by [`ViewId`]. The parent-pointer
//! transform walk is only sound while the graph is a tree, so attachment
//! consumes the child node: a view is added under exactly one parent, exactly
//! once, and can never be re-parented.
//!
//! Rendering a view composes its accumulated device-space offset with its
//! zoom into a uniform scale + translate transform, paints its own layers in
//! ascending z (insertion order within a layer), resets the transform, then
//! recurses into children — each child renders in its own coordinate space.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::collections::{BTreeMap, HashMap};

use uuid::Uuid;

use crate::error::Error;
use crate::geom::{Bounds, Point};
use crate::renderable::{ObjectId, Renderable};
use crate::surface::{Clock, ImageSource, Surface};
use crate::telemetry::FrameTiming;

/// Unique identifier for a view in the scene arena.
pub type ViewId = Uuid;

/// Accumulated device-space translation for a view, plus the world-space
/// top-left currently visible through it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    /// Device-space x translation.
    pub x: f64,
    /// Device-space y translation.
    pub y: f64,
    /// World-space top-left of the visible area (camera/scroll compensation).
    pub center_mod: Point,
}

/// A composable rendering scope: a coordinate transform plus z-ordered
/// object layers and child views.
#[derive(Debug)]
pub struct View<I> {
    /// Top-left corner in the parent's coordinate space.
    pub origin: Point,
    /// Footprint width in parent space.
    pub width: f64,
    /// Footprint height in parent space.
    pub height: f64,
    /// World-space point kept centered in the visible area, if any.
    pub camera_center: Option<Point>,
    /// Extra translation for views that pan independently of the camera.
    pub scroll_offset: Option<Point>,
    /// Uniform scale factor applied to this view's own layers.
    pub zoom: f64,
    /// Invisible views skip rendering entirely, children included.
    pub visible: bool,
    layers: BTreeMap<i32, Vec<ObjectId>>,
    objects: HashMap<ObjectId, Renderable<I>>,
    children: Vec<ViewId>,
    parent: Option<ViewId>,
    timing: FrameTiming,
}

impl<I: ImageSource> View<I> {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
            camera_center: None,
            scroll_offset: None,
            zoom: 1.0,
            visible: true,
            layers: BTreeMap::new(),
            objects: HashMap::new(),
            children: Vec::new(),
            parent: None,
            timing: FrameTiming::default(),
        }
    }

    /// A view that starts with a zero scroll offset, ready to be panned by a
    /// wheel binding.
    #[must_use]
    pub fn scrollable(x: f64, y: f64, width: f64, height: f64) -> Self {
        let mut view = Self::new(x, y, width, height);
        view.scroll_offset = Some(Point::ZERO);
        view
    }

    #[must_use]
    pub fn children(&self) -> &[ViewId] {
        &self.children
    }

    #[must_use]
    pub fn parent(&self) -> Option<ViewId> {
        self.parent
    }

    /// Raw frame timing from this view's last render.
    #[must_use]
    pub fn timing(&self) -> &FrameTiming {
        &self.timing
    }

    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&Renderable<I>> {
        self.objects.get(&id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Renderable<I>> {
        self.objects.get_mut(&id)
    }

    /// Insert a renderable into the layer keyed by its own z, creating the
    /// layer lazily. The z is fixed from here on.
    pub fn add_object(&mut self, renderable: Renderable<I>) -> ObjectId {
        let id = Uuid::new_v4();
        self.layers.entry(renderable.z()).or_default().push(id);
        self.objects.insert(id, renderable);
        id
    }

    /// Insert several renderables, each into its own z layer.
    pub fn add_objects(
        &mut self,
        renderables: impl IntoIterator<Item = Renderable<I>>,
    ) -> Vec<ObjectId> {
        renderables.into_iter().map(|r| self.add_object(r)).collect()
    }

    /// Remove an object from the layer it claims to be in (defaults to its
    /// own z). Removing an object absent from that layer is a silent no-op,
    /// not an error.
    pub fn remove_object(&mut self, id: ObjectId, layer: Option<i32>) -> Option<Renderable<I>> {
        let z = match layer {
            Some(z) => z,
            None => self.objects.get(&id)?.z(),
        };
        let Some(ids) = self.layers.get_mut(&z) else {
            tracing::debug!(object = %id, layer = z, "remove_object: no such layer");
            return None;
        };
        let Some(index) = ids.iter().position(|other| *other == id) else {
            tracing::debug!(object = %id, layer = z, "remove_object: not in claimed layer");
            return None;
        };
        ids.remove(index);
        self.objects.remove(&id)
    }

    /// Ids in the given layer, in insertion order. Empty when the layer was
    /// never created.
    #[must_use]
    pub fn layer_objects(&self, z: i32) -> &[ObjectId] {
        self.layers.get(&z).map_or(&[], Vec::as_slice)
    }

    /// Ids of the buttons currently in the given layer.
    #[must_use]
    pub fn buttons_in_layer(&self, z: i32) -> Vec<ObjectId> {
        self.layer_objects(z)
            .iter()
            .filter(|id| self.objects.get(id).is_some_and(|r| r.as_button().is_some()))
            .copied()
            .collect()
    }

    /// Discard a whole layer, returning the removed objects' ids.
    ///
    /// Callers holding button bindings must deregister them first; the
    /// engine-level wrapper does this.
    pub fn delete_layer(&mut self, z: i32) -> Vec<ObjectId> {
        let Some(ids) = self.layers.remove(&z) else {
            return Vec::new();
        };
        tracing::debug!(layer = z, objects = ids.len(), "deleting layer");
        for id in &ids {
            self.objects.remove(id);
        }
        ids
    }

    /// This view's own contribution to the accumulated device offset.
    ///
    /// The camera term works at zoom level while the origin works at view
    /// level: centering `camera_center` means translating by
    /// `-(camera · zoom − half_footprint)`.
    fn local_offset(&self) -> (f64, f64) {
        let mut x = self.origin.x;
        let mut y = self.origin.y;

        if let Some(center) = self.camera_center {
            x -= center.x * self.zoom - self.width / 2.0;
            y -= center.y * self.zoom - self.height / 2.0;
        }
        if let Some(scroll) = self.scroll_offset {
            x -= scroll.x;
            y -= scroll.y;
        }
        (x, y)
    }

    /// World-space top-left visible through this view. Unlike the offset,
    /// this never includes ancestor contributions.
    fn center_mod(&self) -> Point {
        let mut m = Point::ZERO;
        if let Some(center) = self.camera_center {
            m.x += center.x - self.width / 2.0;
            m.y += center.y - self.height / 2.0;
        }
        if let Some(scroll) = self.scroll_offset {
            m.x += scroll.x;
            m.y += scroll.y;
        }
        m
    }
}

/// Arena of views forming a single tree rooted at [`Scene::root`].
#[derive(Debug)]
pub struct Scene<I> {
    views: HashMap<ViewId, View<I>>,
    root: ViewId,
}

impl<I: ImageSource> Scene<I> {
    /// Create a scene from its root view.
    #[must_use]
    pub fn new(root: View<I>) -> Self {
        let id = Uuid::new_v4();
        let mut views = HashMap::new();
        views.insert(id, root);
        Self { views, root: id }
    }

    #[must_use]
    pub fn root(&self) -> ViewId {
        self.root
    }

    /// Look up a view.
    ///
    /// # Errors
    ///
    /// `UnknownView` if the id does not resolve.
    pub fn view(&self, id: ViewId) -> Result<&View<I>, Error> {
        self.views.get(&id).ok_or(Error::UnknownView(id))
    }

    /// Look up a view mutably.
    ///
    /// # Errors
    ///
    /// `UnknownView` if the id does not resolve.
    pub fn view_mut(&mut self, id: ViewId) -> Result<&mut View<I>, Error> {
        self.views.get_mut(&id).ok_or(Error::UnknownView(id))
    }

    /// Attach `child` under `parent`, consuming the node. Consuming makes
    /// double-insertion and re-parenting unrepresentable, which keeps the
    /// parent-pointer walk in [`Scene::offset_of`] sound.
    ///
    /// # Errors
    ///
    /// `UnknownView` if `parent` does not resolve.
    pub fn attach(&mut self, parent: ViewId, mut child: View<I>) -> Result<ViewId, Error> {
        if !self.views.contains_key(&parent) {
            return Err(Error::UnknownView(parent));
        }
        let id = Uuid::new_v4();
        child.parent = Some(parent);
        self.views.insert(id, child);
        if let Some(parent_view) = self.views.get_mut(&parent) {
            parent_view.children.push(id);
        }
        Ok(id)
    }

    /// Insert a renderable into a view's layer registry.
    ///
    /// # Errors
    ///
    /// `UnknownView` if `view` does not resolve.
    pub fn add_object(&mut self, view: ViewId, renderable: Renderable<I>) -> Result<ObjectId, Error> {
        Ok(self.view_mut(view)?.add_object(renderable))
    }

    /// Mutable access to a renderable for host-side attribute updates.
    ///
    /// # Errors
    ///
    /// `UnknownView` / `UnknownObject` if either id does not resolve.
    pub fn object_mut(&mut self, view: ViewId, object: ObjectId) -> Result<&mut Renderable<I>, Error> {
        self.view_mut(view)?
            .object_mut(object)
            .ok_or(Error::UnknownObject { view, object })
    }

    /// Accumulated device-space offset for a view: its own camera/scroll
    /// compensation plus every ancestor's. Ancestors contribute only their
    /// screen offsets — `center_mod` comes from the view itself alone.
    ///
    /// # Errors
    ///
    /// `UnknownView` if the id (or a stale parent link) does not resolve.
    pub fn offset_of(&self, id: ViewId) -> Result<Offset, Error> {
        let mut x = 0.0;
        let mut y = 0.0;
        let mut center_mod = Point::ZERO;

        let mut current = Some(id);
        let mut is_target = true;
        while let Some(vid) = current {
            let view = self.view(vid)?;
            let (dx, dy) = view.local_offset();
            x += dx;
            y += dy;
            if is_target {
                center_mod = view.center_mod();
                is_target = false;
            }
            current = view.parent;
        }

        Ok(Offset { x, y, center_mod })
    }

    /// Render the whole tree starting at the root.
    ///
    /// # Errors
    ///
    /// Propagates the first surface failure; the frame is abandoned and
    /// recovery is the scheduler's responsibility.
    pub fn render<S: Surface<Image = I>>(
        &mut self,
        surface: &mut S,
        clock: &mut dyn Clock,
    ) -> Result<(), Error> {
        let root = self.root;
        self.render_view(root, surface, clock)
    }

    fn render_view<S: Surface<Image = I>>(
        &mut self,
        id: ViewId,
        surface: &mut S,
        clock: &mut dyn Clock,
    ) -> Result<(), Error> {
        if !self.view(id)?.visible {
            return Ok(());
        }
        let start = clock.now_ms();
        let offset = self.offset_of(id)?;

        let view = self.views.get_mut(&id).ok_or(Error::UnknownView(id))?;
        let bounds = Bounds::viewport(offset.center_mod, view.width, view.height);
        let children = view.children.clone();

        surface.set_transform(view.zoom, view.zoom, offset.x, offset.y)?;
        for ids in view.layers.values() {
            for object_id in ids {
                let Some(object) = view.objects.get_mut(object_id) else {
                    continue;
                };
                if !object.visible() {
                    continue;
                }
                if !bounds.intersects(&object.bounds()) {
                    continue;
                }
                object.draw(surface)?;
            }
        }
        surface.reset_transform()?;

        // Children render in their own coordinate space.
        for child in children {
            self.render_view(child, surface, clock)?;
        }

        let end = clock.now_ms();
        let view = self.views.get_mut(&id).ok_or(Error::UnknownView(id))?;
        view.timing.mark_frame(start, end);
        Ok(())
    }
}
