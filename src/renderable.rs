//! The renderable record: paint priority, visibility, bounding box, and draw
//! dispatch over a closed set of entity kinds.
//!
//! Instead of an inheritance chain, a [`Renderable`] is a flat record wrapping
//! one [`RenderableKind`] variant. Views own renderables keyed by
//! [`ObjectId`]; the z value is fixed once the object is placed in a layer —
//! moving it requires explicit removal and re-insertion.

use uuid::Uuid;

use crate::error::Error;
use crate::geom::Rect;
use crate::sprite::{AnimatedSprite, DirectionalAnimatedSprite, Sprite};
use crate::surface::{ImageSource, Surface};
use crate::text::Text;
use crate::widget::{Button, ColorTile, CooldownRing, FilledCircle, LoadingSpinner};

/// Unique identifier for a renderable within a view.
pub type ObjectId = Uuid;

/// Loading spinners sit above most scene content by default.
const SPINNER_DEFAULT_Z: i32 = 2;

/// The closed set of renderable entities.
#[derive(Debug)]
pub enum RenderableKind<I> {
    Sprite(Sprite<I>),
    Animated(AnimatedSprite<I>),
    Directional(DirectionalAnimatedSprite<I>),
    ColorTile(ColorTile),
    FilledCircle(FilledCircle),
    Cooldown(CooldownRing),
    Spinner(LoadingSpinner),
    Text(Text),
    Button(Button),
}

/// A drawable object owned by a view layer.
#[derive(Debug)]
pub struct Renderable<I> {
    z: i32,
    visible: bool,
    kind: RenderableKind<I>,
}

impl<I: ImageSource> Renderable<I> {
    /// Wrap a kind with its conventional defaults: sprites start hidden
    /// until the host has positioned them, everything else starts visible;
    /// spinners default to an elevated z.
    #[must_use]
    pub fn new(kind: RenderableKind<I>) -> Self {
        let visible = !matches!(
            kind,
            RenderableKind::Sprite(_) | RenderableKind::Animated(_) | RenderableKind::Directional(_)
        );
        let z = match kind {
            RenderableKind::Spinner(_) => SPINNER_DEFAULT_Z,
            _ => 0,
        };
        Self { z, visible, kind }
    }

    #[must_use]
    pub fn sprite(sprite: Sprite<I>) -> Self {
        Self::new(RenderableKind::Sprite(sprite))
    }

    #[must_use]
    pub fn animated(sprite: AnimatedSprite<I>) -> Self {
        Self::new(RenderableKind::Animated(sprite))
    }

    #[must_use]
    pub fn directional(sprite: DirectionalAnimatedSprite<I>) -> Self {
        Self::new(RenderableKind::Directional(sprite))
    }

    #[must_use]
    pub fn color_tile(tile: ColorTile) -> Self {
        Self::new(RenderableKind::ColorTile(tile))
    }

    #[must_use]
    pub fn filled_circle(circle: FilledCircle) -> Self {
        Self::new(RenderableKind::FilledCircle(circle))
    }

    #[must_use]
    pub fn cooldown(ring: CooldownRing) -> Self {
        Self::new(RenderableKind::Cooldown(ring))
    }

    #[must_use]
    pub fn spinner(spinner: LoadingSpinner) -> Self {
        Self::new(RenderableKind::Spinner(spinner))
    }

    #[must_use]
    pub fn text(text: Text) -> Self {
        Self::new(RenderableKind::Text(text))
    }

    #[must_use]
    pub fn button(button: Button) -> Self {
        Self::new(RenderableKind::Button(button))
    }

    /// Set the paint priority. Only meaningful before insertion into a view;
    /// consuming `self` makes re-prioritizing an already-inserted object
    /// require explicit removal first.
    #[must_use]
    pub fn with_z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }

    /// Show or hide immediately without changing layer membership.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn z(&self) -> i32 {
        self.z
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[must_use]
    pub fn kind(&self) -> &RenderableKind<I> {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut RenderableKind<I> {
        &mut self.kind
    }

    #[must_use]
    pub fn as_button(&self) -> Option<&Button> {
        match &self.kind {
            RenderableKind::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_button_mut(&mut self) -> Option<&mut Button> {
        match &mut self.kind {
            RenderableKind::Button(button) => Some(button),
            _ => None,
        }
    }

    /// Axis-aligned bounding box in view-local space, used for culling.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match &self.kind {
            RenderableKind::Sprite(s) => s.rect,
            RenderableKind::Animated(s) => s.rect,
            RenderableKind::Directional(s) => s.rect,
            RenderableKind::ColorTile(t) => t.rect,
            RenderableKind::FilledCircle(c) => c.circle.bounding_box(),
            RenderableKind::Cooldown(r) => r.circle.bounding_box(),
            RenderableKind::Spinner(s) => s.circle.bounding_box(),
            RenderableKind::Text(t) => t.bounds(),
            RenderableKind::Button(b) => b.rect,
        }
    }

    pub(crate) fn draw<S: Surface<Image = I>>(&mut self, surface: &mut S) -> Result<(), Error> {
        match &mut self.kind {
            RenderableKind::Sprite(s) => s.draw(surface),
            RenderableKind::Animated(s) => s.draw(surface),
            RenderableKind::Directional(s) => s.draw(surface),
            RenderableKind::ColorTile(t) => {
                t.draw(surface);
                Ok(())
            }
            RenderableKind::FilledCircle(c) => c.draw(surface),
            RenderableKind::Cooldown(r) => r.draw(surface),
            RenderableKind::Spinner(s) => s.draw(surface),
            RenderableKind::Text(t) => t.draw(surface),
            RenderableKind::Button(b) => {
                b.draw(surface);
                Ok(())
            }
        }
    }
}
