//! Sprite renderables: static, animated, and orientation-selecting.
//!
//! Animated sprites are frame-driven state machines: every draw call advances
//! a tick counter and displays `frames[tick / ticks_per_frame]`. A
//! non-looping sprite stops advancing (and stops rendering) once the final
//! cycle would complete. Per-frame zoom scales the displayed box about its
//! center for that frame only; the stored box is never mutated, so nothing
//! leaks into the next tick.

#[cfg(test)]
#[path = "sprite_test.rs"]
mod sprite_test;

use crate::consts::{DEFAULT_TICKS_PER_FRAME, TILE_SIZE};
use crate::error::Error;
use crate::geom::Rect;
use crate::surface::{ImageSource, Surface};

/// A static sprite: one image drawn at its box, optionally scaled by a
/// per-instance zoom about the box center.
#[derive(Debug, Clone)]
pub struct Sprite<I> {
    /// Position and unscaled extent in view-local space.
    pub rect: Rect,
    /// Uniform scale applied about the box center at draw time.
    pub zoom: f64,
    image: I,
}

impl<I: ImageSource> Sprite<I> {
    /// Create a sprite from a decoded image at the default tile box.
    ///
    /// # Errors
    ///
    /// `InvalidAsset` if the image handle is not decoded.
    pub fn new(image: I) -> Result<Self, Error> {
        if !image.is_decoded() {
            return Err(Error::InvalidAsset);
        }
        Ok(Self {
            rect: Rect::new(0.0, 0.0, TILE_SIZE, TILE_SIZE),
            zoom: 1.0,
            image,
        })
    }

    /// Replace the displayed image.
    ///
    /// # Errors
    ///
    /// `InvalidAsset` if the new handle is not decoded.
    pub fn set_image(&mut self, image: I) -> Result<(), Error> {
        if !image.is_decoded() {
            return Err(Error::InvalidAsset);
        }
        self.image = image;
        Ok(())
    }

    #[must_use]
    pub fn image(&self) -> &I {
        &self.image
    }

    pub(crate) fn draw<S: Surface<Image = I>>(&self, surface: &mut S) -> Result<(), Error> {
        let x = self.rect.x - (self.rect.width * (self.zoom - 1.0)) / 2.0;
        let y = self.rect.y - (self.rect.height * (self.zoom - 1.0)) / 2.0;
        surface.draw_image(
            &self.image,
            x,
            y,
            self.rect.width * self.zoom,
            self.rect.height * self.zoom,
        )
    }
}

/// A looping or one-shot frame animation.
#[derive(Debug, Clone)]
pub struct AnimatedSprite<I> {
    /// Position and unscaled extent in view-local space.
    pub rect: Rect,
    frames: Vec<I>,
    frame: usize,
    ticks_per_frame: usize,
    looping: bool,
    zooms: Option<Vec<f64>>,
}

impl<I: ImageSource> AnimatedSprite<I> {
    /// Create a looping animation over `frames` at the default tile box.
    ///
    /// # Errors
    ///
    /// `EmptyAnimation` if `frames` is empty, `InvalidAsset` if any frame is
    /// not decoded.
    pub fn new(frames: Vec<I>) -> Result<Self, Error> {
        if frames.is_empty() {
            return Err(Error::EmptyAnimation);
        }
        if frames.iter().any(|f| !f.is_decoded()) {
            return Err(Error::InvalidAsset);
        }
        Ok(Self {
            rect: Rect::new(0.0, 0.0, TILE_SIZE, TILE_SIZE),
            frames,
            frame: 0,
            ticks_per_frame: DEFAULT_TICKS_PER_FRAME,
            looping: true,
            zooms: None,
        })
    }

    /// Hold each frame for `ticks` draw calls. Values below 1 clamp to 1.
    #[must_use]
    pub fn with_ticks_per_frame(mut self, ticks: usize) -> Self {
        self.ticks_per_frame = ticks.max(1);
        self
    }

    /// Whether the animation repeats. A non-looping animation freezes after
    /// its last frame and renders nothing from then on.
    #[must_use]
    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Per-frame zoom factors aligned with the frame list. Missing entries
    /// fall back to 1.0.
    #[must_use]
    pub fn with_frame_zooms(mut self, zooms: Vec<f64>) -> Self {
        self.zooms = Some(zooms);
        self
    }

    /// The frame currently displayed.
    #[must_use]
    pub fn frame_index(&self) -> usize {
        self.frame / self.ticks_per_frame
    }

    /// Whether a non-looping animation has reached its end.
    #[must_use]
    pub fn finished(&self) -> bool {
        !self.looping && self.frame + 1 == self.frames.len() * self.ticks_per_frame
    }

    pub(crate) fn draw<S: Surface<Image = I>>(&mut self, surface: &mut S) -> Result<(), Error> {
        if self.finished() {
            return Ok(());
        }
        self.frame = (self.frame + 1) % (self.frames.len() * self.ticks_per_frame);
        let idx = self.frame / self.ticks_per_frame;

        draw_zoomed_frame(surface, &self.frames[idx], self.rect, frame_zoom(&self.zooms, idx))
    }
}

/// One of the four cardinal facing directions, keyed by degrees in the
/// original tileset convention: 0 = north, 90 = east, 180 = south, 270 = west.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// Map a tileset degree value to an orientation.
    #[must_use]
    pub fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees {
            0 => Some(Self::North),
            90 => Some(Self::East),
            180 => Some(Self::South),
            270 => Some(Self::West),
            _ => None,
        }
    }

    #[must_use]
    pub fn degrees(self) -> u32 {
        match self {
            Self::North => 0,
            Self::East => 90,
            Self::South => 180,
            Self::West => 270,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }
}

/// An animated sprite with one frame list per facing direction.
///
/// The tick counter is owned here, not per orientation: switching orientation
/// takes effect on the next draw and does not reset the animation phase.
#[derive(Debug, Clone)]
pub struct DirectionalAnimatedSprite<I> {
    /// Position and unscaled extent in view-local space.
    pub rect: Rect,
    /// The facing direction whose animation is displayed.
    pub orientation: Orientation,
    animations: [Vec<I>; 4],
    frame: usize,
    ticks_per_frame: usize,
    zooms: Option<Vec<f64>>,
}

impl<I: ImageSource> DirectionalAnimatedSprite<I> {
    /// Create a directional animation facing south.
    ///
    /// # Errors
    ///
    /// `EmptyAnimation` if any orientation's frame list is empty,
    /// `InvalidAsset` if any frame is not decoded.
    pub fn new(north: Vec<I>, east: Vec<I>, south: Vec<I>, west: Vec<I>) -> Result<Self, Error> {
        let animations = [north, east, south, west];
        if animations.iter().any(Vec::is_empty) {
            return Err(Error::EmptyAnimation);
        }
        if animations.iter().flatten().any(|f| !f.is_decoded()) {
            return Err(Error::InvalidAsset);
        }
        Ok(Self {
            rect: Rect::new(0.0, 0.0, TILE_SIZE, TILE_SIZE),
            orientation: Orientation::South,
            animations,
            frame: 0,
            ticks_per_frame: DEFAULT_TICKS_PER_FRAME,
            zooms: None,
        })
    }

    /// Hold each frame for `ticks` draw calls. Values below 1 clamp to 1.
    #[must_use]
    pub fn with_ticks_per_frame(mut self, ticks: usize) -> Self {
        self.ticks_per_frame = ticks.max(1);
        self
    }

    /// Per-frame zoom factors shared by all orientations.
    #[must_use]
    pub fn with_frame_zooms(mut self, zooms: Vec<f64>) -> Self {
        self.zooms = Some(zooms);
        self
    }

    /// The frame currently displayed within the active orientation.
    #[must_use]
    pub fn frame_index(&self) -> usize {
        self.frame / self.ticks_per_frame
    }

    pub(crate) fn draw<S: Surface<Image = I>>(&mut self, surface: &mut S) -> Result<(), Error> {
        let frames = &self.animations[self.orientation.index()];
        self.frame = (self.frame + 1) % (frames.len() * self.ticks_per_frame);
        let idx = self.frame / self.ticks_per_frame;

        draw_zoomed_frame(surface, &frames[idx], self.rect, frame_zoom(&self.zooms, idx))
    }
}

fn frame_zoom(zooms: &Option<Vec<f64>>, idx: usize) -> f64 {
    zooms
        .as_ref()
        .and_then(|z| z.get(idx))
        .copied()
        .unwrap_or(1.0)
}

/// Draw one frame into `rect` scaled by `zoom` about the rect center.
fn draw_zoomed_frame<S: Surface>(
    surface: &mut S,
    frame: &S::Image,
    rect: Rect,
    zoom: f64,
) -> Result<(), Error> {
    let width = rect.width * zoom;
    let height = rect.height * zoom;
    let x = rect.x - (width - rect.width) / 2.0;
    let y = rect.y - (height - rect.height) / 2.0;
    surface.draw_image(frame, x, y, width, height)
}
