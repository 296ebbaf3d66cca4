//! Drawing-surface and clock contracts consumed by the engine.
//!
//! The engine never touches the browser directly; everything it needs from
//! the outside world is expressed as one of three traits. [`Surface`] is a
//! 2D drawing target restricted to the operations the renderer actually
//! uses — uniform scale + translate transforms, rectangles, images, arcs,
//! and text. [`ImageSource`] is a decoded image handle. [`Clock`] supplies
//! monotonic wall-clock milliseconds for frame timing.
//!
//! The [`crate::web`] module implements all three over the browser canvas;
//! tests implement them with recording doubles.

use crate::error::Error;

/// A decoded image handle usable by sprites.
pub trait ImageSource {
    /// Whether the handle refers to a fully decoded image.
    fn is_decoded(&self) -> bool;

    /// Intrinsic width in pixels.
    fn width(&self) -> f64;

    /// Intrinsic height in pixels.
    fn height(&self) -> f64;
}

/// A 2D drawing target.
///
/// Transform support is deliberately limited to uniform scale plus translate;
/// the engine never rotates or shears. Fallible operations return `Err` when
/// the backend rejects a call, and the error propagates out of the enclosing
/// render for that frame.
pub trait Surface {
    /// The image handle type this surface can draw.
    type Image: ImageSource;

    /// Replace the current transform with `scale` + `translate`.
    fn set_transform(
        &mut self,
        scale_x: f64,
        scale_y: f64,
        translate_x: f64,
        translate_y: f64,
    ) -> Result<(), Error>;

    /// Reset the transform to identity.
    fn reset_transform(&mut self) -> Result<(), Error> {
        self.set_transform(1.0, 1.0, 0.0, 0.0)
    }

    /// Fill a rectangle with the current fill style.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Draw `image` scaled into the given box.
    fn draw_image(
        &mut self,
        image: &Self::Image,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), Error>;

    /// Start a new path.
    fn begin_path(&mut self);

    /// Append a circular arc to the current path. Angles are in radians.
    fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<(), Error>;

    /// Stroke the current path.
    fn stroke(&mut self);

    /// Fill the current path.
    fn fill(&mut self);

    fn set_line_width(&mut self, width: f64);

    fn set_stroke_style(&mut self, style: &str);

    fn set_fill_style(&mut self, style: &str);

    /// Set the font used by text drawing and measurement, e.g. `"12px Arial"`.
    fn set_font(&mut self, font: &str);

    /// Fill `text` with the current fill style and font.
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Error>;

    /// Stroke `text` with the current stroke style and font.
    fn stroke_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Error>;

    /// Measured pixel width of `text` under the current font.
    fn measure_text(&mut self, text: &str) -> f64;
}

/// Monotonic wall-clock time source for frame timing.
pub trait Clock {
    /// Current time in milliseconds. Only differences are meaningful.
    fn now_ms(&mut self) -> f64;
}
