//! Crate error type.
//!
//! Construction-time failures (bad assets, empty animations, unknown arena
//! ids) fail fast. Render-time failures from the drawing surface propagate
//! out of the enclosing `render` call for that frame; the scheduling loop
//! decides whether to retry on the next tick or stop scheduling.

use thiserror::Error;
use uuid::Uuid;

/// Errors produced by the scene engine.
#[derive(Debug, Error)]
pub enum Error {
    /// A sprite was constructed from an image handle that is not decoded.
    #[error("image handle is not a decoded image")]
    InvalidAsset,

    /// An animated sprite was constructed with zero frames, or a directional
    /// sprite with an empty orientation animation.
    #[error("animation must have at least one frame")]
    EmptyAnimation,

    /// A view id did not resolve in the scene arena.
    #[error("unknown view {0}")]
    UnknownView(Uuid),

    /// An object id did not resolve within the given view.
    #[error("view {view} has no object {object}")]
    UnknownObject {
        /// The view that was searched.
        view: Uuid,
        /// The object id that was not found.
        object: Uuid,
    },

    /// A binding was requested for an object that is not a button.
    #[error("object {0} is not a button")]
    NotAButton(Uuid),

    /// The drawing surface backend reported a failure.
    #[error("drawing surface failure: {0}")]
    Surface(String),
}
