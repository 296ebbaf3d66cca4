//! 2D scene-graph rendering engine for a canvas game client.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns a
//! tree of transform-carrying view nodes, each holding z-ordered layers of
//! renderable objects: sprites and frame-driven sprite animations, color
//! tiles, word-wrapped text, circular widgets, and interactive buttons. Once
//! per animation tick the host invokes the root view's render, which composes
//! nested coordinate transforms, culls off-viewport objects, paints layers in
//! ascending z, and recurses into children. Pointer events are mapped from
//! CSS pixels through the backing store into view-local space for button
//! hit-testing. The host JavaScript layer is responsible only for wiring DOM
//! events to the engine and scheduling frames.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine: scene + bindings + telemetry |
//! | [`view`] | View tree, transforms, layers, culling, render |
//! | [`renderable`] | Renderable record and draw dispatch |
//! | [`sprite`] | Static, animated, and directional sprites |
//! | [`widget`] | Tiles, circular widgets, and buttons |
//! | [`text`] | Word-wrapped drawable text |
//! | [`input`] | Events, device-pixel mapping, binding registry |
//! | [`surface`] | Drawing-surface / image / clock contracts |
//! | [`telemetry`] | Rolling averages and frame-timing stats |
//! | [`geom`] | Point, rectangle, circle, viewport bounds |
//! | [`web`] | web-sys implementations of the contracts |
//! | [`error`] | Crate error type |
//! | [`consts`] | Shared numeric constants |

pub mod consts;
pub mod engine;
pub mod error;
pub mod geom;
pub mod input;
pub mod renderable;
pub mod sprite;
pub mod surface;
pub mod telemetry;
pub mod text;
pub mod view;
pub mod web;
pub mod widget;

#[cfg(test)]
#[path = "test_support.rs"]
pub(crate) mod test_support;
