//! Shared numeric constants for the scene crate.

// ── Sprites ─────────────────────────────────────────────────────

/// Default edge length of a sprite or color tile, in world units.
pub const TILE_SIZE: f64 = 16.0;

/// Default number of render ticks each animation frame is held for.
pub const DEFAULT_TICKS_PER_FRAME: usize = 6;

// ── Text ────────────────────────────────────────────────────────

/// Default font size in pixels.
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Default font family.
pub const DEFAULT_FONT: &str = "Arial";

/// Default text fill color.
pub const TEXT_COLOR: &str = "#F00";

// ── Widgets ─────────────────────────────────────────────────────

/// Primary widget color (cooldown ring base, filled circle, spinner).
pub const WIDGET_PRIMARY_COLOR: &str = "#418eb0";

/// Secondary widget color (cooldown ring progress arc).
pub const WIDGET_SECONDARY_COLOR: &str = "#3f3656";

/// Button idle fill color.
pub const BUTTON_COLOR: &str = "#555";

/// Button hovered fill color.
pub const BUTTON_HOVER_COLOR: &str = "#777";

/// Ticks for one full spinner revolution.
pub const SPINNER_TICKS_PER_ROTATION: u32 = 180;

/// How much faster the spinner's trailing endpoint sweeps than the leading one.
pub const SPINNER_CHASE_SPEED: f64 = 2.4;

/// Spinner stroke width in world units.
pub const SPINNER_LINE_WIDTH: f64 = 15.0;

// ── Telemetry ───────────────────────────────────────────────────

/// Number of frames the fps/frametime rolling averages smooth over.
pub const TELEMETRY_WINDOW: usize = 5;
