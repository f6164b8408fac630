//! Shared numeric, color, and text constants for the editor crate.

use crate::color::Color;

// ── Geometry ────────────────────────────────────────────────────

/// Bias added to the edge height in the ray-casting intercept so that
/// horizontal edges never divide by zero.
pub const HIT_EPSILON: f64 = 1e-5;

/// Smallest vertex count that can be finalized into a polygon.
pub const MIN_POLYGON_POINTS: usize = 3;

// ── Canvas ──────────────────────────────────────────────────────

/// Default drawing surface width in CSS pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;

/// Default drawing surface height in CSS pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

// ── Colors ──────────────────────────────────────────────────────

/// Fill used for new polygons until the user picks another color.
pub const DEFAULT_FILL: Color = Color::rgb(0x00, 0x96, 0xff);

/// Outline of polygons that are neither selected nor hovered.
pub const DEFAULT_STROKE: Color = Color::rgb(0x80, 0x80, 0x80);

/// Outline of the polygon under the pointer.
pub const HOVERED_STROKE: Color = Color::rgb(0xff, 0xa5, 0x00);

/// Outline of the selected polygon and of the in-progress polyline.
pub const SELECTED_STROKE: Color = Color::rgb(0x00, 0x00, 0x00);

/// Line width of emphasized (selected or hovered) outlines.
pub const EMPHASIS_LINE_WIDTH: f64 = 2.0;

/// Line width of plain outlines and the in-progress polyline.
pub const BASE_LINE_WIDTH: f64 = 1.0;

// ── UI text ─────────────────────────────────────────────────────

/// Hint shown once polygons exist and nothing is being drawn or selected.
pub const SELECT_HINT: &str = "Click to select a polygon";

/// Color picker label while a polygon is selected.
pub const CHANGE_COLOR_LABEL: &str = "Change Color:";

/// Color picker label while nothing is selected.
pub const PICK_COLOR_LABEL: &str = "Pick Color:";
