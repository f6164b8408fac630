//! Rendering: draws a [`SceneDescription`] to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a fully resolved scene and produces pixels. It never looks at
//! editor state directly and does not mutate anything.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::geometry::Point;
use crate::scene::{SceneDescription, ScenePolygon, ScenePolyline, StrokeStyle};

/// Draw the full scene: polygons bottom-first, then the draft polyline.
///
/// `width` and `height` are the canvas size in CSS pixels.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, scene: &SceneDescription, width: f64, height: f64) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_line_dash(&js_sys::Array::new())?;

    for polygon in &scene.polygons {
        draw_polygon(ctx, polygon);
    }

    if let Some(line) = &scene.draft {
        draw_polyline(ctx, line);
    }

    Ok(())
}

fn draw_polygon(ctx: &CanvasRenderingContext2d, polygon: &ScenePolygon) {
    if !trace_path(ctx, &polygon.points) {
        return;
    }
    ctx.close_path();

    ctx.set_fill_style_str(&polygon.fill.to_hex());
    ctx.fill();

    apply_stroke_style(ctx, polygon.stroke);
    ctx.stroke();
}

fn draw_polyline(ctx: &CanvasRenderingContext2d, line: &ScenePolyline) {
    if !trace_path(ctx, &line.points) {
        return;
    }
    apply_stroke_style(ctx, line.stroke);
    ctx.stroke();
}

/// Begin a new path through `points`. Returns false (and draws nothing) when empty.
fn trace_path(ctx: &CanvasRenderingContext2d, points: &[Point]) -> bool {
    let Some((first, rest)) = points.split_first() else {
        return false;
    };
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    true
}

fn apply_stroke_style(ctx: &CanvasRenderingContext2d, style: StrokeStyle) {
    ctx.set_stroke_style_str(&style.color.to_hex());
    ctx.set_line_width(style.width);
}
