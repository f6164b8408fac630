use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::{self, Color};
use crate::config::EditorConfig;
use crate::consts::{CHANGE_COLOR_LABEL, MIN_POLYGON_POINTS, PICK_COLOR_LABEL, SELECT_HINT};
use crate::error::EditorError;
use crate::geometry::Point;
use crate::input::{Mode, Selection};
use crate::render;
use crate::scene::{self, SceneDescription, StylePalette};
use crate::store::{Polygon, ShapeStore};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from pointer handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A vertex was appended to the draft, which now holds `count` points.
    PointAdded { count: usize },
    /// The selected polygon changed (or was cleared).
    SelectionChanged(Option<usize>),
    /// The hovered polygon changed (or was cleared).
    HoverChanged(Option<usize>),
    /// The scene differs from the last one drawn.
    RenderNeeded,
}

/// One row of the polygon list shown next to the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolygonSummary {
    pub index: usize,
    /// One-based display label, e.g. `"Polygon #1"`.
    pub label: String,
    pub point_count: usize,
    pub color: Color,
    pub selected: bool,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// All mutation goes through the methods below; callers re-derive the scene
/// with [`EngineCore::scene`] after each one.
#[derive(Debug, Clone)]
pub struct EngineCore {
    store: ShapeStore,
    mode: Mode,
    selection: Selection,
    current_color: Color,
    styles: StylePalette,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(&EditorConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            store: ShapeStore::new(),
            mode: Mode::default(),
            selection: Selection::default(),
            current_color: config.initial_color,
            styles: config.styles,
        }
    }

    // --- Pointer input ---

    /// Handle a click at canvas-space `pt`.
    ///
    /// Drawing: appends `pt` to the draft. Browsing: selects the polygon under
    /// `pt`, or clears the selection on a miss.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        match &mut self.mode {
            Mode::Drawing { draft } => {
                draft.push(pt);
                tracing::debug!(x = pt.x, y = pt.y, points = draft.len(), "draft point added");
                vec![Action::PointAdded { count: draft.len() }, Action::RenderNeeded]
            }
            Mode::Browsing => {
                let hit = self.store.find_containing(pt);
                self.selection.selected = hit;
                tracing::debug!(x = pt.x, y = pt.y, selected = ?hit, "selection updated");
                vec![Action::SelectionChanged(hit), Action::RenderNeeded]
            }
        }
    }

    /// Handle pointer motion. Updates hover in every mode and never touches selection.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let hit = self.store.find_containing(pt);
        if hit == self.selection.hovered {
            return Vec::new();
        }
        self.selection.hovered = hit;
        vec![Action::HoverChanged(hit), Action::RenderNeeded]
    }

    // --- Commands ---

    /// Finalize the draft into a polygon filled with the current color.
    ///
    /// On success the draft is cleared, the editor switches to browsing, and
    /// the new polygon's index is returned.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::TooFewPoints`] when fewer than three vertices
    /// have been placed (always the case while browsing). Nothing changes.
    pub fn finish_polygon(&mut self) -> Result<usize, EditorError> {
        let have = self.mode.draft().len();
        if have < MIN_POLYGON_POINTS {
            tracing::warn!(have, need = MIN_POLYGON_POINTS, mode = self.mode.name(), "polygon finalization rejected");
            return Err(EditorError::TooFewPoints { have, need: MIN_POLYGON_POINTS });
        }

        let Mode::Drawing { draft } = std::mem::replace(&mut self.mode, Mode::Browsing) else {
            return Err(EditorError::TooFewPoints { have, need: MIN_POLYGON_POINTS });
        };
        // Length was checked above, so the draft always fits.
        let index = self.store.append(draft, self.current_color)?;
        tracing::debug!(index, points = have, color = %self.current_color, "polygon finished");
        Ok(index)
    }

    /// Drop the most recently placed draft vertex. Returns false when there was none.
    pub fn undo_last_point(&mut self) -> bool {
        let Mode::Drawing { draft } = &mut self.mode else {
            return false;
        };
        let removed = draft.pop().is_some();
        if removed {
            tracing::debug!(points = draft.len(), "draft point removed");
        }
        removed
    }

    /// Begin a new polygon. Returns false if a draft was already active.
    ///
    /// The selection is kept so the list and color input stay in sync.
    pub fn start_polygon(&mut self) -> bool {
        if self.mode.is_drawing() {
            return false;
        }
        self.mode = Mode::default();
        tracing::debug!("new polygon started");
        true
    }

    /// Set the current color. If a polygon is selected it is recolored too,
    /// and its index is returned.
    pub fn recolor_selected(&mut self, color: Color) -> Option<usize> {
        self.current_color = color;
        let index = self.selection.selected?;
        if !self.store.recolor(index, color) {
            return None;
        }
        tracing::debug!(index, color = %color, "polygon recolored");
        Some(index)
    }

    /// [`EngineCore::recolor_selected`] for a raw value from the color input.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidColor`] if `raw` is not `#rgb` or
    /// `#rrggbb`. Neither the current color nor any polygon changes.
    pub fn recolor_selected_hex(&mut self, raw: &str) -> Result<Option<usize>, EditorError> {
        let color = color::parse_hex(raw)?;
        Ok(self.recolor_selected(color))
    }

    /// Select polygon `index` directly (e.g. from the polygon list).
    /// Returns false, leaving the selection alone, if `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if !self.store.is_valid(index) {
            return false;
        }
        self.selection.selected = Some(index);
        true
    }

    /// Deselect without touching hover.
    pub fn clear_selection(&mut self) {
        self.selection.selected = None;
    }

    /// Remove every polygon and the draft, forget selection and hover, and
    /// go back to drawing.
    pub fn reset(&mut self) {
        self.store.clear();
        self.mode = Mode::default();
        self.selection.clear();
        tracing::debug!("canvas reset");
    }

    // --- Queries ---

    /// Derive the render description for the current state.
    #[must_use]
    pub fn scene(&self) -> SceneDescription {
        scene::build(&self.store, self.mode.draft(), self.selection.selected, self.selection.hovered, &self.styles)
    }

    #[must_use]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The in-progress vertices. Empty while browsing.
    #[must_use]
    pub fn draft(&self) -> &[Point] {
        self.mode.draft()
    }

    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selection.selected
    }

    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.selection.hovered
    }

    #[must_use]
    pub fn current_color(&self) -> Color {
        self.current_color
    }

    #[must_use]
    pub fn polygon_count(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        self.store.polygons()
    }

    /// Look up a polygon by index.
    #[must_use]
    pub fn polygon(&self, index: usize) -> Option<&Polygon> {
        self.store.get(index)
    }

    /// Rows for the polygon list display.
    #[must_use]
    pub fn polygon_list(&self) -> Vec<PolygonSummary> {
        self.store
            .iter()
            .enumerate()
            .map(|(index, polygon)| PolygonSummary {
                index,
                label: format!("Polygon #{}", index + 1),
                point_count: polygon.points().len(),
                color: polygon.color(),
                selected: self.selection.selected == Some(index),
            })
            .collect()
    }

    /// Instruction text to show under the canvas, if any.
    #[must_use]
    pub fn hint(&self) -> Option<&'static str> {
        let idle = !self.store.is_empty() && !self.mode.is_drawing() && self.selection.selected.is_none();
        idle.then_some(SELECT_HINT)
    }

    /// Label for the color input.
    #[must_use]
    pub fn color_label(&self) -> &'static str {
        if self.selection.selected.is_some() { CHANGE_COLOR_LABEL } else { PICK_COLOR_LABEL }
    }
}

/// The full editor. Wraps `EngineCore` and owns the browser canvas element.
///
/// Handlers only update state; the host calls [`Engine::render`] after any
/// handler (pointer actions carry [`Action::RenderNeeded`] when it matters).
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element, sized per `config`.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: &EditorConfig) -> Self {
        canvas.set_width(config.canvas_width);
        canvas.set_height(config.canvas_height);
        Self { canvas, core: EngineCore::with_config(config) }
    }

    // --- Delegated input ---

    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_down(pt)
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(pt)
    }

    // --- Delegated commands ---

    /// # Errors
    ///
    /// See [`EngineCore::finish_polygon`].
    pub fn finish_polygon(&mut self) -> Result<usize, EditorError> {
        self.core.finish_polygon()
    }

    pub fn undo_last_point(&mut self) -> bool {
        self.core.undo_last_point()
    }

    pub fn start_polygon(&mut self) -> bool {
        self.core.start_polygon()
    }

    /// # Errors
    ///
    /// See [`EngineCore::recolor_selected_hex`].
    pub fn recolor_selected_hex(&mut self, raw: &str) -> Result<Option<usize>, EditorError> {
        self.core.recolor_selected_hex(raw)
    }

    pub fn select(&mut self, index: usize) -> bool {
        self.core.select(index)
    }

    pub fn clear_selection(&mut self) {
        self.core.clear_selection();
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        render::draw(&ctx, &self.core.scene(), width, height)
    }
}
