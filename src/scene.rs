//! Scene builder: derives a render-ready description of the editor state.
//!
//! [`build`] is a pure function of the shape store, the draft, and the
//! selection. The renderer draws whatever it returns and nothing else, so the
//! picture on screen is always a function of current state. Recomputing the
//! whole scene after every change is cheap at interactive polygon counts.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::{BASE_LINE_WIDTH, DEFAULT_STROKE, EMPHASIS_LINE_WIDTH, HOVERED_STROKE, SELECTED_STROKE};
use crate::geometry::Point;
use crate::store::ShapeStore;

/// Outline color and width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

/// Which outline a polygon gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeKind {
    Default,
    Hovered,
    Selected,
}

/// Stroke styles for every outline the renderer draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylePalette {
    pub default: StrokeStyle,
    pub hovered: StrokeStyle,
    pub selected: StrokeStyle,
    /// Outline of the in-progress polyline.
    pub draft: StrokeStyle,
}

impl Default for StylePalette {
    fn default() -> Self {
        Self {
            default: StrokeStyle { color: DEFAULT_STROKE, width: BASE_LINE_WIDTH },
            hovered: StrokeStyle { color: HOVERED_STROKE, width: EMPHASIS_LINE_WIDTH },
            selected: StrokeStyle { color: SELECTED_STROKE, width: EMPHASIS_LINE_WIDTH },
            draft: StrokeStyle { color: SELECTED_STROKE, width: BASE_LINE_WIDTH },
        }
    }
}

impl StylePalette {
    #[must_use]
    pub fn for_kind(&self, kind: StrokeKind) -> StrokeStyle {
        match kind {
            StrokeKind::Default => self.default,
            StrokeKind::Hovered => self.hovered,
            StrokeKind::Selected => self.selected,
        }
    }
}

/// A closed, filled polygon ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenePolygon {
    /// Index of the polygon in the shape store.
    pub index: usize,
    pub points: Vec<Point>,
    pub fill: Color,
    pub kind: StrokeKind,
    pub stroke: StrokeStyle,
}

/// An open, unfilled polyline through the draft vertices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenePolyline {
    pub points: Vec<Point>,
    pub stroke: StrokeStyle,
}

/// Everything the renderer needs, in draw order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SceneDescription {
    /// Finalized polygons, bottom first.
    pub polygons: Vec<ScenePolygon>,
    /// The in-progress polyline, drawn over all polygons.
    pub draft: Option<ScenePolyline>,
}

/// Resolve the outline of polygon `index`. Selected wins over hovered.
#[must_use]
pub fn stroke_kind(index: usize, selected: Option<usize>, hovered: Option<usize>) -> StrokeKind {
    if selected == Some(index) {
        StrokeKind::Selected
    } else if hovered == Some(index) {
        StrokeKind::Hovered
    } else {
        StrokeKind::Default
    }
}

/// Derive the scene from current state.
///
/// `draft` is the in-progress vertex list; pass an empty slice when there is
/// no active draft.
#[must_use]
pub fn build(
    store: &ShapeStore,
    draft: &[Point],
    selected: Option<usize>,
    hovered: Option<usize>,
    palette: &StylePalette,
) -> SceneDescription {
    let polygons = store
        .iter()
        .enumerate()
        .map(|(index, polygon)| {
            let kind = stroke_kind(index, selected, hovered);
            ScenePolygon {
                index,
                points: polygon.points().to_vec(),
                fill: polygon.color(),
                kind,
                stroke: palette.for_kind(kind),
            }
        })
        .collect();

    let draft = (!draft.is_empty()).then(|| ScenePolyline { points: draft.to_vec(), stroke: palette.draft });

    SceneDescription { polygons, draft }
}
