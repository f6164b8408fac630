//! Input model: the drawing/browsing mode and the transient selection state.
//!
//! [`Mode`] replaces a "closed" flag with an explicit tagged state. While
//! `Drawing`, pointer-down places vertices into the draft that the variant
//! owns; while `Browsing`, pointer-down selects existing polygons. Because the
//! draft lives inside `Drawing`, there is no way to hold a draft while
//! browsing.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::Serialize;

use crate::geometry::Point;

/// Which interaction mode the editor is in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Mode {
    /// Placing vertices for a new polygon.
    Drawing {
        /// Vertices placed so far, in click order. May be empty.
        draft: Vec<Point>,
    },
    /// No active draft; pointer-down picks existing polygons.
    Browsing,
}

impl Default for Mode {
    fn default() -> Self {
        Self::Drawing { draft: Vec::new() }
    }
}

impl Mode {
    /// Whether pointer-down currently places vertices.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    /// The in-progress vertices. Always empty while browsing.
    #[must_use]
    pub fn draft(&self) -> &[Point] {
        match self {
            Self::Drawing { draft } => draft,
            Self::Browsing => &[],
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Drawing { .. } => "drawing",
            Self::Browsing => "browsing",
        }
    }
}

/// Selection and hover, as indices into the shape store.
///
/// Neither owns anything. Both are cleared whenever the store is cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Polygon picked by the last click (or list entry).
    pub selected: Option<usize>,
    /// Polygon currently under the pointer.
    pub hovered: Option<usize>,
}

impl Selection {
    /// Forget both selection and hover.
    pub fn clear(&mut self) {
        self.selected = None;
        self.hovered = None;
    }
}
