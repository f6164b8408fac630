//! Shape store: the finalized polygons and their identity rules.
//!
//! A polygon's identity is its position in the store. Polygons are only ever
//! appended, and the list is only ever cleared as a whole, so an index handed
//! out by [`ShapeStore::append`] stays valid until the next [`ShapeStore::clear`].
//! Selection and hover state elsewhere in the crate rely on that.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::Serialize;

use crate::color::Color;
use crate::consts::MIN_POLYGON_POINTS;
use crate::error::EditorError;
use crate::geometry::{self, Point};

/// A finalized, filled polygon.
///
/// The vertex list is fixed at creation. Only the fill color can change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    points: Vec<Point>,
    color: Color,
}

impl Polygon {
    /// Vertices in the order they were placed.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Current fill color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether `point` falls inside this polygon.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        geometry::classify(point, &self.points)
    }
}

/// Ordered list of finalized polygons.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    polygons: Vec<Polygon>,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { polygons: Vec::new() }
    }

    /// Append a polygon and return its index.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::TooFewPoints`] when `points` has fewer than
    /// three vertices. The store is left untouched.
    pub fn append(&mut self, points: Vec<Point>, color: Color) -> Result<usize, EditorError> {
        if points.len() < MIN_POLYGON_POINTS {
            return Err(EditorError::TooFewPoints { have: points.len(), need: MIN_POLYGON_POINTS });
        }
        self.polygons.push(Polygon { points, color });
        Ok(self.polygons.len() - 1)
    }

    /// Replace the fill color of the polygon at `index`. Returns false if there is no such polygon.
    pub fn recolor(&mut self, index: usize, color: Color) -> bool {
        let Some(polygon) = self.polygons.get_mut(index) else {
            return false;
        };
        polygon.color = color;
        true
    }

    /// Remove every polygon.
    pub fn clear(&mut self) {
        self.polygons.clear();
    }

    /// Index of the first polygon, in insertion order, that contains `point`.
    ///
    /// Overlapping polygons resolve to the OLDEST one, even though later
    /// polygons are drawn on top of it.
    #[must_use]
    pub fn find_containing(&self, point: Point) -> Option<usize> {
        self.polygons.iter().position(|polygon| polygon.contains(point))
    }

    /// Return a reference to a polygon by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Polygon> {
        self.polygons.get(index)
    }

    /// All polygons in insertion (and draw) order.
    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Iterate polygons in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    /// Number of polygons currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Returns `true` if the store contains no polygons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Whether `index` refers to a polygon in the store.
    #[must_use]
    pub fn is_valid(&self, index: usize) -> bool {
        index < self.polygons.len()
    }
}

impl<'a> IntoIterator for &'a ShapeStore {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
