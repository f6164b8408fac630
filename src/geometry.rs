//! Point type and point-in-polygon classification.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::{HIT_EPSILON, MIN_POLYGON_POINTS};

/// A point in canvas space (CSS pixels, origin at the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Whether `point` lies inside the simple polygon described by `vertices`.
///
/// Even-odd ray casting: a ray is cast from `point` towards +x and every edge
/// whose endpoints straddle the point's y and whose intercept lies to the
/// right of the point toggles the result. The edge height in the intercept is
/// biased by [`HIT_EPSILON`], so horizontal edges never divide by zero and
/// points within a hair of a steep edge may land on either side of it.
///
/// Fewer than three vertices contain nothing.
#[must_use]
pub fn classify(point: Point, vertices: &[Point]) -> bool {
    if vertices.len() < MIN_POLYGON_POINTS {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        if (vi.y > point.y) != (vj.y > point.y) {
            let intercept = (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y + HIT_EPSILON) + vi.x;
            if point.x < intercept {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
