use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{VIEWBOX_PADDING_BOTTOM, VIEWBOX_PADDING_TOP, VIEWBOX_PADDING_X};

/// A position in the line's local drawing plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle enclosing every station of a line.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Bounds {
    /// Smallest bounds containing all `points`, or `None` when there are none.
    pub fn enclosing<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Bounds {
                    top: p.y,
                    bottom: p.y,
                    left: p.x,
                    right: p.x,
                },
                Some(b) => Bounds {
                    top: b.top.min(p.y),
                    bottom: b.bottom.max(p.y),
                    left: b.left.min(p.x),
                    right: b.right.max(p.x),
                },
            })
        })
    }
}

/// The visible coordinate window of the rendered SVG.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}

/// Pads `bounds` into a viewbox with room for labels on both sides.
///
/// The top gets 5 units, the bottom 10, and each side 50, so the width is
/// `right - left + 100` and the height `bottom - top + 15`.
#[must_use]
pub fn viewbox_for_bounds(bounds: &Bounds) -> ViewBox {
    ViewBox {
        min_x: bounds.left - VIEWBOX_PADDING_X,
        min_y: bounds.top - VIEWBOX_PADDING_TOP,
        width: bounds.right - bounds.left + 2.0 * VIEWBOX_PADDING_X,
        height: bounds.bottom - bounds.top + VIEWBOX_PADDING_TOP + VIEWBOX_PADDING_BOTTOM,
    }
}

/// Euclidean norm of `point`. Unknown positions count as the origin.
#[must_use]
pub fn distance_from_origin(point: Option<&Point>) -> f64 {
    point.map_or(0.0, |p| p.x.hypot(p.y))
}

/// Id of the position nearest the origin.
///
/// Scans in map order with a strict comparison, so the first of several
/// equally close entries wins.
#[must_use]
pub fn closest_to_origin(positions: &IndexMap<String, Point>) -> Option<&str> {
    let mut closest: Option<(&str, f64)> = None;
    for (id, point) in positions {
        let distance = distance_from_origin(Some(point));
        if closest.is_none_or(|(_, best)| distance < best) {
            closest = Some((id.as_str(), distance));
        }
    }
    closest.map(|(id, _)| id)
}
