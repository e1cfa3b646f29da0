//! Axis-aligned bounding boxes in pixel space.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Axis;
use crate::frame::ReferenceFrame;

/// A single pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Smallest axis-aligned rectangle containing a set of points.
///
/// Edges are inclusive: a single point yields a box with
/// `min_x == max_x` and `min_y == max_y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct BoundingBox {
    pub min_x: u32,
    pub max_x: u32,
    pub min_y: u32,
    pub max_y: u32,
}

impl BoundingBox {
    /// Box around a single point.
    pub fn at(point: Point) -> Self {
        Self {
            min_x: point.x,
            max_x: point.x,
            min_y: point.y,
            max_y: point.y,
        }
    }

    /// Box around every point, or `None` when there are no points.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::at(first), |mut bbox, point| {
            bbox.extend(point);
            bbox
        }))
    }

    /// Grow the box to include `point`.
    pub fn extend(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
    }

    /// Horizontal extent in pixels (`max_x - min_x`).
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x
    }

    /// Vertical extent in pixels (`max_y - min_y`).
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }
}

/// Bounding box edges as unrounded percentages of a reference frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PercentExtents {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl PercentExtents {
    /// X edges relative to the frame width, Y edges relative to its height.
    pub fn of(bbox: &BoundingBox, frame: &ReferenceFrame) -> Self {
        Self {
            min_x: frame.percent_of(Axis::Width, bbox.min_x),
            max_x: frame.percent_of(Axis::Width, bbox.max_x),
            min_y: frame.percent_of(Axis::Height, bbox.min_y),
            max_y: frame.percent_of(Axis::Height, bbox.max_y),
        }
    }
}
