//! Per-region analysis report.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::bbox::{BoundingBox, PercentExtents};
use crate::frame::ReferenceFrame;

/// Result of analyzing one labelled coordinate list.
///
/// Percentages are stored at full precision; rounding to one decimal
/// place is a presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Report {
    /// Display label of the region
    pub label: String,
    /// Frame the percentages are relative to
    pub frame: ReferenceFrame,
    /// Pixel extrema
    pub bbox: BoundingBox,
    /// Extrema as percentages of the frame
    pub percent: PercentExtents,
}

impl Report {
    /// Build a report, deriving percentages from `bbox` and `frame`.
    pub fn new(label: impl Into<String>, frame: ReferenceFrame, bbox: BoundingBox) -> Self {
        Self {
            label: label.into(),
            frame,
            percent: PercentExtents::of(&bbox, &frame),
            bbox,
        }
    }
}
