//! Labelled regions and the regions file format.
//!
//! A regions file is JSON:
//!
//! ```json
//! {
//!   "frame": { "width": 1640, "height": 2360 },
//!   "regions": [
//!     { "label": "New York 1", "coords": "1188,557,1183,634" }
//!   ]
//! }
//! ```
//!
//! `frame` is optional; callers fall back to their own default.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::coords::CoordinateList;
use crate::frame::ReferenceFrame;

/// A named polygon outline from an image map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Region {
    /// Display label, used only to annotate output
    pub label: String,
    /// Polygon outline in comma-separated form
    pub coords: CoordinateList,
}

impl Region {
    pub fn new(label: impl Into<String>, coords: CoordinateList) -> Self {
        Self {
            label: label.into(),
            coords,
        }
    }
}

/// Contents of a regions file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct RegionSet {
    /// Reference frame shared by every region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<ReferenceFrame>,
    /// Regions in report order
    #[serde(default)]
    pub regions: Vec<Region>,
}

impl RegionSet {
    /// Parse a regions file body.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
