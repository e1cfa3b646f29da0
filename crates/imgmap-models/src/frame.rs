//! Reference frame: the pixel dimensions coordinates are drawn against.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Axis, InvalidInputError, ModelResult};

/// Known pixel width/height of the image a set of regions belongs to.
///
/// Both dimensions are always positive. Construct with
/// [`ReferenceFrame::new`]; deserialization goes through the same checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "RawFrame")]
pub struct ReferenceFrame {
    #[schemars(range(min = 1))]
    width: u32,
    #[schemars(range(min = 1))]
    height: u32,
}

/// Unvalidated frame as it appears in a regions file.
#[derive(Deserialize)]
struct RawFrame {
    width: i64,
    height: i64,
}

impl TryFrom<RawFrame> for ReferenceFrame {
    type Error = InvalidInputError;

    fn try_from(raw: RawFrame) -> Result<Self, Self::Error> {
        Self::new(raw.width, raw.height)
    }
}

impl ReferenceFrame {
    /// Create a frame, rejecting any dimension that is not a positive `u32`.
    pub fn new(width: i64, height: i64) -> ModelResult<Self> {
        Ok(Self {
            width: checked_dimension(Axis::Width, width)?,
            height: checked_dimension(Axis::Height, height)?,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size of the frame along `axis`.
    pub fn dimension(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    /// Express a pixel position along `axis` as a percentage of the frame.
    ///
    /// Computed as `(value / dimension) * 100` with no rounding.
    pub fn percent_of(&self, axis: Axis, value: u32) -> f64 {
        (f64::from(value) / f64::from(self.dimension(axis))) * 100.0
    }
}

impl fmt::Display for ReferenceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

fn checked_dimension(axis: Axis, value: i64) -> ModelResult<u32> {
    if value <= 0 {
        return Err(InvalidInputError::NonPositiveDimension { axis, value });
    }
    u32::try_from(value).map_err(|_| InvalidInputError::DimensionTooLarge { axis, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_frame() {
        let frame = ReferenceFrame::new(1640, 2360).unwrap();
        assert_eq!(frame.width(), 1640);
        assert_eq!(frame.height(), 2360);
        assert_eq!(frame.to_string(), "1640x2360");
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert_eq!(
            ReferenceFrame::new(0, 100),
            Err(InvalidInputError::NonPositiveDimension {
                axis: Axis::Width,
                value: 0
            })
        );
        assert_eq!(
            ReferenceFrame::new(100, -5),
            Err(InvalidInputError::NonPositiveDimension {
                axis: Axis::Height,
                value: -5
            })
        );
    }

    #[test]
    fn test_rejects_oversized_dimension() {
        let too_big = i64::from(u32::MAX) + 1;
        assert!(matches!(
            ReferenceFrame::new(too_big, 10),
            Err(InvalidInputError::DimensionTooLarge { axis: Axis::Width, .. })
        ));
    }

    #[test]
    fn test_percent_of() {
        let frame = ReferenceFrame::new(200, 400).unwrap();
        assert_eq!(frame.percent_of(Axis::Width, 50), 25.0);
        assert_eq!(frame.percent_of(Axis::Height, 100), 25.0);
        assert_eq!(frame.percent_of(Axis::Width, 0), 0.0);
    }

    #[test]
    fn test_deserialize_validates() {
        let frame: ReferenceFrame = serde_json::from_str(r#"{"width": 10, "height": 20}"#).unwrap();
        assert_eq!(frame, ReferenceFrame::new(10, 20).unwrap());

        let err = serde_json::from_str::<ReferenceFrame>(r#"{"width": 0, "height": 20}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_schema_requires_positive_dimensions() {
        let schema = serde_json::to_value(schemars::schema_for!(ReferenceFrame)).unwrap();
        assert_eq!(schema["properties"]["width"]["minimum"], 1.0);
        assert_eq!(schema["properties"]["height"]["minimum"], 1.0);
    }

    #[test]
    fn test_serialize_shape() {
        let frame = ReferenceFrame::new(3, 4).unwrap();
        let json = serde_json::to_value(frame).unwrap();
        assert_eq!(json, serde_json::json!({"width": 3, "height": 4}));
    }
}
