//! Shared data models for image-map region analysis.
//!
//! This crate provides Serde-serializable types for:
//! - Reference frames (the pixel size of the mapped image)
//! - Coordinate lists and their comma-separated text encoding
//! - Bounding boxes and percentage extents
//! - Reports and on-disk region sets

pub mod bbox;
pub mod coords;
pub mod error;
pub mod frame;
pub mod region;
pub mod report;

// Re-export common types
pub use bbox::{BoundingBox, PercentExtents, Point};
pub use coords::CoordinateList;
pub use error::{Axis, InvalidInputError, ModelResult};
pub use frame::ReferenceFrame;
pub use region::{Region, RegionSet};
pub use report::Report;
