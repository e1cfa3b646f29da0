//! Bounding box analysis for image-map regions.
//!
//! [`analyze`] turns one coordinate list into a [`Report`]; the
//! [`reporter`] module renders reports as text or JSON.
//!
//! ```
//! use imgmap_analysis::{analyze, render_text};
//! use imgmap_models::ReferenceFrame;
//!
//! let frame = ReferenceFrame::new(100, 100).unwrap();
//! let report = analyze(&[0, 0, 10, 20], "Example", frame).unwrap();
//! assert_eq!(
//!     render_text(&report),
//!     "Example:\n  X range: 0-10 pixels (0.0%-10.0%)\n  Y range: 0-20 pixels (0.0%-20.0%)\n\n"
//! );
//! ```

pub mod analyzer;
pub mod reporter;

pub use analyzer::{analyze, analyze_list, analyze_text, BoundingBoxAnalyzer};
pub use reporter::{
    render_json, render_text, ReportError, ReportFormat, ReportFormatParseError, Reporter,
};

pub use imgmap_models::Report;
