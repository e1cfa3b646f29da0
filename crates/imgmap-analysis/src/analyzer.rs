//! The bounding box analyzer.
//!
//! Analysis is a single linear pass over the coordinates with no shared
//! state, so independent calls may run concurrently without coordination.

use tracing::debug;

use imgmap_models::coords::validate_values;
use imgmap_models::{
    BoundingBox, CoordinateList, InvalidInputError, ModelResult, Point, ReferenceFrame, Region,
    Report,
};

/// Analyze a raw alternating x,y sequence.
///
/// Fails with [`InvalidInputError`] when `coordinates` is empty or of odd
/// length. Frame dimensions are checked when the [`ReferenceFrame`] is
/// built.
pub fn analyze(coordinates: &[u32], label: &str, frame: ReferenceFrame) -> ModelResult<Report> {
    validate_values(coordinates)?;

    let points = coordinates
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]));
    let bbox = BoundingBox::from_points(points).ok_or(InvalidInputError::EmptyCoordinates)?;

    Ok(build_report(label, frame, bbox, coordinates.len() / 2))
}

/// Analyze an already validated coordinate list.
pub fn analyze_list(coordinates: &CoordinateList, label: &str, frame: ReferenceFrame) -> Report {
    build_report(
        label,
        frame,
        coordinates.bounding_box(),
        coordinates.len_points(),
    )
}

/// Parse the comma-separated text form and analyze it.
pub fn analyze_text(coordinates: &str, label: &str, frame: ReferenceFrame) -> ModelResult<Report> {
    let list: CoordinateList = coordinates.parse()?;
    Ok(analyze_list(&list, label, frame))
}

fn build_report(label: &str, frame: ReferenceFrame, bbox: BoundingBox, points: usize) -> Report {
    debug!(
        label = %label,
        points,
        min_x = bbox.min_x,
        max_x = bbox.max_x,
        min_y = bbox.min_y,
        max_y = bbox.max_y,
        "Computed bounding box"
    );
    Report::new(label, frame, bbox)
}

/// Analyzer bound to one reference frame, shared by every region in a run.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBoxAnalyzer {
    frame: ReferenceFrame,
}

impl BoundingBoxAnalyzer {
    pub fn new(frame: ReferenceFrame) -> Self {
        Self { frame }
    }

    pub fn analyze_region(&self, region: &Region) -> Report {
        analyze_list(&region.coords, &region.label, self.frame)
    }

    /// Analyze every region, preserving input order.
    pub fn analyze_all(&self, regions: &[Region]) -> Vec<Report> {
        regions
            .iter()
            .map(|region| self.analyze_region(region))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(width: i64, height: i64) -> ReferenceFrame {
        ReferenceFrame::new(width, height).unwrap()
    }

    #[test]
    fn test_analyze_basic() {
        let report = analyze(&[0, 0, 10, 20], "basic", frame(100, 100)).unwrap();
        assert_eq!(
            report.bbox,
            BoundingBox {
                min_x: 0,
                max_x: 10,
                min_y: 0,
                max_y: 20
            }
        );
        assert_eq!(report.percent.min_x, 0.0);
        assert_eq!(report.percent.max_x, 10.0);
        assert_eq!(report.percent.min_y, 0.0);
        assert_eq!(report.percent.max_y, 20.0);
    }

    #[test]
    fn test_analyze_unsorted_input() {
        let report = analyze(&[30, 5, 10, 50, 20, 1], "unsorted", frame(100, 100)).unwrap();
        assert_eq!(report.bbox.min_x, 10);
        assert_eq!(report.bbox.max_x, 30);
        assert_eq!(report.bbox.min_y, 1);
        assert_eq!(report.bbox.max_y, 50);
    }

    #[test]
    fn test_analyze_rejects_empty_and_odd() {
        assert_eq!(
            analyze(&[], "empty", frame(10, 10)),
            Err(InvalidInputError::EmptyCoordinates)
        );
        assert_eq!(
            analyze(&[1, 2, 3], "odd", frame(10, 10)),
            Err(InvalidInputError::OddCoordinateCount(3))
        );
    }

    #[test]
    fn test_analyze_text_matches_analyze() {
        let from_text = analyze_text("7,9,1,4", "t", frame(50, 60)).unwrap();
        let from_slice = analyze(&[7, 9, 1, 4], "t", frame(50, 60)).unwrap();
        assert_eq!(from_text, from_slice);
    }

    #[test]
    fn test_analyze_text_rejects_bad_token() {
        assert!(matches!(
            analyze_text("1,a", "t", frame(50, 60)),
            Err(InvalidInputError::InvalidToken { position: 1, .. })
        ));
    }

    #[test]
    fn test_analyzer_all_preserves_order() {
        let analyzer = BoundingBoxAnalyzer::new(frame(100, 100));
        let regions = vec![
            Region::new("first", "1,1".parse().unwrap()),
            Region::new("second", "2,2,3,3".parse().unwrap()),
        ];
        let reports = analyzer.analyze_all(&regions);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].label, "first");
        assert_eq!(reports[1].label, "second");
        assert_eq!(reports[1].bbox.max_x, 3);
    }
}
