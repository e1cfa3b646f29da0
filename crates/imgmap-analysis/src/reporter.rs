//! Report rendering.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use thiserror::Error;

use imgmap_models::Report;

/// Output format for a batch of reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportFormat {
    /// Human-readable blocks, percentages to one decimal place
    #[default]
    Text,
    /// Pretty-printed JSON array with unrounded percentages
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = ReportFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ReportFormatParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown report format: {0}")]
pub struct ReportFormatParseError(String);

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render one report as a text block.
///
/// The label sits on its own line, followed by the X and Y ranges and a
/// blank separator line.
pub fn render_text(report: &Report) -> String {
    let bbox = &report.bbox;
    let pct = &report.percent;
    format!(
        "{}:\n  X range: {}-{} pixels ({:.1}%-{:.1}%)\n  Y range: {}-{} pixels ({:.1}%-{:.1}%)\n\n",
        report.label,
        bbox.min_x,
        bbox.max_x,
        pct.min_x,
        pct.max_x,
        bbox.min_y,
        bbox.max_y,
        pct.min_y,
        pct.max_y,
    )
}

/// Render a batch of reports as a pretty-printed JSON array.
pub fn render_json(reports: &[Report]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

/// Writes report batches to an output sink.
pub struct Reporter<W: Write> {
    out: W,
    format: ReportFormat,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: ReportFormat) -> Self {
        Self { out, format }
    }

    /// Write every report and flush.
    pub fn write_all(&mut self, reports: &[Report]) -> Result<(), ReportError> {
        match self.format {
            ReportFormat::Text => {
                for report in reports {
                    self.out.write_all(render_text(report).as_bytes())?;
                }
            }
            ReportFormat::Json => {
                let body = render_json(reports)?;
                writeln!(self.out, "{}", body)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgmap_models::{BoundingBox, ReferenceFrame};

    fn sample() -> Report {
        Report::new(
            "Sample",
            ReferenceFrame::new(1640, 2360).unwrap(),
            BoundingBox {
                min_x: 780,
                max_x: 1263,
                min_y: 557,
                max_y: 966,
            },
        )
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            render_text(&sample()),
            "Sample:\n  X range: 780-1263 pixels (47.6%-77.0%)\n  Y range: 557-966 pixels (23.6%-40.9%)\n\n"
        );
    }

    #[test]
    fn test_render_text_keeps_full_precision_in_report() {
        let report = sample();
        assert!((report.percent.min_x - 47.5609756097561).abs() < 1e-12);
        assert!(render_text(&report).contains("47.6%"));
    }

    #[test]
    fn test_report_format_parse() {
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("yaml".parse::<ReportFormat>().is_err());
        assert_eq!(ReportFormat::default(), ReportFormat::Text);
    }

    #[test]
    fn test_reporter_text() {
        let mut reporter = Reporter::new(Vec::new(), ReportFormat::Text);
        reporter.write_all(&[sample(), sample()]).unwrap();
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out.matches("Sample:").count(), 2);
        assert!(out.ends_with("\n\n"));
    }

    #[test]
    fn test_reporter_json() {
        let mut reporter = Reporter::new(Vec::new(), ReportFormat::Json);
        reporter.write_all(&[sample()]).unwrap();
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        let parsed: Vec<Report> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].label, "Sample");
        assert_eq!(parsed[0].bbox, sample().bbox);
        assert!((parsed[0].percent.max_y - sample().percent.max_y).abs() < 1e-9);
    }

    #[test]
    fn test_reporter_empty_batch() {
        let mut reporter = Reporter::new(Vec::new(), ReportFormat::Text);
        reporter.write_all(&[]).unwrap();
        assert!(reporter.into_inner().is_empty());
    }
}
