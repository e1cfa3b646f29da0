//! One analysis run: load regions, analyze them, write the reports.

use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use imgmap_analysis::{BoundingBoxAnalyzer, Reporter};
use imgmap_models::{ReferenceFrame, RegionSet};

use crate::config::CliConfig;
use crate::dataset::builtin_regions;
use crate::error::{CliError, CliResult};
use crate::logging::RunLogger;

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of reports written
    pub regions: usize,
    /// Frame every percentage is relative to
    pub frame: ReferenceFrame,
}

/// Load the configured regions file, or the built-in dataset.
pub fn load_regions(config: &CliConfig) -> CliResult<RegionSet> {
    match &config.regions_file {
        Some(path) => read_regions_file(path),
        None => Ok(builtin_regions()?),
    }
}

fn read_regions_file(path: &Path) -> CliResult<RegionSet> {
    debug!(path = %path.display(), "Reading regions file");
    let body = std::fs::read_to_string(path)?;
    RegionSet::from_json(&body)
        .map_err(|e| CliError::regions_file(path.display().to_string(), e))
}

/// Analyze every configured region and write the reports to `out`.
///
/// All regions are analyzed before anything is written, so a failing run
/// produces no partial output.
pub fn run<W: Write>(config: &CliConfig, out: W) -> CliResult<RunSummary> {
    let source = config
        .regions_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "builtin".to_string());
    let logger = RunLogger::new(&source, "analyze");
    let _span = logger.create_span().entered();

    run_inner(config, out, &logger)
}

fn run_inner<W: Write>(config: &CliConfig, out: W, logger: &RunLogger) -> CliResult<RunSummary> {
    let set = load_regions(config)?;
    let frame = config.resolve_frame(set.frame)?;
    logger.log_start(&format!("{} regions, frame {}", set.regions.len(), frame));

    if set.is_empty() {
        logger.log_warning("no regions to analyze");
    }

    let reports = BoundingBoxAnalyzer::new(frame).analyze_all(&set.regions);

    let mut reporter = Reporter::new(out, config.report_format);
    reporter.write_all(&reports)?;

    info!(format = %config.report_format, "Reports written");
    logger.log_completion(&format!("{} reports", reports.len()));

    Ok(RunSummary {
        regions: reports.len(),
        frame,
    })
}
