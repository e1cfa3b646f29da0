//! Driver configuration.

use std::path::PathBuf;

use imgmap_analysis::ReportFormat;
use imgmap_models::ReferenceFrame;

use crate::dataset::{DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH};
use crate::error::{CliError, CliResult};

pub const ENV_FRAME_WIDTH: &str = "IMGMAP_FRAME_WIDTH";
pub const ENV_FRAME_HEIGHT: &str = "IMGMAP_FRAME_HEIGHT";
pub const ENV_REGIONS_FILE: &str = "IMGMAP_REGIONS_FILE";
pub const ENV_REPORT_FORMAT: &str = "IMGMAP_REPORT_FORMAT";

/// Driver configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliConfig {
    /// Reference width override
    pub frame_width: Option<i64>,
    /// Reference height override
    pub frame_height: Option<i64>,
    /// JSON regions file; the built-in dataset is used when unset
    pub regions_file: Option<PathBuf>,
    /// Output format
    pub report_format: ReportFormat,
}

impl CliConfig {
    /// Create config from environment variables.
    pub fn from_env() -> CliResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable source.
    ///
    /// Unlike most settings, a malformed frame dimension is an error rather
    /// than a silent fallback: it would skew every percentage.
    pub fn from_lookup<F>(lookup: F) -> CliResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let report_format = match non_empty(lookup(ENV_REPORT_FORMAT)) {
            Some(s) => s
                .parse()
                .map_err(|e| CliError::config(format!("{}: {}", ENV_REPORT_FORMAT, e)))?,
            None => ReportFormat::default(),
        };

        Ok(Self {
            frame_width: parse_dimension(ENV_FRAME_WIDTH, lookup(ENV_FRAME_WIDTH))?,
            frame_height: parse_dimension(ENV_FRAME_HEIGHT, lookup(ENV_FRAME_HEIGHT))?,
            regions_file: non_empty(lookup(ENV_REGIONS_FILE)).map(PathBuf::from),
            report_format,
        })
    }

    /// Let a command-line path take precedence over `IMGMAP_REGIONS_FILE`.
    pub fn with_regions_file_arg(mut self, arg: Option<String>) -> Self {
        if let Some(path) = non_empty(arg) {
            self.regions_file = Some(PathBuf::from(path));
        }
        self
    }

    /// Resolve the reference frame.
    ///
    /// Each dimension comes from the environment override, then the regions
    /// file frame, then the built-in default.
    pub fn resolve_frame(&self, file_frame: Option<ReferenceFrame>) -> CliResult<ReferenceFrame> {
        let width = self
            .frame_width
            .or_else(|| file_frame.map(|f| i64::from(f.width())))
            .unwrap_or(DEFAULT_FRAME_WIDTH);
        let height = self
            .frame_height
            .or_else(|| file_frame.map(|f| i64::from(f.height())))
            .unwrap_or(DEFAULT_FRAME_HEIGHT);

        Ok(ReferenceFrame::new(width, height)?)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn parse_dimension(key: &str, value: Option<String>) -> CliResult<Option<i64>> {
    match non_empty(value) {
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| CliError::config(format!("{} must be an integer, got '{}'", key, s))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> CliResult<CliConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.report_format, ReportFormat::Text);
        assert_eq!(
            config.resolve_frame(None).unwrap(),
            ReferenceFrame::new(1640, 2360).unwrap()
        );
    }

    #[test]
    fn test_reads_all_variables() {
        let config = config_from(&[
            (ENV_FRAME_WIDTH, "800"),
            (ENV_FRAME_HEIGHT, " 600 "),
            (ENV_REGIONS_FILE, "/tmp/regions.json"),
            (ENV_REPORT_FORMAT, "json"),
        ])
        .unwrap();
        assert_eq!(config.frame_width, Some(800));
        assert_eq!(config.frame_height, Some(600));
        assert_eq!(config.regions_file, Some(PathBuf::from("/tmp/regions.json")));
        assert_eq!(config.report_format, ReportFormat::Json);
    }

    #[test]
    fn test_malformed_values_are_errors() {
        assert!(matches!(
            config_from(&[(ENV_FRAME_WIDTH, "wide")]),
            Err(CliError::Config(_))
        ));
        assert!(matches!(
            config_from(&[(ENV_REPORT_FORMAT, "xml")]),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_frame_precedence() {
        let file_frame = ReferenceFrame::new(100, 200).unwrap();

        let config = config_from(&[]).unwrap();
        assert_eq!(config.resolve_frame(Some(file_frame)).unwrap(), file_frame);

        let config = config_from(&[(ENV_FRAME_HEIGHT, "50")]).unwrap();
        assert_eq!(
            config.resolve_frame(Some(file_frame)).unwrap(),
            ReferenceFrame::new(100, 50).unwrap()
        );
    }

    #[test]
    fn test_non_positive_override_is_invalid_input() {
        let config = config_from(&[(ENV_FRAME_WIDTH, "0")]).unwrap();
        assert!(matches!(
            config.resolve_frame(None),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_regions_file_arg_wins() {
        let config = config_from(&[(ENV_REGIONS_FILE, "env.json")])
            .unwrap()
            .with_regions_file_arg(Some("arg.json".to_string()));
        assert_eq!(config.regions_file, Some(PathBuf::from("arg.json")));

        let config = config_from(&[(ENV_REGIONS_FILE, "env.json")])
            .unwrap()
            .with_regions_file_arg(None);
        assert_eq!(config.regions_file, Some(PathBuf::from("env.json")));
    }
}
