//! Command-line driver for image-map bounding box reports.
//!
//! Loads configuration from the environment, picks the regions to analyze
//! (a JSON regions file or the built-in dataset), and writes one report
//! per region.

pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod runner;
pub mod schema;

pub use config::CliConfig;
pub use error::{CliError, CliResult};
pub use logging::{init_tracing, RunLogger};
pub use runner::{load_regions, run, RunSummary};
