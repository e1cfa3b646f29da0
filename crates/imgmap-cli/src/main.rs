//! Image-map bounding box report binary.

use anyhow::Context;
use tracing::{error, info};

use imgmap_cli::{init_tracing, run, CliConfig};

fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    info!("Starting imgmap-bbox");

    if let Err(e) = run_main() {
        error!("Analysis failed: {:#}", e);
        eprintln!("imgmap-bbox: {:#}", e);
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let config = CliConfig::from_env()
        .context("Failed to load configuration")?
        .with_regions_file_arg(std::env::args().nth(1));
    info!("Config: {:?}", config);

    let stdout = std::io::stdout();
    let summary = run(&config, stdout.lock()).context("Failed to analyze regions")?;

    info!(
        regions = summary.regions,
        frame = %summary.frame,
        "Analysis complete"
    );
    Ok(())
}
