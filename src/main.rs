//! sampleplot binary: live plot of the exercise function.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use sampleplot::config::{SamplePlotConfig, DEFAULT_CONFIG_FILE};
use sampleplot::run_sampleplot;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = SamplePlotConfig::load_or_default(DEFAULT_CONFIG_FILE)?;
    tracing::info!("starting sampleplot");
    run_sampleplot(cfg)?;
    tracing::info!("sampleplot exited");
    Ok(())
}
