//! Error types for sampleplot.
//!
//! Every fallible operation in the crate returns [`Result`]. Command failures are
//! reported to the caller and never tear down the sampling loop.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sampleplot operations.
pub type Result<T> = std::result::Result<T, SamplePlotError>;

/// Errors that can occur while sampling, exporting or loading configuration.
#[derive(Debug, Error)]
pub enum SamplePlotError {
    /// Sampling step is zero, negative or not finite.
    #[error("Invalid resolution {0}: must be finite and greater than zero")]
    InvalidResolution(f64),

    /// Static sweep bounds are not finite.
    #[error("Invalid sweep range [{x_min}, {x_max})")]
    InvalidRange { x_min: f64, x_max: f64 },

    /// Static sweep would produce more points than the buffer accepts.
    #[error("Sweep needs {steps} points, limit is {limit}")]
    TooManyPoints { steps: f64, limit: usize },

    /// Export target directory does not exist.
    #[error("Output directory does not exist: {}", path.display())]
    MissingOutputDir { path: PathBuf },

    /// Filesystem failure on a specific path.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The vector backend failed to draw the chart.
    #[error("Render error: {0}")]
    Render(String),

    /// YAML configuration could not be parsed.
    #[error("YAML config error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON configuration could not be parsed.
    #[error("JSON config error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file extension is neither YAML nor JSON.
    #[error("Unsupported config format: {extension}")]
    UnsupportedConfigFormat { extension: String },

    /// The active sampler has no handler for this command.
    #[error("Command '{0}' is not supported by this sampler")]
    UnsupportedCommand(&'static str),
}

impl SamplePlotError {
    /// Create an Io error bound to `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a Render error from any backend error.
    pub fn render(err: impl std::fmt::Display) -> Self {
        Self::Render(err.to_string())
    }
}
