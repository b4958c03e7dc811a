//! Flat-file exporters for sampled data.
//!
//! Both exporters read a [`Snapshot`](crate::data::series::Snapshot) and write one
//! file into the configured output directory, named with a local timestamp.

pub mod tabular;
pub mod vector;

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SamplePlotError};

pub use vector::VectorStyle;

/// Timestamp layout shared by every export file name.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

pub fn timestamp(now: NaiveDateTime) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Where and how exports are written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Target directory, relative to the working directory unless absolute.
    pub output_dir: PathBuf,
    /// Create `output_dir` on first export instead of failing.
    pub create_output_dir: bool,
    pub vector: VectorStyle,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("../output"),
            create_output_dir: false,
            vector: VectorStyle::default(),
        }
    }
}

impl ExportSettings {
    /// Resolve the output directory, creating it only if allowed.
    pub fn prepare_output_dir(&self) -> Result<&Path> {
        let dir = self.output_dir.as_path();
        if dir.is_dir() {
            return Ok(dir);
        }
        if self.create_output_dir {
            std::fs::create_dir_all(dir).map_err(|e| SamplePlotError::io(dir, e))?;
            tracing::info!(dir = %dir.display(), "created output directory");
            Ok(dir)
        } else {
            Err(SamplePlotError::MissingOutputDir {
                path: dir.to_path_buf(),
            })
        }
    }
}
