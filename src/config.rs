//! Configuration for the sampling plot window.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::hotkeys::Hotkeys;
use crate::error::{Result, SamplePlotError};
use crate::export::ExportSettings;
use crate::function::FunctionPreset;
use crate::live_sampler::{LiveSampler, DEFAULT_EXPERIMENT_LABEL};
use crate::static_sampler::StaticSampler;
use crate::surface::{AxisLabels, SamplingSurface};

/// Name of the config file the binary picks up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "sampleplot.yaml";

/// Input sweep policy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SamplerMode {
    #[default]
    /// One sample per frame at `t = 0, r, 2r, …` with interactive controls.
    Live,
    /// Sweep `[x_min, x_max)` once.
    Static { x_min: f64, x_max: f64 },
}

/// Top-level configuration.
///
/// | Field        | Purpose |
/// |--------------|---------|
/// | `mode`       | Live or static sampling |
/// | `function`   | Which built-in function to sample |
/// | `export`     | Output directory and vector look |
/// | `hotkeys`    | Keyboard shortcuts for commands |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplePlotConfig {
    /// Native window title.
    pub title: String,
    pub x_label: String,
    /// Y axis caption. `None` uses the function's own label.
    pub y_label: Option<String>,
    /// Step between consecutive inputs.
    pub resolution: f64,
    pub mode: SamplerMode,
    pub function: FunctionPreset,
    /// Initial experiment label for CSV file names.
    pub experiment_name: String,
    pub export: ExportSettings,
    pub hotkeys: Hotkeys,
    /// Initial inner window size in points.
    pub window_size: [f32; 2],
}

impl Default for SamplePlotConfig {
    fn default() -> Self {
        Self {
            title: "SamplePlot".to_string(),
            x_label: "t".to_string(),
            y_label: None,
            resolution: 0.01,
            mode: SamplerMode::Live,
            function: FunctionPreset::Exercise,
            experiment_name: DEFAULT_EXPERIMENT_LABEL.to_string(),
            export: ExportSettings::default(),
            hotkeys: Hotkeys::default(),
            window_size: [1000.0, 700.0],
        }
    }
}

impl SamplePlotConfig {
    /// Load a `.yaml`/`.yml` or `.json` file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SamplePlotError::io(path, e))?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Ok(serde_yaml::from_str(&text)?),
            "json" => Ok(serde_json::from_str(&text)?),
            _ => Err(SamplePlotError::UnsupportedConfigFormat { extension }),
        }
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::info!(path = %path.display(), "loading config");
            Self::from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn axis_labels(&self) -> AxisLabels {
        let y = self
            .y_label
            .clone()
            .unwrap_or_else(|| self.function.label().to_string());
        AxisLabels::new(self.x_label.clone(), y)
    }

    /// Construct the sampler described by this config.
    pub fn build_sampler(&self) -> Result<Box<dyn SamplingSurface>> {
        let function = self.function.into_function();
        let labels = self.axis_labels();
        match self.mode {
            SamplerMode::Live => {
                let sampler =
                    LiveSampler::new(self.resolution, function, labels, self.export.clone())?
                        .with_experiment_label(self.experiment_name.clone());
                Ok(Box::new(sampler))
            }
            SamplerMode::Static { x_min, x_max } => {
                let sampler = StaticSampler::new(x_min, x_max, self.resolution, function, labels)?;
                Ok(Box::new(sampler))
            }
        }
    }
}
