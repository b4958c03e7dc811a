//! sampleplot crate root: re-exports and module wiring.
//!
//! Samples a closed-form function of time and draws it live in an egui/eframe
//! window, with pause/resume, reset, rename, CSV export and SVG export.
//!
//! - `data`: buffer, run state, view state and hotkeys
//! - `surface`: shared plot surface and the [`SamplingSurface`] capability
//! - `static_sampler` / `live_sampler`: the two sweep policies
//! - `command`: user commands handled by the live sampler
//! - `export`: CSV and SVG writers
//! - `config`: serde-loadable configuration
//! - `app`, `panels`: the eframe window

pub mod app;
pub mod command;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod function;
pub mod live_sampler;
pub mod panels;
pub mod static_sampler;
pub mod surface;

// Public re-exports for a compact external API
pub use app::{run_sampleplot, SamplePlotApp};
pub use command::{Command, CommandOutcome};
pub use config::{SamplePlotConfig, SamplerMode};
pub use data::run_state::RunState;
pub use data::series::{SampleStep, SeriesBuffer, Snapshot};
pub use error::{Result, SamplePlotError};
pub use function::{exercise, FunctionPreset, SampleFunction};
pub use live_sampler::LiveSampler;
pub use static_sampler::StaticSampler;
pub use surface::{AxisLabels, PlotSurface, SamplingSurface, TickOutcome};
