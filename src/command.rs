//! User commands accepted by an interactive sampler.
//!
//! The UI layer only translates widget clicks, text submissions and hotkeys into
//! [`Command`] values; all state changes happen in the sampler's handler.

use std::path::PathBuf;

/// A user-triggered action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Suspend sampling, or resume and re-enable autoscale.
    TogglePause,
    /// Clear every sampled point. The time cursor keeps running.
    Reset,
    /// Set the experiment label used in CSV file names.
    Rename(String),
    /// Write the current points as CSV.
    ExportTabular,
    /// Write the current points as a vector drawing.
    ExportVector,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::TogglePause => "toggle-pause",
            Command::Reset => "reset",
            Command::Rename(_) => "rename",
            Command::ExportTabular => "export-tabular",
            Command::ExportVector => "export-vector",
        }
    }
}

/// What a successfully handled [`Command`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Paused,
    Resumed,
    Cleared,
    Renamed(String),
    Exported(PathBuf),
    /// Pause was toggled on a surface that has already been closed.
    Ignored,
}

impl std::fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandOutcome::Paused => write!(f, "Paused"),
            CommandOutcome::Resumed => write!(f, "Resumed"),
            CommandOutcome::Cleared => write!(f, "Cleared all points"),
            CommandOutcome::Renamed(name) => write!(f, "Experiment name set to '{name}'"),
            CommandOutcome::Exported(path) => write!(f, "Saved {}", path.display()),
            CommandOutcome::Ignored => write!(f, "Plot is closed"),
        }
    }
}
