//! Plain state types with no UI dependencies beyond hotkey matching.

pub mod hotkeys;
pub mod run_state;
pub mod series;
pub mod view;
