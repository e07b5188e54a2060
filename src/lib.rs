// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod intake;
pub mod processing;

// Public exports for external consumers
pub use crate::core::{
    AppEvent, AppState, CandidateFile, EventReceiver, Settings, SettingsStore, ShrinkOutcome,
};
pub use crate::utils::{ImageFormat, ShrinkerError, ShrinkerResult};

// This library file is the public API for consuming the crate as a library.
// The application entry point is in main.rs.
