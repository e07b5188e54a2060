//! Core application types and state.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - [`AppState`]: shared state and the dispatch entry point
//! - [`Settings`] / [`SettingsStore`]: user configuration and its JSON store
//! - [`CandidateFile`] / [`ShrinkOutcome`]: pipeline data
//! - [`AppEvent`]: the boundary to the presentation layer

mod events;
mod relay;
mod settings;
mod state;
mod types;

pub use events::{event_channel, AppEvent, EventReceiver, EventSender};
pub use relay::percent_saved;
pub use settings::{validate_settings, Settings, SettingsStore};
pub use state::{AppState, LoggedRecents, RecentDocuments};
pub use types::{CandidateFile, ShrinkOutcome};
