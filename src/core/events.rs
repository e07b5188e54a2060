//! Events crossing the boundary to the presentation layer.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Event emitted by the core for the presentation layer.
///
/// The wire form uses the event names and camelCase payload fields a
/// frontend consumes directly. Results may arrive in any order relative to
/// submission; each event stands on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum AppEvent {
    /// The first dispatch of a batch went in flight
    ProcessingStarted,
    /// A dispatch failed; `message` is the fixed user-facing text
    ProcessingFailed { message: String },
    /// One file finished shrinking
    #[serde(rename_all = "camelCase")]
    FileCompressed {
        output_path: String,
        original_size: u64,
        compressed_size: u64,
        percent_saved: i32,
    },
}

/// Sending half of the event channel, cloned into every dispatch task.
pub type EventSender = mpsc::UnboundedSender<AppEvent>;

/// Receiving half, owned by the presentation layer.
pub type EventReceiver = mpsc::UnboundedReceiver<AppEvent>;

/// Create the channel pair carrying [`AppEvent`]s out of the core.
pub fn event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
