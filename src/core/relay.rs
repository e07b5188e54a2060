//! Forwards per-file outcomes to the presentation layer.

use tracing::{debug, error};

use crate::core::events::{AppEvent, EventSender};
use crate::core::types::ShrinkOutcome;
use crate::utils::ShrinkerError;

/// Percentage saved, rounded to the nearest integer.
///
/// A zero-byte original reports 0 instead of dividing by zero. The value is
/// negative when the output grew.
pub fn percent_saved(original_size: u64, compressed_size: u64) -> i32 {
    if original_size == 0 {
        return 0;
    }
    let saved = original_size as f64 - compressed_size as f64;
    (saved / original_size as f64 * 100.0).round() as i32
}

/// Relay one successful outcome.
pub(crate) fn relay_success(events: &EventSender, outcome: ShrinkOutcome) {
    let percent = percent_saved(outcome.original_size, outcome.compressed_size);
    debug!(
        "Shrunk {}: {} -> {} bytes ({}% saved)",
        outcome.output_path, outcome.original_size, outcome.compressed_size, percent
    );
    let _ = events.send(AppEvent::FileCompressed {
        output_path: outcome.output_path,
        original_size: outcome.original_size,
        compressed_size: outcome.compressed_size,
        percent_saved: percent,
    });
}

/// Relay one failure.
///
/// The full detail goes to the log; the presentation layer only receives the
/// fixed message for the error's category.
pub(crate) fn relay_failure(events: &EventSender, source: &str, err: &ShrinkerError) {
    error!("Failed to shrink {}: {}", source, err);
    let _ = events.send(AppEvent::ProcessingFailed {
        message: err.user_message().to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_saved_rounds_to_the_nearest_integer() {
        assert_eq!(percent_saved(1000, 250), 75);
        assert_eq!(percent_saved(3, 2), 33);
        assert_eq!(percent_saved(3, 1), 67);
    }

    #[test]
    fn zero_byte_original_does_not_divide_by_zero() {
        assert_eq!(percent_saved(0, 0), 0);
        assert_eq!(percent_saved(0, 100), 0);
    }

    #[test]
    fn grown_output_reports_negative_savings() {
        assert_eq!(percent_saved(100, 150), -50);
    }
}
