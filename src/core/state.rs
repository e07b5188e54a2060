//! Shared application state and the dispatch entry point.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::core::events::{event_channel, AppEvent, EventReceiver, EventSender};
use crate::core::relay::{relay_failure, relay_success};
use crate::core::settings::Settings;
use crate::core::types::{CandidateFile, ShrinkOutcome};
use crate::processing::CompressorRegistry;
use crate::utils::{compute_output_path, file_size, ShrinkerError, ShrinkerResult};

/// Host-environment hook for the "recently opened" documents list.
///
/// The desktop shell registers dispatched source files with the OS; the
/// default implementation only logs.
pub trait RecentDocuments: Send + Sync {
    fn add(&self, path: &Path);
}

/// Default [`RecentDocuments`] that records the registration in the log.
#[derive(Debug, Default)]
pub struct LoggedRecents;

impl RecentDocuments for LoggedRecents {
    fn add(&self, path: &Path) {
        debug!("Recent document: {}", path.display());
    }
}

/// Shared application state.
///
/// Cheap to clone; every dispatch task carries a clone. Dispatches are
/// independent: they never wait on one another and a failure in one never
/// aborts its siblings.
#[derive(Clone)]
pub struct AppState {
    settings: Arc<RwLock<Settings>>,
    registry: Arc<CompressorRegistry>,
    events: EventSender,
    in_flight: Arc<AtomicUsize>,
    recents: Arc<dyn RecentDocuments>,
}

impl AppState {
    /// Creates the state and the receiving end of the event channel.
    pub fn new(settings: Settings) -> (Self, EventReceiver) {
        let (events, receiver) = event_channel();
        let state = Self {
            settings: Arc::new(RwLock::new(settings)),
            registry: Arc::new(CompressorRegistry::default()),
            events,
            in_flight: Arc::new(AtomicUsize::new(0)),
            recents: Arc::new(LoggedRecents),
        };
        (state, receiver)
    }

    /// Replace the recent-documents hook (the desktop shell installs its own).
    pub fn with_recents(mut self, recents: Arc<dyn RecentDocuments>) -> Self {
        self.recents = recents;
        self
    }

    /// Snapshot of the current settings.
    ///
    /// Each dispatch works from the snapshot taken when it starts, so a
    /// settings change mid-batch only affects later files.
    pub fn settings(&self) -> Settings {
        self.settings.read().expect("settings lock poisoned").clone()
    }

    /// Apply updated settings for subsequent dispatches.
    pub fn update_settings(&self, settings: Settings) {
        *self.settings.write().expect("settings lock poisoned") = settings;
    }

    /// Number of dispatches currently in flight.
    ///
    /// The processing indicator should show while this is non-zero and clear
    /// at zero.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Dispatch one candidate on the runtime.
    ///
    /// Returns immediately; the outcome is relayed over the event channel
    /// whenever the compressor finishes. Completion order across candidates
    /// is unspecified.
    pub fn dispatch(&self, candidate: CandidateFile) -> JoinHandle<()> {
        let state = self.clone();
        tokio::spawn(async move {
            state.process(candidate).await;
        })
    }

    /// Dispatch a whole batch without waiting for earlier files to finish.
    pub fn dispatch_all(&self, candidates: Vec<CandidateFile>) -> Vec<JoinHandle<()>> {
        candidates.into_iter().map(|c| self.dispatch(c)).collect()
    }

    async fn process(&self, candidate: CandidateFile) {
        // 0 -> 1 is the only transition the indicator needs to hear about.
        if self.in_flight.fetch_add(1, Ordering::SeqCst) == 0 {
            let _ = self.events.send(AppEvent::ProcessingStarted);
        }

        match self.shrink(&candidate).await {
            Ok(outcome) => relay_success(&self.events, outcome),
            Err(err) => relay_failure(&self.events, &candidate.name, &err),
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    /// The per-file pipeline: measure, route, compress, measure again.
    async fn shrink(&self, candidate: &CandidateFile) -> ShrinkerResult<ShrinkOutcome> {
        let settings = self.settings();

        // Doubles as the readability check for the source file.
        let original_size = file_size(&candidate.path).await?;
        self.recents.add(&candidate.path);

        let format = candidate.extension.parse()?;
        let compressor = self
            .registry
            .get(format)
            .ok_or_else(|| ShrinkerError::unsupported_format(candidate.extension.clone()))?;

        let output_path = compute_output_path(&candidate.path, &settings).await?;
        debug!("Dispatching {} -> {}", candidate.name, output_path.display());
        compressor
            .compress(&candidate.path, &output_path, &settings)
            .await?;

        let compressed_size = file_size(&output_path).await?;
        Ok(ShrinkOutcome {
            output_path: output_path.to_string_lossy().to_string(),
            original_size,
            compressed_size,
        })
    }
}
