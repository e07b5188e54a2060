// Headless entry point: the OS file-association surface. Paths handed over
// by "open with" (or typed on the command line) run through the same intake
// and dispatch pipeline the desktop shell drives over the event channel.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{error, info};

use image_shrinker::{intake, AppEvent, AppState, SettingsStore};

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)          // Keep colored output
        .compact();               // Use compact formatter instead of pretty

    subscriber.init();

    info!("=== Image Shrinker Starting ===");

    let store = SettingsStore::default_location()?;
    let settings = store.load()?;

    let paths: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        info!("Nothing to shrink; pass file or folder paths as arguments");
        return Ok(());
    }

    let (state, mut events) = AppState::new(settings);

    // Render each result as it arrives; completion order is unspecified.
    let printer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match event {
                AppEvent::ProcessingStarted => info!("Processing started"),
                AppEvent::FileCompressed {
                    output_path,
                    original_size,
                    compressed_size,
                    percent_saved,
                } => info!(
                    "You saved {}%: {} ({} -> {} bytes)",
                    percent_saved, output_path, original_size, compressed_size
                ),
                AppEvent::ProcessingFailed { message } => error!("{}", message),
            }
        }
    });

    let candidates = intake::from_drop(&paths);
    for handle in state.dispatch_all(candidates) {
        let _ = handle.await;
    }

    // Dropping the state closes the event channel so the printer drains out.
    drop(state);
    printer.await?;

    Ok(())
}
