/// Scanner module — orchestrates filesystem scanning.
///
/// Two entry points over the same walker:
/// - [`scan`] / [`scan_with_cancel`] run synchronously on the calling thread.
/// - [`start_scan`] runs on a background thread and streams
///   [`ScanProgress`] messages, with cancellation through the [`ScanHandle`].
///
/// Either way each scan builds a fresh [`AnalysisResult`] and returns it by
/// value once the walk finishes; no state is shared between scans.
pub mod progress;
pub mod visit;
mod walk;

use crate::model::{AnalysisResult, ScanConfig};
use progress::ScanProgress;

use crossbeam_channel::Receiver;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tracing::{error, info};

/// Scan-level failures. Per-file problems never show up here.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The root directory exists but may not be listed.
    #[error("No permission to access directory {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// The root directory could not be opened for any other reason.
    #[error("Cannot read directory {}: {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to spawn scanner thread: {0}")]
    Spawn(#[source] io::Error),

    /// The background scan thread panicked.
    #[error("Unexpected error during directory traversal: scanner thread panicked")]
    WorkerPanicked,
}

/// Maximum number of progress messages that may queue up in the channel.
///
/// Messages beyond this are dropped rather than blocking the scanner, so a
/// consumer that never drains the channel cannot stall a scan.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Scan `config.root()` on the calling thread.
pub fn scan(config: &ScanConfig) -> Result<AnalysisResult, ScanError> {
    scan_with_cancel(config, &AtomicBool::new(false))
}

/// Scan `config.root()` on the calling thread, stopping early once
/// `cancel_flag` is set. A cancelled scan returns `Ok` with
/// `cancelled == true` and whatever had been collected.
pub fn scan_with_cancel(
    config: &ScanConfig,
    cancel_flag: &AtomicBool,
) -> Result<AnalysisResult, ScanError> {
    walk::run_scan(config, cancel_flag, None)
}

/// Handle to a running or completed background scan.
pub struct ScanHandle {
    /// Receiver for progress updates from the scan thread.
    pub progress_rx: Receiver<ScanProgress>,
    /// Flag to request cancellation.
    cancel_flag: Arc<AtomicBool>,
    /// Join handle for the scan thread.
    thread: thread::JoinHandle<Result<AnalysisResult, ScanError>>,
}

impl ScanHandle {
    /// Request the scan to stop as soon as possible.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }

    /// `true` once the scan thread has exited.
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the scan to finish and take its result.
    pub fn join(self) -> Result<AnalysisResult, ScanError> {
        match self.thread.join() {
            Ok(outcome) => outcome,
            Err(_) => {
                error!("Scanner thread panicked");
                Err(ScanError::WorkerPanicked)
            }
        }
    }
}

/// Start a new scan on a background thread.
///
/// Returns a [`ScanHandle`] for receiving progress, requesting cancellation,
/// and collecting the result.
pub fn start_scan(config: ScanConfig) -> Result<ScanHandle, ScanError> {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let thread = thread::Builder::new()
        .name("filesleuth-scanner".into())
        .spawn(move || {
            info!("Starting scan of {}", config.root().display());

            let outcome = walk::run_scan(&config, &cancel_clone, Some(&progress_tx));
            let terminal = match &outcome {
                Ok(result) if result.cancelled => ScanProgress::Cancelled,
                Ok(result) => ScanProgress::Complete {
                    duration: result.duration,
                    skipped: result.skipped,
                },
                Err(err) => ScanProgress::Failed {
                    message: err.to_string(),
                },
            };
            walk::notify(Some(&progress_tx), terminal);
            outcome
        })
        .map_err(ScanError::Spawn)?;

    Ok(ScanHandle {
        progress_rx,
        cancel_flag,
        thread,
    })
}
