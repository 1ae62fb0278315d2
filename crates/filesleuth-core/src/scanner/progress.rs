/// Scan progress reporting — lightweight messages sent from the scan
/// thread to the consumer via a crossbeam channel.
///
/// Delivery is best-effort: messages are dropped rather than stalling the
/// scan when the channel is full. [`super::ScanHandle::join`] is the
/// authoritative source for the final result.
use std::time::Duration;

/// Progress updates sent from the scan thread.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanProgress {
    /// Periodic update with running totals, sent after each batch.
    Update {
        files_found: u64,
        skipped: u64,
        total_size: u64,
        current_path: String,
    },
    /// A non-fatal error (e.g. permission denied on one file or subdirectory).
    Error { path: String, message: String },
    /// Scanning completed successfully.
    Complete { duration: Duration, skipped: u64 },
    /// Scan stopped early on request; the partial result is available.
    Cancelled,
    /// The scan could not start (root inaccessible).
    Failed { message: String },
}
