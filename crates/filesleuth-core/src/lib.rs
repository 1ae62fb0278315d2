/// FileSleuth Core — scanning, classification, and result model.
///
/// This crate contains all business logic with zero CLI dependencies.
/// It is designed to be reusable across different frontends (CLI, TUI, GUI).
///
/// # Modules
///
/// - [`model`] — Scan configuration, file categories, and the analysis result.
/// - [`scanner`] — Filesystem traversal with batching, cancellation, and progress.
/// - [`analysis`] — Content sniffing and post-scan summaries.
/// - [`platform`] — Unix permission checks.
/// - [`export`] — JSON and CSV serialisation of a finished result.
pub mod analysis;
pub mod export;
pub mod model;
pub mod platform;
pub mod scanner;

pub use model::{AnalysisResult, Category, OversizedFile, ScanConfig};
pub use scanner::{scan, scan_with_cancel, start_scan, ScanError, ScanHandle};
