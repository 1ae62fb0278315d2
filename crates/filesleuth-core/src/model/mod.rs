/// Data model for FileSleuth scans.
///
/// Re-exports the immutable scan input, the closed category set, and the
/// aggregated result handed to reporting frontends.
pub mod category;
pub mod config;
mod lossy_path;
pub mod result;
pub mod size;

pub use category::Category;
pub use config::{ScanConfig, DEFAULT_THRESHOLD_BYTES, DEFAULT_THRESHOLD_MIB};
pub use result::{AnalysisResult, FileRecord, OversizedFile};
