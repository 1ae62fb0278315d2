/// Analysis modules — per-file content classification and post-scan summaries.

pub mod classify;
pub mod summary;

pub use classify::{category_for_mime, classify, mime_for_bytes, sniff_mime};
pub use summary::{category_stats, oversized_by_size, CategoryStats};
