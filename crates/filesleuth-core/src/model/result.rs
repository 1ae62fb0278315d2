/// The aggregated output of one scan.
use super::category::Category;
use super::lossy_path;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A file larger than the configured threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OversizedFile {
    #[serde(serialize_with = "lossy_path::path")]
    pub path: PathBuf,
    pub size: u64,
}

/// Everything learned about one regular file during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub size: u64,
    pub category: Category,
    pub world_writable: bool,
}

/// Per-category file lists and totals, plus the two policy-violation lists.
///
/// A result is created empty at the start of a scan, filled by the scanner
/// via [`AnalysisResult::record`], and handed to the caller by value once
/// the scan finishes. It is never reused across scans.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Absolute path of the scanned root.
    #[serde(serialize_with = "lossy_path::path")]
    pub root: PathBuf,

    /// Oversized threshold in bytes the scan ran with.
    pub threshold: u64,

    /// Paths per category, in discovery order.
    #[serde(serialize_with = "lossy_path::path_map")]
    pub files_by_category: BTreeMap<Category, Vec<PathBuf>>,

    /// Total bytes per category.
    pub size_by_category: BTreeMap<Category, u64>,

    /// Files whose size is strictly greater than `threshold`.
    pub oversized_files: Vec<OversizedFile>,

    /// Files with the others-writable mode bit set.
    #[serde(serialize_with = "lossy_path::paths")]
    pub unusual_permission_files: Vec<PathBuf>,

    /// Entries skipped because they could not be read (stat failures,
    /// unreadable subdirectories).
    pub skipped: u64,

    /// `true` if the scan stopped early because cancellation was requested.
    pub cancelled: bool,

    /// When the scan started.
    pub started_at: DateTime<Utc>,

    /// Wall-clock time the scan took.
    pub duration: Duration,
}

impl AnalysisResult {
    /// Create an empty result for a scan of `root`.
    pub fn new(root: impl Into<PathBuf>, threshold: u64) -> Self {
        Self {
            root: root.into(),
            threshold,
            files_by_category: BTreeMap::new(),
            size_by_category: BTreeMap::new(),
            oversized_files: Vec::new(),
            unusual_permission_files: Vec::new(),
            skipped: 0,
            cancelled: false,
            started_at: Utc::now(),
            duration: Duration::ZERO,
        }
    }

    /// Fold one visited file into the aggregates.
    pub fn record(&mut self, file: FileRecord) {
        let FileRecord {
            path,
            size,
            category,
            world_writable,
        } = file;

        if size > self.threshold {
            self.oversized_files.push(OversizedFile {
                path: path.clone(),
                size,
            });
        }
        if world_writable {
            self.unusual_permission_files.push(path.clone());
        }

        let total = self.size_by_category.entry(category).or_insert(0);
        *total = total.saturating_add(size);
        self.files_by_category.entry(category).or_default().push(path);
    }

    /// Number of files recorded in `category`.
    pub fn file_count(&self, category: Category) -> usize {
        self.files_by_category.get(&category).map_or(0, Vec::len)
    }

    /// Total bytes recorded in `category`.
    pub fn total_size(&self, category: Category) -> u64 {
        self.size_by_category.get(&category).copied().unwrap_or(0)
    }

    /// Number of files recorded across all categories.
    pub fn total_files(&self) -> usize {
        self.files_by_category.values().map(Vec::len).sum()
    }

    /// Total bytes recorded across all categories.
    pub fn total_bytes(&self) -> u64 {
        self.size_by_category
            .values()
            .fold(0u64, |acc, &n| acc.saturating_add(n))
    }

    /// The category `path` was recorded under, if any.
    pub fn category_of(&self, path: &Path) -> Option<Category> {
        self.files_by_category
            .iter()
            .find(|(_, paths)| paths.iter().any(|p| p == path))
            .map(|(&cat, _)| cat)
    }

    /// `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.files_by_category.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(path: &str, size: u64, category: Category, world_writable: bool) -> FileRecord {
        FileRecord {
            path: PathBuf::from(path),
            size,
            category,
            world_writable,
        }
    }

    #[test]
    fn record_accumulates_per_category() {
        let mut result = AnalysisResult::new("/root", 1_000);
        result.record(rec("/root/a.txt", 10, Category::Text, false));
        result.record(rec("/root/b.txt", 20, Category::Text, false));
        result.record(rec("/root/c.png", 30, Category::Image, false));

        assert_eq!(result.file_count(Category::Text), 2);
        assert_eq!(result.total_size(Category::Text), 30);
        assert_eq!(result.file_count(Category::Image), 1);
        assert_eq!(result.total_size(Category::Image), 30);
        assert_eq!(result.total_files(), 3);
        assert_eq!(result.total_bytes(), 60);
    }

    #[test]
    fn record_preserves_discovery_order() {
        let mut result = AnalysisResult::new("/root", 1_000);
        for name in ["/root/z", "/root/a", "/root/m"] {
            result.record(rec(name, 1, Category::Other, false));
        }
        let paths: Vec<_> = result.files_by_category[&Category::Other]
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        assert_eq!(paths, vec!["/root/z", "/root/a", "/root/m"]);
    }

    /// The threshold is exclusive: a file exactly at it is not oversized.
    #[test]
    fn oversized_is_strictly_greater() {
        let mut result = AnalysisResult::new("/root", 100);
        result.record(rec("/root/at", 100, Category::Other, false));
        result.record(rec("/root/over", 101, Category::Other, false));

        assert_eq!(
            result.oversized_files,
            vec![OversizedFile {
                path: PathBuf::from("/root/over"),
                size: 101
            }]
        );
    }

    #[test]
    fn flagged_paths_also_appear_in_a_category() {
        let mut result = AnalysisResult::new("/root", 5);
        result.record(rec("/root/w.txt", 50, Category::Text, true));

        assert_eq!(result.unusual_permission_files.len(), 1);
        assert_eq!(result.oversized_files.len(), 1);
        for path in result
            .unusual_permission_files
            .iter()
            .chain(result.oversized_files.iter().map(|o| &o.path))
        {
            assert_eq!(result.category_of(path), Some(Category::Text));
        }
    }

    #[test]
    fn empty_result_has_zero_totals() {
        let result = AnalysisResult::new("/root", 5);
        assert!(result.is_empty());
        assert_eq!(result.total_files(), 0);
        assert_eq!(result.total_bytes(), 0);
        assert_eq!(result.total_size(Category::Text), 0);
    }
}
