/// Post-scan views over a finished [`AnalysisResult`].
///
/// These are what report frontends consume: per-category totals in category
/// order, and the oversized files ranked largest first.
use crate::model::{AnalysisResult, Category, OversizedFile};
use serde::Serialize;

/// Size and count totals for a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub category: Category,
    pub file_count: u64,
    pub total_size: u64,
}

/// Per-category stats for every category that has at least one file,
/// in category declaration order.
pub fn category_stats(result: &AnalysisResult) -> Vec<CategoryStats> {
    result
        .files_by_category
        .iter()
        .map(|(&category, files)| CategoryStats {
            category,
            file_count: files.len() as u64,
            total_size: result.total_size(category),
        })
        .collect()
}

/// Oversized files sorted by size descending. Ties keep discovery order.
pub fn oversized_by_size(result: &AnalysisResult) -> Vec<&OversizedFile> {
    let mut files: Vec<&OversizedFile> = result.oversized_files.iter().collect();
    files.sort_by(|a, b| b.size.cmp(&a.size));
    files
}
