/// Machine-readable exports of a finished scan.
///
/// JSON carries the full [`AnalysisResult`]; CSV carries one row of totals
/// per category.
use crate::analysis::category_stats;
use crate::model::size::format_mib;
use crate::model::AnalysisResult;
use std::io::Write;

/// Errors raised while writing an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Write `result` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(result: &AnalysisResult, mut writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, result)?;
    writeln!(writer)?;
    Ok(())
}

/// Write per-category totals as CSV with a `category,files,bytes,mib` header.
pub fn write_csv<W: Write>(result: &AnalysisResult, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["category", "files", "bytes", "mib"])?;
    for stats in category_stats(result) {
        wtr.write_record([
            stats.category.label().to_string(),
            stats.file_count.to_string(),
            stats.total_size.to_string(),
            format_mib(stats.total_size, 4),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
