/// Plain-text summary report.
///
/// Layout:
///
/// ```text
///
/// === File System Analysis Report ===
/// Directory Analyzed: /data
///
/// File Type Distribution:
/// Text: 2 files, Total Size: 0.0001 MB
///
/// Large Files (> 100.0 MB):
/// /data/large_file.bin: 150.00 MB
///
/// Files with Unusual Permissions:
/// /data/writable_file.txt
/// ```
use filesleuth_core::analysis::{category_stats, oversized_by_size};
use filesleuth_core::model::size::{bytes_to_mib, format_mib};
use filesleuth_core::AnalysisResult;
use std::io::{self, Write};

/// Write the text report for `result`.
pub fn write_text<W: Write>(result: &AnalysisResult, mut w: W) -> io::Result<()> {
    writeln!(w, "\n=== File System Analysis Report ===")?;
    writeln!(w, "Directory Analyzed: {}\n", result.root.display())?;

    writeln!(w, "File Type Distribution:")?;
    for stats in category_stats(result) {
        writeln!(
            w,
            "{}: {} files, Total Size: {} MB",
            stats.category,
            stats.file_count,
            format_mib(stats.total_size, 4)
        )?;
    }

    writeln!(w, "\nLarge Files (> {} MB):", threshold_label(result.threshold))?;
    for file in oversized_by_size(result) {
        writeln!(w, "{}: {} MB", file.path.display(), format_mib(file.size, 2))?;
    }

    writeln!(w, "\nFiles with Unusual Permissions:")?;
    for path in &result.unusual_permission_files {
        writeln!(w, "{}", path.display())?;
    }
    Ok(())
}

/// Threshold in MiB, always with at least one decimal (`100.0`, `0.5`).
fn threshold_label(bytes: u64) -> String {
    let mib = bytes_to_mib(bytes);
    if mib.fract() == 0.0 {
        format!("{mib:.1}")
    } else {
        format!("{mib}")
    }
}
