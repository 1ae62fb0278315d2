/// Size conversion and formatting utilities.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// at the display-formatting boundary.

const MIB: u64 = 1024 * 1024;

/// Convert a MiB count to bytes, saturating at `u64::MAX`.
pub fn mib_to_bytes(mib: u64) -> u64 {
    mib.saturating_mul(MIB)
}

/// Convert a byte count to fractional MiB.
pub fn bytes_to_mib(bytes: u64) -> f64 {
    bytes as f64 / MIB as f64
}

/// Format a byte count as MiB with a fixed number of decimals.
///
/// The unit is labelled "MB" in reports because that is what users expect.
pub fn format_mib(bytes: u64, decimals: usize) -> String {
    format!("{:.*}", decimals, bytes_to_mib(bytes))
}

/// Format a byte count into a human-readable string with appropriate unit.
///
/// Uses binary units (KiB = 1024) with the common short labels.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;
    const TB: f64 = GB * 1024.0;

    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else if b < GB {
        format!("{:.1} MB", b / MB)
    } else if b < TB {
        format!("{:.2} GB", b / GB)
    } else {
        format!("{:.2} TB", b / TB)
    }
}
