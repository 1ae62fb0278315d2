/// Unsafe-permission detection.
///
/// Only the others-writable bit counts as unusual. Setuid, setgid and
/// others-execute are deliberately not flagged.
use std::path::Path;

/// Mode bit for "writable by others" (`S_IWOTH`).
pub const OTHERS_WRITABLE: u32 = 0o002;

/// Check whether the file at `path` is world-writable.
///
/// Follows symlinks like `stat(2)`. Any error reading the status (file
/// vanished, permission denied) yields `false`.
#[cfg(unix)]
pub fn has_unusual_permissions(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(path) {
        Ok(meta) => meta.permissions().mode() & OTHERS_WRITABLE != 0,
        Err(err) => {
            tracing::trace!("cannot stat {}: {err}", path.display());
            false
        }
    }
}

/// Non-Unix platforms have no others-writable bit; nothing is flagged.
#[cfg(not(unix))]
pub fn has_unusual_permissions(_path: &Path) -> bool {
    false
}
