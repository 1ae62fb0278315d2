/// Immutable scan input.
use std::path::{Path, PathBuf};

/// Default oversized-file threshold in MiB.
pub const DEFAULT_THRESHOLD_MIB: u64 = 100;

/// Default oversized-file threshold in bytes (100 MiB).
pub const DEFAULT_THRESHOLD_BYTES: u64 = DEFAULT_THRESHOLD_MIB * 1024 * 1024;

/// Configuration for one scan.
///
/// Built once from validated user input and never mutated afterwards; the
/// builder-style `with_*` methods consume and return `self`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    root: PathBuf,
    threshold: u64,
    threads: usize,
}

impl ScanConfig {
    /// Create a config for `root` with the default threshold and one worker
    /// per logical CPU.
    ///
    /// Relative roots are made absolute against the current directory so
    /// every path in the result is absolute. If the current directory cannot
    /// be determined the path is kept as given.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
        Self {
            root,
            threshold: DEFAULT_THRESHOLD_BYTES,
            threads: num_cpus::get().max(1),
        }
    }

    /// Set the oversized-file threshold in bytes.
    pub fn with_threshold(mut self, bytes: u64) -> Self {
        self.threshold = bytes;
        self
    }

    /// Set the oversized-file threshold in MiB. Saturates instead of
    /// overflowing for absurd inputs.
    pub fn with_threshold_mib(self, mib: u64) -> Self {
        self.with_threshold(super::size::mib_to_bytes(mib))
    }

    /// Set the number of worker threads. Zero is clamped to one.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Files strictly larger than this many bytes are oversized.
    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    pub fn threads(&self) -> usize {
        self.threads
    }
}
