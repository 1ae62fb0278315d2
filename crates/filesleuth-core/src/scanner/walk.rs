/// Directory walker using `jwalk`.
///
/// Directory reading runs on jwalk's rayon-backed pool; this thread only
/// consumes entries. Regular files are buffered into a local batch, and each
/// batch is visited in parallel on a second pool (stat, sniff, permission
/// check). Outcomes come back in discovery order and are folded into the
/// `AnalysisResult` on this thread alone, so the result never needs a lock.
///
/// # Skipped entries
///
/// - Symlinks are never classified or descended into (cycle prevention).
/// - FIFOs, sockets and devices are ignored; sniffing a FIFO would block.
/// - Unreadable subdirectories and files that fail to stat are counted in
///   `AnalysisResult::skipped` and reported as `ScanProgress::Error`.
use crate::model::size::format_size;
use crate::model::{AnalysisResult, ScanConfig};
use crate::scanner::progress::ScanProgress;
use crate::scanner::visit::{visit_file, FileVisit};
use crate::scanner::ScanError;
use crossbeam_channel::Sender;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Number of files to buffer before visiting them as one parallel batch.
const BATCH_SIZE: usize = 2_000;

/// Walked entries between cancellation checks. Visits also check the flag
/// per file, so a batch of large files can be abandoned part-way.
const CANCEL_CHECK_INTERVAL: u64 = 100;

/// Run one complete scan of `config.root()`.
///
/// Only a failure to open the root itself is an error. Everything below the
/// root is best-effort.
pub(crate) fn run_scan(
    config: &ScanConfig,
    cancel_flag: &AtomicBool,
    progress_tx: Option<&Sender<ScanProgress>>,
) -> Result<AnalysisResult, ScanError> {
    let start = Instant::now();
    let root = config.root();

    open_root(root)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads())
        .thread_name(|i| format!("filesleuth-visit-{i}"))
        .build()?;

    let mut result = AnalysisResult::new(root, config.threshold());
    let mut pending: Vec<PathBuf> = Vec::with_capacity(BATCH_SIZE);
    let mut entries_seen: u64 = 0;

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::RayonNewPool(config.threads()));

    for entry_result in walker {
        entries_seen += 1;
        if entries_seen.is_multiple_of(CANCEL_CHECK_INTERVAL) && cancel_flag.load(Ordering::Relaxed)
        {
            result.cancelled = true;
            break;
        }

        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                // jwalk errors are typically access-denied on subdirectories.
                result.skipped += 1;
                let path = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                debug!("Skipping unreadable entry {path}: {err}");
                notify(
                    progress_tx,
                    ScanProgress::Error {
                        path,
                        message: err.to_string(),
                    },
                );
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_symlink() || !file_type.is_file() {
            continue;
        }
        pending.push(entry.path());

        if pending.len() >= BATCH_SIZE {
            flush_pending(&pool, &mut pending, &mut result, cancel_flag, progress_tx);
            if result.cancelled {
                break;
            }
        }
    }

    // Files still pending once cancellation is seen are dropped unvisited.
    flush_pending(&pool, &mut pending, &mut result, cancel_flag, progress_tx);

    result.duration = start.elapsed();
    info!(
        "Scan of {} {}: {} files ({}), {} skipped in {:?}",
        root.display(),
        if result.cancelled { "cancelled" } else { "complete" },
        result.total_files(),
        format_size(result.total_bytes()),
        result.skipped,
        result.duration
    );

    Ok(result)
}

/// Check that the root can be listed before walking it.
fn open_root(root: &Path) -> Result<(), ScanError> {
    match std::fs::read_dir(root) {
        Ok(_) => Ok(()),
        Err(err) => {
            warn!("Cannot access scan root {}: {err}", root.display());
            let path = root.to_path_buf();
            if err.kind() == io::ErrorKind::PermissionDenied {
                Err(ScanError::PermissionDenied { path })
            } else {
                Err(ScanError::RootUnreadable { path, source: err })
            }
        }
    }
}

/// Visit every pending file in parallel and fold the outcomes into `result`.
///
/// Files not yet visited when `cancel_flag` is raised are dropped and the
/// result is marked cancelled.
fn flush_pending(
    pool: &ThreadPool,
    pending: &mut Vec<PathBuf>,
    result: &mut AnalysisResult,
    cancel_flag: &AtomicBool,
    progress_tx: Option<&Sender<ScanProgress>>,
) {
    let count = pending.len();
    if count == 0 {
        return;
    }
    let last_path = pending
        .last()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    let visits: Vec<FileVisit> = pool.install(|| {
        pending
            .par_drain(..)
            .filter_map(|path| {
                if cancel_flag.load(Ordering::Relaxed) {
                    None
                } else {
                    Some(visit_file(path))
                }
            })
            .collect()
    });
    if visits.len() < count {
        result.cancelled = true;
    }

    for visit in visits {
        match visit {
            FileVisit::Analysed(record) => result.record(record),
            FileVisit::Skipped { path, error } => {
                result.skipped += 1;
                debug!("Skipping {}: {error}", path.display());
                notify(
                    progress_tx,
                    ScanProgress::Error {
                        path: path.display().to_string(),
                        message: error.to_string(),
                    },
                );
            }
        }
    }

    debug!("Flushed batch of {count} files");
    notify(
        progress_tx,
        ScanProgress::Update {
            files_found: result.total_files() as u64,
            skipped: result.skipped,
            total_size: result.total_bytes(),
            current_path: last_path,
        },
    );
}

/// Send a progress message without ever blocking the scan.
pub(crate) fn notify(progress_tx: Option<&Sender<ScanProgress>>, msg: ScanProgress) {
    if let Some(tx) = progress_tx {
        let _ = tx.try_send(msg);
    }
}
