/// Drives one scan from parsed arguments to a written report.
use crate::args::{Args, OutputFormat};
use crate::report;
use anyhow::{bail, Context};
use filesleuth_core::export;
use filesleuth_core::model::size::format_size;
use filesleuth_core::scanner::progress::ScanProgress;
use filesleuth_core::{start_scan, ScanConfig, ScanHandle};
use std::io::Write;
use tracing::{debug, info, warn};

/// Validate the arguments, run the scan, and write the report to `out`.
///
/// Fails without scanning if the directory argument is not a directory, and
/// fails after the walk starts only if the root itself cannot be read.
pub fn run<W: Write>(args: &Args, out: W) -> anyhow::Result<()> {
    if !args.directory.is_dir() {
        bail!("{} is not a valid directory", args.directory.display());
    }

    let mut config = ScanConfig::new(&args.directory).with_threshold_mib(args.threshold);
    if let Some(threads) = args.threads {
        config = config.with_threads(threads);
    }

    let handle = start_scan(config)?;
    drain_progress(&handle);
    let result = handle.join()?;

    match args.format {
        OutputFormat::Text => report::write_text(&result, out).context("failed to write report")?,
        OutputFormat::Json => export::write_json(&result, out)?,
        OutputFormat::Csv => export::write_csv(&result, out)?,
    }
    Ok(())
}

/// Log progress until the scan thread exits and drops its sender.
fn drain_progress(handle: &ScanHandle) {
    for msg in handle.progress_rx.iter() {
        match msg {
            ScanProgress::Update {
                files_found,
                total_size,
                current_path,
                ..
            } => debug!(
                "{files_found} files ({}) so far, at {current_path}",
                format_size(total_size)
            ),
            ScanProgress::Error { path, message } => debug!("Skipped {path}: {message}"),
            ScanProgress::Complete { duration, skipped } => {
                info!("Scan finished in {duration:?} ({skipped} entries skipped)");
            }
            ScanProgress::Cancelled => warn!("Scan cancelled; report is partial"),
            ScanProgress::Failed { message } => debug!("Scan failed: {message}"),
        }
    }
}
