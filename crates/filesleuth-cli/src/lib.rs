/// FileSleuth CLI — argument parsing, scan driving, and the text report.
///
/// The binary crate stays a thin entry point; everything testable lives here.
pub mod app;
pub mod args;
pub mod report;

pub use app::run;
pub use args::{Args, OutputFormat};
