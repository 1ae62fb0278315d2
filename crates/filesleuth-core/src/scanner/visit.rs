/// Per-file work: stat, classify, permission check.
///
/// Runs on the worker pool. Each visit touches only its own file, so visits
/// are independent and their outcomes can be folded in any order.
use crate::analysis::classify;
use crate::model::FileRecord;
use crate::platform::has_unusual_permissions;
use std::io;
use std::path::PathBuf;

/// Outcome of visiting one regular file.
#[derive(Debug)]
pub enum FileVisit {
    /// The file was sized and classified.
    Analysed(FileRecord),
    /// The file could not be sized (deleted mid-scan, access revoked).
    Skipped { path: PathBuf, error: io::Error },
}

/// Visit one regular file.
pub fn visit_file(path: PathBuf) -> FileVisit {
    // Size comes from lstat so a file swapped for a symlink mid-scan is not
    // followed.
    let size = match std::fs::symlink_metadata(&path) {
        Ok(meta) => meta.len(),
        Err(error) => return FileVisit::Skipped { path, error },
    };

    let category = classify(&path);
    let world_writable = has_unusual_permissions(&path);

    FileVisit::Analysed(FileRecord {
        path,
        size,
        category,
        world_writable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use tempfile::TempDir;

    #[test]
    fn visit_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("note.txt");
        std::fs::write(&path, b"hello there, plain text").unwrap();

        match visit_file(path.clone()) {
            FileVisit::Analysed(record) => {
                assert_eq!(record.path, path);
                assert_eq!(record.size, 23);
                assert_eq!(record.category, Category::Text);
            }
            FileVisit::Skipped { error, .. } => panic!("unexpected skip: {error}"),
        }
    }

    #[test]
    fn visit_vanished_file_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("vanished.bin");

        match visit_file(path.clone()) {
            FileVisit::Skipped { path: skipped, error } => {
                assert_eq!(skipped, path);
                assert_eq!(error.kind(), io::ErrorKind::NotFound);
            }
            FileVisit::Analysed(record) => panic!("unexpected record: {record:?}"),
        }
    }
}
