//! Serde helpers that write paths as strings, replacing invalid UTF-8 with
//! U+FFFD instead of failing the whole export.
use super::category::Category;
use serde::Serializer;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub(crate) fn path<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

pub(crate) fn paths<S: Serializer>(paths: &[PathBuf], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(paths.iter().map(|p| p.to_string_lossy()))
}

pub(crate) fn path_map<S: Serializer>(
    map: &BTreeMap<Category, Vec<PathBuf>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(map.iter().map(|(category, paths)| {
        let lossy: Vec<_> = paths.iter().map(|p| p.to_string_lossy()).collect();
        (category, lossy)
    }))
}
