/// Content-based file classification.
///
/// The type of a file is decided from its leading bytes, not its name:
/// magic-number detection first, then a text/binary heuristic. The sniffed
/// MIME string is mapped onto a [`Category`] with an ordered substring table.
use crate::model::Category;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::trace;

/// Number of leading bytes read for sniffing.
const SNIFF_LEN: u64 = 8 * 1024;

/// MIME string reported for zero-length files.
pub const EMPTY_MIME: &str = "inode/x-empty";

/// MIME string for content with no known signature that looks textual.
pub const TEXT_MIME: &str = "text/plain";

/// MIME string for content with no known signature that looks binary.
pub const BINARY_MIME: &str = "application/octet-stream";

/// Signatures matched on two or three printable bytes (`BM`, `MZ`, `ID3`).
/// A match on one of these only counts when the content is not textual.
const WEAK_SIGNATURES: [&str; 4] = [
    "image/bmp",
    "application/vnd.microsoft.portable-executable",
    "application/x-msdownload",
    "audio/mpeg",
];

/// Substring → category table. Order matters: first match wins.
const PATTERNS: [(&str, Category); 6] = [
    ("text", Category::Text),
    ("image", Category::Image),
    ("exec", Category::Executable),
    ("video", Category::Video),
    ("audio", Category::Audio),
    ("application/pdf", Category::Pdf),
];

/// Sniff the MIME type of the file at `path` from its first 8 KiB.
pub fn sniff_mime(path: &Path) -> io::Result<&'static str> {
    let mut buf = Vec::with_capacity(SNIFF_LEN as usize);
    File::open(path)?.take(SNIFF_LEN).read_to_end(&mut buf)?;
    Ok(mime_for_bytes(&buf))
}

/// Derive a MIME type from a file's leading bytes.
///
/// Signature matches win, except weak ones over textual content: prose
/// starting with "BMW" or "MZ" is text, not a bitmap or a DOS executable.
pub fn mime_for_bytes(buf: &[u8]) -> &'static str {
    if buf.is_empty() {
        return EMPTY_MIME;
    }
    let is_text = content_inspector::inspect(buf).is_text();
    if let Some(kind) = infer::get(buf) {
        let mime = kind.mime_type();
        if !(is_text && WEAK_SIGNATURES.contains(&mime)) {
            return mime;
        }
    }
    if is_text {
        TEXT_MIME
    } else {
        BINARY_MIME
    }
}

/// Map a sniffed MIME string onto a category.
///
/// Empty `.txt` files sniff as [`EMPTY_MIME`], so the `.txt` extension check
/// runs inside the pattern loop right after the `"text"` test: any `.txt`
/// file whose MIME lacks `"text"` is Text before the other patterns are
/// consulted.
pub fn category_for_mime(path: &Path, mime: &str) -> Category {
    if mime.is_empty() {
        return Category::Unknown;
    }
    for (pattern, category) in PATTERNS {
        if mime.contains(pattern) {
            return category;
        } else if has_txt_extension(path) {
            return Category::Text;
        }
    }
    Category::Other
}

/// Classify the file at `path`. Never fails: unreadable files are `Unknown`.
pub fn classify(path: &Path) -> Category {
    match sniff_mime(path) {
        Ok(mime) => category_for_mime(path, mime),
        Err(err) => {
            trace!("cannot sniff {}: {err}", path.display());
            Category::Unknown
        }
    }
}

/// Case-sensitive, so `notes.TXT` does not qualify. A dotfile named
/// `.txt` has no extension.
fn has_txt_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "txt")
}
