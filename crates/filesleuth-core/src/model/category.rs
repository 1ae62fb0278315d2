/// Content categories a scanned file can be assigned to.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of content classifications.
///
/// Declaration order is also the order categories appear in reports, since
/// results are keyed by this type in a `BTreeMap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Text,
    Image,
    Executable,
    Video,
    Audio,
    #[serde(rename = "PDF")]
    Pdf,
    Other,
    Unknown,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 8] = [
        Self::Text,
        Self::Image,
        Self::Executable,
        Self::Video,
        Self::Audio,
        Self::Pdf,
        Self::Other,
        Self::Unknown,
    ];

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Image => "Image",
            Self::Executable => "Executable",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Pdf => "PDF",
            Self::Other => "Other",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
