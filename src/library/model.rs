use std::path::{Path, PathBuf};

/// Name shown when the track list is empty.
pub const NO_TRACK_NAME: &str = "No Track";

/// One playable item: a display label and where its audio lives.
///
/// `source` may be absent or point at a file that cannot be decoded; the
/// engine treats both as a silent, still-animated track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub source: Option<PathBuf>,
}

impl Track {
    pub fn new(name: impl Into<String>, source: Option<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Name of `track`, or the "no track" sentinel.
    pub fn name_or_placeholder(track: Option<&Track>) -> &str {
        track.map_or(NO_TRACK_NAME, |t| t.name.as_str())
    }
}
