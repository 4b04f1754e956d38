use std::path::Path;

use lofty::prelude::*;
use tracing::debug;

use crate::config::TrackDisplayField;

/// Label for a scanned file that has neither usable tags nor a file stem.
pub const UNTITLED: &str = "Untitled";

/// Tag values read from an audio file. Blank values are dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrackTags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
}

fn non_blank(value: Option<impl AsRef<str>>) -> Option<String> {
    value
        .map(|v| v.as_ref().trim().to_string())
        .filter(|v| !v.is_empty())
}

fn file_stem(path: &Path) -> Option<&str> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

impl TrackTags {
    /// Read the primary (or first) tag of `path`. Unreadable files yield no tags.
    pub fn read(path: &Path) -> Self {
        let tagged = match lofty::read_from_path(path) {
            Ok(tagged) => tagged,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no readable tags");
                return Self::default();
            }
        };
        let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
            return Self::default();
        };
        Self {
            title: non_blank(tag.title()),
            artist: non_blank(tag.artist()),
            album: non_blank(tag.album()),
        }
    }

    /// One display part for `field`. An untagged title falls back to the file stem.
    fn part(&self, field: TrackDisplayField, path: &Path) -> Option<String> {
        match field {
            TrackDisplayField::Title => self
                .title
                .clone()
                .or_else(|| file_stem(path).map(str::to_string)),
            TrackDisplayField::Artist => self.artist.clone(),
            TrackDisplayField::Album => self.album.clone(),
            TrackDisplayField::Filename => file_stem(path).map(str::to_string),
            TrackDisplayField::Path => Some(path.display().to_string()),
        }
    }
}

/// Playlist label for the file at `path`.
///
/// Joins the configured `fields` that have a value with `sep`. When none do,
/// the label is the file stem, then [`UNTITLED`].
pub fn track_label(path: &Path, tags: &TrackTags, fields: &[TrackDisplayField], sep: &str) -> String {
    let parts: Vec<String> = fields
        .iter()
        .filter_map(|f| tags.part(*f, path))
        .collect();
    if !parts.is_empty() {
        return parts.join(sep);
    }
    file_stem(path).unwrap_or(UNTITLED).to_string()
}
