use std::path::Path;

use tracing::info;
use walkdir::WalkDir;

use crate::config::{LibrarySettings, TrackEntry};

use super::display::{TrackTags, track_label};
use super::model::Track;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Build the track list from explicit `[[tracks]]` entries.
///
/// Relative sources are resolved against `base_dir`; entries keep their order.
pub fn from_entries(entries: &[TrackEntry], base_dir: &Path) -> Vec<Track> {
    entries
        .iter()
        .map(|e| {
            let source = e.source.as_ref().map(|p| {
                if p.is_relative() {
                    base_dir.join(p)
                } else {
                    p.clone()
                }
            });
            Track::new(e.name.clone(), source)
        })
        .collect()
}

/// Scan `dir` for audio files and name them from their tags.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let mut tracks: Vec<Track> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() || !is_audio_file(path, settings) {
            continue;
        }

        let tags = TrackTags::read(path);
        let name = track_label(
            path,
            &tags,
            &settings.name_fields,
            &settings.name_separator,
        );

        tracks.push(Track::new(name, Some(path.to_path_buf())));
    }

    tracks.sort_by_key(|t| t.name.to_lowercase());
    info!(dir = %dir.display(), count = tracks.len(), "library scanned");
    tracks
}
