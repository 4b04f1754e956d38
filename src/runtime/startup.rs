use std::path::Path;

use tracing::{info, warn};

use crate::audio::RodioBackend;
use crate::config::Settings;
use crate::engine::{AudioBackend, SilentBackend};
use crate::library::{self, Track};

/// Tracks from `[[tracks]]` when configured, otherwise a scan of `dir`.
pub fn load_tracks(settings: &Settings, dir: &Path) -> Vec<Track> {
    if settings.tracks.is_empty() {
        library::scan(dir, &settings.library)
    } else {
        info!(count = settings.tracks.len(), "using configured track list");
        library::from_entries(&settings.tracks, dir)
    }
}

/// The default audio output, or a silent stand-in when none can be opened.
pub fn open_backend() -> Box<dyn AudioBackend> {
    match RodioBackend::open() {
        Ok(b) => Box::new(b),
        Err(e) => {
            warn!(error = %e, "audio output unavailable, running silent");
            Box::new(SilentBackend::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::TrackEntry;

    #[test]
    fn configured_tracks_skip_the_scan() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("scanned.mp3"), b"").unwrap();

        let settings = Settings {
            tracks: vec![TrackEntry {
                name: "Sean Pitaro - Passport".into(),
                source: Some(PathBuf::from("passport.mp3")),
            }],
            ..Settings::default()
        };

        let tracks = load_tracks(&settings, dir.path());
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].name, "Sean Pitaro - Passport");
        assert_eq!(tracks[0].source(), Some(dir.path().join("passport.mp3").as_path()));
    }

    #[test]
    fn empty_track_list_scans_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("song.mp3"), b"").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"").unwrap();

        let tracks = load_tracks(&Settings::default(), dir.path());
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].name, "song");
    }
}
