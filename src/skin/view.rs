use crate::engine::{PlaybackState, format_time};
use crate::library::Track;

/// Read-only snapshot every skin draws from.
#[derive(Debug, Clone, Copy)]
pub struct SkinView<'a> {
    pub state: &'a PlaybackState,
    pub tracks: &'a [Track],
    /// Playlist cursor, for skins that render a playlist.
    pub cursor: usize,
}

impl<'a> SkinView<'a> {
    pub fn new(state: &'a PlaybackState, tracks: &'a [Track], cursor: usize) -> Self {
        Self {
            state,
            tracks,
            cursor,
        }
    }

    pub fn current_name(&self) -> &'a str {
        Track::name_or_placeholder(self.tracks.get(self.state.track_index))
    }

    /// One-based track number, as printed on hardware displays.
    pub fn track_number(&self) -> usize {
        self.state.track_index + 1
    }

    pub fn elapsed_text(&self) -> String {
        format_time(self.state.elapsed)
    }

    pub fn duration_text(&self) -> String {
        format_time(self.state.duration)
    }

    pub fn remaining_text(&self) -> String {
        format!("-{}", format_time(self.state.remaining()))
    }

    pub fn volume_percent(&self) -> u16 {
        (self.state.volume * 100.0).round() as u16
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }
}
