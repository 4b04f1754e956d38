//! Application model: the active skin and the playlist cursor.

use crate::skin::SkinId;

/// The main application model.
#[derive(Debug, Clone)]
pub struct App {
    pub skin: SkinId,
    /// Playlist row under the cursor. Independent of the playing track until
    /// the user selects it.
    pub cursor: usize,
    track_count: usize,
}

impl App {
    /// Create a new `App` over a library of `track_count` tracks.
    pub fn new(track_count: usize, skin: SkinId) -> Self {
        Self {
            skin,
            cursor: 0,
            track_count,
        }
    }

    pub fn next_skin(&mut self) {
        self.skin = self.skin.next();
    }

    pub fn prev_skin(&mut self) {
        self.skin = self.skin.prev();
    }

    /// Index after `current`, wrapping to the first track.
    pub fn next_from(&self, current: usize) -> Option<usize> {
        if self.track_count == 0 {
            return None;
        }
        Some((current + 1) % self.track_count)
    }

    /// Index before `current`, wrapping to the last track.
    pub fn prev_from(&self, current: usize) -> Option<usize> {
        if self.track_count == 0 {
            return None;
        }
        match current {
            0 => Some(self.track_count - 1),
            c if c >= self.track_count => Some(self.track_count - 1),
            c => Some(c - 1),
        }
    }

    /// Move the cursor to the next track.
    pub fn next(&mut self) {
        if let Some(next) = self.next_from(self.cursor) {
            self.cursor = next;
        }
    }

    /// Move the cursor to the previous track.
    pub fn prev(&mut self) {
        if let Some(prev) = self.prev_from(self.cursor) {
            self.cursor = prev;
        }
    }

    /// Put the cursor on `index` when it names a track.
    pub fn set_cursor(&mut self, index: usize) {
        if index < self.track_count {
            self.cursor = index;
        }
    }
}
