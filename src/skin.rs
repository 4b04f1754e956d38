//! Skins: presentation bindings over the engine's state snapshot.
//!
//! Every skin draws from the same [`SkinView`] and exposes its controls as a
//! legend; key handling and transport logic live elsewhere.

mod atari;
mod bmw;
mod boombox;
mod cdj;
mod id;
mod technics;
mod view;
mod walkman;
mod widgets;
mod winamp;

use ratatui::{Frame, layout::Rect};

pub use id::SkinId;
pub use view::SkinView;
pub use widgets::picker_position;

/// A presentation of the player.
pub trait Skin {
    fn id(&self) -> SkinId;

    /// How many number-key track slots this skin exposes for `track_count`
    /// tracks (preset buttons, hot cues, track buttons).
    fn preset_slots(&self, track_count: usize) -> usize;

    /// Whether the skin renders a scrollable playlist driven by the cursor.
    fn has_playlist(&self) -> bool {
        false
    }

    /// `(key, label)` pairs shown in the footer.
    fn controls(&self) -> &'static [(&'static str, &'static str)];

    fn draw(&self, frame: &mut Frame, area: Rect, view: &SkinView<'_>);
}

static WINAMP: winamp::Winamp = winamp::Winamp;
static BMW: bmw::Bmw = bmw::Bmw;
static CDJ: cdj::Cdj = cdj::Cdj;
static WALKMAN: walkman::Walkman = walkman::Walkman;
static BOOMBOX: boombox::Boombox = boombox::Boombox;
static TECHNICS: technics::Technics = technics::Technics;
static ATARI: atari::Atari = atari::Atari;

/// The skin implementation for `id`.
pub fn skin_for(id: SkinId) -> &'static dyn Skin {
    match id {
        SkinId::Winamp => &WINAMP,
        SkinId::Bmw => &BMW,
        SkinId::Cdj => &CDJ,
        SkinId::Walkman => &WALKMAN,
        SkinId::Boombox => &BOOMBOX,
        SkinId::Technics => &TECHNICS,
        SkinId::Atari => &ATARI,
    }
}

#[cfg(test)]
mod tests;
