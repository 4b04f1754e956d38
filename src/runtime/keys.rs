//! Key bindings shared by every skin.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::app::App;
use crate::config::ControlsSettings;
use crate::engine::{AudioBackend, Clock, Direction, Engine, EngineError};
use crate::skin::skin_for;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    TogglePlay,
    Stop,
    Previous,
    Next,
    VolumeUp,
    VolumeDown,
    /// Zero-based preset slot (key `1` is slot 0).
    Preset(usize),
    CursorDown,
    CursorUp,
    SelectCursor,
    NextSkin,
    PrevSkin,
    Quit,
}

pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }
    let action = match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') => Action::TogglePlay,
        KeyCode::Char('s') => Action::Stop,
        KeyCode::Char('h') | KeyCode::Left => Action::Previous,
        KeyCode::Char('l') | KeyCode::Right => Action::Next,
        KeyCode::Char('+') | KeyCode::Char('=') => Action::VolumeUp,
        KeyCode::Char('-') => Action::VolumeDown,
        KeyCode::Char(c @ '1'..='9') => Action::Preset(c as usize - '1' as usize),
        KeyCode::Char('j') | KeyCode::Down => Action::CursorDown,
        KeyCode::Char('k') | KeyCode::Up => Action::CursorUp,
        KeyCode::Enter => Action::SelectCursor,
        KeyCode::Tab => Action::NextSkin,
        KeyCode::BackTab => Action::PrevSkin,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Apply `action`. Returns true when the app should quit.
pub fn apply<B: AudioBackend, C: Clock>(
    action: Action,
    app: &mut App,
    engine: &mut Engine<B, C>,
    controls: &ControlsSettings,
) -> bool {
    match action {
        Action::Quit => return true,
        Action::TogglePlay => {
            if engine.state().is_playing() {
                engine.pause();
            } else {
                engine.play();
            }
        }
        Action::Stop => engine.stop(),
        Action::Previous => follow(app, engine.seek_relative_track(Direction::Previous), engine),
        Action::Next => follow(app, engine.seek_relative_track(Direction::Next), engine),
        Action::VolumeUp => {
            let v = engine.state().volume + controls.volume_step;
            engine.set_volume(v);
        }
        Action::VolumeDown => {
            let v = engine.state().volume - controls.volume_step;
            engine.set_volume(v);
        }
        Action::Preset(slot) => {
            let slots = skin_for(app.skin).preset_slots(engine.tracks().len());
            if slot < slots {
                follow(app, engine.select_track(slot), engine);
            } else {
                debug!(slot, slots, skin = app.skin.name(), "no such preset");
            }
        }
        Action::CursorDown | Action::CursorUp | Action::SelectCursor
            if !skin_for(app.skin).has_playlist() =>
        {
            debug!(?action, skin = app.skin.name(), "skin has no playlist");
        }
        Action::CursorDown => app.next(),
        Action::CursorUp => app.prev(),
        Action::SelectCursor => {
            let cursor = app.cursor;
            follow(app, engine.select_track(cursor), engine);
        }
        Action::NextSkin => {
            app.next_skin();
            info!(skin = app.skin.name(), "skin changed");
        }
        Action::PrevSkin => {
            app.prev_skin();
            info!(skin = app.skin.name(), "skin changed");
        }
    }
    false
}

/// Keep the playlist cursor on the current track after a track change.
fn follow<B: AudioBackend, C: Clock>(
    app: &mut App,
    result: Result<(), EngineError>,
    engine: &Engine<B, C>,
) {
    match result {
        Ok(()) => app.set_cursor(engine.state().track_index),
        Err(e) => debug!(error = %e, "track change rejected"),
    }
}
