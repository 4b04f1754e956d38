use std::path::PathBuf;

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};

use super::*;
use crate::engine::{Animation, PlaybackState, TransportState};
use crate::library::Track;

fn tracks() -> Vec<Track> {
    [
        "BENJAMINRICH & Daniel Javan - Too Late",
        "Cartoon - On & On",
        "Sean Pitaro - Passport",
        "Spektrem - Shine",
        "Sub Urban - Cradles",
    ]
    .iter()
    .map(|n| Track::new(*n, Some(PathBuf::from(format!("/music/{n}.mp3")))))
    .collect()
}

fn state(index: usize, transport: TransportState) -> PlaybackState {
    PlaybackState {
        track_index: index,
        transport,
        elapsed: 65.0,
        duration: 200.0,
        volume: 0.7,
        animation: Animation {
            rotation: 90.0,
            visualizer: vec![10.0; 16],
            waveform: vec![20.0; 50],
        },
    }
}

fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render(id: SkinId, view: &SkinView<'_>, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| skin_for(id).draw(f, Rect::new(0, 0, width, height), view))
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

#[test]
fn every_id_maps_to_its_own_skin() {
    for id in SkinId::ALL {
        assert_eq!(skin_for(id).id(), id);
        assert!(!skin_for(id).controls().is_empty());
    }
}

#[test]
fn skin_ids_cycle_in_picker_order() {
    assert_eq!(SkinId::Winamp.next(), SkinId::Bmw);
    assert_eq!(SkinId::Atari.next(), SkinId::Winamp);
    assert_eq!(SkinId::Winamp.prev(), SkinId::Atari);
    assert_eq!(SkinId::Technics.index(), 5);
    for id in SkinId::ALL {
        assert_eq!(id.next().prev(), id);
    }
}

#[test]
fn preset_slots_follow_hardware_layout() {
    assert_eq!(skin_for(SkinId::Bmw).preset_slots(5), 5);
    assert_eq!(skin_for(SkinId::Bmw).preset_slots(20), 6);
    assert_eq!(skin_for(SkinId::Cdj).preset_slots(20), 4);
    assert_eq!(skin_for(SkinId::Atari).preset_slots(2), 2);
    assert_eq!(skin_for(SkinId::Walkman).preset_slots(5), 0);
    assert_eq!(skin_for(SkinId::Technics).preset_slots(5), 0);
    assert_eq!(skin_for(SkinId::Winamp).preset_slots(0), 0);
    assert!(skin_for(SkinId::Winamp).has_playlist());
    assert!(!skin_for(SkinId::Cdj).has_playlist());
}

#[test]
fn every_skin_shows_current_track_and_time() {
    let tracks = tracks();
    let st = state(3, TransportState::Playing);
    let view = SkinView::new(&st, &tracks, 3);

    for id in SkinId::ALL {
        let text = render(id, &view, 80, 30);
        assert!(text.contains("Spektrem"), "{id:?} missing track name:\n{text}");
        assert!(text.contains("1:05"), "{id:?} missing elapsed time:\n{text}");
    }
}

#[test]
fn winamp_shows_time_pair_volume_and_playlist() {
    let tracks = tracks();
    let st = state(1, TransportState::Paused);
    let view = SkinView::new(&st, &tracks, 1);
    let text = render(SkinId::Winamp, &view, 80, 30);
    assert!(text.contains("1:05 / 3:20"));
    assert!(text.contains("70%"));
    assert!(text.contains("5. Sub Urban - Cradles"));
}

#[test]
fn cdj_shows_remaining_time_and_tempo() {
    let tracks = tracks();
    let st = state(0, TransportState::Playing);
    let view = SkinView::new(&st, &tracks, 0);
    let text = render(SkinId::Cdj, &view, 80, 30);
    assert!(text.contains("-2:15"));
    assert!(text.contains("3.2%"));
    assert!(text.contains("PAUSE"));
}

#[test]
fn hardware_displays_truncate_names() {
    let tracks = tracks();
    let st = state(0, TransportState::Stopped);
    let view = SkinView::new(&st, &tracks, 0);

    let walkman = render(SkinId::Walkman, &view, 80, 30);
    assert!(walkman.contains("TR 1"));
    assert!(walkman.contains("BENJAMINRICH"));
    assert!(!walkman.contains("BENJAMINRICH &"));

    let technics = render(SkinId::Technics, &view, 80, 30);
    assert!(technics.contains("BENJAMINRI"));
    assert!(technics.contains("START"));
}

#[test]
fn empty_track_list_renders_placeholder_everywhere() {
    let tracks: Vec<Track> = Vec::new();
    let st = state(0, TransportState::Stopped);
    let view = SkinView::new(&st, &tracks, 0);
    for id in SkinId::ALL {
        let text = render(id, &view, 80, 30);
        assert!(text.contains("No Track"), "{id:?} missing placeholder:\n{text}");
    }
}

#[test]
fn skins_survive_tiny_terminals() {
    let tracks = tracks();
    let st = state(4, TransportState::Playing);
    let view = SkinView::new(&st, &tracks, 4);
    for id in SkinId::ALL {
        let _ = render(id, &view, 12, 4);
    }
}
