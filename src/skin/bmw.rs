//! Car stereo: amber LCD, cassette slot, six preset buttons, volume knob.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{button_row, dial, knob_angle, panel, progress_gauge, readout, spinner};
use super::{Skin, SkinId, SkinView};

const PRESETS: usize = 6;

pub struct Bmw;

impl Skin for Bmw {
    fn id(&self) -> SkinId {
        SkinId::Bmw
    }

    fn preset_slots(&self, track_count: usize) -> usize {
        track_count.min(PRESETS)
    }

    fn controls(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("h/l", "◀ SEEK / SEEK ▶"),
            ("space", "▶/⏸"),
            ("s", "⏹"),
            ("1-6", "presets"),
            ("+/-", "volume"),
        ]
    }

    fn draw(&self, frame: &mut Frame, area: Rect, view: &SkinView<'_>) {
        let accent = self.id().accent();
        let lcd = Style::default().fg(accent);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let top = vec![
            Line::from(vec![
                Span::styled("FM1", lcd),
                Span::raw("   "),
                Span::styled(view.elapsed_text(), lcd),
            ]),
            Line::from(Span::styled(view.current_name().to_string(), lcd)),
        ];
        frame.render_widget(Paragraph::new(top).block(panel("LCD", accent)), chunks[0]);

        frame.render_widget(
            progress_gauge(view.state.progress_percent(), String::new(), accent),
            chunks[1],
        );

        let reel = spinner(view.state.animation.rotation, view.is_playing());
        frame.render_widget(
            readout(format!("( {reel} )  DIGITAL AUDIO  ( {reel} )"), accent)
                .block(panel("cassette", accent)),
            chunks[2],
        );

        // Presets light up only for tracks that exist.
        let slots = self.preset_slots(view.tracks.len());
        let mut presets = button_row(slots, view.state.track_index, accent);
        for n in slots..PRESETS {
            presets
                .spans
                .push(Span::styled(format!(" {} ", n + 1), Style::default().fg(Color::DarkGray)));
        }
        frame.render_widget(
            Paragraph::new(presets)
                .alignment(Alignment::Center)
                .block(panel("presets", accent)),
            chunks[3],
        );

        let play = if view.is_playing() { "⏸" } else { "▶" };
        let knob = dial(knob_angle(view.state.volume));
        let controls = Line::from(vec![
            Span::raw("◀ SEEK   "),
            Span::styled(play, lcd),
            Span::raw("  ⏹   SEEK ▶     VOLUME "),
            Span::styled(format!("({knob})"), lcd),
        ]);
        frame.render_widget(
            Paragraph::new(controls)
                .alignment(Alignment::Center)
                .block(panel("controls", accent)),
            chunks[4],
        );
    }
}
