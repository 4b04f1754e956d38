//! 80s boombox: twin speakers, VU needles, radio display, cassette deck.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{button_row, dial, fader, panel, spinner, vu_needle_angle};
use super::{Skin, SkinId, SkinView};

/// Fixed EQ fader positions; the last fader is the volume.
const EQ_PRESET: [f32; 3] = [0.5, 0.6, 0.7];

pub struct Boombox;

fn speaker(accent: ratatui::style::Color) -> Paragraph<'static> {
    let grill: Vec<Line> = (0..4).map(|_| Line::from("════════")).collect();
    let mut lines = vec![Line::from("(( ● ))")];
    lines.extend(grill);
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(accent))
        .block(panel("", accent))
}

impl Skin for Boombox {
    fn id(&self) -> SkinId {
        SkinId::Boombox
    }

    fn preset_slots(&self, track_count: usize) -> usize {
        track_count.min(9)
    }

    fn controls(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("h/l", "◀◀/▶▶"),
            ("space", "▶/⏸"),
            ("s", "⏹"),
            ("1-9", "tracks"),
            ("+/-", "volume"),
        ]
    }

    fn draw(&self, frame: &mut Frame, area: Rect, view: &SkinView<'_>) {
        let accent = self.id().accent();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(16), Constraint::Length(3)])
            .split(area);
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Min(30),
                Constraint::Length(12),
            ])
            .split(rows[0]);

        frame.render_widget(speaker(accent), body[0]);
        frame.render_widget(speaker(accent), body[2]);

        let center = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(4),
                Constraint::Min(3),
            ])
            .split(body[1]);

        let needle = dial(vu_needle_angle(view.is_playing(), view.state.volume));
        frame.render_widget(
            Paragraph::new(format!("VU [ {needle} ]    VU [ {needle} ]"))
                .alignment(Alignment::Center)
                .block(panel("meters", accent)),
            center[0],
        );

        let display = vec![
            Line::from(Span::styled("FM 98.5", Style::default().fg(accent))),
            Line::from(view.current_name().to_string()),
            Line::from(view.elapsed_text()),
        ];
        frame.render_widget(
            Paragraph::new(display)
                .alignment(Alignment::Center)
                .block(panel("display", accent)),
            center[1],
        );

        let reel = spinner(view.state.animation.rotation, view.is_playing());
        let deck = vec![
            Line::from(format!("[ {reel} ]══════[ {reel} ]")),
            Line::from("◀◀  ▶  ⏸  ⏹  ▶▶"),
        ];
        frame.render_widget(
            Paragraph::new(deck)
                .alignment(Alignment::Center)
                .block(panel("cassette", accent)),
            center[2],
        );

        let mut eq: Vec<Line> = EQ_PRESET
            .iter()
            .map(|&v| Line::from(Span::styled(fader(v, 14), Style::default().fg(accent))))
            .collect();
        eq.push(Line::from(vec![
            Span::styled(fader(view.state.volume, 14), Style::default().fg(accent)),
            Span::raw(" VOL"),
        ]));
        frame.render_widget(
            Paragraph::new(eq)
                .alignment(Alignment::Center)
                .block(panel("EQ", accent)),
            center[3],
        );

        frame.render_widget(
            Paragraph::new(button_row(
                self.preset_slots(view.tracks.len()),
                view.state.track_index,
                accent,
            ))
            .alignment(Alignment::Center)
            .block(panel("tracks", accent)),
            rows[1],
        );
    }
}
