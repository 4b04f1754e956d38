//! Game console: cartridge, LED readout, console switches, joystick.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{button_row, fader, panel, truncate_chars};
use super::{Skin, SkinId, SkinView};

const LED_CHARS: usize = 12;
const TRACK_BUTTONS: usize = 4;

pub struct Atari;

impl Skin for Atari {
    fn id(&self) -> SkinId {
        SkinId::Atari
    }

    fn preset_slots(&self, track_count: usize) -> usize {
        track_count.min(TRACK_BUTTONS)
    }

    fn controls(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("space", "FIRE"),
            ("h", "joystick ◀"),
            ("l", "SELECT"),
            ("s", "RESET"),
            ("1-4", "tracks"),
            ("+/-", "VOL"),
        ]
    }

    fn draw(&self, frame: &mut Frame, area: Rect, view: &SkinView<'_>) {
        let accent = self.id().accent();
        let wood = Color::Rgb(0x6b, 0x44, 0x23);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new("").style(Style::default().bg(wood)),
            chunks[0],
        );

        frame.render_widget(
            Paragraph::new(vec![Line::from("RETRO"), Line::from("PLAYER")])
                .alignment(Alignment::Center)
                .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
                .block(panel("cartridge", accent)),
            chunks[1],
        );

        let led: Vec<Span> = truncate_chars(view.current_name(), LED_CHARS)
            .chars()
            .map(|c| Span::styled(c.to_string(), Style::default().fg(Color::Red)))
            .collect();
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(led),
                Line::from(Span::styled(view.elapsed_text(), Style::default().fg(Color::Red))),
            ])
            .alignment(Alignment::Center)
            .block(panel("LED", accent)),
            chunks[2],
        );

        frame.render_widget(
            Paragraph::new("POWER [■]    SELECT (●)    RESET (●)")
                .alignment(Alignment::Center)
                .block(panel("switches", accent)),
            chunks[3],
        );

        let fire = if view.is_playing() { "⏸" } else { "▶" };
        let joystick = vec![
            Line::from("▲"),
            Line::from(vec![
                Span::raw("◀  "),
                Span::styled(format!("({fire})"), Style::default().fg(accent)),
                Span::raw("  ▶"),
            ]),
            Line::from("▼"),
        ];
        frame.render_widget(
            Paragraph::new(joystick)
                .alignment(Alignment::Center)
                .block(panel("joystick", accent)),
            chunks[4],
        );

        let mut bottom = button_row(
            self.preset_slots(view.tracks.len()),
            view.state.track_index,
            accent,
        );
        bottom.spans.push(Span::raw("   VOL "));
        bottom
            .spans
            .push(Span::styled(fader(view.state.volume, 10), Style::default().fg(accent)));
        frame.render_widget(
            Paragraph::new(bottom)
                .alignment(Alignment::Center)
                .block(panel("select", accent)),
            chunks[5],
        );
    }
}
