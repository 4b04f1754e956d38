//! Turntable: spinning record, tonearm riding the progress, pitch fader.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{dial, fader, panel, pitch_text, tonearm_angle, truncate_chars};
use super::{Skin, SkinId, SkinView};

const LABEL_CHARS: usize = 10;

pub struct Technics;

impl Skin for Technics {
    fn id(&self) -> SkinId {
        SkinId::Technics
    }

    fn preset_slots(&self, _track_count: usize) -> usize {
        0
    }

    fn controls(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("space", "START/STOP"),
            ("h/l", "◀/▶"),
            ("+/-", "pitch"),
        ]
    }

    fn draw(&self, frame: &mut Frame, area: Rect, view: &SkinView<'_>) {
        let accent = self.id().accent();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(14)])
            .split(chunks[0]);

        let spindle = dial(view.state.animation.rotation_degrees());
        let record = vec![
            Line::from("╭──────────────╮"),
            Line::from(format!("│ {:^12} │", truncate_chars(view.current_name(), LABEL_CHARS))),
            Line::from(format!("│      {spindle}       │")),
            Line::from("╰──────────────╯"),
        ];
        frame.render_widget(
            Paragraph::new(record)
                .alignment(Alignment::Center)
                .block(panel("platter", accent)),
            top[0],
        );

        let arm = tonearm_angle(view.is_playing(), view.state.progress_percent());
        let tonearm = vec![
            Line::from(Span::styled(dial(arm + 180.0), Style::default().fg(accent))),
            Line::from(format!("{arm:.0}°")),
        ];
        frame.render_widget(
            Paragraph::new(tonearm)
                .alignment(Alignment::Center)
                .block(panel("tonearm", accent)),
            top[1],
        );

        let start_stop = if view.is_playing() {
            Span::styled(" STOP ", Style::default().fg(Color::Black).bg(accent))
        } else {
            Span::styled(" START ", Style::default().fg(accent))
        };
        let panel_line = Line::from(vec![
            start_stop,
            Span::raw("   PITCH "),
            Span::styled(fader(view.state.volume, 12), Style::default().fg(accent)),
            Span::raw(format!(" {}   33 45   ◀ ▶", pitch_text(view.state.volume))),
        ]);
        frame.render_widget(
            Paragraph::new(panel_line)
                .alignment(Alignment::Center)
                .block(panel("SL-1200", accent)),
            chunks[1],
        );

        frame.render_widget(
            Paragraph::new(format!("TR {}   {}", view.track_number(), view.elapsed_text()))
                .alignment(Alignment::Center)
                .block(panel("info", accent)),
            chunks[2],
        );
    }
}
