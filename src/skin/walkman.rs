//! Portable CD player: disc under the lid, tiny LCD, hold switch.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
};

use super::widgets::{fader, panel, spinner, truncate_chars};
use super::{Skin, SkinId, SkinView};

const LCD_CHARS: usize = 12;
const BATTERY: f64 = 0.8;

pub struct Walkman;

impl Skin for Walkman {
    fn id(&self) -> SkinId {
        SkinId::Walkman
    }

    fn preset_slots(&self, _track_count: usize) -> usize {
        0
    }

    fn controls(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("h/l", "⏮/⏭"),
            ("space", "▶/⏸"),
            ("s", "⏹"),
            ("+/-", "VOL"),
        ]
    }

    fn draw(&self, frame: &mut Frame, area: Rect, view: &SkinView<'_>) {
        let accent = self.id().accent();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let hub = spinner(view.state.animation.rotation, view.is_playing());
        let disc = vec![
            Line::from("COMPACT"),
            Line::from(format!("( {hub} )")),
            Line::from("DISC"),
        ];
        frame.render_widget(
            Paragraph::new(disc)
                .alignment(Alignment::Center)
                .style(Style::default().fg(accent))
                .block(panel("lid", accent)),
            chunks[0],
        );

        let lcd = vec![
            Line::from(vec![
                Span::raw(format!("TR {}", view.track_number())),
                Span::raw("  "),
                Span::raw(view.elapsed_text()),
            ]),
            Line::from(truncate_chars(view.current_name(), LCD_CHARS)),
        ];
        frame.render_widget(
            Paragraph::new(lcd)
                .style(Style::default().fg(Color::Black).bg(Color::Rgb(0x9a, 0xb8, 0x8c)))
                .block(panel("LCD", accent)),
            chunks[1],
        );

        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(Color::Green))
                .ratio(BATTERY)
                .label("🔋")
                .block(panel("battery", accent)),
            chunks[2],
        );

        let controls = Line::from("⏮   ▶   ⏸   ⏹   ⏭");
        frame.render_widget(
            Paragraph::new(controls)
                .alignment(Alignment::Center)
                .block(panel("controls", accent)),
            chunks[3],
        );

        let bottom = Line::from(vec![
            Span::raw("VOL "),
            Span::styled(fader(view.state.volume, 12), Style::default().fg(accent)),
            Span::raw("   HOLD [=·]   MEGA BASS"),
        ]);
        frame.render_widget(
            Paragraph::new(bottom)
                .alignment(Alignment::Center)
                .block(panel("WALKMAN", accent)),
            chunks[4],
        );
    }
}
