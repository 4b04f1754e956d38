//! DJ deck: waveform, jog wheel, cue/play, hot cues, tempo fader.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{bar_rows, button_row, dial, fader, panel, pitch_text};
use super::{Skin, SkinId, SkinView};

const HOT_CUES: usize = 4;

pub struct Cdj;

impl Skin for Cdj {
    fn id(&self) -> SkinId {
        SkinId::Cdj
    }

    fn preset_slots(&self, track_count: usize) -> usize {
        track_count.min(HOT_CUES)
    }

    fn controls(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("space", "PLAY/PAUSE"),
            ("s", "CUE"),
            ("1-4", "hot cues"),
            ("h/l", "◀◀/▶▶"),
            ("+/-", "tempo"),
        ]
    }

    fn draw(&self, frame: &mut Frame, area: Rect, view: &SkinView<'_>) {
        let accent = self.id().accent();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let wave = bar_rows(
            &view.state.animation.waveform,
            100.0,
            chunks[0].height.saturating_sub(2),
            Style::default().fg(accent),
        );
        frame.render_widget(Paragraph::new(wave).block(panel("waveform", accent)), chunks[0]);

        let info = vec![
            Line::from(vec![
                Span::styled(
                    view.current_name().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled("128.00 BPM", Style::default().fg(accent)),
            ]),
            Line::from(vec![
                Span::raw(view.elapsed_text()),
                Span::raw("   "),
                Span::styled(view.remaining_text(), Style::default().fg(Color::Red)),
            ]),
        ];
        frame.render_widget(Paragraph::new(info).block(panel("display", accent)), chunks[1]);

        let jog = dial(view.state.animation.rotation_degrees());
        let wheel = vec![
            Line::from("╭─────╮"),
            Line::from(format!("│ {jog}CDJ │")),
            Line::from("╰─────╯"),
        ];
        frame.render_widget(
            Paragraph::new(wheel)
                .alignment(Alignment::Center)
                .block(panel("jog", accent)),
            chunks[2],
        );

        let on = Style::default().fg(Color::Black).bg(accent);
        let off = Style::default().fg(accent);
        let (cue_style, play_style) = if view.is_playing() { (off, on) } else { (on, off) };
        let play_label = if view.is_playing() { " ▶ PAUSE " } else { " ▶ PLAY " };
        let mut transport = vec![
            Span::styled(" CUE ", cue_style),
            Span::raw("  "),
            Span::styled(play_label, play_style),
            Span::raw("   "),
        ];
        transport.extend(
            button_row(self.preset_slots(view.tracks.len()), view.state.track_index, accent).spans,
        );
        frame.render_widget(
            Paragraph::new(Line::from(transport))
                .alignment(Alignment::Center)
                .block(panel("transport", accent)),
            chunks[3],
        );

        let tempo = Line::from(vec![
            Span::raw("TEMPO "),
            Span::styled(fader(view.state.volume, 16), Style::default().fg(accent)),
            Span::raw(format!(" {}", pitch_text(view.state.volume))),
        ]);
        frame.render_widget(
            Paragraph::new(tempo)
                .alignment(Alignment::Center)
                .block(panel("tempo", accent)),
            chunks[4],
        );
    }
}
