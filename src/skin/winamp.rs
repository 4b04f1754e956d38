//! Classic software media player: spectrum, marquee, playlist.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use super::widgets::{bar_rows, fader, panel, progress_gauge};
use super::{Skin, SkinId, SkinView};

pub struct Winamp;

/// Window of `name` scrolled by `offset` characters, wrapping with a gap.
fn marquee(name: &str, width: usize, offset: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= width || width == 0 {
        return name.to_string();
    }
    let looped: Vec<char> = chars.iter().copied().chain("   ".chars()).collect();
    (0..width)
        .map(|i| looped[(offset + i) % looped.len()])
        .collect()
}

impl Skin for Winamp {
    fn id(&self) -> SkinId {
        SkinId::Winamp
    }

    fn preset_slots(&self, track_count: usize) -> usize {
        track_count.min(9)
    }

    fn has_playlist(&self) -> bool {
        true
    }

    fn controls(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("h/l", "⏮/⏭"),
            ("space", "▶/⏸"),
            ("s", "⏹"),
            ("+/-", "volume"),
            ("j/k", "playlist"),
            ("enter", "load"),
        ]
    }

    fn draw(&self, frame: &mut Frame, area: Rect, view: &SkinView<'_>) {
        let accent = self.id().accent();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
            ])
            .split(area);

        let bars = bar_rows(
            &view.state.animation.visualizer,
            100.0,
            chunks[0].height.saturating_sub(2),
            Style::default().fg(accent),
        );
        frame.render_widget(
            Paragraph::new(bars).block(panel("RETRO PLAYER", accent)),
            chunks[0],
        );

        let width = chunks[1].width.saturating_sub(4) as usize;
        let offset = (view.state.animation.rotation / 3.0) as usize;
        let info = vec![
            Line::from(Span::styled(
                marquee(view.current_name(), width, offset),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("{} / {}", view.elapsed_text(), view.duration_text())),
        ];
        frame.render_widget(Paragraph::new(info).block(panel("now playing", accent)), chunks[1]);

        frame.render_widget(
            progress_gauge(
                view.state.progress_percent(),
                format!("{:.0}%", view.state.progress_percent()),
                accent,
            )
            .block(panel("position", accent)),
            chunks[2],
        );

        let volume = Line::from(vec![
            Span::raw("🔊 "),
            Span::styled(fader(view.state.volume, 20), Style::default().fg(accent)),
            Span::raw(format!(" {}%", view.volume_percent())),
        ]);
        frame.render_widget(Paragraph::new(volume).block(panel("volume", accent)), chunks[3]);

        let items: Vec<ListItem> = view
            .tracks
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let style = if i == view.state.track_index {
                    Style::default().fg(accent).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(Span::styled(format!("{}. {}", i + 1, t.name), style)))
            })
            .collect();
        let list = List::new(items)
            .block(panel("♪ PLAYLIST ♪", accent))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if !view.tracks.is_empty() {
            state.select(Some(view.cursor.min(view.tracks.len() - 1)));
        }
        frame.render_stateful_widget(list, chunks[4], &mut state);
    }
}
