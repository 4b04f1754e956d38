//! UI rendering helpers for the terminal user interface.
//!
//! The frame is the same for every skin: header, skin picker, the active
//! skin's body and a controls footer built from the skin's legend.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::config::UiSettings;
use crate::skin::{Skin, SkinId, SkinView, picker_position, skin_for};

/// Keys handled by the frame rather than the skin.
const GLOBAL_CONTROLS: [(&str, &str); 2] = [("tab/S-tab", "skin"), ("q", "quit")];

/// Render the controls help text for `skin`.
fn controls_text(skin: &dyn Skin) -> String {
    skin.controls()
        .iter()
        .chain(GLOBAL_CONTROLS.iter())
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Slider track `width` cells wide with the thumb at the active skin.
fn picker_slider(active: SkinId, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let percent = picker_position(active.index(), SkinId::ALL.len());
    let pos = (percent / 100.0 * (width - 1) as f64).round() as usize;
    (0..width).map(|i| if i == pos { '◆' } else { '─' }).collect()
}

fn picker_line(active: SkinId) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, id) in SkinId::ALL.iter().copied().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" · "));
        }
        let style = if id == active {
            Style::default()
                .fg(Color::Black)
                .bg(id.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(id.accent())
        };
        spans.push(Span::styled(id.name(), style));
    }
    Line::from(spans)
}

/// Render the entire UI into the provided `frame`.
///
/// `status` is shown in the footer title, e.g. the last playback failure.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    view: &SkinView<'_>,
    ui_settings: &UiSettings,
    status: Option<&str>,
) {
    let skin = skin_for(app.skin);
    let accent = app.skin.accent();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(accent))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.skin.name()))
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Skin picker
    let slider_width = chunks[1].width.saturating_sub(4) as usize;
    let picker = Paragraph::new(vec![
        picker_line(app.skin),
        Line::from(Span::styled(
            picker_slider(app.skin, slider_width),
            Style::default().fg(accent),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(" skins "));
    frame.render_widget(picker, chunks[1]);

    skin.draw(frame, chunks[2], view);

    let title = match status {
        Some(s) => format!(" controls • {s} "),
        None => " controls ".to_string(),
    };
    let footer = Paragraph::new(controls_text(skin))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(footer, chunks[3]);
}
