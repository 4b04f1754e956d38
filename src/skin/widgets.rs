//! Drawing helpers shared by the skins.
//!
//! The angle helpers reproduce the dial positions of the hardware each skin
//! imitates; the text helpers turn them into terminal glyphs.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

const BLOCKS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const ARROWS: [&str; 8] = ["↑", "↗", "→", "↘", "↓", "↙", "←", "↖"];
const SPINNER: [&str; 4] = ["|", "/", "─", "\\"];

/// Volume knob angle in degrees: -135 at silence, +135 at full.
pub fn knob_angle(volume: f32) -> f64 {
    f64::from(volume) * 270.0 - 135.0
}

/// VU needle angle: rests at -45 unless playing, then follows the volume.
pub fn vu_needle_angle(playing: bool, volume: f32) -> f64 {
    if playing {
        -45.0 + f64::from(volume) * 90.0
    } else {
        -45.0
    }
}

/// Tonearm angle: parked at 0, swinging inward with progress while playing.
pub fn tonearm_angle(playing: bool, progress_percent: f64) -> f64 {
    if playing {
        15.0 + progress_percent * 0.2
    } else {
        0.0
    }
}

/// Pitch/tempo readout derived from the volume fader, e.g. `3.2%`.
pub fn pitch_text(volume: f32) -> String {
    format!("{:.1}%", (f64::from(volume) - 0.5) * 16.0)
}

/// Slider thumb position of the skin picker, in percent.
pub fn picker_position(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    index as f64 / (count - 1) as f64 * 100.0
}

/// First `n` characters of `s`.
pub fn truncate_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Arrow pointing along `degrees` (0 = up, clockwise).
pub fn dial(degrees: f64) -> &'static str {
    let sector = ((degrees.rem_euclid(360.0) + 22.5) / 45.0).floor() as usize % ARROWS.len();
    ARROWS[sector]
}

/// Spinning glyph for reels and discs; frozen when not playing.
pub fn spinner(rotation: f64, playing: bool) -> &'static str {
    if !playing {
        return "○";
    }
    let sector = (rotation.rem_euclid(180.0) / 45.0).floor() as usize % SPINNER.len();
    SPINNER[sector]
}

/// Horizontal fader, e.g. `━━━━●────` for 0.5 at width 9.
pub fn fader(value: f32, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let value = value.clamp(0.0, 1.0);
    let pos = (f64::from(value) * (width - 1) as f64).round() as usize;
    (0..width)
        .map(|i| match i.cmp(&pos) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        })
        .collect()
}

/// Render `values` (each within `0..=max`) as vertical bars `height` rows tall.
pub fn bar_rows(values: &[f32], max: f32, height: u16, style: Style) -> Vec<Line<'static>> {
    let height = height.max(1) as usize;
    let levels: Vec<usize> = values
        .iter()
        .map(|v| {
            let frac = if max > 0.0 { (v / max).clamp(0.0, 1.0) } else { 0.0 };
            (frac * (height * 8) as f32).round() as usize
        })
        .collect();

    (0..height)
        .rev()
        .map(|row| {
            let text: String = levels
                .iter()
                .map(|&lvl| {
                    let fill = lvl.saturating_sub(row * 8).min(8);
                    BLOCKS[fill]
                })
                .collect();
            Line::from(Span::styled(text, style))
        })
        .collect()
}

/// Row of numbered buttons, the active one reversed.
pub fn button_row(count: usize, active: usize, accent: Color) -> Line<'static> {
    let spans: Vec<Span<'static>> = (0..count)
        .map(|i| {
            let style = if i == active {
                Style::default().fg(Color::Black).bg(accent)
            } else {
                Style::default().fg(accent)
            };
            Span::styled(format!(" {} ", i + 1), style)
        })
        .collect();
    Line::from(spans)
}

/// Bordered panel in the skin's accent.
pub fn panel(title: &str, accent: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
}

/// Progress bar over `percent` with a time label.
pub fn progress_gauge(percent: f64, label: String, accent: Color) -> Gauge<'static> {
    Gauge::default()
        .gauge_style(Style::default().fg(accent).bg(Color::Black))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(label)
}

/// Centered single-line readout.
pub fn readout(text: String, accent: Color) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knob_spans_270_degrees() {
        assert_eq!(knob_angle(0.0), -135.0);
        assert_eq!(knob_angle(1.0), 135.0);
        assert!((knob_angle(0.7) - 54.0).abs() < 1e-4);
    }

    #[test]
    fn vu_needle_rests_when_not_playing() {
        assert_eq!(vu_needle_angle(false, 1.0), -45.0);
        assert_eq!(vu_needle_angle(true, 1.0), 45.0);
        assert_eq!(vu_needle_angle(true, 0.5), 0.0);
    }

    #[test]
    fn tonearm_parks_when_not_playing() {
        assert_eq!(tonearm_angle(false, 50.0), 0.0);
        assert_eq!(tonearm_angle(true, 0.0), 15.0);
        assert_eq!(tonearm_angle(true, 100.0), 35.0);
    }

    #[test]
    fn pitch_text_centers_on_half_volume() {
        assert_eq!(pitch_text(0.5), "0.0%");
        assert_eq!(pitch_text(0.7), "3.2%");
        assert_eq!(pitch_text(0.0), "-8.0%");
        assert_eq!(pitch_text(1.0), "8.0%");
    }

    #[test]
    fn picker_position_spreads_skins_evenly() {
        assert_eq!(picker_position(0, 7), 0.0);
        assert_eq!(picker_position(6, 7), 100.0);
        assert_eq!(picker_position(3, 7), 50.0);
        assert_eq!(picker_position(0, 1), 0.0);
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("Spektrem - Shine", 12), "Spektrem - S");
        assert_eq!(truncate_chars("Doğukan", 3), "Doğ");
        assert_eq!(truncate_chars("ab", 10), "ab");
    }

    #[test]
    fn dial_points_by_octant() {
        assert_eq!(dial(0.0), "↑");
        assert_eq!(dial(90.0), "→");
        assert_eq!(dial(-135.0), "↙");
        assert_eq!(dial(135.0), "↘");
        assert_eq!(dial(359.0), "↑");
    }

    #[test]
    fn spinner_freezes_when_stopped() {
        assert_eq!(spinner(90.0, false), "○");
        assert_eq!(spinner(0.0, true), "|");
        assert_eq!(spinner(45.0, true), "/");
    }

    #[test]
    fn fader_places_thumb() {
        assert_eq!(fader(0.0, 5), "●────");
        assert_eq!(fader(1.0, 5), "━━━━●");
        assert_eq!(fader(0.5, 5), "━━●──");
        assert_eq!(fader(0.5, 0), "");
    }

    #[test]
    fn bar_rows_fill_from_the_bottom() {
        let rows = bar_rows(&[0.0, 50.0, 100.0], 100.0, 2, Style::default());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].to_string(), "  █");
        assert_eq!(rows[1].to_string(), " ██");
    }
}
