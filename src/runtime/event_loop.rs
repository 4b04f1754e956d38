use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::App;
use crate::config;
use crate::engine::{AudioBackend, Engine};
use crate::runtime::keys;
use crate::skin::SkinView;
use crate::ui;

/// How long to wait for input: until the next engine deadline, never longer
/// than `cap`.
fn poll_timeout(deadline: Option<Instant>, now: Instant, cap: Duration) -> Duration {
    deadline
        .map(|d| d.saturating_duration_since(now))
        .map_or(cap, |d| d.min(cap))
}

/// Main terminal event loop: forwards backend events, fires engine timers,
/// draws and handles input. Returns `Ok(())` when shutdown is requested.
pub fn run<B: AudioBackend>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    engine: &mut Engine<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let cap = Duration::from_millis(settings.engine.tick_interval_ms.max(1));
    let mut last_index = engine.state().track_index;

    loop {
        engine.pump_backend();
        engine.poll_timers();

        // Auto-advance moves the track without a key press.
        if engine.state().track_index != last_index {
            last_index = engine.state().track_index;
            app.set_cursor(last_index);
        }

        let status = engine.last_failure().map(|e| e.to_string());
        let view = SkinView::new(engine.state(), engine.tracks(), app.cursor);
        terminal.draw(|f| ui::draw(f, app, &view, &settings.ui, status.as_deref()))?;

        let timeout = poll_timeout(engine.next_deadline(), Instant::now(), cap);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = keys::action_for(key) {
                    if keys::apply(action, app, engine, &settings.controls) {
                        break;
                    }
                }
            }
        }
    }

    debug!("quit requested");
    engine.dispose();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_capped_by_tick() {
        let now = Instant::now();
        let cap = Duration::from_millis(50);
        assert_eq!(poll_timeout(None, now, cap), cap);
        assert_eq!(
            poll_timeout(Some(now + Duration::from_secs(5)), now, cap),
            cap
        );
    }

    #[test]
    fn timeout_shrinks_to_next_deadline() {
        let now = Instant::now();
        let cap = Duration::from_millis(50);
        assert_eq!(
            poll_timeout(Some(now + Duration::from_millis(20)), now, cap),
            Duration::from_millis(20)
        );
        assert_eq!(poll_timeout(Some(now), now + Duration::from_millis(5), cap), Duration::ZERO);
    }
}
