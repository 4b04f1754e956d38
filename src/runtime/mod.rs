use std::env;
use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::engine::Engine;
use crate::skin::SkinId;

mod event_loop;
mod keys;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_warning) = settings::load_settings();

    match logging::init(&settings.logging) {
        Ok(Some(path)) => info!(log = %path.display(), "logging started"),
        Ok(None) => {}
        Err(e) => eprintln!("retro-player: logging disabled: {e}"),
    }
    if let Some(msg) = config_warning {
        warn!("{msg}");
    }

    let dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let tracks = startup::load_tracks(&settings, &dir);
    let mut engine = Engine::new(tracks, startup::open_backend(), &settings.engine);
    let mut app = App::new(engine.tracks().len(), SkinId::from(settings.ui.skin));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &mut engine);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
