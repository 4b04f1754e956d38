use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{self, LoggingSettings};

/// Where log lines go: the configured file, else the XDG state log.
pub fn log_path(settings: &LoggingSettings) -> Option<PathBuf> {
    settings.file.clone().or_else(config::default_log_path)
}

/// Install the global subscriber writing to [`log_path`].
///
/// The terminal belongs to the TUI, so nothing is logged to stdout/stderr.
/// `RUST_LOG` overrides the configured filter.
pub fn init(settings: &LoggingSettings) -> io::Result<Option<PathBuf>> {
    let Some(path) = log_path(settings) else {
        return Ok(None);
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.filter)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(io::Error::other)?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn configured_file_wins() {
        let settings = LoggingSettings {
            file: Some(PathBuf::from("/tmp/rp.log")),
            ..LoggingSettings::default()
        };
        assert_eq!(log_path(&settings).as_deref(), Some(Path::new("/tmp/rp.log")));
    }
}
