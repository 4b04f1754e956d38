//! Utilities for creating `rodio` sinks from track sources.
//!
//! The helper here opens and decodes a file and prepares a paused `Sink`
//! at the requested start position.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::engine::BackendError;

/// Open and decode `path`, returning its reported length (if any).
pub(super) fn open_source(path: &Path) -> Result<(Decoder<BufReader<File>>, Option<Duration>), BackendError> {
    let file = File::open(path).map_err(|source| BackendError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let decoder = Decoder::new(BufReader::new(file)).map_err(|e| BackendError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let total = decoder.total_duration();
    Ok((decoder, total))
}

/// Create a paused `Sink` for `path` that starts playback at `start_at`.
pub(super) fn create_sink_at(
    stream: &OutputStream,
    path: &Path,
    start_at: Duration,
    level: f32,
) -> Result<(Sink, Option<Duration>), BackendError> {
    let (decoder, total) = open_source(path)?;

    let sink = Sink::connect_new(stream.mixer());
    // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
    sink.append(decoder.skip_duration(start_at));
    sink.set_volume(level);
    sink.pause();
    Ok((sink, total))
}
