use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, warn};

use crate::engine::{AudioBackend, BackendError, BackendEvent};

use super::sink::create_sink_at;

/// Minimum position change worth reporting, to avoid flooding the engine.
const PROGRESS_GRANULARITY: Duration = Duration::from_millis(250);

/// Drives one `rodio::Sink` per loaded source on the default output device.
///
/// rodio mixes on its own thread; this type only issues requests and turns
/// sink observations into [`BackendEvent`]s when polled.
pub struct RodioBackend {
    stream: OutputStream,
    sink: Option<Sink>,
    source: Option<PathBuf>,
    level: f32,
    playing: bool,
    last_reported: Option<Duration>,
    pending: Vec<BackendEvent>,
}

impl RodioBackend {
    /// Open the default output stream.
    pub fn open() -> Result<Self, BackendError> {
        let mut stream =
            OutputStreamBuilder::open_default_stream().map_err(|e| {
                warn!(error = %e, "cannot open default audio stream");
                BackendError::NoOutputDevice
            })?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            source: None,
            level: 1.0,
            playing: false,
            last_reported: None,
            pending: Vec::new(),
        })
    }

    /// Build a paused sink for the bound source at `start_at`.
    fn prepare(&mut self, start_at: Duration) -> Result<(), BackendError> {
        let path = self.source.clone().ok_or(BackendError::NoSource)?;
        let (sink, total) = create_sink_at(&self.stream, &path, start_at, self.level)?;
        if let Some(old) = self.sink.replace(sink) {
            old.stop();
        }
        if let Some(total) = total {
            self.pending
                .push(BackendEvent::MetadataReady(total.as_secs_f64()));
        }
        self.last_reported = None;
        Ok(())
    }

    fn drop_sink(&mut self) {
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.playing = false;
        self.last_reported = None;
    }
}

impl AudioBackend for RodioBackend {
    fn load(&mut self, source: Option<&Path>) {
        self.drop_sink();
        self.pending.clear();
        self.source = source.map(Path::to_path_buf);
        if self.source.is_none() {
            return;
        }
        // Decode up front so the duration is known before the first play.
        if let Err(e) = self.prepare(Duration::ZERO) {
            debug!(error = %e, "source not ready on load");
        }
    }

    fn play(&mut self) -> Result<(), BackendError> {
        if self.sink.is_none() {
            self.prepare(Duration::ZERO)?;
        }
        let sink = self.sink.as_ref().ok_or(BackendError::NoSource)?;
        sink.play();
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(sink) = self.sink.as_ref() {
            sink.pause();
        }
        self.playing = false;
    }

    fn reset_to_start(&mut self) {
        let Some(sink) = self.sink.as_ref() else {
            return;
        };
        if sink.try_seek(Duration::ZERO).is_ok() {
            self.pending.push(BackendEvent::TimeProgressed(0.0));
            self.last_reported = Some(Duration::ZERO);
            return;
        }
        // Not every decoder can seek; rebuild the sink at the start instead.
        if let Err(e) = self.prepare(Duration::ZERO) {
            debug!(error = %e, "rewind by rebuilding the sink failed");
            self.drop_sink();
        }
    }

    fn set_output_level(&mut self, level: f32) {
        self.level = level;
        if let Some(sink) = self.sink.as_ref() {
            sink.set_volume(level);
        }
    }

    fn poll_events(&mut self) -> Vec<BackendEvent> {
        if self.playing {
            if let Some(sink) = self.sink.as_ref() {
                if sink.empty() {
                    self.playing = false;
                    self.sink = None;
                    self.last_reported = None;
                    self.pending.push(BackendEvent::Ended);
                } else {
                    let pos = sink.get_pos();
                    let moved = self
                        .last_reported
                        .is_none_or(|last| pos.abs_diff(last) >= PROGRESS_GRANULARITY);
                    if moved {
                        self.last_reported = Some(pos);
                        self.pending
                            .push(BackendEvent::TimeProgressed(pos.as_secs_f64()));
                    }
                }
            }
        }
        std::mem::take(&mut self.pending)
    }
}
