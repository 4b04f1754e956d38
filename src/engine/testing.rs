//! Test doubles for the engine: a recording backend and a hand-driven clock.

use std::cell::Cell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, Instant};

use super::backend::{AudioBackend, BackendError, BackendEvent};
use super::clock::Clock;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Load(Option<PathBuf>),
    Play,
    Pause,
    ResetToStart,
    SetOutputLevel(f32),
}

/// Records every call; `play()` fails for sources marked broken.
#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
    pub calls: Vec<Call>,
    pub queued: Vec<BackendEvent>,
    broken: HashSet<PathBuf>,
    loaded: Option<PathBuf>,
}

impl RecordingBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_broken(mut self, path: impl Into<PathBuf>) -> Self {
        self.broken.insert(path.into());
        self
    }

    pub(crate) fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub(crate) fn plays(&self) -> usize {
        self.count(&Call::Play)
    }
}

impl AudioBackend for RecordingBackend {
    fn load(&mut self, source: Option<&Path>) {
        self.loaded = source.map(Path::to_path_buf);
        self.calls.push(Call::Load(self.loaded.clone()));
    }

    fn play(&mut self) -> Result<(), BackendError> {
        self.calls.push(Call::Play);
        match &self.loaded {
            None => Err(BackendError::NoSource),
            Some(p) if self.broken.contains(p) => Err(BackendError::Decode {
                path: p.clone(),
                reason: "corrupt test data".into(),
            }),
            Some(_) => Ok(()),
        }
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn reset_to_start(&mut self) {
        self.calls.push(Call::ResetToStart);
    }

    fn set_output_level(&mut self, level: f32) {
        self.calls.push(Call::SetOutputLevel(level));
    }

    fn poll_events(&mut self) -> Vec<BackendEvent> {
        std::mem::take(&mut self.queued)
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub(crate) struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub(crate) fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub(crate) fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}
