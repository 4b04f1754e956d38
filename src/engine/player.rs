use std::time::Duration;

use rand::rngs::ThreadRng;
use tracing::{debug, info, warn};

use crate::config::EngineSettings;
use crate::library::Track;

use super::animation::Animator;
use super::backend::{AudioBackend, BackendEvent};
use super::clock::{Clock, SystemClock};
use super::error::EngineError;
use super::timer::Timer;
use super::types::{Direction, PlaybackState, TransportState};

/// The playback engine.
///
/// All mutation goes through the command methods or the backend notification
/// handlers. The engine is driven from one thread: the caller forwards backend
/// events ([`Engine::pump_backend`]) and fires timers ([`Engine::poll_timers`])
/// between commands.
pub struct Engine<B: AudioBackend, C: Clock = SystemClock> {
    tracks: Vec<Track>,
    state: PlaybackState,
    backend: B,
    clock: C,
    animator: Animator,
    rng: ThreadRng,

    animation_timer: Timer,
    auto_play: Timer,
    auto_play_delay: Duration,

    last_failure: Option<EngineError>,
    disposed: bool,
}

impl<B: AudioBackend> Engine<B> {
    pub fn new(tracks: Vec<Track>, backend: B, settings: &EngineSettings) -> Self {
        Self::with_clock(tracks, backend, SystemClock, settings)
    }
}

impl<B: AudioBackend, C: Clock> Engine<B, C> {
    pub fn with_clock(tracks: Vec<Track>, backend: B, clock: C, settings: &EngineSettings) -> Self {
        let animator = Animator::new(
            settings.visualizer_bars,
            settings.waveform_bars,
            settings.rotation_step,
        );
        let volume = settings.initial_volume.clamp(0.0, 1.0);

        let mut engine = Self {
            state: PlaybackState {
                track_index: 0,
                transport: TransportState::Stopped,
                elapsed: 0.0,
                duration: 0.0,
                volume,
                animation: animator.resting(0.0),
            },
            tracks,
            backend,
            clock,
            animator,
            rng: rand::thread_rng(),
            animation_timer: Timer::periodic(Duration::from_millis(
                settings.tick_interval_ms.max(1),
            )),
            auto_play: Timer::one_shot(),
            auto_play_delay: Duration::from_millis(settings.auto_play_delay_ms),
            last_failure: None,
            disposed: false,
        };

        let source = engine.current_track().and_then(|t| t.source.clone());
        engine.backend.load(source.as_deref());
        engine.backend.set_output_level(volume);
        info!(tracks = engine.tracks.len(), volume, "engine ready");
        engine
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.state.track_index)
    }

    /// The most recent swallowed playback failure, if any.
    pub fn last_failure(&self) -> Option<&EngineError> {
        self.last_failure.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub(crate) fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// True while a deferred auto-play is waiting for its grace period.
    #[cfg(test)]
    pub(crate) fn auto_play_pending(&self) -> bool {
        self.auto_play.is_armed()
    }

    /// Earliest pending timer deadline, for sizing the event loop's poll.
    pub fn next_deadline(&self) -> Option<std::time::Instant> {
        match (self.animation_timer.due(), self.auto_play.due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Start playback of the current track.
    ///
    /// Fails open: a backend error is logged and recorded, and the engine
    /// still enters `Playing` so skins keep animating. A successful start
    /// clears the recorded failure. Does nothing when there is no current
    /// track or it has no source.
    pub fn play(&mut self) {
        if self.disposed {
            return;
        }
        let Some(track) = self.tracks.get(self.state.track_index) else {
            debug!("play ignored: no tracks");
            return;
        };
        if track.source.is_none() {
            debug!(track = %track.name, "play ignored: track has no source");
            return;
        }
        let name = track.name.clone();

        self.auto_play.cancel();
        match self.backend.play() {
            Ok(()) => self.last_failure = None,
            Err(source) => {
                warn!(track = %name, error = %source, "audio playback failed, continuing silently");
                self.last_failure = Some(EngineError::PlaybackUnavailable {
                    track: name,
                    source,
                });
            }
        }

        self.state.transport = TransportState::Playing;
        self.animation_timer.start(self.clock.now());
    }

    /// Pause playback. Also drops a pending auto-play; otherwise a no-op
    /// unless playing.
    pub fn pause(&mut self) {
        if self.disposed {
            return;
        }
        self.auto_play.cancel();
        if self.state.transport != TransportState::Playing {
            return;
        }
        self.backend.pause();
        self.state.transport = TransportState::Paused;
        self.halt_timers();
    }

    /// Stop playback and rewind to the start of the current track.
    pub fn stop(&mut self) {
        if self.disposed {
            return;
        }
        self.backend.pause();
        self.backend.reset_to_start();
        self.state.transport = TransportState::Stopped;
        self.state.elapsed = 0.0;
        self.halt_timers();
    }

    /// Move one track back or forward, wrapping at both ends.
    pub fn seek_relative_track(&mut self, direction: Direction) -> Result<(), EngineError> {
        if self.disposed {
            return Err(EngineError::Disposed);
        }
        let len = self.tracks.len();
        if len == 0 {
            return Err(EngineError::InvalidTrackIndex { index: 0, len });
        }
        let i = self.state.track_index;
        let next = match direction {
            Direction::Next => (i + 1) % len,
            Direction::Previous => (i + len - 1) % len,
        };
        self.change_track(next);
        Ok(())
    }

    /// Jump to `index`. Out-of-range indices are rejected and change nothing.
    pub fn select_track(&mut self, index: usize) -> Result<(), EngineError> {
        if self.disposed {
            return Err(EngineError::Disposed);
        }
        let len = self.tracks.len();
        if index >= len {
            return Err(EngineError::InvalidTrackIndex { index, len });
        }
        self.change_track(index);
        Ok(())
    }

    /// Set the output level, clamped to `0.0..=1.0`. NaN is ignored.
    pub fn set_volume(&mut self, volume: f32) {
        if self.disposed || volume.is_nan() {
            return;
        }
        let volume = volume.clamp(0.0, 1.0);
        self.state.volume = volume;
        self.backend.set_output_level(volume);
    }

    pub fn on_time_progressed(&mut self, seconds: f64) {
        if seconds.is_finite() && seconds >= 0.0 {
            self.state.elapsed = seconds;
        }
    }

    pub fn on_metadata_ready(&mut self, seconds: f64) {
        self.state.duration = if seconds.is_finite() && seconds > 0.0 {
            seconds
        } else {
            0.0
        };
    }

    /// Advance to the next track and schedule an implicit play after the
    /// grace period.
    pub fn on_playback_ended(&mut self) {
        if self.disposed {
            return;
        }
        if self.seek_relative_track(Direction::Next).is_err() {
            return;
        }
        self.auto_play.arm(self.clock.now(), self.auto_play_delay);
        debug!(index = self.state.track_index, "track ended, auto-play scheduled");
    }

    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::TimeProgressed(t) => self.on_time_progressed(t),
            BackendEvent::MetadataReady(d) => self.on_metadata_ready(d),
            BackendEvent::Ended => self.on_playback_ended(),
        }
    }

    /// Forward every pending backend notification. Returns true if any arrived.
    pub fn pump_backend(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        let events = self.backend.poll_events();
        let any = !events.is_empty();
        for event in events {
            self.handle_backend_event(event);
        }
        any
    }

    /// Fire whichever timers are due. Returns true if state changed.
    pub fn poll_timers(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        let now = self.clock.now();
        let mut changed = false;

        if self.auto_play.fire_if_due(now) {
            self.play();
            changed = true;
        }
        if self.animation_timer.fire_if_due(now) {
            self.tick();
            changed = true;
        }
        changed
    }

    /// Produce one animation frame. While not playing this is always the
    /// resting pattern.
    pub fn tick(&mut self) {
        if self.state.is_playing() {
            self.animator.step(&mut self.state.animation, &mut self.rng);
        } else {
            self.animator.rest(&mut self.state.animation);
        }
    }

    /// Cancel all background work and silence the backend. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.animation_timer.cancel();
        self.auto_play.cancel();
        self.backend.pause();
        self.disposed = true;
        debug!("engine disposed");
    }

    fn change_track(&mut self, index: usize) {
        self.state.track_index = index;
        self.state.transport = TransportState::Stopped;
        self.state.elapsed = 0.0;
        self.state.duration = 0.0;
        self.halt_timers();

        let source = self.tracks[index].source.clone();
        self.backend.load(source.as_deref());
        debug!(index, track = %self.tracks[index].name, "track selected");
    }

    fn halt_timers(&mut self) {
        self.animation_timer.cancel();
        self.auto_play.cancel();
        self.animator.rest(&mut self.state.animation);
    }
}

impl<B: AudioBackend, C: Clock> Drop for Engine<B, C> {
    fn drop(&mut self) {
        self.dispose();
    }
}
