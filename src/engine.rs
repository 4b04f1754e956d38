//! Playback engine: the single owner of transport state.
//!
//! The engine mediates between user commands and an [`AudioBackend`]. It
//! never talks to a skin; skins read [`PlaybackState`] snapshots and call
//! engine commands.

mod animation;
mod backend;
mod clock;
mod error;
mod format;
mod player;
mod timer;
mod types;

pub use backend::{AudioBackend, BackendError, BackendEvent, SilentBackend};
pub use clock::{Clock, SystemClock};
pub use error::EngineError;
pub use format::format_time;
pub use player::Engine;
pub use types::{Animation, Direction, PlaybackState, TransportState};

#[cfg(test)]
pub(crate) mod testing;
