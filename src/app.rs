//! Application module: presentation state shared by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the active skin and the
//! playlist cursor. Playback state belongs to the engine.

mod model;

pub use model::*;
