//! Track list construction: explicit playlist entries or a directory scan.

mod display;
mod model;
mod scan;

pub use model::Track;
pub use scan::{from_entries, scan};
