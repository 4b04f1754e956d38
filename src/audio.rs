//! rodio implementation of the engine's audio backend.

mod backend;
mod sink;

pub use backend::RodioBackend;

#[cfg(test)]
mod tests;
