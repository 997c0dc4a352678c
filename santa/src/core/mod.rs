//! Pure logic shared by the santa commands.
//!
//! Core modules do no filesystem I/O and only emit `tracing` events.
//! Randomness enters only through the `Rng` handed to the matcher.

pub mod assignment;
pub mod invariants;
pub mod matcher;
pub mod roster;
