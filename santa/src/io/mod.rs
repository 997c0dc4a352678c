//! I/O helpers for santa commands.

pub mod assignments;
pub mod config;
pub mod names;
