//! Secret Santa assignment generator.
//!
//! Assigns every participant exactly one other participant to give a gift to,
//! so that nobody gives to themselves and everybody receives exactly once.
//! The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure logic (roster, matching, invariants). No I/O; the random
//!   source is passed in so tests can seed it.
//! - **[`io`]**: Filesystem side effects (name files, assignment files, config).
//!
//! Orchestration modules ([`assign`], [`check`]) coordinate core logic with I/O
//! to implement CLI commands.

pub mod assign;
pub mod check;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
