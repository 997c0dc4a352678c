//! `santa assign`: read names, match them, write the assignment file.

use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::core::assignment::Assignment;
use crate::core::matcher::{AssignError, MatchLimits, assign_players};
use crate::core::roster::Roster;
use crate::io::assignments::write_assignments;
use crate::io::config::SantaConfig;
use crate::io::names::read_names;

/// Structured assign outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignOutcome {
    /// Assignment generated and written to the output path.
    Written { assignment: Assignment, rounds: u32 },
    /// Assignment generated but the output could not be written.
    WriteFailed {
        assignment: Assignment,
        error: String,
    },
    /// The round cap was reached without a complete matching.
    Unmatched { rounds: u32 },
}

/// Run the full assign flow with an RNG built from `config.seed`.
pub fn run_assign(input: &Path, output: &Path, config: &SantaConfig) -> Result<AssignOutcome> {
    config.validate()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    run_assign_with_rng(input, output, &config.limits(), &mut rng)
}

/// Run the full assign flow with a caller-supplied RNG.
///
/// Input errors and rosters smaller than two abort with `Err` before anything
/// is written.
pub fn run_assign_with_rng<R>(
    input: &Path,
    output: &Path,
    limits: &MatchLimits,
    rng: &mut R,
) -> Result<AssignOutcome>
where
    R: Rng + ?Sized,
{
    let names = read_names(input)?;
    info!(participants = names.len(), input = %input.display(), "names loaded");

    let mut roster = Roster::from_names(names);
    let report = match assign_players(&mut roster, limits, rng) {
        Ok(report) => report,
        Err(AssignError::Exhausted { rounds }) => {
            warn!(rounds, "no valid assignment found");
            return Ok(AssignOutcome::Unmatched { rounds });
        }
        Err(err) => return Err(err).context("generate assignment"),
    };
    let assignment = Assignment::from_roster(&roster).context("snapshot assignment")?;
    info!(rounds = report.rounds, "assignment generated");

    match write_assignments(output, &assignment) {
        Ok(()) => Ok(AssignOutcome::Written {
            assignment,
            rounds: report.rounds,
        }),
        Err(err) => {
            warn!(output = %output.display(), "failed to write assignments");
            Ok(AssignOutcome::WriteFailed {
                assignment,
                error: format!("{err:#}"),
            })
        }
    }
}
