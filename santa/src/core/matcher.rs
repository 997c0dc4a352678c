//! Randomized greedy matching with bounded retry.
//!
//! Each round walks the roster in input order and draws random receivers for
//! every participant until one is accepted or the per-participant retry budget
//! runs out. Rounds repeat until everyone gives and receives exactly once, or
//! until the round cap is hit.

use rand::Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::core::roster::Roster;

/// Default number of draws per participant before it is abandoned for the round.
pub const RETRY_MAX: u32 = 10_000;

/// Default number of rounds before giving up.
pub const MAX_ROUNDS: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchLimits {
    /// Random draws allowed per participant within one round.
    pub retry_max: u32,
    /// Rounds allowed before giving up. `0` means unbounded.
    pub max_rounds: u32,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            retry_max: RETRY_MAX,
            max_rounds: MAX_ROUNDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    #[error("need at least 2 participants, got {count}")]
    TooFewParticipants { count: usize },
    #[error("retry budget must be > 0")]
    InvalidRetryBudget,
    #[error("unable to generate a valid assignment after {rounds} rounds")]
    Exhausted { rounds: u32 },
}

/// Statistics for a successful matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchReport {
    pub rounds: u32,
}

/// Link every participant in `roster` to a receiver, forming a derangement.
///
/// On success every participant has exactly one receiver and one sender and
/// nobody gives to themselves. On error the roster may hold a partial match
/// from the last round.
pub fn assign_players<R>(
    roster: &mut Roster,
    limits: &MatchLimits,
    rng: &mut R,
) -> Result<MatchReport, AssignError>
where
    R: Rng + ?Sized,
{
    if roster.len() < 2 {
        return Err(AssignError::TooFewParticipants {
            count: roster.len(),
        });
    }
    if limits.retry_max == 0 {
        return Err(AssignError::InvalidRetryBudget);
    }

    let mut rounds: u32 = 0;
    loop {
        if limits.max_rounds != 0 && rounds >= limits.max_rounds {
            return Err(AssignError::Exhausted { rounds });
        }
        rounds = rounds.saturating_add(1);

        roster.reset_matches();
        let abandoned = run_round(roster, limits.retry_max, rng);
        if roster.everyone_matched() {
            debug!(rounds, participants = roster.len(), "matching complete");
            return Ok(MatchReport { rounds });
        }
        debug!(round = rounds, abandoned, "round incomplete, retrying");
    }
}

/// One greedy pass. Returns how many participants were left without a receiver.
fn run_round<R>(roster: &mut Roster, retry_max: u32, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    let count = roster.len();
    let mut abandoned = 0;
    for giver in 0..count {
        let mut attempts = 0;
        let mut matched = false;
        while attempts < retry_max {
            let candidate = rng.gen_range(0..count);
            let free = roster
                .get(candidate)
                .is_some_and(|participant| !participant.has_sender());
            if candidate != giver && free {
                roster.link(giver, candidate);
                matched = true;
                break;
            }
            attempts += 1;
        }
        if !matched {
            trace!(giver, attempts, "retry budget exhausted");
            abandoned += 1;
        }
    }
    abandoned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::invariants::validate_derangement;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TEN: [&str; 10] = [
        "John Maj",
        "Akhil Bhasin",
        "Sid Komaragiri",
        "Pranav Rao",
        "Abhi Agarwal",
        "Ansh Shah",
        "Matthew Banfield",
        "Jason Mamoa",
        "Timothy Chalamet",
        "Zendaya Queen",
    ];

    #[test]
    fn five_names_form_complete_derangement() {
        let mut roster = Roster::from_names(["John", "Akhil", "Sid", "Pranav", "Abhi"]);
        let mut rng = StdRng::seed_from_u64(7);
        assign_players(&mut roster, &MatchLimits::default(), &mut rng).expect("assign");

        assert!(roster.everyone_matched());
        assert!(roster.valid_matches());
        assert!(validate_derangement(&roster).is_empty());
    }

    #[test]
    fn repeated_runs_each_satisfy_invariants() {
        for seed in 0..50 {
            let mut roster = Roster::from_names(TEN);
            let mut rng = StdRng::seed_from_u64(seed);
            assign_players(&mut roster, &MatchLimits::default(), &mut rng).expect("assign");
            let errors = validate_derangement(&roster);
            assert!(errors.is_empty(), "seed {seed}: {errors:?}");
        }
    }

    #[test]
    fn varied_sizes_produce_derangements() {
        let mut rng = StdRng::seed_from_u64(99);
        for size in 2..40 {
            let names: Vec<String> = (0..size).map(|i| format!("p{i}")).collect();
            let mut roster = Roster::from_names(names);
            assign_players(&mut roster, &MatchLimits::default(), &mut rng).expect("assign");
            assert!(validate_derangement(&roster).is_empty(), "size {size}");
        }
    }

    #[test]
    fn two_participants_swap() {
        let mut roster = Roster::from_names(["A", "B"]);
        let mut rng = StdRng::seed_from_u64(1);
        assign_players(&mut roster, &MatchLimits::default(), &mut rng).expect("assign");
        assert_eq!(roster.receiver_name(0), Some("B"));
        assert_eq!(roster.receiver_name(1), Some("A"));
    }

    #[test]
    fn duplicate_names_are_distinct_participants() {
        let mut roster = Roster::from_names(["Sam", "Sam", "Alex"]);
        let mut rng = StdRng::seed_from_u64(3);
        assign_players(&mut roster, &MatchLimits::default(), &mut rng).expect("assign");
        assert!(validate_derangement(&roster).is_empty());
    }

    #[test]
    fn same_seed_is_reproducible() {
        let run = |seed| {
            let mut roster = Roster::from_names(TEN);
            let mut rng = StdRng::seed_from_u64(seed);
            assign_players(&mut roster, &MatchLimits::default(), &mut rng).expect("assign");
            roster
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn rejects_fewer_than_two() {
        let mut rng = StdRng::seed_from_u64(0);
        for names in [vec![], vec!["Solo"]] {
            let count = names.len();
            let mut roster = Roster::from_names(names);
            let err = assign_players(&mut roster, &MatchLimits::default(), &mut rng)
                .expect_err("should reject");
            assert_eq!(err, AssignError::TooFewParticipants { count });
        }
    }

    #[test]
    fn rejects_zero_retry_budget() {
        let mut roster = Roster::from_names(["A", "B"]);
        let mut rng = StdRng::seed_from_u64(0);
        let limits = MatchLimits {
            retry_max: 0,
            max_rounds: 1,
        };
        let err = assign_players(&mut roster, &limits, &mut rng).expect_err("should reject");
        assert_eq!(err, AssignError::InvalidRetryBudget);
    }

    #[test]
    fn round_cap_surfaces_exhausted() {
        // One draw per participant across 60 people essentially never completes.
        let names: Vec<String> = (0..60).map(|i| format!("p{i}")).collect();
        let mut roster = Roster::from_names(names);
        let mut rng = StdRng::seed_from_u64(5);
        let limits = MatchLimits {
            retry_max: 1,
            max_rounds: 3,
        };
        let err = assign_players(&mut roster, &limits, &mut rng).expect_err("should exhaust");
        assert_eq!(err, AssignError::Exhausted { rounds: 3 });
    }

    #[test]
    fn unbounded_rounds_still_terminate_on_solvable_input() {
        let mut roster = Roster::from_names(TEN);
        let mut rng = StdRng::seed_from_u64(11);
        let limits = MatchLimits {
            retry_max: RETRY_MAX,
            max_rounds: 0,
        };
        let report = assign_players(&mut roster, &limits, &mut rng).expect("assign");
        assert!(report.rounds >= 1);
    }
}
