//! `santa check`: validate an existing assignment file.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::core::invariants::validate_pairings;
use crate::io::assignments::read_assignments;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Every line is a valid pairing and everyone gives and receives once.
    Valid { pairings: usize },
    Invalid { errors: Vec<String> },
}

/// Load an assignment file and check it at name level.
pub fn check_file(path: &Path) -> Result<CheckOutcome> {
    let assignment = read_assignments(path)?;
    debug!(pairings = assignment.len(), path = %path.display(), "assignment loaded");
    if assignment.is_empty() {
        return Ok(CheckOutcome::Invalid {
            errors: vec!["no pairings found".to_string()],
        });
    }
    let errors = validate_pairings(assignment.pairings());
    if errors.is_empty() {
        return Ok(CheckOutcome::Valid {
            pairings: assignment.len(),
        });
    }
    Ok(CheckOutcome::Invalid { errors })
}
