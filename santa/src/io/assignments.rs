//! Assignment sink and assignment file parsing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::core::assignment::{ARROW, Assignment, Pairing};

/// Write one `"<giver> -> <receiver>"` line per pairing, replacing `path`.
pub fn write_assignments(path: &Path, assignment: &Assignment) -> Result<()> {
    let mut buf = String::new();
    for line in assignment.lines() {
        buf.push_str(&line);
        buf.push('\n');
    }
    fs::write(path, buf).with_context(|| format!("write assignments {}", path.display()))
}

/// Read an assignment file previously produced by [`write_assignments`].
pub fn read_assignments(path: &Path) -> Result<Assignment> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read assignments {}", path.display()))?;
    parse_assignments(&contents).with_context(|| format!("parse assignments {}", path.display()))
}

/// Parse `"<giver> -> <receiver>"` lines. Blank lines are ignored.
pub fn parse_assignments(contents: &str) -> Result<Assignment> {
    let mut pairings = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let Some((giver, receiver)) = line.split_once(ARROW) else {
            bail!("line {}: missing '{}' separator", number + 1, ARROW.trim());
        };
        let (giver, receiver) = (giver.trim(), receiver.trim());
        if giver.is_empty() || receiver.is_empty() {
            bail!("line {}: empty giver or receiver", number + 1);
        }
        pairings.push(Pairing {
            giver: giver.to_string(),
            receiver: receiver.to_string(),
        });
    }
    Ok(Assignment::from_pairings(pairings))
}
