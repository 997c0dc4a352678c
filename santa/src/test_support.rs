//! Test-only helpers for constructing rosters and pairings.

use crate::core::assignment::Pairing;
use crate::core::roster::Roster;

/// Two participants giving to each other.
pub fn paired_roster(first: &str, second: &str) -> Roster {
    let mut roster = Roster::from_names([first, second]);
    roster.link(0, 1);
    roster.link(1, 0);
    roster
}

pub fn pairing(giver: &str, receiver: &str) -> Pairing {
    Pairing {
        giver: giver.to_string(),
        receiver: receiver.to_string(),
    }
}

/// Write `names` one per line into a fresh temp dir and return both.
pub fn names_file(names: &[&str]) -> anyhow::Result<(tempfile::TempDir, std::path::PathBuf)> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("names.txt");
    let mut contents = names.join("\n");
    contents.push('\n');
    std::fs::write(&path, contents)?;
    Ok((temp, path))
}
