//! Participant name source: one name per line.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::core::assignment::ARROW;

/// Read participant names from `path` in file order.
///
/// Lines are trimmed and blank lines skipped. Duplicates are kept.
pub fn read_names(path: &Path) -> Result<Vec<String>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read names {}", path.display()))?;
    parse_names(&contents).with_context(|| format!("parse names {}", path.display()))
}

/// Names may not contain the assignment separator, or written lines would be
/// ambiguous.
pub fn parse_names(contents: &str) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        if name.contains(ARROW) {
            bail!("line {}: name contains '{}'", number + 1, ARROW.trim());
        }
        names.push(name.to_string());
    }
    Ok(names)
}
