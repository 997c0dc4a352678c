//! Immutable assignment produced from a matched roster.

use std::fmt;

use anyhow::{Result, anyhow};

use crate::core::roster::Roster;

/// Separator between giver and receiver in rendered lines.
pub const ARROW: &str = " -> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub giver: String,
    pub receiver: String,
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.giver, ARROW, self.receiver)
    }
}

/// Pairings in roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    pairings: Vec<Pairing>,
}

impl Assignment {
    /// Snapshot the receiver of every participant.
    ///
    /// Fails if any participant has no receiver.
    pub fn from_roster(roster: &Roster) -> Result<Self> {
        let pairings = roster
            .participants()
            .iter()
            .enumerate()
            .map(|(index, participant)| {
                let receiver = roster.receiver_name(index).ok_or_else(|| {
                    anyhow!("{} (#{}) has no receiver", participant.name(), index)
                })?;
                Ok(Pairing {
                    giver: participant.name().to_string(),
                    receiver: receiver.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { pairings })
    }

    pub fn from_pairings(pairings: Vec<Pairing>) -> Self {
        Self { pairings }
    }

    pub fn pairings(&self) -> &[Pairing] {
        &self.pairings
    }

    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    /// Rendered `"<giver> -> <receiver>"` lines, one per pairing.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.pairings.iter().map(Pairing::to_string)
    }
}
