//! Derangement invariants for rosters and parsed pairings.

use std::collections::HashMap;

use crate::core::assignment::Pairing;
use crate::core::roster::Roster;

/// Check that `roster` holds a complete derangement:
/// - Every participant has a receiver and a sender
/// - Nobody gives to themselves
/// - Each receiver's sender link points back at its giver
/// - Nobody receives from more than one giver
pub fn validate_derangement(roster: &Roster) -> Vec<String> {
    let mut errors = Vec::new();
    let mut givers_per_receiver: HashMap<usize, usize> = HashMap::new();

    for (index, participant) in roster.participants().iter().enumerate() {
        let label = format!("{} (#{})", participant.name(), index);

        match participant.receiver() {
            None => errors.push(format!("{label}: missing receiver")),
            Some(receiver) if receiver == index => {
                errors.push(format!("{label}: assigned to themselves"));
            }
            Some(receiver) => {
                *givers_per_receiver.entry(receiver).or_default() += 1;
                let back = roster.get(receiver).and_then(|r| r.sender());
                if back != Some(index) {
                    errors.push(format!(
                        "{label}: receiver #{receiver} does not list them as sender"
                    ));
                }
            }
        }

        if !participant.has_sender() {
            errors.push(format!("{label}: missing sender"));
        }
    }

    let mut duplicated: Vec<_> = givers_per_receiver
        .into_iter()
        .filter(|(_, givers)| *givers > 1)
        .collect();
    duplicated.sort_unstable();
    for (receiver, givers) in duplicated {
        errors.push(format!("#{receiver}: receives from {givers} givers"));
    }

    errors
}

/// Check name-level pairings where participant identity is not available:
/// - No giver's name equals their receiver's name
/// - Receivers are exactly the givers, counted with multiplicity
pub fn validate_pairings(pairings: &[Pairing]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut balance: HashMap<&str, i64> = HashMap::new();

    for (line, pairing) in pairings.iter().enumerate() {
        if pairing.giver == pairing.receiver {
            errors.push(format!(
                "line {}: {} is assigned to themselves",
                line + 1,
                pairing.giver
            ));
        }
        *balance.entry(pairing.giver.as_str()).or_default() += 1;
        *balance.entry(pairing.receiver.as_str()).or_default() -= 1;
    }

    let mut unbalanced: Vec<_> = balance.into_iter().filter(|(_, n)| *n != 0).collect();
    unbalanced.sort_unstable();
    for (name, net) in unbalanced {
        if net > 0 {
            errors.push(format!("{name}: gives {net} more time(s) than receives"));
        } else {
            errors.push(format!("{name}: receives {} more time(s) than gives", -net));
        }
    }

    errors
}
