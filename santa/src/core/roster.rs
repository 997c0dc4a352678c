//! Participants and their receiver/sender links.
//!
//! Links are indices into the owning [`Roster`], so a participant never holds a
//! reference to another participant and clearing a match is just resetting two
//! `Option<usize>` fields.

/// A single gift exchange participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    receiver: Option<usize>,
    sender: Option<usize>,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receiver: None,
            sender: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index of the participant this one gives to.
    pub fn receiver(&self) -> Option<usize> {
        self.receiver
    }

    /// Index of the participant giving to this one.
    pub fn sender(&self) -> Option<usize> {
        self.sender
    }

    pub fn has_receiver(&self) -> bool {
        self.receiver.is_some()
    }

    pub fn has_sender(&self) -> bool {
        self.sender.is_some()
    }

    pub fn reset_matches(&mut self) {
        self.receiver = None;
        self.sender = None;
    }
}

/// Ordered, owned participant set. Positions follow input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    /// Build a roster with one participant per name, links cleared.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            participants: names.into_iter().map(Participant::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn get(&self, index: usize) -> Option<&Participant> {
        self.participants.get(index)
    }

    /// Name of the participant `index` gives to, if matched.
    pub fn receiver_name(&self, index: usize) -> Option<&str> {
        let receiver = self.participants.get(index)?.receiver?;
        self.participants.get(receiver).map(Participant::name)
    }

    /// Name of the participant giving to `index`, if matched.
    pub fn sender_name(&self, index: usize) -> Option<&str> {
        let sender = self.participants.get(index)?.sender?;
        self.participants.get(sender).map(Participant::name)
    }

    /// Record that `giver` gives to `receiver`, setting both sides of the link.
    ///
    /// Out-of-range indices leave the roster untouched and return `false`.
    /// No other check is made, so callers can build invalid states on purpose.
    pub fn link(&mut self, giver: usize, receiver: usize) -> bool {
        if giver >= self.participants.len() || receiver >= self.participants.len() {
            return false;
        }
        self.participants[giver].receiver = Some(receiver);
        self.participants[receiver].sender = Some(giver);
        true
    }

    /// Clear every participant's receiver and sender.
    pub fn reset_matches(&mut self) {
        for participant in &mut self.participants {
            participant.reset_matches();
        }
    }

    /// True when every participant has both a receiver and a sender.
    pub fn everyone_matched(&self) -> bool {
        self.participants
            .iter()
            .all(|p| p.has_receiver() && p.has_sender())
    }

    /// True when every participant has a receiver other than themselves.
    ///
    /// Compares by position, so two participants sharing a name may give to
    /// each other.
    pub fn valid_matches(&self) -> bool {
        self.participants
            .iter()
            .enumerate()
            .all(|(index, p)| matches!(p.receiver, Some(receiver) if receiver != index))
    }
}
