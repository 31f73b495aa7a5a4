use std::collections::HashSet;

use shared::ClientIdentity;

/// Identities that have already voted. Entries are never removed.
///
/// The registry has no lock of its own; `VotingService` keeps it behind the
/// mutex that also covers the counter increment, so a check and the matching
/// mark always happen under one acquisition.
#[derive(Debug, Default)]
pub struct VoterRegistry {
    voters: HashSet<ClientIdentity>,
}

impl VoterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_voted(&self, id: &ClientIdentity) -> bool {
        self.voters.contains(id)
    }

    /// Returns false if `id` was already present.
    pub fn mark_voted(&mut self, id: ClientIdentity) -> bool {
        self.voters.insert(id)
    }

    pub fn len(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }
}
