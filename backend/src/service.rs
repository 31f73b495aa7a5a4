use shared::{ClientIdentity, Poll, PollState, Tally, VoteOption};
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};

use crate::counters::VoteCounterStore;
use crate::registry::VoterRegistry;
use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum VoteError {
    #[error("Already voted")]
    AlreadyVoted,
    #[error("Invalid option: {0:?}")]
    InvalidOption(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct VotingService {
    poll: Poll,
    counters: VoteCounterStore,
    voters: Mutex<VoterRegistry>,
}

impl VotingService {
    /// Ensures both counters exist before any vote can be cast.
    pub async fn new(poll: Poll, counters: VoteCounterStore) -> Result<Self, StoreError> {
        counters.initialize(poll.labels()).await?;
        Ok(Self {
            poll,
            counters,
            voters: Mutex::new(VoterRegistry::new()),
        })
    }

    pub fn poll(&self) -> &Poll {
        &self.poll
    }

    pub fn counters(&self) -> &VoteCounterStore {
        &self.counters
    }

    /// The duplicate check runs before option validation, and the identity is
    /// only recorded once the increment has committed.
    #[instrument(skip(self, voter), fields(voter = %voter))]
    pub async fn cast_vote(&self, voter: &ClientIdentity, choice: &str) -> Result<Tally, VoteError> {
        {
            let mut voters = self.voters.lock().await;

            if voters.has_voted(voter) {
                debug!("Repeat vote refused");
                return Err(VoteError::AlreadyVoted);
            }

            let Some(option) = self.poll.resolve(choice) else {
                warn!("Vote for unknown option {:?}", choice);
                return Err(VoteError::InvalidOption(choice.to_string()));
            };

            let label = self.poll.label(option);
            let count = self.counters.increment(label).await.map_err(|e| {
                error!("Failed to record vote for {:?}: {}", label, e);
                e
            })?;

            voters.mark_voted(voter.clone());
            info!("✓ Vote recorded for {:?} (now {})", label, count);
        }

        self.tally().await.map_err(|e| {
            error!("Failed to read tally after vote: {}", e);
            VoteError::Store(e)
        })
    }

    pub async fn tally(&self) -> Result<Tally, StoreError> {
        let option1_votes = self.counters.get(self.poll.label(VoteOption::First)).await?;
        let option2_votes = self.counters.get(self.poll.label(VoteOption::Second)).await?;
        Ok(Tally::new(option1_votes, option2_votes))
    }

    pub async fn state(&self) -> Result<PollState, StoreError> {
        Ok(PollState::new(&self.poll, self.tally().await?))
    }

    pub async fn has_voted(&self, voter: &ClientIdentity) -> bool {
        self.voters.lock().await.has_voted(voter)
    }

    pub async fn voter_count(&self) -> usize {
        self.voters.lock().await.len()
    }
}
