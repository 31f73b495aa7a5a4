use serde::{Serialize, Deserialize};

use crate::poll::{Poll, VoteOption};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tally {
    pub option1_votes: u64,
    pub option2_votes: u64,
}

impl Tally {
    pub fn new(option1_votes: u64, option2_votes: u64) -> Self {
        Self { option1_votes, option2_votes }
    }

    pub fn votes(&self, option: VoteOption) -> u64 {
        match option {
            VoteOption::First => self.option1_votes,
            VoteOption::Second => self.option2_votes,
        }
    }

    pub fn total(&self) -> u64 {
        self.option1_votes.saturating_add(self.option2_votes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollState {
    pub question: String,
    pub option1: String,
    pub option2: String,
    pub tally: Tally,
}

impl PollState {
    pub fn new(poll: &Poll, tally: Tally) -> Self {
        Self {
            question: poll.question().to_string(),
            option1: poll.label(VoteOption::First).to_string(),
            option2: poll.label(VoteOption::Second).to_string(),
            tally,
        }
    }
}

/// Body of `POST /vote`. A missing `vote` field is kept as `None` so it can be
/// rejected as an unknown option rather than a malformed request.
#[cfg_attr(feature = "backend", derive(rocket::FromForm))]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoteForm {
    pub vote: Option<String>,
}
