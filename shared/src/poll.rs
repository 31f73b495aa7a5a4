use serde::{Serialize, Deserialize};

use crate::validation::{validate_poll, ValidationError};

pub const DEFAULT_QUESTION: &str = "Vote for Your Favorite";
pub const DEFAULT_OPTION1: &str = "Option 1";
pub const DEFAULT_OPTION2: &str = "Option 2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VoteOption {
    First,
    Second,
}

impl VoteOption {
    pub const ALL: [VoteOption; 2] = [VoteOption::First, VoteOption::Second];
}

/// The question and its two labels, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    question: String,
    option1: String,
    option2: String,
}

impl Poll {
    pub fn new(
        question: impl Into<String>,
        option1: impl Into<String>,
        option2: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let (question, option1, option2) = (question.into(), option1.into(), option2.into());
        validate_poll(&question, &option1, &option2)?;
        Ok(Self { question, option1, option2 })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn label(&self, option: VoteOption) -> &str {
        match option {
            VoteOption::First => &self.option1,
            VoteOption::Second => &self.option2,
        }
    }

    pub fn labels(&self) -> [&str; 2] {
        [self.option1.as_str(), self.option2.as_str()]
    }

    /// Exact, case-sensitive match of a submitted label.
    pub fn resolve(&self, label: &str) -> Option<VoteOption> {
        VoteOption::ALL.into_iter().find(|&option| self.label(option) == label)
    }
}

impl Default for Poll {
    fn default() -> Self {
        Self {
            question: DEFAULT_QUESTION.into(),
            option1: DEFAULT_OPTION1.into(),
            option2: DEFAULT_OPTION2.into(),
        }
    }
}
