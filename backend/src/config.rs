use rocket::figment::Figment;
use serde::Deserialize;
use shared::poll::{DEFAULT_OPTION1, DEFAULT_OPTION2, DEFAULT_QUESTION};
use shared::{Poll, ValidationError};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://votes.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Poll settings read from Rocket's figment, so they come from `Rocket.toml`
/// or `ROCKET_QUESTION`, `ROCKET_OPTION1`, `ROCKET_OPTION2`,
/// `ROCKET_DATABASE_URL` and `ROCKET_MAX_CONNECTIONS`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PollConfig {
    #[serde(default = "default_question")]
    pub question: String,
    #[serde(default = "default_option1")]
    pub option1: String,
    #[serde(default = "default_option2")]
    pub option2: String,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_question() -> String { DEFAULT_QUESTION.into() }
fn default_option1() -> String { DEFAULT_OPTION1.into() }
fn default_option2() -> String { DEFAULT_OPTION2.into() }
fn default_database_url() -> String { DEFAULT_DATABASE_URL.into() }
fn default_max_connections() -> u32 { DEFAULT_MAX_CONNECTIONS }

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            question: default_question(),
            option1: default_option1(),
            option2: default_option2(),
            database_url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl PollConfig {
    pub fn from_figment(figment: &Figment) -> Result<Self, rocket::figment::Error> {
        figment.extract()
    }

    pub fn poll(&self) -> Result<Poll, ValidationError> {
        Poll::new(&self.question, &self.option1, &self.option2)
    }
}
