use std::path::PathBuf;

use rocket::form::Form;
use rocket::http::ContentType;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::{get, post, State};
use shared::{ClientIdentity, PollState, VoteForm};
use tracing::{error, info};

use crate::config::PollConfig;
use crate::counters::VoteCounterStore;
use crate::error::{ApiError, StartupError};
use crate::page;
use crate::service::VotingService;
use crate::store::KvStore;

const THANKS: &str = "Thanks for voting!";

pub struct AppState {
    pub service: VotingService,
}

impl AppState {
    pub fn new(service: VotingService) -> Self {
        Self { service }
    }

    pub async fn from_config(config: &PollConfig) -> Result<Self, StartupError> {
        let poll = config.poll()?;
        let kv = KvStore::connect(&config.database_url, config.max_connections).await?;
        let service = VotingService::new(poll, VoteCounterStore::new(kv)).await?;

        info!(
            "🗳️ Poll {:?}: {:?} vs {:?}",
            config.question, config.option1, config.option2
        );
        Ok(Self::new(service))
    }
}

async fn current_state(state: &AppState) -> Result<PollState, ApiError> {
    state.service.state().await.map_err(|e| {
        error!("Failed to read tally: {}", e);
        ApiError::from(e)
    })
}

#[get("/")]
pub async fn index(state: &State<AppState>) -> Result<RawHtml<String>, ApiError> {
    let current = current_state(state).await?;
    Ok(RawHtml(page::render(&current, None)))
}

#[get("/api/state")]
pub async fn poll_state(state: &State<AppState>) -> Result<Json<PollState>, ApiError> {
    current_state(state).await.map(Json)
}

#[post("/vote", format = "form", data = "<form>")]
pub async fn vote(
    state: &State<AppState>,
    voter: ClientIdentity,
    form: Form<VoteForm>,
) -> Result<RawHtml<String>, ApiError> {
    let choice = form.into_inner().vote.unwrap_or_default();
    let tally = state.service.cast_vote(&voter, &choice).await?;
    let current = PollState::new(state.service.poll(), tally);
    Ok(RawHtml(page::render(&current, Some(THANKS))))
}

#[post("/vote", rank = 2)]
pub fn vote_not_form() -> ApiError {
    ApiError::NotAForm
}

#[get("/static/<path..>")]
pub fn static_file(path: PathBuf) -> Option<(ContentType, &'static [u8])> {
    let file = page::asset(&path)?;
    let content_type = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(ContentType::from_extension)
        .unwrap_or(ContentType::Binary);
    Some((content_type, file.contents()))
}
