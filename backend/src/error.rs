use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::{ErrorResponse, ValidationError};
use thiserror::Error;

use crate::service::VoteError;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("You have already voted.")]
    AlreadyVoted,
    #[error("Invalid option: {0:?}")]
    InvalidOption(String),
    #[error("Votes must be submitted as a form.")]
    NotAForm,
    #[error("An internal server error occurred.")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::AlreadyVoted => Status::Forbidden,
            ApiError::InvalidOption(_) | ApiError::NotAForm => Status::BadRequest,
            ApiError::Internal => Status::InternalServerError,
        }
    }
}

impl From<VoteError> for ApiError {
    fn from(err: VoteError) -> Self {
        match err {
            VoteError::AlreadyVoted => ApiError::AlreadyVoted,
            VoteError::InvalidOption(option) => ApiError::InvalidOption(option),
            VoteError::Store(_) => ApiError::Internal,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(_: StoreError) -> Self {
        ApiError::Internal
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        let body = Json(ErrorResponse::new(self.to_string()));

        rocket::Response::build_from(body.respond_to(req)?)
            .status(status)
            .ok()
    }
}

/// Anything that stops the voting service from coming up during ignition.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] rocket::figment::Error),
    #[error("Invalid poll: {0}")]
    Poll(#[from] ValidationError),
    #[error("Store unavailable: {0}")]
    Store(#[from] StoreError),
}
