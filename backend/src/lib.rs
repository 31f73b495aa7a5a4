pub mod catchers;
pub mod config;
pub mod counters;
pub mod error;
pub mod page;
pub mod registry;
pub mod routes;
pub mod service;
pub mod store;

use rocket::fairing::AdHoc;
use rocket::figment::Figment;
use rocket::{catchers, routes, Build, Rocket};
use tracing::error;

use crate::catchers::{bad_request, forbidden, internal_error, not_found, unprocessable};
use crate::config::PollConfig;
use crate::routes::{index, poll_state, static_file, vote, vote_not_form, AppState};

/// Builds the server from `figment`. The voting service is created when the
/// instance ignites; a bad config or unreachable store aborts the launch.
pub fn rocket(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(AdHoc::try_on_ignite("Voting service", |rocket| async move {
            let state = match PollConfig::from_figment(rocket.figment()) {
                Ok(config) => AppState::from_config(&config).await,
                Err(e) => Err(e.into()),
            };

            match state {
                Ok(state) => Ok(rocket.manage(state)),
                Err(e) => {
                    error!("✗ Failed to start voting service: {}", e);
                    Err(rocket)
                }
            }
        }))
        .mount("/", routes![index, poll_state, vote, vote_not_form, static_file])
        .register(
            "/",
            catchers![
                bad_request,
                forbidden,
                not_found,
                unprocessable,
                internal_error
            ],
        )
}
