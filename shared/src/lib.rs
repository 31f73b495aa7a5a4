pub mod error;
pub mod models;
pub mod poll;
pub mod validation;
pub mod user_info;

pub use error::ErrorResponse;
pub use models::*;
pub use poll::{Poll, VoteOption};
pub use validation::*;
pub use user_info::*;
