use serde::{Serialize, Deserialize};
use std::fmt;

/// Network identity of a voter, used only to refuse repeat votes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientIdentity(String);

impl ClientIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<std::net::IpAddr> for ClientIdentity {
    fn from(ip: std::net::IpAddr) -> Self {
        Self(ip.to_string())
    }
}

// Backend-specific Rocket implementation
#[cfg(feature = "backend")]
mod backend_impl {
    use super::*;
    use rocket::http::Status;
    use rocket::request::{FromRequest, Outcome};
    use rocket::Request;

    /// Uses the peer address, or the configured `ip_header` when the operator
    /// has enabled one for a trusted proxy.
    #[rocket::async_trait]
    impl<'r> FromRequest<'r> for ClientIdentity {
        type Error = ();

        async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
            match req.client_ip() {
                Some(ip) => Outcome::Success(ClientIdentity::from(ip)),
                None => Outcome::Error((Status::BadRequest, ())),
            }
        }
    }
}
