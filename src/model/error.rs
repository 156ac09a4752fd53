use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, status, Responder};

use std::fmt::{Display, Formatter, Result};
use crate::util::message;

/// Upstream call that produced an `UpstreamUnavailable` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    PlayerSummaries,
    OwnedGames,
}

impl Display for Upstream {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Upstream::PlayerSummaries => write!(f, "GetPlayerSummaries"),
            Upstream::OwnedGames => write!(f, "GetOwnedGames"),
        }
    }
}

/// Terminal outcome of a failed profile request.
#[derive(Debug)]
pub enum ApiError {
    InvalidIdentifier,
    PlayerNotFound,
    UpstreamUnavailable { service: Upstream, message: String },
}

impl ApiError {
    pub fn upstream(service: Upstream, err: anyhow::Error) -> Self {
        ApiError::UpstreamUnavailable {
            service,
            message: err.to_string(),
        }
    }

    pub fn status(&self) -> Status {
        match self {
            ApiError::InvalidIdentifier | ApiError::PlayerNotFound => Status::BadRequest,
            ApiError::UpstreamUnavailable { .. } => Status::InternalServerError,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ApiError::InvalidIdentifier => write!(f, "{}", message::MESSAGE_INVALID_STEAMID),
            ApiError::PlayerNotFound => write!(f, "{}", message::MESSAGE_PLAYER_NOT_FOUND),
            ApiError::UpstreamUnavailable { message, .. } => write!(f, "{}", message),
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        status::Custom(self.status(), self.to_string()).respond_to(request)
    }
}
