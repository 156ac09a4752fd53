use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

use super::error::ApiError;

pub const STEAMID_LENGTH: usize = 17;

/// A 64-bit SteamID in its decimal string form, as taken from the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamId(String);

impl SteamId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SteamId {
    type Err = ApiError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.len() != STEAMID_LENGTH {
            return Err(ApiError::InvalidIdentifier);
        }
        Ok(SteamId(s.to_string()))
    }
}

impl Display for SteamId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.0)
    }
}
