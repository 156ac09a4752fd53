use log::{debug, warn};
use std::sync::Arc;

use crate::api::steam::SteamApi;
use crate::config::{Config, FetchMode};
use crate::model::error::{ApiError, Upstream};
use crate::model::steam::{OwnedGame, PlayerProfile};
use crate::model::steam_id::SteamId;

/// Builds a player's profile from the summary and owned-games calls.
pub struct ProfileAggregator {
    api: Arc<dyn SteamApi>,
    /// App whose playtime is merged in; `None` skips the owned-games call.
    playtime_app_id: Option<u32>,
    fetch_mode: FetchMode,
}

impl ProfileAggregator {
    pub fn new(api: Arc<dyn SteamApi>, playtime_app_id: Option<u32>, fetch_mode: FetchMode) -> Self {
        ProfileAggregator {
            api,
            playtime_app_id,
            fetch_mode,
        }
    }

    pub fn from_config(api: Arc<dyn SteamApi>, config: &Config) -> Self {
        let app_id = config.include_playtime.then_some(config.app_id);
        Self::new(api, app_id, config.fetch_mode)
    }

    /// Validates `raw` and resolves it to a merged profile.
    ///
    /// Errors are checked in a fixed order whatever the fetch mode: invalid
    /// id, summary failure, empty summary, then owned-games failure.
    pub async fn get_profile(&self, raw: &str) -> Result<PlayerProfile, ApiError> {
        let steamid: SteamId = raw.parse()?;

        let result = self.resolve(&steamid).await;
        // only the error that reaches the caller is logged
        if let Err(ApiError::UpstreamUnavailable { service, message }) = &result {
            warn!("{} request for {} failed: {}", service, steamid, message);
        }
        result
    }

    async fn resolve(&self, steamid: &SteamId) -> Result<PlayerProfile, ApiError> {
        match self.fetch_mode {
            FetchMode::Sequential => {
                let player = self.first_player(steamid).await?;
                let games = self.owned_games(steamid).await?;
                Ok(merge(player, games))
            }
            FetchMode::Concurrent => {
                let (player, games) =
                    futures::join!(self.first_player(steamid), self.owned_games(steamid));
                let player = player?;
                Ok(merge(player, games?))
            }
        }
    }

    async fn first_player(&self, steamid: &SteamId) -> Result<PlayerProfile, ApiError> {
        let players = self
            .api
            .player_summaries(steamid)
            .await
            .map_err(|err| ApiError::upstream(Upstream::PlayerSummaries, err))?;

        // the upstream echo of the steamid is trusted as-is
        players.into_iter().next().ok_or_else(|| {
            debug!("no player found for {}", steamid);
            ApiError::PlayerNotFound
        })
    }

    async fn owned_games(&self, steamid: &SteamId) -> Result<Option<Vec<OwnedGame>>, ApiError> {
        let Some(app_id) = self.playtime_app_id else {
            return Ok(None);
        };
        let games = self
            .api
            .owned_games(steamid, app_id)
            .await
            .map_err(|err| ApiError::upstream(Upstream::OwnedGames, err))?;
        Ok(Some(games))
    }
}

fn merge(player: PlayerProfile, games: Option<Vec<OwnedGame>>) -> PlayerProfile {
    match games {
        // first game is assumed to be the filtered app
        Some(games) => player.with_playtime(&games),
        None => player,
    }
}
