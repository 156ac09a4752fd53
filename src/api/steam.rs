use anyhow::Result;
use log::debug;

use crate::config::Config;
use crate::model::steam::{OwnedGame, OwnedGamesResponse, PlayerProfile, PlayerSummariesResponse};
use crate::model::steam_id::SteamId;
use crate::util;

/// The two Steam Web API calls a profile request depends on.
#[rocket::async_trait]
pub trait SteamApi: Send + Sync {
    async fn player_summaries(&self, steamid: &SteamId) -> Result<Vec<PlayerProfile>>;

    async fn owned_games(&self, steamid: &SteamId, app_id: u32) -> Result<Vec<OwnedGame>>;
}

pub struct SteamClient {
    client: reqwest::Client,
    api_base: String,
    token: String,
}

impl SteamClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .default_headers(util::header::get_common_header())
            .timeout(config.upstream_timeout)
            .build()?;
        Ok(SteamClient {
            client,
            api_base: config.api_base.clone(),
            token: config.steam_token.clone(),
        })
    }

    async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T>
    where
        T: rocket::serde::DeserializeOwned,
    {
        let url = format!("{}{}", self.api_base, path);
        let resp = self
            .client
            .get(&url)
            .query(&[("key", self.token.as_str())])
            .query(query)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        debug!("GET {} -> {}", path, resp.status());

        // the status is not checked: error pages surface as decode failures
        let body = resp.json::<T>().await.map_err(reqwest::Error::without_url)?;
        Ok(body)
    }
}

#[rocket::async_trait]
impl SteamApi for SteamClient {
    async fn player_summaries(&self, steamid: &SteamId) -> Result<Vec<PlayerProfile>> {
        let resp: PlayerSummariesResponse = self
            .get_json(
                "/ISteamUser/GetPlayerSummaries/v0002/",
                &[("steamids", steamid.as_str())],
            )
            .await?;
        Ok(resp.response.players)
    }

    async fn owned_games(&self, steamid: &SteamId, app_id: u32) -> Result<Vec<OwnedGame>> {
        let app_id = app_id.to_string();
        let resp: OwnedGamesResponse = self
            .get_json(
                "/IPlayerService/GetOwnedGames/v1/",
                &[
                    ("steamid", steamid.as_str()),
                    ("format", "json"),
                    ("appids_filter[0]", app_id.as_str()),
                ],
            )
            .await?;
        Ok(resp.response.games)
    }
}
