
use anyhow::{anyhow, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::api::steam::SteamApi;
use crate::config::{Config, FetchMode, SteamIdSource};
use crate::model::steam::{OwnedGame, PlayerProfile};
use crate::model::steam_id::SteamId;

pub const STEAMID: &str = "76561198012345678";
pub const APP_ID: u32 = 1422130;

/// In-memory stand-in for the Steam Web API that records every call.
pub struct FakeSteam {
    players: std::result::Result<Vec<PlayerProfile>, String>,
    games: std::result::Result<Vec<OwnedGame>, String>,
    pub summary_calls: AtomicUsize,
    pub games_calls: AtomicUsize,
    pub last_app_id: AtomicUsize,
}

impl FakeSteam {
    pub fn new(players: Vec<PlayerProfile>, games: Vec<OwnedGame>) -> Arc<Self> {
        Self::with_results(Ok(players), Ok(games))
    }

    pub fn with_results(
        players: std::result::Result<Vec<PlayerProfile>, String>,
        games: std::result::Result<Vec<OwnedGame>, String>,
    ) -> Arc<Self> {
        Arc::new(FakeSteam {
            players,
            games,
            summary_calls: AtomicUsize::new(0),
            games_calls: AtomicUsize::new(0),
            last_app_id: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> (usize, usize) {
        (
            self.summary_calls.load(Ordering::SeqCst),
            self.games_calls.load(Ordering::SeqCst),
        )
    }
}

#[rocket::async_trait]
impl SteamApi for FakeSteam {
    async fn player_summaries(&self, _steamid: &SteamId) -> Result<Vec<PlayerProfile>> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        self.players.clone().map_err(|msg| anyhow!(msg))
    }

    async fn owned_games(&self, _steamid: &SteamId, app_id: u32) -> Result<Vec<OwnedGame>> {
        self.games_calls.fetch_add(1, Ordering::SeqCst);
        self.last_app_id.store(app_id as usize, Ordering::SeqCst);
        self.games.clone().map_err(|msg| anyhow!(msg))
    }
}

pub fn alice() -> PlayerProfile {
    PlayerProfile {
        steamid: STEAMID.to_string(),
        communityvisibilitystate: 3,
        profilestate: 1,
        personaname: "Alice".to_string(),
        profileurl: "https://steamcommunity.com/id/alice/".to_string(),
        avatar: "https://avatars.example/alice.jpg".to_string(),
        avatarmedium: "https://avatars.example/alice_medium.jpg".to_string(),
        avatarfull: "https://avatars.example/alice_full.jpg".to_string(),
        avatarhash: "0123456789abcdef".to_string(),
        personastate: 1,
        realname: String::new(),
        primaryclanid: "103582791429521408".to_string(),
        timecreated: 1400000000,
        personastateflags: 0,
        loccountrycode: "SE".to_string(),
        playtime_2weeks: None,
        playtime_forever: None,
    }
}

pub fn game(playtime_2weeks: u64, playtime_forever: u64) -> OwnedGame {
    OwnedGame {
        appid: APP_ID,
        playtime_2weeks,
        playtime_forever,
    }
}

pub fn test_config(steamid_source: SteamIdSource, include_playtime: bool, fetch_mode: FetchMode) -> Config {
    Config {
        steam_token: "test-token".to_string(),
        api_base: "http://127.0.0.1:1".to_string(),
        app_id: APP_ID,
        steamid_source,
        include_playtime,
        fetch_mode,
        upstream_timeout: Duration::from_secs(1),
    }
}
