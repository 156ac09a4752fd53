use rocket::serde::{Serialize, Deserialize};

/// Player record as returned by `GetPlayerSummaries`, optionally carrying
/// playtime for the configured app once merged.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(crate = "rocket::serde", default)]
pub struct PlayerProfile {
    pub steamid: String,
    pub communityvisibilitystate: i32,
    pub profilestate: i32,
    pub personaname: String,
    pub profileurl: String,
    pub avatar: String,
    pub avatarmedium: String,
    pub avatarfull: String,
    pub avatarhash: String,
    pub personastate: i32,
    pub realname: String,
    pub primaryclanid: String,
    pub timecreated: i64,
    pub personastateflags: i32,
    pub loccountrycode: String,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub playtime_2weeks: Option<u64>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub playtime_forever: Option<u64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "rocket::serde", default)]
pub struct PlayerList {
    pub players: Vec<PlayerProfile>,
}

#[derive(Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct PlayerSummariesResponse {
    pub response: PlayerList,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct OwnedGame {
    pub appid: u32,
    // omitted upstream when the app was not played recently
    #[serde(default)]
    pub playtime_2weeks: u64,
    #[serde(default)]
    pub playtime_forever: u64,
}

#[derive(Deserialize, Debug, Default)]
#[serde(crate = "rocket::serde", default)]
pub struct OwnedGames {
    pub game_count: u32,
    pub games: Vec<OwnedGame>,
}

#[derive(Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct OwnedGamesResponse {
    pub response: OwnedGames,
}

impl PlayerProfile {
    /// Copies the counters of the first owned game onto the profile.
    /// No games means the app was never launched, so both counters are zero.
    pub fn with_playtime(mut self, games: &[OwnedGame]) -> Self {
        let (recent, total) = games
            .first()
            .map(|game| (game.playtime_2weeks, game.playtime_forever))
            .unwrap_or_default();
        self.playtime_2weeks = Some(recent);
        self.playtime_forever = Some(total);
        self
    }
}
