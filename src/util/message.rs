pub static MESSAGE_INVALID_STEAMID: &str = "SteamID is incorrect";
pub static MESSAGE_PLAYER_NOT_FOUND: &str = "No player found";
pub static MESSAGE_NOT_FOUND: &str = "not found";
pub static MESSAGE_INTERNAL_SERVER_ERROR: &str = "internal server error";
