pub mod error;
pub mod response;
pub mod steam;
pub mod steam_id;
