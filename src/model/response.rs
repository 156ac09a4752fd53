use rocket::http::Header;
use rocket::serde::json::Json;

use crate::model::steam::PlayerProfile;
use crate::util::header;

/// Successful profile response: JSON body plus the public cache directive.
#[derive(Responder)]
pub struct CachedProfile {
    inner: Json<PlayerProfile>,
    cache_control: Header<'static>,
}

impl CachedProfile {
    pub fn new(profile: PlayerProfile) -> Self {
        CachedProfile {
            inner: Json(profile),
            cache_control: Header::new("Cache-Control", header::PROFILE_CACHE_CONTROL),
        }
    }
}
