#[macro_use]
extern crate rocket;

mod api;
mod config;
mod middleware;
mod model;
mod util;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use anyhow::anyhow;
use log::info;
use rocket::fairing::AdHoc;
use rocket::http::uri::Origin;
use rocket::http::RawStr;
use rocket::{Build, Rocket, State};

use api::aggregator::ProfileAggregator;
use api::steam::{SteamApi, SteamClient};
use config::{Config, SteamIdSource};
use middleware::catcher::{internal_server_error, not_found};
use model::error::ApiError;
use model::response::CachedProfile;

async fn respond(aggregator: &ProfileAggregator, steamid: &str) -> Result<CachedProfile, ApiError> {
    let profile = aggregator.get_profile(steamid).await?;
    Ok(CachedProfile::new(profile))
}

/// The whole path minus its leading `/` is the SteamID.
#[get("/<_..>")]
async fn get_profile_by_path(aggregator: &State<ProfileAggregator>, uri: &Origin<'_>) -> Result<CachedProfile, ApiError> {
    let path = RawStr::new(uri.path().as_str()).percent_decode_lossy();
    let steamid = path.strip_prefix('/').unwrap_or(&*path);
    respond(aggregator, steamid).await
}

#[get("/?<steamid>")]
async fn get_profile_by_query(aggregator: &State<ProfileAggregator>, steamid: Option<&str>) -> Result<CachedProfile, ApiError> {
    respond(aggregator, steamid.unwrap_or_default()).await
}

pub fn build_rocket(config: &Config, api: Arc<dyn SteamApi>) -> Rocket<Build> {
    let routes = match config.steamid_source {
        SteamIdSource::Path => routes![get_profile_by_path],
        SteamIdSource::Query => routes![get_profile_by_query],
    };

    let summary = format!("{:?}", config);
    rocket::build()
        .mount("/", routes)
        .register("/", catchers![not_found, internal_server_error])
        .manage(ProfileAggregator::from_config(api, config))
        .attach(AdHoc::on_liftoff("Profile config", move |_| {
            info!("serving profiles with {}", summary);
            Box::pin(async {})
        }))
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    let client = SteamClient::new(&config)?;

    let _rocket = build_rocket(&config, Arc::new(client))
        .launch()
        .await
        .map_err(|err| anyhow!("{}", err))?;
    Ok(())
}
