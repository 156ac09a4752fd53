use anyhow::{anyhow, bail, Context, Result};
use std::str::FromStr;
use std::time::Duration;

pub static DEFAULT_API_BASE: &str = "http://api.steampowered.com";
pub const DEFAULT_APP_ID: u32 = 1422130;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the SteamID is read from on the inbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteamIdSource {
    /// `GET /<steamid>`
    Path,
    /// `GET /?steamid=<steamid>`
    Query,
}

impl FromStr for SteamIdSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "path" => Ok(SteamIdSource::Path),
            "query" => Ok(SteamIdSource::Query),
            other => bail!("expected `path` or `query`, got `{}`", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Sequential,
    Concurrent,
}

#[derive(Clone)]
pub struct Config {
    pub steam_token: String,
    pub api_base: String,
    pub app_id: u32,
    pub steamid_source: SteamIdSource,
    pub include_playtime: bool,
    pub fetch_mode: FetchMode,
    pub upstream_timeout: Duration,
}

// keeps the token out of startup logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("steam_token", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("app_id", &self.app_id)
            .field("steamid_source", &self.steamid_source)
            .field("include_playtime", &self.include_playtime)
            .field("fetch_mode", &self.fetch_mode)
            .field("upstream_timeout", &self.upstream_timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let steam_token = lookup("STEAM_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| anyhow!("Missing STEAM_TOKEN environment variable"))?;

        let api_base = lookup("STEAM_API_BASE")
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let concurrent = parse_var(&lookup, "CONCURRENT_FETCH", false, parse_bool)?;

        Ok(Config {
            steam_token,
            api_base,
            app_id: parse_var(&lookup, "STEAM_APP_ID", DEFAULT_APP_ID, |v| Ok(v.parse()?))?,
            steamid_source: parse_var(&lookup, "STEAMID_SOURCE", SteamIdSource::Path, |v| v.parse())?,
            include_playtime: parse_var(&lookup, "INCLUDE_PLAYTIME", true, parse_bool)?,
            fetch_mode: if concurrent { FetchMode::Concurrent } else { FetchMode::Sequential },
            upstream_timeout: Duration::from_secs(parse_var(
                &lookup,
                "UPSTREAM_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
                |v| Ok(v.parse()?),
            )?),
        })
    }
}

fn parse_var<F, T, P>(lookup: &F, key: &str, default: T, parse: P) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Result<T>,
{
    match lookup(key) {
        Some(value) => parse(value.trim()).with_context(|| format!("invalid {}", key)),
        None => Ok(default),
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got `{}`", other),
    }
}
