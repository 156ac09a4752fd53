use reqwest::header::{self, HeaderMap, HeaderValue};

pub static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
pub static ACCEPT: &str = "application/json";
pub static PROFILE_CACHE_CONTROL: &str = "public, maxage=86400";

/// Headers sent with every upstream Steam Web API request.
pub fn get_common_header() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    headers
}
