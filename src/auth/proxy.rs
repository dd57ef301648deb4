//! Optional proxy selection for the browser login.

use rand::seq::SliceRandom;
use reqwest::Client;
use tracing::debug;

use crate::error::AuthError;

/// `host:port` entries of a plain-text proxy list, one per line. Blank lines
/// and `#` comments are skipped.
pub fn parse_proxy_list(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn choose_proxy(proxies: &[String]) -> Result<&str, AuthError> {
    proxies
        .choose(&mut rand::thread_rng())
        .map(String::as_str)
        .ok_or(AuthError::EmptyProxyPool)
}

/// Download the list and draw one entry at random.
pub async fn fetch_random_proxy(http: &Client, list_url: &str) -> Result<String, AuthError> {
    let body = http
        .get(list_url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(AuthError::ProxyList)?
        .text()
        .await
        .map_err(AuthError::ProxyList)?;

    let proxies = parse_proxy_list(&body);
    debug!(count = proxies.len(), "loaded proxy list");
    choose_proxy(&proxies).map(str::to_string)
}
