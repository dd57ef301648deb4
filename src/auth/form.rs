//! Login by posting the form body directly.
//!
//! Only works while the login surface still accepts non-browser posts; once
//! interactive challenges are switched on it answers with a non-200 status
//! and the attempt fails.

use std::sync::Arc;

use reqwest::{cookie::CookieStore, cookie::Jar, Client, StatusCode, Url};
use tracing::{debug, info, warn};

use super::{
    session::{parse_cookie_header, Session, SessionCookie},
    LoginOptions,
};
use crate::{config::Credentials, error::AuthError};

pub async fn form_login(
    credentials: &Credentials,
    options: &LoginOptions,
) -> Result<Session, AuthError> {
    let outcome = post_login_form(credentials, options).await;
    match &outcome {
        Ok(session) => info!(cookies = session.len(), "form login succeeded"),
        Err(e) => warn!(error = %e, "form login failed"),
    }
    outcome
}

async fn post_login_form(
    credentials: &Credentials,
    options: &LoginOptions,
) -> Result<Session, AuthError> {
    let login_url = Url::parse(&options.login_url).map_err(|e| AuthError::InvalidLoginUrl {
        url: options.login_url.clone(),
        message: e.to_string(),
    })?;

    // one client, one jar: cookies set while redirecting stay with the attempt
    let jar = Arc::new(Jar::default());
    let client = Client::builder()
        .cookie_provider(Arc::clone(&jar))
        .build()
        .map_err(AuthError::Request)?;

    let form = [
        ("login", credentials.email.as_str()),
        ("password", credentials.password.as_str()),
        ("app", options.app.as_str()),
        ("redirect_uri", options.redirect_uri.as_str()),
    ];

    debug!(url = %login_url, "posting login form");
    let response = client
        .post(login_url.clone())
        .form(&form)
        .send()
        .await
        .map_err(AuthError::Request)?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(AuthError::Rejected {
            status: status.as_u16(),
        });
    }

    // host-only cookies may have been set on any host of the redirect chain
    let redirect_uri = Url::parse(&options.redirect_uri).ok();
    let visited = [Some(&login_url), Some(response.url()), redirect_uri.as_ref()];
    let cookies = harvest_cookies(&jar, visited.into_iter().flatten());
    debug!(count = cookies.len(), "harvested cookies");
    Session::require(cookies, &options.session_cookie)
}

/// Cookies the jar would send to any of `urls`, first occurrence of a name wins.
fn harvest_cookies<'a>(jar: &Jar, urls: impl Iterator<Item = &'a Url>) -> Vec<SessionCookie> {
    let mut cookies: Vec<SessionCookie> = Vec::new();
    for url in urls {
        let found = jar
            .cookies(url)
            .and_then(|header| header.to_str().ok().map(parse_cookie_header))
            .unwrap_or_default();
        for cookie in found {
            if !cookies.iter().any(|c| c.name == cookie.name) {
                cookies.push(cookie);
            }
        }
    }
    cookies
}
