//! Session acquisition.
//!
//! The FPL login surface is an HTML form, not a JSON API. Two strategies
//! produce a [`Session`]:
//!
//! - [`LoginStrategy::Browser`] (default): drive a headless browser through
//!   the rendered form with humanized delays, then harvest its cookies.
//! - [`LoginStrategy::Form`]: post the form body directly. Cheap, but only
//!   works while the origin accepts non-browser submissions.
//!
//! A failed attempt is terminal. Nothing is retried automatically; call
//! [`authenticate`] again for a fresh attempt.

use std::time::Duration;

use tracing::{info, warn};

pub mod browser;
pub mod delay;
pub mod form;
pub mod proxy;
pub mod session;

pub use browser::{browser_login, LoginDriver, WebDriverLogin};
pub use delay::DelayStrategy;
pub use form::form_login;
pub use session::{Session, SessionCookie};

use crate::{
    config::{Credentials, FplConfig},
    error::{AuthError, Result},
};

/// Knobs of one login attempt. See [`LoginOptions::default`] for the values
/// the production login page needs.
#[derive(Debug, Clone)]
pub struct LoginOptions {
    pub login_url: String,
    pub redirect_uri: String,
    pub app: String,
    pub username_selector: String,
    pub password_selector: String,
    pub submit_selector: String,
    /// Bound on waiting for the form fields to render.
    pub form_wait: Duration,
    /// Bound on waiting for the post-login redirect.
    pub navigation_wait: Duration,
    /// Cookie whose presence proves the login worked.
    pub session_cookie: String,
    pub delay: DelayStrategy,
    /// Plain-text `host:port` list to draw a proxy from, if any.
    pub proxy_list_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginStrategy {
    #[default]
    Browser,
    Form,
}

/// Obtain a session for `credentials` using `strategy`.
pub async fn authenticate(
    config: &FplConfig,
    credentials: &Credentials,
    options: &LoginOptions,
    strategy: LoginStrategy,
) -> Result<Session> {
    info!(?strategy, "logging in");
    let session = match strategy {
        LoginStrategy::Form => form_login(credentials, options).await?,
        LoginStrategy::Browser => launch_browser_login(config, credentials, options).await?,
    };
    Ok(session)
}

async fn launch_browser_login(
    config: &FplConfig,
    credentials: &Credentials,
    options: &LoginOptions,
) -> std::result::Result<Session, AuthError> {
    // proxy first: an empty pool aborts before any browser is started
    let proxy = match &options.proxy_list_url {
        Some(list_url) => {
            let http = reqwest::Client::new();
            match proxy::fetch_random_proxy(&http, list_url).await {
                Ok(proxy) => Some(proxy),
                Err(e) => {
                    warn!(error = %e, "no proxy available, aborting login");
                    return Err(e);
                }
            }
        }
        None => None,
    };

    let mut driver = WebDriverLogin::connect(&config.webdriver_url, proxy.as_deref()).await?;
    browser_login(&mut driver, credentials, options).await
}
