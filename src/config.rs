//! Environment-driven configuration.
//!
//! Every knob has a production default; the environment only overrides it.

use std::time::Duration;

use crate::auth::{DelayStrategy, LoginOptions};

pub const BASE_URL_ENV_VAR: &str = "FPL_BASE_URL";
pub const LOGIN_URL_ENV_VAR: &str = "FPL_LOGIN_URL";
pub const WEBDRIVER_URL_ENV_VAR: &str = "FPL_WEBDRIVER_URL";
pub const EMAIL_ENV_VAR: &str = "FPL_EMAIL";
pub const PASSWORD_ENV_VAR: &str = "FPL_PASSWORD";
pub const PROXY_LIST_URL_ENV_VAR: &str = "FPL_PROXY_LIST_URL";

/// Base path of the Fantasy Premier League API.
pub const FPL_BASE_URL: &str = "https://fantasy.premierleague.com/api/";
pub const FPL_LOGIN_URL: &str = "https://users.premierleague.com/accounts/login/";
pub const FPL_REDIRECT_URI: &str = "https://fantasy.premierleague.com/a/login";
pub const FPL_APP_ID: &str = "plfpl-web";
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

/// Cookie the login surface sets once the credentials are accepted.
pub const SESSION_COOKIE_NAME: &str = "pl_profile";

/// Login credentials. `Debug` never prints the password.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct FplConfig {
    pub base_url: String,
    pub login_url: String,
    pub webdriver_url: String,
    pub credentials: Option<Credentials>,
    pub proxy_list_url: Option<String>,
}

impl Default for FplConfig {
    fn default() -> Self {
        Self {
            base_url: FPL_BASE_URL.to_string(),
            login_url: FPL_LOGIN_URL.to_string(),
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            credentials: None,
            proxy_list_url: None,
        }
    }
}

impl FplConfig {
    /// Defaults overridden by whichever `FPL_*` variables are set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let credentials = match (non_empty(EMAIL_ENV_VAR), non_empty(PASSWORD_ENV_VAR)) {
            (Some(email), Some(password)) => Some(Credentials { email, password }),
            _ => None,
        };

        Self {
            base_url: non_empty(BASE_URL_ENV_VAR).unwrap_or(defaults.base_url),
            login_url: non_empty(LOGIN_URL_ENV_VAR).unwrap_or(defaults.login_url),
            webdriver_url: non_empty(WEBDRIVER_URL_ENV_VAR).unwrap_or(defaults.webdriver_url),
            credentials,
            proxy_list_url: non_empty(PROXY_LIST_URL_ENV_VAR),
        }
    }

    /// Authenticator options for this configuration, with the humanized delays on.
    pub fn login_options(&self) -> LoginOptions {
        LoginOptions {
            login_url: self.login_url.clone(),
            proxy_list_url: self.proxy_list_url.clone(),
            ..LoginOptions::default()
        }
    }
}

/// Upper bound on waiting for the login form fields to render.
pub const FORM_FIELD_WAIT: Duration = Duration::from_secs(70);
/// Upper bound on waiting for the post-login redirect to settle.
pub const NAVIGATION_WAIT: Duration = Duration::from_secs(30);

impl Default for LoginOptions {
    fn default() -> Self {
        Self {
            login_url: FPL_LOGIN_URL.to_string(),
            redirect_uri: FPL_REDIRECT_URI.to_string(),
            app: FPL_APP_ID.to_string(),
            username_selector: "#loginUsername".to_string(),
            password_selector: "#loginPassword".to_string(),
            submit_selector: "button[type=\"submit\"]".to_string(),
            form_wait: FORM_FIELD_WAIT,
            navigation_wait: NAVIGATION_WAIT,
            session_cookie: SESSION_COOKIE_NAME.to_string(),
            delay: DelayStrategy::humanized(),
            proxy_list_url: None,
        }
    }
}
