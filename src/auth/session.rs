//! Authenticated session: the cookie set harvested by a login attempt.

use reqwest::header::HeaderValue;

use crate::error::{AuthError, Result};

#[derive(Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub name: String,
    pub value: String,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Debug for SessionCookie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}=<redacted>", self.name)
    }
}

/// Cookies proving a logged-in manager.
///
/// Owned by whoever obtained it and never shared implicitly. There is no
/// refresh: once the server stops accepting it, log in again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    cookies: Vec<SessionCookie>,
}

impl Session {
    /// Keep a harvested cookie set only if it holds a non-empty `expected` cookie.
    pub fn require(
        cookies: Vec<SessionCookie>,
        expected: &str,
    ) -> std::result::Result<Self, AuthError> {
        let present = cookies
            .iter()
            .any(|c| c.name == expected && !c.value.is_empty());
        if present {
            Ok(Self { cookies })
        } else {
            Err(AuthError::MissingSessionCookie {
                name: expected.to_string(),
            })
        }
    }

    /// Rebuild a session from a stored `Cookie` header, e.g. one copied out of
    /// a browser.
    pub fn from_cookie_header(header: &str, expected: &str) -> std::result::Result<Self, AuthError> {
        Self::require(parse_cookie_header(header), expected)
    }

    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value.as_str())
    }

    pub fn cookies(&self) -> &[SessionCookie] {
        &self.cookies
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// `name=value; name=value` for the `Cookie` request header.
    pub fn cookie_header(&self) -> Result<HeaderValue> {
        let joined = self
            .cookies
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ");
        let mut value = HeaderValue::from_str(&joined)?;
        value.set_sensitive(true);
        Ok(value)
    }
}

/// Split a `Cookie` header into pairs. Malformed pairs are dropped.
pub fn parse_cookie_header(header: &str) -> Vec<SessionCookie> {
    header
        .split(';')
        .filter_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            let name = name.trim();
            (!name.is_empty()).then(|| SessionCookie::new(name, value.trim()))
        })
        .collect()
}
