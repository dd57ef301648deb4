//! Login by driving a real browser through the rendered form.
//!
//! The login page sits behind anti-automation checks that reject scripted
//! form posts, so the credentials are typed into the visible fields of a
//! full browser engine, with a humanized pause before every keystroke and
//! click, and the resulting cookie jar is harvested afterwards.

use std::time::Duration;

use async_trait::async_trait;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::{json, Map, Value};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::{
    session::{Session, SessionCookie},
    LoginOptions,
};
use crate::{config::Credentials, error::AuthError};

const NAVIGATION_POLL: Duration = Duration::from_millis(250);

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

/// The browser operations a login needs. Implemented over WebDriver for real
/// runs and by scripted fakes in tests.
#[async_trait]
pub trait LoginDriver: Send {
    async fn goto(&mut self, url: &str) -> Result<(), AuthError>;

    /// Wait until `selector` matches an element, for at most `timeout`.
    async fn wait_for_field(&mut self, selector: &str, timeout: Duration) -> Result<(), AuthError>;

    /// Send `text` as keystrokes to the element matching `selector`.
    async fn type_into(&mut self, selector: &str, text: &str) -> Result<(), AuthError>;

    async fn click(&mut self, selector: &str) -> Result<(), AuthError>;

    async fn current_url(&mut self) -> Result<String, AuthError>;

    async fn cookies(&mut self) -> Result<Vec<SessionCookie>, AuthError>;

    /// Release the browser. Called exactly once, on every exit path.
    async fn close(&mut self) -> Result<(), AuthError>;
}

/// Run one login attempt on `driver` and close it afterwards, whatever the
/// outcome.
pub async fn browser_login<D: LoginDriver + ?Sized>(
    driver: &mut D,
    credentials: &Credentials,
    options: &LoginOptions,
) -> Result<Session, AuthError> {
    let outcome = login_steps(driver, credentials, options).await;

    if let Err(e) = driver.close().await {
        warn!(error = %e, "failed to close browser");
    }

    match &outcome {
        Ok(session) => info!(cookies = session.len(), "browser login succeeded"),
        Err(e) => warn!(error = %e, "browser login failed"),
    }
    outcome
}

async fn login_steps<D: LoginDriver + ?Sized>(
    driver: &mut D,
    credentials: &Credentials,
    options: &LoginOptions,
) -> Result<Session, AuthError> {
    debug!(url = %options.login_url, "opening login page");
    driver.goto(&options.login_url).await?;

    // one budget for the whole form, not per field
    let form_deadline = Instant::now() + options.form_wait;
    for selector in [&options.username_selector, &options.password_selector] {
        let remaining = form_deadline.saturating_duration_since(Instant::now());
        driver.wait_for_field(selector, remaining).await?;
    }

    // the page may have redirected or canonicalised its URL on load
    let form_url = driver.current_url().await?;

    type_humanized(driver, &options.username_selector, &credentials.email, options).await?;
    type_humanized(driver, &options.password_selector, &credentials.password, options).await?;

    options.delay.pause().await;
    driver.click(&options.submit_selector).await?;

    wait_for_navigation(driver, &form_url, options.navigation_wait).await?;

    let cookies = driver.cookies().await?;
    debug!(count = cookies.len(), "harvested cookies");
    Session::require(cookies, &options.session_cookie)
}

async fn type_humanized<D: LoginDriver + ?Sized>(
    driver: &mut D,
    selector: &str,
    text: &str,
    options: &LoginOptions,
) -> Result<(), AuthError> {
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        options.delay.pause().await;
        driver.type_into(selector, ch.encode_utf8(&mut buf)).await?;
    }
    Ok(())
}

/// Poll until the browser has left `form_url`, the page the form was found on.
async fn wait_for_navigation<D: LoginDriver + ?Sized>(
    driver: &mut D,
    form_url: &str,
    timeout: Duration,
) -> Result<(), AuthError> {
    let deadline = Instant::now() + timeout;
    loop {
        let url = driver.current_url().await?;
        if url != form_url {
            debug!(%url, "navigation settled");
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(AuthError::Navigation {
                message: format!("still on {url} after {timeout:?}"),
            });
        }
        tokio::time::sleep(NAVIGATION_POLL).await;
    }
}

/// WebDriver session (chromedriver, geckodriver...) driving a headless browser.
pub struct WebDriverLogin {
    client: Client,
}

impl WebDriverLogin {
    /// Start a headless Chrome through the WebDriver server at `webdriver_url`,
    /// optionally routed through `proxy` (`host:port`).
    pub async fn connect(webdriver_url: &str, proxy: Option<&str>) -> Result<Self, AuthError> {
        let client = ClientBuilder::native()
            .capabilities(capabilities(proxy))
            .connect(webdriver_url)
            .await?;
        Ok(Self { client })
    }
}

fn capabilities(proxy: Option<&str>) -> Map<String, Value> {
    let mut caps = Map::new();
    caps.insert("browserName".into(), json!("chrome"));
    caps.insert(
        "goog:chromeOptions".into(),
        json!({
            "args": [
                "--headless=new",
                "--disable-blink-features=AutomationControlled",
                "--window-size=1366,768",
                format!("--user-agent={BROWSER_USER_AGENT}"),
            ],
            "excludeSwitches": ["enable-automation"],
        }),
    );
    if let Some(proxy) = proxy {
        caps.insert(
            "proxy".into(),
            json!({ "proxyType": "manual", "httpProxy": proxy, "sslProxy": proxy }),
        );
    }
    caps
}

#[async_trait]
impl LoginDriver for WebDriverLogin {
    async fn goto(&mut self, url: &str) -> Result<(), AuthError> {
        self.client
            .goto(url)
            .await
            .map_err(|e| AuthError::Navigation {
                message: e.to_string(),
            })
    }

    async fn wait_for_field(&mut self, selector: &str, timeout: Duration) -> Result<(), AuthError> {
        self.client
            .wait()
            .at_most(timeout)
            .for_element(Locator::Css(selector))
            .await
            .map(|_| ())
            .map_err(|_| AuthError::FormFieldTimeout {
                selector: selector.to_string(),
            })
    }

    async fn type_into(&mut self, selector: &str, text: &str) -> Result<(), AuthError> {
        let field = self.client.find(Locator::Css(selector)).await?;
        field.send_keys(text).await?;
        Ok(())
    }

    async fn click(&mut self, selector: &str) -> Result<(), AuthError> {
        let button = self.client.find(Locator::Css(selector)).await?;
        button.click().await?;
        Ok(())
    }

    async fn current_url(&mut self) -> Result<String, AuthError> {
        Ok(self.client.current_url().await?.to_string())
    }

    async fn cookies(&mut self) -> Result<Vec<SessionCookie>, AuthError> {
        let cookies = self.client.get_all_cookies().await?;
        Ok(cookies
            .iter()
            .map(|c| SessionCookie::new(c.name(), c.value()))
            .collect())
    }

    async fn close(&mut self) -> Result<(), AuthError> {
        self.client.clone().close().await?;
        Ok(())
    }
}
