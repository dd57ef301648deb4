//! Fantasy Premier League API Client
//!
//! A typed Rust client for the public Fantasy Premier League REST API,
//! with the few joins the raw endpoints do not provide.
//!
//! ## Features
//!
//! - **Resource Fetching**: One call per endpoint (snapshot, players, fixtures,
//!   live scores, managers, leagues), decoded into a lossless schema catalog
//! - **Aggregates**: Player profile (snapshot ∪ history), a player's gameweek
//!   score, the upcoming gameweek number
//! - **Authentication**: Session acquisition through the browser-rendered login
//!   form, for the private endpoints
//! - **Tagged Errors**: Every failure is logged where it happens and returned
//!   with an [`ErrorKind`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_api::{FplClient, PlayerId};
//!
//! # async fn example() -> fpl_api::Result<()> {
//! let client = FplClient::new()?;
//!
//! if let Some(profile) = client.combined_player_profile(PlayerId::new(351)).await? {
//!     println!("{} has {} points", profile.element().web_name, profile.element().total_points);
//! }
//!
//! let next = client.upcoming_gameweek_number().await?;
//! println!("next gameweek: {next:?}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FPL_BASE_URL=https://fantasy.premierleague.com/api/
//! export FPL_EMAIL=you@example.com FPL_PASSWORD=...   # only for `login`
//! export FPL_WEBDRIVER_URL=http://localhost:4444      # chromedriver
//! ```

pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fpl;
pub mod types;

// Re-export commonly used types
pub use auth::{authenticate, LoginOptions, LoginStrategy, Session};
pub use config::{Credentials, FplConfig};
pub use error::{AuthError, ErrorKind, FplError, Result};
pub use fpl::{types::PlayerProfile, FplClient};
pub use types::{Gameweek, LeagueId, ManagerId, PlayerId, TeamId};
