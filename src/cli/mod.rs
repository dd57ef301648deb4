//! CLI argument definitions and parsing.

use clap::{Parser, Subcommand};

use crate::types::{LeagueId, ManagerId, PlayerId};

#[derive(Debug, Parser)]
#[clap(name = "fpl", about = "Fantasy Premier League API client")]
pub struct Fpl {
    /// Log every request (same as `RUST_LOG=debug`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the global season snapshot.
    Bootstrap,

    /// Static attributes and history of one player.
    Player {
        player_id: PlayerId,

        /// Only the player's remaining fixtures.
        #[clap(long)]
        fixtures: bool,
    },

    /// All fixtures, one gameweek's, or those not played yet.
    Fixtures {
        /// Gameweek (1-38).
        #[clap(long, short, conflicts_with = "future")]
        gameweek: Option<u32>,

        /// Only fixtures that have not been played.
        #[clap(long)]
        future: bool,
    },

    /// Gameweek number of the next fixture.
    UpcomingGameweek,

    /// A player's points and their explanation for one gameweek.
    Score {
        /// Gameweek (1-38).
        #[clap(long, short)]
        gameweek: u32,

        #[clap(long, short)]
        player: PlayerId,
    },

    /// A manager's entry, or its history.
    Manager {
        manager_id: ManagerId,

        #[clap(long)]
        history: bool,
    },

    /// Classic league standings.
    League {
        league_id: LeagueId,

        /// Standings page (the API returns 50 entries per page).
        #[clap(long)]
        page: Option<u32>,
    },

    /// Log in with `FPL_EMAIL` / `FPL_PASSWORD` and print the session cookie names.
    Login {
        /// Post the form directly instead of driving a browser.
        #[clap(long)]
        form: bool,

        /// Skip the humanized typing delays.
        #[clap(long)]
        no_delay: bool,

        /// Also fetch this manager's private squad with the new session.
        #[clap(long)]
        team: Option<ManagerId>,
    },
}
