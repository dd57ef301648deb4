//! Command implementations for the `fpl` demonstration binary.
//!
//! Each command calls one library operation and prints the result as JSON.

use anyhow::{bail, Context};
use serde::Serialize;

use crate::{
    auth::{authenticate, DelayStrategy, LoginStrategy},
    cli::Commands,
    config::FplConfig,
    fpl::FplClient,
};

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn run(command: Commands, config: &FplConfig) -> anyhow::Result<()> {
    let client = FplClient::from_config(config)?;

    match command {
        Commands::Bootstrap => print_json(&client.bootstrap_static().await?)?,

        Commands::Player { player_id, fixtures } => {
            if fixtures {
                print_json(&client.player_upcoming_fixtures(player_id).await?)?;
            } else {
                match client.combined_player_profile(player_id).await? {
                    Some(profile) => print_json(&profile)?,
                    None => bail!("player {player_id} not found"),
                }
            }
        }

        Commands::Fixtures { gameweek, future } => {
            let fixtures = match (gameweek, future) {
                (Some(gw), _) => client.gameweek_fixtures(gw).await?,
                (None, true) => client.upcoming_fixtures().await?,
                (None, false) => client.all_fixtures().await?,
            };
            print_json(&fixtures)?;
        }

        Commands::UpcomingGameweek => match client.upcoming_gameweek_number().await? {
            Some(gw) => println!("{gw}"),
            None => println!("no upcoming fixtures"),
        },

        Commands::Score { gameweek, player } => {
            match client.gameweek_player_score(gameweek, player).await? {
                Some(score) => print_json(&score)?,
                None => bail!("no score for player {player} in gameweek {gameweek}"),
            }
        }

        Commands::Manager {
            manager_id,
            history,
        } => {
            if history {
                print_json(&client.manager_history(manager_id).await?)?;
            } else {
                print_json(&client.manager(manager_id).await?)?;
            }
        }

        Commands::League { league_id, page } => {
            print_json(&client.classic_league_standings(league_id, page).await?)?;
        }

        Commands::Login {
            form,
            no_delay,
            team,
        } => {
            let credentials = config
                .credentials
                .as_ref()
                .context("set FPL_EMAIL and FPL_PASSWORD to log in")?;

            let mut options = config.login_options();
            if no_delay {
                options.delay = DelayStrategy::None;
            }
            let strategy = if form {
                LoginStrategy::Form
            } else {
                LoginStrategy::Browser
            };

            let session = authenticate(config, credentials, &options, strategy).await?;
            let names: Vec<&str> = session.cookies().iter().map(|c| c.name.as_str()).collect();
            println!("logged in, session cookies: {}", names.join(", "));

            if let Some(manager_id) = team {
                print_json(&client.manager_team(&session, manager_id).await?)?;
            }
        }
    }

    Ok(())
}
