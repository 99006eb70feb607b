//! Terminal front end for a party: shuffle teams, spin for games, draw
//! charades prompts.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use party_draw::core::{DrawRng, PartyConfig};
use party_draw::logging::init_tracing;
use party_draw::session::{CharadesAction, GamesAction, PartySession, TeamsAction};

#[derive(Parser, Debug)]
#[command(name = "party-draw", about = "Party game randomizer")]
struct Cli {
    /// JSON configuration file; defaults are used for missing fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible draws; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Log level for the party_draw target (RUST_LOG overrides)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shuffle people into the four teams
    Teams {
        /// People to place
        names: Vec<String>,
    },
    /// Spin the game wheel
    Spin {
        /// How many spins, without repeats
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Draw charades prompts
    Charades {
        /// How many prompts, without repeats
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Print the effective configuration as JSON
    Config,
}

fn load_config(path: Option<&PathBuf>) -> Result<PartyConfig> {
    let Some(path) = path else {
        return Ok(PartyConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    PartyConfig::from_json_str(&text).with_context(|| format!("loading config {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config = load_config(cli.config.as_ref())?;
    let seed = cli.seed.unwrap_or_else(|| DrawRng::from_entropy().seed());
    info!(seed, "starting session");

    let mut session = PartySession::new(config, seed)?;

    match cli.command {
        Command::Teams { names } => {
            for name in names {
                session.dispatch(TeamsAction::AddPerson(name))?;
            }
            session.dispatch(TeamsAction::Randomize)?;

            match session.teams().teams() {
                Some(teams) => {
                    for team in teams.iter() {
                        let members: Vec<&str> = team.members.iter().map(|m| m.as_str()).collect();
                        println!("{} ({}): {}", team.name, members.len(), members.join(", "));
                    }
                }
                None => println!("No people yet."),
            }
        }
        Command::Spin { count } => {
            for _ in 0..count {
                if !session.games().can_spin() {
                    println!("No games left.");
                    break;
                }
                session.dispatch(GamesAction::Spin)?;
                session.dispatch(GamesAction::Settle)?;
                if let Some(game) = session.games().selected() {
                    println!("{game}");
                }
            }
            let pool = session.games().pool();
            println!("{}/{} games left", pool.peek_remaining(), pool.total());
        }
        Command::Charades { count } => {
            for _ in 0..count {
                if !session.charades().can_generate() {
                    println!("No prompts left.");
                    break;
                }
                session.dispatch(CharadesAction::Generate)?;
                if let Some(prompt) = session.charades().picked() {
                    println!("{prompt}");
                }
            }
            println!("{}", session.charades().progress_label());
        }
        Command::Config => {
            println!("{}", session.config().to_json_string()?);
        }
    }

    Ok(())
}
