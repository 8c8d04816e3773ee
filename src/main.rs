use clap::{Parser, Subcommand};
use keyspace::api::{self, Session};
use keyspace::consts::DEFAULT_STORE_FILE;
use keyspace::error::{KeyspaceError, KsResult};
use keyspace::store::PuzzleStore;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Saved-puzzle store file.
    #[arg(global = true, short, long, default_value = DEFAULT_STORE_FILE)]
    store: String,

    /// Puzzle to operate on: a saved puzzle id or a preset id. Defaults to
    /// the built-in default preset.
    #[arg(global = true, short, long)]
    puzzle: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List built-in presets.
    Presets,
    /// Create a puzzle from a JSON definition file.
    Create(cmd::manage::CreateArgs),
    /// List saved puzzles.
    Saved,
    /// Delete a saved puzzle.
    Delete(cmd::manage::DeleteArgs),
    /// List every candidate with its checked status.
    List,
    /// Show probability statistics.
    Stats,
    /// Show the middle-out recommendation.
    Strategy,
    /// Mark a candidate key as checked.
    Check(cmd::track::KeyArgs),
    /// Remove a candidate key from the checked set.
    Uncheck(cmd::track::KeyArgs),
    /// Clear all checked keys.
    Reset,
    /// Print the plain-text combination report.
    Export,
}

/// Puts the selected puzzle into the session. Saved puzzles win over
/// presets on id collision. Returns whether mutations should be written
/// back to the store.
fn select_puzzle(cli: &Cli, session: &Session, store: &PuzzleStore) -> KsResult<bool> {
    let Some(id) = &cli.puzzle else {
        return Ok(false);
    };

    match api::load_saved(session, store, id) {
        Ok(_) => Ok(true),
        Err(KeyspaceError::NotFound(_)) => {
            api::load_preset(session, id).map_err(|_| {
                KeyspaceError::NotFound(format!("No saved puzzle or preset with id '{}'", id))
            })?;
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let store = PuzzleStore::new(&cli.store);
    let session = Session::default();

    let persist = select_puzzle(&cli, &session, &store).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });
    if let Some(id) = &cli.puzzle {
        info!("Operating on puzzle '{}'", id);
    }

    let result = match &cli.command {
        Commands::Presets => {
            cmd::manage::presets();
            Ok(())
        }
        Commands::Create(args) => cmd::manage::create(args, &session, &store),
        Commands::Saved => cmd::manage::saved(&store),
        Commands::Delete(args) => cmd::manage::delete(args, &store),
        Commands::List => cmd::inspect::list(&session),
        Commands::Stats => cmd::inspect::stats(&session),
        Commands::Strategy => cmd::inspect::strategy(&session),
        Commands::Check(args) => cmd::track::check(args, &session, &store, persist),
        Commands::Uncheck(args) => cmd::track::uncheck(args, &session, &store, persist),
        Commands::Reset => cmd::track::reset(&session, &store, persist),
        Commands::Export => cmd::inspect::export(&session),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
