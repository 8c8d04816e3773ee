use crate::reports;
use clap::Args;
use keyspace::api::{self, PuzzleRequest, Session};
use keyspace::error::KsResult;
use keyspace::store::PuzzleStore;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// JSON file holding {"name", "description"?, "pattern", "unknowns"}.
    #[arg(short, long)]
    pub file: String,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    /// Saved puzzle id to delete.
    pub id: String,
}

pub fn presets() {
    reports::print_presets(&api::list_presets());
}

pub fn create(args: &CreateArgs, session: &Session, store: &PuzzleStore) -> KsResult<()> {
    info!("Reading puzzle definition from {}", args.file);
    let content = fs::read_to_string(&args.file)?;
    let req: PuzzleRequest = serde_json::from_str(&content)?;
    let created = api::create_puzzle(session, store, req)?;
    println!("Created puzzle '{}' ({})", created.name, created.id);
    Ok(())
}

pub fn saved(store: &PuzzleStore) -> KsResult<()> {
    let puzzles = api::list_saved(store)?;
    if puzzles.is_empty() {
        println!("No saved puzzles in {:?}.", store.path());
        return Ok(());
    }
    reports::print_saved(&puzzles);
    Ok(())
}

pub fn delete(args: &DeleteArgs, store: &PuzzleStore) -> KsResult<()> {
    api::delete_saved(store, &args.id)?;
    println!("Deleted puzzle '{}'", args.id);
    Ok(())
}
