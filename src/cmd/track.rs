use crate::reports;
use clap::Args;
use keyspace::api::{self, Session};
use keyspace::error::KsResult;
use keyspace::store::PuzzleStore;

#[derive(Args, Debug, Clone)]
pub struct KeyArgs {
    /// Candidate key (options joined with '|' in declaration order).
    pub key: String,
}

pub fn check(
    args: &KeyArgs,
    session: &Session,
    store: &PuzzleStore,
    persist: bool,
) -> KsResult<()> {
    let outcome = api::check(session, &args.key)?;
    if outcome.success {
        println!("Checked '{}'", args.key);
    } else if let Some(message) = &outcome.message {
        println!("{}", message);
    }
    reports::print_stats(&outcome.stats);
    if persist && outcome.success {
        api::persist_current(session, store)?;
    }
    Ok(())
}

pub fn uncheck(
    args: &KeyArgs,
    session: &Session,
    store: &PuzzleStore,
    persist: bool,
) -> KsResult<()> {
    let outcome = api::uncheck(session, &args.key)?;
    println!("Unchecked '{}'", args.key);
    reports::print_stats(&outcome.stats);
    if persist {
        api::persist_current(session, store)?;
    }
    Ok(())
}

pub fn reset(session: &Session, store: &PuzzleStore, persist: bool) -> KsResult<()> {
    let stats = api::reset_progress(session)?;
    println!("Progress reset.");
    reports::print_stats(&stats);
    if persist {
        api::persist_current(session, store)?;
    }
    Ok(())
}
