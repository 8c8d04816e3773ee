use crate::reports;
use keyspace::api::{self, Session};
use keyspace::error::KsResult;

pub fn list(session: &Session) -> KsResult<()> {
    let current = api::current_puzzle(session)?;
    println!(
        "\nPuzzle: {}  (pattern: {})",
        current.puzzle.name, current.pattern_display
    );
    let entries = api::list_combinations(session)?;
    reports::print_combinations(&entries);
    Ok(())
}

pub fn stats(session: &Session) -> KsResult<()> {
    let stats = api::probabilities(session)?;
    reports::print_stats(&stats);
    Ok(())
}

pub fn strategy(session: &Session) -> KsResult<()> {
    let strategy = api::optimal_strategy(session)?;
    reports::print_strategy(&strategy);
    Ok(())
}

pub fn export(session: &Session) -> KsResult<()> {
    print!("{}", api::export_text(session)?);
    Ok(())
}
