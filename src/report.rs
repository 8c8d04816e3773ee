use crate::expander::Candidate;
use crate::puzzle::Puzzle;
use chrono::{DateTime, Utc};

/// Renders the plain-text export: header, numbered candidate listing in
/// expander order with a checked/unchecked annotation per line, and a
/// generation timestamp footer.
///
/// The timestamp is an argument so callers control it and tests stay
/// deterministic.
pub fn render(puzzle: &Puzzle, candidates: &[Candidate], generated_at: DateTime<Utc>) -> String {
    let rule_heavy = "=".repeat(60);
    let rule_light = "-".repeat(60);

    let mut text = String::new();
    text.push_str(&format!("{} - All Combinations\n", puzzle.name));
    text.push_str(&format!("{}\n\n", rule_heavy));
    text.push_str(&format!("Pattern: {}\n", puzzle.pattern));
    text.push_str(&format!("Total combinations: {}\n\n", candidates.len()));
    text.push_str("All possible values:\n");
    text.push_str(&format!("{}\n", rule_light));

    for (i, candidate) in candidates.iter().enumerate() {
        let status = if puzzle.checked.contains(&candidate.key) {
            "✗ Checked"
        } else {
            "✓ Unchecked"
        };
        text.push_str(&format!("{:>4}. {} {}\n", i + 1, candidate.value, status));
    }

    text.push_str(&format!("\n{}\n", rule_heavy));
    text.push_str(&format!(
        "Generated: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));

    text
}
