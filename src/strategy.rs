use crate::consts::RECOMMENDED_LIMIT;
use crate::expander::Candidate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StrategyKind {
    Optimal,
    Exhausted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strategy {
    pub strategy: StrategyKind,
    pub recommended: Vec<Candidate>,
    pub total_remaining: usize,
}

/// Produces the middle-out visitation order over candidates sorted by key:
/// repeatedly remove the element at `floor(len / 2)` of the shrinking
/// sequence. The walk starts near the median key and alternates toward the
/// extremes as the midpoint shifts.
pub fn middle_out_order(mut sorted: Vec<Candidate>) -> Vec<Candidate> {
    let mut order = Vec::with_capacity(sorted.len());
    while !sorted.is_empty() {
        let mid = sorted.len() / 2;
        order.push(sorted.remove(mid));
    }
    order
}

/// Recommends the next candidates to try, skipping anything already checked.
///
/// Deterministic and repeatable; the middle-out order carries no optimality
/// guarantee beyond avoiding sequential-scan bias.
pub fn recommend(candidates: &[Candidate], checked: &BTreeSet<String>) -> Strategy {
    let mut remaining: Vec<Candidate> = candidates
        .iter()
        .filter(|c| !checked.contains(&c.key))
        .cloned()
        .collect();

    if remaining.is_empty() {
        return Strategy {
            strategy: StrategyKind::Exhausted,
            recommended: Vec::new(),
            total_remaining: 0,
        };
    }

    remaining.sort_by(|a, b| a.key.cmp(&b.key));
    let total_remaining = remaining.len();

    let mut recommended = middle_out_order(remaining);
    recommended.truncate(RECOMMENDED_LIMIT);

    Strategy {
        strategy: StrategyKind::Optimal,
        recommended,
        total_remaining,
    }
}
