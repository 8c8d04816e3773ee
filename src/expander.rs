use crate::consts::MAX_COMBINATIONS;
use crate::error::{KeyspaceError, KsResult};
use crate::puzzle::Unknown;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One fully substituted instantiation of a pattern.
///
/// `key` is the canonical identity: the chosen options joined with `|` in
/// unknown-declaration order. Candidates are derived on demand and never
/// persisted; only keys survive (in `Puzzle::checked`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Candidate {
    pub value: String,
    pub key: String,
    pub combination: BTreeMap<String, String>,
}

/// Expands `pattern` against every combination of unknown options.
///
/// Iterates unknowns in declaration order and options in list order, which
/// fixes a deterministic total order over the output. Placeholders with no
/// matching unknown id are left as literal text.
///
/// Fails fast on an empty unknown list, an unknown with no options, or a
/// combination space larger than [`MAX_COMBINATIONS`].
pub fn expand(pattern: &str, unknowns: &[Unknown]) -> KsResult<Vec<Candidate>> {
    if unknowns.is_empty() {
        return Err(KeyspaceError::Validation(
            "Puzzle must have at least one unknown".to_string(),
        ));
    }
    for unknown in unknowns {
        if unknown.options.is_empty() {
            return Err(KeyspaceError::Validation(format!(
                "Unknown '{}' has no options",
                unknown.id
            )));
        }
    }

    let total: u128 = unknowns.iter().map(|u| u.options.len() as u128).product();
    if total > MAX_COMBINATIONS as u128 {
        return Err(KeyspaceError::SpaceExceeded(total, MAX_COMBINATIONS));
    }

    let placeholders: Vec<String> = unknowns.iter().map(|u| u.placeholder()).collect();

    let mut candidates = Vec::with_capacity(total as usize);
    for combo in unknowns
        .iter()
        .map(|u| u.options.iter())
        .multi_cartesian_product()
    {
        let mut value = pattern.to_string();
        let mut combination = BTreeMap::new();
        for (i, option) in combo.iter().enumerate() {
            value = value.replace(&placeholders[i], option);
            combination.insert(unknowns[i].id.clone(), (*option).clone());
        }

        let key = combo.iter().map(|s| s.as_str()).join("|");

        candidates.push(Candidate {
            value,
            key,
            combination,
        });
    }

    Ok(candidates)
}
