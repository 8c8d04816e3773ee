use keyspace::expander::Candidate;
use keyspace::strategy::{middle_out_order, recommend, StrategyKind};
use std::collections::{BTreeMap, BTreeSet};

fn candidate(key: &str) -> Candidate {
    Candidate {
        value: format!("val-{}", key),
        key: key.to_string(),
        combination: BTreeMap::new(),
    }
}

fn candidates(keys: &[&str]) -> Vec<Candidate> {
    keys.iter().map(|k| candidate(k)).collect()
}

fn keys_of(candidates: &[Candidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.key.as_str()).collect()
}

#[test]
fn test_middle_out_order_five_elements() {
    // [A,B,C,D,E]: mid 2 -> C, then [A,B,D,E] mid 2 -> D,
    // [A,B,E] mid 1 -> B, [A,E] mid 1 -> E, [A] -> A.
    let order = middle_out_order(candidates(&["A", "B", "C", "D", "E"]));
    assert_eq!(keys_of(&order), vec!["C", "D", "B", "E", "A"]);
}

#[test]
fn test_middle_out_order_six_elements() {
    let order = middle_out_order(candidates(&["A", "B", "C", "D", "E", "F"]));
    assert_eq!(keys_of(&order), vec!["D", "C", "E", "B", "F", "A"]);
}

#[test]
fn test_recommend_sorts_by_key_before_walking() {
    let strategy = recommend(&candidates(&["E", "A", "C", "B", "D"]), &BTreeSet::new());
    assert_eq!(strategy.strategy, StrategyKind::Optimal);
    assert_eq!(keys_of(&strategy.recommended), vec!["C", "D", "B", "E", "A"]);
    assert_eq!(strategy.total_remaining, 5);
}

#[test]
fn test_recommend_filters_checked_keys() {
    let checked: BTreeSet<String> = ["C", "D"].iter().map(|s| s.to_string()).collect();
    let strategy = recommend(&candidates(&["A", "B", "C", "D", "E"]), &checked);

    assert_eq!(strategy.total_remaining, 3);
    // Remaining sorted: [A,B,E] -> B, E, A.
    assert_eq!(keys_of(&strategy.recommended), vec!["B", "E", "A"]);
}

#[test]
fn test_recommend_caps_at_five() {
    let strategy = recommend(
        &candidates(&["A", "B", "C", "D", "E", "F", "G", "H"]),
        &BTreeSet::new(),
    );
    assert_eq!(strategy.recommended.len(), 5);
    assert_eq!(strategy.total_remaining, 8);
}

#[test]
fn test_recommend_exhausted_space() {
    let checked: BTreeSet<String> = ["A", "B"].iter().map(|s| s.to_string()).collect();
    let strategy = recommend(&candidates(&["A", "B"]), &checked);

    assert_eq!(strategy.strategy, StrategyKind::Exhausted);
    assert!(strategy.recommended.is_empty());
    assert_eq!(strategy.total_remaining, 0);
}

#[test]
fn test_recommend_is_deterministic() {
    let input = candidates(&["B", "A", "D", "C"]);
    let first = recommend(&input, &BTreeSet::new());
    let second = recommend(&input, &BTreeSet::new());
    assert_eq!(keys_of(&first.recommended), keys_of(&second.recommended));
}

#[test]
fn test_strategy_kind_serializes_lowercase() {
    let json = serde_json::to_string(&StrategyKind::Exhausted).unwrap();
    assert_eq!(json, "\"exhausted\"");
    assert_eq!(StrategyKind::Optimal.to_string(), "optimal");
}
