use chrono::{TimeZone, Utc};
use keyspace::expander::expand;
use keyspace::puzzle::{Puzzle, Unknown};
use keyspace::report;
use std::collections::BTreeSet;

fn lock_puzzle() -> Puzzle {
    Puzzle {
        id: "lock".to_string(),
        name: "Bike Lock".to_string(),
        description: String::new(),
        pattern: "{HI}{LO}".to_string(),
        unknowns: vec![
            Unknown {
                id: "HI".to_string(),
                label: "First pair".to_string(),
                options: vec!["19".to_string(), "91".to_string()],
            },
            Unknown {
                id: "LO".to_string(),
                label: "Second pair".to_string(),
                options: vec!["84".to_string()],
            },
        ],
        checked: BTreeSet::new(),
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[test]
fn test_report_layout_and_footer() {
    let mut puzzle = lock_puzzle();
    puzzle.checked.insert("91|84".to_string());
    let candidates = expand(&puzzle.pattern, &puzzle.unknowns).unwrap();

    let generated = Utc.with_ymd_and_hms(2026, 8, 24, 9, 30, 0).unwrap();
    let text = report::render(&puzzle, &candidates, generated);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Bike Lock - All Combinations");
    assert_eq!(lines[1], "=".repeat(60));
    assert!(text.contains("Pattern: {HI}{LO}"));
    assert!(text.contains("Total combinations: 2"));
    assert!(text.contains("   1. 1984 ✓ Unchecked"));
    assert!(text.contains("   2. 9184 ✗ Checked"));
    assert!(text.ends_with("Generated: 2026-08-24 09:30:00\n"));
}

#[test]
fn test_report_order_matches_expander_order() {
    let puzzle = lock_puzzle();
    let candidates = expand(&puzzle.pattern, &puzzle.unknowns).unwrap();
    let text = report::render(&puzzle, &candidates, Utc::now());

    let first = text.lines().position(|l| l.contains("1984")).unwrap();
    let second = text.lines().position(|l| l.contains("9184")).unwrap();
    assert!(first < second);
}
