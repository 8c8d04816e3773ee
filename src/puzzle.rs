use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A named placeholder in the pattern with its finite, ordered option list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Unknown {
    pub id: String,
    pub label: String,
    pub options: Vec<String>,
}

impl Unknown {
    /// The literal placeholder text this unknown occupies in a pattern.
    pub fn placeholder(&self) -> String {
        format!("{{{}}}", self.id)
    }
}

/// A puzzle definition plus the keys the user has already eliminated.
///
/// `checked` keys are positional (pipe-joined options in declaration order),
/// so reordering `unknowns` changes what existing keys mean. No referential
/// enforcement: stale keys simply stop matching any candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub pattern: String,
    pub unknowns: Vec<Unknown>,
    #[serde(default)]
    pub checked: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
}

impl Puzzle {
    /// Size of the full candidate space, overflow-safe.
    pub fn total_combinations(&self) -> u128 {
        self.unknowns
            .iter()
            .map(|u| u.options.len() as u128)
            .product()
    }

    /// Cosmetic mask of the pattern: each placeholder becomes `X` repeated
    /// to the length of that unknown's first option.
    pub fn display_pattern(&self) -> String {
        let mut display = self.pattern.clone();
        for unknown in &self.unknowns {
            if let Some(first) = unknown.options.first() {
                let mask = "X".repeat(first.chars().count());
                display = display.replace(&unknown.placeholder(), &mask);
            }
        }
        display
    }
}

/// Built-in demo puzzles.
pub fn presets() -> Vec<Puzzle> {
    vec![
        Puzzle {
            id: "us_area_code".to_string(),
            name: "US Area Code".to_string(),
            description: "Find missing area code in US phone number".to_string(),
            pattern: "+1{U1}5551234".to_string(),
            unknowns: vec![Unknown {
                id: "U1".to_string(),
                label: "Area Code".to_string(),
                options: [
                    "212", "213", "310", "312", "323", "415", "510", "646", "718", "917",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            }],
            checked: BTreeSet::new(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        },
        Puzzle {
            id: "bike_lock".to_string(),
            name: "Bike Lock".to_string(),
            description: "Two half-remembered dial pairs of a 4-digit lock".to_string(),
            pattern: "{HI}{LO}".to_string(),
            unknowns: vec![
                Unknown {
                    id: "HI".to_string(),
                    label: "First pair".to_string(),
                    options: ["19", "91", "17", "71"]
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                },
                Unknown {
                    id: "LO".to_string(),
                    label: "Second pair".to_string(),
                    options: ["84", "48", "82", "28"]
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                },
            ],
            checked: BTreeSet::new(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        },
    ]
}

/// Look up a preset by id. Checked state always starts empty.
pub fn find_preset(id: &str) -> Option<Puzzle> {
    presets().into_iter().find(|p| p.id == id)
}
