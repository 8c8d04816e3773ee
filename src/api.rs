use crate::consts::DEFAULT_PRESET_ID;
use crate::error::{KeyspaceError, KsResult};
use crate::expander;
use crate::progress;
use crate::puzzle::{self, Puzzle, Unknown};
use crate::report;
use crate::stats::{self, Stats};
use crate::store::PuzzleStore;
use crate::strategy::{self, Strategy};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use tracing::info;

/// The per-session state: a single current-puzzle slot.
///
/// Explicit state threaded through every call rather than an ambient
/// global. Sequential semantics; the lock only guards against accidental
/// cross-thread misuse.
pub struct Session {
    current: Mutex<Option<Puzzle>>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }
}

impl Session {
    fn slot(&self) -> KsResult<MutexGuard<'_, Option<Puzzle>>> {
        self.current
            .lock()
            .map_err(|e| KeyspaceError::Lock(e.to_string()))
    }

    pub fn set_current(&self, puzzle: Puzzle) -> KsResult<()> {
        *self.slot()? = Some(puzzle);
        Ok(())
    }

    /// Clone of the current puzzle, falling back to the default preset when
    /// the slot is empty (and filling the slot with it).
    pub fn current(&self) -> KsResult<Puzzle> {
        let mut slot = self.slot()?;
        if let Some(puzzle) = slot.as_ref() {
            return Ok(puzzle.clone());
        }
        let preset = puzzle::find_preset(DEFAULT_PRESET_ID)
            .ok_or_else(|| KeyspaceError::NotFound(format!("Preset '{}'", DEFAULT_PRESET_ID)))?;
        *slot = Some(preset.clone());
        Ok(preset)
    }

    fn with_current<R>(&self, f: impl FnOnce(&mut Puzzle) -> R) -> KsResult<R> {
        let mut slot = self.slot()?;
        if slot.is_none() {
            let preset = puzzle::find_preset(DEFAULT_PRESET_ID).ok_or_else(|| {
                KeyspaceError::NotFound(format!("Preset '{}'", DEFAULT_PRESET_ID))
            })?;
            *slot = Some(preset);
        }
        // Slot is filled above; this cannot fail.
        let puzzle = slot.as_mut().ok_or_else(|| {
            KeyspaceError::Lock("Current puzzle slot empty after fill".to_string())
        })?;
        Ok(f(puzzle))
    }
}

// ---- DTOs -----------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub pattern: String,
    pub unknowns_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub pattern: String,
    pub unknowns_count: usize,
    pub created_at: chrono::DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentPuzzle {
    pub puzzle: Puzzle,
    pub pattern_display: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinationEntry {
    pub value: String,
    pub key: String,
    pub combination: BTreeMap<String, String>,
    pub checked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub checked: Vec<String>,
    pub stats: Stats,
}

/// Validated creation/update payload, checked at the boundary before a
/// `Puzzle` is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub pattern: String,
    pub unknowns: Vec<Unknown>,
}

impl PuzzleRequest {
    fn validate(&self) -> KsResult<()> {
        if self.name.trim().is_empty() {
            return Err(KeyspaceError::Validation("Missing puzzle name".to_string()));
        }
        if self.pattern.trim().is_empty() {
            return Err(KeyspaceError::Validation("Missing pattern".to_string()));
        }
        if self.unknowns.is_empty() {
            return Err(KeyspaceError::Validation(
                "Must have at least one unknown".to_string(),
            ));
        }
        for unknown in &self.unknowns {
            if unknown.options.is_empty() {
                return Err(KeyspaceError::Validation(format!(
                    "Unknown '{}' has no options",
                    unknown.id
                )));
            }
        }
        Ok(())
    }
}

// ---- Services -------------------------------------------------------------

pub fn list_presets() -> Vec<PresetSummary> {
    puzzle::presets()
        .into_iter()
        .map(|p| PresetSummary {
            unknowns_count: p.unknowns.len(),
            id: p.id,
            name: p.name,
            description: p.description,
            pattern: p.pattern,
        })
        .collect()
}

pub fn load_preset(session: &Session, id: &str) -> KsResult<Puzzle> {
    let preset =
        puzzle::find_preset(id).ok_or_else(|| KeyspaceError::NotFound(format!("Preset '{}'", id)))?;
    session.set_current(preset.clone())?;
    info!("Loaded preset '{}'", id);
    Ok(preset)
}

/// Creates a custom puzzle, persists it, and makes it current.
pub fn create_puzzle(
    session: &Session,
    store: &PuzzleStore,
    req: PuzzleRequest,
) -> KsResult<Puzzle> {
    req.validate()?;

    let now = Utc::now();
    let created = Puzzle {
        id: format!("custom_{}", now.format("%Y%m%d_%H%M%S")),
        name: req.name,
        description: req.description,
        pattern: req.pattern,
        unknowns: req.unknowns,
        checked: Default::default(),
        created_at: now,
    };

    store.insert(&created)?;
    session.set_current(created.clone())?;
    info!("Created puzzle '{}' ({})", created.name, created.id);
    Ok(created)
}

pub fn current_puzzle(session: &Session) -> KsResult<CurrentPuzzle> {
    let puzzle = session.current()?;
    let pattern_display = puzzle.display_pattern();
    Ok(CurrentPuzzle {
        puzzle,
        pattern_display,
    })
}

pub fn list_saved(store: &PuzzleStore) -> KsResult<Vec<SavedSummary>> {
    Ok(store
        .load_all()?
        .into_values()
        .map(|p| SavedSummary {
            unknowns_count: p.unknowns.len(),
            id: p.id,
            name: p.name,
            description: p.description,
            pattern: p.pattern,
            created_at: p.created_at,
        })
        .collect())
}

/// Loads a saved puzzle into the session. Checked state is preserved so
/// persisted progress survives a reload; `reset_progress` clears it on
/// demand.
pub fn load_saved(session: &Session, store: &PuzzleStore, id: &str) -> KsResult<Puzzle> {
    let loaded = store.get(id)?;
    session.set_current(loaded.clone())?;
    info!("Loaded saved puzzle '{}'", id);
    Ok(loaded)
}

pub fn delete_saved(store: &PuzzleStore, id: &str) -> KsResult<()> {
    store.remove(id)?;
    info!("Deleted puzzle '{}'", id);
    Ok(())
}

/// Updates a stored puzzle's definition, preserving its checked state. The
/// session slot is refreshed when it holds the same puzzle.
pub fn update_puzzle(
    session: &Session,
    store: &PuzzleStore,
    id: &str,
    req: PuzzleRequest,
) -> KsResult<Puzzle> {
    req.validate()?;

    let existing = store.get(id)?;
    let updated = Puzzle {
        id: existing.id,
        name: req.name,
        description: req.description,
        pattern: req.pattern,
        unknowns: req.unknowns,
        checked: existing.checked,
        created_at: existing.created_at,
    };
    store.insert(&updated)?;

    let mut slot = session.slot()?;
    if slot.as_ref().is_some_and(|p| p.id == id) {
        *slot = Some(updated.clone());
    }
    drop(slot);

    info!("Updated puzzle '{}'", id);
    Ok(updated)
}

/// All candidates of the current puzzle in expander order, each annotated
/// with its checked flag.
pub fn list_combinations(session: &Session) -> KsResult<Vec<CombinationEntry>> {
    let puzzle = session.current()?;
    let candidates = expander::expand(&puzzle.pattern, &puzzle.unknowns)?;
    Ok(candidates
        .into_iter()
        .map(|c| CombinationEntry {
            checked: puzzle.checked.contains(&c.key),
            value: c.value,
            key: c.key,
            combination: c.combination,
        })
        .collect())
}

pub fn probabilities(session: &Session) -> KsResult<Stats> {
    let puzzle = session.current()?;
    Ok(stats_for(&puzzle))
}

pub fn optimal_strategy(session: &Session) -> KsResult<Strategy> {
    let puzzle = session.current()?;
    let candidates = expander::expand(&puzzle.pattern, &puzzle.unknowns)?;
    Ok(strategy::recommend(&candidates, &puzzle.checked))
}

/// Marks a key as checked. Reports `success = false` with an explanatory
/// message, without mutating anything, when the key is already checked.
pub fn check(session: &Session, key: &str) -> KsResult<CheckOutcome> {
    session.with_current(|puzzle| {
        let already = progress::mark(puzzle, key);
        CheckOutcome {
            success: !already,
            message: already.then(|| "Already checked".to_string()),
            checked: puzzle.checked.iter().cloned().collect(),
            stats: stats_for(puzzle),
        }
    })
}

/// Removes a key from the checked set. Idempotent; never fails on an
/// absent key.
pub fn uncheck(session: &Session, key: &str) -> KsResult<CheckOutcome> {
    session.with_current(|puzzle| {
        progress::unmark(puzzle, key);
        CheckOutcome {
            success: true,
            message: None,
            checked: puzzle.checked.iter().cloned().collect(),
            stats: stats_for(puzzle),
        }
    })
}

pub fn reset_progress(session: &Session) -> KsResult<Stats> {
    session.with_current(|puzzle| {
        progress::reset(puzzle);
        stats_for(puzzle)
    })
}

/// Writes the session's puzzle back to the store so progress survives the
/// process. Storage failures surface to the caller.
pub fn persist_current(session: &Session, store: &PuzzleStore) -> KsResult<()> {
    let puzzle = session.current()?;
    store.insert(&puzzle)
}

pub fn export_text(session: &Session) -> KsResult<String> {
    let puzzle = session.current()?;
    let candidates = expander::expand(&puzzle.pattern, &puzzle.unknowns)?;
    Ok(report::render(&puzzle, &candidates, Utc::now()))
}

fn stats_for(puzzle: &Puzzle) -> Stats {
    let total = usize::try_from(puzzle.total_combinations()).unwrap_or(usize::MAX);
    stats::compute(total, puzzle.checked.len())
}
