use crate::error::{KeyspaceError, KsResult};
use crate::puzzle::Puzzle;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Flat JSON-file store mapping puzzle id to the full record.
///
/// A missing file reads as "no data yet" (empty map). Anything else — an
/// unreadable file, corrupt JSON, a failed write — surfaces as an error
/// rather than being swallowed.
pub struct PuzzleStore {
    path: PathBuf,
}

impl PuzzleStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_all(&self) -> KsResult<BTreeMap<String, Puzzle>> {
        if !self.path.exists() {
            debug!("Store file {:?} does not exist yet", self.path);
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn get(&self, id: &str) -> KsResult<Puzzle> {
        self.load_all()?
            .remove(id)
            .ok_or_else(|| KeyspaceError::NotFound(format!("Puzzle '{}'", id)))
    }

    /// Inserts or replaces a puzzle and persists immediately.
    pub fn insert(&self, puzzle: &Puzzle) -> KsResult<()> {
        let mut puzzles = self.load_all()?;
        puzzles.insert(puzzle.id.clone(), puzzle.clone());
        self.save_all(&puzzles)
    }

    /// Deletes a puzzle. `NotFound` if the id is absent.
    pub fn remove(&self, id: &str) -> KsResult<()> {
        let mut puzzles = self.load_all()?;
        if puzzles.remove(id).is_none() {
            return Err(KeyspaceError::NotFound(format!("Puzzle '{}'", id)));
        }
        self.save_all(&puzzles)
    }

    fn save_all(&self, puzzles: &BTreeMap<String, Puzzle>) -> KsResult<()> {
        let json = serde_json::to_string_pretty(puzzles)?;
        fs::write(&self.path, json)?;
        debug!("Persisted {} puzzle(s) to {:?}", puzzles.len(), self.path);
        Ok(())
    }
}
