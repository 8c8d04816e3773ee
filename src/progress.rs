use crate::puzzle::Puzzle;

/// Marks a key as checked. Returns `true` if the key was already present,
/// in which case the set is left untouched.
///
/// No validation that `key` names a real candidate of the puzzle: callers
/// may mark arbitrary keys, and stale keys simply never match.
pub fn mark(puzzle: &mut Puzzle, key: &str) -> bool {
    if puzzle.checked.contains(key) {
        return true;
    }
    puzzle.checked.insert(key.to_string());
    false
}

/// Removes a key from the checked set. Absent keys are a no-op, not an error.
pub fn unmark(puzzle: &mut Puzzle, key: &str) {
    puzzle.checked.remove(key);
}

/// Clears all checked keys.
pub fn reset(puzzle: &mut Puzzle) {
    puzzle.checked.clear();
}
