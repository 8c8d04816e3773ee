/// Hard cap on the expanded candidate count. `expand` rejects anything
/// larger before allocating.
pub const MAX_COMBINATIONS: usize = 100_000;

/// How many candidates a strategy recommendation returns.
pub const RECOMMENDED_LIMIT: usize = 5;

/// Preset loaded when a session has no current puzzle yet.
pub const DEFAULT_PRESET_ID: &str = "us_area_code";

/// Default location of the saved-puzzle store.
pub const DEFAULT_STORE_FILE: &str = "puzzles.json";
