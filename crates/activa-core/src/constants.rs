/// Minimum query length, in characters, before search runs.
/// Shorter queries return an empty result instead of scanning.
pub const MIN_QUERY_CHARS: usize = 2;

/// Activity section cap in a search result. The caps below size the result
/// dropdown for readability, not for performance.
pub const ACTIVITY_RESULTS_CAP: usize = 8;

/// Category section cap in a search result.
pub const CATEGORY_RESULTS_CAP: usize = 5;

/// Recommendation section cap in a search result.
pub const RECOMMENDATION_RESULTS_CAP: usize = 3;

/// Sort key for activities whose display time cannot be parsed: one past
/// the last real hour, so they sort after everything schedulable.
pub const UNPARSEABLE_HOUR_KEY: u8 = 24;

/// Quiet period before a pending interactive search fires. A new query
/// inside the window replaces the pending one.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;
