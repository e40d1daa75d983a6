//! Activity catalog matching engine.
//!
//! Flattens the nested category→activity payload of the activities API into
//! a uniform catalog index, then runs every matching rule on top of it:
//! capped substring search, time-of-day bucketing over free-form display
//! times, preference membership, and display-ready recommendation assembly.
//!
//! Zero I/O: pure engine with no opinions about transport. The rules are
//! deliberately lenient: a predicate that cannot be evaluated passes
//! (fail-open), and an unresolvable recommended name becomes a stub rather
//! than vanishing, so malformed data degrades visibly instead of silently.

pub mod activity;
pub mod catalog;
pub mod constants;
pub mod filter;
pub mod preferences;
pub mod recommend;
pub mod search;
pub mod timeslot;

pub use activity::{Activity, ActivityEntry, CategoryGroup};
pub use catalog::CatalogIndex;
pub use constants::{
    ACTIVITY_RESULTS_CAP, CATEGORY_RESULTS_CAP, MIN_QUERY_CHARS, RECOMMENDATION_RESULTS_CAP,
    SEARCH_DEBOUNCE_MS, UNPARSEABLE_HOUR_KEY,
};
pub use filter::{DateFilter, FilterSpec, SortBy, filter_and_sort};
pub use preferences::{PreferenceSet, ToggleOutcome};
pub use recommend::{RecommendationGroup, RecommendedActivity, assemble};
pub use search::{SearchResult, search};
pub use timeslot::{TimeOfDay, is_valid_display_time, parse_display_hour};
