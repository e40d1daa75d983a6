use crate::catalog::CatalogIndex;
use crate::constants::UNPARSEABLE_HOUR_KEY;
use crate::timeslot::{TimeOfDay, parse_display_hour};

/// Date windows the filter surface offers. Recognized and carried, but
/// filtering on them is a no-op: the display `time` string is the only
/// temporal field and its date part is not machine-readable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Tomorrow,
    Week,
}

/// Result orderings. Every sort is stable: ties keep insertion order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Server-provided order, untouched.
    #[default]
    Relevance,
    /// Orders category groups, never activities within a group.
    Category,
    /// Lexicographic ascending on the raw activity name.
    Name,
    /// Ascending by parsed hour; unparseable times sort last.
    Time,
}

/// One filter interaction's worth of settings. Recreated per interaction,
/// never long-lived state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterSpec {
    /// `None` admits every category.
    pub category: Option<String>,
    pub time_of_day: TimeOfDay,
    pub date: DateFilter,
    pub sort_by: SortBy,
}

/// Filter `names` against the catalog and order the survivors.
///
/// Predicates that cannot be evaluated pass: a name missing from the
/// catalog or an unreadable display time never disappears because of a
/// filter it cannot answer.
pub fn filter_and_sort(names: &[String], index: &CatalogIndex, spec: &FilterSpec) -> Vec<String> {
    let mut kept: Vec<String> = names
        .iter()
        .filter(|name| passes(name, index, spec))
        .cloned()
        .collect();

    match spec.sort_by {
        SortBy::Name => kept.sort(),
        SortBy::Time => kept.sort_by_key(|name| sort_hour(name, index)),
        // Category ordering happens at the group level, in assemble.
        SortBy::Relevance | SortBy::Category => {}
    }

    kept
}

fn passes(name: &str, index: &CatalogIndex, spec: &FilterSpec) -> bool {
    let activity = index.lookup(name);

    if let Some(wanted) = &spec.category
        && let Some(activity) = activity
        && activity.category != *wanted
    {
        return false;
    }

    if spec.time_of_day != TimeOfDay::All
        && let Some(activity) = activity
        && let Some(hour) = parse_display_hour(&activity.time)
        && !spec.time_of_day.admits(hour)
    {
        return false;
    }

    // DateFilter deliberately excludes nothing; see the type's docs.
    true
}

fn sort_hour(name: &str, index: &CatalogIndex) -> u8 {
    index
        .lookup(name)
        .and_then(|activity| parse_display_hour(&activity.time))
        .unwrap_or(UNPARSEABLE_HOUR_KEY)
}
