use crate::activity::{Activity, CategoryGroup};
use crate::catalog::CatalogIndex;
use crate::filter::{FilterSpec, SortBy, filter_and_sort};
use crate::preferences::PreferenceSet;

/// A recommended activity ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct RecommendedActivity {
    pub activity: Activity,
    /// Already one of the user's favorites. Display affordance only; it
    /// never affects filtering or ordering.
    pub preferred: bool,
}

/// One recommendation category after filtering.
#[derive(Clone, Debug, PartialEq)]
pub struct RecommendationGroup {
    pub category: String,
    pub activities: Vec<RecommendedActivity>,
}

/// Shape the server's recommendation listing for display.
///
/// Every recommended name resolves through the catalog; a name the catalog
/// cannot resolve becomes a name-only stub rather than disappearing from
/// the listing. Groups the filter leaves empty are dropped.
pub fn assemble(
    listing: &[CategoryGroup],
    index: &CatalogIndex,
    preferences: &PreferenceSet,
    spec: &FilterSpec,
) -> Vec<RecommendationGroup> {
    let mut groups: Vec<RecommendationGroup> = listing
        .iter()
        .filter_map(|group| {
            let names: Vec<String> = group.names().map(str::to_string).collect();
            let kept = filter_and_sort(&names, index, spec);
            if kept.is_empty() {
                return None;
            }

            let activities = kept
                .iter()
                .map(|name| RecommendedActivity {
                    activity: index
                        .lookup(name)
                        .cloned()
                        .unwrap_or_else(|| Activity::stub(name)),
                    preferred: preferences.contains(name),
                })
                .collect();

            Some(RecommendationGroup {
                category: group.category.clone(),
                activities,
            })
        })
        .collect();

    if spec.sort_by == SortBy::Category {
        groups.sort_by(|a, b| a.category.cmp(&b.category));
    }

    groups
}
