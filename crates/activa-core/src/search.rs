use crate::activity::{Activity, CategoryGroup};
use crate::catalog::CatalogIndex;
use crate::constants::{
    ACTIVITY_RESULTS_CAP, CATEGORY_RESULTS_CAP, MIN_QUERY_CHARS, RECOMMENDATION_RESULTS_CAP,
};

/// Grouped global-search results, each section capped for display density.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResult {
    pub activities: Vec<Activity>,
    pub categories: Vec<String>,
    pub recommendations: Vec<Activity>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty() && self.categories.is_empty() && self.recommendations.is_empty()
    }
}

/// Case-insensitive substring search across the catalog and the user's
/// recommendation listing.
///
/// Queries shorter than [`MIN_QUERY_CHARS`] characters return an empty
/// result. There is no scoring: matching preserves catalog order and each
/// section is truncated to its cap after filtering.
pub fn search(
    index: &CatalogIndex,
    recommendations: &[CategoryGroup],
    query: &str,
) -> SearchResult {
    if query.chars().count() < MIN_QUERY_CHARS {
        return SearchResult::default();
    }
    let needle = query.to_lowercase();

    let activities: Vec<Activity> = index
        .activities()
        .iter()
        .filter(|activity| matches_activity(activity, &needle))
        .take(ACTIVITY_RESULTS_CAP)
        .cloned()
        .collect();

    // Category names match on their own, even when none of their
    // activities do.
    let categories: Vec<String> = index
        .categories()
        .iter()
        .filter(|category| category.to_lowercase().contains(needle.as_str()))
        .take(CATEGORY_RESULTS_CAP)
        .cloned()
        .collect();

    // A recommended name only counts here when the catalog resolves it;
    // unknown names are dropped from this supplementary section (unlike the
    // listing render, which stubs them).
    let recommended: Vec<Activity> = recommendations
        .iter()
        .flat_map(|group| group.activities.iter())
        .filter_map(|entry| {
            let name = entry.name();
            let details = index.lookup(name)?;
            name.to_lowercase()
                .contains(needle.as_str())
                .then(|| details.clone())
        })
        .take(RECOMMENDATION_RESULTS_CAP)
        .collect();

    SearchResult {
        activities,
        categories,
        recommendations: recommended,
    }
}

/// An activity matches when any of name, place, or category contains the
/// query, case-insensitively.
fn matches_activity(activity: &Activity, needle: &str) -> bool {
    activity.name.to_lowercase().contains(needle)
        || activity.place.to_lowercase().contains(needle)
        || activity.category.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityEntry;

    fn record(name: &str, place: &str, time: &str) -> ActivityEntry {
        ActivityEntry::Record(Activity {
            name: name.to_string(),
            place: place.to_string(),
            time: time.to_string(),
            category: String::new(),
        })
    }

    fn group(category: &str, entries: Vec<ActivityEntry>) -> CategoryGroup {
        CategoryGroup {
            category: category.to_string(),
            activities: entries,
        }
    }

    fn index() -> CatalogIndex {
        CatalogIndex::build(&[
            group(
                "Deportes",
                vec![record("Fútbol", "Cancha 2", "02/06/25 4:00pm")],
            ),
            group("Arte", vec![record("Pintura", "Sala 3", "10:00am")]),
        ])
    }

    fn rec_listing(names: &[&str]) -> Vec<CategoryGroup> {
        vec![CategoryGroup {
            category: "Sugeridas".to_string(),
            activities: names
                .iter()
                .map(|n| ActivityEntry::Name(n.to_string()))
                .collect(),
        }]
    }

    #[test]
    fn test_short_query_returns_nothing() {
        for query in ["", "f", "á"] {
            let result = search(&index(), &rec_listing(&["Fútbol"]), query);
            assert!(result.activities.is_empty());
            assert!(result.categories.is_empty());
            assert!(result.recommendations.is_empty());
        }
    }

    #[test]
    fn test_two_chars_clears_the_threshold() {
        // Two characters, even multibyte ones, are enough.
        let result = search(&index(), &[], "fú");
        assert_eq!(result.activities.len(), 1);
        assert_eq!(result.activities[0].name, "Fútbol");
        assert!(result.categories.is_empty());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let result = search(&index(), &[], "FÚT");
        assert_eq!(result.activities.len(), 1);
    }

    #[test]
    fn test_match_on_place_and_category() {
        let by_place = search(&index(), &[], "cancha");
        assert_eq!(by_place.activities.len(), 1);
        assert_eq!(by_place.activities[0].name, "Fútbol");

        // "deport" hits the denormalized category of every Deportes record.
        let by_category = search(&index(), &[], "deport");
        assert_eq!(by_category.activities.len(), 1);
        assert_eq!(by_category.categories, ["Deportes"]);
    }

    #[test]
    fn test_category_matches_without_activity_match() {
        let result = search(&index(), &[], "ar");
        assert_eq!(result.categories, ["Arte"]);
        assert!(result.activities.is_empty());
    }

    #[test]
    fn test_caps_applied_after_filtering() {
        let entries: Vec<ActivityEntry> = (0..20)
            .map(|i| record(&format!("Actividad {i:02}"), "", ""))
            .collect();
        let index = CatalogIndex::build(&[group("Varias", entries)]);

        let result = search(&index, &[], "actividad");
        assert_eq!(result.activities.len(), 8);
        // Catalog order, not any ranking.
        assert_eq!(result.activities[0].name, "Actividad 00");
        assert_eq!(result.activities[7].name, "Actividad 07");
    }

    #[test]
    fn test_recommendation_needs_catalog_presence() {
        let listing = rec_listing(&["Fútbol", "Fútbol 5"]);
        let result = search(&index(), &listing, "fút");
        // "Fútbol 5" is not in the catalog and is silently dropped.
        let names: Vec<&str> = result.recommendations.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Fútbol"]);
    }

    #[test]
    fn test_recommendation_matches_name_only() {
        // "cancha" matches Fútbol's place in the activities section but the
        // recommendation sub-search only looks at the name.
        let listing = rec_listing(&["Fútbol"]);
        let result = search(&index(), &listing, "cancha");
        assert_eq!(result.activities.len(), 1);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_recommendation_cap() {
        let names: Vec<String> = (0..6).map(|i| format!("Actividad {i}")).collect();
        let entries: Vec<ActivityEntry> =
            names.iter().map(|n| record(n, "", "")).collect();
        let index = CatalogIndex::build(&[group("Varias", entries)]);
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let listing = rec_listing(&refs);

        let result = search(&index, &listing, "actividad");
        assert_eq!(result.recommendations.len(), 3);
    }

    #[test]
    fn test_empty_catalog_still_searches_recommendations_safely() {
        let result = search(&CatalogIndex::default(), &rec_listing(&["Fútbol"]), "fút");
        assert!(result.is_empty());
    }
}
