use std::collections::HashMap;

use crate::activity::{Activity, ActivityEntry, CategoryGroup};

/// Flattened lookup table over the nested category→activity payload.
///
/// Built fresh on every catalog fetch, never incrementally maintained.
/// The API has no identifier beyond the display name, so the name is the
/// key; duplicate names across categories keep the last one seen.
#[derive(Clone, Debug, Default)]
pub struct CatalogIndex {
    activities: Vec<Activity>,
    by_name: HashMap<String, usize>,
    categories: Vec<String>,
}

impl CatalogIndex {
    /// Flatten `groups` into an index, attaching each group's category to
    /// its activities. Single pass over every category and activity.
    pub fn build(groups: &[CategoryGroup]) -> Self {
        let mut index = Self::default();

        for group in groups {
            if !index.categories.iter().any(|c| c == &group.category) {
                index.categories.push(group.category.clone());
            }
            for entry in &group.activities {
                let mut activity = match entry {
                    ActivityEntry::Record(record) => record.clone(),
                    ActivityEntry::Name(name) => Activity::stub(name),
                };
                activity.category = group.category.clone();

                // Nameless records stay visible in catalog order but are
                // unreachable by lookup.
                if !activity.name.is_empty() {
                    index
                        .by_name
                        .insert(activity.name.clone(), index.activities.len());
                }
                index.activities.push(activity);
            }
        }

        index
    }

    /// Look up an activity by name. Misses are expected: recommendation
    /// listings routinely name activities absent from the catalog.
    pub fn lookup(&self, name: &str) -> Option<&Activity> {
        self.by_name.get(name).map(|&i| &self.activities[i])
    }

    /// All activities in catalog order, categories attached.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Distinct category names in first-seen order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}
