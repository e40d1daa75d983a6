//! Plain-text rendering for catalog listings, search results, and
//! recommendation views.

use activa_core::{Activity, ActivityEntry, CategoryGroup, RecommendationGroup, SearchResult};

/// Inline warning for a section that failed to load. The rest of the
/// output still renders.
pub fn section_error(message: &str) {
    println!("warning: {message}");
}

pub fn activity_line(activity: &Activity) -> String {
    let mut line = activity.name.clone();
    if !activity.place.is_empty() {
        line.push_str(&format!(" @ {}", activity.place));
    }
    if !activity.time.is_empty() {
        line.push_str(&format!(", {}", activity.time));
    }
    if !activity.category.is_empty() {
        line.push_str(&format!(" [{}]", activity.category));
    }
    line
}

pub fn category_group(group: &CategoryGroup) {
    println!("{}:", group.category);
    for entry in &group.activities {
        match entry {
            ActivityEntry::Record(activity) => println!("  {}", activity_line(activity)),
            ActivityEntry::Name(name) => println!("  {name}"),
        }
    }
}

pub fn search_result(result: &SearchResult) {
    if result.is_empty() {
        println!("(no matches)");
        return;
    }

    if !result.activities.is_empty() {
        println!("activities:");
        for activity in &result.activities {
            println!("  {}", activity_line(activity));
        }
    }

    if !result.recommendations.is_empty() {
        println!("in your recommendations:");
        for activity in &result.recommendations {
            println!("  {}", activity_line(activity));
        }
    }

    if !result.categories.is_empty() {
        println!("categories:");
        for category in &result.categories {
            println!("  {category}");
        }
    }
}

pub fn recommendation_groups(groups: &[RecommendationGroup]) {
    for group in groups {
        println!("{} ({})", group.category, group.activities.len());
        for entry in &group.activities {
            let marker = if entry.preferred { " (favorite)" } else { "" };
            println!("  {}{marker}", activity_line(&entry.activity));
        }
    }
}
