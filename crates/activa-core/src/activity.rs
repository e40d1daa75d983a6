use serde::{Deserialize, Deserializer, Serialize};

/// A single activity as surfaced to search and recommendation consumers.
///
/// `category` is denormalized from the enclosing payload group at catalog
/// build time: the API nests activities under category headings without
/// repeating the category on each record, and downstream consumers need it
/// without re-walking the nested payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "nombre", default, deserialize_with = "null_to_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub place: String,
    /// Free-form display text ("02/06/25 4:00pm"), not a parsed timestamp.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub time: String,
    #[serde(
        rename = "categoria",
        alias = "category",
        default,
        deserialize_with = "null_to_empty"
    )]
    pub category: String,
}

impl Activity {
    /// Name-only stub, synthesized when a listing references an activity
    /// the catalog cannot resolve.
    pub fn stub(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

/// One category group as the API returns it: a heading plus the activities
/// nested under it. Shared by the activities, recommendations, and
/// preferences payloads.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CategoryGroup {
    #[serde(rename = "categoria", default, deserialize_with = "null_to_empty")]
    pub category: String,
    #[serde(rename = "actividades", default)]
    pub activities: Vec<ActivityEntry>,
}

impl CategoryGroup {
    /// Activity names in listing order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(ActivityEntry::name)
    }
}

/// Catalog payloads carry full activity records; recommendation and
/// preference payloads carry bare name strings. Both decode through here.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActivityEntry {
    Name(String),
    Record(Activity),
}

impl ActivityEntry {
    pub fn name(&self) -> &str {
        match self {
            ActivityEntry::Name(name) => name,
            ActivityEntry::Record(activity) => &activity.name,
        }
    }
}

/// The API emits `null` for unset place/time fields; fold those into empty
/// strings so every consumer sees plain display text.
fn null_to_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let json = r#"{"nombre": "Fútbol", "place": "Cancha 2", "time": "02/06/25 4:00pm"}"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.name, "Fútbol");
        assert_eq!(activity.place, "Cancha 2");
        assert_eq!(activity.time, "02/06/25 4:00pm");
        assert_eq!(activity.category, "");
    }

    #[test]
    fn test_decode_null_fields_to_empty() {
        let json = r#"{"nombre": "Yoga", "place": null, "time": null, "category": null}"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.name, "Yoga");
        assert_eq!(activity.place, "");
        assert_eq!(activity.time, "");
        assert_eq!(activity.category, "");
    }

    #[test]
    fn test_decode_category_alias() {
        // The activities endpoint writes "category"; groups write "categoria".
        let json = r#"{"nombre": "Yoga", "category": "Bienestar"}"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.category, "Bienestar");
    }

    #[test]
    fn test_group_decodes_bare_names() {
        let json = r#"{"categoria": "Deportes", "actividades": ["Fútbol", "Tenis"]}"#;
        let group: CategoryGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.category, "Deportes");
        let names: Vec<&str> = group.names().collect();
        assert_eq!(names, vec!["Fútbol", "Tenis"]);
    }

    #[test]
    fn test_group_decodes_full_records() {
        let json = r#"{
            "categoria": "Arte",
            "actividades": [{"nombre": "Pintura", "place": "Sala 3", "time": "8:30am"}]
        }"#;
        let group: CategoryGroup = serde_json::from_str(json).unwrap();
        match &group.activities[0] {
            ActivityEntry::Record(activity) => {
                assert_eq!(activity.name, "Pintura");
                assert_eq!(activity.place, "Sala 3");
            }
            other => panic!("expected full record, got {other:?}"),
        }
    }

    #[test]
    fn test_group_decodes_mixed_entries() {
        let json = r#"{"categoria": "Arte", "actividades": ["Teatro", {"nombre": "Pintura"}]}"#;
        let group: CategoryGroup = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = group.names().collect();
        assert_eq!(names, vec!["Teatro", "Pintura"]);
    }

    #[test]
    fn test_group_missing_activities_defaults_empty() {
        let json = r#"{"categoria": "Deportes"}"#;
        let group: CategoryGroup = serde_json::from_str(json).unwrap();
        assert!(group.activities.is_empty());
    }

    #[test]
    fn test_stub_carries_only_the_name() {
        let stub = Activity::stub("Ajedrez");
        assert_eq!(stub.name, "Ajedrez");
        assert_eq!(stub.place, "");
        assert_eq!(stub.time, "");
        assert_eq!(stub.category, "");
    }

    #[test]
    fn test_serde_roundtrip() {
        let group = CategoryGroup {
            category: "Deportes".to_string(),
            activities: vec![
                ActivityEntry::Name("Tenis".to_string()),
                ActivityEntry::Record(Activity::stub("Fútbol")),
            ],
        };
        let json = serde_json::to_string(&group).unwrap();
        let back: CategoryGroup = serde_json::from_str(&json).unwrap();
        let names: Vec<&str> = back.names().collect();
        assert_eq!(names, vec!["Tenis", "Fútbol"]);
    }
}
