use crate::activity::CategoryGroup;

/// What a preference toggle did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// The user's favorite activity names, in the order they were added.
///
/// Hydrated from the preferences endpoint on load and mutated by toggles.
/// Lives only for the session; the server copy is the durable one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreferenceSet {
    names: Vec<String>,
}

impl PreferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten the nested preferences payload into a set of names.
    pub fn from_groups(groups: &[CategoryGroup]) -> Self {
        let mut set = Self::new();
        for group in groups {
            for entry in &group.activities {
                set.insert(entry.name());
            }
        }
        set
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Add a name. Idempotent: returns false when already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Remove a name, reporting whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
