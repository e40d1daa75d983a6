use activa_core::{CatalogIndex, CategoryGroup, PreferenceSet};

use crate::client::ApiClient;

/// Everything the browsing views need, fetched in one round.
///
/// Sections degrade independently: a failed fetch leaves its collection
/// empty and parks the error message for the caller to surface, so one bad
/// endpoint never blanks the rest of the page.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub catalog: CatalogIndex,
    pub recommendations: Vec<CategoryGroup>,
    pub preferences: PreferenceSet,
    /// Messages from sections that failed to load, in fetch order.
    pub errors: Vec<String>,
}

impl ApiClient {
    /// Fetch catalog, recommendations, and preferences concurrently.
    /// The three calls are independent; none waits on another's outcome.
    pub async fn snapshot(&self) -> Snapshot {
        let (activities, recommendations, preferences) = tokio::join!(
            self.activities(),
            self.recommendations(),
            self.my_preferences(),
        );

        let mut snapshot = Snapshot::default();

        match activities {
            Ok(groups) => snapshot.catalog = CatalogIndex::build(&groups),
            Err(e) => {
                tracing::warn!("catalog fetch failed: {e}");
                snapshot.errors.push(e.to_string());
            }
        }

        match recommendations {
            Ok(groups) => snapshot.recommendations = groups,
            Err(e) => {
                tracing::warn!("recommendations fetch failed: {e}");
                snapshot.errors.push(e.to_string());
            }
        }

        match preferences {
            Ok(groups) => snapshot.preferences = PreferenceSet::from_groups(&groups),
            Err(e) => {
                tracing::warn!("preferences fetch failed: {e}");
                snapshot.errors.push(e.to_string());
            }
        }

        snapshot
    }
}
