//! Trip plan storage repository.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use super::model::TripPlan;
use crate::Result;

/// File name of the trip plan store inside the data directory.
pub const TRIP_STORE_FILE: &str = "trip_plans.json";

/// Repository for locally persisted trip plans.
///
/// The store is one JSON array rewritten wholesale on every mutation. That
/// is acceptable for the record counts a single user produces, and there is
/// never a concurrent writer, so the consistency model is plain
/// last-writer-wins. All operations complete before returning.
pub struct TripStore {
    path: PathBuf,
}

impl TripStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store inside the default data directory, creating the
    /// directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open_default() -> Result<Self> {
        let dir = crate::config::data_dir();
        fs::create_dir_all(&dir)?;
        Ok(Self::new(dir.join(TRIP_STORE_FILE)))
    }

    /// Append a plan to the store.
    ///
    /// Save is insert-only: saving a plan whose id is already present
    /// appends a second copy rather than replacing the first. Generated ids
    /// make that unreachable in practice.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file cannot be written.
    pub fn save(&self, plan: &TripPlan) -> Result<()> {
        let mut plans = self.list()?;
        plans.push(plan.clone());
        self.write(&plans)
    }

    /// All stored plans, oldest first.
    ///
    /// A missing store file yields an empty list. Unreadable content is
    /// treated as an empty store and overwritten on the next mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file exists but cannot be read.
    pub fn list(&self) -> Result<Vec<TripPlan>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&raw) {
            Ok(plans) => Ok(plans),
            Err(err) => {
                warn!(
                    "discarding unreadable trip store {}: {err}",
                    self.path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    /// Look up a plan by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file exists but cannot be read.
    pub fn get_by_id(&self, id: &str) -> Result<Option<TripPlan>> {
        Ok(self.list()?.into_iter().find(|plan| plan.id == id))
    }

    /// Delete every plan with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file cannot be read or written.
    pub fn delete_by_id(&self, id: &str) -> Result<()> {
        let plans: Vec<TripPlan> = self
            .list()?
            .into_iter()
            .filter(|plan| plan.id != id)
            .collect();
        self.write(&plans)
    }

    fn write(&self, plans: &[TripPlan]) -> Result<()> {
        let json = serde_json::to_string_pretty(plans)?;
        fs::write(&self.path, json)?;
        debug!("wrote {} plan(s) to {}", plans.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::trip::model::PlanDetails;
    use chrono::Utc;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> TripStore {
        TripStore::new(dir.path().join(TRIP_STORE_FILE))
    }

    fn plan(id: &str) -> TripPlan {
        let mut details = PlanDetails::default();
        details.trip_summary.origin = "Mumbai".to_string();
        details.trip_summary.destination = "Goa".to_string();
        TripPlan::from_details(id, Utc::now(), details)
    }

    #[test]
    fn list_is_empty_without_store_file() {
        let dir = TempDir::new().unwrap();
        assert!(store(&dir).list().unwrap().is_empty());
    }

    #[test]
    fn save_then_get_returns_equal_record() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let saved = plan("trip_1_abcdefghi");

        store.save(&saved).unwrap();
        let loaded = store.get_by_id("trip_1_abcdefghi").unwrap().unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn get_missing_id_is_none() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.save(&plan("trip_1_abcdefghi")).unwrap();
        assert!(store.get_by_id("trip_2_jklmnopqr").unwrap().is_none());
    }

    #[test]
    fn save_preserves_insertion_order() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.save(&plan("trip_1_aaaaaaaaa")).unwrap();
        store.save(&plan("trip_2_bbbbbbbbb")).unwrap();

        let ids: Vec<String> = store.list().unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["trip_1_aaaaaaaaa", "trip_2_bbbbbbbbb"]);
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.save(&plan("trip_1_aaaaaaaaa")).unwrap();
        store.save(&plan("trip_2_bbbbbbbbb")).unwrap();

        store.delete_by_id("trip_1_aaaaaaaaa").unwrap();
        assert!(store.get_by_id("trip_1_aaaaaaaaa").unwrap().is_none());
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn delete_missing_id_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.save(&plan("trip_1_aaaaaaaaa")).unwrap();
        store.delete_by_id("trip_9_zzzzzzzzz").unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn duplicate_ids_both_persist() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.save(&plan("trip_1_aaaaaaaaa")).unwrap();
        store.save(&plan("trip_1_aaaaaaaaa")).unwrap();
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn corrupt_store_resets_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TRIP_STORE_FILE);
        std::fs::write(&path, "not json at all").unwrap();

        let store = TripStore::new(&path);
        assert!(store.list().unwrap().is_empty());

        // The next mutation overwrites the bad file.
        store.save(&plan("trip_1_aaaaaaaaa")).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
    }
}
