//! Travel memory storage repository.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use super::model::TravelMemory;
use crate::Result;

/// File name of the memory store inside the data directory.
pub const MEMORY_STORE_FILE: &str = "travel_memories.json";

/// Repository for locally persisted travel memories.
///
/// One flat JSON list, rewritten wholesale on every mutation. The file is
/// removed entirely when the last memory is deleted.
pub struct MemoryStore {
    path: PathBuf,
}

impl MemoryStore {
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
        Ok(Self::new(dir.join(MEMORY_STORE_FILE)))
    }

    /// All stored memories, oldest first.
    ///
    /// A missing store file yields an empty list; unreadable content is
    /// treated as empty and overwritten on the next mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file exists but cannot be read.
    pub fn list(&self) -> Result<Vec<TravelMemory>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&raw) {
            Ok(memories) => Ok(memories),
            Err(err) => {
                warn!(
                    "discarding unreadable memory store {}: {err}",
                    self.path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    /// Insert a new memory or replace the one sharing its id.
    ///
    /// Editing a pin keeps its place in the list; new pins append.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file cannot be written.
    pub fn save(&self, memory: &TravelMemory) -> Result<()> {
        let mut memories = self.list()?;
        match memories.iter_mut().find(|m| m.id == memory.id) {
            Some(existing) => *existing = memory.clone(),
            None => memories.push(memory.clone()),
        }
        self.write(&memories)
    }

    /// Delete the memory with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file cannot be read or written.
    pub fn delete(&self, id: &str) -> Result<()> {
        let memories: Vec<TravelMemory> = self
            .list()?
            .into_iter()
            .filter(|memory| memory.id != id)
            .collect();
        self.write(&memories)
    }

    fn write(&self, memories: &[TravelMemory]) -> Result<()> {
        if memories.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
            return Ok(());
        }
        let json = serde_json::to_string_pretty(memories)?;
        fs::write(&self.path, json)?;
        debug!(
            "wrote {} memory(ies) to {}",
            memories.len(),
            self.path.display()
        );
        Ok(())
    }
}
