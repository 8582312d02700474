use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

use super::page::ContentPage;
use crate::resolver::PageId;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cache access failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt cache entry: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Durable key-value persistence for fetched pages.
///
/// Entries are whole serialized pages keyed by identifier; writes overwrite,
/// last write wins, and nothing ever expires. Injected into the loader so
/// tests can substitute [`MemoryStore`] for the on-disk store.
pub trait PageStore {
    fn get(&self, id: &PageId) -> Result<Option<ContentPage>, StoreError>;
    fn put(&self, id: &PageId, page: &ContentPage) -> Result<(), StoreError>;
}

/// In-memory store, for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageStore for MemoryStore {
    fn get(&self, id: &PageId) -> Result<Option<ContentPage>, StoreError> {
        let entries = self.entries.lock().unwrap();
        match entries.get(id.as_str()) {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn put(&self, id: &PageId, page: &ContentPage) -> Result<(), StoreError> {
        let raw = serde_json::to_string(page)?;
        self.entries
            .lock()
            .unwrap()
            .insert(id.as_str().to_string(), raw);
        Ok(())
    }
}

/// File-backed store: one `page_<id>.json` per entry under a root directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn entry_path(&self, id: &PageId) -> PathBuf {
        self.root.join(format!("page_{}.json", id))
    }
}

impl PageStore for FileStore {
    fn get(&self, id: &PageId) -> Result<Option<ContentPage>, StoreError> {
        let raw = match fs::read_to_string(self.entry_path(id)) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // A resident but unreadable entry is surfaced, not treated as a miss.
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn put(&self, id: &PageId, page: &ContentPage) -> Result<(), StoreError> {
        let raw = serde_json::to_string(page)?;
        fs::write(self.entry_path(id), raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;

    fn sample_page(id: &PageId) -> ContentPage {
        ContentPage {
            id: id.clone(),
            title: "Photosynthesis".to_string(),
            ordinal: 12,
            body: "Plants convert light energy into chemical energy.".to_string(),
            summary: None,
            explanation: None,
        }
    }

    #[test]
    fn memory_store_round_trips_a_page() {
        let store = MemoryStore::new();
        let id = resolve("/pages/abc123").unwrap();
        let page = sample_page(&id);

        assert!(store.get(&id).unwrap().is_none());
        store.put(&id, &page).unwrap();
        assert_eq!(store.get(&id).unwrap(), Some(page));
    }

    #[test]
    fn memory_store_last_write_wins() {
        let store = MemoryStore::new();
        let id = resolve("/pages/abc123").unwrap();

        let mut page = sample_page(&id);
        store.put(&id, &page).unwrap();
        page.summary = Some("updated".to_string());
        store.put(&id, &page).unwrap();

        assert_eq!(
            store.get(&id).unwrap().unwrap().summary.as_deref(),
            Some("updated")
        );
    }

    #[test]
    fn file_store_round_trips_a_page() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        let id = resolve("/pages/abc123").unwrap();
        let page = sample_page(&id);

        assert!(store.get(&id).unwrap().is_none());
        store.put(&id, &page).unwrap();
        assert_eq!(store.get(&id).unwrap(), Some(page));

        assert!(dir.path().join("page_abc123.json").exists());
    }

    #[test]
    fn file_store_surfaces_corrupt_entries() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        let id = resolve("/pages/abc123").unwrap();

        fs::write(dir.path().join("page_abc123.json"), "not json").unwrap();

        assert!(matches!(store.get(&id), Err(StoreError::Decode(_))));
    }
}
