//! Scroll-position memory for panel content areas.
//!
//! Panel contents are scrollable regions that get resized and re-rendered
//! on every relayout; their scroll offsets survive through a small string
//! key-value store keyed by panel id. The store trait is the persistence
//! boundary (the host may back it with cookies, local storage, a file).

use std::collections::HashMap;

use panelkit_common::PanelId;
use tracing::warn;

/// String key-value persistence with last-write-wins semantics.
pub trait StateStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and single-session use.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// Remembers and restores per-panel scroll offsets across relayouts.
#[derive(Debug, Default)]
pub struct ScrollMemory<S: StateStore> {
    store: S,
}

impl<S: StateStore> ScrollMemory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Record the current scroll offset of a panel. Panels without an id
    /// have nowhere to keep state and are skipped.
    pub fn remember(&mut self, id: &PanelId, offset: f64) {
        if id.is_empty() {
            return;
        }
        self.store.set(id.as_str(), &offset.to_string());
    }

    /// The last remembered offset for a panel, if one parses.
    pub fn restore(&self, id: &PanelId) -> Option<f64> {
        if id.is_empty() {
            return None;
        }
        let raw = self.store.get(id.as_str())?;
        match raw.parse() {
            Ok(offset) => Some(offset),
            Err(_) => {
                warn!("stored scroll offset for '{id}' is not a number: {raw:?}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remember_then_restore() {
        let mut memory = ScrollMemory::new(MemoryStore::new());
        let id = PanelId::from("ClipboardPanel");
        memory.remember(&id, 142.0);
        assert_eq!(memory.restore(&id), Some(142.0));
    }

    #[test]
    fn unknown_panel_restores_nothing() {
        let memory = ScrollMemory::new(MemoryStore::new());
        assert_eq!(memory.restore(&PanelId::from("TreePanel")), None);
    }

    #[test]
    fn empty_id_is_skipped() {
        let mut memory = ScrollMemory::new(MemoryStore::new());
        let id = PanelId::new("");
        memory.remember(&id, 10.0);
        assert_eq!(memory.restore(&id), None);
        assert!(memory.into_store().is_empty());
    }

    #[test]
    fn later_offset_overwrites_earlier() {
        let mut memory = ScrollMemory::new(MemoryStore::new());
        let id = PanelId::from("SearchPanel");
        memory.remember(&id, 5.0);
        memory.remember(&id, 75.5);
        assert_eq!(memory.restore(&id), Some(75.5));
    }

    #[test]
    fn garbage_in_store_restores_nothing() {
        let mut store = MemoryStore::new();
        store.set("TreePanel", "not-a-number");
        let memory = ScrollMemory::new(store);
        assert_eq!(memory.restore(&PanelId::from("TreePanel")), None);
    }
}
