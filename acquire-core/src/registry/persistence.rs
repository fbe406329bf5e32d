// General imports
use parking_lot::Mutex;
use std::collections::HashMap;

// mod imports
use crate::error::CoreError;

/// Storage key for the user-uploaded document subset.
pub const DOCUMENTS_KEY: &str = "policyDocuments";

/// String key-value persistence collaborator, scoped to the client
/// process. Browser storage or an in-memory map both fit behind this.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}

/// In-memory store used natively and in tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_memory_store_round_trip() -> Result<()> {
        let store = MemoryStore::default();
        assert_eq!(store.get("k"), None);
        store.set("k", "v")?;
        assert_eq!(store.get("k"), Some("v".to_string()));
        store.remove("k")?;
        assert_eq!(store.get("k"), None);
        Ok(())
    }
}
