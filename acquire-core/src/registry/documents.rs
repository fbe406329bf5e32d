// General imports
use chrono::{Local, Utc};
use std::sync::Arc;
use tracing::{Level, event};

// mod imports
use crate::error::CoreError;
use crate::model::document::StoredDocument;
use crate::registry::persistence::{DOCUMENTS_KEY, KeyValueStore};

/// Reserved id namespace for seeded documents. User-document ids are
/// timestamp based and can never land in it.
pub const SEED_ID_PREFIX: &str = "seed-";

/// Process-wide collection of policy documents: an immutable seed list
/// merged with user uploads. Constructed once at startup and passed by
/// reference to whatever composes the UI.
pub struct DocumentRegistry {
    seeded: Vec<StoredDocument>,
    user: Vec<StoredDocument>,
    store: Arc<dyn KeyValueStore>,
}

impl DocumentRegistry {
    /// Build the registry, restoring the persisted user subset.
    ///
    /// Unreadable persisted data is logged and treated as empty; a
    /// persisted entry whose id collides with a seeded id is dropped
    /// (seed wins).
    pub fn new(seeded: Vec<StoredDocument>, store: Arc<dyn KeyValueStore>) -> Self {
        let user = match store.get(DOCUMENTS_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<StoredDocument>>(&raw) {
                Ok(documents) => documents
                    .into_iter()
                    .filter(|d| !seeded.iter().any(|s| s.id == d.id))
                    .collect(),
                Err(err) => {
                    event!(
                        Level::WARN,
                        "Could not parse persisted documents, starting empty: {err}"
                    );
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Self {
            seeded,
            user,
            store,
        }
    }

    /// Seeded documents first in seed order, then user uploads in
    /// insertion order.
    pub fn list(&self) -> Vec<StoredDocument> {
        self.seeded.iter().chain(self.user.iter()).cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<StoredDocument> {
        self.seeded
            .iter()
            .chain(self.user.iter())
            .find(|d| d.id == id)
            .cloned()
    }

    /// Register an upload and persist the user subset.
    pub fn add(&mut self, name: &str, size: u64) -> Result<StoredDocument, CoreError> {
        if name.trim().is_empty() {
            return Err(CoreError::Validation(
                "document name is required".to_string(),
            ));
        }
        let document = StoredDocument {
            id: new_document_id()?,
            name: name.to_string(),
            size,
            uploaded_at: Local::now().format("%-m/%-d/%Y").to_string(),
        };
        self.user.push(document.clone());
        self.persist()?;
        event!(Level::INFO, "Added document {} ({size} bytes)", document.id);
        Ok(document)
    }

    /// Remove a user document by id. Seeded documents are immutable, so
    /// a seeded id is a no-op.
    pub fn remove(&mut self, id: &str) -> Result<(), CoreError> {
        if id.starts_with(SEED_ID_PREFIX) {
            return Ok(());
        }
        self.user.retain(|d| d.id != id);
        self.persist()
    }

    /// Serialize the user-only subset under the fixed storage key.
    fn persist(&self) -> Result<(), CoreError> {
        let raw = serde_json::to_string(&self.user)
            .map_err(|err| CoreError::Persistence(err.to_string()))?;
        self.store.set(DOCUMENTS_KEY, &raw)
    }
}

/// Millisecond timestamp plus a random hex suffix.
fn new_document_id() -> Result<String, CoreError> {
    let mut suffix = [0u8; 4];
    getrandom::fill(&mut suffix).map_err(|err| CoreError::Persistence(err.to_string()))?;
    let suffix = suffix
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<String>();
    Ok(format!("{}-{suffix}", Utc::now().timestamp_millis()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::persistence::MemoryStore;
    use anyhow::Result;

    fn seeded() -> Vec<StoredDocument> {
        vec![
            StoredDocument {
                id: "seed-doc-1".to_string(),
                name: "Customer Acquisition Policy v4.2.pdf".to_string(),
                size: 48_213,
                uploaded_at: "1/5/2026".to_string(),
            },
            StoredDocument {
                id: "seed-doc-2".to_string(),
                name: "AML KYC Compliance Manual.pdf".to_string(),
                size: 102_400,
                uploaded_at: "1/5/2026".to_string(),
            },
        ]
    }

    #[test]
    fn test_add_then_list_ordering() -> Result<()> {
        let mut registry = DocumentRegistry::new(seeded(), Arc::new(MemoryStore::default()));
        let a = registry.add("policy-a.pdf", 100)?;
        let b = registry.add("policy-b.pdf", 200)?;
        let listed = registry.list();
        assert_eq!(listed.len(), 4);
        assert_eq!(listed[0].id, "seed-doc-1");
        assert_eq!(listed[1].id, "seed-doc-2");
        assert_eq!(listed[2].id, a.id);
        assert_eq!(listed[3].id, b.id);
        assert!(!a.id.starts_with(SEED_ID_PREFIX));
        assert_ne!(a.id, b.id);
        Ok(())
    }

    #[test]
    fn test_remove_user_document() -> Result<()> {
        let mut registry = DocumentRegistry::new(seeded(), Arc::new(MemoryStore::default()));
        let a = registry.add("policy-a.pdf", 100)?;
        let b = registry.add("policy-b.pdf", 200)?;
        registry.remove(&a.id)?;
        let listed = registry.list();
        assert!(!listed.iter().any(|d| d.id == a.id));
        assert!(listed.iter().any(|d| d.id == b.id));
        Ok(())
    }

    #[test]
    fn test_get_spans_both_subsets() -> Result<()> {
        let mut registry = DocumentRegistry::new(seeded(), Arc::new(MemoryStore::default()));
        let a = registry.add("policy-a.pdf", 100)?;
        assert_eq!(
            registry.get("seed-doc-2").unwrap().name,
            "AML KYC Compliance Manual.pdf"
        );
        assert_eq!(registry.get(&a.id).unwrap().name, "policy-a.pdf");
        assert!(registry.get("missing").is_none());
        Ok(())
    }

    #[test]
    fn test_add_blank_name_is_rejected() {
        let mut registry = DocumentRegistry::new(seeded(), Arc::new(MemoryStore::default()));
        assert!(matches!(
            registry.add("  ", 100),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_remove_seeded_is_noop() -> Result<()> {
        let mut registry = DocumentRegistry::new(seeded(), Arc::new(MemoryStore::default()));
        registry.remove("seed-doc-1")?;
        assert_eq!(registry.list().len(), 2);
        Ok(())
    }

    #[test]
    fn test_persistence_round_trip() -> Result<()> {
        let store = Arc::new(MemoryStore::default());
        let a = {
            let mut registry = DocumentRegistry::new(seeded(), store.clone());
            registry.add("policy-a.pdf", 100)?
        };
        let restored = DocumentRegistry::new(seeded(), store);
        let listed = restored.list();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[2].id, a.id);
        Ok(())
    }

    #[test]
    fn test_corrupt_persisted_data_degrades_to_empty() -> Result<()> {
        let store = Arc::new(MemoryStore::default());
        store.set(DOCUMENTS_KEY, "not json")?;
        let registry = DocumentRegistry::new(seeded(), store);
        assert_eq!(registry.list().len(), 2);
        Ok(())
    }

    #[test]
    fn test_persisted_seed_collision_drops_entry() -> Result<()> {
        let store = Arc::new(MemoryStore::default());
        let stale = vec![StoredDocument {
            id: "seed-doc-1".to_string(),
            name: "stale.pdf".to_string(),
            size: 1,
            uploaded_at: "1/1/2026".to_string(),
        }];
        store.set(DOCUMENTS_KEY, &serde_json::to_string(&stale)?)?;
        let registry = DocumentRegistry::new(seeded(), store);
        let listed = registry.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "Customer Acquisition Policy v4.2.pdf");
        Ok(())
    }
}
