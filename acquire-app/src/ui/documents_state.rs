// Dioxus imports
use dioxus::prelude::*;

// General imports
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// mod imports
use acquire_core::registry::documents::DocumentRegistry;
use acquire_core::registry::persistence::MemoryStore;
use acquire_core::seed::seeded_documents;

use super::backend::{evaluation_backend, CONNECTED};

// Policy document state
pub static DOCUMENTS: GlobalSignal<DocumentRegistry> =
    Signal::global(|| DocumentRegistry::new(seeded_documents(), Arc::new(MemoryStore::default())));
#[allow(clippy::redundant_closure)]
pub static DOCUMENTS_ERROR: GlobalSignal<Option<String>> = Signal::global(|| None);

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddDocumentState {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Register an uploaded policy document, pushing it to the external
/// service first when connected.
pub async fn sync_add_document_state(mut rx: UnboundedReceiver<AddDocumentState>) {
    while let Some(request) = rx.next().await {
        *DOCUMENTS_ERROR.write() = None;
        if CONNECTED {
            let backend = evaluation_backend();
            if let Err(err) = backend
                .upload_document(&request.name, request.bytes.clone())
                .await
            {
                *DOCUMENTS_ERROR.write() = Some(err.to_string());
                continue;
            }
        }
        if let Err(err) = DOCUMENTS
            .write()
            .add(&request.name, request.bytes.len() as u64)
        {
            *DOCUMENTS_ERROR.write() = Some(err.to_string());
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemoveDocumentState {
    pub id: String,
}

pub async fn sync_remove_document_state(mut rx: UnboundedReceiver<RemoveDocumentState>) {
    while let Some(request) = rx.next().await {
        if let Err(err) = DOCUMENTS.write().remove(&request.id) {
            *DOCUMENTS_ERROR.write() = Some(err.to_string());
        }
    }
}
