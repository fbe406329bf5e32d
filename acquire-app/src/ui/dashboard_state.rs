// Dioxus imports
use dioxus::prelude::*;

// General imports
use futures::StreamExt;
use serde::{Deserialize, Serialize};

// mod imports
use acquire_core::registry::evaluations::EvaluationRegistry;
use acquire_core::seed::seeded_evaluations;
use acquire_core::view::pipeline::ListQuery;

use super::backend::{evaluation_backend, CONNECTED};

// Evaluation list state
pub static EVALUATIONS: GlobalSignal<EvaluationRegistry> = Signal::global(new_registry);
pub static QUERY: GlobalSignal<ListQuery> = Signal::global(ListQuery::default);
#[allow(clippy::redundant_closure)]
pub static SELECTED_EVALUATION: GlobalSignal<Option<String>> = Signal::global(|| None);

fn new_registry() -> EvaluationRegistry {
    if CONNECTED {
        EvaluationRegistry::new_connected(evaluation_backend())
    } else {
        EvaluationRegistry::new_local(seeded_evaluations())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RefreshEvaluationsState {}

/// Replace the evaluation list with a fresh fetch. The write lock is
/// never held across the await; a refresh that is overtaken by a newer
/// one is discarded inside the registry.
pub async fn sync_evaluations_state(mut rx: UnboundedReceiver<RefreshEvaluationsState>) {
    while let Some(_request) = rx.next().await {
        let backend = evaluation_backend();
        let epoch = EVALUATIONS.write().begin_refresh();
        let outcome = backend.fetch_evaluations().await;
        EVALUATIONS.write().finish_refresh(epoch, outcome);
    }
}
