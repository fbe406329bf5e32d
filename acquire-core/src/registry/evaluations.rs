// General imports
use std::sync::Arc;
use tracing::{Level, event};

// mod imports
use crate::api::EvaluationBackend;
use crate::error::CoreError;
use crate::model::evaluation::EvaluationRecord;

/// Capability toggle for the evaluation registry: seeded demo data plus
/// local submissions, or the list fetched from the external service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryMode {
    Local,
    Connected,
}

/// Process-wide, append-only collection of evaluation records.
///
/// Constructed once at startup and passed by reference. In local mode
/// the listing is user submissions (most recent first) followed by the
/// seeded records; in connected mode it is the latest fetched snapshot.
pub struct EvaluationRegistry {
    mode: RegistryMode,
    seeded: Vec<EvaluationRecord>,
    submitted: Vec<EvaluationRecord>,
    fetched: Vec<EvaluationRecord>,
    backend: Option<Arc<dyn EvaluationBackend>>,
    loading: bool,
    error: Option<String>,
    refresh_epoch: u64,
}

impl EvaluationRegistry {
    pub fn new_local(seeded: Vec<EvaluationRecord>) -> Self {
        Self {
            mode: RegistryMode::Local,
            seeded,
            submitted: Vec::new(),
            fetched: Vec::new(),
            backend: None,
            loading: false,
            error: None,
            refresh_epoch: 0,
        }
    }

    pub fn new_connected(backend: Arc<dyn EvaluationBackend>) -> Self {
        Self {
            mode: RegistryMode::Connected,
            seeded: Vec::new(),
            submitted: Vec::new(),
            fetched: Vec::new(),
            backend: Some(backend),
            loading: false,
            error: None,
            refresh_epoch: 0,
        }
    }

    pub fn mode(&self) -> RegistryMode {
        self.mode
    }

    /// True while a refresh is outstanding.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Message from the most recent failed refresh, cleared on the next
    /// attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn list(&self) -> Vec<EvaluationRecord> {
        match self.mode {
            RegistryMode::Local => self
                .submitted
                .iter()
                .chain(self.seeded.iter())
                .cloned()
                .collect(),
            RegistryMode::Connected => self.fetched.clone(),
        }
    }

    /// Exact-id lookup among the currently listed evaluations.
    pub fn get(&self, id: &str) -> Result<EvaluationRecord, CoreError> {
        let found = match self.mode {
            RegistryMode::Local => self
                .submitted
                .iter()
                .chain(self.seeded.iter())
                .find(|record| record.id == id),
            RegistryMode::Connected => self.fetched.iter().find(|record| record.id == id),
        };
        found
            .cloned()
            .ok_or_else(|| CoreError::NotFound(id.to_string()))
    }

    /// Register a new record. Local mode prepends; connected mode is a
    /// no-op because the caller refreshes after a successful submission.
    pub fn add(&mut self, record: EvaluationRecord) {
        match self.mode {
            RegistryMode::Local => self.submitted.insert(0, record),
            RegistryMode::Connected => {
                event!(Level::DEBUG, "Ignoring add in connected mode, refresh instead");
            }
        }
    }

    /// Start a refresh, returning the epoch to hand back to
    /// [`EvaluationRegistry::finish_refresh`]. Clears the error flag and
    /// raises the loading flag.
    pub fn begin_refresh(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.refresh_epoch += 1;
        self.refresh_epoch
    }

    /// Settle a refresh. A stale epoch (a newer refresh has started
    /// since) is discarded so the last started fetch wins; a failure is
    /// recorded on the error flag instead of propagating.
    pub fn finish_refresh(
        &mut self,
        epoch: u64,
        outcome: Result<Vec<EvaluationRecord>, CoreError>,
    ) {
        if epoch != self.refresh_epoch {
            event!(Level::DEBUG, "Discarding superseded refresh {epoch}");
            return;
        }
        self.loading = false;
        match outcome {
            Ok(evaluations) => self.fetched = evaluations,
            Err(err) => {
                event!(Level::WARN, "Evaluation refresh failed: {err}");
                self.error = Some(err.to_string());
            }
        }
    }

    /// Fetch and replace the list in one step. Local mode is a no-op
    /// (the seeded data is always available). Never returns an error;
    /// failures land on the error flag.
    pub async fn refresh(&mut self) {
        let Some(backend) = self.backend.clone() else {
            return;
        };
        let epoch = self.begin_refresh();
        let outcome = backend.fetch_evaluations().await;
        self.finish_refresh(epoch, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LocalBackend;
    use crate::api::types::RunEvaluationRequest;
    use crate::model::evaluation::CompanyInfo;
    use crate::seed::{generate_fake_evaluation, seeded_evaluations};
    use anyhow::Result;

    #[test]
    fn test_local_listing_order() {
        let mut registry = EvaluationRegistry::new_local(seeded_evaluations());
        let first = generate_fake_evaluation("First Corp", &CompanyInfo::default());
        let second = generate_fake_evaluation("Second Corp", &CompanyInfo::default());
        registry.add(first.clone());
        registry.add(second.clone());
        let listed = registry.list();
        assert_eq!(listed.len(), 17);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
        assert!(listed[2].id.starts_with("seed-"));
    }

    #[test]
    fn test_get_by_id() -> Result<()> {
        let mut registry = EvaluationRegistry::new_local(seeded_evaluations());
        let record = generate_fake_evaluation("Lookup Corp", &CompanyInfo::default());
        registry.add(record.clone());
        assert_eq!(registry.get(&record.id)?.company_name, "Lookup Corp");
        assert!(matches!(
            registry.get("missing"),
            Err(CoreError::NotFound(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_connected_refresh_replaces_list() -> Result<()> {
        let backend = Arc::new(LocalBackend::default());
        backend
            .run_evaluation(&RunEvaluationRequest {
                company_name: "Fetched Corp".to_string(),
                company_info: CompanyInfo::default(),
                policy_rubric_id: "r".to_string(),
            })
            .await?;
        let mut registry = EvaluationRegistry::new_connected(backend);
        assert!(registry.list().is_empty());
        registry.refresh().await;
        assert!(!registry.loading());
        assert!(registry.error().is_none());
        assert_eq!(registry.list().len(), 16);
        assert_eq!(registry.list()[0].company_name, "Fetched Corp");
        Ok(())
    }

    #[test]
    fn test_superseded_refresh_is_discarded() {
        let mut registry = EvaluationRegistry::new_connected(Arc::new(LocalBackend::default()));
        let stale = registry.begin_refresh();
        let current = registry.begin_refresh();
        registry.finish_refresh(
            stale,
            Ok(vec![generate_fake_evaluation(
                "Stale Corp",
                &CompanyInfo::default(),
            )]),
        );
        // The stale response neither lands nor clears the loading flag
        assert!(registry.loading());
        assert!(registry.list().is_empty());
        registry.finish_refresh(current, Ok(Vec::new()));
        assert!(!registry.loading());
    }

    #[test]
    fn test_failed_refresh_sets_error_flag() {
        let mut registry = EvaluationRegistry::new_connected(Arc::new(LocalBackend::default()));
        let epoch = registry.begin_refresh();
        registry.finish_refresh(epoch, Err(CoreError::Network("boom".to_string())));
        assert!(!registry.loading());
        assert_eq!(registry.error(), Some("boom"));
        let epoch = registry.begin_refresh();
        assert!(registry.error().is_none());
        registry.finish_refresh(epoch, Ok(Vec::new()));
    }
}
