// General imports
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{Level, event};

// mod imports
use crate::api::EvaluationBackend;
use crate::api::types::{GenerateRubricRequest, RunEvaluationRequest};
use crate::error::CoreError;
use crate::model::evaluation::{CompanyInfo, EvaluationRecord};

/// Purpose string sent with rubric generation for a stored document.
const EVALUATION_PURPOSE: &str = "company risk evaluation";
const TARGET_ENTITY_TYPE: &str = "company";

pub const MISSING_COMPANY_NAME: &str = "Company name is required";
pub const MISSING_DOCUMENT: &str = "Select a stored policy document or upload a new file";

/// The policy document backing a submission: a fresh upload or a
/// reference to a document already in the registry.
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentChoice {
    Upload { file_name: String, bytes: Vec<u8> },
    Stored { document_id: String },
}

/// Inputs collected by the submission form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionInput {
    pub company_name: String,
    pub company_info: CompanyInfo,
    pub document: Option<DocumentChoice>,
}

/// Observable state of one submit-evaluation sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionPhase {
    Idle,
    Validating,
    Uploading,
    Scoring,
    Succeeded {
        evaluation_id: String,
        categories_scored: usize,
    },
    Failed {
        message: String,
    },
}

impl SubmissionPhase {
    /// Human-readable progress line for the submission form.
    pub fn message(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Validating => "Checking the submission...".to_string(),
            Self::Uploading => "Uploading policy and generating the rubric...".to_string(),
            Self::Scoring => "Running the evaluation...".to_string(),
            Self::Succeeded {
                categories_scored, ..
            } => format!("Evaluation complete: {categories_scored} rubric categories scored"),
            Self::Failed { message } => message.clone(),
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Succeeded { .. } | Self::Failed { .. })
    }
}

/// How a submission ended.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionOutcome {
    /// The scored record, ready to register, plus the summary count.
    Succeeded {
        record: EvaluationRecord,
        categories_scored: usize,
    },
    Failed {
        message: String,
    },
    /// A newer submission started before this one settled; its results
    /// were discarded.
    Superseded,
}

/// Orchestrates the submit-new-evaluation sequence:
/// `Idle -> Validating -> Uploading -> Scoring -> Succeeded | Failed`.
///
/// # Notes
///
/// - Validation failures settle immediately with no network call.
/// - Steps are strictly sequential within one submission; overlapping
///   submissions each run to completion, but only the most recently
///   started one may deliver a result (stale results are discarded, not
///   aborted).
/// - No automatic retry; the caller resubmits from `Idle`.
pub struct SubmissionWorkflow {
    backend: Arc<dyn EvaluationBackend>,
    active: Arc<AtomicU64>,
}

impl SubmissionWorkflow {
    pub fn new(backend: Arc<dyn EvaluationBackend>) -> Self {
        Self {
            backend,
            active: Arc::new(AtomicU64::new(0)),
        }
    }

    fn is_stale(&self, token: u64) -> bool {
        self.active.load(Ordering::SeqCst) != token
    }

    /// Run one submission, reporting each phase transition through
    /// `on_phase`.
    pub async fn submit<F>(&self, input: SubmissionInput, mut on_phase: F) -> SubmissionOutcome
    where
        F: FnMut(&SubmissionPhase),
    {
        let token = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        on_phase(&SubmissionPhase::Validating);

        if input.company_name.trim().is_empty() {
            let phase = SubmissionPhase::Failed {
                message: MISSING_COMPANY_NAME.to_string(),
            };
            on_phase(&phase);
            return SubmissionOutcome::Failed {
                message: MISSING_COMPANY_NAME.to_string(),
            };
        }
        let Some(document) = input.document else {
            let phase = SubmissionPhase::Failed {
                message: MISSING_DOCUMENT.to_string(),
            };
            on_phase(&phase);
            return SubmissionOutcome::Failed {
                message: MISSING_DOCUMENT.to_string(),
            };
        };

        on_phase(&SubmissionPhase::Uploading);
        let rubric_id = match self.obtain_rubric(document).await {
            Ok(rubric_id) => rubric_id,
            Err(err) => return self.fail_or_discard(token, err, &mut on_phase),
        };
        if self.is_stale(token) {
            return SubmissionOutcome::Superseded;
        }

        on_phase(&SubmissionPhase::Scoring);
        let request = RunEvaluationRequest {
            company_name: input.company_name.clone(),
            company_info: input.company_info.clone(),
            policy_rubric_id: rubric_id,
        };
        let response = match self.backend.run_evaluation(&request).await {
            Ok(response) => response,
            Err(err) => return self.fail_or_discard(token, err, &mut on_phase),
        };
        let record = match self.backend.fetch_evaluation(&response.evaluation_id).await {
            Ok(record) => record,
            Err(err) => return self.fail_or_discard(token, err, &mut on_phase),
        };
        if self.is_stale(token) {
            return SubmissionOutcome::Superseded;
        }

        let categories_scored = record.categories_scored();
        event!(
            Level::INFO,
            "Evaluation {} scored {categories_scored} categories",
            record.id
        );
        on_phase(&SubmissionPhase::Succeeded {
            evaluation_id: record.id.clone(),
            categories_scored,
        });
        SubmissionOutcome::Succeeded {
            record,
            categories_scored,
        }
    }

    /// Resolve the policy rubric id for the chosen document.
    async fn obtain_rubric(&self, document: DocumentChoice) -> Result<String, CoreError> {
        match document {
            DocumentChoice::Upload { file_name, bytes } => {
                let response = self
                    .backend
                    .upload_policy_rubric(&file_name, bytes, None)
                    .await?;
                Ok(response.policy_rubric.id)
            }
            DocumentChoice::Stored { document_id } => {
                let response = self
                    .backend
                    .generate_rubric(&GenerateRubricRequest {
                        doc_ids: vec![document_id],
                        purpose: EVALUATION_PURPOSE.to_string(),
                        target_entity_type: TARGET_ENTITY_TYPE.to_string(),
                    })
                    .await?;
                Ok(response.rubric_id)
            }
        }
    }

    fn fail_or_discard<F>(&self, token: u64, err: CoreError, on_phase: &mut F) -> SubmissionOutcome
    where
        F: FnMut(&SubmissionPhase),
    {
        if self.is_stale(token) {
            return SubmissionOutcome::Superseded;
        }
        let message = err.to_string();
        event!(Level::WARN, "Submission failed: {message}");
        on_phase(&SubmissionPhase::Failed {
            message: message.clone(),
        });
        SubmissionOutcome::Failed { message }
    }
}
