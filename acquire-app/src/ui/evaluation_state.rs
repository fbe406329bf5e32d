// Dioxus imports
use dioxus::prelude::*;

// General imports
use futures::StreamExt;

// mod imports
use acquire_core::model::evaluation::CompanyInfo;
use acquire_core::model::rubric::{PolicyGrounding, Source};
use acquire_core::workflow::submission::{
    DocumentChoice, SubmissionInput, SubmissionOutcome, SubmissionPhase, SubmissionWorkflow,
};

use super::backend::{evaluation_backend, CONNECTED};
use super::dashboard_state::{EVALUATIONS, SELECTED_EVALUATION};

// Submission state
#[allow(clippy::redundant_closure)]
pub static SUBMISSION: GlobalSignal<SubmissionPhase> = Signal::global(|| SubmissionPhase::Idle);

/// Source preview overlay state, set when a rubric item's source chip
/// is clicked.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewState {
    pub source: Source,
    pub grounding: Option<PolicyGrounding>,
}

#[allow(clippy::redundant_closure)]
pub static PREVIEW: GlobalSignal<Option<PreviewState>> = Signal::global(|| None);

#[derive(Clone, Debug)]
pub struct SubmitEvaluationState {
    pub company_name: String,
    pub website: String,
    pub industry: String,
    pub additional_info: String,
    pub document: Option<DocumentChoice>,
}

/// Drive one submission through the workflow, mirroring each phase into
/// [`SUBMISSION`]. On success the record is registered and selected;
/// when connected the list is also re-fetched so the server copy wins.
pub async fn sync_submission_state(mut rx: UnboundedReceiver<SubmitEvaluationState>) {
    while let Some(request) = rx.next().await {
        let workflow = SubmissionWorkflow::new(evaluation_backend());
        let input = SubmissionInput {
            company_name: request.company_name,
            company_info: CompanyInfo {
                website: request.website,
                industry: request.industry,
                additional_info: request.additional_info,
            },
            document: request.document,
        };
        let outcome = workflow
            .submit(input, |phase| *SUBMISSION.write() = phase.clone())
            .await;
        if let SubmissionOutcome::Succeeded { record, .. } = outcome {
            let id = record.id.clone();
            EVALUATIONS.write().add(record);
            *SELECTED_EVALUATION.write() = Some(id);
            if CONNECTED {
                let backend = evaluation_backend();
                let epoch = EVALUATIONS.write().begin_refresh();
                let fetched = backend.fetch_evaluations().await;
                EVALUATIONS.write().finish_refresh(epoch, fetched);
            }
        }
    }
}
