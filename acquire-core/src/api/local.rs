// General imports
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use parking_lot::Mutex;
use serde_json::json;
use tracing::{Level, event};

// mod imports
use crate::error::CoreError;
use crate::model::evaluation::EvaluationRecord;
use crate::seed::{generate_fake_evaluation, seeded_evaluations};

use super::client::EvaluationBackend;
use super::types::{
    GenerateRubricRequest, GenerateRubricResponse, PolicyRubricMeta, PolicyRubricUploadResponse,
    RunEvaluationRequest, RunEvaluationResponse, UploadDocumentResponse,
};

/// Offline stand-in for the evaluation service, backed by the seed
/// generator. Lets the whole submission workflow and registry run
/// without a deployment; also used as the backend double in tests.
#[derive(Default)]
pub struct LocalBackend {
    submitted: Mutex<Vec<EvaluationRecord>>,
}

#[async_trait(?Send)]
impl EvaluationBackend for LocalBackend {
    async fn upload_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadDocumentResponse, CoreError> {
        event!(Level::INFO, "Locally accepting document {file_name}");
        Ok(UploadDocumentResponse {
            document_id: format!("local-doc-{file_name}"),
            chunk_count: (bytes.len() / 2000 + 1) as u32,
        })
    }

    async fn generate_rubric(
        &self,
        request: &GenerateRubricRequest,
    ) -> Result<GenerateRubricResponse, CoreError> {
        let doc_ids = request.doc_ids.join(",");
        Ok(GenerateRubricResponse {
            rubric_id: format!("local-rubric-{doc_ids}"),
            rubric: json!({}),
            run_id: format!("local-run-{doc_ids}"),
        })
    }

    async fn upload_policy_rubric(
        &self,
        file_name: &str,
        _bytes: Vec<u8>,
        name: Option<&str>,
    ) -> Result<PolicyRubricUploadResponse, CoreError> {
        Ok(PolicyRubricUploadResponse {
            policy_rubric: PolicyRubricMeta {
                id: format!("local-rubric-{file_name}"),
                name: name.unwrap_or(file_name).to_string(),
                rubric: json!({}),
                created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            },
            duration_ms: 0,
        })
    }

    async fn run_evaluation(
        &self,
        request: &RunEvaluationRequest,
    ) -> Result<RunEvaluationResponse, CoreError> {
        let record = generate_fake_evaluation(&request.company_name, &request.company_info);
        let scores = record
            .scores()
            .cloned()
            .ok_or_else(|| CoreError::Network("generated record had no scores".to_string()))?;
        let evaluation_id = record.id.clone();
        self.submitted.lock().insert(0, record);
        Ok(RunEvaluationResponse {
            success: true,
            evaluation_id,
            scores,
            duration_ms: 0,
        })
    }

    async fn fetch_evaluations(&self) -> Result<Vec<EvaluationRecord>, CoreError> {
        let mut evaluations = self.submitted.lock().clone();
        evaluations.extend(seeded_evaluations());
        Ok(evaluations)
    }

    async fn fetch_evaluation(&self, id: &str) -> Result<EvaluationRecord, CoreError> {
        self.fetch_evaluations()
            .await?
            .into_iter()
            .find(|record| record.id == id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use crate::model::evaluation::CompanyInfo;

    #[tokio::test]
    async fn test_run_then_fetch_round_trip() -> Result<()> {
        let backend = LocalBackend::default();
        let response = backend
            .run_evaluation(&RunEvaluationRequest {
                company_name: "Acme Corporation".to_string(),
                company_info: CompanyInfo::default(),
                policy_rubric_id: "local-rubric-x".to_string(),
            })
            .await?;
        assert!(response.success);
        let record = backend.fetch_evaluation(&response.evaluation_id).await?;
        assert_eq!(record.company_name, "Acme Corporation");
        assert_eq!(record.scores().unwrap(), &response.scores);
        Ok(())
    }

    #[tokio::test]
    async fn test_submitted_precede_seeded() -> Result<()> {
        let backend = LocalBackend::default();
        backend
            .run_evaluation(&RunEvaluationRequest {
                company_name: "Acme".to_string(),
                company_info: CompanyInfo::default(),
                policy_rubric_id: "r".to_string(),
            })
            .await?;
        let all = backend.fetch_evaluations().await?;
        assert_eq!(all.len(), 16);
        assert_eq!(all[0].company_name, "Acme");
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_unknown_id_is_not_found() {
        let backend = LocalBackend::default();
        let err = backend.fetch_evaluation("missing").await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }
}
