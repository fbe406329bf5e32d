// General imports
use serde::{Deserialize, Serialize};
use serde_json::Value;

// mod imports
use crate::model::evaluation::{CompanyInfo, EvaluationRecord, Scores};

/// `POST /documents/upload` response.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct UploadDocumentResponse {
    pub document_id: String,
    pub chunk_count: u32,
}

/// `POST /rubrics/generate` request.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct GenerateRubricRequest {
    pub doc_ids: Vec<String>,
    pub purpose: String,
    pub target_entity_type: String,
}

/// `POST /rubrics/generate` response. The rubric body is opaque to the
/// dashboard; only its id is carried forward.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct GenerateRubricResponse {
    pub rubric_id: String,
    #[serde(default)]
    pub rubric: Value,
    pub run_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct PolicyRubricMeta {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rubric: Value,
    pub created_at: String,
}

/// `POST /policy-rubrics/upload` response.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct PolicyRubricUploadResponse {
    #[serde(rename = "policyRubric")]
    pub policy_rubric: PolicyRubricMeta,
    pub duration_ms: u64,
}

/// `POST /evaluations` request.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct RunEvaluationRequest {
    pub company_name: String,
    pub company_info: CompanyInfo,
    pub policy_rubric_id: String,
}

/// `POST /evaluations` response.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct RunEvaluationResponse {
    pub success: bool,
    pub evaluation_id: String,
    pub scores: Scores,
    pub duration_ms: u64,
}

/// `GET /evaluations` response.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct ListEvaluationsResponse {
    #[serde(default)]
    pub evaluations: Vec<EvaluationRecord>,
}

/// `GET /evaluations/:id` response.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct GetEvaluationResponse {
    pub evaluation: EvaluationRecord,
}

/// Error body shape attempted on every non-2xx response.
#[derive(Clone, Debug, Deserialize, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_upload_response_wire_shape() -> Result<()> {
        let parsed: UploadDocumentResponse =
            serde_json::from_str(r#"{"document_id": "doc-1", "chunk_count": 12}"#)?;
        assert_eq!(parsed.document_id, "doc-1");
        assert_eq!(parsed.chunk_count, 12);
        Ok(())
    }

    #[test]
    fn test_list_response_missing_field_defaults_empty() -> Result<()> {
        let parsed: ListEvaluationsResponse = serde_json::from_str("{}")?;
        assert!(parsed.evaluations.is_empty());
        Ok(())
    }

    #[test]
    fn test_error_body_tolerates_unknown_shape() -> Result<()> {
        let parsed: ApiErrorBody = serde_json::from_str(r#"{"detail": "nope"}"#)?;
        assert_eq!(parsed.error, None);
        let parsed: ApiErrorBody = serde_json::from_str(r#"{"error": "bad rubric"}"#)?;
        assert_eq!(parsed.error.as_deref(), Some("bad rubric"));
        Ok(())
    }
}
