// General imports
use serde::{Deserialize, Serialize};

// mod imports
use super::rubric::RubricItem;

/// Company metadata captured on submission.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct CompanyInfo {
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default, rename = "additionalInfo")]
    pub additional_info: String,
}

/// Lifecycle of an evaluation run on the external service.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationStatus {
    #[default]
    Pending,
    Running,
    Completed,
    Failed,
}

/// Scored rubric items grouped by concern class.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RubricResults {
    pub your_policy_concerns: Vec<RubricItem>,
    pub general_policy_concerns: Vec<RubricItem>,
}

/// Aggregated scores persisted with an evaluation result.
///
/// `your_policy_avg` and `general_policy_avg` are the one-decimal means of
/// the respective rubric groups; `final_score` is the one-decimal mean of
/// the two averages, `0` when both groups are empty.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub your_policy_avg: f64,
    pub general_policy_avg: f64,
    pub final_score: f64,
    pub recommendation: String,
}

/// One completed scoring pass over the rubric.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct EvaluationResult {
    pub id: String,
    pub rubric_results: RubricResults,
    pub scores: Scores,
    pub created_at: String,
}

/// An evaluation submission and its results. Append-only once registered.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct EvaluationRecord {
    pub id: String,
    pub company_name: String,
    pub company_info: CompanyInfo,
    pub policy_rubric_id: String,
    pub status: EvaluationStatus,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    #[serde(default)]
    pub completed_at: Option<String>,
    /// Zero or one result in practice.
    #[serde(default)]
    pub evaluation_results: Vec<EvaluationResult>,
}

impl EvaluationRecord {
    /// The latest (in practice, only) result.
    pub fn result(&self) -> Option<&EvaluationResult> {
        self.evaluation_results.first()
    }

    /// Aggregated scores, absent while the evaluation is in flight.
    pub fn scores(&self) -> Option<&Scores> {
        self.result().map(|r| &r.scores)
    }

    /// Number of rubric categories scored across both concern groups.
    pub fn categories_scored(&self) -> usize {
        self.result()
            .map(|r| {
                r.rubric_results.your_policy_concerns.len()
                    + r.rubric_results.general_policy_concerns.len()
            })
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_record_wire_shape() -> Result<()> {
        let json = r#"{
            "id": "eval-1",
            "company_name": "Acme Corporation",
            "company_info": {"website": "https://acme.com", "industry": "Technology", "additionalInfo": ""},
            "policy_rubric_id": "rubric-1",
            "status": "completed",
            "created_at": "2026-02-05T12:00:00Z",
            "completed_at": null,
            "evaluation_results": [{
                "id": "result-1",
                "rubric_results": {"yourPolicyConcerns": [], "generalPolicyConcerns": []},
                "scores": {"yourPolicyAvg": 7.0, "generalPolicyAvg": 9.0, "finalScore": 8.0, "recommendation": "ok"},
                "created_at": "2026-02-05T12:00:00Z"
            }]
        }"#;
        let record: EvaluationRecord = serde_json::from_str(json)?;
        assert_eq!(record.status, EvaluationStatus::Completed);
        assert_eq!(record.company_info.industry, "Technology");
        assert_eq!(record.scores().unwrap().final_score, 8.0);
        assert_eq!(record.categories_scored(), 0);
        Ok(())
    }

    #[test]
    fn test_record_without_results() -> Result<()> {
        let json = r#"{
            "id": "eval-2",
            "company_name": "Acme",
            "company_info": {},
            "policy_rubric_id": "rubric-2",
            "status": "running",
            "created_at": "2026-02-05T12:00:00Z"
        }"#;
        let record: EvaluationRecord = serde_json::from_str(json)?;
        assert_eq!(record.status, EvaluationStatus::Running);
        assert!(record.scores().is_none());
        Ok(())
    }
}
