// General imports
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use tracing::{Level, event};

// mod imports
use crate::error::CoreError;
use crate::model::evaluation::EvaluationRecord;

use super::types::{
    ApiErrorBody, GenerateRubricRequest, GenerateRubricResponse, GetEvaluationResponse,
    ListEvaluationsResponse, PolicyRubricUploadResponse, RunEvaluationRequest,
    RunEvaluationResponse, UploadDocumentResponse,
};

/// Seam to the external service that parses documents, generates rubrics
/// and scores evaluations. The dashboard only consumes its typed output.
///
/// Futures are not required to be `Send`: the core runs on the
/// single-threaded, event-driven client runtime.
#[async_trait(?Send)]
pub trait EvaluationBackend {
    async fn upload_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadDocumentResponse, CoreError>;

    async fn generate_rubric(
        &self,
        request: &GenerateRubricRequest,
    ) -> Result<GenerateRubricResponse, CoreError>;

    async fn upload_policy_rubric(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        name: Option<&str>,
    ) -> Result<PolicyRubricUploadResponse, CoreError>;

    async fn run_evaluation(
        &self,
        request: &RunEvaluationRequest,
    ) -> Result<RunEvaluationResponse, CoreError>;

    async fn fetch_evaluations(&self) -> Result<Vec<EvaluationRecord>, CoreError>;

    async fn fetch_evaluation(&self, id: &str) -> Result<EvaluationRecord, CoreError>;
}

/// HTTP client for the evaluation service, addressed through a
/// deployment-configured base path.
pub struct HttpBackend {
    base: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Decode a response, mapping any non-2xx status to a
    /// [`CoreError::Network`] carrying the server-supplied `error`
    /// message or a generic "`what` failed (status)" fallback.
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        what: &str,
    ) -> Result<T, CoreError> {
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => None,
            }
            .unwrap_or_else(|| format!("{what} failed ({})", status.as_u16()));
            event!(Level::WARN, "{what} returned {status}: {message}");
            return Err(CoreError::Network(message));
        }
        response
            .json::<T>()
            .await
            .map_err(|err| CoreError::Network(err.to_string()))
    }
}

#[async_trait(?Send)]
impl EvaluationBackend for HttpBackend {
    async fn upload_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadDocumentResponse, CoreError> {
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name.to_string()));
        let response = self
            .client
            .post(format!("{}/documents/upload", self.base))
            .multipart(form)
            .send()
            .await
            .map_err(|err| CoreError::Network(err.to_string()))?;
        Self::decode(response, "Upload").await
    }

    async fn generate_rubric(
        &self,
        request: &GenerateRubricRequest,
    ) -> Result<GenerateRubricResponse, CoreError> {
        let response = self
            .client
            .post(format!("{}/rubrics/generate", self.base))
            .json(request)
            .send()
            .await
            .map_err(|err| CoreError::Network(err.to_string()))?;
        Self::decode(response, "Rubric generation").await
    }

    async fn upload_policy_rubric(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        name: Option<&str>,
    ) -> Result<PolicyRubricUploadResponse, CoreError> {
        let mut form =
            Form::new().part("file", Part::bytes(bytes).file_name(file_name.to_string()));
        if let Some(name) = name {
            form = form.text("name", name.to_string());
        }
        let response = self
            .client
            .post(format!("{}/policy-rubrics/upload", self.base))
            .multipart(form)
            .send()
            .await
            .map_err(|err| CoreError::Network(err.to_string()))?;
        Self::decode(response, "Policy upload").await
    }

    async fn run_evaluation(
        &self,
        request: &RunEvaluationRequest,
    ) -> Result<RunEvaluationResponse, CoreError> {
        let response = self
            .client
            .post(format!("{}/evaluations", self.base))
            .json(request)
            .send()
            .await
            .map_err(|err| CoreError::Network(err.to_string()))?;
        Self::decode(response, "Evaluation").await
    }

    async fn fetch_evaluations(&self) -> Result<Vec<EvaluationRecord>, CoreError> {
        let response = self
            .client
            .get(format!("{}/evaluations", self.base))
            .send()
            .await
            .map_err(|err| CoreError::Network(err.to_string()))?;
        let body: ListEvaluationsResponse = Self::decode(response, "Evaluation fetch").await?;
        Ok(body.evaluations)
    }

    async fn fetch_evaluation(&self, id: &str) -> Result<EvaluationRecord, CoreError> {
        let response = self
            .client
            .get(format!("{}/evaluations/{id}", self.base))
            .send()
            .await
            .map_err(|err| CoreError::Network(err.to_string()))?;
        let body: GetEvaluationResponse = Self::decode(response, "Evaluation fetch").await?;
        Ok(body.evaluation)
    }
}
