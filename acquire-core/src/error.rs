use thiserror::Error;

/// Failure taxonomy for the dashboard core.
///
/// # Notes
///
/// - No variant is fatal: validation errors surface inline in the form,
///   network errors settle the workflow in its failed state, lookup misses
///   render a not-found view, and persistence errors degrade to an empty
///   user-document list.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Required input is missing; resolved locally, no network call made.
    #[error("{0}")]
    Validation(String),

    /// Transport failure or non-2xx response from the evaluation service.
    #[error("{0}")]
    Network(String),

    /// Evaluation id lookup miss.
    #[error("evaluation {0} not found")]
    NotFound(String),

    /// Persisted document list could not be read or written.
    #[error("document persistence failed: {0}")]
    Persistence(String),
}
