//! Core state and derived-view logic for the Acquire risk-evaluation
//! dashboard: the document and evaluation registries, the rubric scoring
//! and aggregation rules, the submission workflow, and the pure projection
//! pipeline that feeds the company table.
//!
//! Everything in this crate is UI-free. The front end composes these
//! services at startup and passes them by reference; the external
//! evaluation service is reached through the [`api::EvaluationBackend`]
//! seam so that the same workflow runs against the HTTP backend or the
//! offline stand-in.

pub mod api;
pub mod error;
pub mod model;
pub mod registry;
pub mod scoring;
pub mod seed;
pub mod view;
pub mod workflow;

pub use error::CoreError;
