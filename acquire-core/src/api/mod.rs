pub mod client;
pub mod local;
pub mod types;

pub use client::{EvaluationBackend, HttpBackend};
pub use local::LocalBackend;
