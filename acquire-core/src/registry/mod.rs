pub mod documents;
pub mod evaluations;
pub mod persistence;
