pub mod aggregate;
pub mod rating;
