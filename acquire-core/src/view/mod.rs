pub mod highlight;
pub mod pipeline;
