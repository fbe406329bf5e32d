// General imports
use serde::{Deserialize, Serialize};

/// Half-open `[start_index, end_index)` byte offsets into an excerpt.
///
/// Offsets must satisfy `0 <= start_index <= end_index <= excerpt.len()`.
/// Intervals are assumed not to overlap once sorted by `start_index`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SourceHighlight {
    pub start_index: usize,
    pub end_index: usize,
}

/// A cited external source supporting a rubric item.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub id: String,
    pub name: String,
    pub url: String,
    pub publisher: String,
    /// ISO-8601 publication date.
    pub published_date: String,
    pub excerpt_text: String,
    pub highlights: Vec<SourceHighlight>,
    #[serde(default)]
    pub page_number: Option<u32>,
}

/// One page of policy-document context.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PolicyPage {
    pub page_number: u32,
    pub content: String,
}

/// Multi-page context around a policy citation.
///
/// `highlight_page_index` must index into `pages`.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedContext {
    pub pages: Vec<PolicyPage>,
    pub highlight_page_index: usize,
}

/// Citation into the user-supplied policy document substantiating a rating.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PolicyGrounding {
    pub document_name: String,
    pub quote: String,
    pub context: String,
    #[serde(default)]
    pub page_number: Option<u32>,
    #[serde(default)]
    pub extended_context: Option<ExtendedContext>,
}

/// One scored evaluation category with its supporting citations.
///
/// # Notes
///
/// - `rating` is an advisory label supplied by the upstream generator and
///   is carried independently of `score`; neither is derived from the
///   other.
/// - `score` is within `[0, 10]` with one decimal of precision.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RubricItem {
    pub category: String,
    pub rating: String,
    pub score: f64,
    pub sources: Vec<Source>,
    #[serde(default)]
    pub policy_grounding: Option<PolicyGrounding>,
}
