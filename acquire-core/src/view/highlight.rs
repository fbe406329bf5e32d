// mod imports
use crate::model::rubric::SourceHighlight;

/// A run of excerpt text with uniform emphasis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: false,
        }
    }

    fn marked(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: true,
        }
    }
}

/// Split excerpt text into alternating plain and highlighted runs.
///
/// Offsets are byte indices, half-open, non-overlapping; ranges outside
/// the text are clamped rather than panicking. With no highlights the
/// text falls back to its blank-line paragraphs, all plain.
pub fn segment(text: &str, highlights: &[SourceHighlight]) -> Vec<Segment> {
    if highlights.is_empty() {
        return text
            .split("\n\n")
            .filter(|paragraph| !paragraph.is_empty())
            .map(Segment::plain)
            .collect();
    }
    let mut sorted: Vec<&SourceHighlight> = highlights.iter().collect();
    sorted.sort_by_key(|h| h.start_index);

    let mut segments = Vec::new();
    let mut cursor = 0usize;
    for highlight in sorted {
        let start = highlight.start_index.min(text.len());
        let end = highlight.end_index.min(text.len());
        if start < cursor || end <= start {
            continue;
        }
        if let Some(run) = text.get(cursor..start) {
            if !run.is_empty() {
                segments.push(Segment::plain(run));
            }
        }
        if let Some(run) = text.get(start..end) {
            segments.push(Segment::marked(run));
        }
        cursor = end;
    }
    if let Some(rest) = text.get(cursor..) {
        if !rest.is_empty() {
            segments.push(Segment::plain(rest));
        }
    }
    segments
}

/// Locate `quote` inside page content, as a single highlight over its
/// first occurrence. Absent quotes yield no highlight rather than a
/// guess.
pub fn quote_highlight(content: &str, quote: &str) -> Vec<SourceHighlight> {
    if quote.is_empty() {
        return Vec::new();
    }
    match content.find(quote) {
        Some(start) => vec![SourceHighlight {
            start_index: start,
            end_index: start + quote.len(),
        }],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks(start_index: usize, end_index: usize) -> SourceHighlight {
        SourceHighlight {
            start_index,
            end_index,
        }
    }

    #[test]
    fn test_single_highlight_splits_three_ways() {
        let segments = segment("abcdefghij", &[marks(2, 5)]);
        assert_eq!(
            segments,
            vec![
                Segment::plain("ab"),
                Segment::marked("cde"),
                Segment::plain("fghij"),
            ]
        );
    }

    #[test]
    fn test_concatenation_restores_text() {
        let text = "The committee reviewed the filing.\nNo exceptions were noted.";
        let segments = segment(text, &[marks(4, 13), marks(35, 37)]);
        let rebuilt: String = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_unsorted_highlights_are_ordered() {
        let segments = segment("abcdefghij", &[marks(6, 8), marks(1, 3)]);
        let marked: Vec<&str> = segments
            .iter()
            .filter(|s| s.highlighted)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(marked, vec!["bc", "gh"]);
    }

    #[test]
    fn test_out_of_range_highlight_is_clamped() {
        let segments = segment("abc", &[marks(1, 99)]);
        assert_eq!(segments, vec![Segment::plain("a"), Segment::marked("bc")]);
        // A range entirely past the end degenerates to plain text
        assert_eq!(
            segment("abc", &[marks(50, 60)]),
            vec![Segment::plain("abc")]
        );
    }

    #[test]
    fn test_no_highlights_paragraph_fallback() {
        let segments = segment("First paragraph.\n\nSecond paragraph.", &[]);
        assert_eq!(
            segments,
            vec![
                Segment::plain("First paragraph."),
                Segment::plain("Second paragraph."),
            ]
        );
    }

    #[test]
    fn test_quote_highlight_first_occurrence() {
        let content = "Policy: vendors must rotate keys. Vendors must rotate keys quarterly.";
        let highlights = quote_highlight(content, "must rotate keys");
        assert_eq!(highlights, vec![marks(16, 32)]);
        let segments = segment(content, &highlights);
        assert_eq!(segments[1].text, "must rotate keys");
        assert!(segments[1].highlighted);
    }

    #[test]
    fn test_quote_absent_yields_nothing() {
        assert!(quote_highlight("some content", "missing quote").is_empty());
        assert!(quote_highlight("some content", "").is_empty());
    }
}
