//! Highlight range types.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A raw highlight request over a message, as supplied by the caller.
///
/// This is the wire type: offsets arrive from the game logic as plain
/// integers and may be negative, inverted, or past the end of the text.
/// [`SanitizedRanges::sanitize`](crate::highlight::SanitizedRanges::sanitize)
/// turns a list of these into validated [`HighlightRange`] values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Char offset of the highlight start (inclusive).
    pub start: i64,
    /// Char offset of the highlight end (exclusive).
    pub end: i64,
}

impl Highlight {
    /// Create a new raw highlight request.
    #[must_use]
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

/// A validated half-open char range into a message.
///
/// Invariant: `start < end`, and `end` does not exceed the char count of the
/// text the range was sanitized against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HighlightRange {
    pub start: usize,
    pub end: usize,
}

impl HighlightRange {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "highlight range must be start <= end");
        Self { start, end }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<HighlightRange> for Highlight {
    fn from(range: HighlightRange) -> Self {
        Self {
            start: range.start as i64,
            end: range.end as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Highlight, HighlightRange};

    #[test]
    fn range_construction_and_accessors() {
        let sample = HighlightRange::new(2, 8);
        assert_eq!(sample.start, 2);
        assert_eq!(sample.end, 8);
        assert_eq!(sample.len(), 6);
        assert!(!sample.is_empty());
        assert_eq!(sample.range(), 2..8);
    }

    #[test]
    fn range_empty() {
        let sample = HighlightRange::new(5, 5);
        assert_eq!(sample.len(), 0);
        assert!(sample.is_empty());
    }

    #[test]
    fn raw_highlight_from_validated_range() {
        let raw: Highlight = HighlightRange::new(1, 4).into();
        assert_eq!(raw, Highlight::new(1, 4));
    }

    #[test]
    fn raw_highlight_wire_format() {
        let raw = Highlight::new(-1, 3);
        let json = serde_json::to_string(&raw).unwrap();
        assert_eq!(json, r#"{"start":-1,"end":3}"#);

        let back: Highlight = serde_json::from_str(&json).unwrap();
        assert_eq!(back, raw);
    }
}
