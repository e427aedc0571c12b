//! Highlight sanitization.
//!
//! Callers hand the renderer whatever range list the game logic produced;
//! a malformed highlight must degrade to fewer or merged highlights, never
//! crash the message render. Sanitization therefore drops invalid ranges
//! silently instead of returning errors.

use crate::highlight::range::{Highlight, HighlightRange};

/// An ordered set of non-overlapping highlight ranges.
///
/// Invariant: ranges are ascending and disjoint — for adjacent elements,
/// `ranges[i].end <= ranges[i + 1].start`. The only way to obtain one is
/// [`SanitizedRanges::sanitize`], so the segmenter can rely on the invariant
/// without re-checking it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SanitizedRanges(Vec<HighlightRange>);

impl SanitizedRanges {
    /// Normalize a raw highlight list against a text of `char_len` chars.
    ///
    /// - Ranges with a negative offset, `start >= end`, or `end > char_len`
    ///   are dropped entirely, not clamped.
    /// - Remaining ranges are sorted ascending by start.
    /// - Ranges that overlap or touch are merged into one.
    #[must_use]
    pub fn sanitize(char_len: usize, raw: &[Highlight]) -> Self {
        let mut ranges: Vec<HighlightRange> = raw
            .iter()
            .filter_map(|h| {
                let start = usize::try_from(h.start).ok()?;
                let end = usize::try_from(h.end).ok()?;
                (start < end && end <= char_len).then(|| HighlightRange::new(start, end))
            })
            .collect();

        ranges.sort_unstable_by_key(|r| (r.start, r.end));

        let mut merged: Vec<HighlightRange> = Vec::with_capacity(ranges.len());
        for range in ranges {
            match merged.last_mut() {
                Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
                _ => merged.push(range),
            }
        }

        Self(merged)
    }

    /// The sanitized ranges, ascending and disjoint.
    #[must_use]
    pub fn as_slice(&self) -> &[HighlightRange] {
        &self.0
    }

    /// Iterate over the sanitized ranges.
    pub fn iter(&self) -> impl Iterator<Item = &HighlightRange> {
        self.0.iter()
    }

    /// Number of sanitized ranges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no highlight survived sanitization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a SanitizedRanges {
    type Item = &'a HighlightRange;
    type IntoIter = std::slice::Iter<'a, HighlightRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
