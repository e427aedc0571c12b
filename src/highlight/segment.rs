//! Message segmentation.
//!
//! Splits a message into an ordered sequence of normal and highlighted spans
//! that partition the text exactly: concatenating the spans reproduces the
//! message, with no gaps or overlaps. Invoked fresh per render; both
//! functions are pure.

use crate::highlight::range::Highlight;
use crate::highlight::sanitize::SanitizedRanges;
use serde::Serialize;

/// Kind of a message span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    /// Rendered in the message's base style.
    Normal,
    /// Rendered with the emphasis treatment.
    Highlighted,
}

/// A contiguous, typed slice of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MessageSpan<'a> {
    pub kind: SpanKind,
    pub text: &'a str,
}

impl<'a> MessageSpan<'a> {
    #[must_use]
    pub const fn normal(text: &'a str) -> Self {
        Self {
            kind: SpanKind::Normal,
            text,
        }
    }

    #[must_use]
    pub const fn highlighted(text: &'a str) -> Self {
        Self {
            kind: SpanKind::Highlighted,
            text,
        }
    }

    #[must_use]
    pub const fn is_highlighted(&self) -> bool {
        matches!(self.kind, SpanKind::Highlighted)
    }
}

/// Word characters are letters, digits, or underscore; a highlight never
/// starts on anything else.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Segment a message using an already-sanitized range set.
///
/// `ranges` must have been produced by sanitizing against this same text;
/// the segmenter relies on the sanitization invariant and performs no
/// validation of its own.
///
/// Each highlight start is snapped forward past leading non-word characters
/// (bounded by the range end), so a highlight never begins mid-punctuation.
/// An empty range set yields a single normal span covering the whole text,
/// including the empty-text case.
#[must_use]
pub fn segment_sanitized<'a>(text: &'a str, ranges: &SanitizedRanges) -> Vec<MessageSpan<'a>> {
    if ranges.is_empty() {
        return vec![MessageSpan::normal(text)];
    }

    // Byte offset of every char, with one-past-the-end sentinel.
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain([text.len()])
        .collect();
    let char_len = offsets.len() - 1;
    debug_assert!(
        ranges.as_slice().last().is_none_or(|r| r.end <= char_len),
        "ranges must be sanitized against this text"
    );

    let mut spans = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut pos = 0;

    for range in ranges {
        let mut boundary = range.start;
        while boundary < range.end {
            let ch = text[offsets[boundary]..offsets[boundary + 1]].chars().next();
            match ch {
                Some(c) if !is_word_char(c) => boundary += 1,
                _ => break,
            }
        }

        if boundary > pos {
            spans.push(MessageSpan::normal(&text[offsets[pos]..offsets[boundary]]));
        }
        spans.push(MessageSpan::highlighted(
            &text[offsets[boundary]..offsets[range.end]],
        ));
        pos = range.end;
    }

    if pos < char_len {
        spans.push(MessageSpan::normal(&text[offsets[pos]..]));
    }

    spans
}

/// Segment a message with a raw, possibly malformed highlight list.
///
/// This is the operation the rendering layer calls per message: sanitize,
/// then segment. Never fails; bad ranges degrade to fewer highlights.
#[must_use]
pub fn segment_message<'a>(text: &'a str, highlights: &[Highlight]) -> Vec<MessageSpan<'a>> {
    let sanitized = SanitizedRanges::sanitize(text.chars().count(), highlights);
    segment_sanitized(text, &sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(i64, i64)]) -> Vec<Highlight> {
        pairs.iter().map(|&(s, e)| Highlight::new(s, e)).collect()
    }

    fn concat(spans: &[MessageSpan<'_>]) -> String {
        spans.iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_end_to_end_example() {
        let spans = segment_message("the quick fox", &raw(&[(4, 9)]));
        assert_eq!(
            spans,
            vec![
                MessageSpan::normal("the "),
                MessageSpan::highlighted("quick"),
                MessageSpan::normal(" fox"),
            ]
        );
    }

    #[test]
    fn test_empty_ranges_single_normal_span() {
        let spans = segment_message("hello world", &[]);
        assert_eq!(spans, vec![MessageSpan::normal("hello world")]);
    }

    #[test]
    fn test_empty_text_empty_ranges() {
        // One empty normal span; renderers always get at least one part.
        let spans = segment_message("", &[]);
        assert_eq!(spans, vec![MessageSpan::normal("")]);
    }

    #[test]
    fn test_boundary_snaps_past_leading_spaces() {
        let spans = segment_message("  hello", &raw(&[(0, 7)]));
        assert_eq!(
            spans,
            vec![MessageSpan::normal("  "), MessageSpan::highlighted("hello")]
        );
    }

    #[test]
    fn test_boundary_snaps_past_punctuation() {
        let spans = segment_message("say: word!", &raw(&[(3, 9)]));
        assert_eq!(
            spans,
            vec![
                MessageSpan::normal("say: "),
                MessageSpan::highlighted("word"),
                MessageSpan::normal("!"),
            ]
        );
    }

    #[test]
    fn test_underscore_is_a_word_char() {
        let spans = segment_message("a _tag here", &raw(&[(2, 6)]));
        assert_eq!(
            spans,
            vec![
                MessageSpan::normal("a "),
                MessageSpan::highlighted("_tag"),
                MessageSpan::normal(" here"),
            ]
        );
    }

    #[test]
    fn test_punctuation_only_range_stops_at_end() {
        // Snap loop must terminate at the range end, not read past it.
        let spans = segment_message("ab---cd", &raw(&[(2, 5)]));
        assert_eq!(concat(&spans), "ab---cd");
        assert_eq!(
            spans,
            vec![
                MessageSpan::normal("ab---"),
                MessageSpan::highlighted(""),
                MessageSpan::normal("cd"),
            ]
        );
    }

    #[test]
    fn test_highlight_at_message_start() {
        let spans = segment_message("word after", &raw(&[(0, 4)]));
        assert_eq!(
            spans,
            vec![
                MessageSpan::highlighted("word"),
                MessageSpan::normal(" after"),
            ]
        );
    }

    #[test]
    fn test_highlight_to_message_end() {
        let spans = segment_message("the word", &raw(&[(4, 8)]));
        assert_eq!(
            spans,
            vec![MessageSpan::normal("the "), MessageSpan::highlighted("word")]
        );
    }

    #[test]
    fn test_whole_message_highlighted() {
        let spans = segment_message("word", &raw(&[(0, 4)]));
        assert_eq!(spans, vec![MessageSpan::highlighted("word")]);
    }

    #[test]
    fn test_multiple_highlights() {
        let spans = segment_message("one two three", &raw(&[(0, 3), (8, 13)]));
        assert_eq!(
            spans,
            vec![
                MessageSpan::highlighted("one"),
                MessageSpan::normal(" two "),
                MessageSpan::highlighted("three"),
            ]
        );
    }

    #[test]
    fn test_offsets_are_char_offsets() {
        // Multi-byte chars: offsets count chars, not bytes.
        let spans = segment_message("héllo wörld", &raw(&[(6, 11)]));
        assert_eq!(
            spans,
            vec![
                MessageSpan::normal("héllo "),
                MessageSpan::highlighted("wörld"),
            ]
        );
    }

    #[test]
    fn test_malformed_ranges_degrade_gracefully() {
        let spans = segment_message("hello world", &raw(&[(20, 30), (6, 11)]));
        assert_eq!(
            spans,
            vec![
                MessageSpan::normal("hello "),
                MessageSpan::highlighted("world"),
            ]
        );
        assert_eq!(concat(&spans), "hello world");
    }

    #[test]
    fn test_span_wire_format() {
        let span = MessageSpan::highlighted("word");
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, r#"{"kind":"highlighted","text":"word"}"#);
    }
}
