//! Message highlight segmentation and styling.
//!
//! The game marks parts of a chat message for emphasis (the target word, the
//! words the AI was not allowed to say) as character-offset ranges. This
//! module turns a message plus a raw, possibly malformed range list into an
//! ordered sequence of typed spans:
//!
//! 1. [`SanitizedRanges::sanitize`] drops out-of-bounds or inverted ranges,
//!    sorts the rest, and merges overlaps.
//! 2. [`segment_message`] splits the text into [`MessageSpan`]s that cover it
//!    exactly once, snapping each highlight start forward past leading
//!    punctuation and whitespace.
//! 3. [`style_spans`] maps the spans to [`StyledSpan`]s via a
//!    [`MessageTheme`] for the rendering layer.

mod range;
mod sanitize;
mod segment;
mod theme;

pub use range::{Highlight, HighlightRange};
pub use sanitize::SanitizedRanges;
pub use segment::{MessageSpan, SpanKind, segment_message, segment_sanitized};
pub use theme::{Author, MessageTheme, StyledSpan, style_spans};
