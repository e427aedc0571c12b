//! `charade_ui` - Presentation core for a browser-based word-guessing game
//!
//! The game logic and the rendering layer live in the embedder; this crate
//! owns everything in between: splitting chat messages into normal and
//! highlighted spans, mapping spans to styles, resolving document titles
//! and metadata per route, and deriving the header's user panel from cached
//! session state.
//!
//! The heart of the crate is [`segment_message`]: given a message and a raw
//! list of highlight ranges, it returns typed spans that cover the text
//! exactly once, with highlight starts snapped past leading punctuation.
//! Malformed ranges are sanitized away rather than surfaced as errors, so a
//! bad highlight can never take a message render down with it.

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow HighlightRange etc
#![allow(clippy::missing_errors_doc)] // Error conditions documented in prose
#![allow(clippy::missing_panics_doc)] // No panicking paths in non-test code
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::cast_possible_truncation)] // Intentional color component casts
#![allow(clippy::cast_sign_loss)] // Intentional color component casts
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod color;
pub mod error;
pub mod event;
pub mod highlight;
pub mod page;
pub mod session;
pub mod style;

// Re-export core types at crate root
pub use color::Rgba;
pub use error::{Error, Result};
pub use event::{
    EventBus, GameEvent, LogLevel, Subscription, emit_log, set_log_callback,
};
pub use highlight::{
    Author, Highlight, HighlightRange, MessageSpan, MessageTheme, SanitizedRanges, SpanKind,
    StyledSpan, segment_message, segment_sanitized, style_spans,
};
pub use page::{
    Badge, BadgeAnchor, MetaKey, MetaTag, PageConfig, Route, TitleTracker, meta_tags, page_title,
};
pub use session::{
    MemorySession, SessionStore, User, UserPanel, resolve_user, sign_out, user_panel,
};
pub use style::{Style, StyleBuilder, TextAttributes};
