//! Message themes: mapping spans to visual styles.
//!
//! Normal and highlighted spans get two distinct treatments; the highlight
//! treatment additionally depends on who authored the message, so the
//! player's guesses and the AI's clues stay visually distinct in the chat.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::highlight::segment::{MessageSpan, SpanKind};
use crate::style::Style;

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Author {
    /// The AI giving clues.
    Ai,
    /// The player guessing.
    Player,
}

/// A message theme that maps span kinds and authors to styles.
#[derive(Clone, Debug)]
pub struct MessageTheme {
    name: String,
    normal: Style,
    normal_faded: Style,
    ai_highlight: Style,
    player_highlight: Style,
}

impl MessageTheme {
    /// The standard theme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            normal: Style::fg(Rgba::WHITE),
            normal_faded: Style::fg(Rgba::WHITE.with_alpha(0.6)),
            ai_highlight: Style::fg(Rgba::WHITE).with_bg(Rgba::from_rgb_u8(34, 197, 94)),
            player_highlight: Style::fg(Rgba::from_rgb_u8(250, 204, 21)).with_bg(Rgba::BLACK),
        }
    }

    /// The neon dark-mode theme.
    #[must_use]
    pub fn dark() -> Self {
        let neon_green = Rgba::from_rgb_u8(57, 255, 20);
        let neon_gray = Rgba::from_rgb_u8(43, 43, 43);
        let neon_yellow = Rgba::from_rgb_u8(255, 255, 51);
        let neon_white = Rgba::from_rgb_u8(248, 248, 255);
        Self {
            name: "dark".to_string(),
            normal: Style::fg(neon_white),
            normal_faded: Style::fg(neon_white.with_alpha(0.6)),
            ai_highlight: Style::fg(neon_gray).with_bg(neon_green),
            player_highlight: Style::fg(neon_yellow).with_bg(neon_gray),
        }
    }

    /// Theme name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve the style for a span.
    #[must_use]
    pub const fn style_for(&self, kind: SpanKind, author: Author, faded: bool) -> Style {
        match kind {
            SpanKind::Normal => {
                if faded {
                    self.normal_faded
                } else {
                    self.normal
                }
            }
            SpanKind::Highlighted => match author {
                Author::Ai => self.ai_highlight,
                Author::Player => self.player_highlight,
            },
        }
    }

    /// Builder-style normal style setter.
    #[must_use]
    pub fn with_normal(mut self, style: Style) -> Self {
        self.normal = style;
        self
    }

    /// Builder-style faded normal style setter.
    #[must_use]
    pub fn with_normal_faded(mut self, style: Style) -> Self {
        self.normal_faded = style;
        self
    }

    /// Builder-style highlight style setter for one author.
    #[must_use]
    pub fn with_highlight(mut self, author: Author, style: Style) -> Self {
        match author {
            Author::Ai => self.ai_highlight = style,
            Author::Player => self.player_highlight = style,
        }
        self
    }

    /// Set an author's highlight background from an embedder-supplied hex
    /// string, keeping the existing foreground.
    pub fn with_highlight_bg_hex(self, author: Author, hex: &str) -> Result<Self> {
        let color =
            Rgba::from_hex(hex).ok_or_else(|| Error::InvalidColor(hex.to_string()))?;
        let updated = self.style_for(SpanKind::Highlighted, author, false).with_bg(color);
        Ok(self.with_highlight(author, updated))
    }
}

impl Default for MessageTheme {
    fn default() -> Self {
        Self::light()
    }
}

/// A span paired with its resolved style, ready for the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyledSpan<'a> {
    pub text: &'a str,
    pub style: Style,
}

/// Resolve styles for a segmented message.
///
/// Pure mapping; the partition produced by segmentation is preserved
/// span-for-span.
#[must_use]
pub fn style_spans<'a>(
    spans: &[MessageSpan<'a>],
    theme: &MessageTheme,
    author: Author,
    faded: bool,
) -> Vec<StyledSpan<'a>> {
    spans
        .iter()
        .map(|span| StyledSpan {
            text: span.text,
            style: theme.style_for(span.kind, author, faded),
        })
        .collect()
}
