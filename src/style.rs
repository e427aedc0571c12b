//! Text styling with attributes and colors.
//!
//! This module provides the types the rendering layer consumes when mapping
//! message spans and page chrome to visual treatments:
//!
//! - [`TextAttributes`]: Bitflags for bold, italic, underline, etc.
//! - [`Style`]: Complete styling including foreground/background colors
//! - [`StyleBuilder`]: Fluent builder for constructing styles
//!
//! # Examples
//!
//! ```
//! use charade_ui::{Rgba, Style, TextAttributes};
//!
//! // Quick style creation
//! let nickname = Style::fg(Rgba::WHITE).with_bold();
//!
//! // Builder pattern for complex styles
//! let highlight = Style::builder()
//!     .fg(Rgba::from_hex("#ffd700").unwrap())
//!     .bg(Rgba::from_hex("#1a1a2e").unwrap())
//!     .bold()
//!     .build();
//!
//! // Merge styles (overlay takes precedence)
//! let combined = Style::bold().merge(Style::fg(Rgba::from_hex("#f00").unwrap()));
//! ```

use crate::color::Rgba;
use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes (bold, italic, underline, etc.).
    ///
    /// Attributes are represented as bitflags and can be combined using
    /// bitwise OR. The rendering layer translates them to the equivalent
    /// CSS properties.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased weight.
        const BOLD          = 0x01;
        /// Dim/reduced opacity.
        const DIM           = 0x02;
        /// Italic text.
        const ITALIC        = 0x04;
        /// Underlined text.
        const UNDERLINE     = 0x08;
        /// Strikethrough text.
        const STRIKETHROUGH = 0x10;
    }
}

impl TextAttributes {
    /// Merge attributes by OR-ing the flags of both sides.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self::from_bits_retain(self.bits() | other.bits())
    }
}

/// Complete text style including colors and attributes.
///
/// Styles are immutable and cheap to copy. Use the builder methods to create
/// modified versions, or [`Style::merge`] to combine multiple styles.
///
/// `None` for colors means "inherit the surrounding page style" rather than
/// a specific color, so styled spans respect the page theme.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Style {
    /// Foreground color (None = inherit).
    pub fg: Option<Rgba>,
    /// Background color (None = inherit).
    pub bg: Option<Rgba>,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Empty style with no colors or attributes.
    pub const NONE: Self = Self {
        fg: None,
        bg: None,
        attributes: TextAttributes::empty(),
    };

    /// Create a new style builder.
    #[must_use]
    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }

    /// Create a style with only foreground color.
    #[must_use]
    pub const fn fg(color: Rgba) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a style with only background color.
    #[must_use]
    pub const fn bg(color: Rgba) -> Self {
        Self {
            fg: None,
            bg: Some(color),
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a bold style.
    #[must_use]
    pub const fn bold() -> Self {
        Self {
            fg: None,
            bg: None,
            attributes: TextAttributes::BOLD,
        }
    }

    /// Create a dim style.
    #[must_use]
    pub const fn dim() -> Self {
        Self {
            fg: None,
            bg: None,
            attributes: TextAttributes::DIM,
        }
    }

    /// Create an underline style.
    #[must_use]
    pub const fn underline() -> Self {
        Self {
            fg: None,
            bg: None,
            attributes: TextAttributes::UNDERLINE,
        }
    }

    /// Return a new style with the specified foreground color.
    #[must_use]
    pub const fn with_fg(self, color: Rgba) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified background color.
    #[must_use]
    pub const fn with_bg(self, color: Rgba) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified attributes added.
    #[must_use]
    pub const fn with_attributes(self, attrs: TextAttributes) -> Self {
        Self {
            attributes: self.attributes.merge(attrs),
            ..self
        }
    }

    /// Return a new style with the bold attribute added.
    #[must_use]
    pub const fn with_bold(self) -> Self {
        self.with_attributes(TextAttributes::BOLD)
    }

    /// Return a new style with the dim attribute added.
    #[must_use]
    pub const fn with_dim(self) -> Self {
        self.with_attributes(TextAttributes::DIM)
    }

    /// Return a new style with the underline attribute added.
    #[must_use]
    pub const fn with_underline(self) -> Self {
        self.with_attributes(TextAttributes::UNDERLINE)
    }

    /// Check if this style has any non-default properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }

    /// Merge two styles, with `other` taking precedence for set values.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attributes: self.attributes.merge(other.attributes),
        }
    }
}

/// Builder for creating styles fluently.
#[derive(Clone, Debug, Default)]
pub struct StyleBuilder {
    style: Style,
}

impl StyleBuilder {
    /// Set foreground color.
    #[must_use]
    pub fn fg(mut self, color: Rgba) -> Self {
        self.style.fg = Some(color);
        self
    }

    /// Set background color.
    #[must_use]
    pub fn bg(mut self, color: Rgba) -> Self {
        self.style.bg = Some(color);
        self
    }

    /// Add bold attribute.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.style.attributes |= TextAttributes::BOLD;
        self
    }

    /// Add dim attribute.
    #[must_use]
    pub fn dim(mut self) -> Self {
        self.style.attributes |= TextAttributes::DIM;
        self
    }

    /// Add italic attribute.
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.style.attributes |= TextAttributes::ITALIC;
        self
    }

    /// Add underline attribute.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.style.attributes |= TextAttributes::UNDERLINE;
        self
    }

    /// Add strikethrough attribute.
    #[must_use]
    pub fn strikethrough(mut self) -> Self {
        self.style.attributes |= TextAttributes::STRIKETHROUGH;
        self
    }

    /// Build the final style.
    #[must_use]
    pub fn build(self) -> Style {
        self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_builder() {
        let style = Style::builder()
            .fg(Rgba::BLACK)
            .bg(Rgba::WHITE)
            .bold()
            .underline()
            .build();

        assert_eq!(style.fg, Some(Rgba::BLACK));
        assert_eq!(style.bg, Some(Rgba::WHITE));
        assert!(style.attributes.contains(TextAttributes::BOLD));
        assert!(style.attributes.contains(TextAttributes::UNDERLINE));
    }

    #[test]
    fn test_style_merge() {
        let base = Style::fg(Rgba::WHITE).with_bold();
        let overlay = Style::bg(Rgba::BLACK).with_underline();

        let merged = base.merge(overlay);

        assert_eq!(merged.fg, Some(Rgba::WHITE));
        assert_eq!(merged.bg, Some(Rgba::BLACK));
        assert!(merged.attributes.contains(TextAttributes::BOLD));
        assert!(merged.attributes.contains(TextAttributes::UNDERLINE));
    }

    #[test]
    fn test_merge_overlay_wins_on_conflict() {
        let base = Style::fg(Rgba::WHITE);
        let overlay = Style::fg(Rgba::BLACK);
        assert_eq!(base.merge(overlay).fg, Some(Rgba::BLACK));
    }

    #[test]
    fn test_const_styles() {
        assert!(Style::bold().attributes.contains(TextAttributes::BOLD));
        assert!(Style::dim().attributes.contains(TextAttributes::DIM));
        assert!(
            Style::underline()
                .attributes
                .contains(TextAttributes::UNDERLINE)
        );
        assert!(Style::NONE.is_empty());
    }
}
