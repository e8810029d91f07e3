//! Color themes
//!
//! A [`Theme`] is handed explicitly to grammar construction as the
//! [`StyleTagResolver`], and to renderers to turn tags back into colors.
//! Switching themes means building new grammars against the new theme.

use crate::error::{HighlightError, Result};

use super::style::{Color, Style};
use super::tokens::{StyleTag, StyleTagResolver, TokenClass};

/// The built-in theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
}

impl ThemeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Light => "Light",
            ThemeKind::Dark => "Dark",
        }
    }

    /// Parse a theme name, case-insensitively
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeKind::Light),
            "dark" => Ok(ThemeKind::Dark),
            _ => Err(HighlightError::UnknownTheme(name.to_string())),
        }
    }
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Palette of one style per token class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    kind: ThemeKind,
    styles: [Style; TokenClass::COUNT],
}

impl Theme {
    pub fn light() -> Self {
        Self::from_palette(
            ThemeKind::Light,
            [
                (TokenClass::Comment, rgb(0x8a8a8a)),
                (TokenClass::String, rgb(0x50a14f)),
                (TokenClass::Number, rgb(0x986801)),
                (TokenClass::Keyword, rgb(0x4078f2)),
                (TokenClass::Builtin, rgb(0xc18401)),
                (TokenClass::Definition, rgb(0xc18401)),
                (TokenClass::Directive, rgb(0xa626a4)),
                (TokenClass::Type, rgb(0x0184bc)),
                (TokenClass::Whitespace, rgb(0xd0d0d0)),
            ],
        )
    }

    pub fn dark() -> Self {
        Self::from_palette(
            ThemeKind::Dark,
            [
                (TokenClass::Comment, rgb(0x888888)),
                (TokenClass::String, rgb(0x99ad6a)),
                (TokenClass::Number, rgb(0xcf6a4c)),
                (TokenClass::Keyword, rgb(0x8197bf)),
                (TokenClass::Builtin, rgb(0xfad07a)),
                (TokenClass::Definition, rgb(0xfad07a)),
                (TokenClass::Directive, rgb(0x8fbfdc)),
                (TokenClass::Type, rgb(0xffb964)),
                (TokenClass::Whitespace, rgb(0x262626)),
            ],
        )
    }

    fn from_palette(kind: ThemeKind, palette: [(TokenClass, Color); TokenClass::COUNT]) -> Self {
        let mut styles = [Style::default(); TokenClass::COUNT];
        for (class, color) in palette {
            let mut style = Style::fg(color);
            if class == TokenClass::Comment {
                style = style.with_italic();
            }
            styles[class.index()] = style;
        }
        Self { kind, styles }
    }

    pub fn new(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Light => Self::light(),
            ThemeKind::Dark => Self::dark(),
        }
    }

    /// Look up a theme by name ("Light" or "Dark")
    pub fn named(name: &str) -> Result<Self> {
        ThemeKind::from_name(name).map(Self::new)
    }

    pub fn kind(&self) -> ThemeKind {
        self.kind
    }

    /// Resolve a tag issued by this theme; unknown tags render unstyled
    pub fn style(&self, tag: StyleTag) -> Style {
        self.styles
            .get(usize::from(tag.id()))
            .copied()
            .unwrap_or_default()
    }

    pub fn class_style(&self, class: TokenClass) -> Style {
        self.styles[class.index()]
    }

    /// Override the foreground color of one class
    pub fn set_color(&mut self, class: TokenClass, color: Color) {
        let style = &mut self.styles[class.index()];
        *style = style.with_fg(color);
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl StyleTagResolver for Theme {
    fn tag(&self, class: TokenClass) -> StyleTag {
        StyleTag::new(class.index() as u16)
    }
}
