#![forbid(unsafe_code)]

//! Theme attributes and the fixed color palette of a screen.

use crate::color::Rgba;

/// Default color for [`Palette::popular`].
pub const POPULAR: Rgba = Rgba::rgb(0xFF, 0x98, 0x00);
/// Default color for [`Palette::star`].
pub const STAR: Rgba = Rgba::rgb(0xF4, 0x43, 0x36);

/// Theme attributes resolved at bind time.
///
/// Attributes are optional: a theme that does not define one falls back to
/// the value the caller supplies, the way styled-attribute lookups do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Theme {
    pub foreground: Option<Rgba>,
}

impl Theme {
    #[must_use]
    pub const fn new() -> Self {
        Self { foreground: None }
    }

    #[must_use]
    pub const fn with_foreground(mut self, color: Rgba) -> Self {
        self.foreground = Some(color);
        self
    }

    /// The theme's foreground color, or `fallback` when it is not defined.
    #[must_use]
    pub fn color_foreground(&self, fallback: Rgba) -> Rgba {
        match self.foreground {
            Some(color) => color,
            None => {
                tracing::debug!(%fallback, "theme defines no foreground, using fallback");
                fallback
            }
        }
    }
}

/// Named colors a screen refers to by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Palette {
    pub popular: Rgba,
    pub star: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            popular: POPULAR,
            star: STAR,
        }
    }
}
