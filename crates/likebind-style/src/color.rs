#![forbid(unsafe_code)]

//! Packed colors and tint lists.

use std::fmt;
use std::str::FromStr;

/// A color packed as `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba(pub u32);

impl Rgba {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self(0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a() == 255
    }

    /// Parse `#RRGGBB` or `#AARRGGBB` (alpha first, as resource files write it).
    ///
    /// The leading `#` is optional.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input.trim().strip_prefix('#').unwrap_or(input.trim());
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(input.to_owned()));
        }
        let value = match digits.len() {
            6 | 8 => u32::from_str_radix(digits, 16)
                .map_err(|_| ColorParseError::InvalidDigit(input.to_owned()))?,
            len => {
                return Err(ColorParseError::InvalidLength {
                    input: input.to_owned(),
                    len,
                });
            }
        };
        if digits.len() == 6 {
            Ok(Self((value << 8) | 0xFF))
        } else {
            // AARRGGBB -> RRGGBBAA
            Ok(Self(value.rotate_left(8)))
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r(), self.g(), self.b())
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.a(),
                self.r(),
                self.g(),
                self.b()
            )
        }
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgba {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgba {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("color {input:?} has {len} hex digits, expected 6 or 8")]
    InvalidLength { input: String, len: usize },
    #[error("color {0:?} contains a non-hex digit")]
    InvalidDigit(String),
}

/// Tint applied to a widget's drawable or progress track.
///
/// Widgets here have no pressed/disabled states, so a tint list carries a
/// single default color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TintList {
    default_color: Rgba,
}

impl TintList {
    /// A tint list resolving to `color` in every state.
    #[must_use]
    pub const fn value_of(color: Rgba) -> Self {
        Self {
            default_color: color,
        }
    }

    #[must_use]
    pub const fn default_color(&self) -> Rgba {
        self.default_color
    }
}

impl fmt::Display for TintList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.default_color, f)
    }
}
