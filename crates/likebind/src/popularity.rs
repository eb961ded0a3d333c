#![forbid(unsafe_code)]

//! Popularity tiers derived from a like count.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Popularity {
    Normal,
    Popular,
    Star,
}

impl fmt::Display for Popularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Popular => "popular",
            Self::Star => "star",
        })
    }
}

/// Like counts a profile must exceed to reach each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    pub popular_above: u32,
    pub star_above: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            popular_above: 4,
            star_above: 9,
        }
    }
}

impl Thresholds {
    #[must_use]
    pub const fn classify(&self, likes: u32) -> Popularity {
        if likes > self.star_above {
            Popularity::Star
        } else if likes > self.popular_above {
            Popularity::Popular
        } else {
            Popularity::Normal
        }
    }
}
