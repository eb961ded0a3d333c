#![forbid(unsafe_code)]

//! Color and theme types for likebind.
//!
//! This crate provides:
//! - [`Rgba`] packed colors with `#RRGGBB` / `#AARRGGBB` parsing
//! - [`TintList`] for tinting image and progress widgets
//! - [`Theme`] and [`Palette`] for the colors a screen resolves at bind time

pub mod color;
pub mod theme;

pub use color::{ColorParseError, Rgba, TintList};
pub use theme::{Palette, Theme};
