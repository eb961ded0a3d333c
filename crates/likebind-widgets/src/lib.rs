#![forbid(unsafe_code)]

//! Headless widgets for likebind screens.
//!
//! Widgets here are a property surface (text, tint, drawable, visibility,
//! progress, click listener) rather than pixels. A [`Layout`] is inflated
//! into a [`ViewRoot`], and a [`RenderBindings`] registry pushes values
//! derived from some state into the widgets it names.

pub mod bindings;
pub mod layout;
pub mod root;
pub mod view;

pub use bindings::RenderBindings;
pub use layout::Layout;
pub use root::{ViewError, ViewRoot};
pub use view::{
    Button, ClickListener, DrawableRes, ImageView, ProgressBar, TextView, ViewKind, ViewNode,
    Visibility, WidgetKind,
};

use std::fmt;

/// Identifier of a widget within one inflated layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(&'static str);

impl WidgetId {
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
