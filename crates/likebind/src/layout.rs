#![forbid(unsafe_code)]

//! The profile screen layout.

use likebind_widgets::{Layout, Visibility};

pub const LAYOUT_NAME: &str = "viewmodel_profile";

pub mod ids {
    use likebind_widgets::WidgetId;

    pub const NAME: WidgetId = WidgetId::new("name");
    pub const LAST_NAME: WidgetId = WidgetId::new("lastname");
    pub const IMAGE: WidgetId = WidgetId::new("imageView");
    pub const LIKES: WidgetId = WidgetId::new("likes");
    pub const PROGRESS_BAR: WidgetId = WidgetId::new("progressBar");
    pub const LIKE_BUTTON: WidgetId = WidgetId::new("like_button");
}

/// Profile layout with a progress bar spanning `[0, max]`.
#[must_use]
pub fn profile(max: u32) -> Layout {
    Layout::new(LAYOUT_NAME)
        .image(ids::IMAGE)
        .text(ids::NAME)
        .text(ids::LAST_NAME)
        .text(ids::LIKES)
        .progress(ids::PROGRESS_BAR, max)
        .visibility(Visibility::Gone)
        .button(ids::LIKE_BUTTON, "Like")
}
