#![forbid(unsafe_code)]

//! Declarative screen layouts.
//!
//! A [`Layout`] lists a screen's widgets with their static attributes.
//! [`Layout::inflate`] turns it into a fresh [`ViewRoot`]; a layout can be
//! inflated any number of times and each root starts from the declared
//! attributes.

use crate::WidgetId;
use crate::root::{ViewError, ViewRoot};
use crate::view::{Button, ImageView, ProgressBar, TextView, ViewNode, Visibility, WidgetKind};

#[derive(Debug, Clone)]
pub struct Layout {
    name: String,
    nodes: Vec<ViewNode>,
}

impl Layout {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
        }
    }

    #[must_use]
    pub fn text(self, id: WidgetId) -> Self {
        self.push(id, WidgetKind::Text(TextView::default()))
    }

    #[must_use]
    pub fn image(self, id: WidgetId) -> Self {
        self.push(id, WidgetKind::Image(ImageView::default()))
    }

    #[must_use]
    pub fn progress(self, id: WidgetId, max: u32) -> Self {
        self.push(id, WidgetKind::Progress(ProgressBar::new(max)))
    }

    #[must_use]
    pub fn button(self, id: WidgetId, label: impl Into<String>) -> Self {
        self.push(id, WidgetKind::Button(Button::new(label)))
    }

    /// Set the initial visibility of the most recently declared widget.
    #[must_use]
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        if let Some(last) = self.nodes.last_mut() {
            last.set_visibility(visibility);
        }
        self
    }

    fn push(mut self, id: WidgetId, kind: WidgetKind) -> Self {
        self.nodes.push(ViewNode::new(id, kind));
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build a fresh view tree.
    ///
    /// Fails if two widgets share an id.
    pub fn inflate(&self) -> Result<ViewRoot, ViewError> {
        let root = ViewRoot::from_nodes(self.name.clone(), self.nodes.clone())?;
        tracing::debug!(layout = %self.name, widgets = root.len(), "layout inflated");
        Ok(root)
    }
}
