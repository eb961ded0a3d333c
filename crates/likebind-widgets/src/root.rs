#![forbid(unsafe_code)]

//! Root of an inflated layout: id lookup over the screen's widgets.

use std::fmt;

use ahash::AHashMap;

use crate::WidgetId;
use crate::view::{Button, ClickListener, ViewKind, ViewNode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("no widget with id `{id}` in layout")]
    MissingWidget { id: WidgetId },
    #[error("widget `{id}` is a {found}, expected {expected}")]
    WrongKind {
        id: WidgetId,
        expected: &'static str,
        found: &'static str,
    },
    #[error("widget id `{id}` declared twice in layout `{layout}`")]
    DuplicateId { id: WidgetId, layout: String },
    #[error("view is borrowed elsewhere, skipped render")]
    ViewBusy,
}

/// The widgets of one screen, in layout order.
#[derive(Debug, Clone)]
pub struct ViewRoot {
    layout: String,
    nodes: Vec<ViewNode>,
    index: AHashMap<WidgetId, usize>,
}

impl ViewRoot {
    pub(crate) fn from_nodes(layout: String, nodes: Vec<ViewNode>) -> Result<Self, ViewError> {
        let mut index = AHashMap::with_capacity(nodes.len());
        for (pos, node) in nodes.iter().enumerate() {
            if index.insert(node.id(), pos).is_some() {
                return Err(ViewError::DuplicateId {
                    id: node.id(),
                    layout,
                });
            }
        }
        Ok(Self {
            layout,
            nodes,
            index,
        })
    }

    /// Name of the layout this root was inflated from.
    #[must_use]
    pub fn layout_name(&self) -> &str {
        &self.layout
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &ViewNode> {
        self.nodes.iter()
    }

    fn node(&self, id: WidgetId) -> Result<&ViewNode, ViewError> {
        self.index
            .get(&id)
            .map(|&pos| &self.nodes[pos])
            .ok_or(ViewError::MissingWidget { id })
    }

    /// The widget `id` viewed as `W`.
    pub fn find<W: ViewKind>(&self, id: WidgetId) -> Result<&W, ViewError> {
        let node = self.node(id)?;
        W::from_node(node).ok_or(ViewError::WrongKind {
            id,
            expected: W::KIND,
            found: node.kind().name(),
        })
    }

    /// Mutable access to the widget `id` viewed as `W`.
    pub fn find_mut<W: ViewKind>(&mut self, id: WidgetId) -> Result<&mut W, ViewError> {
        let pos = *self
            .index
            .get(&id)
            .ok_or(ViewError::MissingWidget { id })?;
        let node = &mut self.nodes[pos];
        let found = node.kind().name();
        W::from_node_mut(node).ok_or(ViewError::WrongKind {
            id,
            expected: W::KIND,
            found,
        })
    }

    /// Check that `id` exists and can be viewed as `W`.
    pub fn ensure<W: ViewKind>(&self, id: WidgetId) -> Result<(), ViewError> {
        self.find::<W>(id).map(|_| ())
    }

    /// The click listener of button `id`, if one is set.
    pub fn click_listener(&self, id: WidgetId) -> Result<Option<ClickListener>, ViewError> {
        Ok(self.find::<Button>(id)?.on_click_listener())
    }
}

impl fmt::Display for ViewRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.layout)?;
        for node in &self.nodes {
            writeln!(f, "  {node}")?;
        }
        Ok(())
    }
}
