#![forbid(unsafe_code)]

//! Widget property surface.
//!
//! Every widget lives in a [`ViewNode`] carrying the properties common to
//! all views (id, visibility). The kind-specific properties live in
//! [`WidgetKind`]. [`ViewKind`] gives typed access to either level, so a
//! binding can target "any view" for visibility or a `ProgressBar` for its
//! progress.

use std::fmt;
use std::rc::Rc;

use likebind_style::TintList;

use crate::WidgetId;

/// Whether a view is drawn and whether it takes layout space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Visible,
    /// Not drawn, still occupies space.
    Invisible,
    /// Not drawn, takes no space.
    Gone,
}

impl Visibility {
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Invisible => "invisible",
            Self::Gone => "gone",
        }
    }
}

/// Name of a bundled drawable resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawableRes(pub &'static str);

impl fmt::Display for DrawableRes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextView {
    text: String,
}

impl TextView {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageView {
    drawable: Option<DrawableRes>,
    tint: Option<TintList>,
}

impl ImageView {
    #[must_use]
    pub fn drawable(&self) -> Option<DrawableRes> {
        self.drawable
    }

    #[must_use]
    pub fn image_tint_list(&self) -> Option<TintList> {
        self.tint
    }

    pub fn set_image_drawable(&mut self, drawable: Option<DrawableRes>) {
        self.drawable = drawable;
    }

    pub fn set_image_tint_list(&mut self, tint: Option<TintList>) {
        self.tint = tint;
    }
}

/// Horizontal progress bar over `[0, max]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressBar {
    progress: u32,
    max: u32,
    tint: Option<TintList>,
}

impl ProgressBar {
    #[must_use]
    pub fn new(max: u32) -> Self {
        Self {
            progress: 0,
            max,
            tint: None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> u32 {
        self.progress
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    #[must_use]
    pub fn progress_tint_list(&self) -> Option<TintList> {
        self.tint
    }

    /// Set the progress, clamped to `[0, max]`.
    pub fn set_progress(&mut self, progress: u32) {
        self.progress = progress.min(self.max);
    }

    pub fn set_progress_tint_list(&mut self, tint: Option<TintList>) {
        self.tint = tint;
    }
}

/// Callback run when a view is tapped.
pub type ClickListener = Rc<dyn Fn()>;

#[derive(Clone, Default)]
pub struct Button {
    label: String,
    on_click: Option<ClickListener>,
}

impl Button {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_click: None,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_on_click_listener(&mut self, listener: impl Fn() + 'static) {
        self.on_click = Some(Rc::new(listener));
    }

    #[must_use]
    pub fn has_on_click_listener(&self) -> bool {
        self.on_click.is_some()
    }

    /// The current listener, cloned so it can run without borrowing the view.
    #[must_use]
    pub fn on_click_listener(&self) -> Option<ClickListener> {
        self.on_click.clone()
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub enum WidgetKind {
    Text(TextView),
    Image(ImageView),
    Progress(ProgressBar),
    Button(Button),
}

impl WidgetKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Text(_) => TextView::KIND,
            Self::Image(_) => ImageView::KIND,
            Self::Progress(_) => ProgressBar::KIND,
            Self::Button(_) => Button::KIND,
        }
    }
}

/// A widget in an inflated layout.
#[derive(Debug, Clone)]
pub struct ViewNode {
    id: WidgetId,
    visibility: Visibility,
    kind: WidgetKind,
}

impl ViewNode {
    #[must_use]
    pub fn new(id: WidgetId, kind: WidgetKind) -> Self {
        Self {
            id,
            visibility: Visibility::Visible,
            kind,
        }
    }

    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    #[must_use]
    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }
}

/// Typed access to a [`ViewNode`] or the widget inside it.
pub trait ViewKind: 'static {
    /// Kind name used in errors and dumps.
    const KIND: &'static str;

    fn from_node(node: &ViewNode) -> Option<&Self>;

    fn from_node_mut(node: &mut ViewNode) -> Option<&mut Self>;
}

impl ViewKind for ViewNode {
    const KIND: &'static str = "View";

    fn from_node(node: &ViewNode) -> Option<&Self> {
        Some(node)
    }

    fn from_node_mut(node: &mut ViewNode) -> Option<&mut Self> {
        Some(node)
    }
}

macro_rules! impl_view_kind {
    ($ty:ty, $variant:ident, $name:literal) => {
        impl ViewKind for $ty {
            const KIND: &'static str = $name;

            fn from_node(node: &ViewNode) -> Option<&Self> {
                match &node.kind {
                    WidgetKind::$variant(view) => Some(view),
                    _ => None,
                }
            }

            fn from_node_mut(node: &mut ViewNode) -> Option<&mut Self> {
                match &mut node.kind {
                    WidgetKind::$variant(view) => Some(view),
                    _ => None,
                }
            }
        }
    };
}

impl_view_kind!(TextView, Text, "TextView");
impl_view_kind!(ImageView, Image, "ImageView");
impl_view_kind!(ProgressBar, Progress, "ProgressBar");
impl_view_kind!(Button, Button, "Button");

impl fmt::Display for ViewNode {
    /// One line: id, kind, visibility, then the kind's properties.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<12} {:<12} {:<9}",
            self.id.as_str(),
            self.kind.name(),
            self.visibility.as_str()
        )?;
        match &self.kind {
            WidgetKind::Text(text) => write!(f, " text={:?}", text.text()),
            WidgetKind::Image(image) => {
                write!(f, " drawable=")?;
                match image.drawable() {
                    Some(res) => write!(f, "{res}")?,
                    None => f.write_str("none")?,
                }
                write_tint(f, image.image_tint_list())
            }
            WidgetKind::Progress(bar) => {
                write!(f, " progress={}/{}", bar.progress(), bar.max())?;
                write_tint(f, bar.progress_tint_list())
            }
            WidgetKind::Button(button) => write!(
                f,
                " label={:?} listener={}",
                button.label(),
                if button.has_on_click_listener() { "set" } else { "none" }
            ),
        }
    }
}

fn write_tint(f: &mut fmt::Formatter<'_>, tint: Option<TintList>) -> fmt::Result {
    match tint {
        Some(tint) => write!(f, " tint={tint}"),
        None => f.write_str(" tint=none"),
    }
}
