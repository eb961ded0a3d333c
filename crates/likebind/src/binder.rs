#![forbid(unsafe_code)]

//! Binds the profile view model to the profile layout.
//!
//! All bindings of the screen are declared in [`profile_bindings`]; the
//! layout itself carries no binding expressions. Each render pass first
//! captures a [`ProfileSnapshot`] of the view model, then applies every
//! binding to it.
//!
//! # Invariants
//!
//! 1. Any change notification re-runs the whole pass. Bindings whose inputs
//!    did not change are reapplied anyway.
//! 2. A pass is a function of the snapshot alone.
//! 3. Popular and Star share the same icon; only the tint tells them apart.

use std::cell::{Cell, RefCell, RefMut};
use std::rc::{Rc, Weak};

use likebind_runtime::reactive::BindingScope;
use likebind_style::{Palette, Rgba, Theme, TintList};
use likebind_widgets::{
    Button, DrawableRes, ImageView, ProgressBar, RenderBindings, TextView, ViewError, ViewNode,
    ViewRoot, Visibility,
};

use crate::config::AppConfig;
use crate::layout::ids;
use crate::popularity::Popularity;
use crate::viewmodel::ProfileViewModel;

pub const IC_PERSON: DrawableRes = DrawableRes("ic_person_black_96dp");
pub const IC_WHATSHOT: DrawableRes = DrawableRes("ic_whatshot_black_96dp");

/// Likes needed to fill the progress bar.
const PROGRESS_SCALE: u64 = 5;

/// `min(likes * max / 5, max)`.
#[must_use]
pub fn scaled_progress(likes: u32, max: u32) -> u32 {
    let scaled = u64::from(likes) * u64::from(max) / PROGRESS_SCALE;
    // Bounded by `max`, so it fits.
    scaled.min(u64::from(max)) as u32
}

#[must_use]
pub fn progress_visibility(likes: u32) -> Visibility {
    if likes > 0 {
        Visibility::Visible
    } else {
        Visibility::Gone
    }
}

#[must_use]
pub fn popularity_icon(popularity: Popularity) -> DrawableRes {
    match popularity {
        Popularity::Normal => IC_PERSON,
        Popularity::Popular => IC_WHATSHOT,
        Popularity::Star => IC_WHATSHOT,
    }
}

/// Colors and device capabilities a pass resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BindStyle {
    pub theme: Theme,
    pub palette: Palette,
    pub progress_tint: bool,
}

impl BindStyle {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            theme: config.theme,
            palette: config.palette,
            progress_tint: config.device.progress_tint,
        }
    }

    #[must_use]
    pub fn associated_color(&self, popularity: Popularity) -> Rgba {
        match popularity {
            Popularity::Normal => self.theme.color_foreground(Rgba::BLACK),
            Popularity::Popular => self.palette.popular,
            Popularity::Star => self.palette.star,
        }
    }
}

/// View-model values read once at the start of a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSnapshot {
    pub first_name: String,
    pub last_name: String,
    pub likes: u32,
    pub max: u32,
    pub popularity: Popularity,
}

impl ProfileSnapshot {
    #[must_use]
    pub fn capture(view_model: &ProfileViewModel) -> Self {
        Self {
            first_name: view_model.first_name(),
            last_name: view_model.last_name(),
            likes: view_model.likes(),
            max: view_model.max(),
            popularity: view_model.popularity(),
        }
    }
}

/// Every binding of the profile screen, in application order.
#[must_use]
pub fn profile_bindings(
    view_model: Weak<ProfileViewModel>,
    style: BindStyle,
) -> RenderBindings<ProfileSnapshot> {
    RenderBindings::<ProfileSnapshot>::new()
        .setup(ids::LIKE_BUTTON, move |button: &mut Button| {
            let view_model = view_model.clone();
            button.set_on_click_listener(move || match view_model.upgrade() {
                Some(view_model) => view_model.on_like(),
                None => tracing::warn!("like tapped after the view model was cleared"),
            });
        })
        .bind_data(
            ids::NAME,
            "text",
            |s| s.first_name.clone(),
            TextView::set_text,
        )
        .bind_data(
            ids::LAST_NAME,
            "text",
            |s| s.last_name.clone(),
            TextView::set_text,
        )
        .bind(
            ids::IMAGE,
            "drawable",
            move |image: &mut ImageView, s| {
                image.set_image_drawable(Some(popularity_icon(s.popularity)));
                let color = style.associated_color(s.popularity);
                image.set_image_tint_list(Some(TintList::value_of(color)));
            },
        )
        .bind_data(
            ids::LIKES,
            "text",
            |s| s.likes.to_string(),
            TextView::set_text,
        )
        .bind_data(
            ids::PROGRESS_BAR,
            "visibility",
            |s| progress_visibility(s.likes),
            ViewNode::set_visibility,
        )
        .bind(
            ids::PROGRESS_BAR,
            "progress_tint",
            move |bar: &mut ProgressBar, s| {
                if style.progress_tint {
                    let color = style.associated_color(s.popularity);
                    bar.set_progress_tint_list(Some(TintList::value_of(color)));
                }
            },
        )
        .bind_data(
            ids::PROGRESS_BAR,
            "progress",
            |s| scaled_progress(s.likes, s.max),
            ProgressBar::set_progress,
        )
}

struct BinderInner {
    view_model: Rc<ProfileViewModel>,
    view: Rc<RefCell<ViewRoot>>,
    bindings: RenderBindings<ProfileSnapshot>,
    passes: Cell<u64>,
    last_error: RefCell<Option<ViewError>>,
}

impl BinderInner {
    fn view_mut(&self) -> Result<RefMut<'_, ViewRoot>, ViewError> {
        self.view.try_borrow_mut().map_err(|_| ViewError::ViewBusy)
    }

    /// Fails with [`ViewError::ViewBusy`] while someone else holds the view.
    fn render(&self) -> Result<usize, ViewError> {
        let snapshot = ProfileSnapshot::capture(&self.view_model);
        let applied = self.bindings.render(&mut *self.view_mut()?, &snapshot)?;
        let pass = self.passes.get() + 1;
        self.passes.set(pass);
        tracing::debug!(
            pass,
            applied,
            likes = snapshot.likes,
            popularity = %snapshot.popularity,
            "render pass"
        );
        Ok(applied)
    }

    fn on_changed(&self) {
        if let Err(err) = self.render() {
            tracing::error!(error = %err, "render pass after change failed");
            *self.last_error.borrow_mut() = Some(err);
        }
    }
}

/// Keeps a view tree in sync with a [`ProfileViewModel`].
///
/// Dropping the binder stops the updates; the view keeps its last values.
pub struct Binder {
    inner: Rc<BinderInner>,
    scope: BindingScope,
}

impl Binder {
    /// Run the setup bindings, render once, then start listening.
    ///
    /// Fails without touching the view or subscribing if the view lacks a
    /// bound widget.
    pub fn new(
        view_model: Rc<ProfileViewModel>,
        view: Rc<RefCell<ViewRoot>>,
        style: BindStyle,
    ) -> Result<Self, ViewError> {
        let bindings = profile_bindings(Rc::downgrade(&view_model), style);
        let inner = Rc::new(BinderInner {
            view_model,
            view,
            bindings,
            passes: Cell::new(0),
            last_error: RefCell::new(None),
        });

        {
            let snapshot = ProfileSnapshot::capture(&inner.view_model);
            let mut root = inner.view_mut()?;
            inner.bindings.check_all(&root)?;
            inner.bindings.run_setup(&mut root, &snapshot)?;
        }
        inner.render()?;

        let mut scope = BindingScope::new();
        let listener = Rc::clone(&inner);
        scope.hold(
            inner
                .view_model
                .changed()
                .subscribe(move || listener.on_changed()),
        );
        tracing::debug!(bindings = inner.bindings.len(), "binder attached");
        Ok(Self { inner, scope })
    }

    /// Run a pass now, outside of any notification.
    pub fn render(&self) -> Result<usize, ViewError> {
        self.inner.render()
    }

    /// Successful render passes so far, the initial one included.
    #[must_use]
    pub fn render_passes(&self) -> u64 {
        self.inner.passes.get()
    }

    /// The error of the latest failed notification-driven pass, clearing it.
    ///
    /// A later successful pass does not clear it.
    pub fn take_last_error(&self) -> Option<ViewError> {
        self.inner.last_error.borrow_mut().take()
    }

    #[must_use]
    pub fn view_model(&self) -> &Rc<ProfileViewModel> {
        &self.inner.view_model
    }

    #[must_use]
    pub fn bindings(&self) -> &RenderBindings<ProfileSnapshot> {
        &self.inner.bindings
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        !self.scope.is_empty()
    }
}

impl std::fmt::Debug for Binder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binder")
            .field("bindings", &self.inner.bindings.len())
            .field("passes", &self.render_passes())
            .field("listening", &self.is_listening())
            .finish()
    }
}
