#![forbid(unsafe_code)]

//! Screen entry point.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use likebind_runtime::ViewModelStore;
use likebind_widgets::{ViewRoot, WidgetId};

use crate::binder::{BindStyle, Binder};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::layout::{self, ids};
use crate::viewmodel::ProfileViewModel;

/// One instance of the profile screen.
///
/// The screen owns its view tree and binder. The view model belongs to the
/// [`ViewModelStore`], so a screen created again from the same store (after
/// a configuration change) binds a fresh view to the existing state.
#[derive(Debug)]
pub struct ProfileActivity {
    view: Rc<RefCell<ViewRoot>>,
    binder: Binder,
}

impl ProfileActivity {
    pub fn on_create(store: &ViewModelStore, config: &AppConfig) -> Result<Self, AppError> {
        config.validate()?;
        let view = Rc::new(RefCell::new(layout::profile(config.profile.max).inflate()?));
        let view_model = store.get_or_create(|| {
            ProfileViewModel::new(&config.profile, config.popularity)
        });
        let binder = Binder::new(view_model, Rc::clone(&view), BindStyle::from_config(config))?;
        tracing::info!(
            layout = layout::LAYOUT_NAME,
            likes = binder.view_model().likes(),
            "profile screen created"
        );
        Ok(Self { view, binder })
    }

    /// Tap widget `id`. Returns whether it had a click listener.
    ///
    /// A render pass triggered by the tap that fails is returned as an error.
    pub fn tap(&self, id: WidgetId) -> Result<bool, AppError> {
        // Clone the listener out so the view is not borrowed while the
        // resulting render pass runs.
        let listener = self.view.borrow().click_listener(id)?;
        let Some(listener) = listener else {
            tracing::debug!(widget = %id, "tap on widget without listener");
            return Ok(false);
        };
        // Drop errors left by earlier notifications; only this tap counts.
        if let Some(stale) = self.binder.take_last_error() {
            tracing::debug!(error = %stale, "discarding earlier render error");
        }
        listener();
        match self.binder.take_last_error() {
            Some(err) => Err(err.into()),
            None => Ok(true),
        }
    }

    /// Tap the like button.
    pub fn like(&self) -> Result<bool, AppError> {
        self.tap(ids::LIKE_BUTTON)
    }

    #[must_use]
    pub fn view(&self) -> Ref<'_, ViewRoot> {
        self.view.borrow()
    }

    #[must_use]
    pub fn binder(&self) -> &Binder {
        &self.binder
    }

    #[must_use]
    pub fn view_model(&self) -> &Rc<ProfileViewModel> {
        self.binder.view_model()
    }
}
