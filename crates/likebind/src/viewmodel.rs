#![forbid(unsafe_code)]

//! The profile state holder.

use likebind_runtime::lifecycle::ViewModel;
use likebind_runtime::reactive::{Binding, ChangeSignal, Observable, bind_mapped};

use crate::config::ProfileConfig;
use crate::popularity::{Popularity, Thresholds};

/// Observable profile state.
///
/// Each field is its own [`Observable`]; all of them feed one
/// [`ChangeSignal`], so listeners get a single "changed" notification per
/// mutation and no hint of which field moved.
#[derive(Debug)]
pub struct ProfileViewModel {
    first_name: Observable<String>,
    last_name: Observable<String>,
    likes: Observable<u32>,
    max: u32,
    popularity: Binding<Popularity>,
    changed: ChangeSignal,
}

impl ProfileViewModel {
    /// `max` must be non-zero; [`AppConfig`](crate::AppConfig) validation
    /// guarantees it for configured profiles.
    #[must_use]
    pub fn new(profile: &ProfileConfig, thresholds: Thresholds) -> Self {
        let first_name = Observable::new(profile.first_name.clone());
        let last_name = Observable::new(profile.last_name.clone());
        let likes = Observable::new(profile.likes);
        let popularity = bind_mapped(&likes, move |l| thresholds.classify(*l));

        let changed = ChangeSignal::new();
        changed.watch(&first_name);
        changed.watch(&last_name);
        changed.watch(&likes);

        Self {
            first_name,
            last_name,
            likes,
            max: profile.max,
            popularity,
            changed,
        }
    }

    #[must_use]
    pub fn first_name(&self) -> String {
        self.first_name.get()
    }

    #[must_use]
    pub fn last_name(&self) -> String {
        self.last_name.get()
    }

    #[must_use]
    pub fn likes(&self) -> u32 {
        self.likes.get()
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Recomputed from the current like count on every call.
    #[must_use]
    pub fn popularity(&self) -> Popularity {
        self.popularity.get()
    }

    /// Fires once for every mutation of any field.
    #[must_use]
    pub fn changed(&self) -> &ChangeSignal {
        &self.changed
    }

    pub fn on_like(&self) {
        self.likes.update(|l| *l = l.saturating_add(1));
        tracing::debug!(likes = self.likes(), "liked");
    }

    pub fn set_first_name(&self, name: impl Into<String>) {
        self.first_name.set(name.into());
    }

    pub fn set_last_name(&self, name: impl Into<String>) {
        self.last_name.set(name.into());
    }
}

impl ViewModel for ProfileViewModel {
    fn on_cleared(&self) {
        tracing::info!(likes = self.likes(), "profile view model cleared");
    }
}
