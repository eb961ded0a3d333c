#![forbid(unsafe_code)]

//! Profile screen bound to an observable view model.
//!
//! The screen shows a first name, a last name, a like count, an image whose
//! icon and tint follow the profile's [`Popularity`], and a progress bar that
//! fills as likes accumulate. [`ProfileActivity::on_create`] inflates the
//! layout, obtains the [`ProfileViewModel`] from a
//! [`ViewModelStore`](likebind_runtime::ViewModelStore) and starts a
//! [`Binder`]. From then on every change of the view model re-renders every
//! bound widget.

pub mod activity;
pub mod binder;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod popularity;
pub mod viewmodel;

pub use activity::ProfileActivity;
pub use binder::{BindStyle, Binder, ProfileSnapshot};
pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use popularity::{Popularity, Thresholds};
pub use viewmodel::ProfileViewModel;
