#![forbid(unsafe_code)]

//! Single-threaded reactive runtime for likebind screens.
//!
//! - [`reactive`]: observable values, derived bindings, and the payload-less
//!   [`ChangeSignal`](reactive::ChangeSignal) a view model exposes.
//! - [`lifecycle`]: the [`ViewModelStore`](lifecycle::ViewModelStore) that
//!   keeps view models alive across screen recreation.

pub mod lifecycle;
pub mod reactive;

pub use lifecycle::ViewModelStore;
pub use reactive::{Binding, BindingScope, ChangeSignal, Observable, Subscription};
