#![forbid(unsafe_code)]

//! Change-tracking primitives for bound screens.
//!
//! - [`Observable`]: shared value with subscriber callbacks.
//! - [`Subscription`]: RAII guard that unsubscribes on drop.
//! - [`Binding`]: lazily evaluated value derived from observables.
//! - [`BindingScope`]: owns a component's subscriptions.
//! - [`ChangeSignal`]: one "something changed" notification fed by any
//!   number of watched observables.
//!
//! # Architecture
//!
//! Everything is `Rc<RefCell<..>>` based and meant for one UI thread.
//! Subscribers are held as `Weak` callbacks and pruned lazily on notify.
//! Notification is synchronous: `set()` returns after every live subscriber
//! has run.
//!
//! # Invariants
//!
//! 1. Subscribers run exactly once per mutation that changes the value.
//! 2. Subscribers are notified in registration order.
//! 3. Setting a value equal to the current one is a no-op.
//! 4. A dropped [`Subscription`] is never called again.

pub mod binding;
pub mod observable;
pub mod signal;

pub use binding::{Binding, BindingScope, bind_mapped};
pub use observable::{Observable, Subscription};
pub use signal::ChangeSignal;
