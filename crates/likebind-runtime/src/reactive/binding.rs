#![forbid(unsafe_code)]

//! Derived values and subscription ownership.
//!
//! A [`Binding<T>`] wraps a closure that derives a display value from one or
//! more [`Observable`]s. It is evaluated on every `get()`, so it never
//! returns a stale value and carries no cache between reads.
//!
//! A [`BindingScope`] owns the subscriptions of one component. Dropping the
//! scope disconnects everything registered through it.

use std::rc::Rc;

use super::observable::{Observable, Subscription};

/// A read-only derived value, re-evaluated on each `get()`.
pub struct Binding<T> {
    eval: Rc<dyn Fn() -> T>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            eval: Rc::clone(&self.eval),
        }
    }
}

impl<T: std::fmt::Debug + 'static> std::fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("value", &self.get())
            .finish()
    }
}

impl<T: 'static> Binding<T> {
    pub fn new(f: impl Fn() -> T + 'static) -> Self {
        Self { eval: Rc::new(f) }
    }

    #[must_use]
    pub fn get(&self) -> T {
        (self.eval)()
    }
}

/// Binding to `source` transformed by `map`, borrowing the value.
pub fn bind_mapped<S: Clone + PartialEq + 'static, T: 'static>(
    source: &Observable<S>,
    map: impl Fn(&S) -> T + 'static,
) -> Binding<T> {
    let src = source.clone();
    Binding::new(move || src.with(|v| map(v)))
}

/// Owns the subscriptions of one component.
///
/// # Invariants
///
/// 1. After the scope is dropped, none of its callbacks fire.
/// 2. `binding_count()` equals the number of held subscriptions.
#[derive(Default)]
pub struct BindingScope {
    subscriptions: Vec<Subscription>,
}

impl BindingScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `sub` alive until the scope is dropped.
    pub fn hold(&mut self, sub: Subscription) {
        self.subscriptions.push(sub);
    }

    /// Subscribe to `source` and hold the subscription in this scope.
    pub fn subscribe<T: Clone + PartialEq + 'static>(
        &mut self,
        source: &Observable<T>,
        callback: impl Fn(&T) + 'static,
    ) -> &mut Self {
        self.subscriptions.push(source.subscribe(callback));
        self
    }

    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl std::fmt::Debug for BindingScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingScope")
            .field("binding_count", &self.subscriptions.len())
            .finish()
    }
}
