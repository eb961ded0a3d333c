#![forbid(unsafe_code)]

//! Payload-less change notification.
//!
//! A [`ChangeSignal`] tells listeners that *something* changed without
//! saying what. A state holder watches each of its field observables with
//! [`ChangeSignal::watch`], so a mutation of any field raises exactly one
//! signal. Listeners re-read whatever they need.

use std::cell::RefCell;

use super::binding::BindingScope;
use super::observable::{Observable, Subscription};

/// A generic "changed" signal fed by watched observables.
///
/// The signal keeps a revision counter: it advances by one for every raised
/// notification, and each listener runs once per advance.
pub struct ChangeSignal {
    revision: Observable<u64>,
    sources: RefCell<BindingScope>,
}

impl ChangeSignal {
    #[must_use]
    pub fn new() -> Self {
        Self {
            revision: Observable::new(0),
            sources: RefCell::new(BindingScope::new()),
        }
    }

    /// Forward every change of `source` as one notification of this signal.
    ///
    /// The forwarding lives as long as the signal.
    pub fn watch<T: Clone + PartialEq + 'static>(&self, source: &Observable<T>) {
        let revision = self.revision.clone();
        self.sources
            .borrow_mut()
            .subscribe(source, move |_| advance(&revision));
    }

    /// Raise a notification directly.
    pub fn notify(&self) {
        advance(&self.revision);
    }

    /// Register `listener`; it runs once per notification while the guard lives.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        self.revision.subscribe(move |_| listener())
    }

    /// Notifications raised so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// Number of observables being forwarded.
    #[must_use]
    pub fn watched_count(&self) -> usize {
        self.sources.borrow().binding_count()
    }
}

impl Default for ChangeSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChangeSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeSignal")
            .field("revision", &self.revision())
            .field("watched", &self.watched_count())
            .finish()
    }
}

fn advance(revision: &Observable<u64>) {
    revision.update(|r| *r = r.wrapping_add(1));
    tracing::trace!(revision = revision.get(), "change signal raised");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter(signal: &ChangeSignal) -> (Rc<Cell<u32>>, Subscription) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let sub = signal.subscribe(move || c.set(c.get() + 1));
        (count, sub)
    }

    #[test]
    fn notify_runs_listener_once() {
        let signal = ChangeSignal::new();
        let (count, _sub) = counter(&signal);

        signal.notify();
        assert_eq!(count.get(), 1);
        assert_eq!(signal.revision(), 1);
    }

    #[test]
    fn watched_field_change_raises_one_signal() {
        let signal = ChangeSignal::new();
        let likes = Observable::new(0u32);
        let name = Observable::new(String::from("Ada"));
        signal.watch(&likes);
        signal.watch(&name);
        assert_eq!(signal.watched_count(), 2);
        let (count, _sub) = counter(&signal);

        likes.update(|l| *l += 1);
        assert_eq!(count.get(), 1);
        name.set("Grace".to_owned());
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn unchanged_field_raises_nothing() {
        let signal = ChangeSignal::new();
        let likes = Observable::new(4u32);
        signal.watch(&likes);
        let (count, _sub) = counter(&signal);

        likes.set(4);
        assert_eq!(count.get(), 0);
        assert_eq!(signal.revision(), 0);
    }

    #[test]
    fn listener_can_read_watched_field() {
        let signal = ChangeSignal::new();
        let likes = Observable::new(0u32);
        signal.watch(&likes);
        let seen = Rc::new(Cell::new(0));
        let (s, reader) = (Rc::clone(&seen), likes.clone());
        let _sub = signal.subscribe(move || s.set(reader.get()));

        likes.set(3);
        assert_eq!(seen.get(), 3);
    }

    #[test]
    fn dropped_listener_stops() {
        let signal = ChangeSignal::new();
        let (count, sub) = counter(&signal);
        drop(sub);
        signal.notify();
        assert_eq!(count.get(), 0);
    }
}
