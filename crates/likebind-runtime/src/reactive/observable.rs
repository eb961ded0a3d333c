#![forbid(unsafe_code)]

//! Observable value wrapper with change notification.
//!
//! [`Observable<T>`] keeps its value in shared `Rc<RefCell<..>>` storage.
//! A mutation that changes the value (by `PartialEq`) calls every live
//! subscriber, in registration order, with the new value.
//!
//! # Failure Modes
//!
//! - **Re-entrant mutation**: calling `set()` on an observable from inside
//!   one of its own subscribers while it holds a mutable borrow panics
//!   (RefCell rules). Reading it from a subscriber is fine: no borrow is
//!   held while callbacks run.
//! - **Subscriber leak**: callbacks accumulate while their [`Subscription`]
//!   guards are kept. Dead weak references are pruned during `notify()`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type CallbackRc<T> = Rc<dyn Fn(&T)>;
type CallbackWeak<T> = Weak<dyn Fn(&T)>;

struct ObservableInner<T> {
    value: T,
    subscribers: Vec<CallbackWeak<T>>,
}

/// A shared value with change notification.
///
/// Cloning an `Observable` yields another handle to the **same** value and
/// subscriber list.
pub struct Observable<T> {
    inner: Rc<RefCell<ObservableInner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Create an observable with no subscribers.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ObservableInner {
                value,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrow the current value for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Replace the value. Equal values are ignored.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
        }
        self.notify();
    }

    /// Mutate the value in place. Subscribers run only if the result differs
    /// from the value before `f`.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let before = inner.value.clone();
            f(&mut inner.value);
            inner.value != before
        };
        if changed {
            self.notify();
        }
    }

    /// Register `callback` for value changes.
    ///
    /// The callback stays registered for as long as the returned guard lives.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: CallbackRc<T> = Rc::new(callback);
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&strong));
        Subscription {
            _guard: Box::new(strong),
        }
    }

    fn notify(&self) {
        let (callbacks, value) = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            let callbacks: Vec<CallbackRc<T>> =
                inner.subscribers.iter().filter_map(Weak::upgrade).collect();
            (callbacks, inner.value.clone())
        };
        for callback in &callbacks {
            callback(&value);
        }
    }
}

/// RAII guard for a subscriber callback.
///
/// Dropping it releases the only strong reference to the callback, so the
/// observable's weak entry stops upgrading.
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_replaces_value() {
        let obs = Observable::new(3u32);
        assert_eq!(obs.get(), 3);

        obs.set(4);
        assert_eq!(obs.get(), 4);
        assert_eq!(obs.with(|v| v * 2), 8);
    }

    #[test]
    fn equal_set_is_noop() {
        let obs = Observable::new(String::from("Ada"));
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let _sub = obs.subscribe(move |_| c.set(c.get() + 1));

        obs.set("Ada".to_owned());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn update_notifies_once_with_new_value() {
        let obs = Observable::new(0u32);
        let seen = Rc::new(Cell::new(None));
        let s = Rc::clone(&seen);
        let _sub = obs.subscribe(move |v| s.set(Some(*v)));

        obs.update(|v| *v += 1);
        assert_eq!(seen.get(), Some(1));
    }

    #[test]
    fn update_without_change_is_silent() {
        let obs = Observable::new(10);
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let _sub = obs.subscribe(move |_| c.set(c.get() + 1));

        obs.update(|v| *v = 10);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let obs = Observable::new(0);
        let order = Rc::new(RefCell::new(Vec::new()));
        let subs: Vec<_> = (0..3)
            .map(|i| {
                let o = Rc::clone(&order);
                obs.subscribe(move |_| o.borrow_mut().push(i))
            })
            .collect();

        obs.set(1);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        drop(subs);
    }

    #[test]
    fn dropped_subscription_is_pruned() {
        let obs = Observable::new(0);
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let sub = obs.subscribe(move |_| c.set(c.get() + 1));
        assert!(format!("{obs:?}").contains("subscriber_count: 1"));

        drop(sub);
        obs.set(1);
        assert_eq!(calls.get(), 0);
        assert!(format!("{obs:?}").contains("subscriber_count: 0"));
    }

    #[test]
    fn subscriber_may_read_source() {
        let obs = Observable::new(1);
        let reader = obs.clone();
        let seen = Rc::new(Cell::new(0));
        let s = Rc::clone(&seen);
        let _sub = obs.subscribe(move |_| s.set(reader.get() * 10));

        obs.set(2);
        assert_eq!(seen.get(), 20);
    }

    #[test]
    fn clones_share_state() {
        let a = Observable::new(1);
        let b = a.clone();
        b.set(5);
        assert_eq!(a.get(), 5);
    }
}
