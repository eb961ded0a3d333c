#![forbid(unsafe_code)]

//! View-model ownership across screen recreation.
//!
//! A screen asks its [`ViewModelStore`] for a view model instead of creating
//! one. The first request creates it; later requests (for example from a
//! screen recreated after a configuration change) get the same instance.
//! Clearing the store, which happens when the screen is finished for good,
//! drops every held view model after calling [`ViewModel::on_cleared`].

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::rc::Rc;

use ahash::AHashMap;

/// A state holder whose lifetime is managed by a [`ViewModelStore`].
pub trait ViewModel: 'static {
    /// Called once when the owning store is cleared.
    fn on_cleared(&self) {}
}

struct Entry {
    instance: Rc<dyn Any>,
    on_cleared: Box<dyn Fn()>,
}

/// Holds at most one view model per type.
#[derive(Default)]
pub struct ViewModelStore {
    entries: RefCell<AHashMap<TypeId, Entry>>,
}

impl ViewModelStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored `T`, created with `create` if the store has none yet.
    pub fn get_or_create<T: ViewModel>(&self, create: impl FnOnce() -> T) -> Rc<T> {
        if let Some(existing) = self.get::<T>() {
            tracing::debug!(
                view_model = std::any::type_name::<T>(),
                "reusing stored view model"
            );
            return existing;
        }
        let instance = Rc::new(create());
        let for_clear = Rc::clone(&instance);
        self.entries.borrow_mut().insert(
            TypeId::of::<T>(),
            Entry {
                instance: Rc::clone(&instance) as Rc<dyn Any>,
                on_cleared: Box::new(move || for_clear.on_cleared()),
            },
        );
        tracing::debug!(
            view_model = std::any::type_name::<T>(),
            "created view model"
        );
        instance
    }

    /// The stored `T`, if any.
    #[must_use]
    pub fn get<T: ViewModel>(&self) -> Option<Rc<T>> {
        let entries = self.entries.borrow();
        let entry = entries.get(&TypeId::of::<T>())?;
        Rc::clone(&entry.instance).downcast::<T>().ok()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Call `on_cleared` on every view model and drop them.
    pub fn clear(&self) {
        let drained: Vec<Entry> = self.entries.borrow_mut().drain().map(|(_, e)| e).collect();
        for entry in &drained {
            (entry.on_cleared)();
        }
        tracing::debug!(count = drained.len(), "view model store cleared");
    }
}

impl std::fmt::Debug for ViewModelStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewModelStore")
            .field("len", &self.len())
            .finish()
    }
}
