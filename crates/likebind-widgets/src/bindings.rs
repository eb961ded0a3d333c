#![forbid(unsafe_code)]

//! Registry of widget bindings.
//!
//! [`RenderBindings<S>`] maps widget ids to closures, in declaration order:
//!
//! - **setup** bindings run once against a widget (wiring a click listener);
//! - **data** bindings derive a value from the state `S` and hand it to a
//!   widget setter;
//! - **custom** bindings receive the widget and the whole state.
//!
//! # Invariants
//!
//! 1. A render pass applies every data and custom binding, in declaration
//!    order, with no diffing against the previous pass.
//! 2. Before applying anything, a pass checks that every bound id exists
//!    with the expected kind. A failing pass leaves the widgets untouched.
//! 3. The registry is fixed once built; passes carry no state between them.

use crate::WidgetId;
use crate::root::{ViewError, ViewRoot};
use crate::view::ViewKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Setup,
    Render,
}

type Check = fn(&ViewRoot, WidgetId) -> Result<(), ViewError>;
type Apply<S> = Box<dyn Fn(&mut ViewRoot, &S) -> Result<(), ViewError>>;

struct Entry<S> {
    id: WidgetId,
    property: &'static str,
    phase: Phase,
    check: Check,
    apply: Apply<S>,
}

pub struct RenderBindings<S> {
    entries: Vec<Entry<S>>,
}

impl<S: 'static> RenderBindings<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// One-time configuration of widget `id`.
    #[must_use]
    pub fn setup<W: ViewKind>(mut self, id: WidgetId, f: impl Fn(&mut W) + 'static) -> Self {
        self.entries.push(Entry {
            id,
            property: "setup",
            phase: Phase::Setup,
            check: ViewRoot::ensure::<W>,
            apply: Box::new(move |root, _state| {
                f(root.find_mut::<W>(id)?);
                Ok(())
            }),
        });
        self
    }

    /// Set `property` of widget `id` to `produce(state)` through `set`.
    #[must_use]
    pub fn bind_data<W: ViewKind, V: 'static>(
        mut self,
        id: WidgetId,
        property: &'static str,
        produce: impl Fn(&S) -> V + 'static,
        set: impl Fn(&mut W, V) + 'static,
    ) -> Self {
        self.entries.push(Entry {
            id,
            property,
            phase: Phase::Render,
            check: ViewRoot::ensure::<W>,
            apply: Box::new(move |root, state| {
                let value = produce(state);
                set(root.find_mut::<W>(id)?, value);
                Ok(())
            }),
        });
        self
    }

    /// Apply `f` to widget `id` with the whole state.
    #[must_use]
    pub fn bind<W: ViewKind>(
        mut self,
        id: WidgetId,
        property: &'static str,
        f: impl Fn(&mut W, &S) + 'static,
    ) -> Self {
        self.entries.push(Entry {
            id,
            property,
            phase: Phase::Render,
            check: ViewRoot::ensure::<W>,
            apply: Box::new(move |root, state| {
                f(root.find_mut::<W>(id)?, state);
                Ok(())
            }),
        });
        self
    }

    /// Run every setup binding. Returns how many ran.
    pub fn run_setup(&self, root: &mut ViewRoot, state: &S) -> Result<usize, ViewError> {
        self.run_phase(Phase::Setup, root, state)
    }

    /// One full render pass. Returns how many bindings were applied.
    pub fn render(&self, root: &mut ViewRoot, state: &S) -> Result<usize, ViewError> {
        self.run_phase(Phase::Render, root, state)
    }

    /// Check every bound id and kind, setup included, without applying.
    pub fn check_all(&self, root: &ViewRoot) -> Result<(), ViewError> {
        for entry in &self.entries {
            (entry.check)(root, entry.id)?;
        }
        Ok(())
    }

    fn phase_entries(&self, phase: Phase) -> impl Iterator<Item = &Entry<S>> {
        self.entries.iter().filter(move |e| e.phase == phase)
    }

    fn run_phase(&self, phase: Phase, root: &mut ViewRoot, state: &S) -> Result<usize, ViewError> {
        for entry in self.phase_entries(phase) {
            (entry.check)(root, entry.id)?;
        }
        let mut applied = 0;
        for entry in self.phase_entries(phase) {
            (entry.apply)(root, state)?;
            tracing::trace!(widget = %entry.id, property = entry.property, "binding applied");
            applied += 1;
        }
        Ok(applied)
    }

    /// Total number of bindings, setup included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of bindings applied by each render pass.
    #[must_use]
    pub fn render_len(&self) -> usize {
        self.phase_entries(Phase::Render).count()
    }

    /// `(widget, property)` for every binding, in declaration order.
    pub fn targets(&self) -> impl Iterator<Item = (WidgetId, &'static str)> + '_ {
        self.entries.iter().map(|e| (e.id, e.property))
    }
}

impl<S: 'static> Default for RenderBindings<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> std::fmt::Debug for RenderBindings<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| (e.id, e.property, e.phase)))
            .finish()
    }
}
