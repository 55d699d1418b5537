//! Publish/subscribe channel for engine updates.
//!
//! Handlers are kept in registration order.  [`Notifier::publish`] copies the
//! handler list before dispatching, so a handler may subscribe or unsubscribe
//! (itself or others) from inside its own callback; changes take effect from
//! the next publish.
//!
//! The channel is single-threaded (`Rc`/`RefCell`), matching the engine's
//! one-driver tick model.
//!
//! # Example: self-removing handler
//!
//! ```rust,ignore
//! let slot: Rc<RefCell<Option<SubscriptionHandle<StateSnapshot>>>> = Default::default();
//! let inner = Rc::clone(&slot);
//! let handle = engine.subscribe(move |snap| {
//!     if snap.finished {
//!         if let Some(h) = inner.borrow_mut().take() {
//!             h.unsubscribe();
//!         }
//!     }
//! });
//! *slot.borrow_mut() = Some(handle);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::warn;

type Handler<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Registry<T> {
    next_id:  u64,
    handlers: Vec<(u64, Handler<T>)>,
}

impl<T> Registry<T> {
    fn remove(&mut self, id: u64) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(h, _)| *h != id);
        self.handlers.len() != before
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Struct-based subscriber, for consumers that keep state between updates
/// and need to be inspected after the run.
pub trait Observer<T> {
    fn notify(&mut self, event: &T);
}

// ── SubscriptionHandle ────────────────────────────────────────────────────────

/// Returned by [`Notifier::subscribe`]; removes that subscription.
///
/// Holds only a weak reference to the registry, so a handler may own its
/// own handle without keeping the notifier alive.
pub struct SubscriptionHandle<T> {
    id:       u64,
    registry: Weak<RefCell<Registry<T>>>,
}

impl<T> SubscriptionHandle<T> {
    /// Remove the subscription.  Returns `false` if it was already removed
    /// or the notifier has been dropped.
    pub fn unsubscribe(&self) -> bool {
        match self.registry.upgrade() {
            Some(registry) => registry.borrow_mut().remove(self.id),
            None => false,
        }
    }
}

impl<T> Clone for SubscriptionHandle<T> {
    fn clone(&self) -> Self {
        Self { id: self.id, registry: Weak::clone(&self.registry) }
    }
}

impl<T> fmt::Debug for SubscriptionHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionHandle").field("id", &self.id).finish()
    }
}

// ── Notifier ──────────────────────────────────────────────────────────────────

/// Ordered registry of handlers for events of type `T`.
pub struct Notifier<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T: 'static> Notifier<T> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry { next_id: 0, handlers: Vec::new() })),
        }
    }

    /// Register `handler`; it runs after every handler registered before it.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionHandle<T>
    where
        F: FnMut(&T) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let handler: Handler<T> = Rc::new(RefCell::new(handler));
        registry.handlers.push((id, handler));

        SubscriptionHandle { id, registry: Rc::downgrade(&self.registry) }
    }

    /// Register a shared [`Observer`].  The caller keeps its own `Rc` to read
    /// the observer back later.
    pub fn subscribe_observer<O>(&self, observer: Rc<RefCell<O>>) -> SubscriptionHandle<T>
    where
        O: Observer<T> + 'static,
    {
        self.subscribe(move |event| observer.borrow_mut().notify(event))
    }

    /// Remove the subscription behind `handle`.  Returns `false` if it was
    /// not registered here.
    pub fn unsubscribe(&self, handle: &SubscriptionHandle<T>) -> bool {
        let ours = handle
            .registry
            .upgrade()
            .is_some_and(|r| Rc::ptr_eq(&r, &self.registry));
        ours && self.registry.borrow_mut().remove(handle.id)
    }

    /// Deliver `event` to every handler registered at the time of the call.
    ///
    /// Returns the number of handlers invoked.  A handler that is already
    /// running further up the stack is skipped rather than re-entered.
    pub fn publish(&self, event: &T) -> usize {
        let handlers: Vec<Handler<T>> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();

        let mut delivered = 0;
        for handler in handlers {
            match handler.try_borrow_mut() {
                Ok(mut f) => {
                    (&mut *f)(event);
                    delivered += 1;
                }
                Err(_) => warn!("skipping re-entrant subscriber"),
            }
        }
        delivered
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.borrow().handlers.is_empty()
    }
}

impl<T: 'static> Default for Notifier<T> {
    fn default() -> Self {
        Self::new()
    }
}
