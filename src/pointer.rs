//! Pointer-down observation for outside-click dismissal.
//!
//! A [`PointerHub`] is the window-level dispatch point for pointer
//! activations. The host owns it and forwards every mouse-down; widgets
//! subscribe while mounted. [`PointerHub::subscribe`] returns a
//! [`Subscription`] whose drop removes the listener, so releasing the widget
//! releases the listener on every path.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`): pointer events are
//! delivered on the UI thread only.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    fmt,
    rc::{Rc, Weak},
};

use ratatui::layout::Position;

type Listener = Rc<dyn Fn(Position)>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

// ============================================================================
// PointerHub
// ============================================================================

/// Dispatches pointer activations to subscribed listeners.
///
/// Cloning a hub yields another handle to the same listener set.
#[derive(Clone, Default)]
pub struct PointerHub {
    inner: Rc<RefCell<HubInner>>,
}

impl fmt::Debug for PointerHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl PointerHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for pointer activations.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped.
    #[must_use = "dropping the subscription immediately unsubscribes the listener"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Position) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.insert(id, Rc::new(listener));
        tracing::debug!("pointer listener {id} subscribed");

        Subscription {
            id,
            hub: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver a pointer activation to every listener.
    ///
    /// Listeners are snapshotted before delivery, so a listener may drop
    /// subscriptions (including its own) while being called. Returns the
    /// number of listeners invoked.
    pub fn dispatch(&self, position: Position) -> usize {
        let listeners: Vec<Listener> = self.inner.borrow().listeners.values().cloned().collect();
        for listener in &listeners {
            listener(position);
        }
        listeners.len()
    }

    /// Number of currently registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

// ============================================================================
// Subscription
// ============================================================================

/// Owned registration in a [`PointerHub`]. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    hub: Weak<RefCell<HubInner>>,
}

impl Subscription {
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Whether the listener is still registered with a live hub.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.hub
            .upgrade()
            .is_some_and(|hub| hub.borrow().listeners.contains_key(&self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.borrow_mut().listeners.remove(&self.id);
            tracing::debug!("pointer listener {} unsubscribed", self.id);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
