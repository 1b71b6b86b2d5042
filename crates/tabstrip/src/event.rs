//! Input events and change subscriptions.
//!
//! Pointer and wheel input arrive in header-area local coordinates: x runs
//! along the strip and y across it, before the side rotation is applied.
//! [`TabPane::to_header_local`](crate::TabPane::to_header_local) converts
//! pane coordinates.
//!
//! Read-only properties publish changes through [`Listeners`]. Subscribing
//! returns a [`Subscription`] guard that unsubscribes when dropped.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tabstrip_core::math::Vec2;

/// Mouse button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A pointer event in header-area local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pos: Vec2,
    pub button: MouseButton,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32, button: MouseButton) -> Self {
        Self {
            pos: Vec2::new(x, y),
            button,
        }
    }

    pub fn left(x: f32, y: f32) -> Self {
        Self::new(x, y, MouseButton::Left)
    }
}

/// A wheel or trackpad scroll in screen-axis deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub delta: Vec2,
}

impl WheelEvent {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self {
            delta: Vec2::new(dx, dy),
        }
    }
}

/// Old and new value of a read-only property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyChange<T> {
    pub old: T,
    pub new: T,
}

type Callback<E> = Rc<RefCell<dyn FnMut(&E)>>;

struct Registry<E> {
    next_id: u64,
    entries: Vec<(u64, Callback<E>)>,
}

/// A list of callbacks for one kind of change.
pub struct Listeners<E: 'static> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E: 'static> Listeners<E> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register a callback. It stays registered while the returned guard lives.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl FnMut(&E) + 'static) -> Subscription {
        let callback: Callback<E> = Rc::new(RefCell::new(callback));
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.entries.push((id, callback));
            id
        };

        let weak: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.registry);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade()
                    && let Ok(mut registry) = registry.try_borrow_mut()
                {
                    registry.entries.retain(|(entry_id, _)| *entry_id != id);
                }
            })),
        }
    }

    /// Call every registered callback.
    ///
    /// Callbacks may drop subscriptions (their own included) while running.
    /// A callback that re-enters `emit` on the same list is skipped for the
    /// nested event.
    pub fn emit(&self, event: &E) {
        let callbacks: Vec<Callback<E>> = self
            .registry
            .borrow()
            .entries
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        for callback in callbacks {
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (*callback)(event);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: 'static> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.len())
            .finish()
    }
}

/// Guard returned by [`Listeners::subscribe`].
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Keep the callback registered for the lifetime of the listener list.
    pub fn detach(mut self) {
        self.unsubscribe = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_subscription_drop_unsubscribes() {
        let listeners = Listeners::<u32>::new();
        let seen = Rc::new(Cell::new(0));

        let sub = {
            let seen = Rc::clone(&seen);
            listeners.subscribe(move |v| seen.set(seen.get() + *v))
        };
        listeners.emit(&2);
        assert_eq!(seen.get(), 2);
        assert_eq!(listeners.len(), 1);

        drop(sub);
        listeners.emit(&5);
        assert_eq!(seen.get(), 2);
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_detach_keeps_callback() {
        let listeners = Listeners::<()>::new();
        let count = Rc::new(Cell::new(0));
        {
            let count = Rc::clone(&count);
            listeners
                .subscribe(move |_| count.set(count.get() + 1))
                .detach();
        }
        listeners.emit(&());
        listeners.emit(&());
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_unsubscribe_during_emit() {
        let listeners = Listeners::<()>::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let calls = Rc::new(Cell::new(0));

        let sub = {
            let slot = Rc::clone(&slot);
            let calls = Rc::clone(&calls);
            listeners.subscribe(move |_| {
                calls.set(calls.get() + 1);
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(sub);

        listeners.emit(&());
        listeners.emit(&());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_subscription_outlives_listeners() {
        let listeners = Listeners::<u8>::new();
        let sub = listeners.subscribe(|_| {});
        drop(listeners);
        drop(sub);
    }
}
