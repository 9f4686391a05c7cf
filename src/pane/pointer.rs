//! Application-wide pointer event hub.
//!
//! Widgets register hit regions while they are laid out each frame. At the
//! end of the frame the app turns the frame's click into a [`PointerEvent`]
//! whose target path runs from the outermost region to the innermost one,
//! and hands it to every subscribed listener.
//!
//! Listeners are held through a [`Subscription`]; dropping it deregisters
//! the listener exactly once.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};

use eframe::egui::{Id, Pos2, Rect};

/// A pointer interaction and the chain of regions it landed in.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub pos: Option<Pos2>,
    /// Outermost region first, hit target last. Empty when nothing was hit.
    pub path: Vec<Id>,
}

impl PointerEvent {
    /// An event that hit no registered region.
    pub fn outside(pos: Option<Pos2>) -> Self {
        Self { pos, path: Vec::new() }
    }

    pub fn target(&self) -> Option<Id> {
        self.path.last().copied()
    }

    /// True if the target is `anchor` or one of its descendants.
    pub fn is_within(&self, anchor: Id) -> bool {
        self.path.iter().rev().any(|id| *id == anchor)
    }
}

#[derive(Debug, Clone, Copy)]
struct HitRegion {
    id: Id,
    parent: Option<Id>,
    rect: Rect,
}

/// Counters for listener bookkeeping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerStats {
    pub registered: u64,
    pub deregistered: u64,
}

impl ListenerStats {
    pub fn outstanding(&self) -> u64 {
        self.registered - self.deregistered
    }
}

type Listener = Box<dyn FnMut(&PointerEvent)>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    regions: Vec<HitRegion>,
    stats: ListenerStats,
    dispatching: bool,
    /// Listeners dropped while a dispatch was running
    detached: HashSet<u64>,
}

/// Shared handle to the pointer hub. Cloning shares the same hub.
#[derive(Clone, Default)]
pub struct PointerHub {
    inner: Rc<RefCell<HubInner>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for every dispatched pointer event.
    pub fn subscribe(&self, listener: impl FnMut(&PointerEvent) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.listeners.push((id, Box::new(listener)));
        inner.stats.registered += 1;
        tracing::trace!(listener = id, "pointer listener registered");

        Subscription {
            id,
            hub: Rc::downgrade(&self.inner),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn stats(&self) -> ListenerStats {
        self.inner.borrow().stats
    }

    /// Forget last frame's hit regions.
    pub fn begin_frame(&self) {
        self.inner.borrow_mut().regions.clear();
    }

    /// Record a region for this frame. Later regions sit on top of earlier ones.
    pub fn register_region(&self, id: Id, parent: Option<Id>, rect: Rect) {
        self.inner
            .borrow_mut()
            .regions
            .push(HitRegion { id, parent, rect });
    }

    /// Rect of the topmost region registered as `id` this frame.
    pub fn region_rect(&self, id: Id) -> Option<Rect> {
        self.inner
            .borrow()
            .regions
            .iter()
            .rev()
            .find(|r| r.id == id)
            .map(|r| r.rect)
    }

    /// Resolve the region under `pos` and walk up to the outermost ancestor.
    pub fn hit_test(&self, pos: Option<Pos2>) -> PointerEvent {
        let inner = self.inner.borrow();
        let Some(p) = pos else {
            return PointerEvent::outside(pos);
        };
        let Some(hit) = inner.regions.iter().rev().find(|r| r.rect.contains(p)) else {
            return PointerEvent::outside(pos);
        };

        let mut path = vec![hit.id];
        let mut parent = hit.parent;
        // Bounded by the number of regions, so a bad parent link cannot loop
        while let Some(parent_id) = parent {
            if path.len() > inner.regions.len() {
                break;
            }
            path.push(parent_id);
            parent = inner
                .regions
                .iter()
                .find(|r| r.id == parent_id)
                .and_then(|r| r.parent);
        }
        path.reverse();

        PointerEvent { pos, path }
    }

    /// Hand `event` to every listener.
    ///
    /// Listeners may drop subscriptions while running; those are removed
    /// once the dispatch completes and will not be called again.
    pub fn dispatch(&self, event: &PointerEvent) {
        let mut listeners = {
            let mut inner = self.inner.borrow_mut();
            inner.dispatching = true;
            std::mem::take(&mut inner.listeners)
        };

        for (_, listener) in listeners.iter_mut() {
            listener(event);
        }

        let released: Vec<(u64, Listener)> = {
            let mut inner = self.inner.borrow_mut();
            inner.dispatching = false;
            let detached = std::mem::take(&mut inner.detached);
            let (released, mut kept): (Vec<_>, Vec<_>) = listeners
                .into_iter()
                .partition(|(id, _)| detached.contains(id));
            // Subscriptions made during the dispatch
            kept.append(&mut inner.listeners);
            inner.listeners = kept;
            released
        };
        // Listeners may own subscriptions to this hub; drop them unborrowed
        drop(released);
    }

    /// Unlink a listener. The caller drops the returned listener after
    /// releasing its borrow of the hub.
    fn remove(inner: &mut HubInner, id: u64) -> Option<Listener> {
        let removed = if let Some(idx) = inner.listeners.iter().position(|(lid, _)| *lid == id) {
            Some(inner.listeners.remove(idx).1)
        } else if inner.dispatching {
            inner.detached.insert(id);
            None
        } else {
            return None;
        };
        inner.stats.deregistered += 1;
        tracing::trace!(listener = id, "pointer listener deregistered");
        removed
    }
}

/// Keeps a pointer listener registered for as long as it lives.
#[must_use = "dropping a Subscription deregisters the listener"]
pub struct Subscription {
    id: u64,
    hub: Weak<RefCell<HubInner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            let removed = PointerHub::remove(&mut hub.borrow_mut(), self.id);
            drop(removed);
        }
    }
}
