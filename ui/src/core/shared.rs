//! Single-threaded observable state cell shared between a session object and
//! the components rendering it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Handle returned by [`Shared::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: RefCell<T>,
    observers: RefCell<Vec<(ObserverId, Observer<T>)>>,
    next_id: Cell<u64>,
}

/// Cloning yields another handle to the same cell.
pub struct Shared<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                observers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.inner.value.borrow())
    }

    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> ObserverId {
        let id = ObserverId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .observers
            .borrow_mut()
            .push((id, Rc::new(observer)));
        id
    }

    pub fn unsubscribe(&self, id: ObserverId) {
        self.inner
            .observers
            .borrow_mut()
            .retain(|(existing, _)| *existing != id);
    }
}

impl<T: Clone> Shared<T> {
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Mutate in place, then notify observers.
    pub fn update<R>(&self, mutate: impl FnOnce(&mut T) -> R) -> R {
        let out = mutate(&mut self.inner.value.borrow_mut());
        self.notify();
        out
    }

    pub fn replace(&self, value: T) {
        self.update(|slot| *slot = value);
    }

    /// Arm `undo` to run through [`Shared::update`] if the returned guard is
    /// dropped before [`PendingGuard::disarm`]. Held across an await point,
    /// it rolls back a transition whose future was cancelled.
    pub fn pending(&self, undo: fn(&mut T)) -> PendingGuard<'_, T> {
        PendingGuard {
            cell: self,
            undo: Some(undo),
        }
    }

    fn notify(&self) {
        // Observers get a snapshot and no live borrow, so they may read,
        // write or (un)subscribe while being notified.
        let observers: Vec<Observer<T>> = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        if observers.is_empty() {
            return;
        }
        let snapshot = self.get();
        for observer in observers {
            observer(&snapshot);
        }
    }
}

#[must_use = "dropping the guard runs the rollback immediately"]
pub struct PendingGuard<'a, T: Clone> {
    cell: &'a Shared<T>,
    undo: Option<fn(&mut T)>,
}

impl<T: Clone> PendingGuard<'_, T> {
    pub fn disarm(mut self) {
        self.undo = None;
    }
}

impl<T: Clone> Drop for PendingGuard<'_, T> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            self.cell.update(undo);
        }
    }
}
