// ============================================================================
// REACTIVITY - Shared value with change subscribers
// ============================================================================
// Clones share both the value and the subscriber list, so a viewmodel holding
// a clone of AppState still reaches the listeners registered by App.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Shared handle to the inner value (mutations through it do not notify)
    pub fn get(&self) -> Rc<RefCell<T>> {
        self.value.clone()
    }

    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        // Snapshot so a callback may subscribe or read the value freely
        let callbacks: Vec<Callback> = self.subscribers.borrow().iter().cloned().collect();
        for callback in callbacks {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn snapshot(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(0u32);
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            state.subscribe(move || hits.set(hits.get() + 1));
        }

        let clone = state.clone();
        clone.update(|v| *v = 5);
        clone.update(|v| *v += 1);

        assert_eq!(state.snapshot(), 6);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn writes_through_get_do_not_notify() {
        let state = ReactiveState::new(vec![1, 2]);
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            state.subscribe(move || hits.set(hits.get() + 1));
        }
        state.get().borrow_mut().clear();
        assert!(state.snapshot().is_empty());
        assert_eq!(hits.get(), 0);
    }
}
