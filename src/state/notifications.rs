// ============================================================================
// NOTIFICATIONS - Toast queue
// ============================================================================
// Viewmodels push; the toast layer subscribes and drains. Nothing in here
// touches the DOM.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use crate::state::reactivity::ReactiveState;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "toast-success",
            Severity::Error => "toast-error",
            Severity::Info => "toast-info",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

#[derive(Clone)]
pub struct Notifications {
    queue: ReactiveState<Vec<Notification>>,
    next_id: Rc<Cell<u64>>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            queue: ReactiveState::new(Vec::new()),
            next_id: Rc::new(Cell::new(1)),
        }
    }

    pub fn push(&self, message: impl Into<String>, severity: Severity) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let notification = Notification { id, message: message.into(), severity };
        log::debug!("🔔 [TOAST] {:?}: {}", notification.severity, notification.message);
        self.queue.update(|queue| queue.push(notification));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message, Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message, Severity::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(message, Severity::Info);
    }

    /// Take every queued notification (does not notify)
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.queue.get().borrow_mut())
    }

    pub fn pending(&self) -> Vec<Notification> {
        self.queue.snapshot()
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.queue.subscribe(callback);
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}
