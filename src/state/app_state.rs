// ============================================================================
// APP STATE - Global application state
// ============================================================================
// Plain Rc<RefCell> cells plus one change-subscriber list. The browser layer
// (App) subscribes and re-renders; viewmodels mutate and call notify_changed.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::ResourceKind;
use crate::state::{AttendanceState, AuthState, DataStore, Notifications, ReportState, TablesState};

/// Top-level screens reachable from the navigation bar
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Screen {
    Attendance,
    Data,
    Reports,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Attendance, Screen::Data, Screen::Reports];

    pub fn label_key(&self) -> &'static str {
        match self {
            Screen::Attendance => "nav_attendance",
            Screen::Data => "nav_data",
            Screen::Reports => "nav_reports",
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub store: DataStore,
    pub tables: TablesState,
    pub attendance: AttendanceState,
    pub report: ReportState,
    pub notifications: Notifications,

    // UI State
    pub screen: Rc<RefCell<Screen>>,
    pub data_tab: Rc<RefCell<ResourceKind>>,
    pub language: Rc<RefCell<String>>,
    pub loading: Rc<RefCell<bool>>,

    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            auth: AuthState::new(),
            store: DataStore::new(),
            tables: TablesState::new(),
            attendance: AttendanceState::new(),
            report: ReportState::new(),
            notifications: Notifications::new(),

            screen: Rc::new(RefCell::new(Screen::Attendance)),
            data_tab: Rc::new(RefCell::new(ResourceKind::Students)),
            language: Rc::new(RefCell::new(language.into())),
            loading: Rc::new(RefCell::new(false)),

            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn lang(&self) -> String {
        self.language.borrow().clone()
    }

    pub fn set_language(&self, lang: impl Into<String>) {
        *self.language.borrow_mut() = lang.into();
        self.notify_changed();
    }

    pub fn current_screen(&self) -> Screen {
        *self.screen.borrow()
    }

    pub fn set_screen(&self, screen: Screen) {
        *self.screen.borrow_mut() = screen;
        self.notify_changed();
    }

    pub fn current_data_tab(&self) -> ResourceKind {
        *self.data_tab.borrow()
    }

    pub fn set_data_tab(&self, kind: ResourceKind) {
        *self.data_tab.borrow_mut() = kind;
        self.notify_changed();
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_changed(&self) {
        let callbacks: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().iter().cloned().collect();
        for callback in callbacks {
            callback();
        }
    }

    /// Forget everything tied to the logged-in user
    pub fn reset_session(&self) {
        self.auth.logout();
        self.store.clear();
        self.tables.clear();
        self.attendance.clear_roster();
        self.report.set_result(None);
        *self.screen.borrow_mut() = Screen::Attendance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_cells_and_subscribers() {
        let state = AppState::new("KO");
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            state.subscribe_to_changes(move || hits.set(hits.get() + 1));
        }

        let clone = state.clone();
        clone.set_screen(Screen::Reports);
        clone.set_language("EN");

        assert_eq!(state.current_screen(), Screen::Reports);
        assert_eq!(state.lang(), "EN");
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn reset_session_returns_to_attendance_screen() {
        let state = AppState::new("KO");
        state.set_screen(Screen::Data);
        state.tables.begin_add(ResourceKind::Sections);
        state.reset_session();

        assert_eq!(state.current_screen(), Screen::Attendance);
        assert!(!state.tables.has_pending_add(ResourceKind::Sections));
        assert!(!state.auth.is_logged_in());
    }
}
