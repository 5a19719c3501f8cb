// ============================================================================
// VIEW CONTEXT - State plus the live services, handed to every view
// ============================================================================

use std::rc::Rc;
use crate::services::{ApiClient, BrowserDialogs};
use crate::state::AppState;
use crate::utils::{t, tf};
use crate::viewmodels::{
    AttendanceViewModel, ReportViewModel, SessionViewModel, TableViewModel, TransferViewModel,
};

#[derive(Clone)]
pub struct ViewContext {
    pub state: AppState,
    backend: Rc<ApiClient>,
    dialogs: Rc<BrowserDialogs>,
}

impl ViewContext {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            backend: Rc::new(ApiClient::new()),
            dialogs: Rc::new(BrowserDialogs),
        }
    }

    pub fn t(&self, key: &str) -> String {
        t(key, &self.state.lang())
    }

    pub fn tf(&self, key: &str, args: &[&str]) -> String {
        tf(key, &self.state.lang(), args)
    }

    pub fn session(&self) -> SessionViewModel<ApiClient> {
        SessionViewModel::new(self.state.clone(), self.backend.clone())
    }

    pub fn tables(&self) -> TableViewModel<ApiClient, BrowserDialogs> {
        TableViewModel::new(self.state.clone(), self.backend.clone(), self.dialogs.clone())
    }

    pub fn attendance(&self) -> AttendanceViewModel<ApiClient, BrowserDialogs> {
        AttendanceViewModel::new(self.state.clone(), self.backend.clone(), self.dialogs.clone())
    }

    pub fn reports(&self) -> ReportViewModel {
        ReportViewModel::new(self.state.clone())
    }

    pub fn transfer(&self) -> TransferViewModel<ApiClient, BrowserDialogs> {
        TransferViewModel::new(self.state.clone(), self.backend.clone(), self.dialogs.clone())
    }
}
