// ============================================================================
// REPORT STATE - Report selection and last generated result
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{AttendanceReport, ReportError, ReportKind};

#[derive(Clone)]
pub struct ReportState {
    pub kind: Rc<RefCell<ReportKind>>,
    /// Selected option of the target dropdown (student id, section id or "all")
    pub target: Rc<RefCell<Option<String>>>,
    pub result: Rc<RefCell<Option<Result<AttendanceReport, ReportError>>>>,
}

impl ReportState {
    pub fn new() -> Self {
        Self {
            kind: Rc::new(RefCell::new(ReportKind::Student)),
            target: Rc::new(RefCell::new(None)),
            result: Rc::new(RefCell::new(None)),
        }
    }

    /// Switching dimension forgets the previous target
    pub fn set_kind(&self, kind: ReportKind) {
        *self.kind.borrow_mut() = kind;
        *self.target.borrow_mut() = None;
    }

    pub fn get_kind(&self) -> ReportKind {
        *self.kind.borrow()
    }

    pub fn set_target(&self, target: Option<String>) {
        *self.target.borrow_mut() = target;
    }

    pub fn get_target(&self) -> Option<String> {
        self.target.borrow().clone()
    }

    pub fn set_result(&self, result: Option<Result<AttendanceReport, ReportError>>) {
        *self.result.borrow_mut() = result;
    }

    pub fn get_result(&self) -> Option<Result<AttendanceReport, ReportError>> {
        self.result.borrow().clone()
    }
}

impl Default for ReportState {
    fn default() -> Self {
        Self::new()
    }
}
