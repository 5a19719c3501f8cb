// ============================================================================
// ATTENDANCE STATE - Roster selection, roster and save status line
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::AttendanceStatus;

/// Value of the "all sections" option in section dropdowns
pub const ALL_SECTIONS: &str = "all";

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SectionFilter {
    All,
    Section(String),
}

impl SectionFilter {
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SECTIONS || value.is_empty() {
            SectionFilter::All
        } else {
            SectionFilter::Section(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SectionFilter::All => ALL_SECTIONS,
            SectionFilter::Section(id) => id,
        }
    }
}

impl Default for SectionFilter {
    fn default() -> Self {
        SectionFilter::All
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct RosterEntry {
    pub student_id: String,
    pub name: String,
    pub parts: String,
    pub status: AttendanceStatus,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Roster {
    pub rehearsal_id: String,
    /// Text of the selected rehearsal option (its date)
    pub rehearsal_label: String,
    /// Section name, None for all sections
    pub section_name: Option<String>,
    pub entries: Vec<RosterEntry>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Info => "status-info",
            Tone::Success => "status-success",
            Tone::Warning => "status-warning",
            Tone::Error => "status-error",
        }
    }
}

/// Message under the save button
#[derive(Clone, PartialEq, Debug)]
pub struct StatusLine {
    pub message: String,
    pub tone: Tone,
}

#[derive(Clone)]
pub struct AttendanceState {
    pub selected_rehearsal: Rc<RefCell<Option<String>>>,
    pub section_filter: Rc<RefCell<SectionFilter>>,
    pub roster: Rc<RefCell<Option<Roster>>>,
    /// Set when "load" found nobody to list
    pub roster_empty: Rc<RefCell<bool>>,
    pub save_status: Rc<RefCell<Option<StatusLine>>>,
}

impl AttendanceState {
    pub fn new() -> Self {
        Self {
            selected_rehearsal: Rc::new(RefCell::new(None)),
            section_filter: Rc::new(RefCell::new(SectionFilter::All)),
            roster: Rc::new(RefCell::new(None)),
            roster_empty: Rc::new(RefCell::new(false)),
            save_status: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_rehearsal(&self, rehearsal_id: Option<String>) {
        *self.selected_rehearsal.borrow_mut() = rehearsal_id;
    }

    pub fn get_rehearsal(&self) -> Option<String> {
        self.selected_rehearsal.borrow().clone()
    }

    pub fn set_section_filter(&self, filter: SectionFilter) {
        *self.section_filter.borrow_mut() = filter;
    }

    pub fn get_section_filter(&self) -> SectionFilter {
        self.section_filter.borrow().clone()
    }

    pub fn set_roster(&self, roster: Option<Roster>) {
        *self.roster_empty.borrow_mut() = matches!(&roster, Some(r) if r.entries.is_empty());
        *self.roster.borrow_mut() = roster.filter(|r| !r.entries.is_empty());
    }

    pub fn get_roster(&self) -> Option<Roster> {
        self.roster.borrow().clone()
    }

    pub fn is_roster_empty(&self) -> bool {
        *self.roster_empty.borrow()
    }

    /// Change one student's choice on the current roster
    pub fn set_status(&self, student_id: &str, status: AttendanceStatus) {
        if let Some(roster) = self.roster.borrow_mut().as_mut() {
            if let Some(entry) = roster.entries.iter_mut().find(|e| e.student_id == student_id) {
                entry.status = status;
            }
        }
    }

    pub fn set_save_status(&self, message: impl Into<String>, tone: Tone) {
        *self.save_status.borrow_mut() = Some(StatusLine { message: message.into(), tone });
    }

    pub fn get_save_status(&self) -> Option<StatusLine> {
        self.save_status.borrow().clone()
    }

    pub fn clear_roster(&self) {
        *self.roster.borrow_mut() = None;
        *self.roster_empty.borrow_mut() = false;
    }
}

impl Default for AttendanceState {
    fn default() -> Self {
        Self::new()
    }
}
