// ============================================================================
// DATA STORE - Snapshot of the five backend collections
// ============================================================================
// Read-only copies replaced wholesale after every load. Lives as long as the
// page session; nothing here is persisted.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::models::normalize::normalize_ids;
use crate::models::{
    AttendanceRecord, Collection, Rehearsal, ResourceKind, Section, SectionMembership, Student,
    PART_COLUMN,
};

/// Placeholder shown when a student has no section
pub const NO_PART: &str = "N/A";

/// One rendered table row: primary key plus (column, text) cells in order
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayRow {
    pub primary_key: String,
    pub cells: Vec<(String, String)>,
}

impl DisplayRow {
    pub fn cell(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone)]
pub struct DataStore {
    pub students: Rc<RefCell<Vec<Student>>>,
    pub sections: Rc<RefCell<Vec<Section>>>,
    pub rehearsals: Rc<RefCell<Vec<Rehearsal>>>,
    pub memberships: Rc<RefCell<Vec<SectionMembership>>>,
    pub attendance: Rc<RefCell<Vec<AttendanceRecord>>>,
}

impl DataStore {
    pub fn new() -> Self {
        Self {
            students: Rc::new(RefCell::new(Vec::new())),
            sections: Rc::new(RefCell::new(Vec::new())),
            rehearsals: Rc::new(RefCell::new(Vec::new())),
            memberships: Rc::new(RefCell::new(Vec::new())),
            attendance: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Normalize identifiers of a raw collection body and swap it into the
    /// store. On a decode error the previous snapshot is kept.
    pub fn replace_collection(&self, collection: Collection, mut rows: Vec<Value>) -> Result<usize, String> {
        normalize_ids(&mut rows, collection.id_fields());
        let count = rows.len();
        match collection {
            Collection::Students => *self.students.borrow_mut() = decode_rows(collection, rows)?,
            Collection::Sections => *self.sections.borrow_mut() = decode_rows(collection, rows)?,
            Collection::Rehearsals => *self.rehearsals.borrow_mut() = decode_rows(collection, rows)?,
            Collection::SectionStudents => *self.memberships.borrow_mut() = decode_rows(collection, rows)?,
            Collection::Attendance => *self.attendance.borrow_mut() = decode_rows(collection, rows)?,
        }
        Ok(count)
    }

    pub fn students(&self) -> Vec<Student> {
        self.students.borrow().clone()
    }

    pub fn sections(&self) -> Vec<Section> {
        self.sections.borrow().clone()
    }

    pub fn rehearsals(&self) -> Vec<Rehearsal> {
        self.rehearsals.borrow().clone()
    }

    pub fn memberships(&self) -> Vec<SectionMembership> {
        self.memberships.borrow().clone()
    }

    pub fn attendance(&self) -> Vec<AttendanceRecord> {
        self.attendance.borrow().clone()
    }

    pub fn find_student(&self, student_id: &str) -> Option<Student> {
        self.students.borrow().iter().find(|s| s.student_id == student_id).cloned()
    }

    pub fn find_section(&self, section_id: &str) -> Option<Section> {
        self.sections.borrow().iter().find(|s| s.section_id == section_id).cloned()
    }

    pub fn find_rehearsal(&self, rehearsal_id: &str) -> Option<Rehearsal> {
        self.rehearsals.borrow().iter().find(|r| r.rehearsal_id == rehearsal_id).cloned()
    }

    /// Ids of the students with a membership row for the section
    pub fn members_of(&self, section_id: &str) -> HashSet<String> {
        self.memberships
            .borrow()
            .iter()
            .filter(|m| m.section_id == section_id)
            .map(|m| m.student_id.clone())
            .collect()
    }

    /// Names of the sections a student belongs to, membership order
    pub fn section_names_for(&self, student_id: &str) -> Vec<String> {
        let sections = self.sections.borrow();
        self.memberships
            .borrow()
            .iter()
            .filter(|m| m.student_id == student_id)
            .filter_map(|m| sections.iter().find(|s| s.section_id == m.section_id))
            .map(|s| s.section_name.clone())
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Comma-joined section names, or "N/A"
    pub fn part_label(&self, student_id: &str) -> String {
        let names = self.section_names_for(student_id);
        if names.is_empty() {
            NO_PART.to_string()
        } else {
            names.join(", ")
        }
    }

    /// True when `marker` already submitted attendance for the rehearsal
    pub fn has_submission(&self, rehearsal_id: &str, marker: &str) -> bool {
        self.attendance
            .borrow()
            .iter()
            .any(|rec| rec.rehearsal_id == rehearsal_id && rec.marked_by == marker)
    }

    /// Rows of an editable table, store order
    pub fn rows_for(&self, kind: ResourceKind) -> Vec<DisplayRow> {
        let columns = kind.columns();
        match kind {
            ResourceKind::Students => self
                .students
                .borrow()
                .iter()
                .map(|student| DisplayRow {
                    primary_key: student.student_id.clone(),
                    cells: columns
                        .iter()
                        .map(|col| {
                            let value = if *col == PART_COLUMN {
                                self.part_label(&student.student_id)
                            } else {
                                student.field(col)
                            };
                            (col.to_string(), value)
                        })
                        .collect(),
                })
                .collect(),
            ResourceKind::Sections => self
                .sections
                .borrow()
                .iter()
                .map(|section| DisplayRow {
                    primary_key: section.section_id.clone(),
                    cells: columns.iter().map(|col| (col.to_string(), section.field(col))).collect(),
                })
                .collect(),
            ResourceKind::Rehearsals => self
                .rehearsals
                .borrow()
                .iter()
                .map(|rehearsal| DisplayRow {
                    primary_key: rehearsal.rehearsal_id.clone(),
                    cells: columns.iter().map(|col| (col.to_string(), rehearsal.field(col))).collect(),
                })
                .collect(),
        }
    }

    pub fn find_row(&self, kind: ResourceKind, primary_key: &str) -> Option<DisplayRow> {
        self.rows_for(kind).into_iter().find(|row| row.primary_key == primary_key)
    }

    /// Drop every snapshot (logout)
    pub fn clear(&self) {
        self.students.borrow_mut().clear();
        self.sections.borrow_mut().clear();
        self.rehearsals.borrow_mut().clear();
        self.memberships.borrow_mut().clear();
        self.attendance.borrow_mut().clear();
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_rows<T: DeserializeOwned>(collection: Collection, rows: Vec<Value>) -> Result<Vec<T>, String> {
    serde_json::from_value(Value::Array(rows))
        .map_err(|e| format!("Error decoding {}: {}", collection.key(), e))
}
