// ============================================================================
// TABLE STATE - Row edit drafts and the pending "new row" per table
// ============================================================================
// Input values live here instead of the DOM so a full re-render restores
// whatever the user was typing.
// ============================================================================

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use crate::models::ResourceKind;

/// column → typed text
pub type RowDraft = BTreeMap<String, String>;

/// Unsaved row created by "add"
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewRowDraft {
    pub values: RowDraft,
    /// Section picked for a new student (sent as `section_id`)
    pub section_id: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableEditState {
    /// primary key → draft, for rows in the editing state
    pub editing: BTreeMap<String, RowDraft>,
    pub new_row: Option<NewRowDraft>,
}

#[derive(Clone)]
pub struct TablesState {
    tables: Rc<RefCell<HashMap<ResourceKind, TableEditState>>>,
}

impl TablesState {
    pub fn new() -> Self {
        Self {
            tables: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn table(&self, kind: ResourceKind) -> TableEditState {
        self.tables.borrow().get(&kind).cloned().unwrap_or_default()
    }

    fn with_table<R>(&self, kind: ResourceKind, f: impl FnOnce(&mut TableEditState) -> R) -> R {
        let mut tables = self.tables.borrow_mut();
        f(tables.entry(kind).or_default())
    }

    // ------------------------------------------------------------------
    // display <-> editing
    // ------------------------------------------------------------------

    pub fn begin_edit(&self, kind: ResourceKind, primary_key: &str, draft: RowDraft) {
        self.with_table(kind, |t| {
            t.editing.insert(primary_key.to_string(), draft);
        });
    }

    pub fn is_editing(&self, kind: ResourceKind, primary_key: &str) -> bool {
        self.tables
            .borrow()
            .get(&kind)
            .map(|t| t.editing.contains_key(primary_key))
            .unwrap_or(false)
    }

    pub fn draft(&self, kind: ResourceKind, primary_key: &str) -> Option<RowDraft> {
        self.tables
            .borrow()
            .get(&kind)
            .and_then(|t| t.editing.get(primary_key).cloned())
    }

    pub fn set_draft_value(&self, kind: ResourceKind, primary_key: &str, column: &str, value: String) {
        self.with_table(kind, |t| {
            if let Some(draft) = t.editing.get_mut(primary_key) {
                draft.insert(column.to_string(), value);
            }
        });
    }

    pub fn finish_edit(&self, kind: ResourceKind, primary_key: &str) {
        self.with_table(kind, |t| {
            t.editing.remove(primary_key);
        });
    }

    // ------------------------------------------------------------------
    // pending new row
    // ------------------------------------------------------------------

    /// Open an unsaved row. Returns false when one is already open.
    pub fn begin_add(&self, kind: ResourceKind) -> bool {
        self.with_table(kind, |t| {
            if t.new_row.is_some() {
                return false;
            }
            let values = kind
                .input_columns()
                .into_iter()
                .map(|col| (col.to_string(), String::new()))
                .collect();
            t.new_row = Some(NewRowDraft { values, section_id: String::new() });
            true
        })
    }

    pub fn has_pending_add(&self, kind: ResourceKind) -> bool {
        self.tables
            .borrow()
            .get(&kind)
            .map(|t| t.new_row.is_some())
            .unwrap_or(false)
    }

    pub fn new_row(&self, kind: ResourceKind) -> Option<NewRowDraft> {
        self.tables.borrow().get(&kind).and_then(|t| t.new_row.clone())
    }

    pub fn set_new_value(&self, kind: ResourceKind, column: &str, value: String) {
        self.with_table(kind, |t| {
            if let Some(row) = t.new_row.as_mut() {
                row.values.insert(column.to_string(), value);
            }
        });
    }

    pub fn set_new_section(&self, kind: ResourceKind, section_id: String) {
        self.with_table(kind, |t| {
            if let Some(row) = t.new_row.as_mut() {
                row.section_id = section_id;
            }
        });
    }

    pub fn cancel_add(&self, kind: ResourceKind) {
        self.with_table(kind, |t| t.new_row = None);
    }

    pub fn clear(&self) {
        self.tables.borrow_mut().clear();
    }
}

impl Default for TablesState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_add_is_refused_until_cancel() {
        let tables = TablesState::new();
        assert!(tables.begin_add(ResourceKind::Sections));
        assert!(!tables.begin_add(ResourceKind::Sections));
        // other tables are independent
        assert!(tables.begin_add(ResourceKind::Rehearsals));

        tables.cancel_add(ResourceKind::Sections);
        assert!(!tables.has_pending_add(ResourceKind::Sections));
        assert!(tables.begin_add(ResourceKind::Sections));
    }

    #[test]
    fn new_row_starts_with_empty_inputs() {
        let tables = TablesState::new();
        tables.begin_add(ResourceKind::Students);
        let row = tables.new_row(ResourceKind::Students).unwrap();
        assert_eq!(row.values.keys().cloned().collect::<Vec<_>>(), vec!["contact", "join_date", "name", "status"]);
        assert!(row.values.values().all(String::is_empty));
        assert!(row.section_id.is_empty());
    }

    #[test]
    fn draft_values_only_apply_to_rows_being_edited() {
        let tables = TablesState::new();
        tables.set_draft_value(ResourceKind::Sections, "1", "section_name", "Viola".into());
        assert!(tables.draft(ResourceKind::Sections, "1").is_none());

        tables.begin_edit(ResourceKind::Sections, "1", RowDraft::new());
        tables.set_draft_value(ResourceKind::Sections, "1", "section_name", "Viola".into());
        assert_eq!(
            tables.draft(ResourceKind::Sections, "1").unwrap().get("section_name").map(String::as_str),
            Some("Viola")
        );
        tables.finish_edit(ResourceKind::Sections, "1");
        assert!(!tables.is_editing(ResourceKind::Sections, "1"));
    }
}
