// ============================================================================
// TABLE VIEWMODEL - Edit / save / delete / add for the editable tables
// ============================================================================
// Rows move display → editing on edit and back only when the backend accepts
// the save. Every successful mutation is followed by a full reload.
// ============================================================================

use std::rc::Rc;
use serde_json::Value;
use crate::error::ClientResult;
use crate::models::{DeleteRequest, RecordPayload, RecordRequest, ResourceKind};
use crate::services::{Backend, Dialogs};
use crate::state::{AppState, DisplayRow, NewRowDraft, RowDraft};
use crate::utils::{t, tf};
use crate::viewmodels::DataViewModel;

/// Key sent instead of the derived `part` cell when adding a student
pub const NEW_STUDENT_SECTION_FIELD: &str = "section_id";

/// Buttons in a row's actions cell
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RowAction {
    Edit,
    Save,
    Delete,
    SaveNew,
    Cancel,
}

/// One rendered table row, in the order the table shows them
#[derive(Clone, PartialEq, Debug)]
pub enum TableRow {
    New(NewRowDraft),
    Display(DisplayRow),
    Editing(DisplayRow, RowDraft),
}

impl TableRow {
    /// Edit and save swap places; delete stays while editing
    pub fn actions(&self) -> &'static [RowAction] {
        match self {
            TableRow::New(_) => &[RowAction::SaveNew, RowAction::Cancel],
            TableRow::Display(_) => &[RowAction::Edit, RowAction::Delete],
            TableRow::Editing(..) => &[RowAction::Save, RowAction::Delete],
        }
    }
}

pub struct TableViewModel<B: Backend, D: Dialogs> {
    state: AppState,
    backend: Rc<B>,
    dialogs: Rc<D>,
    data: DataViewModel<B>,
}

impl<B: Backend, D: Dialogs> Clone for TableViewModel<B, D> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            backend: self.backend.clone(),
            dialogs: self.dialogs.clone(),
            data: self.data.clone(),
        }
    }
}

impl<B: Backend, D: Dialogs> TableViewModel<B, D> {
    pub fn new(state: AppState, backend: Rc<B>, dialogs: Rc<D>) -> Self {
        let data = DataViewModel::new(state.clone(), backend.clone());
        Self { state, backend, dialogs, data }
    }

    /// Pending new row first, then the stored rows in store order
    pub fn rows(&self, kind: ResourceKind) -> Vec<TableRow> {
        let mut edit_state = self.state.tables.table(kind);
        let mut rows: Vec<TableRow> = edit_state.new_row.take().map(TableRow::New).into_iter().collect();
        rows.extend(self.state.store.rows_for(kind).into_iter().map(|row| {
            match edit_state.editing.remove(&row.primary_key) {
                Some(draft) => TableRow::Editing(row, draft),
                None => TableRow::Display(row),
            }
        }));
        rows
    }

    // ------------------------------------------------------------------
    // existing rows
    // ------------------------------------------------------------------

    /// Turn the editable cells of a row into inputs seeded with their text
    pub fn begin_edit(&self, kind: ResourceKind, primary_key: &str) {
        let Some(row) = self.state.store.find_row(kind, primary_key) else {
            log::warn!("⚠️ [TABLE] No {} row with key {}", kind.key(), primary_key);
            return;
        };
        let draft: RowDraft = row
            .cells
            .iter()
            .filter(|(column, _)| !kind.is_read_only(column))
            .map(|(column, value)| (column.clone(), value.clone()))
            .collect();
        self.state.tables.begin_edit(kind, primary_key, draft);
        self.state.notify_changed();
    }

    /// Typed text; kept in state only, no re-render
    pub fn set_draft_value(&self, kind: ResourceKind, primary_key: &str, column: &str, value: String) {
        self.state.tables.set_draft_value(kind, primary_key, column, value);
    }

    /// Record for /api/update_data: input values where present, else the
    /// row's current text. Derived columns are left out.
    pub fn build_update_record(&self, kind: ResourceKind, primary_key: &str) -> RecordPayload {
        let row = self.state.store.find_row(kind, primary_key);
        let draft = self.state.tables.draft(kind, primary_key).unwrap_or_default();

        let mut record = RecordPayload::new();
        for column in kind.record_columns() {
            let value = if column == kind.primary_key() {
                primary_key.to_string()
            } else if let Some(typed) = draft.get(column) {
                typed.clone()
            } else {
                row.as_ref()
                    .and_then(|r| r.cell(column))
                    .unwrap_or_default()
                    .to_string()
            };
            record.insert(column.to_string(), Value::String(value));
        }
        record
    }

    pub async fn save(&self, kind: ResourceKind, primary_key: &str) -> ClientResult<()> {
        let lang = self.state.lang();
        let request = RecordRequest::new(kind, self.build_update_record(kind, primary_key));
        log::info!("💾 [TABLE] Saving {} {}", kind.key(), primary_key);

        match self.backend.update_record(&request).await {
            Ok(response) => {
                self.state.tables.finish_edit(kind, primary_key);
                let message = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| t("update_success", &lang));
                self.state.notifications.success(message);
                self.data.reload().await;
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [TABLE] Save failed: {}", e);
                self.state
                    .notifications
                    .error(tf("update_failed", &lang, &[&e.to_string()]));
                self.state.notify_changed();
                Err(e)
            }
        }
    }

    /// Ask, then delete. Returns Ok(false) when the user declined.
    pub async fn delete(&self, kind: ResourceKind, primary_key: &str) -> ClientResult<bool> {
        let lang = self.state.lang();

        if !self.dialogs.confirm(&tf("delete_confirm", &lang, &[primary_key])) {
            self.state.notifications.info(t("delete_cancelled", &lang));
            self.state.notify_changed();
            return Ok(false);
        }

        let request = DeleteRequest::new(kind, primary_key);
        log::info!("🗑️ [TABLE] Deleting {} {}", kind.key(), primary_key);

        match self.backend.delete_record(&request).await {
            Ok(response) => {
                self.state.tables.finish_edit(kind, primary_key);
                let message = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| t("delete_success", &lang));
                self.state.notifications.success(message);
                self.data.reload().await;
                Ok(true)
            }
            Err(e) => {
                log::error!("❌ [TABLE] Delete failed: {}", e);
                self.state
                    .notifications
                    .error(tf("delete_failed", &lang, &[&e.to_string()]));
                self.state.notify_changed();
                Err(e)
            }
        }
    }

    // ------------------------------------------------------------------
    // new row
    // ------------------------------------------------------------------

    /// Open the unsaved row; a second one is refused with an alert
    pub fn begin_add(&self, kind: ResourceKind) -> bool {
        if !self.state.tables.begin_add(kind) {
            self.dialogs.alert(&t("add_pending", &self.state.lang()));
            return false;
        }
        self.state.notify_changed();
        true
    }

    pub fn set_new_value(&self, kind: ResourceKind, column: &str, value: String) {
        self.state.tables.set_new_value(kind, column, value);
    }

    pub fn set_new_section(&self, kind: ResourceKind, section_id: String) {
        self.state.tables.set_new_section(kind, section_id);
    }

    pub fn cancel_add(&self, kind: ResourceKind) {
        self.state.tables.cancel_add(kind);
        self.state.notify_changed();
    }

    /// Record for /api/add_data. The key is assigned by the server; a new
    /// student carries the chosen section as `section_id`.
    pub fn build_new_record(&self, kind: ResourceKind) -> RecordPayload {
        let draft = self.state.tables.new_row(kind).unwrap_or_default();
        let mut record = RecordPayload::new();
        for column in kind.input_columns() {
            let value = draft.values.get(column).cloned().unwrap_or_default();
            record.insert(column.to_string(), Value::String(value));
        }
        if kind == ResourceKind::Students {
            record.insert(
                NEW_STUDENT_SECTION_FIELD.to_string(),
                Value::String(draft.section_id),
            );
        }
        record
    }

    pub async fn save_new(&self, kind: ResourceKind) -> ClientResult<()> {
        let lang = self.state.lang();
        let request = RecordRequest::new(kind, self.build_new_record(kind));
        log::info!("➕ [TABLE] Adding {} row", kind.key());

        match self.backend.add_record(&request).await {
            Ok(_) => {
                self.state.tables.cancel_add(kind);
                self.state.notifications.success(t("add_success", &lang));
                self.data.reload().await;
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [TABLE] Add failed: {}", e);
                self.state
                    .notifications
                    .error(tf("add_failed", &lang, &[&e.to_string()]));
                self.state.notify_changed();
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use crate::error::ClientError;
    use crate::models::Collection;
    use crate::services::fake_backend::{Call, FakeBackend, ScriptedDialogs};
    use crate::state::Severity;

    fn setup(dialogs: ScriptedDialogs) -> (AppState, Rc<FakeBackend>, Rc<ScriptedDialogs>, TableViewModel<FakeBackend, ScriptedDialogs>) {
        let state = AppState::new("KO");
        let backend = Rc::new(FakeBackend::with_sample_data());
        let dialogs = Rc::new(dialogs);
        let vm = TableViewModel::new(state.clone(), backend.clone(), dialogs.clone());
        block_on(vm.data.reload());
        (state, backend, dialogs, vm)
    }

    #[test]
    fn edit_save_reload_shows_the_submitted_value() {
        let (state, backend, _dialogs, vm) = setup(ScriptedDialogs::accepting());

        vm.begin_edit(ResourceKind::Students, "2");
        assert!(state.tables.is_editing(ResourceKind::Students, "2"));
        vm.set_draft_value(ResourceKind::Students, "2", "contact", "010-2222".into());

        block_on(vm.save(ResourceKind::Students, "2")).unwrap();

        let row = state.store.find_row(ResourceKind::Students, "2").unwrap();
        assert_eq!(row.cell("contact"), Some("010-2222"));
        assert_eq!(row.cell("name"), Some("Lee"));
        assert!(!state.tables.is_editing(ResourceKind::Students, "2"));

        let update = backend
            .mutations()
            .into_iter()
            .find_map(|c| match c {
                Call::Update(req) => Some(req),
                _ => None,
            })
            .unwrap();
        assert_eq!(update.filename, "students.csv");
        assert_eq!(update.primary_key_col, "student_id");
        assert_eq!(update.record["student_id"], json!("2"));
        assert!(!update.record.contains_key("part"));
    }

    #[test]
    fn failed_save_keeps_the_row_editing_with_typed_values() {
        let (state, backend, _dialogs, vm) = setup(ScriptedDialogs::accepting());
        backend.fail("update", ClientError::Backend("locked".into()));

        vm.begin_edit(ResourceKind::Sections, "10");
        vm.set_draft_value(ResourceKind::Sections, "10", "section_name", "Viola".into());
        let fetches_before = backend.fetch_count();

        assert!(block_on(vm.save(ResourceKind::Sections, "10")).is_err());

        assert!(state.tables.is_editing(ResourceKind::Sections, "10"));
        let draft = state.tables.draft(ResourceKind::Sections, "10").unwrap();
        assert_eq!(draft["section_name"], "Viola");
        assert_eq!(backend.fetch_count(), fetches_before);
        let last = state.notifications.pending().pop().unwrap();
        assert_eq!(last.severity, Severity::Error);
        assert_eq!(last.message, "수정 실패: locked");
    }

    #[test]
    fn declined_delete_sends_nothing() {
        let (state, backend, dialogs, vm) = setup(ScriptedDialogs::declining());

        assert!(!block_on(vm.delete(ResourceKind::Rehearsals, "100")).unwrap());

        assert!(backend.mutations().is_empty());
        assert_eq!(dialogs.confirm_count(), 1);
        assert!(dialogs.confirms.borrow()[0].contains("(ID: 100)"));
        let last = state.notifications.pending().pop().unwrap();
        assert_eq!(last.severity, Severity::Info);
        assert_eq!(last.message, "삭제가 취소되었습니다.");
    }

    #[test]
    fn confirmed_delete_removes_the_row_after_reload() {
        let (state, backend, _dialogs, vm) = setup(ScriptedDialogs::accepting());

        assert!(block_on(vm.delete(ResourceKind::Rehearsals, "100")).unwrap());

        assert!(state.store.find_rehearsal("100").is_none());
        assert_eq!(
            backend.mutations(),
            vec![Call::Delete(DeleteRequest::new(ResourceKind::Rehearsals, "100"))]
        );
    }

    #[test]
    fn second_add_is_rejected_with_an_alert() {
        let (state, _backend, dialogs, vm) = setup(ScriptedDialogs::accepting());

        assert!(vm.begin_add(ResourceKind::Sections));
        vm.set_new_value(ResourceKind::Sections, "section_name", "Flute".into());
        assert!(!vm.begin_add(ResourceKind::Sections));

        assert_eq!(dialogs.alert_count(), 1);
        assert_eq!(
            state.tables.new_row(ResourceKind::Sections).unwrap().values["section_name"],
            "Flute"
        );

        vm.cancel_add(ResourceKind::Sections);
        assert!(vm.begin_add(ResourceKind::Sections));
    }

    #[test]
    fn new_student_is_sent_with_its_section() {
        let (state, backend, _dialogs, vm) = setup(ScriptedDialogs::accepting());

        vm.begin_add(ResourceKind::Students);
        vm.set_new_value(ResourceKind::Students, "name", "Choi".into());
        vm.set_new_section(ResourceKind::Students, "20".into());
        block_on(vm.save_new(ResourceKind::Students)).unwrap();

        let add = backend
            .mutations()
            .into_iter()
            .find_map(|c| match c {
                Call::Add(req) => Some(req),
                _ => None,
            })
            .unwrap();
        assert_eq!(add.record["section_id"], json!("20"));
        assert_eq!(add.record["name"], json!("Choi"));
        assert!(!add.record.contains_key("student_id"));
        assert!(!add.record.contains_key("part"));

        assert!(!state.tables.has_pending_add(ResourceKind::Students));
        let choi = state.store.students().into_iter().find(|s| s.name == "Choi").unwrap();
        assert_eq!(choi.student_id, "4");
        assert_eq!(state.store.part_label("4"), "Cello");
        assert_eq!(backend.rows(Collection::SectionStudents).len(), 5);
    }

    #[test]
    fn failed_add_keeps_the_pending_row() {
        let (state, backend, _dialogs, vm) = setup(ScriptedDialogs::accepting());
        backend.fail("add", ClientError::Http { status: 400, message: "Invalid filename".into() });

        vm.begin_add(ResourceKind::Rehearsals);
        assert!(block_on(vm.save_new(ResourceKind::Rehearsals)).is_err());

        assert!(state.tables.has_pending_add(ResourceKind::Rehearsals));
        assert_eq!(state.notifications.pending().pop().unwrap().message, "추가 실패: Invalid filename");
    }

    #[test]
    fn pending_row_comes_first_and_editing_rows_keep_delete() {
        let (_state, _backend, _dialogs, vm) = setup(ScriptedDialogs::accepting());

        vm.begin_edit(ResourceKind::Sections, "20");
        assert!(vm.begin_add(ResourceKind::Sections));

        let rows = vm.rows(ResourceKind::Sections);
        assert_eq!(rows.len(), 3);
        assert!(matches!(rows[0], TableRow::New(_)));
        assert_eq!(rows[0].actions(), &[RowAction::SaveNew, RowAction::Cancel]);

        match &rows[1] {
            TableRow::Display(row) => assert_eq!(row.primary_key, "10"),
            other => panic!("expected display row, got {:?}", other),
        }
        assert_eq!(rows[1].actions(), &[RowAction::Edit, RowAction::Delete]);

        match &rows[2] {
            TableRow::Editing(row, draft) => {
                assert_eq!(row.primary_key, "20");
                assert_eq!(draft.get("section_name").map(String::as_str), Some("Cello"));
            }
            other => panic!("expected editing row, got {:?}", other),
        }
        assert_eq!(rows[2].actions(), &[RowAction::Save, RowAction::Delete]);
    }
}
