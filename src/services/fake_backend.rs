// In-memory Backend and Dialogs used by viewmodel tests. Mirrors the server's
// observable behavior closely enough for request → reload → render flows.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use serde_json::{json, Map, Value};
use crate::error::{ClientError, ClientResult};
use crate::models::normalize::scalar_to_string;
use crate::models::{
    ApiResponse, AttendanceBatch, Collection, DeleteRequest, LoginRequest, RecordRequest,
    ResourceKind, User,
};
use crate::services::backend::Backend;
use crate::services::dialog_service::Dialogs;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Login(String),
    Fetch(Collection),
    Update(RecordRequest),
    Delete(DeleteRequest),
    Add(RecordRequest),
    Attendance(AttendanceBatch),
    Export,
    Import(String),
}

impl Call {
    fn is_fetch(&self) -> bool {
        matches!(self, Call::Fetch(_))
    }
}

pub struct FakeBackend {
    tables: RefCell<HashMap<Collection, Vec<Value>>>,
    calls: RefCell<Vec<Call>>,
    failures: RefCell<HashMap<&'static str, ClientError>>,
    fetch_failures: RefCell<HashMap<Collection, ClientError>>,
    password: String,
    user: User,
}

impl FakeBackend {
    pub fn empty() -> Self {
        let tables = Collection::ALL.iter().map(|c| (*c, Vec::new())).collect();
        Self {
            tables: RefCell::new(tables),
            calls: RefCell::new(Vec::new()),
            failures: RefCell::new(HashMap::new()),
            fetch_failures: RefCell::new(HashMap::new()),
            password: "secret".to_string(),
            user: User {
                username: "maestro".to_string(),
                name: "김지휘".to_string(),
                extra: Map::new(),
            },
        }
    }

    /// Numeric identifiers, as the SQLite-backed server returns them
    pub fn with_sample_data() -> Self {
        let backend = Self::empty();
        backend.seed(Collection::Students, json!([
            {"student_id": 1, "name": "Kim", "contact": "010-1111", "join_date": "2024-03-01", "status": "active"},
            {"student_id": 2, "name": "Lee", "contact": null, "join_date": "2024-03-02", "status": "active"},
            {"student_id": 3, "name": "Park", "contact": "010-3333", "join_date": "2024-04-01", "status": "rest"}
        ]));
        backend.seed(Collection::Sections, json!([
            {"section_id": 10, "section_name": "Violin"},
            {"section_id": 20, "section_name": "Cello"}
        ]));
        backend.seed(Collection::Rehearsals, json!([
            {"rehearsal_id": 100, "date": "2025-01-10", "location": "Hall A", "description": "Tutti"},
            {"rehearsal_id": 101, "date": "2025-01-17", "location": "Hall B", "description": "Sectional"}
        ]));
        backend.seed(Collection::SectionStudents, json!([
            {"section_id": 10, "student_id": 3},
            {"section_id": 10, "student_id": 1},
            {"section_id": 20, "student_id": 2},
            {"section_id": 10, "student_id": 3}
        ]));
        backend
    }

    pub fn seed(&self, collection: Collection, rows: Value) {
        let rows = rows.as_array().cloned().unwrap_or_default();
        self.tables.borrow_mut().insert(collection, rows);
    }

    pub fn rows(&self, collection: Collection) -> Vec<Value> {
        self.tables.borrow().get(&collection).cloned().unwrap_or_default()
    }

    /// Make every later call of `operation` fail until cleared
    pub fn fail(&self, operation: &'static str, error: ClientError) {
        self.failures.borrow_mut().insert(operation, error);
    }

    pub fn fail_fetch(&self, collection: Collection, error: ClientError) {
        self.fetch_failures.borrow_mut().insert(collection, error);
    }

    pub fn clear_failures(&self) {
        self.failures.borrow_mut().clear();
        self.fetch_failures.borrow_mut().clear();
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Calls other than collection fetches
    pub fn mutations(&self) -> Vec<Call> {
        self.calls.borrow().iter().filter(|c| !c.is_fetch()).cloned().collect()
    }

    pub fn fetch_count(&self) -> usize {
        self.calls.borrow().iter().filter(|c| c.is_fetch()).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn check_failure(&self, operation: &'static str) -> ClientResult<()> {
        match self.failures.borrow().get(operation) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn collection_for(filename: &str) -> ClientResult<Collection> {
        ResourceKind::ALL
            .iter()
            .find(|kind| kind.filename() == filename)
            .map(|kind| kind.collection())
            .ok_or_else(|| ClientError::Http { status: 400, message: "Invalid filename".to_string() })
    }

    fn next_id(rows: &[Value], column: &str) -> i64 {
        rows.iter()
            .filter_map(|row| row.get(column).and_then(scalar_to_string))
            .filter_map(|id| id.parse::<i64>().ok())
            .max()
            .unwrap_or(0)
            + 1
    }

    fn ok(message: &str) -> ApiResponse {
        ApiResponse {
            success: Some(true),
            message: Some(message.to_string()),
            ..ApiResponse::default()
        }
    }
}

fn matches_key(row: &Value, column: &str, key: &str) -> bool {
    row.get(column).and_then(scalar_to_string).as_deref() == Some(key)
}

impl Backend for FakeBackend {
    type Upload = String;

    async fn login(&self, request: &LoginRequest) -> ClientResult<User> {
        self.record(Call::Login(request.username.clone()));
        self.check_failure("login")?;
        if request.username == self.user.username && request.password == self.password {
            Ok(self.user.clone())
        } else {
            Err(ClientError::Http { status: 401, message: "Invalid credentials".to_string() })
        }
    }

    async fn fetch_collection(&self, collection: Collection) -> ClientResult<Vec<Value>> {
        self.record(Call::Fetch(collection));
        if let Some(err) = self.fetch_failures.borrow().get(&collection) {
            return Err(err.clone());
        }
        Ok(self.rows(collection))
    }

    async fn update_record(&self, request: &RecordRequest) -> ClientResult<ApiResponse> {
        self.record(Call::Update(request.clone()));
        self.check_failure("update")?;
        let collection = Self::collection_for(&request.filename)?;
        let key = request
            .record
            .get(&request.primary_key_col)
            .and_then(scalar_to_string)
            .unwrap_or_default();

        let mut tables = self.tables.borrow_mut();
        let rows = tables.entry(collection).or_default();
        let row = rows
            .iter_mut()
            .find(|row| matches_key(row, &request.primary_key_col, &key))
            .ok_or_else(|| ClientError::Http { status: 404, message: "Record not found".to_string() })?;
        if let Some(fields) = row.as_object_mut() {
            for (column, value) in &request.record {
                fields.insert(column.clone(), value.clone());
            }
        }
        Ok(Self::ok("Record updated"))
    }

    async fn delete_record(&self, request: &DeleteRequest) -> ClientResult<ApiResponse> {
        self.record(Call::Delete(request.clone()));
        self.check_failure("delete")?;
        let collection = Self::collection_for(&request.filename)?;

        let mut tables = self.tables.borrow_mut();
        let rows = tables.entry(collection).or_default();
        let before = rows.len();
        rows.retain(|row| !matches_key(row, &request.primary_key_col, &request.primary_key_val));
        if rows.len() == before {
            return Err(ClientError::Http { status: 404, message: "Record to delete not found".to_string() });
        }
        Ok(Self::ok("Record deleted"))
    }

    async fn add_record(&self, request: &RecordRequest) -> ClientResult<ApiResponse> {
        self.record(Call::Add(request.clone()));
        self.check_failure("add")?;
        let collection = Self::collection_for(&request.filename)?;

        let mut record = request.record.clone();
        let section_id = record.remove("section_id");
        let mut tables = self.tables.borrow_mut();
        let rows = tables.entry(collection).or_default();
        let new_id = Self::next_id(rows, &request.primary_key_col);
        record.insert(request.primary_key_col.clone(), json!(new_id));
        rows.push(Value::Object(record.clone()));

        if let Some(section_id) = section_id.as_ref().and_then(scalar_to_string).filter(|s| !s.is_empty()) {
            tables
                .entry(Collection::SectionStudents)
                .or_default()
                .push(json!({"section_id": section_id, "student_id": new_id}));
        }

        Ok(ApiResponse {
            new_record: Some(Value::Object(record)),
            ..Self::ok("Record added")
        })
    }

    async fn submit_attendance(&self, batch: &AttendanceBatch) -> ClientResult<ApiResponse> {
        self.record(Call::Attendance(batch.clone()));
        self.check_failure("attendance")?;

        let mut tables = self.tables.borrow_mut();
        let rows = tables.entry(Collection::Attendance).or_default();
        let rehearsal_id = batch.records.first().map(|r| r.rehearsal_id.clone()).unwrap_or_default();
        let save_version = Self::next_id(
            &rows
                .iter()
                .filter(|row| matches_key(row, "rehearsal_id", &rehearsal_id) && matches_key(row, "marked_by", &batch.marked_by))
                .cloned()
                .collect::<Vec<_>>(),
            "save_version",
        );
        for entry in &batch.records {
            let attendance_id = Self::next_id(rows, "attendance_id");
            rows.push(json!({
                "attendance_id": attendance_id,
                "rehearsal_id": entry.rehearsal_id.parse::<i64>().map(Value::from).unwrap_or_else(|_| json!(entry.rehearsal_id)),
                "student_id": entry.student_id.parse::<i64>().map(Value::from).unwrap_or_else(|_| json!(entry.student_id)),
                "status": entry.status.as_str(),
                "memo": entry.memo,
                "marked_by": batch.marked_by,
                "save_version": save_version,
            }));
        }
        Ok(Self::ok(&format!("{}건의 출석 기록이 저장되었습니다.", batch.records.len())))
    }

    async fn export_archive(&self) -> ClientResult<Vec<u8>> {
        self.record(Call::Export);
        self.check_failure("export")?;
        Ok(b"PK\x03\x04".to_vec())
    }

    async fn import_archive(&self, file: &String) -> ClientResult<ApiResponse> {
        self.record(Call::Import(file.clone()));
        self.check_failure("import")?;
        Ok(Self::ok("Data imported successfully"))
    }
}

/// Canned answers for confirm(); records every prompt and alert
pub struct ScriptedDialogs {
    answer: Cell<bool>,
    pub confirms: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
}

impl ScriptedDialogs {
    pub fn accepting() -> Self {
        Self {
            answer: Cell::new(true),
            confirms: RefCell::new(Vec::new()),
            alerts: RefCell::new(Vec::new()),
        }
    }

    pub fn declining() -> Self {
        let dialogs = Self::accepting();
        dialogs.answer.set(false);
        dialogs
    }

    pub fn confirm_count(&self) -> usize {
        self.confirms.borrow().len()
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.borrow().len()
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.answer.get()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
