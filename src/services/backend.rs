// ============================================================================
// BACKEND - HTTP surface the viewmodels talk to
// ============================================================================
// ApiClient implements it over gloo-net; tests use an in-memory fake.
// ============================================================================

use serde_json::Value;
use crate::error::ClientResult;
use crate::models::{
    ApiResponse, AttendanceBatch, Collection, DeleteRequest, LoginRequest, RecordRequest, User,
};

#[allow(async_fn_in_trait)]
pub trait Backend {
    /// File handle accepted by the bulk import endpoint
    type Upload;

    /// POST /api/login; Ok only for 2xx with `success: true` and a user
    async fn login(&self, request: &LoginRequest) -> ClientResult<User>;

    /// GET one collection as raw JSON rows
    async fn fetch_collection(&self, collection: Collection) -> ClientResult<Vec<Value>>;

    async fn update_record(&self, request: &RecordRequest) -> ClientResult<ApiResponse>;

    async fn delete_record(&self, request: &DeleteRequest) -> ClientResult<ApiResponse>;

    async fn add_record(&self, request: &RecordRequest) -> ClientResult<ApiResponse>;

    async fn submit_attendance(&self, batch: &AttendanceBatch) -> ClientResult<ApiResponse>;

    /// GET /api/export_csv as raw zip bytes
    async fn export_archive(&self) -> ClientResult<Vec<u8>>;

    async fn import_archive(&self, file: &Self::Upload) -> ClientResult<ApiResponse>;
}
