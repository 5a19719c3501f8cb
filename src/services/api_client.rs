// ============================================================================
// API CLIENT - HTTP ONLY (Stateless)
// ============================================================================
// No business logic: builds requests, classifies responses.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use web_sys::{File, FormData, RequestCache};
use crate::config::CONFIG;
use crate::error::{ClientError, ClientResult};
use crate::models::{
    ApiResponse, AttendanceBatch, Collection, DeleteRequest, LoginRequest, LoginResponse,
    RecordRequest, SuccessRule, User,
};
use crate::services::backend::Backend;

const LOGIN_FALLBACK: &str = "Login failed";
const UPDATE_FALLBACK: &str = "Failed to save data on server.";
const DELETE_FALLBACK: &str = "Failed to delete data on server.";
const ADD_FALLBACK: &str = "Failed to add data.";
const ATTENDANCE_FALLBACK: &str = "서버 저장 실패";
const IMPORT_FALLBACK: &str = "서버에서 파일 처리 실패";

#[derive(Clone)]
pub struct ApiClient;

impl ApiClient {
    pub fn new() -> Self {
        Self
    }

    fn url(&self, path: &str) -> String {
        CONFIG.api_url(path)
    }

    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> ClientResult<Response> {
        let request = Request::post(&self.url(path))
            .cache(RequestCache::NoStore)
            .json(body)
            .map_err(|e| ClientError::Validation(format!("Serialization error: {}", e)))?;
        request.send().await.map_err(ClientError::network)
    }

    /// Decode the body and apply the endpoint's success rule
    async fn classify(response: Response, rule: SuccessRule, fallback: &str) -> ClientResult<ApiResponse> {
        let status = response.status();
        let body: ApiResponse = Self::decode_body(response, status).await?;
        body.check(status, rule, fallback)
    }

    /// A body that is not JSON is a parse error on 2xx and an empty body otherwise
    async fn decode_body<T: DeserializeOwned + Default>(response: Response, status: u16) -> ClientResult<T> {
        let text = response.text().await.map_err(ClientError::network)?;
        match serde_json::from_str::<T>(&text) {
            Ok(body) => Ok(body),
            Err(_) if !(200..300).contains(&status) => Ok(T::default()),
            Err(e) => Err(ClientError::parse(e)),
        }
    }

    async fn post_record(
        &self,
        path: &str,
        body: &impl Serialize,
        rule: SuccessRule,
        fallback: &str,
    ) -> ClientResult<ApiResponse> {
        let response = self.post_json(path, body).await?;
        Self::classify(response, rule, fallback).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for ApiClient {
    type Upload = File;

    async fn login(&self, request: &LoginRequest) -> ClientResult<User> {
        log::info!("🔐 [LOGIN] Requesting session for {}", request.username);
        let response = self.post_json("/api/login", request).await?;
        let status = response.status();
        let body: LoginResponse = Self::decode_body(response, status).await?;

        let reason = body
            .error
            .clone()
            .or_else(|| body.message.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| LOGIN_FALLBACK.to_string());

        if !(200..300).contains(&status) {
            return Err(ClientError::Http { status, message: reason });
        }
        match (body.success, body.user) {
            (true, Some(user)) => Ok(user),
            _ => Err(ClientError::Backend(reason)),
        }
    }

    async fn fetch_collection(&self, collection: Collection) -> ClientResult<Vec<Value>> {
        let url = self.url(collection.path());
        log::debug!("📥 [LOADER] GET {}", url);
        let response = Request::get(&url)
            .cache(RequestCache::NoStore)
            .send()
            .await
            .map_err(ClientError::network)?;

        if !response.ok() {
            return Err(ClientError::Http {
                status: response.status(),
                message: format!(
                    "Network response was not ok for {}: {}",
                    collection.path(),
                    response.status_text()
                ),
            });
        }

        response.json::<Vec<Value>>().await.map_err(ClientError::parse)
    }

    async fn update_record(&self, request: &RecordRequest) -> ClientResult<ApiResponse> {
        self.post_record("/api/update_data", request, SuccessRule::RequireSuccessFlag, UPDATE_FALLBACK)
            .await
    }

    async fn delete_record(&self, request: &DeleteRequest) -> ClientResult<ApiResponse> {
        self.post_record("/api/delete_data", request, SuccessRule::RequireSuccessFlag, DELETE_FALLBACK)
            .await
    }

    async fn add_record(&self, request: &RecordRequest) -> ClientResult<ApiResponse> {
        self.post_record("/api/add_data", request, SuccessRule::HttpOnly, ADD_FALLBACK)
            .await
    }

    async fn submit_attendance(&self, batch: &AttendanceBatch) -> ClientResult<ApiResponse> {
        self.post_record("/api/attendance", batch, SuccessRule::HttpOnly, ATTENDANCE_FALLBACK)
            .await
    }

    async fn export_archive(&self) -> ClientResult<Vec<u8>> {
        let response = Request::get(&self.url("/api/export_csv"))
            .send()
            .await
            .map_err(ClientError::network)?;

        if !response.ok() {
            return Err(ClientError::Http {
                status: response.status(),
                message: response.status_text(),
            });
        }

        response.binary().await.map_err(ClientError::network)
    }

    async fn import_archive(&self, file: &File) -> ClientResult<ApiResponse> {
        log::info!("📤 [CSV] Uploading {} ({} bytes)", file.name(), file.size());
        let form = FormData::new()
            .map_err(|e| ClientError::Validation(format!("{:?}", e)))?;
        form.append_with_blob("file", file)
            .map_err(|e| ClientError::Validation(format!("{:?}", e)))?;

        let response = Request::post(&self.url("/api/import_csv"))
            .body(form)
            .map_err(|e| ClientError::Validation(format!("{}", e)))?
            .send()
            .await
            .map_err(ClientError::network)?;

        Self::classify(response, SuccessRule::HttpOnly, IMPORT_FALLBACK).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_the_configured_backend() {
        let client = ApiClient::new();
        assert_eq!(client.url(Collection::Students.path()), CONFIG.api_url("/api/students"));
        assert!(client.url("/api/login").ends_with("/api/login"));
    }
}
