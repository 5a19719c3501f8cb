use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::error::{ClientError, ClientResult};
use crate::models::resource::ResourceKind;

/// Column → value record sent to add/update
pub type RecordPayload = Map<String, Value>;

/// Body of POST /api/update_data and POST /api/add_data
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RecordRequest {
    pub filename: String,
    pub primary_key_col: String,
    pub record: RecordPayload,
}

impl RecordRequest {
    pub fn new(kind: ResourceKind, record: RecordPayload) -> Self {
        Self {
            filename: kind.filename().to_string(),
            primary_key_col: kind.primary_key().to_string(),
            record,
        }
    }
}

/// Body of POST /api/delete_data
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DeleteRequest {
    pub filename: String,
    pub primary_key_col: String,
    pub primary_key_val: String,
}

impl DeleteRequest {
    pub fn new(kind: ResourceKind, primary_key_val: &str) -> Self {
        Self {
            filename: kind.filename().to_string(),
            primary_key_col: kind.primary_key().to_string(),
            primary_key_val: primary_key_val.to_string(),
        }
    }
}

/// Whether a 2xx response must also carry `success: true`
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SuccessRule {
    HttpOnly,
    RequireSuccessFlag,
}

/// Envelope shared by every mutating endpoint
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub new_record: Option<Value>,
}

impl ApiResponse {
    /// `error`, else `message`, else the fallback
    pub fn reason(&self, fallback: &str) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Classify a decoded response into success or a typed failure
    pub fn check(self, status: u16, rule: SuccessRule, fallback: &str) -> ClientResult<ApiResponse> {
        if !(200..300).contains(&status) {
            return Err(ClientError::Http { status, message: self.reason(fallback) });
        }
        if rule == SuccessRule::RequireSuccessFlag && self.success != Some(true) {
            return Err(ClientError::Backend(self.reason(fallback)));
        }
        Ok(self)
    }
}
