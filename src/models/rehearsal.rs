use serde::{Deserialize, Serialize};
use crate::models::normalize::text;

/// Dated rehearsal that attendance is recorded against
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Rehearsal {
    #[serde(default, deserialize_with = "text")]
    pub rehearsal_id: String,
    #[serde(default, deserialize_with = "text")]
    pub date: String,
    #[serde(default, deserialize_with = "text")]
    pub location: String,
    #[serde(default, deserialize_with = "text")]
    pub description: String,
}

impl Rehearsal {
    pub fn field(&self, column: &str) -> String {
        match column {
            "rehearsal_id" => self.rehearsal_id.clone(),
            "date" => self.date.clone(),
            "location" => self.location.clone(),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }
}
