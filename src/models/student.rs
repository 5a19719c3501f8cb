use serde::{Deserialize, Serialize};
use crate::models::normalize::text;

/// Orchestra member
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Student {
    #[serde(default, deserialize_with = "text")]
    pub student_id: String,
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "text")]
    pub contact: String,
    #[serde(default, deserialize_with = "text")]
    pub join_date: String,
    #[serde(default, deserialize_with = "text")]
    pub status: String,
}

impl Student {
    /// Value of a table column, "" for unknown columns
    pub fn field(&self, column: &str) -> String {
        match column {
            "student_id" => self.student_id.clone(),
            "name" => self.name.clone(),
            "contact" => self.contact.clone(),
            "join_date" => self.join_date.clone(),
            "status" => self.status.clone(),
            _ => String::new(),
        }
    }
}
