use serde::{Deserialize, Serialize};
use crate::models::normalize::text;

/// Orchestra part (violin 1, cello, ...)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Section {
    #[serde(default, deserialize_with = "text")]
    pub section_id: String,
    #[serde(default, deserialize_with = "text")]
    pub section_name: String,
}

impl Section {
    pub fn field(&self, column: &str) -> String {
        match column {
            "section_id" => self.section_id.clone(),
            "section_name" => self.section_name.clone(),
            _ => String::new(),
        }
    }
}

/// Row of the section_students join table
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct SectionMembership {
    #[serde(default, deserialize_with = "text")]
    pub section_id: String,
    #[serde(default, deserialize_with = "text")]
    pub student_id: String,
}
