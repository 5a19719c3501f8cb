use serde::{Deserialize, Serialize};
use crate::models::normalize::text;

/// Attendance status as stored by the backend
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
    ExcusedAbsent,
}

impl AttendanceStatus {
    /// Choices offered on the attendance roster (excused absences are only
    /// entered through CSV import)
    pub const ROSTER_CHOICES: [AttendanceStatus; 3] = [
        AttendanceStatus::Present,
        AttendanceStatus::Late,
        AttendanceStatus::Absent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Late => "late",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::ExcusedAbsent => "excused_absent",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "present" => Some(AttendanceStatus::Present),
            "late" => Some(AttendanceStatus::Late),
            "absent" => Some(AttendanceStatus::Absent),
            "excused_absent" => Some(AttendanceStatus::ExcusedAbsent),
            _ => None,
        }
    }

    /// i18n key of the status label
    pub fn label_key(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "status_present",
            AttendanceStatus::Late => "status_late",
            AttendanceStatus::Absent => "status_absent",
            AttendanceStatus::ExcusedAbsent => "status_excused_absent",
        }
    }
}

impl Default for AttendanceStatus {
    fn default() -> Self {
        AttendanceStatus::Present
    }
}

/// Attendance row as returned by GET /api/attendance.
/// `status` stays raw so unexpected values can be counted as unknown.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct AttendanceRecord {
    #[serde(default, deserialize_with = "text")]
    pub attendance_id: String,
    #[serde(default, deserialize_with = "text")]
    pub rehearsal_id: String,
    #[serde(default, deserialize_with = "text")]
    pub student_id: String,
    #[serde(default, deserialize_with = "text")]
    pub status: String,
    #[serde(default, deserialize_with = "text")]
    pub memo: String,
    #[serde(default, deserialize_with = "text")]
    pub marked_by: String,
    #[serde(default, deserialize_with = "text")]
    pub save_version: String,
}

impl AttendanceRecord {
    pub fn parsed_status(&self) -> Option<AttendanceStatus> {
        AttendanceStatus::parse(&self.status)
    }
}

/// One line of an attendance submission
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AttendanceEntry {
    pub rehearsal_id: String,
    pub student_id: String,
    pub status: AttendanceStatus,
    pub memo: String,
}

/// Body of POST /api/attendance
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AttendanceBatch {
    pub marked_by: String,
    pub records: Vec<AttendanceEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_serializes_in_snake_case() {
        let entry = AttendanceEntry {
            rehearsal_id: "3".into(),
            student_id: "12".into(),
            status: AttendanceStatus::ExcusedAbsent,
            memo: String::new(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["status"], json!("excused_absent"));
        assert_eq!(value["memo"], json!(""));
    }

    #[test]
    fn records_tolerate_numbers_nulls_and_odd_statuses() {
        let record: AttendanceRecord = serde_json::from_value(json!({
            "attendance_id": 1,
            "rehearsal_id": "2",
            "student_id": 3,
            "status": "sick",
            "memo": null,
            "marked_by": "conductor",
            "save_version": 2
        }))
        .unwrap();
        assert_eq!(record.attendance_id, "1");
        assert_eq!(record.student_id, "3");
        assert_eq!(record.memo, "");
        assert_eq!(record.save_version, "2");
        assert_eq!(record.parsed_status(), None);
    }
}
