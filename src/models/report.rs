use serde::Serialize;
use crate::models::attendance::{AttendanceRecord, AttendanceStatus};

/// Report dimension chosen in the reports screen
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Student,
    Section,
}

impl ReportKind {
    pub fn value(&self) -> &'static str {
        match self {
            ReportKind::Student => "student",
            ReportKind::Section => "section",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "student" => ReportKind::Student,
            _ => ReportKind::Section,
        }
    }
}

/// Per-status tally of a set of attendance records
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
pub struct AttendanceStats {
    pub present: usize,
    pub late: usize,
    pub absent: usize,
    pub excused_absent: usize,
    pub unknown: usize,
    pub total: usize,
}

impl AttendanceStats {
    pub fn tally<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a AttendanceRecord>,
    {
        let mut stats = AttendanceStats::default();
        for record in records {
            stats.total += 1;
            match record.parsed_status() {
                Some(AttendanceStatus::Present) => stats.present += 1,
                Some(AttendanceStatus::Late) => stats.late += 1,
                Some(AttendanceStatus::Absent) => stats.absent += 1,
                Some(AttendanceStatus::ExcusedAbsent) => stats.excused_absent += 1,
                None => stats.unknown += 1,
            }
        }
        stats
    }

    /// (present + late) / total × 100 with one decimal, ties rounded up,
    /// or "N/A" for an empty set
    pub fn rate_label(&self) -> String {
        if self.total == 0 {
            return "N/A".to_string();
        }
        // tenths of a percent, computed exactly
        let attended = (self.present + self.late) as u64;
        let total = self.total as u64;
        let tenths = (attended * 2000 + total) / (2 * total);
        format!("{}.{}", tenths / 10, tenths % 10)
    }
}

/// Who the report is about, resolved against the store
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum ReportSubject {
    Student { name: String },
    Section { name: String },
    AllSections,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct AttendanceReport {
    pub subject: ReportSubject,
    pub stats: AttendanceStats,
}

/// Report target that does not exist in the store
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ReportError {
    StudentNotFound,
    SectionNotFound,
}

impl ReportError {
    pub fn message_key(&self) -> &'static str {
        match self {
            ReportError::StudentNotFound => "report_student_not_found",
            ReportError::SectionNotFound => "report_section_not_found",
        }
    }
}
