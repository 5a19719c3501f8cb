pub mod normalize;
pub mod student;
pub mod section;
pub mod rehearsal;
pub mod attendance;
pub mod auth;
pub mod api;
pub mod resource;
pub mod report;

pub use student::Student;
pub use section::{Section, SectionMembership};
pub use rehearsal::Rehearsal;
pub use attendance::{AttendanceBatch, AttendanceEntry, AttendanceRecord, AttendanceStatus};
pub use auth::{LoginRequest, LoginResponse, User};
pub use api::{ApiResponse, DeleteRequest, RecordPayload, RecordRequest, SuccessRule};
pub use resource::{Collection, ResourceKind, PART_COLUMN};
pub use report::{AttendanceReport, AttendanceStats, ReportError, ReportKind, ReportSubject};
