pub mod data_viewmodel;
pub mod session_viewmodel;
pub mod table_viewmodel;
pub mod attendance_viewmodel;
pub mod report_viewmodel;
pub mod transfer_viewmodel;

pub use data_viewmodel::DataViewModel;
pub use session_viewmodel::SessionViewModel;
pub use table_viewmodel::{RowAction, TableRow, TableViewModel};
pub use attendance_viewmodel::{build_roster, roster_title, AttendanceViewModel};
pub use report_viewmodel::{generate_report, report_title, ReportViewModel};
pub use transfer_viewmodel::{TransferViewModel, EXPORT_FILENAME, EXPORT_MIME};
