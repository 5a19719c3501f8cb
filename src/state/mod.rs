// ============================================================================
// STATE MODULE - State management with Rc<RefCell> + change notifications
// ============================================================================

pub mod reactivity;
pub mod notifications;
pub mod auth_state;
pub mod data_store;
pub mod table_state;
pub mod attendance_state;
pub mod report_state;
pub mod app_state;

pub use reactivity::*;
pub use notifications::*;
pub use auth_state::*;
pub use data_store::*;
pub use table_state::*;
pub use attendance_state::*;
pub use report_state::*;
pub use app_state::*;
