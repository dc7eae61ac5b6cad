//! View models the dashboard serves. Formatting and fallback text only; the
//! numbers come from `aggregate`.

pub mod charts;
pub mod employee;
pub mod format;
pub mod manager;
pub mod state;

pub use employee::EmployeeDashboard;
pub use manager::{EmployeeDetail, ManagerDashboard};
pub use state::{DashboardState, Ticket, ViewState};
