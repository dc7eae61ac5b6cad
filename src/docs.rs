use crate::aggregate::{
    AttendanceSummary, TimeDivision,
    attendance::{MemberAttendance, MemberTimeDivision},
    event_types::LabelCount,
};
use crate::model::{
    employee::EmployeeRecord,
    schedule::{EmployeeRef, NewSchedule, ScheduleRecord},
};
use crate::models::{CreateScheduleReq, LoginReqDto, ManagerField, RegisterReq};
use crate::view::{
    EmployeeDashboard, EmployeeDetail, ManagerDashboard,
    charts::{BarChart, BarDataset, Donut, Gauge, GaugeBand},
    employee::{EmployeeInfo, ScheduleItem},
    manager::{CalendarEvent, TeamMember},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Dashboard API",
        version = "0.1.0",
        description = r#"
## Employee Attendance & Scheduling Dashboard

Dashboard views over a remote attendance API. Employees, schedules and
credentials live in the backend; this service fetches them, aggregates
attendance and time division, and serves chart-ready view models.

### 🔹 Views
- **Employee dashboard**
  - Attendance gauge, time-division donut, today's and upcoming schedules
- **Manager dashboard**
  - Team calendar, per-employee attendance bars, event-type breakdown
  - Drill-down into one team member, adding calendar entries

### 🔐 Session
`POST /login` stores the backend's token locally. Every `/dashboard` route
redirects to `/login` while no session exists.

### 📦 Response Format
Dashboard routes answer with a view state: `data` is the last successfully
rendered view, `error` the message of the latest failed fetch.
"#,
    ),
    paths(
        crate::auth::handlers::login,
        crate::auth::handlers::register,
        crate::auth::handlers::logout,

        crate::api::dashboard,
        crate::api::employee::employee_dashboard,

        crate::api::manager::manager_dashboard,
        crate::api::manager::employee_detail,
        crate::api::manager::create_schedule
    ),
    components(
        schemas(
            LoginReqDto,
            RegisterReq,
            ManagerField,
            CreateScheduleReq,
            EmployeeRecord,
            EmployeeRef,
            ScheduleRecord,
            NewSchedule,
            AttendanceSummary,
            TimeDivision,
            MemberAttendance,
            MemberTimeDivision,
            LabelCount,
            Gauge,
            GaugeBand,
            Donut,
            BarChart,
            BarDataset,
            EmployeeInfo,
            ScheduleItem,
            EmployeeDashboard,
            CalendarEvent,
            TeamMember,
            ManagerDashboard,
            EmployeeDetail
        )
    ),
    tags(
        (name = "Auth", description = "Login, registration and logout"),
        (name = "Dashboard", description = "Employee and manager views"),
    )
)]
pub struct ApiDoc;
