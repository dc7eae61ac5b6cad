use serde::Serialize;
use utoipa::ToSchema;

use crate::aggregate::{
    AttendanceSummary,
    attendance::{MemberAttendance, MemberTimeDivision},
    event_type_breakdown, schedules_for, summarize, team_attendance, team_presence,
    team_time_division,
};
use crate::model::{employee::EmployeeRecord, schedule::ScheduleRecord};
use crate::view::charts::{BarChart, Donut, Gauge};
use crate::view::format::date_time;

const LEAVE_COLORS: (&str, &str) = ("#ff9f89", "#ff7f6e");
const WORK_COLORS: (&str, &str) = ("#4CAF50", "#45a049");

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: u64,
    pub title: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub resource_id: u64,
    pub leave: bool,
    pub leave_type: Option<String>,
    pub employee_name: Option<String>,
    pub background_color: String,
    pub border_color: String,
}

impl CalendarEvent {
    /// `None` for records without an owner; the calendar can't place them.
    pub fn from_record(r: &ScheduleRecord) -> Option<Self> {
        let resource_id = r.owner_id()?;
        let (background, border) = if r.is_leave() {
            LEAVE_COLORS
        } else {
            WORK_COLORS
        };

        Some(Self {
            id: r.id,
            title: r
                .schedule_of_day
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "Scheduled".to_string()),
            start: date_time(r.date.as_deref(), r.start_time.as_deref()),
            end: date_time(r.date.as_deref(), r.end_time.as_deref()),
            resource_id,
            leave: r.is_leave(),
            leave_type: r.leave_type.clone(),
            employee_name: r.owner_name().map(str::to_string),
            background_color: background.to_string(),
            border_color: border.to_string(),
        })
    }
}

pub fn calendar_events(records: &[ScheduleRecord]) -> Vec<CalendarEvent> {
    records.iter().filter_map(CalendarEvent::from_record).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub department: Option<String>,
}

impl From<&EmployeeRecord> for TeamMember {
    fn from(e: &EmployeeRecord) -> Self {
        Self {
            id: e.id,
            name: e.name.clone(),
            email: e.email.clone(),
            role: e.role.clone(),
            department: e.department.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManagerDashboard {
    pub team: Vec<TeamMember>,
    pub events: Vec<CalendarEvent>,
    pub team_attendance: Vec<MemberAttendance>,
    pub attendance_chart: BarChart,
    pub member_time_division: Vec<MemberTimeDivision>,
    /// Stacked work/meetings/leaves/other per selected member
    pub time_division_chart: BarChart,
    /// Present vs absent over the selected members
    pub presence: Donut,
    pub event_types: Donut,
}

impl ManagerDashboard {
    /// `selected` narrows the per-member charts to those team members.
    pub fn build(
        team: &[EmployeeRecord],
        records: &[ScheduleRecord],
        selected: Option<&[u64]>,
    ) -> Self {
        let members = team_attendance(team, records, selected);
        let division = team_time_division(team, records, selected);
        let (present, absent) = team_presence(&members);

        Self {
            team: team.iter().map(TeamMember::from).collect(),
            events: calendar_events(records),
            attendance_chart: BarChart::attendance(&members),
            team_attendance: members,
            time_division_chart: BarChart::time_division(&division),
            member_time_division: division,
            presence: Donut::presence(present, absent),
            event_types: Donut::event_types(&event_type_breakdown(records)),
        }
    }

    /// Adds an event created from this view without refetching.
    pub fn push_event(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }
}

/// One team member as seen from the manager view.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetail {
    pub employee_id: u64,
    pub summary: AttendanceSummary,
    pub gauge: Gauge,
    pub time_division: Donut,
    pub events: Vec<CalendarEvent>,
}

impl EmployeeDetail {
    pub fn build(employee_id: u64, records: &[ScheduleRecord]) -> Self {
        let own = schedules_for(records, employee_id);
        let summary = summarize(&own);

        Self {
            employee_id,
            gauge: Gauge::attendance(summary.present_ratio),
            time_division: Donut::time_division(&summary.category_histogram),
            summary,
            events: calendar_events(&own),
        }
    }
}
