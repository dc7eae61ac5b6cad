use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::aggregate::{AttendanceSummary, split_by_date, summarize};
use crate::model::{employee::EmployeeRecord, schedule::ScheduleRecord};
use crate::view::charts::{Donut, Gauge};
use crate::view::format::{long_date, time_range, yes_no};

pub const NOT_SPECIFIED: &str = "Not specified";

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInfo {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub position: String,
}

impl From<&EmployeeRecord> for EmployeeInfo {
    fn from(e: &EmployeeRecord) -> Self {
        Self {
            id: e.id,
            name: e.name.clone(),
            email: e.email.clone(),
            position: e
                .position
                .clone()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub event: String,
    pub time: String,
    pub leave: String,
}

impl ScheduleItem {
    pub fn today(r: &ScheduleRecord) -> Self {
        Self {
            id: r.id,
            date: None,
            event: text_or(r.schedule_of_day.as_deref(), "No Event"),
            time: time_range(
                r.start_time.as_deref(),
                r.end_time.as_deref(),
                "No Time Specified",
            ),
            leave: yes_no(r.is_leave()).to_string(),
        }
    }

    pub fn upcoming(r: &ScheduleRecord) -> Self {
        Self {
            id: r.id,
            date: r.date.as_deref().map(long_date),
            event: text_or(r.schedule_of_day.as_deref(), NOT_SPECIFIED),
            time: time_range(
                r.start_time.as_deref(),
                r.end_time.as_deref(),
                "Time not specified",
            ),
            leave: yes_no(r.is_leave()).to_string(),
        }
    }
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDashboard {
    pub employee: EmployeeInfo,
    pub summary: AttendanceSummary,
    pub gauge: Gauge,
    pub time_division: Donut,
    pub today: Vec<ScheduleItem>,
    pub upcoming: Vec<ScheduleItem>,
}

impl EmployeeDashboard {
    pub fn build(employee: &EmployeeRecord, records: &[ScheduleRecord], today: NaiveDate) -> Self {
        let summary = summarize(records);
        let (todays, upcoming) = split_by_date(records, today);

        Self {
            employee: employee.into(),
            gauge: Gauge::attendance(summary.present_ratio),
            time_division: Donut::time_division(&summary.category_histogram),
            summary,
            today: todays.into_iter().map(ScheduleItem::today).collect(),
            upcoming: upcoming.into_iter().map(ScheduleItem::upcoming).collect(),
        }
    }
}
