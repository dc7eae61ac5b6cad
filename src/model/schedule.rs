use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Owner reference as some backends nest it: `"employee": { "id": 3, "name": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeRef {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One day's entry for an employee, as the backend returns it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": 12,
    "employeeId": 3,
    "date": "2025-01-30",
    "startTime": "09:00:00",
    "endTime": "17:00:00",
    "scheduleOfDay": "Work",
    "leave": false,
    "leaveType": null,
    "eventType": "SHIFT"
}))]
pub struct ScheduleRecord {
    #[serde(default)]
    pub id: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeRef>,

    /// ISO calendar date, possibly with a time suffix
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub start_time: Option<String>,

    #[serde(default)]
    pub end_time: Option<String>,

    #[serde(default)]
    pub schedule_of_day: Option<String>,

    /// `null` and absent both count as "not on leave"
    #[serde(default)]
    pub leave: Option<bool>,

    #[serde(default)]
    pub leave_type: Option<String>,

    #[serde(default)]
    pub event_type: Option<String>,
}

impl ScheduleRecord {
    pub fn is_leave(&self) -> bool {
        self.leave.unwrap_or(false)
    }

    /// Owner id from either the flat or the nested shape.
    pub fn owner_id(&self) -> Option<u64> {
        self.employee_id
            .or_else(|| self.employee.as_ref().map(|e| e.id))
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.employee.as_ref().and_then(|e| e.name.as_deref())
    }
}

/// Body of `POST /schedules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewSchedule {
    pub employee: EmployeeRef,
    #[schema(example = "2025-01-30")]
    pub date: String,
    #[schema(example = "09:00:00")]
    pub start_time: String,
    #[schema(example = "10:00:00")]
    pub end_time: String,
    #[schema(example = "MEETING")]
    pub event_type: String,
    pub leave: bool,
    pub leave_type: Option<String>,
    #[schema(example = "Sprint planning")]
    pub schedule_of_day: String,
}
