//! Pure aggregations over already-fetched schedule records. Nothing here fails:
//! malformed optional fields count as absent or `Other`.

pub mod attendance;
pub mod calendar;
pub mod division;
pub mod event_types;

use serde::Serialize;
use utoipa::ToSchema;

use crate::model::schedule::ScheduleRecord;

pub use attendance::{
    attendance_ratio, present_absent, schedules_for, team_attendance, team_presence,
    team_time_division,
};
pub use calendar::split_by_date;
pub use division::{Category, TimeDivision, time_division};
pub use event_types::event_type_breakdown;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    #[schema(example = 0.75)]
    pub present_ratio: f64,
    pub category_histogram: TimeDivision,
}

pub fn summarize(records: &[ScheduleRecord]) -> AttendanceSummary {
    AttendanceSummary {
        present_ratio: attendance_ratio(records),
        category_histogram: time_division(records),
    }
}
