use serde::Serialize;
use utoipa::ToSchema;

use crate::aggregate::division::Category;
use crate::model::{employee::EmployeeRecord, schedule::ScheduleRecord};

/// `(present, absent)` where present means the leave flag is not set.
pub fn present_absent(records: &[ScheduleRecord]) -> (usize, usize) {
    let present = records.iter().filter(|r| !r.is_leave()).count();
    (present, records.len() - present)
}

/// Fraction of records not on leave; 0 for an empty list.
pub fn attendance_ratio(records: &[ScheduleRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let (present, _) = present_absent(records);
    present as f64 / records.len() as f64
}

/// Records owned by the given employee.
pub fn schedules_for(records: &[ScheduleRecord], employee_id: u64) -> Vec<ScheduleRecord> {
    records
        .iter()
        .filter(|r| r.owner_id() == Some(employee_id))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberAttendance {
    pub employee_id: u64,
    pub name: String,
    pub present_days: usize,
    pub absent_days: usize,
}

/// Roster members kept by `selected`; `None` keeps everyone.
fn selected_members<'a>(
    team: &'a [EmployeeRecord],
    selected: Option<&'a [u64]>,
) -> impl Iterator<Item = &'a EmployeeRecord> {
    team.iter()
        .filter(move |e| selected.is_none_or(|ids| ids.contains(&e.id)))
}

/// Present/absent counts per team member, in roster order.
pub fn team_attendance(
    team: &[EmployeeRecord],
    records: &[ScheduleRecord],
    selected: Option<&[u64]>,
) -> Vec<MemberAttendance> {
    selected_members(team, selected)
        .map(|e| {
            let own = schedules_for(records, e.id);
            let (present_days, absent_days) = present_absent(&own);
            MemberAttendance {
                employee_id: e.id,
                name: e.name.clone(),
                present_days,
                absent_days,
            }
        })
        .collect()
}

/// Day split for one member's stacked bar.
#[derive(Debug, Clone, PartialEq, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberTimeDivision {
    pub employee_id: u64,
    pub name: String,
    pub work: usize,
    pub meetings: usize,
    pub leaves: usize,
    pub other: usize,
}

impl MemberTimeDivision {
    /// Leave days count as leaves whatever their category; breaks fall into other.
    fn add(&mut self, record: &ScheduleRecord) {
        if record.is_leave() {
            self.leaves += 1;
            return;
        }
        match Category::classify(record.schedule_of_day.as_deref()) {
            Category::Work => self.work += 1,
            Category::Meetings => self.meetings += 1,
            Category::Breaks | Category::Other => self.other += 1,
        }
    }
}

/// Work/meetings/leaves/other counts per team member, in roster order.
pub fn team_time_division(
    team: &[EmployeeRecord],
    records: &[ScheduleRecord],
    selected: Option<&[u64]>,
) -> Vec<MemberTimeDivision> {
    selected_members(team, selected)
        .map(|e| {
            let mut division = MemberTimeDivision {
                employee_id: e.id,
                name: e.name.clone(),
                ..Default::default()
            };
            records
                .iter()
                .filter(|r| r.owner_id() == Some(e.id))
                .for_each(|r| division.add(r));
            division
        })
        .collect()
}

/// Summed `(present, absent)` over the given members.
pub fn team_presence(members: &[MemberAttendance]) -> (usize, usize) {
    members.iter().fold((0, 0), |(present, absent), m| {
        (present + m.present_days, absent + m.absent_days)
    })
}
