use serde::Serialize;
use utoipa::ToSchema;

use crate::model::schedule::ScheduleRecord;

pub const UNSPECIFIED: &str = "Unspecified";

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Counts per free-text `eventType`, in order of first appearance.
pub fn event_type_breakdown(records: &[ScheduleRecord]) -> Vec<LabelCount> {
    let mut out: Vec<LabelCount> = Vec::new();

    for record in records {
        let label = record.event_type.as_deref().unwrap_or(UNSPECIFIED);
        match out.iter_mut().find(|lc| lc.label == label) {
            Some(lc) => lc.count += 1,
            None => out.push(LabelCount {
                label: label.to_string(),
                count: 1,
            }),
        }
    }

    out
}
