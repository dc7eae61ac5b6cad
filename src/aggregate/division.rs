use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};
use utoipa::ToSchema;

use crate::model::schedule::ScheduleRecord;

/// Time-division buckets, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, AsRefStr)]
pub enum Category {
    Work,
    Meetings,
    Breaks,
    Other,
}

impl Category {
    /// Case-insensitive exact match on `scheduleOfDay`; no partial matching.
    pub fn classify(schedule_of_day: Option<&str>) -> Self {
        match schedule_of_day.map(str::to_lowercase).as_deref() {
            Some("work") => Category::Work,
            Some("meeting") => Category::Meetings,
            Some("break") => Category::Breaks,
            _ => Category::Other,
        }
    }

    pub fn labels() -> Vec<String> {
        Category::iter().map(|c| c.to_string()).collect()
    }
}

/// Histogram over the four categories. Serializes in Work, Meetings, Breaks, Other order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct TimeDivision {
    #[serde(rename = "Work")]
    pub work: usize,
    #[serde(rename = "Meetings")]
    pub meetings: usize,
    #[serde(rename = "Breaks")]
    pub breaks: usize,
    #[serde(rename = "Other")]
    pub other: usize,
}

impl TimeDivision {
    pub fn add(&mut self, category: Category) {
        match category {
            Category::Work => self.work += 1,
            Category::Meetings => self.meetings += 1,
            Category::Breaks => self.breaks += 1,
            Category::Other => self.other += 1,
        }
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Work => self.work,
            Category::Meetings => self.meetings,
            Category::Breaks => self.breaks,
            Category::Other => self.other,
        }
    }

    pub fn total(&self) -> usize {
        self.work + self.meetings + self.breaks + self.other
    }

    /// Counts in chart order.
    pub fn counts(&self) -> Vec<usize> {
        Category::iter().map(|c| self.get(c)).collect()
    }

    /// Share of each category in percent, chart order. All zero for an empty histogram.
    pub fn percentages(&self) -> Vec<f64> {
        let total = self.total();
        Category::iter()
            .map(|c| percent_of(self.get(c), total))
            .collect()
    }
}

pub fn percent_of(value: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        value as f64 / total as f64 * 100.0
    }
}

pub fn time_division(records: &[ScheduleRecord]) -> TimeDivision {
    records
        .iter()
        .map(|r| Category::classify(r.schedule_of_day.as_deref()))
        .fold(TimeDivision::default(), |mut division, category| {
            division.add(category);
            division
        })
}
