//! Chart-ready view models. Colours match the dashboard's chart palette so
//! series keep the same colour across views.

use serde::Serialize;
use utoipa::ToSchema;

use crate::aggregate::{
    Category, TimeDivision,
    attendance::{MemberAttendance, MemberTimeDivision},
    event_types::LabelCount,
};
use crate::aggregate::division::percent_of;

pub const DIVISION_COLORS: [&str; 4] = ["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0"];

pub const EVENT_TYPE_COLORS: [&str; 5] = [
    "rgba(255, 99, 132, 0.6)",
    "rgba(54, 162, 235, 0.6)",
    "rgba(255, 206, 86, 0.6)",
    "rgba(75, 192, 192, 0.6)",
    "rgba(153, 102, 255, 0.6)",
];

pub const PRESENT_COLOR: &str = "rgba(75, 192, 192, 0.6)";
pub const ABSENT_COLOR: &str = "rgba(255, 99, 132, 0.6)";

pub const PRESENCE_COLORS: [&str; 2] = ["#36A2EB", "#FF6384"];

/// Work, Meetings, Leaves, Other
pub const STACKED_COLORS: [&str; 4] = ["#4CAF50", "#FF9800", "#F44336", "#9C27B0"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GaugeBand {
    Low,
    Medium,
    High,
}

impl GaugeBand {
    pub fn for_ratio(ratio: f64) -> Self {
        if ratio < 0.6 {
            GaugeBand::Low
        } else if ratio < 0.8 {
            GaugeBand::Medium
        } else {
            GaugeBand::High
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            GaugeBand::Low => "#FF0000",
            GaugeBand::Medium => "#FFA500",
            GaugeBand::High => "#00FF00",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Gauge {
    /// 0..=1
    pub percent: f64,
    pub label: String,
    pub band: GaugeBand,
    pub color: String,
}

impl Gauge {
    pub fn attendance(ratio: f64) -> Self {
        let band = GaugeBand::for_ratio(ratio);
        Self {
            percent: ratio,
            label: format!("{:.2}%", ratio * 100.0),
            band,
            color: band.color().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Donut {
    pub labels: Vec<String>,
    pub data: Vec<usize>,
    pub background_color: Vec<String>,
    /// `"Work: 25.0%"`, one per slice
    pub legend: Vec<String>,
}

impl Donut {
    fn build(labels: Vec<String>, data: Vec<usize>, palette: &[&str]) -> Self {
        let total: usize = data.iter().sum();
        let legend = labels
            .iter()
            .zip(&data)
            .map(|(label, value)| format!("{label}: {:.1}%", percent_of(*value, total)))
            .collect();
        let background_color = (0..labels.len())
            .map(|i| palette[i % palette.len()].to_string())
            .collect();

        Self {
            labels,
            data,
            background_color,
            legend,
        }
    }

    pub fn time_division(division: &TimeDivision) -> Self {
        Self::build(Category::labels(), division.counts(), &DIVISION_COLORS)
    }

    /// Present vs absent days summed over a set of members.
    pub fn presence(present: usize, absent: usize) -> Self {
        Self::build(
            vec!["Present".to_string(), "Absent".to_string()],
            vec![present, absent],
            &PRESENCE_COLORS,
        )
    }

    pub fn event_types(breakdown: &[LabelCount]) -> Self {
        Self::build(
            breakdown.iter().map(|lc| lc.label.clone()).collect(),
            breakdown.iter().map(|lc| lc.count).collect(),
            &EVENT_TYPE_COLORS,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BarDataset {
    pub label: String,
    pub data: Vec<usize>,
    pub background_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BarChart {
    pub labels: Vec<String>,
    pub datasets: Vec<BarDataset>,
    /// Bars stack to 100% instead of sitting side by side
    pub stacked: bool,
}

fn dataset(label: &str, data: Vec<usize>, color: &str) -> BarDataset {
    BarDataset {
        label: label.to_string(),
        data,
        background_color: color.to_string(),
    }
}

impl BarChart {
    pub fn attendance(members: &[MemberAttendance]) -> Self {
        Self {
            labels: members.iter().map(|m| m.name.clone()).collect(),
            datasets: vec![
                dataset(
                    "Present Days",
                    members.iter().map(|m| m.present_days).collect(),
                    PRESENT_COLOR,
                ),
                dataset(
                    "Absent Days",
                    members.iter().map(|m| m.absent_days).collect(),
                    ABSENT_COLOR,
                ),
            ],
            stacked: false,
        }
    }

    /// One stacked bar per member, one series per kind of day.
    pub fn time_division(members: &[MemberTimeDivision]) -> Self {
        let series: [(&str, fn(&MemberTimeDivision) -> usize); 4] = [
            ("Work", |m| m.work),
            ("Meetings", |m| m.meetings),
            ("Leaves", |m| m.leaves),
            ("Other", |m| m.other),
        ];

        Self {
            labels: members.iter().map(|m| m.name.clone()).collect(),
            datasets: series
                .iter()
                .zip(STACKED_COLORS)
                .map(|((label, count), color)| {
                    dataset(label, members.iter().map(|m| count(m)).collect(), color)
                })
                .collect(),
            stacked: true,
        }
    }
}
