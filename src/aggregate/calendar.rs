use chrono::NaiveDate;

use crate::model::schedule::ScheduleRecord;

pub const ISO_DATE: &str = "%Y-%m-%d";

/// Calendar date of a record, ignoring any time suffix.
pub fn record_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.get(..10)?;
    NaiveDate::parse_from_str(day, ISO_DATE).ok()
}

/// Splits records into today's and strictly later ones.
///
/// Today's entries match by prefix on the ISO reference date, upcoming ones by
/// parsed date. Records without a date (or with an unparsable one, for the
/// upcoming side) land in neither list.
pub fn split_by_date(
    records: &[ScheduleRecord],
    reference: NaiveDate,
) -> (Vec<&ScheduleRecord>, Vec<&ScheduleRecord>) {
    let today = reference.format(ISO_DATE).to_string();

    let todays = records
        .iter()
        .filter(|r| r.date.as_deref().is_some_and(|d| d.starts_with(&today)))
        .collect();

    let upcoming = records
        .iter()
        .filter(|r| {
            r.date
                .as_deref()
                .and_then(record_date)
                .is_some_and(|d| d > reference)
        })
        .collect();

    (todays, upcoming)
}
