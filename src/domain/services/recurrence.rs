use chrono::{Datelike, Duration, Months, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::domain::models::slot::{NewSlotParams, ReceptionSlot};

/// 1-based occurrence index of a date's weekday within its month:
/// the 1st through 7th are occurrence 1, the 8th through 14th occurrence 2.
pub fn week_number_in_month(date: NaiveDate) -> u32 {
    (date.day() + 6) / 7
}

/// Enumerates the concrete dates matched by a weekday rule over the next
/// `months_ahead` calendar months starting at `start_from`'s month.
///
/// With a week number, each month contributes the first matching weekday
/// advanced by `(week_number - 1) * 7` days; a candidate that rolls into the
/// following month is discarded (a month has no 5th Friday most of the time).
/// Without a week number, every weekly occurrence from `start_from` onward is
/// included. `weekday` is numeric, 0 = Sunday through 6 = Saturday.
pub fn find_recurring_dates(
    weekday: u8,
    week_number: Option<u32>,
    months_ahead: u32,
    start_from: NaiveDate,
) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let month_anchor = start_from.with_day(1).unwrap();

    for offset in 0..months_ahead {
        let first_of_month = month_anchor + Months::new(offset);
        let shift = (7 + weekday as i64
            - first_of_month.weekday().num_days_from_sunday() as i64)
            % 7;
        let first_occurrence = first_of_month + Duration::days(shift);

        match week_number {
            Some(n) => {
                let candidate = first_occurrence + Duration::days(((n.max(1) - 1) * 7) as i64);
                if candidate.month() == first_of_month.month() {
                    dates.push(candidate);
                }
            }
            None => {
                let mut current = first_occurrence;
                while current.month() == first_of_month.month() {
                    if current >= start_from {
                        dates.push(current);
                    }
                    current += Duration::days(7);
                }
            }
        }
    }

    dates
}

/// Fixed time-of-day window plus tick length used to cut a day into slots.
#[derive(Debug, Clone, Copy)]
pub struct SlotRule {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub slot_duration_min: i64,
}

/// Generates one slot per `slot_duration_min`-minute tick in
/// `[start_time, end_time)` for every date. A tick is only emitted when the
/// full slot fits before the window end; a shorter trailing remainder is
/// dropped, never padded.
pub fn expand_to_slots(
    management_id: &str,
    rule: &SlotRule,
    dates: &[NaiveDate],
    template_id: Option<&str>,
) -> Vec<ReceptionSlot> {
    let mut slots = Vec::new();
    if rule.slot_duration_min <= 0 {
        return slots;
    }

    let step = Duration::minutes(rule.slot_duration_min);

    for &date in dates {
        let window_start = Utc.from_utc_datetime(&date.and_time(rule.start_time));
        let window_end = Utc.from_utc_datetime(&date.and_time(rule.end_time));

        let mut cursor = window_start;
        while cursor + step <= window_end {
            slots.push(ReceptionSlot::new(NewSlotParams {
                management_id: management_id.to_string(),
                date,
                start_time: cursor,
                end_time: cursor + step,
                recurring_template_id: template_id.map(str::to_string),
            }));
            cursor += step;
        }
    }

    slots
}
