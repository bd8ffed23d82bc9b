use chrono::{Datelike, NaiveDate, NaiveTime, TimeZone, Utc};
use reception_backend::domain::services::recurrence::{
    expand_to_slots, find_recurring_dates, week_number_in_month, SlotRule,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_week_number_first_seven_days() {
    for day in 1..=7 {
        assert_eq!(week_number_in_month(date(2024, 3, day)), 1, "day {}", day);
    }
    for day in 8..=14 {
        assert_eq!(week_number_in_month(date(2024, 3, day)), 2, "day {}", day);
    }
    assert_eq!(week_number_in_month(date(2024, 3, 15)), 3);
    assert_eq!(week_number_in_month(date(2024, 3, 31)), 5);
}

#[test]
fn test_second_monday_across_three_months() {
    // weekday 1 = Monday
    let dates = find_recurring_dates(1, Some(2), 3, date(2024, 1, 1));

    assert_eq!(
        dates,
        vec![date(2024, 1, 8), date(2024, 2, 12), date(2024, 3, 11)]
    );
    for d in &dates {
        assert_eq!(d.weekday().num_days_from_sunday(), 1);
        assert_eq!(week_number_in_month(*d), 2);
    }
}

#[test]
fn test_fifth_occurrence_is_discarded_when_month_rolls_over() {
    // February 2024 has only four Fridays; a "5th Friday" candidate lands in
    // March and must be dropped.
    let dates = find_recurring_dates(5, Some(5), 1, date(2024, 2, 1));
    assert!(dates.is_empty());

    // March 2024 does have a 5th Friday (the 29th).
    let dates = find_recurring_dates(5, Some(5), 1, date(2024, 3, 1));
    assert_eq!(dates, vec![date(2024, 3, 29)]);
}

#[test]
fn test_weekly_includes_every_occurrence_from_start() {
    // Mondays in January 2024: 1, 8, 15, 22, 29. Starting mid-month skips
    // the occurrences before the start date.
    let dates = find_recurring_dates(1, None, 1, date(2024, 1, 10));
    assert_eq!(dates, vec![date(2024, 1, 15), date(2024, 1, 22), date(2024, 1, 29)]);
}

#[test]
fn test_weekly_spans_months_in_ascending_order() {
    let dates = find_recurring_dates(1, None, 2, date(2024, 1, 1));

    assert_eq!(dates.first(), Some(&date(2024, 1, 1)));
    assert_eq!(dates.last(), Some(&date(2024, 2, 26)));
    assert_eq!(dates.len(), 9); // 5 Mondays in January + 4 in February
    assert!(dates.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_expand_thirty_minute_window_into_three_slots() {
    let rule = SlotRule {
        start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        slot_duration_min: 10,
    };

    let slots = expand_to_slots("mgmt-1", &rule, &[date(2024, 3, 4)], None);

    assert_eq!(slots.len(), 3);
    let expected = [(9, 0, 9, 10), (9, 10, 9, 20), (9, 20, 9, 30)];
    for (slot, (sh, sm, eh, em)) in slots.iter().zip(expected) {
        let start = Utc.with_ymd_and_hms(2024, 3, 4, sh, sm, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 4, eh, em, 0).unwrap();
        assert_eq!(slot.start_time, start);
        assert_eq!(slot.end_time, end);
        assert_eq!(slot.management_id, "mgmt-1");
        assert!(slot.is_available);
        assert!(!slot.is_booked);
        assert!(slot.booked_by.is_none());
    }
}

#[test]
fn test_expand_drops_trailing_remainder() {
    // 09:00-09:25 with 10-minute ticks: the 09:20 tick would overrun the
    // window end and is not emitted.
    let rule = SlotRule {
        start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(9, 25, 0).unwrap(),
        slot_duration_min: 10,
    };

    let slots = expand_to_slots("mgmt-1", &rule, &[date(2024, 3, 4)], None);
    assert_eq!(slots.len(), 2);
}

#[test]
fn test_expand_marks_template_slots_recurring() {
    let rule = SlotRule {
        start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(10, 20, 0).unwrap(),
        slot_duration_min: 10,
    };

    let slots = expand_to_slots("mgmt-1", &rule, &[date(2024, 3, 4)], Some("tpl-1"));
    assert!(slots.iter().all(|s| s.is_recurring));
    assert!(slots.iter().all(|s| s.recurring_template_id.as_deref() == Some("tpl-1")));

    let manual = expand_to_slots("mgmt-1", &rule, &[date(2024, 3, 5)], None);
    assert!(manual.iter().all(|s| !s.is_recurring));
}

#[test]
fn test_expand_rejects_nonpositive_duration() {
    let rule = SlotRule {
        start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        slot_duration_min: 0,
    };

    assert!(expand_to_slots("mgmt-1", &rule, &[date(2024, 3, 4)], None).is_empty());
}
