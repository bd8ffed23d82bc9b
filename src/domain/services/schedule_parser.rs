use chrono::NaiveTime;
use regex::Regex;
use serde::Serialize;

/// Minimum duration assigned to an explicit time range.
const MIN_RANGE_DURATION_MIN: i64 = 30;
/// Duration assigned to single-time rules ("every Monday at 10:00").
const DEFAULT_DURATION_MIN: i64 = 60;

const WEEKDAYS: &str = "sunday|monday|tuesday|wednesday|thursday|friday|saturday";

/// Structured form of a recognized office-hours phrasing.
///
/// Weekdays are numeric, 0 = Sunday through 6 = Saturday. `Custom` is the
/// fallback for text the parser does not recognize and is never bookable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScheduleRule {
    WeeklyRange {
        weekday: u8,
        start_time: NaiveTime,
        end_time: NaiveTime,
        duration_min: i64,
    },
    WeeklyExact {
        weekday: u8,
        start_time: NaiveTime,
        duration_min: i64,
    },
    DailyRange {
        start_time: NaiveTime,
        end_time: NaiveTime,
        duration_min: i64,
    },
    DailyExact {
        start_time: NaiveTime,
        duration_min: i64,
    },
    FirstWeekdayOfMonth {
        weekday: u8,
        start_time: NaiveTime,
        duration_min: i64,
    },
    NthWeekdayOfMonth {
        weekday: u8,
        week_number: u32,
        start_time: NaiveTime,
        duration_min: i64,
    },
    ByAppointment,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedSchedule {
    #[serde(flatten)]
    pub rule: ScheduleRule,
    pub description: String,
    pub is_bookable: bool,
    pub requires_contact: bool,
}

impl ParsedSchedule {
    fn new(rule: ScheduleRule, description: &str) -> Self {
        let is_bookable = !matches!(rule, ScheduleRule::Custom);
        let requires_contact = matches!(rule, ScheduleRule::ByAppointment);
        Self {
            rule,
            description: description.to_string(),
            is_bookable,
            requires_contact,
        }
    }
}

/// Parser for the fixed set of office-hours phrasings found in manager
/// profiles. Patterns are tried in a significant order: the more specific
/// nth-of-month and range forms must win over the looser weekly/daily forms.
pub struct ScheduleParser {
    first_of_month: Regex,
    weekly_range: Regex,
    weekly_exact: Regex,
    daily_range: Regex,
    daily_exact: Regex,
    by_appointment: Regex,
    second_of_month: Regex,
}

impl Default for ScheduleParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleParser {
    pub fn new() -> Self {
        Self {
            first_of_month: Regex::new(&format!(
                r"(?i)every\s+first\s+({WEEKDAYS})\s+of\s+the\s+month\s+at\s+(\d{{1,2}}):(\d{{2}})"
            ))
            .expect("Invalid regex"),
            weekly_range: Regex::new(&format!(
                r"(?i)every\s+({WEEKDAYS})\s+from\s+(\d{{1,2}}):(\d{{2}})\s+to\s+(\d{{1,2}}):(\d{{2}})"
            ))
            .expect("Invalid regex"),
            weekly_exact: Regex::new(&format!(
                r"(?i)every\s+({WEEKDAYS})\s+at\s+(\d{{1,2}}):(\d{{2}})"
            ))
            .expect("Invalid regex"),
            daily_range: Regex::new(
                r"(?i)daily\s+from\s+(\d{1,2}):(\d{2})\s+to\s+(\d{1,2}):(\d{2})",
            )
            .expect("Invalid regex"),
            daily_exact: Regex::new(r"(?i)daily\s+at\s+(\d{1,2}):(\d{2})").expect("Invalid regex"),
            by_appointment: Regex::new(r"(?i)by\s+prior\s+appointment").expect("Invalid regex"),
            second_of_month: Regex::new(&format!(
                r"(?i)every\s+second\s+({WEEKDAYS})\s+of\s+the\s+month\s+at\s+(\d{{1,2}}):(\d{{2}})"
            ))
            .expect("Invalid regex"),
        }
    }

    /// Total function: unrecognized text yields the `Custom` rule with
    /// `is_bookable = false` rather than an error, so callers must check
    /// `is_bookable` before expanding a schedule into slots.
    pub fn parse(&self, text: &str) -> ParsedSchedule {
        let text = text.trim();

        if let Some(caps) = self.first_of_month.captures(text)
            && let Some(time) = capture_time(&caps, 2, 3)
        {
            return ParsedSchedule::new(
                ScheduleRule::FirstWeekdayOfMonth {
                    weekday: weekday_index(&caps[1]),
                    start_time: time,
                    duration_min: DEFAULT_DURATION_MIN,
                },
                text,
            );
        }

        if let Some(caps) = self.weekly_range.captures(text)
            && let Some(start) = capture_time(&caps, 2, 3)
            && let Some(end) = capture_time(&caps, 4, 5)
        {
            return ParsedSchedule::new(
                ScheduleRule::WeeklyRange {
                    weekday: weekday_index(&caps[1]),
                    start_time: start,
                    end_time: end,
                    duration_min: range_duration(start, end),
                },
                text,
            );
        }

        if let Some(caps) = self.weekly_exact.captures(text)
            && let Some(time) = capture_time(&caps, 2, 3)
        {
            return ParsedSchedule::new(
                ScheduleRule::WeeklyExact {
                    weekday: weekday_index(&caps[1]),
                    start_time: time,
                    duration_min: DEFAULT_DURATION_MIN,
                },
                text,
            );
        }

        if let Some(caps) = self.daily_range.captures(text)
            && let Some(start) = capture_time(&caps, 1, 2)
            && let Some(end) = capture_time(&caps, 3, 4)
        {
            return ParsedSchedule::new(
                ScheduleRule::DailyRange {
                    start_time: start,
                    end_time: end,
                    duration_min: range_duration(start, end),
                },
                text,
            );
        }

        if let Some(caps) = self.daily_exact.captures(text)
            && let Some(time) = capture_time(&caps, 1, 2)
        {
            return ParsedSchedule::new(
                ScheduleRule::DailyExact {
                    start_time: time,
                    duration_min: DEFAULT_DURATION_MIN,
                },
                text,
            );
        }

        if self.by_appointment.is_match(text) {
            return ParsedSchedule::new(ScheduleRule::ByAppointment, text);
        }

        if let Some(caps) = self.second_of_month.captures(text)
            && let Some(time) = capture_time(&caps, 2, 3)
        {
            return ParsedSchedule::new(
                ScheduleRule::NthWeekdayOfMonth {
                    weekday: weekday_index(&caps[1]),
                    week_number: 2,
                    start_time: time,
                    duration_min: DEFAULT_DURATION_MIN,
                },
                text,
            );
        }

        ParsedSchedule::new(ScheduleRule::Custom, text)
    }
}

fn weekday_index(token: &str) -> u8 {
    match token.to_lowercase().as_str() {
        "sunday" => 0,
        "monday" => 1,
        "tuesday" => 2,
        "wednesday" => 3,
        "thursday" => 4,
        "friday" => 5,
        _ => 6,
    }
}

fn capture_time(caps: &regex::Captures<'_>, hour_group: usize, minute_group: usize) -> Option<NaiveTime> {
    let hour: u32 = caps[hour_group].parse().ok()?;
    let minute: u32 = caps[minute_group].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn range_duration(start: NaiveTime, end: NaiveTime) -> i64 {
    (end - start).num_minutes().max(MIN_RANGE_DURATION_MIN)
}
