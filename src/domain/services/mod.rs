pub mod notifications;
pub mod recurrence;
pub mod schedule_parser;
