use chrono::{DateTime, FixedOffset, Offset, Utc};
use num_format::{Locale, ToFormattedString};

/// Renders the raw values carried by a reason into display text.
pub trait Formatter: Send + Sync {
    /// Absolute date and time.
    fn format_date(&self, date: &DateTime<Utc>) -> String;

    /// A span of time given in seconds.
    fn format_duration(&self, seconds: i64) -> String;

    /// An integer count with thousands grouping.
    fn format_number(&self, value: i64) -> String;
}

const MONTH: u64 = 2_629_800;
const WEEK: u64 = 604_800;
const DAY: u64 = 86_400;
const HOUR: u64 = 3_600;
const MINUTE: u64 = 60;
const SECOND: u64 = 1;

// Largest first; a duration is expressed in the first unit it reaches.
const UNITS: [(u64, &str, &str); 6] = [
    (MONTH, "month", "months"),
    (WEEK, "week", "weeks"),
    (DAY, "day", "days"),
    (HOUR, "hour", "hours"),
    (MINUTE, "minute", "minutes"),
    (SECOND, "second", "seconds"),
];

/// English formatting shown in a fixed UTC offset.
#[derive(Clone, Debug)]
pub struct EnglishFormatter {
    pub clock_24_hours: bool,
    pub offset: FixedOffset,
}

impl Default for EnglishFormatter {
    fn default() -> Self {
        Self {
            clock_24_hours: false,
            offset: Utc.fix(),
        }
    }
}

impl EnglishFormatter {
    pub fn with_24_hour_clock(mut self, enabled: bool) -> Self {
        self.clock_24_hours = enabled;
        self
    }

    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }
}

impl Formatter for EnglishFormatter {
    fn format_date(&self, date: &DateTime<Utc>) -> String {
        let pattern = if self.clock_24_hours {
            "%b %-d, %Y %H:%M"
        } else {
            "%b %-d, %Y %-I:%M %p"
        };
        date.with_timezone(&self.offset).format(pattern).to_string()
    }

    fn format_duration(&self, seconds: i64) -> String {
        let sign = if seconds < 0 { "-" } else { "" };
        let magnitude = seconds.unsigned_abs();

        let Some(&(size, one, many)) = UNITS.iter().find(|(size, ..)| magnitude >= *size) else {
            return "0 seconds".into();
        };

        let count = magnitude / size + u64::from(magnitude % size >= size.div_ceil(2));
        let label = if count == 1 { one } else { many };
        format!("{sign}{count} {label}")
    }

    fn format_number(&self, value: i64) -> String {
        value.to_formatted_string(&Locale::en)
    }
}
