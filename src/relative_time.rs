//! Relative comment times ("23時間前", "3 days ago") to absolute timestamps

use std::sync::OnceLock;

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Timelike};
use regex::Regex;

/// Output format for every resolved time
pub const TIME_FORMAT: &str = "%Y/%m/%d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
}

fn patterns() -> &'static [(Unit, Regex)] {
    static PATTERNS: OnceLock<Vec<(Unit, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (Unit::Minutes, r"(\d+)\s*(?:分前|minutes?\s+ago)"),
            (Unit::Hours, r"(\d+)\s*(?:時間前|hours?\s+ago)"),
            (Unit::Days, r"(\d+)\s*(?:日前|days?\s+ago)"),
            (Unit::Weeks, r"(\d+)\s*(?:週間前|weeks?\s+ago)"),
            (Unit::Months, r"(\d+)\s*(?:[ヶかヵ]?月前|months?\s+ago)"),
        ]
        .into_iter()
        .filter_map(|(unit, pattern)| Regex::new(pattern).ok().map(|re| (unit, re)))
        .collect()
    })
}

/// Resolve `text` against `now` and format it as `YYYY/MM/DD HH:MM`.
///
/// Unrecognized input resolves to `now` itself, as does arithmetic that
/// leaves the calendar range.
pub fn parse_relative_time(text: &str, now: DateTime<FixedOffset>) -> String {
    resolve(text, now).unwrap_or(now).format(TIME_FORMAT).to_string()
}

fn resolve(text: &str, now: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    let (unit, amount) = patterns().iter().find_map(|(unit, re)| {
        let caps = re.captures(text)?;
        Some((*unit, caps.get(1)?.as_str().parse::<i64>().ok()?))
    })?;

    match unit {
        Unit::Minutes => now.checked_sub_signed(Duration::try_minutes(amount)?),
        Unit::Hours => now.checked_sub_signed(Duration::try_hours(amount)?),
        Unit::Days => now.checked_sub_signed(Duration::try_days(amount)?),
        Unit::Weeks => now.checked_sub_signed(Duration::try_weeks(amount)?),
        Unit::Months => sub_months(now, amount),
    }
}

/// Step the month field back, then let the day roll forward past the end of
/// a short month (Mar 31 - 1 month = Mar 3 in a common year). Seconds are dropped.
fn sub_months(now: DateTime<FixedOffset>, months: i64) -> Option<DateTime<FixedOffset>> {
    let total = i64::from(now.year()) * 12 + i64::from(now.month0()) - months;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month0 = u32::try_from(total.rem_euclid(12)).ok()?;

    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;
    let date = first.checked_add_signed(Duration::try_days(i64::from(now.day0()))?)?;
    let naive = date.and_hms_opt(now.hour(), now.minute(), 0)?;
    now.timezone().from_local_datetime(&naive).single()
}
