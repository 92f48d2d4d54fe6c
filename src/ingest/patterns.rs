//! Date, time, and location patterns for free-form chat text.
//!
//! Every extractor is best-effort: it returns the first plausible match
//! or `None`, never an error.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, NaiveTime};
use regex::{Captures, Regex};

// ============================================================================
// Regex Patterns (using LazyLock for static initialization)
// ============================================================================

// Dates
static NUMERIC_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{4}|\d{2})\b").expect("Invalid regex")
});
static NAMED_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+(\d{1,2})(?:st|nd|rd|th)?\b(?:,?\s*(\d{4})\b)?",
    )
    .expect("Invalid regex")
});

// Times
static TIME_RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,2})(?::([0-5]\d))?\s*(?:([ap])\.?m\.?)?\s*(?:-|–|—|\bto\b)\s*(\d{1,2})(?::([0-5]\d))?(?:\s*([ap])\.?m\b\.?)?",
    )
    .expect("Invalid regex")
});
static SINGLE_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})(?::([0-5]\d))?(?:\s*([ap])\.?m\b\.?)?").expect("Invalid regex")
});
static KEYWORD_START_RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(noon|midnight)\s*(?:-|–|—|\bto\b)\s*(\d{1,2})(?::([0-5]\d))?(?:\s*([ap])\.?m\b\.?)?",
    )
    .expect("Invalid regex")
});
static KEYWORD_END_RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,2})(?::([0-5]\d))?\s*(?:([ap])\.?m\.?)?\s*(?:-|–|—|\bto\b)\s*(noon|midnight)\b",
    )
    .expect("Invalid regex")
});
static NOON_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bnoon\b").expect("Invalid regex"));
static MIDNIGHT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bmidnight\b").expect("Invalid regex"));

// Locations
static LOCATION_LABEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*[*_~]*\s*(?:location|where|place|venue)\s*[*_~]*\s*:\s*[*_~]*\s*(.+?)\s*$")
        .expect("Invalid regex")
});
static LEADING_AT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(?:at|@)\s+(.+)$").expect("Invalid regex"));
static INLINE_AT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:^|\s)(?:at|@)\s+").expect("Invalid regex"));
static LOCATION_TAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|\s+)(?:from\s+)?\d{1,2}(?::\d{2})?\s*(?:[ap]\.?m\b|-|–|—|to\b)|\s+(?:on|from|this|next|tomorrow|today|tonight)\b|\s+\d{1,2}[/-]\d{1,2}|[,;!?()|]|\s[-–—]\s",
    )
    .expect("Invalid regex")
});

/// Minimum characters for a location capture to count.
const MIN_LOCATION_CHARS: usize = 3;

// ============================================================================
// Dates
// ============================================================================

/// Find the first calendar date in `text`.
///
/// Numeric `MM/DD/YY(YY)` dates (slash or dash) win over named-month dates
/// (`Oct 5`, `October 5th, 2024`). Two-digit years are taken as 20xx and a
/// missing year defaults to `today`'s year. Impossible dates are skipped.
pub fn extract_date(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let numeric = NUMERIC_DATE_PATTERN.captures_iter(text).find_map(|cap| {
        let month = cap[1].parse::<u32>().ok()?;
        let day = cap[2].parse::<u32>().ok()?;
        let year = cap[3].parse::<i32>().ok()?;
        let year = if cap[3].len() == 2 { 2000 + year } else { year };
        NaiveDate::from_ymd_opt(year, month, day)
    });
    if numeric.is_some() {
        return numeric;
    }

    NAMED_DATE_PATTERN.captures_iter(text).find_map(|cap| {
        let month = month_number(&cap[1])?;
        let day = cap[2].parse::<u32>().ok()?;
        let year = cap
            .get(3)
            .and_then(|m| m.as_str().parse::<i32>().ok())
            .unwrap_or(today.year());
        NaiveDate::from_ymd_opt(year, month, day)
    })
}

fn month_number(name: &str) -> Option<u32> {
    let prefix: String = name.chars().take(3).collect::<String>().to_lowercase();
    let month = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

// ============================================================================
// Times
// ============================================================================

/// A time of day found in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeMatch {
    /// Explicit start and end. The end may precede the start; callers
    /// correct that when assembling the event.
    Range { start: NaiveTime, end: NaiveTime },
    /// A single start time.
    Single(NaiveTime),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    fn from_capture(cap: &Captures<'_>, group: usize) -> Option<Self> {
        let letter = cap.get(group)?.as_str().to_ascii_lowercase();
        Some(if letter == "p" { Meridiem::Pm } else { Meridiem::Am })
    }
}

/// Find the first time range or, failing that, the first single time.
///
/// A numeric match needs an am/pm marker or a `:MM` part on at least one
/// side; bare numbers (and the pieces of numeric dates) are ignored.
/// `noon` and `midnight` also work as either end of a range.
pub fn extract_time(text: &str) -> Option<TimeMatch> {
    if let Some(range) = TIME_RANGE_PATTERN.captures_iter(text).find_map(|cap| range_from(&cap)) {
        return Some(range);
    }
    if let Some(range) = KEYWORD_START_RANGE_PATTERN
        .captures_iter(text)
        .find_map(|cap| keyword_start_range(&cap))
    {
        return Some(range);
    }
    if let Some(range) = KEYWORD_END_RANGE_PATTERN
        .captures_iter(text)
        .find_map(|cap| keyword_end_range(&cap))
    {
        return Some(range);
    }

    if let Some(single) = SINGLE_TIME_PATTERN.captures_iter(text).find_map(|cap| {
        if cap.get(2).is_none() && cap.get(3).is_none() {
            return None;
        }
        let hour = cap[1].parse::<u32>().ok()?;
        let minute = minute_from(&cap, 2);
        clock(to_24h(hour, Meridiem::from_capture(&cap, 3))?, minute)
    }) {
        return Some(TimeMatch::Single(single));
    }

    if NOON_PATTERN.is_match(text) {
        return NaiveTime::from_hms_opt(12, 0, 0).map(TimeMatch::Single);
    }
    if MIDNIGHT_PATTERN.is_match(text) {
        return Some(TimeMatch::Single(NaiveTime::MIN));
    }
    None
}

fn range_from(cap: &Captures<'_>) -> Option<TimeMatch> {
    let start_meridiem = Meridiem::from_capture(cap, 3);
    let end_meridiem = Meridiem::from_capture(cap, 6);
    let has_minutes = cap.get(2).is_some() || cap.get(5).is_some();
    if start_meridiem.is_none() && end_meridiem.is_none() && !has_minutes {
        return None;
    }

    let start_hour = cap[1].parse::<u32>().ok()?;
    let end_hour = cap[4].parse::<u32>().ok()?;

    let mut end_24 = to_24h(end_hour, end_meridiem.or(start_meridiem))?;
    let mut start_24 = to_24h(start_hour, start_meridiem.or(end_meridiem))?;

    // "11-1pm": an inherited PM would put the start after the end.
    if start_meridiem.is_none() && end_meridiem == Some(Meridiem::Pm) && start_24 > end_24 {
        start_24 = to_24h(start_hour, None)?;
    }
    // "11am-1" and "9:00-5:00": read the end as afternoon when the literal
    // reading would put it before the start.
    if end_meridiem.is_none() && end_24 < start_24 && end_24 < 12 {
        end_24 += 12;
    }

    Some(TimeMatch::Range {
        start: clock(start_24, minute_from(cap, 2))?,
        end: clock(end_24, minute_from(cap, 5))?,
    })
}

/// "noon-2pm", "midnight to 1:30". A bare end hour takes the keyword's
/// half of the day.
fn keyword_start_range(cap: &Captures<'_>) -> Option<TimeMatch> {
    let (start, half) = keyword_clock(&cap[1]);
    let end_hour = cap[2].parse::<u32>().ok()?;
    let end_24 = to_24h(end_hour, Meridiem::from_capture(cap, 4).or(Some(half)))?;
    Some(TimeMatch::Range {
        start,
        end: clock(end_24, minute_from(cap, 3))?,
    })
}

/// "11am-noon", "10-midnight". A bare start hour is read as the morning
/// before noon or the evening before midnight.
fn keyword_end_range(cap: &Captures<'_>) -> Option<TimeMatch> {
    let (end, half) = keyword_clock(&cap[4]);
    let before = match half {
        Meridiem::Pm => Meridiem::Am,
        Meridiem::Am => Meridiem::Pm,
    };
    let start_hour = cap[1].parse::<u32>().ok()?;
    let start_24 = to_24h(start_hour, Meridiem::from_capture(cap, 3).or(Some(before)))?;
    Some(TimeMatch::Range {
        start: clock(start_24, minute_from(cap, 2))?,
        end,
    })
}

/// Clock time of `noon` / `midnight` and the half of the day it opens.
fn keyword_clock(word: &str) -> (NaiveTime, Meridiem) {
    if word.eq_ignore_ascii_case("noon") {
        (NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN), Meridiem::Pm)
    } else {
        (NaiveTime::MIN, Meridiem::Am)
    }
}

fn minute_from(cap: &Captures<'_>, group: usize) -> u32 {
    cap.get(group)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Convert to a 24-hour value. With a meridiem the hour must be 1..=12.
fn to_24h(hour: u32, meridiem: Option<Meridiem>) -> Option<u32> {
    match meridiem {
        None => (hour <= 23).then_some(hour),
        Some(_) if !(1..=12).contains(&hour) => None,
        Some(Meridiem::Am) => Some(hour % 12),
        Some(Meridiem::Pm) => Some(hour % 12 + 12),
    }
}

fn clock(hour: u32, minute: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
}

// ============================================================================
// Locations
// ============================================================================

/// Find a location.
///
/// Lines are scanned three times, and the first hit of the earliest pass
/// wins: a `Location:` / `Where:` / `Place:` / `Venue:` label; a line that
/// starts with `at ` or `@ `; an `at` / `@` token anywhere in a line. For the
/// `at` forms the capture is cut before any trailing time or date.
pub fn extract_location(text: &str) -> Option<String> {
    let long_enough = |s: &str| s.chars().count() >= MIN_LOCATION_CHARS;

    for line in text.lines() {
        if let Some(cap) = LOCATION_LABEL_PATTERN.captures(line) {
            let value = cap[1].trim_matches(|c: char| c == '*' || c == '_' || c == '~').trim();
            if long_enough(value) {
                return Some(value.to_string());
            }
        }
    }

    for line in text.lines() {
        if let Some(cap) = LEADING_AT_PATTERN.captures(line) {
            let value = trim_location(&cap[1]);
            if long_enough(value) {
                return Some(value.to_string());
            }
        }
    }

    for line in text.lines() {
        for marker in INLINE_AT_PATTERN.find_iter(line) {
            let value = trim_location(&line[marker.end()..]);
            if long_enough(value) {
                return Some(value.to_string());
            }
        }
    }

    None
}

/// Cut a location capture before times, dates, and clause punctuation.
fn trim_location(raw: &str) -> &str {
    let cut = LOCATION_TAIL_PATTERN
        .find(raw)
        .map(|m| &raw[..m.start()])
        .unwrap_or(raw);
    cut.trim()
        .trim_end_matches(|c: char| matches!(c, '.' | ':' | '-' | '*' | '_'))
        .trim_end()
}
