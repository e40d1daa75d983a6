//! Hour extraction from free-form display times ("02/06/25 4:00pm").
//!
//! The API stores schedules as display text, so bucketing has to read the
//! text the way a person would: last token, hour before the colon, am/pm
//! marker after it. Anything else is unreadable, and unreadable times are
//! non-filterable by policy, never excluded.

use std::sync::LazyLock;

use regex::Regex;

static DISPLAY_TIME_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}/\d{2} \d{1,2}:\d{2}(am|pm)$").unwrap());

/// Validate the `dd/mm/yy h:mm(am|pm)` display-time format the activities
/// endpoint accepts, case-insensitively on the am/pm marker.
pub fn is_valid_display_time(time: &str) -> bool {
    DISPLAY_TIME_FORMAT.is_match(&time.to_lowercase())
}

/// Extract the hour in [0,23] from a display time.
///
/// Takes the final whitespace-delimited token, splits it on `:`, and honors
/// a trailing case-insensitive am/pm marker. `None` means the string cannot
/// be read that way; callers treat `None` as non-filterable.
pub fn parse_display_hour(time: &str) -> Option<u8> {
    let token = time.split_whitespace().last()?;
    let (hour_part, rest) = token.split_once(':')?;
    let hour: u32 = hour_part.parse().ok()?;
    let marker = rest.to_ascii_lowercase();

    let hour = if marker.contains("pm") && hour != 12 {
        hour.checked_add(12)?
    } else if marker.contains("am") && hour == 12 {
        0
    } else {
        hour
    };

    (hour <= 23).then_some(hour as u8)
}

/// Time-of-day buckets for the schedule filter.
///
/// There is no catch-all night bucket: hours in [22,24) and [0,6) fail each
/// named bucket and only pass `All`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeOfDay {
    #[default]
    All,
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Whether `hour` falls inside this bucket.
    pub fn admits(self, hour: u8) -> bool {
        match self {
            TimeOfDay::All => true,
            TimeOfDay::Morning => (6..12).contains(&hour),
            TimeOfDay::Afternoon => (12..18).contains(&hour),
            TimeOfDay::Evening => (18..22).contains(&hour),
        }
    }
}
