//! Calendar arithmetic: the week strip and the per-item time predicates.
//!
//! Everything here is pure and deterministic. "Now" always arrives as an
//! explicit parameter so callers stay testable without clock mocking.

use chrono::{DateTime, Days, NaiveDate, Timelike, Utc, Weekday};

/// First-day-of-week convention used when computing the week strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarRules {
    pub first_weekday: Weekday,
}

impl Default for CalendarRules {
    fn default() -> Self {
        // Sunday-start weeks, which places Monday..Sunday on the strip.
        Self {
            first_weekday: Weekday::Sun,
        }
    }
}

/// Compute the 7-day strip for the week containing `reference`.
///
/// The strip holds the dates at offsets 1..=7 from the start of the week
/// interval, not 0..=6: with Sunday-start weeks the strip runs Monday
/// through the following Sunday, and the interval-start Sunday itself is
/// not on it. That one-day shift is observed behavior the rest of the
/// system relies on.
///
/// Returns an empty strip when the interval cannot be computed, which
/// only happens for references at the edge of the representable date
/// range. The screen then renders without day selectors instead of
/// failing.
pub fn week_strip(reference: DateTime<Utc>, rules: CalendarRules) -> Vec<NaiveDate> {
    let week = reference.date_naive().week(rules.first_weekday);
    let Some(start) = week.checked_first_day() else {
        return Vec::new();
    };
    (1..=7)
        .map(|offset| start.checked_add_days(Days::new(offset)))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default()
}

/// True when `instant` falls on the calendar day `day`.
pub fn is_same_day(instant: DateTime<Utc>, day: NaiveDate) -> bool {
    instant.date_naive() == day
}

/// Strip-highlight predicate: is `day` the currently selected day?
pub fn is_selected_day(day: NaiveDate, selected: NaiveDate) -> bool {
    day == selected
}

/// True when `date` shares its hour-of-day with `now`.
///
/// Only the hour component is compared; day, month and year are ignored.
/// A task from another day whose hour matches the current hour is still
/// flagged current.
pub fn is_current_hour(date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    date.hour() == now.hour()
}
