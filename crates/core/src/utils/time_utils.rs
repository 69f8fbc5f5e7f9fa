use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::constants::EXPENSE_YEAR_WINDOW;

/// Source of creation and update stamps.
///
/// Abstracted so tests can pin or step time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Returns true for calendar months 1 through 12.
pub fn is_valid_month(month: u32) -> bool {
    (1..=12).contains(&month)
}

/// The years selectable when recording an expense, newest first.
///
/// The window covers `current_year` and the four years before it.
pub fn recent_years(current_year: i32) -> Vec<i32> {
    (0..EXPENSE_YEAR_WINDOW).map(|i| current_year - i).collect()
}

/// Whether `year` falls inside the selectable window ending at `current_year`.
pub fn is_within_recent_years(year: i32, current_year: i32) -> bool {
    year <= current_year && year > current_year - EXPENSE_YEAR_WINDOW
}

/// Year and month (1-12) of `date`.
pub fn year_month(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

/// The calendar month before `year`/`month`, wrapping January to the previous December.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}
