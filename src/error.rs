use thiserror::Error;

use crate::hebrew::HebrewMonth;

/// Rejection of a date before any schedule logic runs. Distinct from the
/// `None` outcome, which means a structurally valid date falls outside a
/// schedule's validity window.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    #[error("no such Gregorian date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },

    #[error("no such Hebrew date: {day} {month:?} {year}")]
    InvalidHebrew {
        year: i32,
        month: HebrewMonth,
        day: u8,
    },

    #[error("date is outside the supported calendar range")]
    OutOfRange,
}
