// The Hebrew calendar is lunisolar: months track the moon, and a leap month
// (Adar II) is intercalated in years 3, 6, 8, 11, 14, 17 and 19 of each
// 19-year Metonic cycle to keep Nissan in the spring. The year is pinned down
// by the molad — the mean lunar conjunction of Tishrei — computed in units of
// "parts" (chalakim, 1080 per hour; one lunation is 29d 12h 793p). Rosh
// Hashanah lands on the molad's day, then up to two postponement days apply:
//
// - molad zakein: a molad at or after noon (parts >= 19440 counted from 6pm
//   the previous evening) pushes Rosh Hashanah to the next day;
// - GaTaRaD: in a common year, a Tuesday molad at or after 9h 204p pushes it
//   to Wednesday (which the lo-ADU rule then bumps to Thursday);
// - BeTUTaKFoT: following a leap year, a Monday molad at or after 15h 589p
//   pushes it to Tuesday;
// - lo ADU rosh: Rosh Hashanah may not fall on Sunday, Wednesday or Friday.
//
// Everything else follows from the gap between consecutive new years. A
// common year has 353, 354 or 355 days and a leap year 383, 384 or 385; the
// two swing months are Cheshvan (30 days only in a "complete" year, length
// ending in 5) and Kislev (29 days only in a "deficient" year, length ending
// in 3). All remaining months alternate 30/29 from Tishrei, with the leap
// year inserting a 30-day first Adar before the ordinary 29-day Adar.

use num_integer::Integer;

use crate::error::DateError;
use crate::gregorian::{GregorianDate, RD_MIN, RD_MAX};

/// Weekday number of Shabbat (`rd mod 7`, 0 = Sunday).
pub const SHABBAT: u8 = 6;

/// Months in civil order, Tishrei first. `Adar` is the only Adar of a common
/// year and the 30-day first Adar of a leap year; `AdarII` exists only in
/// leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HebrewMonth {
    Tishrei,
    Cheshvan,
    Kislev,
    Teves,
    Shevat,
    Adar,
    AdarII,
    Nissan,
    Iyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
}

use HebrewMonth::*;

const COMMON_YEAR_MONTHS: [HebrewMonth; 12] = [
    Tishrei, Cheshvan, Kislev, Teves, Shevat, Adar, Nissan, Iyar, Sivan, Tammuz, Av, Elul,
];
const LEAP_YEAR_MONTHS: [HebrewMonth; 13] = [
    Tishrei, Cheshvan, Kislev, Teves, Shevat, Adar, AdarII, Nissan, Iyar, Sivan, Tammuz, Av, Elul,
];

/// The months of `year` in civil order (12 or 13 of them).
pub fn months_of_year(year: i32) -> &'static [HebrewMonth] {
    if is_leap_year(year) {
        &LEAP_YEAR_MONTHS
    } else {
        &COMMON_YEAR_MONTHS
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (7 * year as i64 + 1).rem_euclid(19) < 7
}

// Rata Die of 1 Tishrei of year `y` is elapsed_days(y) + HEBREW_EPOCH_RD.
const HEBREW_EPOCH_RD: i64 = -1_373_428;

const PARTS_PER_HOUR: i64 = 1080;

/// Days from the calendar's epoch to 1 Tishrei of `year`, molad arithmetic
/// and postponements included.
fn elapsed_days(year: i32) -> i64 {
    let (cycles, year_in_cycle) = (year as i64 - 1).div_mod_floor(&19);
    let months = 235 * cycles + 12 * year_in_cycle + (7 * year_in_cycle + 1) / 19;

    // Molad of Tishrei, counted from the epochal molad at day 1, 5h 204p
    // (hours from 6pm the previous evening).
    let parts = 204 + 793 * (months % PARTS_PER_HOUR);
    let hours = 5 + 12 * months + 793 * (months / PARTS_PER_HOUR) + parts / PARTS_PER_HOUR;
    let day = 1 + 29 * months + hours / 24;
    let parts = PARTS_PER_HOUR * (hours % 24) + parts % PARTS_PER_HOUR;

    let day = if parts >= 19440
        || (day % 7 == 2 && parts >= 9924 && !is_leap_year(year))
        || (day % 7 == 1 && parts >= 16789 && is_leap_year(year - 1))
    {
        day + 1
    } else {
        day
    };

    // lo ADU rosh
    match day % 7 {
        0 | 3 | 5 => day + 1,
        _ => day,
    }
}

pub(crate) fn new_year_rd(year: i32) -> i64 {
    elapsed_days(year) + HEBREW_EPOCH_RD
}

pub(crate) fn days_in_year(year: i32) -> i64 {
    elapsed_days(year + 1) - elapsed_days(year)
}

fn has_long_cheshvan(year: i32) -> bool {
    days_in_year(year) % 10 == 5
}

fn has_short_kislev(year: i32) -> bool {
    days_in_year(year) % 10 == 3
}

pub fn days_in_month(year: i32, month: HebrewMonth) -> u8 {
    match month {
        Tishrei | Shevat | Nissan | Sivan | Av => 30,
        Teves | Iyar | Tammuz | Elul | AdarII => 29,
        Cheshvan => {
            if has_long_cheshvan(year) {
                30
            } else {
                29
            }
        }
        Kislev => {
            if has_short_kislev(year) {
                29
            } else {
                30
            }
        }
        Adar => {
            if is_leap_year(year) {
                30
            } else {
                29
            }
        }
    }
}

fn days_before_month(year: i32, month: HebrewMonth) -> i64 {
    let mut days = 0;
    for &m in months_of_year(year) {
        if m == month {
            return days;
        }
        days += days_in_month(year, m) as i64;
    }
    days
}

pub(crate) fn rd_of(year: i32, month: HebrewMonth, day: u8) -> i64 {
    new_year_rd(year) + days_before_month(year, month) + day as i64 - 1
}

/// A Hebrew calendar date, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    year: i32,
    month: HebrewMonth,
    day: u8,
}

impl HebrewDate {
    pub fn new(year: i32, month: HebrewMonth, day: u8) -> Result<Self, DateError> {
        if (month == AdarII && !is_leap_year(year)) || day < 1 || day > days_in_month(year, month)
        {
            return Err(DateError::InvalidHebrew { year, month, day });
        }
        let date = HebrewDate { year, month, day };
        if !(RD_MIN..=RD_MAX).contains(&date.to_rd()) {
            return Err(DateError::OutOfRange);
        }
        Ok(date)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> HebrewMonth {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Day of the week, 0 = Sunday through 6 = Shabbat.
    pub fn weekday(&self) -> u8 {
        self.to_rd().rem_euclid(7) as u8
    }

    pub fn to_gregorian(&self) -> GregorianDate {
        GregorianDate::from_rd(self.to_rd())
    }

    pub(crate) fn to_rd(&self) -> i64 {
        rd_of(self.year, self.month, self.day)
    }

    pub(crate) fn from_rd(rd: i64) -> Self {
        // Seed from the mean year length (35975351/98496 days), then settle
        // on the year whose new year is the last one at or before rd.
        let mut year = ((rd - HEBREW_EPOCH_RD) * 98496 / 35_975_351) as i32;
        while new_year_rd(year) > rd {
            year -= 1;
        }
        while new_year_rd(year + 1) <= rd {
            year += 1;
        }

        let mut remaining = rd - new_year_rd(year);
        for &month in months_of_year(year) {
            let len = days_in_month(year, month) as i64;
            if remaining < len {
                return HebrewDate {
                    year,
                    month,
                    day: remaining as u8 + 1,
                };
            }
            remaining -= len;
        }
        unreachable!("day offset {} exceeds the length of year {}", remaining, year);
    }
}
