// The Gregorian calendar works in cycles of 400 years. Each cycle has
// 100-3=97 leap years and 303 normal years, giving 97*366 + 303*365 = 146097
// days. Placing the leap day at the *end* of each period (year, quadrennium,
// century, cycle) lets the leap days come out naturally as an "overflow",
// without branching on where in the period we are: we shift the year so it
// starts March 1, and pick 2000-03-01 — right after the last leap day of the
// preceding cycle — as the zero point of the decomposition. A quadrennium is
// then three 365-day years followed by a 366-day one, a century is 24 such
// quadrennia followed by a short one, and the cycle ends with the "leap
// century" that keeps its final leap day.
//
// Day numbers throughout the crate are Rata Die: day 1 is 0001-01-01 in the
// proleptic Gregorian calendar, so weekday(rd) = rd mod 7 with 0 = Sunday.

use num_integer::Integer;

use crate::div_rem::ClampedDivRem;
use crate::error::DateError;

const CYCLE_DAYS: u32 = 97 * 366 + 303 * 365;
const CENTURY_DAYS: u32 = 24 * 366 + 76 * 365;
const QUADRENNIUM_DAYS: u16 = 3 * 365 + 366;
const YEAR_DAYS: u16 = 365;

// Rata Die day number of 2000-03-01, the zero point of the decomposition.
const NORMALIZED_OFFSET_DAYS: i64 = 730180;

// Index 0 = March. The sentinel keeps month_from_day_offset from walking off
// the end of the shifted year.
const MONTH_STARTS: [u16; 13] = [0, 31, 61, 92, 122, 153, 184, 214, 245, 275, 306, 337, 65535];

/// Supported Rata Die window, shared by both calendars: 1600-01-01 through
/// 2999-12-31 Gregorian. Conversions are exact inside it and refused outside.
pub(crate) const RD_MIN: i64 = 584023;
pub(crate) const RD_MAX: i64 = 1095362;

fn month_from_day_offset(day: u16) -> u8 {
    let mut month = (day / 30) as u8;
    if day < MONTH_STARTS[month as usize] {
        // We have overshot the month. Move back.
        month -= 1;
    }
    month
}

fn is_gregorian_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_gregorian_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// A proleptic Gregorian calendar date, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
            return Err(DateError::InvalidDate { year, month, day });
        }
        let date = GregorianDate { year, month, day };
        if !(RD_MIN..=RD_MAX).contains(&date.to_rd()) {
            return Err(DateError::OutOfRange);
        }
        Ok(date)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
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

    pub fn to_hebrew(&self) -> crate::hebrew::HebrewDate {
        crate::hebrew::HebrewDate::from_rd(self.to_rd())
    }

    pub(crate) fn to_rd(&self) -> i64 {
        let mut year = self.year as i64;
        let mut month = self.month - 1;
        let day = self.day - 1;
        if month < 2 {
            month += 12;
            year -= 1;
        }
        month -= 2;
        year -= 2000;

        let (cycle, years_into_cycle) = year.div_mod_floor(&400);
        let years_into_cycle = years_into_cycle as u16;
        let (century, years_into_century) = years_into_cycle.clamped_div_rem(100, 3_u8);
        let (quadrennium, years_into_quadrennium) = years_into_century.clamped_div_rem(4, 24_u8);

        let days_into_year = MONTH_STARTS[month as usize] + day as u16;
        cycle * CYCLE_DAYS as i64
            + century as i64 * CENTURY_DAYS as i64
            + quadrennium as i64 * QUADRENNIUM_DAYS as i64
            + years_into_quadrennium as i64 * YEAR_DAYS as i64
            + days_into_year as i64
            + NORMALIZED_OFFSET_DAYS
    }

    pub(crate) fn from_rd(rd: i64) -> Self {
        let day = rd - NORMALIZED_OFFSET_DAYS;
        let (cycle, days_into_cycle) = day.div_mod_floor(&(CYCLE_DAYS as i64));
        let days_into_cycle = days_into_cycle as u32; // 2^18 days per cycle

        // The first three centuries of each cycle are normal centuries with 24
        // leap years and 76 normal years. The fourth keeps its final leap day,
        // so it is one day longer.
        let (century, days_into_century) = days_into_cycle.clamped_div_rem(CENTURY_DAYS, 3_u8);
        let days_into_century = days_into_century as u16; // 2^16 days per century

        // Each quadrennium ends with its leap day, except the last quadrennium
        // of the first three centuries, which lacks it. A plain division works
        // because the missing day is at the very end.
        let (quadrennium, days_into_quadrennium) = days_into_century.div_rem(&QUADRENNIUM_DAYS);
        let quadrennium = quadrennium as u8;

        let (years_into_quadrennium, days_into_year) =
            days_into_quadrennium.clamped_div_rem(YEAR_DAYS, 3_u8);

        let mut year = 2000
            + 400 * cycle
            + 100 * century as i64
            + 4 * quadrennium as i64
            + years_into_quadrennium as i64;

        // The shifted year starts in March, so the leap day sits at the end
        // and the month starts never move. Shift back for the civil date.
        let mut month = month_from_day_offset(days_into_year);
        let days_into_month = (days_into_year - MONTH_STARTS[month as usize]) as u8;
        month += 2;
        if month >= 12 {
            month -= 12;
            year += 1;
        }

        GregorianDate {
            year: year as i32,
            month: month + 1,
            day: days_into_month + 1,
        }
    }
}
