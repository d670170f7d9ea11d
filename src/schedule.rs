//! The public entry points. Each takes a Gregorian calendar date, validates
//! it, and answers what that day's portion is: `Err` for a date that does not
//! exist or falls outside the supported calendar range, `Ok(None)` for a
//! valid date the schedule has nothing for (before its epoch, outside its
//! season, or on a day it skips).

use crate::error::DateError;
use crate::gregorian::GregorianDate;
use crate::hebrew::HebrewDate;
use crate::tables::{self, AMUD_YOMI_BAVLI, DAF_YOMI_BAVLI, DAF_YOMI_YERUSHALMI, MISHNA_YOMI};
use crate::tehillim;
use crate::units::{Amud, AvotReading, Daf, MishnaRange, Side, TehillimReading};
use crate::weekly;

fn hebrew_for(year: i32, month: u8, day: u8) -> Result<HebrewDate, DateError> {
    Ok(GregorianDate::new(year, month, day)?.to_hebrew())
}

/// The day's daf in the Babylonian Talmud, one folio a day since 1975-06-24.
pub fn daf_yomi_bavli(year: i32, month: u8, day: u8) -> Result<Option<Daf>, DateError> {
    let date = hebrew_for(year, month, day)?;
    Ok(DAF_YOMI_BAVLI.position_for(&date).map(|p| Daf {
        tractate: p.name,
        page: p.unit,
    }))
}

/// The day's daf in the Jerusalem Talmud, one folio a day since 1980-02-02,
/// pausing on Yom Kippur and Tisha B'Av.
pub fn daf_yomi_yerushalmi(year: i32, month: u8, day: u8) -> Result<Option<Daf>, DateError> {
    let date = hebrew_for(year, month, day)?;
    Ok(DAF_YOMI_YERUSHALMI.position_for(&date).map(|p| Daf {
        tractate: p.name,
        page: p.unit,
    }))
}

/// The day's half-page in the Dirshu amud-a-day program, since 2023-10-16.
pub fn amud_yomi_bavli(year: i32, month: u8, day: u8) -> Result<Option<Amud>, DateError> {
    let date = hebrew_for(year, month, day)?;
    Ok(AMUD_YOMI_BAVLI.position_for(&date).map(|p| Amud {
        tractate: p.name,
        page: p.unit / 2,
        side: if p.unit % 2 == 0 { Side::Aleph } else { Side::Bet },
    }))
}

/// The day's two mishnayos, since 1947-05-20.
pub fn mishna_yomi(year: i32, month: u8, day: u8) -> Result<Option<MishnaRange>, DateError> {
    let date = hebrew_for(year, month, day)?;
    Ok(MISHNA_YOMI.day_offset(&date).map(|days| {
        let first = 2 * days as u64;
        MishnaRange {
            start: tables::mishna_at(first),
            end: tables::mishna_at(first + 1),
        }
    }))
}

/// The week's daf: the daily Bavli position as of the most recent Shabbat.
pub fn daf_hashavua_bavli(year: i32, month: u8, day: u8) -> Result<Option<Daf>, DateError> {
    let date = hebrew_for(year, month, day)?;
    Ok(weekly::daf_hashavua_bavli(&date))
}

/// The chapter(s) of Pirkei Avos for the week, read between Pesach and Rosh
/// Hashanah on the Shabbat on or after the query date.
pub fn pirkei_avot(
    year: i32,
    month: u8,
    day: u8,
    in_israel: bool,
) -> Result<Option<AvotReading>, DateError> {
    let date = hebrew_for(year, month, day)?;
    Ok(weekly::pirkei_avot(&date, in_israel))
}

/// The day's psalms in the monthly Tehillim division. Perpetual in both
/// directions, so a valid date always has a reading.
pub fn tehillim_monthly(
    year: i32,
    month: u8,
    day: u8,
) -> Result<Option<TehillimReading>, DateError> {
    let date = hebrew_for(year, month, day)?;
    Ok(Some(tehillim::reading_for(&date)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_dates_are_errors_not_none() {
        assert_eq!(
            daf_yomi_bavli(2023, 2, 29),
            Err(DateError::InvalidDate { year: 2023, month: 2, day: 29 })
        );
        assert_eq!(tehillim_monthly(1400, 1, 1), Err(DateError::OutOfRange));
    }

    #[test]
    fn pre_epoch_dates_are_none_not_errors() {
        assert_eq!(daf_yomi_bavli(1970, 1, 1), Ok(None));
        assert_eq!(daf_yomi_yerushalmi(1979, 12, 31), Ok(None));
        assert_eq!(amud_yomi_bavli(2023, 10, 15), Ok(None));
        assert_eq!(mishna_yomi(1947, 1, 1), Ok(None));
    }
}
