//! The week-granularity schedules. Both are driven by a governing Shabbat:
//! Daf Hashavua looks back to the Shabbat that opened the current week, while
//! Pirkei Avot looks ahead to the Shabbat on which the week's chapter is read.

use crate::hebrew::{self, HebrewDate, HebrewMonth, SHABBAT};
use crate::tables::DAF_YOMI_BAVLI;
use crate::units::{AvotReading, Daf};

pub(crate) fn shabbat_on_or_before(rd: i64) -> i64 {
    rd - (rd.rem_euclid(7) + 1) % 7
}

pub(crate) fn shabbat_on_or_after(rd: i64) -> i64 {
    rd + (SHABBAT as i64 - rd.rem_euclid(7))
}

/// The Bavli daf in force on the most recent Shabbat: the whole week studies
/// the daily cycle's position as of that Shabbat. `None` when that Shabbat
/// precedes the cycle's epoch.
pub(crate) fn daf_hashavua_bavli(date: &HebrewDate) -> Option<Daf> {
    let governing = shabbat_on_or_before(date.to_rd());
    let position = DAF_YOMI_BAVLI.position_for(&HebrewDate::from_rd(governing))?;
    Some(Daf {
        tractate: position.name,
        page: position.unit,
    })
}

// A Shabbat that is not part of the Avot rotation: the second day of Shavuos
// (outside Israel) and the eve and day of Tisha B'Av.
fn outside_avot_rotation(date: &HebrewDate, in_israel: bool) -> bool {
    match (date.month(), date.day()) {
        (HebrewMonth::Sivan, 7) => !in_israel,
        (HebrewMonth::Av, 8 | 9) => true,
        _ => false,
    }
}

// The season has `total` reading Shabbatot. Full rounds of chapters 1..6 run
// until exactly `round` Shabbatot remain (round = total mod 6, a full 6 when
// total divides evenly); the final round still covers all six chapters by
// giving its last `6 - round` Shabbatot combined pairs from the end. The span
// runs day-after-Pesach to Rosh Hashanah, which pins total to 21 or 22, so
// the final round is never shorter than three Shabbatot.
fn assign(ordinal: u32, total: u32) -> AvotReading {
    let round = match total % 6 {
        0 => 6,
        r => r,
    };
    let cutoff = total - round;
    if ordinal <= cutoff {
        return AvotReading::Single(((ordinal - 1) % 6 + 1) as u8);
    }
    let position = ordinal - cutoff;
    let doubled = 6 - round;
    let singles = round - doubled;
    if position <= singles {
        AvotReading::Single(position as u8)
    } else {
        let pair = position - singles;
        AvotReading::Combined(
            (singles + 2 * pair - 1) as u8,
            (singles + 2 * pair) as u8,
        )
    }
}

/// The chapter(s) of Avos read on the Shabbat governing `date`. The season
/// opens the day after Pesach (Nissan 22 in Israel, Nissan 23 outside) and
/// closes on the last Shabbat before Rosh Hashanah; `None` outside it and on
/// the Shabbatot the rotation skips.
pub(crate) fn pirkei_avot(date: &HebrewDate, in_israel: bool) -> Option<AvotReading> {
    let rd = date.to_rd();
    let anchor_day = if in_israel { 22 } else { 23 };
    let anchor = hebrew::rd_of(date.year(), HebrewMonth::Nissan, anchor_day);
    if rd < anchor {
        return None;
    }

    let season_start = shabbat_on_or_after(anchor);
    let season_end = shabbat_on_or_before(hebrew::new_year_rd(date.year() + 1) - 1);
    let governing = shabbat_on_or_after(rd);
    if governing > season_end {
        return None;
    }
    if outside_avot_rotation(&HebrewDate::from_rd(governing), in_israel) {
        return None;
    }

    let counted = |through: i64| {
        (season_start..=through)
            .step_by(7)
            .filter(|&s| !outside_avot_rotation(&HebrewDate::from_rd(s), in_israel))
            .count() as u32
    };
    Some(assign(counted(governing), counted(season_end)))
}
