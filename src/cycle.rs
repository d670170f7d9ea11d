//! The cycle engine every daily schedule runs on: a fixed table of named
//! segments, an epoch date, and an optional rule for days the cycle sits out.

use crate::hebrew::{self, HebrewDate, HebrewMonth, SHABBAT};

/// One contiguous run of study units (a tractate, a psalm block). `first_unit`
/// is the traditional number of the segment's first unit, so folio schedules
/// can keep printed page numbers (Bavli tractates open on daf 2, and a few
/// short tractates continue the pagination of their predecessor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub name: &'static str,
    pub units: u32,
    pub first_unit: u32,
}

impl Segment {
    pub const fn new(name: &'static str, units: u32, first_unit: u32) -> Self {
        Segment {
            name,
            units,
            first_unit,
        }
    }
}

/// A unit within a cycle: the segment's name and the unit's traditional
/// number within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclePosition {
    pub name: &'static str,
    pub unit: u32,
}

/// An ordered segment table with a precomputed total. Construction fails on
/// an empty table or a zero-unit segment; the statics in `tables` treat that
/// as a programming error and panic.
#[derive(Debug, Clone)]
pub struct CycleTable {
    segments: Vec<Segment>,
    total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTable;

impl CycleTable {
    pub fn new(segments: Vec<Segment>) -> Result<Self, InvalidTable> {
        if segments.is_empty() || segments.iter().any(|s| s.units == 0) {
            return Err(InvalidTable);
        }
        let total = segments.iter().map(|s| s.units as u64).sum();
        Ok(CycleTable { segments, total })
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segment index and unit offset within it for a raw cycle offset. The
    /// offset is reduced modulo the table total first, so any non-negative
    /// offset is valid.
    pub(crate) fn locate(&self, offset: u64) -> (usize, u32) {
        let mut remaining = offset % self.total;
        for (index, segment) in self.segments.iter().enumerate() {
            if remaining < segment.units as u64 {
                return (index, remaining as u32);
            }
            remaining -= segment.units as u64;
        }
        unreachable!("offset survived reduction modulo the table total");
    }

    pub fn resolve(&self, offset: u64) -> CyclePosition {
        let (index, unit_offset) = self.locate(offset);
        let segment = &self.segments[index];
        CyclePosition {
            name: segment.name,
            unit: segment.first_unit + unit_offset,
        }
    }

    /// Offset within one pass of the cycle for a position, the left inverse
    /// of `resolve`. `None` if no segment matches the name or the unit is
    /// outside the segment's range.
    pub fn inverse_offset(&self, position: CyclePosition) -> Option<u64> {
        let mut preceding = 0_u64;
        for segment in &self.segments {
            if segment.name == position.name {
                let unit_offset = position.unit.checked_sub(segment.first_unit)?;
                if unit_offset >= segment.units {
                    return None;
                }
                return Some(preceding + unit_offset as u64);
            }
            preceding += segment.units as u64;
        }
        None
    }
}

/// Days a daily cycle skips over. Implementations must keep `count`
/// consistent with `skips`: `count(a, b)` is the number of days d in the
/// half-open range (a, b] for which `skips` holds.
pub trait SkipRule: Send + Sync {
    fn skips(&self, date: &HebrewDate) -> bool;

    /// Skipped days in the half-open Rata Die range `(from_rd, to_rd]`.
    fn count(&self, from_rd: i64, to_rd: i64) -> i64;
}

/// The common case: study advances every day.
pub struct NoSkips;

impl SkipRule for NoSkips {
    fn skips(&self, _date: &HebrewDate) -> bool {
        false
    }

    fn count(&self, _from_rd: i64, _to_rd: i64) -> i64 {
        0
    }
}

/// Yom Kippur and Tisha B'Av as observed: when Av 9 falls on Shabbat the
/// fast moves to Av 10 and it is the observed day that the cycle sits out.
pub struct FastDays;

pub(crate) fn yom_kippur_rd(year: i32) -> i64 {
    hebrew::rd_of(year, HebrewMonth::Tishrei, 10)
}

pub(crate) fn tisha_bav_observed_rd(year: i32) -> i64 {
    let rd = hebrew::rd_of(year, HebrewMonth::Av, 9);
    if rd.rem_euclid(7) == SHABBAT as i64 {
        rd + 1
    } else {
        rd
    }
}

impl SkipRule for FastDays {
    fn skips(&self, date: &HebrewDate) -> bool {
        let rd = date.to_rd();
        rd == yom_kippur_rd(date.year()) || rd == tisha_bav_observed_rd(date.year())
    }

    fn count(&self, from_rd: i64, to_rd: i64) -> i64 {
        if to_rd <= from_rd {
            return 0;
        }
        // Both fasts of Hebrew year y lie in [new_year_rd(y), new_year_rd(y+1)),
        // so walking the years overlapping the range visits every candidate.
        let first_year = HebrewDate::from_rd(from_rd).year();
        let last_year = HebrewDate::from_rd(to_rd).year();
        let mut skipped = 0;
        for year in first_year..=last_year {
            for fast in [yom_kippur_rd(year), tisha_bav_observed_rd(year)] {
                if from_rd < fast && fast <= to_rd {
                    skipped += 1;
                }
            }
        }
        skipped
    }
}

/// A perpetual one-unit-per-day schedule: from the epoch onward, each
/// non-skipped day advances one unit through the table, wrapping forever.
pub struct DailyCycle {
    table: CycleTable,
    epoch_rd: i64,
    skip: Box<dyn SkipRule>,
}

impl DailyCycle {
    pub fn new(table: CycleTable, epoch: HebrewDate, skip: Box<dyn SkipRule>) -> Self {
        DailyCycle {
            table,
            epoch_rd: epoch.to_rd(),
            skip,
        }
    }

    pub fn table(&self) -> &CycleTable {
        &self.table
    }

    /// Units advanced by `date` since the epoch: elapsed days minus skipped
    /// days. `None` before the epoch or on a day the cycle sits out.
    pub fn day_offset(&self, date: &HebrewDate) -> Option<i64> {
        let rd = date.to_rd();
        if rd < self.epoch_rd || self.skip.skips(date) {
            return None;
        }
        Some(rd - self.epoch_rd - self.skip.count(self.epoch_rd, rd))
    }

    pub fn position_for(&self, date: &HebrewDate) -> Option<CyclePosition> {
        let offset = self.day_offset(date)?;
        Some(self.table.resolve(offset as u64))
    }
}
