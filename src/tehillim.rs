//! The monthly Tehillim division: a fixed 30-slot template over the 150
//! psalms, read by day of the Hebrew month. Slots 25 and 26 split Psalm 119
//! into its two verse halves; in a 29-day month the 29th day absorbs the
//! final slot so the whole book is always finished by month's end.

use crate::hebrew::HebrewDate;
use crate::units::TehillimReading;

// Last psalm of each slot, cumulative. Slots 25 and 26 both end at 119
// because they are the two halves of that psalm.
const SLOT_END: [u8; 30] = [
    9, 17, 22, 28, 34, 38, 43, 48, 54, 59, 65, 68, 71, 76, 78, 82, 87, 89, 96, 103, 105, 107,
    112, 118, 119, 119, 134, 139, 144, 150,
];

pub(crate) fn reading_for(date: &HebrewDate) -> TehillimReading {
    let day = date.day();
    match day {
        25 => TehillimReading::PsalmVerses {
            psalm: 119,
            start_verse: 1,
            end_verse: 96,
        },
        26 => TehillimReading::PsalmVerses {
            psalm: 119,
            start_verse: 97,
            end_verse: 176,
        },
        29 if date.days_in_month() == 29 => TehillimReading::Psalms {
            start: SLOT_END[27] + 1,
            end: SLOT_END[29],
        },
        _ => TehillimReading::Psalms {
            start: if day == 1 { 1 } else { SLOT_END[day as usize - 2] + 1 },
            end: SLOT_END[day as usize - 1],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hebrew::HebrewMonth;

    // Teves always has 29 days and Shevat always 30.
    fn day_of(month: HebrewMonth, day: u8) -> HebrewDate {
        HebrewDate::new(5784, month, day).unwrap()
    }

    #[test]
    fn first_and_last_days() {
        assert_eq!(
            reading_for(&day_of(HebrewMonth::Shevat, 1)),
            TehillimReading::Psalms { start: 1, end: 9 }
        );
        assert_eq!(
            reading_for(&day_of(HebrewMonth::Shevat, 30)),
            TehillimReading::Psalms { start: 145, end: 150 }
        );
    }

    #[test]
    fn psalm_119_splits_into_verse_halves() {
        assert_eq!(
            reading_for(&day_of(HebrewMonth::Shevat, 25)),
            TehillimReading::PsalmVerses { psalm: 119, start_verse: 1, end_verse: 96 }
        );
        assert_eq!(
            reading_for(&day_of(HebrewMonth::Shevat, 26)),
            TehillimReading::PsalmVerses { psalm: 119, start_verse: 97, end_verse: 176 }
        );
    }

    #[test]
    fn short_month_merges_the_last_two_slots() {
        assert_eq!(
            reading_for(&day_of(HebrewMonth::Teves, 29)),
            TehillimReading::Psalms { start: 140, end: 150 }
        );
        // In a full month day 29 keeps its own slot.
        assert_eq!(
            reading_for(&day_of(HebrewMonth::Shevat, 29)),
            TehillimReading::Psalms { start: 140, end: 144 }
        );
    }

    #[test]
    fn every_month_covers_the_whole_book_in_order() {
        for month in [HebrewMonth::Teves, HebrewMonth::Shevat] {
            let mut next_psalm = 1_u16;
            let days = day_of(month, 1).days_in_month();
            for day in 1..=days {
                match reading_for(&day_of(month, day)) {
                    TehillimReading::Psalms { start, end } => {
                        assert_eq!(start as u16, next_psalm, "{:?} day {}", month, day);
                        assert!(end >= start);
                        next_psalm = end as u16 + 1;
                    }
                    TehillimReading::PsalmVerses { psalm, start_verse, end_verse } => {
                        assert_eq!(psalm, 119);
                        assert!(start_verse <= end_verse);
                        // The second half finishes the psalm.
                        if end_verse == 176 {
                            next_psalm = 120;
                        }
                    }
                }
            }
            assert_eq!(next_psalm, 151, "{:?}", month);
        }
    }
}
