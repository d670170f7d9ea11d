//! Known-date fixtures for every schedule, checked against published
//! calendars.

use shiurim::{
    amud_yomi_bavli, daf_hashavua_bavli, daf_yomi_bavli, daf_yomi_yerushalmi, mishna_yomi,
    pirkei_avot, tehillim_monthly, Amud, AvotReading, Daf, Mishna, MishnaRange, Side,
    TehillimReading,
};

fn daf(tractate: &'static str, page: u32) -> Option<Daf> {
    Some(Daf { tractate, page })
}

#[test]
fn bavli_published_calendar() {
    assert_eq!(daf_yomi_bavli(1975, 6, 23), Ok(None));
    assert_eq!(daf_yomi_bavli(1975, 6, 24), Ok(daf("Berachos", 2)));
    assert_eq!(daf_yomi_bavli(2012, 8, 3), Ok(daf("Berachos", 2)));
    assert_eq!(daf_yomi_bavli(2017, 12, 28), Ok(daf("Shevuos", 30)));
    assert_eq!(daf_yomi_bavli(2024, 1, 1), Ok(daf("Bava Kamma", 60)));
    // End of the 13th cycle and start of the 14th.
    assert_eq!(daf_yomi_bavli(2020, 1, 4), Ok(daf("Niddah", 73)));
    assert_eq!(daf_yomi_bavli(2020, 1, 5), Ok(daf("Berachos", 2)));
}

#[test]
fn bavli_irregular_pagination_at_the_end_of_kodashim() {
    // Kinnim, Tamid and Midos continue Meilah's page numbers.
    assert_eq!(daf_yomi_bavli(2019, 10, 9), Ok(daf("Meilah", 22)));
    assert_eq!(daf_yomi_bavli(2019, 10, 10), Ok(daf("Kinnim", 23)));
    assert_eq!(daf_yomi_bavli(2019, 10, 13), Ok(daf("Tamid", 26)));
    assert_eq!(daf_yomi_bavli(2019, 10, 22), Ok(daf("Midos", 35)));
    assert_eq!(daf_yomi_bavli(2019, 10, 25), Ok(daf("Niddah", 2)));
}

#[test]
fn yerushalmi_published_calendar() {
    assert_eq!(daf_yomi_yerushalmi(1982, 5, 15), Ok(daf("Chagigah", 4)));
    assert_eq!(daf_yomi_yerushalmi(1984, 5, 12), Ok(daf("Niddah", 13)));
    assert_eq!(daf_yomi_yerushalmi(2000, 1, 1), Ok(daf("Kesubos", 66)));
    assert_eq!(daf_yomi_yerushalmi(2010, 1, 12), Ok(daf("Niddah", 13)));
    assert_eq!(daf_yomi_yerushalmi(2017, 12, 28), Ok(daf("Bava Metzia", 33)));
    // A new pass begins the day after the previous one ends.
    assert_eq!(daf_yomi_yerushalmi(2005, 10, 3), Ok(daf("Berachos", 1)));
}

#[test]
fn yerushalmi_pauses_on_fast_days() {
    // Yom Kippur 5778 and Tisha B'Av 5770.
    assert_eq!(daf_yomi_yerushalmi(2017, 9, 30), Ok(None));
    assert_eq!(daf_yomi_yerushalmi(2010, 7, 20), Ok(None));
}

fn mishnas(
    tractate: &'static str,
    start: (u8, u8),
    end_tractate: &'static str,
    end: (u8, u8),
) -> Option<MishnaRange> {
    Some(MishnaRange {
        start: Mishna { tractate, chapter: start.0, mishna: start.1 },
        end: Mishna { tractate: end_tractate, chapter: end.0, mishna: end.1 },
    })
}

#[test]
fn mishna_yomi_published_calendar() {
    assert_eq!(mishna_yomi(1947, 1, 1), Ok(None));
    assert_eq!(
        mishna_yomi(1947, 5, 20),
        Ok(mishnas("Berachos", (1, 1), "Berachos", (1, 2)))
    );
    assert_eq!(
        mishna_yomi(1950, 1, 1),
        Ok(mishnas("Bava Kamma", (1, 1), "Bava Kamma", (1, 2)))
    );
    assert_eq!(
        mishna_yomi(2000, 1, 1),
        Ok(mishnas("Shabbos", (9, 5), "Shabbos", (9, 6)))
    );
    assert_eq!(
        mishna_yomi(2017, 12, 28),
        Ok(mishnas("Megillah", (3, 4), "Megillah", (3, 5)))
    );
    assert_eq!(
        mishna_yomi(2018, 1, 1),
        Ok(mishnas("Megillah", (4, 6), "Megillah", (4, 7)))
    );
}

#[test]
fn mishna_yomi_boundaries() {
    // Last and first day of a 2096-day pass.
    assert_eq!(
        mishna_yomi(2016, 3, 29),
        Ok(mishnas("Uktzin", (3, 11), "Uktzin", (3, 12)))
    );
    assert_eq!(
        mishna_yomi(2016, 3, 30),
        Ok(mishnas("Berachos", (1, 1), "Berachos", (1, 2)))
    );
    // A day straddling two tractates.
    assert_eq!(
        mishna_yomi(2016, 4, 27),
        Ok(mishnas("Berachos", (9, 5), "Peah", (1, 1)))
    );
    // A day straddling two chapters.
    assert_eq!(
        mishna_yomi(2017, 12, 26),
        Ok(mishnas("Megillah", (2, 6), "Megillah", (3, 1)))
    );
    assert_eq!(
        mishna_yomi(2012, 2, 26),
        Ok(mishnas("Rosh Hashanah", (2, 9), "Rosh Hashanah", (3, 1)))
    );
}

#[test]
fn dirshu_amud_yomi() {
    assert_eq!(amud_yomi_bavli(2023, 10, 15), Ok(None));
    assert_eq!(
        amud_yomi_bavli(2023, 10, 16),
        Ok(Some(Amud { tractate: "Berachos", page: 2, side: Side::Aleph }))
    );
    assert_eq!(
        amud_yomi_bavli(2023, 10, 17),
        Ok(Some(Amud { tractate: "Berachos", page: 2, side: Side::Bet }))
    );
    assert_eq!(
        amud_yomi_bavli(2024, 5, 30),
        Ok(Some(Amud { tractate: "Shabbos", page: 53, side: Side::Aleph }))
    );
}

#[test]
fn daf_hashavua_follows_the_governing_shabbat() {
    // The week of Shabbat 2023-12-30 studies that Shabbat's daf.
    assert_eq!(daf_hashavua_bavli(2024, 1, 1), Ok(daf("Bava Kamma", 58)));
    assert_eq!(daf_hashavua_bavli(2024, 1, 5), Ok(daf("Bava Kamma", 58)));
    // The daily schedule has moved on meanwhile.
    assert_eq!(daf_yomi_bavli(2024, 1, 1), Ok(daf("Bava Kamma", 60)));
}

#[test]
fn pirkei_avot_season() {
    // 5784: Pesach ended (in the diaspora) with Nissan 22 = 2024-04-30.
    assert_eq!(pirkei_avot(2024, 4, 30, false), Ok(None));
    assert_eq!(pirkei_avot(2024, 5, 1, false), Ok(Some(AvotReading::Single(1))));
    // Winter dates are out of season.
    assert_eq!(pirkei_avot(2023, 12, 1, false), Ok(None));
}

#[test]
fn tehillim_follows_the_hebrew_day_of_month() {
    // 1 Tishrei 5786 = 2025-09-23, 30 Tishrei = 2025-10-22.
    assert_eq!(
        tehillim_monthly(2025, 9, 23),
        Ok(Some(TehillimReading::Psalms { start: 1, end: 9 }))
    );
    assert_eq!(
        tehillim_monthly(2025, 10, 22),
        Ok(Some(TehillimReading::Psalms { start: 145, end: 150 }))
    );
}
