//! The static schedule data: which tractates, how many units each, and when
//! each program started. Counts follow the standard printed editions (Vilna
//! Shas for the Bavli and the Yerushalmi folio counts used by the daf yomi
//! programs); the Dirshu amud counts include the handful of tractates whose
//! final daf has only one side.

use lazy_static::lazy_static;

use crate::cycle::{CycleTable, DailyCycle, FastDays, NoSkips, Segment};
use crate::gregorian::GregorianDate;
use crate::hebrew::HebrewDate;
use crate::units::Mishna;

// (tractate, dafim, first printed page). Almost every tractate opens on daf
// 2; Kinnim, Tamid and Midos continue Meilah's pagination.
const BAVLI_DAFIM: [(&str, u32, u32); 40] = [
    ("Berachos", 63, 2),
    ("Shabbos", 156, 2),
    ("Eruvin", 104, 2),
    ("Pesachim", 120, 2),
    ("Shekalim", 21, 2),
    ("Yoma", 87, 2),
    ("Sukkah", 55, 2),
    ("Beitzah", 39, 2),
    ("Rosh Hashanah", 34, 2),
    ("Taanis", 30, 2),
    ("Megillah", 31, 2),
    ("Moed Katan", 28, 2),
    ("Chagigah", 26, 2),
    ("Yevamos", 121, 2),
    ("Kesubos", 111, 2),
    ("Nedarim", 90, 2),
    ("Nazir", 65, 2),
    ("Sotah", 48, 2),
    ("Gitin", 89, 2),
    ("Kiddushin", 81, 2),
    ("Bava Kamma", 118, 2),
    ("Bava Metzia", 118, 2),
    ("Bava Basra", 175, 2),
    ("Sanhedrin", 112, 2),
    ("Makkos", 23, 2),
    ("Shevuos", 48, 2),
    ("Avodah Zarah", 75, 2),
    ("Horiyos", 13, 2),
    ("Zevachim", 119, 2),
    ("Menachos", 109, 2),
    ("Chullin", 141, 2),
    ("Bechoros", 60, 2),
    ("Arachin", 33, 2),
    ("Temurah", 33, 2),
    ("Kerisos", 27, 2),
    ("Meilah", 21, 2),
    ("Kinnim", 3, 23),
    ("Tamid", 8, 26),
    ("Midos", 4, 34),
    ("Niddah", 72, 2),
];

// Yerushalmi folios, all numbered from 1.
const YERUSHALMI_DAFIM: [(&str, u32); 39] = [
    ("Berachos", 68),
    ("Peah", 37),
    ("Demai", 34),
    ("Kilayim", 44),
    ("Sheviis", 31),
    ("Terumos", 59),
    ("Maasros", 26),
    ("Maaser Sheni", 33),
    ("Chalah", 28),
    ("Orlah", 20),
    ("Bikurim", 13),
    ("Shabbos", 92),
    ("Eruvin", 65),
    ("Pesachim", 71),
    ("Beitzah", 22),
    ("Rosh Hashanah", 22),
    ("Yoma", 42),
    ("Sukkah", 26),
    ("Taanis", 26),
    ("Shekalim", 33),
    ("Megillah", 34),
    ("Chagigah", 22),
    ("Moed Katan", 19),
    ("Yevamos", 85),
    ("Kesubos", 72),
    ("Sotah", 47),
    ("Nedarim", 40),
    ("Nazir", 47),
    ("Gitin", 54),
    ("Kiddushin", 48),
    ("Bava Kamma", 44),
    ("Bava Metzia", 37),
    ("Bava Basra", 34),
    ("Sanhedrin", 57),
    ("Makkos", 9),
    ("Shevuos", 44),
    ("Avodah Zarah", 37),
    ("Horiyos", 19),
    ("Niddah", 13),
];

// (tractate, amudim, first half-page). A half-page is encoded 2*page for the
// recto (aleph) and 2*page + 1 for the verso (bet), so 4 is daf 2 aleph,
// 45 is daf 22 bet.
const DIRSHU_AMUDIM: [(&str, u32, u32); 40] = [
    ("Berachos", 125, 4),
    ("Shabbos", 312, 4),
    ("Eruvin", 207, 4),
    ("Pesachim", 240, 4),
    ("Shekalim", 42, 4),
    ("Yoma", 173, 4),
    ("Sukkah", 110, 4),
    ("Beitzah", 78, 4),
    ("Rosh Hashanah", 67, 4),
    ("Taanis", 59, 4),
    ("Megillah", 61, 4),
    ("Moed Katan", 55, 4),
    ("Chagigah", 51, 4),
    ("Yevamos", 242, 4),
    ("Kesubos", 222, 4),
    ("Nedarim", 180, 4),
    ("Nazir", 130, 4),
    ("Sotah", 96, 4),
    ("Gitin", 178, 4),
    ("Kiddushin", 162, 4),
    ("Bava Kamma", 236, 4),
    ("Bava Metzia", 235, 4),
    ("Bava Basra", 350, 4),
    ("Sanhedrin", 224, 4),
    ("Makkos", 46, 4),
    ("Shevuos", 96, 4),
    ("Avodah Zarah", 150, 4),
    ("Horiyos", 25, 4),
    ("Zevachim", 238, 4),
    ("Menachos", 217, 4),
    ("Chullin", 281, 4),
    ("Bechoros", 119, 4),
    ("Arachin", 65, 4),
    ("Temurah", 65, 4),
    ("Kerisos", 54, 4),
    ("Meilah", 41, 4),
    ("Kinnim", 6, 45),
    ("Tamid", 17, 51),
    ("Midos", 8, 68),
    ("Niddah", 143, 4),
];

// Mishnayos per chapter, all 63 tractates in the order of the six sedarim.
const MISHNAYOS: [(&str, &[u8]); 63] = [
    ("Berachos", &[5, 8, 6, 7, 5, 8, 5, 8, 5]),
    ("Peah", &[6, 8, 8, 11, 8, 11, 8, 9]),
    ("Demai", &[4, 5, 6, 7, 11, 12, 8]),
    ("Kilayim", &[9, 11, 7, 9, 8, 9, 8, 6, 10]),
    ("Sheviis", &[8, 10, 10, 10, 9, 6, 7, 11, 9, 9]),
    ("Terumos", &[10, 6, 9, 13, 9, 6, 7, 12, 7, 12, 10]),
    ("Maasros", &[8, 8, 10, 6, 8]),
    ("Maaser Sheni", &[7, 10, 13, 12, 15]),
    ("Chalah", &[9, 8, 10, 11]),
    ("Orlah", &[9, 17, 9]),
    ("Bikurim", &[11, 11, 12, 5]),
    (
        "Shabbos",
        &[11, 7, 6, 2, 4, 10, 4, 7, 7, 6, 6, 6, 7, 4, 3, 8, 8, 3, 6, 5, 3, 6, 5, 5],
    ),
    ("Eruvin", &[10, 6, 9, 11, 9, 10, 11, 11, 4, 15]),
    ("Pesachim", &[7, 8, 8, 9, 10, 6, 13, 8, 11, 9]),
    ("Shekalim", &[7, 5, 4, 9, 6, 6, 7, 8]),
    ("Yoma", &[8, 7, 11, 6, 7, 8, 5, 9]),
    ("Sukkah", &[11, 9, 15, 10, 8]),
    ("Beitzah", &[10, 10, 8, 7, 7]),
    ("Rosh Hashanah", &[9, 9, 8, 9]),
    ("Taanis", &[7, 10, 9, 8]),
    ("Megillah", &[11, 6, 6, 10]),
    ("Moed Katan", &[10, 5, 9]),
    ("Chagigah", &[8, 7, 8]),
    (
        "Yevamos",
        &[4, 10, 10, 13, 6, 6, 6, 6, 6, 9, 7, 6, 13, 9, 10, 7],
    ),
    ("Kesubos", &[10, 10, 9, 12, 9, 7, 10, 8, 9, 6, 6, 4, 11]),
    ("Nedarim", &[4, 5, 11, 8, 6, 10, 9, 7, 10, 8, 12]),
    ("Nazir", &[7, 10, 7, 7, 7, 11, 4, 2, 5]),
    ("Sotah", &[9, 6, 8, 5, 5, 4, 8, 7, 15]),
    ("Gitin", &[6, 7, 8, 9, 9, 7, 9, 10, 10]),
    ("Kiddushin", &[10, 10, 13, 14]),
    ("Bava Kamma", &[4, 6, 11, 9, 7, 6, 7, 7, 12, 10]),
    ("Bava Metzia", &[8, 11, 12, 12, 11, 8, 11, 9, 13, 6]),
    ("Bava Basra", &[6, 14, 8, 9, 11, 8, 4, 8, 10, 8]),
    ("Sanhedrin", &[6, 5, 8, 5, 5, 6, 11, 7, 6, 6, 6]),
    ("Makkos", &[10, 8, 16]),
    ("Shevuos", &[7, 5, 11, 13, 5, 7, 8, 6]),
    ("Eduyos", &[14, 10, 12, 12, 7, 3, 9, 7]),
    ("Avodah Zarah", &[9, 7, 10, 12, 12]),
    ("Avos", &[18, 16, 18, 22, 23, 11]),
    ("Horiyos", &[5, 7, 8]),
    ("Zevachim", &[4, 5, 6, 6, 8, 7, 6, 12, 7, 8, 8, 6, 8, 10]),
    ("Menachos", &[4, 5, 7, 5, 9, 7, 6, 7, 9, 9, 9, 5, 11]),
    ("Chullin", &[7, 10, 7, 7, 5, 7, 6, 6, 8, 4, 2, 5]),
    ("Bechoros", &[7, 9, 4, 10, 6, 12, 7, 10, 8]),
    ("Arachin", &[4, 6, 5, 4, 6, 5, 5, 7, 8]),
    ("Temurah", &[6, 3, 5, 4, 6, 5, 6]),
    ("Kerisos", &[7, 6, 10, 3, 8, 9]),
    ("Meilah", &[4, 9, 8, 6, 5, 6]),
    ("Tamid", &[4, 5, 9, 3, 6, 3, 4]),
    ("Midos", &[9, 6, 8, 7, 4]),
    ("Kinnim", &[4, 5, 6]),
    (
        "Keilim",
        &[
            9, 8, 8, 4, 11, 4, 6, 11, 8, 8, 9, 8, 8, 8, 6, 8, 17, 9, 10, 7, 3, 10, 5, 17, 9, 9,
            12, 10, 8, 4,
        ],
    ),
    (
        "Ohalos",
        &[8, 7, 7, 3, 7, 7, 6, 6, 16, 7, 9, 8, 6, 7, 10, 5, 5, 10],
    ),
    ("Negaim", &[6, 5, 8, 11, 5, 8, 5, 10, 3, 10, 12, 7, 12, 13]),
    ("Parah", &[4, 5, 11, 4, 9, 5, 12, 11, 9, 6, 9, 11]),
    ("Taharos", &[9, 8, 8, 13, 9, 10, 9, 9, 9, 8]),
    ("Mikvaos", &[8, 10, 4, 5, 6, 11, 7, 5, 7, 8]),
    ("Niddah", &[7, 7, 7, 7, 9, 14, 5, 4, 11, 8]),
    ("Machshirin", &[6, 11, 8, 10, 11, 8]),
    ("Zavim", &[6, 4, 3, 7, 12]),
    ("Tevul Yom", &[5, 8, 6, 7]),
    ("Yadayim", &[5, 4, 5, 8]),
    ("Uktzin", &[6, 10, 12]),
];

fn folio_table<const N: usize>(rows: &[(&'static str, u32, u32); N]) -> CycleTable {
    let segments = rows
        .iter()
        .map(|&(name, units, first_unit)| Segment::new(name, units, first_unit))
        .collect();
    CycleTable::new(segments).expect("folio table is well formed")
}

fn epoch(year: i32, month: u8, day: u8) -> HebrewDate {
    GregorianDate::new(year, month, day)
        .expect("epoch date is valid")
        .to_hebrew()
}

lazy_static! {
    /// One daf a day through the whole Bavli, from the start of the first
    /// cycle read with the expanded 21-daf Shekalim.
    pub(crate) static ref DAF_YOMI_BAVLI: DailyCycle = DailyCycle::new(
        folio_table(&BAVLI_DAFIM),
        epoch(1975, 6, 24),
        Box::new(NoSkips),
    );

    /// One Yerushalmi daf a day, pausing for Yom Kippur and Tisha B'Av.
    pub(crate) static ref DAF_YOMI_YERUSHALMI: DailyCycle = DailyCycle::new(
        CycleTable::new(
            YERUSHALMI_DAFIM
                .iter()
                .map(|&(name, units)| Segment::new(name, units, 1))
                .collect(),
        )
        .expect("folio table is well formed"),
        epoch(1980, 2, 2),
        Box::new(FastDays),
    );

    /// The Dirshu amud-a-day program through the Bavli.
    pub(crate) static ref AMUD_YOMI_BAVLI: DailyCycle = DailyCycle::new(
        folio_table(&DIRSHU_AMUDIM),
        epoch(2023, 10, 16),
        Box::new(NoSkips),
    );

    /// Two mishnayos a day through all six sedarim. Segment units are whole
    /// mishnayos; the two daily units come from doubling the day offset.
    pub(crate) static ref MISHNA_YOMI: DailyCycle = DailyCycle::new(
        CycleTable::new(
            MISHNAYOS
                .iter()
                .map(|&(name, chapters)| {
                    let units = chapters.iter().map(|&n| n as u32).sum();
                    Segment::new(name, units, 1)
                })
                .collect(),
        )
        .expect("mishna table is well formed"),
        epoch(1947, 5, 20),
        Box::new(NoSkips),
    );
}

/// The mishna at a global 0-based offset into the 4192-mishna sequence.
pub(crate) fn mishna_at(offset: u64) -> Mishna {
    let (index, mut within) = MISHNA_YOMI.table().locate(offset);
    let (tractate, chapters) = MISHNAYOS[index];
    for (chapter_index, &length) in chapters.iter().enumerate() {
        if within < length as u32 {
            return Mishna {
                tractate,
                chapter: chapter_index as u8 + 1,
                mishna: within as u8 + 1,
            };
        }
        within -= length as u32;
    }
    unreachable!("segment units equal the sum of its chapter lengths");
}
