//! The values the schedule facade hands back. Each schedule has its own
//! notion of a day's assignment; these types carry only what a caller needs
//! to render it.

use std::fmt;

/// A folio (two-sided leaf) of Talmud, numbered traditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Daf {
    pub tractate: &'static str,
    pub page: u32,
}

impl fmt::Display for Daf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tractate, self.page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Aleph,
    Bet,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Aleph => f.write_str("a"),
            Side::Bet => f.write_str("b"),
        }
    }
}

/// A half-page of Talmud, the Dirshu study unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amud {
    pub tractate: &'static str,
    pub page: u32,
    pub side: Side,
}

impl fmt::Display for Amud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{}", self.tractate, self.page, self.side)
    }
}

/// A single mishna, addressed tractate / chapter / mishna (all 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mishna {
    pub tractate: &'static str,
    pub chapter: u8,
    pub mishna: u8,
}

impl fmt::Display for Mishna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.tractate, self.chapter, self.mishna)
    }
}

/// An inclusive run of consecutive mishnayos. The end may lie in a different
/// tractate than the start when the day's pair straddles a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MishnaRange {
    pub start: Mishna,
    pub end: Mishna,
}

impl fmt::Display for MishnaRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.tractate == self.end.tractate {
            write!(
                f,
                "{} {}:{}-{}:{}",
                self.start.tractate,
                self.start.chapter,
                self.start.mishna,
                self.end.chapter,
                self.end.mishna
            )
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A week's Pirkei Avot assignment: one chapter, or two read together when
/// the season's Shabbatot run short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvotReading {
    Single(u8),
    Combined(u8, u8),
}

impl fmt::Display for AvotReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvotReading::Single(chapter) => write!(f, "Avos {}", chapter),
            AvotReading::Combined(first, second) => write!(f, "Avos {}-{}", first, second),
        }
    }
}

/// A day's Tehillim portion: whole psalms, or one of the two verse halves of
/// Psalm 119.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TehillimReading {
    Psalms { start: u8, end: u8 },
    PsalmVerses { psalm: u8, start_verse: u16, end_verse: u16 },
}

impl fmt::Display for TehillimReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TehillimReading::Psalms { start, end } if start == end => {
                write!(f, "Tehillim {}", start)
            }
            TehillimReading::Psalms { start, end } => write!(f, "Tehillim {}-{}", start, end),
            TehillimReading::PsalmVerses {
                psalm,
                start_verse,
                end_verse,
            } => write!(f, "Tehillim {}:{}-{}", psalm, start_verse, end_verse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_traditional_citations() {
        assert_eq!(Daf { tractate: "Berachos", page: 2 }.to_string(), "Berachos 2");
        assert_eq!(
            Amud { tractate: "Shabbos", page: 53, side: Side::Aleph }.to_string(),
            "Shabbos 53a"
        );
        assert_eq!(
            MishnaRange {
                start: Mishna { tractate: "Megillah", chapter: 3, mishna: 4 },
                end: Mishna { tractate: "Megillah", chapter: 3, mishna: 5 },
            }
            .to_string(),
            "Megillah 3:4-3:5"
        );
        assert_eq!(
            MishnaRange {
                start: Mishna { tractate: "Berachos", chapter: 9, mishna: 5 },
                end: Mishna { tractate: "Peah", chapter: 1, mishna: 1 },
            }
            .to_string(),
            "Berachos 9:5-Peah 1:1"
        );
        assert_eq!(AvotReading::Combined(3, 4).to_string(), "Avos 3-4");
        assert_eq!(
            TehillimReading::PsalmVerses { psalm: 119, start_verse: 1, end_verse: 96 }.to_string(),
            "Tehillim 119:1-96"
        );
    }
}
