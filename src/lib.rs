pub use cycle::{
    CyclePosition, CycleTable, DailyCycle, FastDays, InvalidTable, NoSkips, Segment, SkipRule,
};
pub use error::DateError;
pub use gregorian::GregorianDate;
pub use hebrew::{days_in_month, is_leap_year, months_of_year, HebrewDate, HebrewMonth, SHABBAT};
pub use schedule::{
    amud_yomi_bavli, daf_hashavua_bavli, daf_yomi_bavli, daf_yomi_yerushalmi, mishna_yomi,
    pirkei_avot, tehillim_monthly,
};
pub use units::{Amud, AvotReading, Daf, Mishna, MishnaRange, Side, TehillimReading};

mod cycle;
mod div_rem;
mod error;
mod gregorian;
mod hebrew;
mod schedule;
mod tables;
mod tehillim;
mod units;
mod weekly;
