//! # Civil calendar dates and Julian dates
//!
//! This module defines [`CalendarDate`], the value type used throughout the crate to
//! represent an instant, together with the conversions between civil dates and the
//! continuous Julian date scale.
//!
//! ## Calendar conventions
//!
//! - The day carries a fractional part: `day = 4.81` is 4th of the month at 19h26m24s.
//! - Years before the Christian era use astronomical numbering: year `0` is 1 BC,
//!   year `-1` is 2 BC, and so on.
//! - Dates up to 4 October 1582 follow the Julian calendar, dates from 15 October 1582 the
//!   Gregorian calendar. The ten days in between do not exist.
//! - Julian date 0 is 1 January 4713 BC (year `-4712`) at noon, so the library rejects
//!   anything earlier through [`CalendarDate::is_valid`].
//!
//! ## Interoperability
//!
//! Dates convert to and from [`hifitime::Epoch`] in the UTC scale through their Julian
//! date, see [`CalendarDate::to_epoch`] and [`CalendarDate::from_epoch`].
//!
//! ## See also
//! ------------
//! * [`crate::time::delta_t`] – Dynamical Time correction used by [`CalendarDate::julian_ephemeris_date`].
//! * [`crate::time::sidereal`] – Greenwich sidereal time.

use std::cmp::Ordering;
use std::fmt;

use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::almanac_errors::AlmanacError;
use crate::constants::{JulianDate, SECONDS_PER_DAY};
use crate::time::delta_t::dynamical_time_difference;

/// Julian day number of 15 October 1582, the first day of the Gregorian calendar.
const GREGORIAN_START_JULIAN_DAY: f64 = 2_299_161.0;

/// Months of the year, numbered from 1 (January) to 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Month number in `1..=12`.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Number of days of the month in the given year, leap years included.
    pub fn days_in(self, year: i32) -> u8 {
        match self {
            Month::January
            | Month::March
            | Month::May
            | Month::July
            | Month::August
            | Month::October
            | Month::December => 31,
            Month::April | Month::June | Month::September | Month::November => 30,
            Month::February => {
                if is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = AlmanacError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=12 => Ok(Month::ALL[usize::from(value - 1)]),
            _ => Err(AlmanacError::InvalidMonth(value)),
        }
    }
}

/// Days of the week, numbered from 1 (Monday) to 7 (Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday = 1,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Weekday {
    type Error = AlmanacError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=7 => Ok(Weekday::ALL[usize::from(value - 1)]),
            _ => Err(AlmanacError::InvalidWeekday(value)),
        }
    }
}

/// Leap-year rule of a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Calendar {
    /// Every fourth year is a leap year.
    Julian,
    /// Every fourth year, except centuries not divisible by 400.
    Gregorian,
}

impl Calendar {
    /// Calendar in force for the given year. The switch happens in 1582.
    pub fn for_year(year: i32) -> Self {
        if year >= 1582 {
            Calendar::Gregorian
        } else {
            Calendar::Julian
        }
    }

    pub fn is_leap_year(self, year: i32) -> bool {
        match self {
            Calendar::Julian => year.rem_euclid(4) == 0,
            Calendar::Gregorian => {
                (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
            }
        }
    }
}

/// Check whether `year` is a leap year under the calendar in force that year.
///
/// The Gregorian rule applies from 1582 on, the Julian rule before.
pub fn is_leap_year(year: i32) -> bool {
    Calendar::for_year(year).is_leap_year(year)
}

/// A civil calendar date with a fractional day.
///
/// Dates compare chronologically: by year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: Month,
    /// Day of the month, fractional part is the time of day (`hour / 24`).
    pub day: f64,
}

/// First representable instant: 1.5 January 4713 BC (Julian date 0).
const JULIAN_START: CalendarDate = CalendarDate {
    year: -4712,
    month: Month::January,
    day: 1.5,
};

/// Last day of the Julian calendar.
const JULIAN_END: CalendarDate = CalendarDate {
    year: 1582,
    month: Month::October,
    day: 4.0,
};

/// First day of the Gregorian calendar.
const GREGORIAN_START: CalendarDate = CalendarDate {
    year: 1582,
    month: Month::October,
    day: 15.0,
};

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.year.cmp(&other.year) {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        match self.month.cmp(&other.month) {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        self.day.partial_cmp(&other.day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:09.6}", self.year, self.month.number(), self.day)
    }
}

impl CalendarDate {
    pub fn new(year: i32, month: Month, day: f64) -> Self {
        CalendarDate { year, month, day }
    }

    /// Checked constructor, rejecting dates for which [`CalendarDate::is_valid`] fails.
    pub fn try_new(year: i32, month: Month, day: f64) -> Result<Self, AlmanacError> {
        let date = CalendarDate::new(year, month, day);
        if date.is_valid() {
            Ok(date)
        } else {
            Err(AlmanacError::InvalidDate(date))
        }
    }

    /// Check whether the date can be used with the routines of this crate.
    ///
    /// A date is valid when
    /// - its day lies in `[1, n + 1)` where `n` is the number of days of the month,
    /// - it does not precede Julian date 0 (1.5 January 4713 BC),
    /// - it is not one of the days dropped by the Gregorian reform (5 to 14 October 1582).
    pub fn is_valid(&self) -> bool {
        let days = f64::from(self.month.days_in(self.year));
        if !(self.day >= 1.0 && self.day < days + 1.0) {
            return false;
        }
        if *self < JULIAN_START {
            return false;
        }
        let in_reform_gap = self.year == JULIAN_END.year
            && self.month == JULIAN_END.month
            && self.day >= JULIAN_END.day + 1.0
            && self.day < GREGORIAN_START.day;
        !in_reform_gap
    }

    /// Julian date of the calendar date (Universal Time).
    ///
    /// January and February are counted as months 13 and 14 of the previous year; the
    /// Gregorian century correction is applied from 15 October 1582 on.
    ///
    /// Reference: J. Meeus, *Astronomical Algorithms*, chapter 7.
    pub fn julian_date(&self) -> JulianDate {
        let (year, month) = match self.month {
            Month::January | Month::February => (self.year - 1, i32::from(self.month.number()) + 12),
            _ => (self.year, i32::from(self.month.number())),
        };

        let b = if *self >= GREGORIAN_START {
            let a = year.div_euclid(100);
            2 - a + a.div_euclid(4)
        } else {
            0
        };

        (365.25 * f64::from(year + 4716)).floor() + (30.6001 * f64::from(month + 1)).floor() + self.day
            + f64::from(b)
            - 1524.5
    }

    /// Julian ephemeris date, i.e. the Julian date in Dynamical Time.
    pub fn julian_ephemeris_date(&self) -> JulianDate {
        self.julian_date() + dynamical_time_difference(self) / SECONDS_PER_DAY
    }

    /// Inverse of [`CalendarDate::julian_date`].
    pub fn from_julian_date(julian_date: JulianDate) -> Self {
        let shifted = julian_date + 0.5;
        let z = shifted.floor();
        let fraction = shifted - z;

        let a = if z < GREGORIAN_START_JULIAN_DAY {
            z
        } else {
            let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
            z + 1.0 + alpha - (alpha / 4.0).floor()
        };

        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day = b - d - (30.6001 * e).floor() + fraction;
        let month_number = (if e < 14.0 { e - 1.0 } else { e - 13.0 }) as u8;
        let month = Month::ALL[usize::from(month_number.clamp(1, 12) - 1)];
        let year = if month_number > 2 {
            c as i32 - 4716
        } else {
            c as i32 - 4715
        };

        CalendarDate { year, month, day }
    }

    /// Day of the week of the date.
    pub fn day_of_week(&self) -> Weekday {
        let index = (self.julian_date() + 0.5).floor().rem_euclid(7.0) as usize;
        Weekday::ALL[index]
    }

    /// Ordinal day of the year, 1 for 1 January.
    pub fn day_of_year(&self) -> u16 {
        let k = if is_leap_year(self.year) { 1 } else { 2 };
        let month = i32::from(self.month.number());
        let ordinal = (275 * month) / 9 - k * ((month + 9) / 12) + self.day.trunc() as i32 - 30;
        ordinal as u16
    }

    /// Date truncated to 0h of the same day.
    pub fn at_midnight(&self) -> Self {
        CalendarDate {
            day: self.day.trunc(),
            ..*self
        }
    }

    /// Convert to a [`hifitime::Epoch`] in the UTC scale.
    pub fn to_epoch(&self) -> Epoch {
        Epoch::from_jde_utc(self.julian_date())
    }

    /// Build a date from a [`hifitime::Epoch`], read in the UTC scale.
    pub fn from_epoch(epoch: Epoch) -> Self {
        CalendarDate::from_julian_date(epoch.to_jde_utc_days())
    }
}

impl From<Epoch> for CalendarDate {
    fn from(epoch: Epoch) -> Self {
        CalendarDate::from_epoch(epoch)
    }
}

/// Calendar date of a Julian date, see [`CalendarDate::from_julian_date`].
pub fn calendar_date(julian_date: JulianDate) -> CalendarDate {
    CalendarDate::from_julian_date(julian_date)
}
