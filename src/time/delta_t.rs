//! # ΔT: Dynamical Time minus Universal Time
//!
//! Empirical values of ΔT = TD − UT from the records of L.V. Morrison and F.R. Stephenson
//! (2004, with the 2005 addendum) and the USNO predictions, split into two eras:
//!
//! - **pre-telescope era**, 1000 BC to 1700 AD, sampled every 100 years,
//! - **telescope era**, 1700 to 2020, sampled every 10 years.
//!
//! Between samples the value is linearly interpolated on the decimal year. Outside the
//! tables the parabolic extrapolation `ΔT = −20 + 32 u²`, `u = (year − 1820) / 100`, is used.
//! All values are in seconds.

use itertools::Itertools;

use crate::time::calendar::{is_leap_year, CalendarDate};

/// One sample of the ΔT tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaTSample {
    pub year: i32,
    /// ΔT in seconds
    pub delta_t: f64,
    /// Standard uncertainty of ΔT in seconds
    pub uncertainty: f64,
}

const fn sample(year: i32, delta_t: f64, uncertainty: f64) -> DeltaTSample {
    DeltaTSample {
        year,
        delta_t,
        uncertainty,
    }
}

/// First year covered by the tables.
pub const DELTA_T_TABLE_START_YEAR: i32 = -1000;

/// Last year covered by the tables.
pub const DELTA_T_TABLE_END_YEAR: i32 = 2020;

const TELESCOPE_ERA_START_YEAR: i32 = 1700;

pub static PRE_TELESCOPE_ERA: [DeltaTSample; 28] = [
    sample(-1000, 25400.0, 640.0),
    sample(-900, 23700.0, 590.0),
    sample(-800, 22000.0, 550.0),
    sample(-700, 20400.0, 500.0),
    sample(-600, 18800.0, 460.0),
    sample(-500, 17190.0, 430.0),
    sample(-400, 15530.0, 390.0),
    sample(-300, 14080.0, 360.0),
    sample(-200, 12790.0, 330.0),
    sample(-100, 11640.0, 290.0),
    sample(0, 10580.0, 260.0),
    sample(100, 9600.0, 240.0),
    sample(200, 8640.0, 210.0),
    sample(300, 7680.0, 180.0),
    sample(400, 6700.0, 160.0),
    sample(500, 5710.0, 140.0),
    sample(600, 4740.0, 120.0),
    sample(700, 3810.0, 100.0),
    sample(800, 2960.0, 80.0),
    sample(900, 2200.0, 70.0),
    sample(1000, 1570.0, 55.0),
    sample(1100, 1090.0, 40.0),
    sample(1200, 740.0, 30.0),
    sample(1300, 490.0, 20.0),
    sample(1400, 320.0, 20.0),
    sample(1500, 200.0, 20.0),
    sample(1600, 120.0, 20.0),
    sample(1700, 9.0, 5.0),
];

pub static TELESCOPE_ERA: [DeltaTSample; 33] = [
    sample(1700, 9.0, 5.0),
    sample(1710, 10.0, 3.0),
    sample(1720, 11.0, 3.0),
    sample(1730, 11.0, 3.0),
    sample(1740, 12.0, 2.0),
    sample(1750, 13.0, 2.0),
    sample(1760, 15.0, 2.0),
    sample(1770, 16.0, 2.0),
    sample(1780, 17.0, 1.0),
    sample(1790, 17.0, 1.0),
    sample(1800, 14.0, 1.0),
    sample(1810, 13.0, 1.0),
    sample(1820, 12.0, 1.0),
    sample(1830, 8.0, 1.0),
    sample(1840, 6.0, 0.0),
    sample(1850, 7.0, 0.0),
    sample(1860, 8.0, 0.0),
    sample(1870, 2.0, 0.0),
    sample(1880, -5.0, 0.0),
    sample(1890, -6.0, 0.0),
    sample(1900, -3.0, 0.0),
    sample(1910, 10.0, 0.0),
    sample(1920, 21.0, 0.0),
    sample(1930, 24.0, 0.0),
    sample(1940, 24.0, 0.0),
    sample(1950, 29.0, 0.0),
    sample(1960, 33.0, 0.0),
    sample(1970, 40.0, 0.0),
    sample(1980, 51.0, 0.0),
    sample(1990, 57.0, 0.0),
    sample(2000, 65.0, 0.0),
    sample(2010, 66.0, 0.0),
    sample(2020, 71.0, 4.0),
];

/// Decimal year of a date, `year + day_of_year / days_in_year`.
pub fn decimal_year(date: &CalendarDate) -> f64 {
    let days_in_year = if is_leap_year(date.year) { 366.0 } else { 365.0 };
    f64::from(date.year) + f64::from(date.day_of_year()) / days_in_year
}

/// Pair of samples bracketing `year`, the last pair of the table past its end.
fn bracket(table: &[DeltaTSample], year: i32) -> Option<(&DeltaTSample, &DeltaTSample)> {
    table
        .iter()
        .tuple_windows()
        .find(|(lower, upper)| lower.year <= year && year < upper.year)
        .or_else(|| table.iter().tuple_windows().last())
}

fn table_for(year: i32) -> Option<&'static [DeltaTSample]> {
    if !(DELTA_T_TABLE_START_YEAR..=DELTA_T_TABLE_END_YEAR).contains(&year) {
        None
    } else if year < TELESCOPE_ERA_START_YEAR {
        Some(&PRE_TELESCOPE_ERA)
    } else {
        Some(&TELESCOPE_ERA)
    }
}

fn linear_interpolate(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    y0 + (x - x0) * (y1 - y0) / (x1 - x0)
}

fn interpolate_column(
    date: &CalendarDate,
    column: impl Fn(&DeltaTSample) -> f64,
) -> Option<f64> {
    let table = table_for(date.year)?;
    let (lower, upper) = bracket(table, date.year)?;
    Some(linear_interpolate(
        decimal_year(date),
        f64::from(lower.year),
        f64::from(upper.year),
        column(lower),
        column(upper),
    ))
}

/// Parabolic ΔT extrapolation anchored at 1820, in seconds.
fn extrapolated_delta_t(year: i32) -> f64 {
    let u = (f64::from(year) - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Compute ΔT = TD − UT for a calendar date.
///
/// Arguments
/// ---------
/// * `date`: the calendar date (Universal Time).
///
/// Return
/// ------
/// * ΔT in seconds. Inside [-1000, 2020] the value is interpolated in the era tables,
///   outside it follows the parabolic extrapolation anchored at 1820.
pub fn dynamical_time_difference(date: &CalendarDate) -> f64 {
    interpolate_column(date, |s| s.delta_t).unwrap_or_else(|| extrapolated_delta_t(date.year))
}

/// Interpolated standard uncertainty of ΔT in seconds, `None` outside the tables.
pub fn delta_t_uncertainty(date: &CalendarDate) -> Option<f64> {
    interpolate_column(date, |s| s.uncertainty)
}
