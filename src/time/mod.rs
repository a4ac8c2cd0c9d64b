//! # Time system
//!
//! Civil calendar, Julian dates, the ΔT model, sidereal time and the date of Easter.
//!
//! ## Overview
//!
//! - [`calendar`] – [`CalendarDate`], leap-year rules, Julian date conversions, week and year days
//! - [`delta_t`] – Dynamical Time minus Universal Time from the Morrison & Stephenson tables
//! - [`sidereal`] – Greenwich mean sidereal time
//! - [`easter`] – Gregorian and Julian computus
//!
//! All instants are [`CalendarDate`] values in Universal Time; the Dynamical Time used by
//! the ephemerides is obtained with [`CalendarDate::julian_ephemeris_date`].

pub mod calendar;
pub mod delta_t;
pub mod easter;
pub mod sidereal;

pub use calendar::{calendar_date, is_leap_year, Calendar, CalendarDate, Month, Weekday};
pub use delta_t::{delta_t_uncertainty, dynamical_time_difference};
pub use easter::date_of_easter;
pub use sidereal::greenwich_mean_sidereal_time;
