//! # Constants and type definitions for Almanac
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `almanac` library.
//!
//! ## Overview
//!
//! - Time scale anchors (J2000, Julian century and millennium)
//! - Unit conversions (degrees ↔ radians, arcseconds ↔ radians, hours ↔ radians)
//! - Earth ellipsoid and aberration constants used by the reduction formulas
//! - Core type aliases used across the crate
//!
//! The Earth ellipsoid values are those of the IAU 1976 system (a = 6378.14 km), which
//! the classical reduction formulas in this crate are calibrated against.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian date of the standard epoch J2000.0 (2000-01-01 12:00:00 TT)
pub const J2000: f64 = 2_451_545.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Number of days in a Julian millennium
pub const DAYS_PER_JULIAN_MILLENNIUM: f64 = 365_250.0;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Hours → radians
pub const RADH: f64 = DPI / 24.0;

/// Number of arcseconds in a full circle
pub const ARCSEC_PER_CIRCLE: f64 = 1_296_000.0;

/// Astronomical Unit in kilometers
pub const AU: f64 = 149_597_871.0;

/// Earth equatorial radius in kilometers (IAU 1976)
pub const EARTH_EQUATORIAL_RADIUS: Kilometer = 6378.14;

/// Earth polar radius in kilometers (IAU 1976)
pub const EARTH_POLAR_RADIUS: Kilometer = 6356.755;

/// Earth flattening
pub const EARTH_FLATTENING: f64 = 0.00335281;

/// Constant of annual aberration at J2000, in arcseconds
pub const ABERRATION_CONSTANT: ArcSec = 20.49552;

/// Light-time for one astronomical unit, in days
pub const LIGHT_TIME_PER_AU: f64 = 0.0057755183;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Time of day in hours
pub type Hour = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Julian date (days)
pub type JulianDate = f64;
