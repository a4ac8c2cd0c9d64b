//! # Almanac
//!
//! Positions and observing circumstances of the Sun, the Moon and the major planets from
//! classical analytic reduction theory.
//!
//! The entry point is [`almanac::Almanac`], which holds the planetary, lunar and nutation
//! theories together with the settings of the iterative solvers. The lower layers are usable
//! on their own:
//!
//! - [`time`] – calendar, Julian dates, ΔT, sidereal time, Easter,
//! - [`coordinates`] – geographic, horizontal, equatorial and ecliptic coordinates,
//! - [`earth_orientation`] – obliquity, precession, nutation, aberration, geodesic distance,
//! - [`orbital`] – VSOP82 mean orbital elements,
//! - [`theory`] – the theory traits and their built-in implementations,
//! - [`ephemeris`] – Sun, Moon and planet pipelines,
//! - [`geo_observer`] – parallactic angle, rising, transit, setting, refraction, parallax.

pub mod almanac;
pub mod almanac_errors;
pub mod constants;
pub mod coordinates;
pub mod earth_orientation;
pub mod ephemeris;
pub mod geo_observer;
pub mod orbital;
pub mod planet;
pub mod theory;
pub mod time;

pub use almanac::{Almanac, SolverSettings};
pub use almanac_errors::AlmanacError;
pub use planet::Planet;
