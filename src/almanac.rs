//! # Almanac: the reduction façade
//!
//! [`Almanac`] wires together the three analytic theories consumed by the library
//! (planetary, lunar, Delaunay arguments) and the settings of the iterative solvers. The
//! ephemeris pipelines of [`crate::ephemeris`] and the observer-dependent quantities of
//! [`crate::geo_observer`] are methods on it.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use almanac::almanac::Almanac;
//! use almanac::planet::Planet;
//! use almanac::time::{CalendarDate, Month};
//!
//! let almanac = Almanac::new();
//! let date = CalendarDate::new(1992, Month::December, 20.0);
//!
//! let venus = almanac.planet_apparent_position(&date, Planet::Venus).unwrap();
//! let sun = almanac.sun_apparent_position(&date).unwrap();
//! ```
//!
//! Custom theories are injected with [`Almanac::with_theories`] and the solver budget is
//! tuned with [`Almanac::with_settings`].

use log::{debug, warn};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::almanac_errors::AlmanacError;
use crate::constants::{
    Hour, Radian, DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_MILLENNIUM, J2000, LIGHT_TIME_PER_AU,
    RADH,
};
use crate::coordinates::{principal_angle, EclipticPoint, SphericalPoint};
use crate::earth_orientation::{annual_aberration, nutation, obliquity_of_ecliptic};
use crate::orbital::{orbital_elements, ReferenceFrame};
use crate::planet::Planet;
use crate::theory::{
    DelaunayArguments, Iau1980Arguments, LunarTheory, MeanElementTheory, PlanetaryTheory,
    TruncatedLunarTheory,
};
use crate::time::{greenwich_mean_sidereal_time, CalendarDate};

/// Convergence settings shared by the iterative solvers (light-time, equinoxes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Convergence threshold, days
    pub precision: f64,
    /// Iteration budget before [`AlmanacError::NoConvergence`] is reported
    pub max_iterations: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            precision: 1e-7,
            max_iterations: 50,
        }
    }
}

/// Dynamical time arguments of a calendar date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Instant {
    /// Julian ephemeris date
    pub jde: f64,
}

impl Instant {
    pub fn new(date: &CalendarDate) -> Self {
        Instant {
            jde: date.julian_ephemeris_date(),
        }
    }

    /// Julian centuries of JDE since J2000.
    pub fn centuries(&self) -> f64 {
        (self.jde - J2000) / DAYS_PER_JULIAN_CENTURY
    }

    /// Julian millennia of JDE since J2000.
    pub fn millennia(&self) -> f64 {
        (self.jde - J2000) / DAYS_PER_JULIAN_MILLENNIUM
    }
}

/// Outcome of the light-time iteration for one planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RetardedPosition {
    /// Heliocentric position of the planet at `t − τ`
    pub heliocentric: SphericalPoint,
    /// Geocentric rectangular position, planet at `t − τ` minus Earth at `t` (AU)
    pub geocentric: Vector3<f64>,
    /// Light-time τ in days
    pub light_time: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Almanac<P = MeanElementTheory, L = TruncatedLunarTheory, D = Iau1980Arguments> {
    planetary: P,
    lunar: L,
    delaunay: D,
    settings: SolverSettings,
}

impl Almanac {
    /// Almanac backed by the built-in theories.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P, L, D> Almanac<P, L, D> {
    /// Build an almanac on custom theories.
    ///
    /// Arguments
    /// ---------
    /// * `planetary`: heliocentric planetary positions.
    /// * `lunar`: geocentric lunar positions.
    /// * `delaunay`: Delaunay arguments for the nutation series.
    pub fn with_theories(planetary: P, lunar: L, delaunay: D) -> Self {
        Almanac {
            planetary,
            lunar,
            delaunay,
            settings: SolverSettings::default(),
        }
    }

    /// Replace the solver settings.
    pub fn with_settings(mut self, settings: SolverSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    pub fn planetary_theory(&self) -> &P {
        &self.planetary
    }

    pub fn lunar_theory(&self) -> &L {
        &self.lunar
    }

    pub fn delaunay_arguments(&self) -> &D {
        &self.delaunay
    }
}

impl<P, L, D> Almanac<P, L, D>
where
    P: PlanetaryTheory,
    L: LunarTheory,
    D: DelaunayArguments,
{
    /// Nutation in longitude and in obliquity (Δψ, Δε), radians.
    pub fn nutation(&self, date: &CalendarDate) -> (Radian, Radian) {
        nutation(date, &self.delaunay)
    }

    /// Nutation in longitude Δψ, radians.
    pub fn nutation_in_longitude(&self, date: &CalendarDate) -> Radian {
        self.nutation(date).0
    }

    /// Nutation in obliquity Δε, radians.
    pub fn nutation_in_obliquity(&self, date: &CalendarDate) -> Radian {
        self.nutation(date).1
    }

    /// True obliquity of the ecliptic ε + Δε, radians.
    pub fn true_obliquity(&self, date: &CalendarDate) -> Radian {
        obliquity_of_ecliptic(date) + self.nutation_in_obliquity(date)
    }

    /// Equation of the equinoxes Δψ cos ε, radians, ε being the true obliquity.
    pub fn equation_of_the_equinoxes(&self, date: &CalendarDate) -> Radian {
        let (dpsi, deps) = self.nutation(date);
        dpsi * (obliquity_of_ecliptic(date) + deps).cos()
    }

    /// Compute the apparent sidereal time at Greenwich.
    ///
    /// Return
    /// ------
    /// * The mean sidereal time corrected by the equation of the equinoxes, in hours [0, 24).
    pub fn apparent_sidereal_time(&self, date: &CalendarDate) -> Hour {
        let angle = greenwich_mean_sidereal_time(date) * RADH + self.equation_of_the_equinoxes(date);
        principal_angle(angle) / RADH
    }

    /// Compute the annual aberration displacement of an ecliptic position.
    ///
    /// Arguments
    /// ---------
    /// * `date`: the calendar date.
    /// * `point`: true geocentric ecliptic position of the body.
    ///
    /// Return
    /// ------
    /// * The (Δλ, Δβ) correction in radians, from the Sun's true longitude and the Earth's
    ///   of-date eccentricity and perihelion longitude.
    ///
    /// See also
    /// ------------
    /// * [`annual_aberration`] – the underlying formula.
    pub fn aberration(
        &self,
        date: &CalendarDate,
        point: &EclipticPoint,
    ) -> Result<EclipticPoint, AlmanacError> {
        let sun = self.sun_true_position(date)?;
        let earth = orbital_elements(date, Planet::Earth, ReferenceFrame::OfDate);
        Ok(annual_aberration(
            point,
            sun.longitude,
            earth.eccentricity,
            earth.perihelion_longitude,
        ))
    }

    pub(crate) fn heliocentric(
        &self,
        millennia: f64,
        planet: Planet,
    ) -> Result<SphericalPoint, AlmanacError> {
        self.planetary.heliocentric_position(millennia, planet)
    }

    /// Moon position from the lunar theory, arcseconds and kilometers.
    pub(crate) fn lunar_position(&self, instant: &Instant) -> SphericalPoint {
        self.lunar.geocentric_position(instant.centuries())
    }

    /// Solve the light-time equation τ = 0.0057755183 Δ for a planet.
    ///
    /// The Earth is held at `t` while the planet is re-evaluated at `t − τ` until two
    /// consecutive values of τ differ by at most the configured precision.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::NoConvergence`] if the iteration budget is exhausted.
    pub(crate) fn retarded_position(
        &self,
        instant: &Instant,
        planet: Planet,
    ) -> Result<RetardedPosition, AlmanacError> {
        let millennia = instant.millennia();
        let earth = self.heliocentric(millennia, Planet::Earth)?.to_rectangular();

        let mut light_time = 0.0;
        for iteration in 1..=self.settings.max_iterations {
            let heliocentric =
                self.heliocentric(millennia - light_time / DAYS_PER_JULIAN_MILLENNIUM, planet)?;
            let geocentric = heliocentric.to_rectangular() - earth;
            let next = LIGHT_TIME_PER_AU * geocentric.norm();

            debug!(
                "light-time {planet} iteration {iteration}: tau = {next:.10} d, delta = {:.3e} d",
                (next - light_time).abs()
            );

            if (next - light_time).abs() <= self.settings.precision {
                return Ok(RetardedPosition {
                    heliocentric,
                    geocentric,
                    light_time: next,
                });
            }
            light_time = next;
        }

        warn!(
            "light-time solver for {planet} did not converge in {} iterations",
            self.settings.max_iterations
        );
        Err(AlmanacError::NoConvergence {
            solver: "light-time",
            iterations: self.settings.max_iterations,
        })
    }
}
