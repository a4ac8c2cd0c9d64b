//! Geocentric ephemeris of the Sun.
//!
//! The Sun's geometric position is the Earth's heliocentric position seen from the other side:
//! `☉ = L + 180°`, `β = −B`, then moved to the FK5 frame. The apparent position adds the
//! nutation in longitude and the aberration `−20.49552″ / R`.
//!
//! The dates of equinoxes and solstices are found by the fixed-point iteration
//!
//! ```text
//! JDE ← JDE + 58 sin(k·90° − λ☉)
//! ```
//!
//! started on the 21st of the month, which stops once the correction drops below the
//! solver precision.

use std::f64::consts::PI;

use log::{debug, warn};

use crate::almanac::{Almanac, Instant};
use crate::almanac_errors::AlmanacError;
use crate::constants::{
    AstronomicalUnit, Hour, ABERRATION_CONSTANT, DPI, RADSEC, SECONDS_PER_DAY,
};
use crate::coordinates::{ecliptic_to_equatorial, principal_angle, EclipticPoint};
use crate::ephemeris::{fk5_correction, Equinox, Season, Solstice};
use crate::orbital::{orbital_elements, ReferenceFrame};
use crate::planet::Planet;
use crate::theory::{DelaunayArguments, LunarTheory, PlanetaryTheory};
use crate::time::{calendar_date, dynamical_time_difference, CalendarDate};

impl<P, L, D> Almanac<P, L, D>
where
    P: PlanetaryTheory,
    L: LunarTheory,
    D: DelaunayArguments,
{
    /// Geometric position of the Sun in the FK5 frame and its distance in AU.
    fn sun_geometric(&self, instant: &Instant) -> Result<(EclipticPoint, AstronomicalUnit), AlmanacError> {
        let earth = self.heliocentric(instant.millennia(), Planet::Earth)?;
        let geocentric = EclipticPoint::new(earth.longitude + PI, -earth.latitude).normalized();
        let delta = fk5_correction(&geocentric, instant.centuries());

        let position = EclipticPoint::new(
            geocentric.longitude + delta.longitude,
            geocentric.latitude + delta.latitude,
        )
        .normalized();
        Ok((position, earth.distance))
    }

    /// Compute the true geometric position of the Sun.
    ///
    /// Arguments
    /// ---------
    /// * `date`: the calendar date (UT).
    ///
    /// Return
    /// ------
    /// * Ecliptic coordinates referred to the mean equinox of date, FK5 frame, longitude in [0, 2π).
    pub fn sun_true_position(&self, date: &CalendarDate) -> Result<EclipticPoint, AlmanacError> {
        Ok(self.sun_geometric(&Instant::new(date))?.0)
    }

    /// Compute the apparent position of the Sun.
    ///
    /// Arguments
    /// ---------
    /// * `date`: the calendar date (UT).
    ///
    /// Return
    /// ------
    /// * Ecliptic coordinates referred to the true equinox of date: the true position plus
    ///   the nutation in longitude and the aberration `−κ / R`.
    pub fn sun_apparent_position(&self, date: &CalendarDate) -> Result<EclipticPoint, AlmanacError> {
        let (position, distance) = self.sun_geometric(&Instant::new(date))?;
        let aberration = -ABERRATION_CONSTANT * RADSEC / distance;

        Ok(EclipticPoint::new(
            position.longitude + self.nutation_in_longitude(date) + aberration,
            position.latitude,
        )
        .normalized())
    }

    /// Distance between the Sun and the Earth, AU.
    pub fn sun_distance_to_earth(&self, date: &CalendarDate) -> Result<AstronomicalUnit, AlmanacError> {
        let instant = Instant::new(date);
        Ok(self.heliocentric(instant.millennia(), Planet::Earth)?.distance)
    }

    /// Compute the instant a season starts in a given year.
    ///
    /// Arguments
    /// ---------
    /// * `year`: the civil year.
    /// * `season`: the equinox or solstice looked for.
    ///
    /// Return
    /// ------
    /// * The calendar date (UT) at which the Sun's apparent longitude reaches k·90°.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::NoConvergence`] if the correction is still above the precision after
    ///   the configured number of iterations.
    pub fn season(&self, year: i32, season: Season) -> Result<CalendarDate, AlmanacError> {
        let target = f64::from(season.index()) * PI / 2.0;
        let mut date = CalendarDate::new(year, season.month(), 21.0);
        let mut jde = date.julian_ephemeris_date();

        for iteration in 1..=self.settings().max_iterations {
            let longitude = self.sun_apparent_position(&date)?.longitude;
            let correction = 58.0 * (target - longitude).sin();
            jde += correction;
            date = calendar_date(jde - dynamical_time_difference(&date) / SECONDS_PER_DAY);

            debug!("{season:?} {year} iteration {iteration}: correction = {correction:.3e} d, date = {date}");

            if correction.abs() < self.settings().precision {
                return Ok(date);
            }
        }

        warn!(
            "equinox/solstice solver for {season:?} {year} did not converge in {} iterations",
            self.settings().max_iterations
        );
        Err(AlmanacError::NoConvergence {
            solver: "equinox/solstice",
            iterations: self.settings().max_iterations,
        })
    }

    /// Date of an equinox, see [`Almanac::season`].
    pub fn equinox(&self, year: i32, equinox: Equinox) -> Result<CalendarDate, AlmanacError> {
        self.season(year, equinox.into())
    }

    /// Date of a solstice, see [`Almanac::season`].
    pub fn solstice(&self, year: i32, solstice: Solstice) -> Result<CalendarDate, AlmanacError> {
        self.season(year, solstice.into())
    }

    /// Compute the equation of time, apparent minus mean solar time.
    ///
    /// Arguments
    /// ---------
    /// * `date`: the calendar date (UT).
    ///
    /// Return
    /// ------
    /// * E in hours, in [−12, 12), positive when the true Sun is ahead of the mean Sun.
    ///
    /// Formula
    /// -------
    /// ```text
    /// E = L₀ − α + Δψ cos ε
    /// ```
    /// with L₀ the Sun's mean longitude, α its apparent right ascension and ε the true
    /// obliquity.
    pub fn equation_of_time(&self, date: &CalendarDate) -> Result<Hour, AlmanacError> {
        let mean_longitude =
            orbital_elements(date, Planet::Earth, ReferenceFrame::OfDate).mean_longitude + PI;
        let sun = self.sun_apparent_position(date)?;
        let equatorial = ecliptic_to_equatorial(&sun, self.true_obliquity(date));

        let angle = principal_angle(
            mean_longitude - equatorial.right_ascension + self.equation_of_the_equinoxes(date) + PI,
        ) - PI;
        Ok(angle * 24.0 / DPI)
    }
}

#[cfg(test)]
mod sun_test {
    use super::*;
    use crate::almanac::SolverSettings;
    use crate::constants::RADEG;
    use crate::time::Month;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sun_1992_october_13() {
        let almanac = Almanac::new();
        let date = CalendarDate::new(1992, Month::October, 13.0);

        let apparent = almanac.sun_apparent_position(&date).unwrap();
        assert_abs_diff_eq!(apparent.longitude / RADEG, 199.90606, epsilon = 0.02);

        let distance = almanac.sun_distance_to_earth(&date).unwrap();
        assert_abs_diff_eq!(distance, 0.99760775, epsilon = 3e-4);
    }

    #[test]
    fn test_true_and_apparent_differ_by_nutation_and_aberration() {
        let almanac = Almanac::new();
        let date = CalendarDate::new(2005, Month::July, 1.0);
        let true_position = almanac.sun_true_position(&date).unwrap();
        let apparent = almanac.sun_apparent_position(&date).unwrap();

        let difference = (apparent.longitude - true_position.longitude) / RADSEC;
        assert!(difference.abs() < 45.0);
        assert_eq!(apparent.latitude, true_position.latitude);
    }

    #[test]
    fn test_equation_of_time_1992_october_13() {
        // 13m42.7s
        let date = CalendarDate::new(1992, Month::October, 13.0);
        let eot = Almanac::new().equation_of_time(&date).unwrap();
        assert_abs_diff_eq!(eot, 0.228528, epsilon = 1e-3);
    }

    #[test]
    fn test_march_equinox_2000() {
        let date = Almanac::new().equinox(2000, Equinox::March).unwrap();
        assert_eq!(date.year, 2000);
        assert_eq!(date.month, Month::March);
        assert_abs_diff_eq!(date.day, 20.3130, epsilon = 0.02);
    }

    #[test]
    fn test_june_solstice_1962() {
        let date = Almanac::new().solstice(1962, Solstice::June).unwrap();
        assert_eq!(date.month, Month::June);
        assert_abs_diff_eq!(date.day, 21.8898, epsilon = 0.02);
    }

    #[test]
    fn test_season_budget_exhausted() {
        let almanac = Almanac::new().with_settings(SolverSettings {
            precision: 1e-7,
            max_iterations: 1,
        });
        assert_eq!(
            almanac.season(2000, Season::SeptemberEquinox),
            Err(AlmanacError::NoConvergence {
                solver: "equinox/solstice",
                iterations: 1
            })
        );
    }
}
