//! Geocentric ephemerides of the major planets.
//!
//! Positions are obtained from the heliocentric positions of the planet and of the Earth
//! given by the planetary theory. The apparent position solves the light-time equation
//! (see [`Almanac::retarded_position`]), then applies the FK5 correction, the annual
//! aberration and the nutation in longitude.
//!
//! The Earth is accepted everywhere as a degenerate input: its geocentric position is
//! (0, 0), its distance to the Earth is 0 and the quantities that need a Sun–planet–Earth
//! triangle are `None`.

use crate::almanac::{Almanac, Instant};
use crate::almanac_errors::AlmanacError;
use crate::constants::{AstronomicalUnit, Radian, RADEG};
use crate::coordinates::EclipticPoint;
use crate::ephemeris::fk5_correction;
use crate::planet::{MagnitudeInputs, Planet, RingGeometry};
use crate::theory::{DelaunayArguments, LunarTheory, PlanetaryTheory};
use crate::time::CalendarDate;

/// Add a (Δλ, Δβ) correction, longitude reduced to [0, 2π).
fn corrected(point: &EclipticPoint, delta: &EclipticPoint) -> EclipticPoint {
    EclipticPoint::new(
        point.longitude + delta.longitude,
        point.latitude + delta.latitude,
    )
    .normalized()
}

/// Longitude U and latitude B of a direction referred to Saturn's ring plane.
fn ring_plane_coordinates(point: &EclipticPoint, inclination: Radian, node: Radian) -> (Radian, Radian) {
    let (sin_i, cos_i) = inclination.sin_cos();
    let (sin_b, cos_b) = point.latitude.sin_cos();
    let (sin_l, cos_l) = (point.longitude - node).sin_cos();

    let longitude = (sin_i * sin_b + cos_i * cos_b * sin_l).atan2(cos_b * cos_l);
    let latitude = (sin_i * cos_b * sin_l - cos_i * sin_b).asin();
    (longitude, latitude)
}

impl<P, L, D> Almanac<P, L, D>
where
    P: PlanetaryTheory,
    L: LunarTheory,
    D: DelaunayArguments,
{
    /// Compute the true geocentric position of a planet.
    ///
    /// Arguments
    /// ---------
    /// * `date`: the calendar date (UT).
    /// * `planet`: the planet; the Earth yields (0, 0).
    ///
    /// Return
    /// ------
    /// * Geometric ecliptic coordinates referred to the mean equinox of date, FK5 frame,
    ///   without light-time correction.
    pub fn planet_true_position(
        &self,
        date: &CalendarDate,
        planet: Planet,
    ) -> Result<EclipticPoint, AlmanacError> {
        if planet == Planet::Earth {
            return Ok(EclipticPoint::default());
        }

        let instant = Instant::new(date);
        let millennia = instant.millennia();
        let earth = self.heliocentric(millennia, Planet::Earth)?.to_rectangular();
        let body = self.heliocentric(millennia, planet)?.to_rectangular();

        let geometric = EclipticPoint::from_rectangular(&(body - earth));
        Ok(corrected(
            &geometric,
            &fk5_correction(&geometric, instant.centuries()),
        ))
    }

    /// Compute the apparent geocentric position of a planet.
    ///
    /// Arguments
    /// ---------
    /// * `date`: the calendar date (UT).
    /// * `planet`: the planet; the Earth yields (0, 0).
    ///
    /// Return
    /// ------
    /// * Ecliptic coordinates referred to the true equinox of date, corrected for light-time,
    ///   aberration and nutation.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::NoConvergence`] if the light-time iteration does not settle.
    pub fn planet_apparent_position(
        &self,
        date: &CalendarDate,
        planet: Planet,
    ) -> Result<EclipticPoint, AlmanacError> {
        if planet == Planet::Earth {
            return Ok(EclipticPoint::default());
        }

        let instant = Instant::new(date);
        let retarded = self.retarded_position(&instant, planet)?;
        let geometric = EclipticPoint::from_rectangular(&retarded.geocentric);
        let position = corrected(&geometric, &fk5_correction(&geometric, instant.centuries()));

        let aberration = self.aberration(date, &position)?;
        let nutation = EclipticPoint::new(self.nutation_in_longitude(date), 0.0);
        Ok(corrected(&corrected(&position, &aberration), &nutation))
    }

    /// Distance between the planet and the Sun, AU.
    ///
    /// For the Earth this is the Sun–Earth distance.
    pub fn planet_distance_to_sun(
        &self,
        date: &CalendarDate,
        planet: Planet,
    ) -> Result<AstronomicalUnit, AlmanacError> {
        Ok(self
            .heliocentric(Instant::new(date).millennia(), planet)?
            .distance)
    }

    /// Geometric distance between the planet and the Earth, AU, 0 for the Earth.
    pub fn planet_distance_to_earth(
        &self,
        date: &CalendarDate,
        planet: Planet,
    ) -> Result<AstronomicalUnit, AlmanacError> {
        if planet == Planet::Earth {
            return Ok(0.0);
        }

        let millennia = Instant::new(date).millennia();
        let earth = self.heliocentric(millennia, Planet::Earth)?.to_rectangular();
        let body = self.heliocentric(millennia, planet)?.to_rectangular();
        Ok((body - earth).norm())
    }

    /// Compute the phase angle of a planet, the angle Sun–planet–Earth.
    ///
    /// Return
    /// ------
    /// * `Some(i)` with i in [0, π], `None` for the Earth.
    ///
    /// Formula
    /// -------
    /// ```text
    /// cos i = (r² + Δ² − R²) / (2rΔ)
    /// ```
    pub fn planet_phase_angle(
        &self,
        date: &CalendarDate,
        planet: Planet,
    ) -> Result<Option<Radian>, AlmanacError> {
        if planet == Planet::Earth {
            return Ok(None);
        }

        let r = self.planet_distance_to_sun(date, planet)?;
        let delta = self.planet_distance_to_earth(date, planet)?;
        let sun = self.sun_distance_to_earth(date)?;

        let cosine = (r * r + delta * delta - sun * sun) / (2.0 * r * delta);
        Ok(Some(cosine.acos()))
    }

    /// Illuminated fraction of the planet's disk, k = (1 + cos i) / 2, `None` for the Earth.
    pub fn planet_illuminated_fraction(
        &self,
        date: &CalendarDate,
        planet: Planet,
    ) -> Result<Option<f64>, AlmanacError> {
        Ok(self
            .planet_phase_angle(date, planet)?
            .map(|phase| (1.0 + phase.cos()) / 2.0))
    }

    /// Compute the visual magnitude of a planet.
    ///
    /// Arguments
    /// ---------
    /// * `date`: the calendar date (UT).
    /// * `planet`: the planet.
    ///
    /// Return
    /// ------
    /// * `Some(V)` from the magnitude law of the planet's descriptor, `None` for the Earth.
    ///   Saturn's law also reads the ring geometry of [`Almanac::saturn_ring_geometry`].
    pub fn planet_apparent_magnitude(
        &self,
        date: &CalendarDate,
        planet: Planet,
    ) -> Result<Option<f64>, AlmanacError> {
        let Some(law) = planet.descriptor().magnitude else {
            return Ok(None);
        };
        let Some(phase_angle) = self.planet_phase_angle(date, planet)? else {
            return Ok(None);
        };

        let ring = match planet {
            Planet::Saturn => Some(self.saturn_ring_geometry(date)?),
            _ => None,
        };

        let inputs = MagnitudeInputs {
            heliocentric_distance: self.planet_distance_to_sun(date, planet)?,
            geocentric_distance: self.planet_distance_to_earth(date, planet)?,
            phase_angle: phase_angle / RADEG,
            ring,
        };
        Ok(Some(law(&inputs)))
    }

    /// Compute the geometry of Saturn's rings as seen from the Earth.
    ///
    /// Arguments
    /// ---------
    /// * `date`: the calendar date (UT).
    ///
    /// Return
    /// ------
    /// * The saturnicentric latitude B of the Earth referred to the ring plane and the
    ///   difference ΔU between the saturnicentric longitudes of the Sun and of the Earth.
    ///
    /// Method
    /// ------
    /// The ring plane has inclination `i` and node `Ω` on the ecliptic of date (degrees):
    ///
    /// ```text
    /// i = 28.075216 − 0.012998T + 0.000004T²
    /// Ω = 169.508470 + 1.394681T + 0.000412T²
    /// ```
    ///
    /// The Earth's direction is Saturn's light-time corrected geocentric position; the Sun's
    /// direction is Saturn's heliocentric position at the retarded time, corrected for the
    /// aberration of the Sun seen from Saturn.
    pub fn saturn_ring_geometry(&self, date: &CalendarDate) -> Result<RingGeometry, AlmanacError> {
        let instant = Instant::new(date);
        let t = instant.centuries();

        let retarded = self.retarded_position(&instant, Planet::Saturn)?;
        let geometric = EclipticPoint::from_rectangular(&retarded.geocentric);
        let saturn = corrected(&geometric, &fk5_correction(&geometric, t));

        let inclination = (28.075216 - 0.012998 * t + 0.000004 * t * t) * RADEG;
        let node = (169.508470 + 1.394681 * t + 0.000412 * t * t) * RADEG;
        let orbit_node = (113.6655 + 0.8771 * t) * RADEG;

        let heliocentric = retarded.heliocentric;
        let sun = EclipticPoint::new(
            heliocentric.longitude - 0.01759 * RADEG / heliocentric.distance,
            heliocentric.latitude
                - 0.000764 * RADEG * (heliocentric.longitude - orbit_node).cos()
                    / heliocentric.distance,
        );

        let (earth_longitude, earth_latitude) = ring_plane_coordinates(&saturn, inclination, node);
        let (sun_longitude, _) = ring_plane_coordinates(&sun, inclination, node);

        Ok(RingGeometry {
            earth_latitude,
            sun_earth_longitude_difference: sun_longitude - earth_longitude,
        })
    }
}

#[cfg(test)]
mod planets_test {
    use super::*;
    use crate::constants::RADSEC;
    use crate::time::Month;
    use approx::assert_abs_diff_eq;

    fn december_20() -> CalendarDate {
        CalendarDate::new(1992, Month::December, 20.0)
    }

    #[test]
    fn test_venus_1992_december_20() {
        let almanac = Almanac::new();
        let date = december_20();

        let apparent = almanac.planet_apparent_position(&date, Planet::Venus).unwrap();
        assert_abs_diff_eq!(apparent.longitude / RADEG, 313.08102, epsilon = 0.05);
        assert_abs_diff_eq!(apparent.latitude / RADEG, -2.08474, epsilon = 0.05);

        assert_abs_diff_eq!(
            almanac.planet_distance_to_sun(&date, Planet::Venus).unwrap(),
            0.724604,
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(
            almanac.planet_distance_to_earth(&date, Planet::Venus).unwrap(),
            0.910947,
            epsilon = 1e-3
        );

        let phase = almanac.planet_phase_angle(&date, Planet::Venus).unwrap().unwrap();
        assert_abs_diff_eq!(phase / RADEG, 72.96, epsilon = 0.1);

        let fraction = almanac
            .planet_illuminated_fraction(&date, Planet::Venus)
            .unwrap()
            .unwrap();
        assert_abs_diff_eq!(fraction, 0.647, epsilon = 2e-3);

        let magnitude = almanac
            .planet_apparent_magnitude(&date, Planet::Venus)
            .unwrap()
            .unwrap();
        assert_abs_diff_eq!(magnitude, -4.2166, epsilon = 5e-3);
    }

    #[test]
    fn test_true_and_apparent_stay_close() {
        let almanac = Almanac::new();
        let date = december_20();
        for planet in Planet::ALL {
            let true_position = almanac.planet_true_position(&date, planet).unwrap();
            let apparent = almanac.planet_apparent_position(&date, planet).unwrap();
            let mut difference = (apparent.longitude - true_position.longitude).abs();
            if difference > std::f64::consts::PI {
                difference = crate::constants::DPI - difference;
            }
            // light-time, aberration and nutation stay below a few arcminutes
            assert!(difference / RADSEC < 300.0, "{planet}: {difference}");
        }
    }

    #[test]
    fn test_earth_is_degenerate() {
        let almanac = Almanac::new();
        let date = december_20();

        assert_eq!(
            almanac.planet_true_position(&date, Planet::Earth).unwrap(),
            EclipticPoint::new(0.0, 0.0)
        );
        assert_eq!(
            almanac.planet_apparent_position(&date, Planet::Earth).unwrap(),
            EclipticPoint::new(0.0, 0.0)
        );
        assert_eq!(almanac.planet_distance_to_earth(&date, Planet::Earth).unwrap(), 0.0);
        assert_eq!(almanac.planet_phase_angle(&date, Planet::Earth).unwrap(), None);
        assert_eq!(almanac.planet_illuminated_fraction(&date, Planet::Earth).unwrap(), None);
        assert_eq!(almanac.planet_apparent_magnitude(&date, Planet::Earth).unwrap(), None);
    }

    #[test]
    fn test_saturn_rings_1992_december_16() {
        let almanac = Almanac::new();
        let date = CalendarDate::new(1992, Month::December, 16.0);

        let ring = almanac.saturn_ring_geometry(&date).unwrap();
        assert_abs_diff_eq!(ring.earth_latitude / RADEG, 16.442, epsilon = 0.05);
        assert_abs_diff_eq!(
            ring.sun_earth_longitude_difference / RADEG,
            4.198,
            epsilon = 0.05
        );

        let magnitude = almanac
            .planet_apparent_magnitude(&date, Planet::Saturn)
            .unwrap()
            .unwrap();
        assert_abs_diff_eq!(magnitude, 0.754, epsilon = 0.01);
    }
}
