//! Geocentric ephemeris of the Moon.
//!
//! The lunar theory is read in arcseconds and kilometers and converted here. Phase and bright
//! limb are computed from the apparent positions of the Moon and of the Sun.

use crate::almanac::{Almanac, Instant};
use crate::almanac_errors::AlmanacError;
use crate::constants::{AstronomicalUnit, Kilometer, Radian, AU, EARTH_EQUATORIAL_RADIUS, RADSEC};
use crate::coordinates::{ecliptic_to_equatorial, principal_angle, EclipticPoint};
use crate::theory::{DelaunayArguments, LunarTheory, PlanetaryTheory};
use crate::time::CalendarDate;

impl<P, L, D> Almanac<P, L, D>
where
    P: PlanetaryTheory,
    L: LunarTheory,
    D: DelaunayArguments,
{
    /// True geocentric position of the Moon, mean equinox of date.
    pub fn moon_true_position(&self, date: &CalendarDate) -> EclipticPoint {
        let position = self.lunar_position(&Instant::new(date));
        EclipticPoint::new(position.longitude * RADSEC, position.latitude * RADSEC).normalized()
    }

    /// Apparent geocentric position of the Moon: the true position plus the nutation in
    /// longitude.
    pub fn moon_apparent_position(&self, date: &CalendarDate) -> EclipticPoint {
        let position = self.moon_true_position(date);
        EclipticPoint::new(
            position.longitude + self.nutation_in_longitude(date),
            position.latitude,
        )
        .normalized()
    }

    /// Distance between the centers of the Earth and the Moon, kilometers.
    pub fn moon_distance_to_earth_km(&self, date: &CalendarDate) -> Kilometer {
        self.lunar_position(&Instant::new(date)).distance
    }

    /// Distance between the centers of the Earth and the Moon, AU.
    pub fn moon_distance_to_earth(&self, date: &CalendarDate) -> AstronomicalUnit {
        self.moon_distance_to_earth_km(date) / AU
    }

    /// Compute the phase angle of the Moon, the angle Sun–Moon–Earth.
    ///
    /// Arguments
    /// ---------
    /// * `date`: the calendar date (UT).
    ///
    /// Return
    /// ------
    /// * The phase angle i in [0, π]: 0 at full Moon, π at new Moon.
    ///
    /// Formula
    /// -------
    /// ```text
    /// cos ψ = cos β cos(λ − λ☉)
    /// tan i = R sin ψ / (Δ − R cos ψ)
    /// ```
    /// with ψ the geocentric elongation, R and Δ the distances of the Sun and of the Moon.
    pub fn moon_phase_angle(&self, date: &CalendarDate) -> Result<Radian, AlmanacError> {
        let moon = self.moon_apparent_position(date);
        let sun = self.sun_apparent_position(date)?;
        let elongation = (moon.latitude.cos() * (moon.longitude - sun.longitude).cos()).acos();

        let sun_distance = self.sun_distance_to_earth(date)?;
        let moon_distance = self.moon_distance_to_earth(date);

        Ok((sun_distance * elongation.sin())
            .atan2(moon_distance - sun_distance * elongation.cos()))
    }

    /// Illuminated fraction of the Moon's disk, k = (1 + cos i) / 2.
    pub fn moon_illuminated_fraction(&self, date: &CalendarDate) -> Result<f64, AlmanacError> {
        Ok((1.0 + self.moon_phase_angle(date)?.cos()) / 2.0)
    }

    /// Compute the position angle of the Moon's bright limb.
    ///
    /// Arguments
    /// ---------
    /// * `date`: the calendar date (UT).
    ///
    /// Return
    /// ------
    /// * The position angle χ of the midpoint of the illuminated limb, counted from the north
    ///   point of the disk towards the east, in [0, 2π).
    pub fn moon_bright_limb_position_angle(
        &self,
        date: &CalendarDate,
    ) -> Result<Radian, AlmanacError> {
        let obliquity = self.true_obliquity(date);
        let sun = ecliptic_to_equatorial(&self.sun_apparent_position(date)?, obliquity);
        let moon = ecliptic_to_equatorial(&self.moon_apparent_position(date), obliquity);

        let (sin_ds, cos_ds) = sun.declination.sin_cos();
        let (sin_dm, cos_dm) = moon.declination.sin_cos();
        let (sin_a, cos_a) = (sun.right_ascension - moon.right_ascension).sin_cos();

        Ok(principal_angle(
            (cos_ds * sin_a).atan2(sin_ds * cos_dm - cos_ds * sin_dm * cos_a),
        ))
    }

    /// Equatorial horizontal parallax of the Moon, sin π = a⊕ / Δ.
    pub fn moon_equatorial_horizontal_parallax(&self, date: &CalendarDate) -> Radian {
        (EARTH_EQUATORIAL_RADIUS / self.moon_distance_to_earth_km(date)).asin()
    }
}
