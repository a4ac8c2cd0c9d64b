//! Keplerian planetary positions from the VSOP82 mean elements of date.
//!
//! The mean elements are propagated on the osculating-free Keplerian ellipse they describe:
//! the equinoctial form of Kepler's equation
//!
//! ```text
//! F − k sin F + h cos F = λ
//! ```
//!
//! is solved for the eccentric longitude `F` with a Newton–Raphson iteration, and the position
//! in the orbital plane is rotated onto the ecliptic of date. Periodic perturbations are
//! ignored, so errors reach a few arcminutes for the inner planets and about a degree for
//! Jupiter and Saturn.

use log::debug;
use nalgebra::Vector3;
use roots::{find_root_newton_raphson, SimpleConvergency};

use crate::almanac_errors::AlmanacError;
use crate::constants::{Radian, DPI};
use crate::coordinates::{principal_angle, SphericalPoint};
use crate::orbital::{EquinoctialVariables, ReferenceFrame};
use crate::planet::Planet;
use crate::theory::PlanetaryTheory;

/// Newton–Raphson tolerance on the eccentric longitude
const KEPLER_TOLERANCE: f64 = f64::EPSILON * 1e2;

/// Iteration budget of the Kepler solver
const KEPLER_MAX_ITERATIONS: usize = 25;

/// [`PlanetaryTheory`] evaluating the unperturbed ellipse of the VSOP82 mean elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeanElementTheory;

/// Solve the equinoctial Kepler equation for the eccentric longitude.
///
/// Arguments
/// ---------
/// * `variables`: the equinoctial variables; only λ, k and h are used.
///
/// Return
/// ------
/// * The eccentric longitude `F` in radians, with `F ≥ ϖ`.
///
/// Errors
/// ------
/// * [`AlmanacError::RootFindingError`] if Newton–Raphson does not converge within the
///   iteration budget.
pub fn solve_kepler_equation(variables: &EquinoctialVariables) -> Result<Radian, AlmanacError> {
    let EquinoctialVariables { k, h, .. } = *variables;
    let perihelion_longitude = principal_angle(h.atan2(k));

    let mut mean_longitude = principal_angle(variables.mean_longitude);
    if mean_longitude < perihelion_longitude {
        mean_longitude += DPI;
    }

    // R(F) = F - k·sin(F) + h·cos(F) - λ
    let f = |fval: f64| -> f64 { fval - k * fval.sin() + h * fval.cos() - mean_longitude };

    // R'(F)
    let df = |fval: f64| -> f64 { 1.0 - k * fval.cos() - h * fval.sin() };

    let mut convergency = SimpleConvergency {
        eps: KEPLER_TOLERANCE,
        max_iter: KEPLER_MAX_ITERATIONS,
    };

    debug!(
        "Kepler solve: lambda = {mean_longitude:.12}, k = {k:.9}, h = {h:.9}"
    );

    Ok(find_root_newton_raphson(
        mean_longitude,
        &f,
        &df,
        &mut convergency,
    )?)
}

/// Heliocentric rectangular position (AU) of the ellipse described by `variables`.
pub fn heliocentric_rectangular(
    variables: &EquinoctialVariables,
) -> Result<Vector3<f64>, AlmanacError> {
    let eccentric_longitude = solve_kepler_equation(variables)?;
    let EquinoctialVariables {
        semi_major_axis,
        k,
        h,
        q,
        p,
        ..
    } = *variables;

    let beta = 1.0 / (1.0 + (1.0 - k * k - h * h).sqrt());
    let beta_hk = beta * h * k;
    let (sin_f, cos_f) = eccentric_longitude.sin_cos();

    // position in the orbital plane, x axis towards the equinox projected on the orbit
    let x = semi_major_axis * ((1.0 - beta * h * h) * cos_f + beta_hk * sin_f - k);
    let y = semi_major_axis * ((1.0 - beta * k * k) * sin_f + beta_hk * cos_f - h);

    // q, p are sin(i/2)·(cos Ω, sin Ω)
    let chi = (1.0 - q * q - p * p).sqrt();
    let f_vector = Vector3::new(1.0 - 2.0 * p * p, 2.0 * p * q, -2.0 * p * chi);
    let g_vector = Vector3::new(2.0 * p * q, 1.0 - 2.0 * q * q, 2.0 * q * chi);

    Ok(x * f_vector + y * g_vector)
}

impl PlanetaryTheory for MeanElementTheory {
    fn heliocentric_position(
        &self,
        millennia: f64,
        planet: Planet,
    ) -> Result<SphericalPoint, AlmanacError> {
        let variables = EquinoctialVariables::at(millennia, planet, ReferenceFrame::OfDate);
        let position = heliocentric_rectangular(&variables)?;
        Ok(SphericalPoint::from_rectangular(&position))
    }
}

#[cfg(test)]
mod mean_elements_test {
    use super::*;
    use crate::constants::RADEG;
    use crate::orbital::OrbitalElements;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_kepler_equation_residual() {
        let variables = EquinoctialVariables {
            semi_major_axis: 1.8017360713154256,
            mean_longitude: 1.8432075709935847,
            k: 8.8564152600135601E-002,
            h: 0.26937368090922720,
            q: 0.0,
            p: 0.0,
        };

        let f = solve_kepler_equation(&variables).unwrap();
        let residual = f - variables.k * f.sin() + variables.h * f.cos() - variables.mean_longitude;
        assert_abs_diff_eq!(residual, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_circular_orbit() {
        let variables = EquinoctialVariables {
            semi_major_axis: 2.0,
            mean_longitude: 0.75,
            ..Default::default()
        };
        let position = heliocentric_rectangular(&variables).unwrap();
        assert_abs_diff_eq!(position.norm(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(position.y.atan2(position.x), 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(position.z, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_radius_within_apsides() {
        for planet in Planet::ALL {
            for step in 0..20 {
                let t = -0.5 + f64::from(step) * 0.05;
                let elements = OrbitalElements::at(t, planet, ReferenceFrame::OfDate);
                let position = MeanElementTheory.heliocentric_position(t, planet).unwrap();
                let a = elements.semi_major_axis;
                let e = elements.eccentricity;
                assert!(position.distance >= a * (1.0 - e) - 1e-9, "{planet} at t = {t}");
                assert!(position.distance <= a * (1.0 + e) + 1e-9, "{planet} at t = {t}");
                assert!(position.latitude.abs() <= elements.inclination + 1e-9);
            }
        }
    }

    #[test]
    fn test_earth_1992_october_13() {
        // Earth heliocentric longitude 19.907372°, radius 0.99760775 AU, JDE 2448908.5
        let t = (2448908.5 - crate::constants::J2000) / crate::constants::DAYS_PER_JULIAN_MILLENNIUM;
        let earth = MeanElementTheory.heliocentric_position(t, Planet::Earth).unwrap();

        assert_abs_diff_eq!(earth.longitude / RADEG, 19.907372, epsilon = 0.02);
        assert_abs_diff_eq!(earth.distance, 0.99760775, epsilon = 2e-4);
    }
}
