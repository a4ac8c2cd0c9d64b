use crate::constants::{Hour, DAYS_PER_JULIAN_CENTURY, J2000};
use crate::time::calendar::CalendarDate;

/// Compute the Greenwich Mean Sidereal Time (GMST) in hours
/// for a given calendar date (Universal Time).
///
/// # Arguments
/// * `date` - calendar date, its fractional day gives the time of day in UT
///
/// # Returns
/// * GMST in hours, normalized to the interval [0, 24).
///
/// # Details
/// The sidereal angle is the IAU 1982 expression evaluated directly at the instant,
/// in degrees:
///
/// ```text
/// θ₀ = 280.46061837 + 360.98564736629 (JD − 2451545) + 0.000387933 T² − T³ / 38710000
/// ```
///
/// where `T` is counted in Julian centuries from J2000.0.
///
/// # References
/// * J. Meeus, *Astronomical Algorithms*, formula 11.4.
pub fn greenwich_mean_sidereal_time(date: &CalendarDate) -> Hour {
    // Polynomial coefficients of the sidereal angle (degrees)
    const C0: f64 = 280.46061837;
    const C1: f64 = 360.98564736629;
    const C2: f64 = 0.000387933;
    const C3: f64 = 1.0 / 38_710_000.0;

    let days = date.julian_date() - J2000;
    let t = days / DAYS_PER_JULIAN_CENTURY;

    let theta = C0 + C1 * days + (C2 - C3 * t) * t * t;

    theta.rem_euclid(360.0) / 15.0
}

#[cfg(test)]
mod sidereal_test {
    use super::*;
    use crate::time::calendar::Month;
    use approx::assert_relative_eq;

    #[test]
    fn test_gmst_at_midnight() {
        // 1987 April 10, 0h UT: 13h10m46.3668s
        let date = CalendarDate::new(1987, Month::April, 10.0);
        let expected = 13.0 + 10.0 / 60.0 + 46.3668 / 3600.0;
        assert_relative_eq!(greenwich_mean_sidereal_time(&date), expected, epsilon = 1e-6);
    }

    #[test]
    fn test_gmst_during_the_day() {
        // 1987 April 10, 19h21m00s UT: 8h34m57.0896s
        let date = CalendarDate::new(1987, Month::April, 10.0 + (19.0 + 21.0 / 60.0) / 24.0);
        let expected = 8.0 + 34.0 / 60.0 + 57.0896 / 3600.0;
        assert_relative_eq!(greenwich_mean_sidereal_time(&date), expected, epsilon = 1e-6);
    }

    #[test]
    fn test_gmst_range() {
        for day in 1..=28 {
            let date = CalendarDate::new(2024, Month::February, f64::from(day) + 0.37);
            let gmst = greenwich_mean_sidereal_time(&date);
            assert!((0.0..24.0).contains(&gmst));
        }
    }
}
