mod common;

use almanac::almanac::SolverSettings;
use almanac::constants::RADEG;
use almanac::ephemeris::{Equinox, Season, Solstice};
use almanac::time::{CalendarDate, Month};
use almanac::{Almanac, AlmanacError, Planet};
use approx::assert_abs_diff_eq;

use common::{assert_ecliptic_close, init_logger};

fn december_20() -> CalendarDate {
    CalendarDate::new(1992, Month::December, 20.0)
}

#[test]
fn apparent_positions_on_1992_december_20() {
    init_logger();
    let almanac = Almanac::new();
    let date = december_20();

    // (planet, λ°, β°) from the mean-element theory, light-time corrected
    let expected = [
        (Planet::Mercury, 249.972, 1.064),
        (Planet::Venus, 313.083, -2.086),
        (Planet::Mars, 114.507, 3.437),
        (Planet::Jupiter, 192.149, 1.261),
        (Planet::Saturn, 315.124, -1.011),
        (Planet::Uranus, 287.716, -0.420),
        (Planet::Neptune, 287.392, 0.691),
    ];

    for (planet, longitude, latitude) in expected {
        let position = almanac.planet_apparent_position(&date, planet).unwrap();
        assert!(position.longitude >= 0.0 && position.longitude < almanac::constants::DPI);
        assert_ecliptic_close(&position, longitude, latitude, 0.02);
    }
}

#[test]
fn distances_on_1992_december_20() {
    let almanac = Almanac::new();
    let date = december_20();

    // (planet, r, Δ) in AU
    let expected = [
        (Planet::Mercury, 0.41994, 1.21593),
        (Planet::Venus, 0.72460, 0.91090),
        (Planet::Mars, 1.59080, 0.648119),
        (Planet::Jupiter, 5.44860, 5.59859),
        (Planet::Saturn, 9.90492, 10.55273),
        (Planet::Uranus, 19.5713, 20.4967),
        (Planet::Neptune, 30.2440, 31.1722),
    ];

    let sun = almanac.sun_distance_to_earth(&date).unwrap();
    assert_abs_diff_eq!(sun, 0.983801, epsilon = 1e-4);

    for (planet, r, delta) in expected {
        let to_sun = almanac.planet_distance_to_sun(&date, planet).unwrap();
        let to_earth = almanac.planet_distance_to_earth(&date, planet).unwrap();
        assert_abs_diff_eq!(to_sun, r, epsilon = 1e-3 * r);
        assert_abs_diff_eq!(to_earth, delta, epsilon = 1e-3 * delta);

        // the triangle Sun–planet–Earth closes
        assert!(to_earth <= to_sun + sun + 1e-12);
        assert!(to_sun <= to_earth + sun + 1e-12);
    }
}

#[test]
fn phases_and_magnitudes() {
    let almanac = Almanac::new();
    let date = december_20();

    for planet in Planet::ALL.into_iter().filter(|&p| p != Planet::Earth) {
        let phase = almanac.planet_phase_angle(&date, planet).unwrap().unwrap();
        let fraction = almanac.planet_illuminated_fraction(&date, planet).unwrap().unwrap();
        let magnitude = almanac.planet_apparent_magnitude(&date, planet).unwrap().unwrap();

        assert!((0.0..=std::f64::consts::PI).contains(&phase), "{planet}");
        assert_abs_diff_eq!(fraction, (1.0 + phase.cos()) / 2.0, epsilon = 1e-15);
        assert!((-5.0..8.5).contains(&magnitude), "{planet}: {magnitude}");
    }

    // outer planets are almost fully lit
    let jupiter = almanac.planet_illuminated_fraction(&date, Planet::Jupiter).unwrap().unwrap();
    assert!(jupiter > 0.98);

    let venus = almanac.planet_phase_angle(&date, Planet::Venus).unwrap().unwrap();
    assert_abs_diff_eq!(venus / RADEG, 72.956, epsilon = 0.02);
}

#[test]
fn the_earth_is_degenerate() {
    let almanac = Almanac::new();
    let date = december_20();

    let position = almanac.planet_true_position(&date, Planet::Earth).unwrap();
    assert_eq!((position.longitude, position.latitude), (0.0, 0.0));
    assert_eq!(almanac.planet_phase_angle(&date, Planet::Earth).unwrap(), None);
    assert_eq!(almanac.planet_apparent_magnitude(&date, Planet::Earth).unwrap(), None);
    assert_eq!(almanac.planet_distance_to_earth(&date, Planet::Earth).unwrap(), 0.0);
}

#[test]
fn sun_and_seasons() {
    init_logger();
    let almanac = Almanac::new();

    let date = CalendarDate::new(1992, Month::October, 13.0);
    let sun = almanac.sun_apparent_position(&date).unwrap();
    assert_ecliptic_close(&sun, 199.90606, 0.00020, 0.02);

    let march = almanac.equinox(2000, Equinox::March).unwrap();
    assert_eq!((march.year, march.month), (2000, Month::March));
    assert_abs_diff_eq!(march.day, 20.3130, epsilon = 0.02);

    let december = almanac.solstice(2000, Solstice::December).unwrap();
    assert_eq!(december.month, Month::December);
    assert!((21.0..22.0).contains(&december.day));

    // the Sun is at the target longitude on the returned date
    for index in 0..4 {
        let season = Season::try_from(index).unwrap();
        let start = almanac.season(2010, season).unwrap();
        let longitude = almanac.sun_apparent_position(&start).unwrap().longitude;
        let target = f64::from(index) * 90.0;
        let offset = common::angle_difference(longitude, target * RADEG) / RADEG;
        assert_abs_diff_eq!(offset, 0.0, epsilon = 1e-5);
    }
}

#[test]
fn solvers_report_exhausted_budgets() {
    let almanac = Almanac::new().with_settings(SolverSettings {
        precision: 0.0,
        max_iterations: 2,
    });

    let error = almanac
        .planet_apparent_position(&december_20(), Planet::Mars)
        .unwrap_err();
    assert_eq!(
        error,
        AlmanacError::NoConvergence {
            solver: "light-time",
            iterations: 2
        }
    );

    assert!(matches!(
        almanac.equinox(2000, Equinox::September),
        Err(AlmanacError::NoConvergence { .. })
    ));
}

#[test]
fn moon_on_1992_april_12() {
    let almanac = Almanac::new();
    let date = CalendarDate::new(1992, Month::April, 12.0);

    let fraction = almanac.moon_illuminated_fraction(&date).unwrap();
    assert_abs_diff_eq!(fraction, 0.6786, epsilon = 1e-3);

    let limb = almanac.moon_bright_limb_position_angle(&date).unwrap();
    assert_abs_diff_eq!(limb / RADEG, 285.05, epsilon = 0.5);

    let distance = almanac.moon_distance_to_earth(&date);
    assert!(distance > 0.0024 && distance < 0.0028);
}
