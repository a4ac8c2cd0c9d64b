//! Truncated ELP2000-82 lunar series (Chapront-Touzé & Chapront), with the periodic terms
//! of Meeus, *Astronomical Algorithms*, ch. 47.
//!
//! The Moon's geocentric ecliptic longitude, latitude and distance are the mean longitude
//! L′ and mean distance plus sums of periodic terms in the arguments D, M, M′ and F.
//! Terms containing the Sun's mean anomaly M are scaled by `E^|m|`, where `E` corrects for
//! the decreasing eccentricity of the Earth's orbit. The additive terms A₁, A₂, A₃ account
//! for the action of Venus, Jupiter and the flattening of the Earth.
//!
//! Accuracy is about 10″ in longitude and 4″ in latitude.

use crate::constants::{Degree, ARCSEC_PER_CIRCLE, RADEG};
use crate::coordinates::SphericalPoint;
use crate::theory::{evaluate_polynomial, LunarTheory};

/// Term of the longitude and distance series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicTerm {
    /// Multipliers of D, M, M′ and F
    pub multipliers: [i8; 4],
    /// Sine coefficient of the longitude, 10⁻⁶ degree
    pub longitude: f64,
    /// Cosine coefficient of the distance, 10⁻³ km
    pub distance: f64,
}

/// Term of the latitude series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatitudeTerm {
    /// Multipliers of D, M, M′ and F
    pub multipliers: [i8; 4],
    /// Sine coefficient, 10⁻⁶ degree
    pub latitude: f64,
}

const fn periodic(multipliers: [i8; 4], longitude: f64, distance: f64) -> PeriodicTerm {
    PeriodicTerm {
        multipliers,
        longitude,
        distance,
    }
}

const fn latitude(multipliers: [i8; 4], latitude: f64) -> LatitudeTerm {
    LatitudeTerm {
        multipliers,
        latitude,
    }
}

/// Moon's mean longitude L′, degrees
const MEAN_LONGITUDE: [Degree; 5] = [
    218.3164477,
    481267.88123421,
    -0.0015786,
    1.0 / 538841.0,
    -1.0 / 65194000.0,
];
/// Mean elongation D, degrees
const MEAN_ELONGATION: [Degree; 5] = [
    297.8501921,
    445267.1114034,
    -0.0018819,
    1.0 / 545868.0,
    -1.0 / 113065000.0,
];
/// Sun's mean anomaly M, degrees
const SUN_MEAN_ANOMALY: [Degree; 4] = [357.5291092, 35999.0502909, -0.0001536, 1.0 / 24490000.0];
/// Moon's mean anomaly M′, degrees
const MOON_MEAN_ANOMALY: [Degree; 5] = [
    134.9633964,
    477198.8675055,
    0.0087414,
    1.0 / 69699.0,
    -1.0 / 14712000.0,
];
/// Moon's argument of latitude F, degrees
const ARGUMENT_OF_LATITUDE: [Degree; 5] = [
    93.2720950,
    483202.0175233,
    -0.0036539,
    -1.0 / 3526000.0,
    1.0 / 863310000.0,
];

/// Mean distance of the Moon, km
const MEAN_DISTANCE: f64 = 385000.56;

pub static LONGITUDE_DISTANCE_TERMS: [PeriodicTerm; 60] = [
    periodic([0, 0, 1, 0], 6288774.0, -20905355.0),
    periodic([2, 0, -1, 0], 1274027.0, -3699111.0),
    periodic([2, 0, 0, 0], 658314.0, -2955968.0),
    periodic([0, 0, 2, 0], 213618.0, -569925.0),
    periodic([0, 1, 0, 0], -185116.0, 48888.0),
    periodic([0, 0, 0, 2], -114332.0, -3149.0),
    periodic([2, 0, -2, 0], 58793.0, 246158.0),
    periodic([2, -1, -1, 0], 57066.0, -152138.0),
    periodic([2, 0, 1, 0], 53322.0, -170733.0),
    periodic([2, -1, 0, 0], 45758.0, -204586.0),
    periodic([0, 1, -1, 0], -40923.0, -129620.0),
    periodic([1, 0, 0, 0], -34720.0, 108743.0),
    periodic([0, 1, 1, 0], -30383.0, 104755.0),
    periodic([2, 0, 0, -2], 15327.0, 10321.0),
    periodic([0, 0, 1, 2], -12528.0, 0.0),
    periodic([0, 0, 1, -2], 10980.0, 79661.0),
    periodic([4, 0, -1, 0], 10675.0, -34782.0),
    periodic([0, 0, 3, 0], 10034.0, -23210.0),
    periodic([4, 0, -2, 0], 8548.0, -21636.0),
    periodic([2, 1, -1, 0], -7888.0, 24208.0),
    periodic([2, 1, 0, 0], -6766.0, 30824.0),
    periodic([1, 0, -1, 0], -5163.0, -8379.0),
    periodic([1, 1, 0, 0], 4987.0, -16675.0),
    periodic([2, -1, 1, 0], 4036.0, -12831.0),
    periodic([2, 0, 2, 0], 3994.0, -10445.0),
    periodic([4, 0, 0, 0], 3861.0, -11650.0),
    periodic([2, 0, -3, 0], 3665.0, 14403.0),
    periodic([0, 1, -2, 0], -2689.0, -7003.0),
    periodic([2, 0, -1, 2], -2602.0, 0.0),
    periodic([2, -1, -2, 0], 2390.0, 10056.0),
    periodic([1, 0, 1, 0], -2348.0, 6322.0),
    periodic([2, -2, 0, 0], 2236.0, -9884.0),
    periodic([0, 1, 2, 0], -2120.0, 5751.0),
    periodic([0, 2, 0, 0], -2069.0, 0.0),
    periodic([2, -2, -1, 0], 2048.0, -4950.0),
    periodic([2, 0, 1, -2], -1773.0, 4130.0),
    periodic([2, 0, 0, 2], -1595.0, 0.0),
    periodic([4, -1, -1, 0], 1215.0, -3958.0),
    periodic([0, 0, 2, 2], -1110.0, 0.0),
    periodic([3, 0, -1, 0], -892.0, 3258.0),
    periodic([2, 1, 1, 0], -810.0, 2616.0),
    periodic([4, -1, -2, 0], 759.0, -1897.0),
    periodic([0, 2, -1, 0], -713.0, -2117.0),
    periodic([2, 2, -1, 0], -700.0, 2354.0),
    periodic([2, 1, -2, 0], 691.0, 0.0),
    periodic([2, -1, 0, -2], 596.0, 0.0),
    periodic([4, 0, 1, 0], 549.0, -1423.0),
    periodic([0, 0, 4, 0], 537.0, -1117.0),
    periodic([4, -1, 0, 0], 520.0, -1571.0),
    periodic([1, 0, -2, 0], -487.0, -1739.0),
    periodic([2, 1, 0, -2], -399.0, 0.0),
    periodic([0, 0, 2, -2], -381.0, -4421.0),
    periodic([1, 1, 1, 0], 351.0, 0.0),
    periodic([3, 0, -2, 0], -340.0, 0.0),
    periodic([4, 0, -3, 0], 330.0, 0.0),
    periodic([2, -1, 2, 0], 327.0, 0.0),
    periodic([0, 2, 1, 0], -323.0, 1165.0),
    periodic([1, 1, -1, 0], 299.0, 0.0),
    periodic([2, 0, 3, 0], 294.0, 0.0),
    periodic([2, 0, -1, -2], 0.0, 8752.0),
];

pub static LATITUDE_TERMS: [LatitudeTerm; 60] = [
    latitude([0, 0, 0, 1], 5128122.0),
    latitude([0, 0, 1, 1], 280602.0),
    latitude([0, 0, 1, -1], 277693.0),
    latitude([2, 0, 0, -1], 173237.0),
    latitude([2, 0, -1, 1], 55413.0),
    latitude([2, 0, -1, -1], 46271.0),
    latitude([2, 0, 0, 1], 32573.0),
    latitude([0, 0, 2, 1], 17198.0),
    latitude([2, 0, 1, -1], 9266.0),
    latitude([0, 0, 2, -1], 8822.0),
    latitude([2, -1, 0, -1], 8216.0),
    latitude([2, 0, -2, -1], 4324.0),
    latitude([2, 0, 1, 1], 4200.0),
    latitude([2, 1, 0, -1], -3359.0),
    latitude([2, -1, -1, 1], 2463.0),
    latitude([2, -1, 0, 1], 2211.0),
    latitude([2, -1, -1, -1], 2065.0),
    latitude([0, 1, -1, -1], -1870.0),
    latitude([4, 0, -1, -1], 1828.0),
    latitude([0, 1, 0, 1], -1794.0),
    latitude([0, 0, 0, 3], -1749.0),
    latitude([0, 1, -1, 1], -1565.0),
    latitude([1, 0, 0, 1], -1491.0),
    latitude([0, 1, 1, 1], -1475.0),
    latitude([0, 1, 1, -1], -1410.0),
    latitude([0, 1, 0, -1], -1344.0),
    latitude([1, 0, 0, -1], -1335.0),
    latitude([0, 0, 3, 1], 1107.0),
    latitude([4, 0, 0, -1], 1021.0),
    latitude([4, 0, -1, 1], 833.0),
    latitude([0, 0, 1, -3], 777.0),
    latitude([4, 0, -2, 1], 671.0),
    latitude([2, 0, 0, -3], 607.0),
    latitude([2, 0, 2, -1], 596.0),
    latitude([2, -1, 1, -1], 491.0),
    latitude([2, 0, -2, 1], -451.0),
    latitude([0, 0, 3, -1], 439.0),
    latitude([2, 0, 2, 1], 422.0),
    latitude([2, 0, -3, -1], 421.0),
    latitude([2, 1, -1, 1], -366.0),
    latitude([2, 1, 0, 1], -351.0),
    latitude([4, 0, 0, 1], 331.0),
    latitude([2, -1, 1, 1], 315.0),
    latitude([2, -2, 0, -1], 302.0),
    latitude([0, 0, 1, 3], -283.0),
    latitude([2, 1, 1, -1], -229.0),
    latitude([1, 1, 0, -1], 223.0),
    latitude([1, 1, 0, 1], 223.0),
    latitude([0, 1, -2, -1], -220.0),
    latitude([2, 1, -1, -1], -220.0),
    latitude([1, 0, 1, 1], -185.0),
    latitude([2, -1, -2, -1], 181.0),
    latitude([0, 1, 2, 1], -177.0),
    latitude([4, 0, -2, -1], 176.0),
    latitude([4, -1, -1, -1], 166.0),
    latitude([1, 0, 1, -1], -164.0),
    latitude([4, 0, 1, -1], 132.0),
    latitude([1, 0, -1, -1], -119.0),
    latitude([4, -1, 0, -1], 115.0),
    latitude([2, -2, 0, 1], 107.0),
];

/// Geocentric lunar positions from the principal ELP2000-82 terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TruncatedLunarTheory;

struct FundamentalArguments {
    mean_longitude: Degree,
    elongation: Degree,
    sun_anomaly: Degree,
    moon_anomaly: Degree,
    latitude_argument: Degree,
    eccentricity_factor: f64,
}

impl FundamentalArguments {
    fn at(t: f64) -> Self {
        FundamentalArguments {
            mean_longitude: evaluate_polynomial(&MEAN_LONGITUDE, t),
            elongation: evaluate_polynomial(&MEAN_ELONGATION, t),
            sun_anomaly: evaluate_polynomial(&SUN_MEAN_ANOMALY, t),
            moon_anomaly: evaluate_polynomial(&MOON_MEAN_ANOMALY, t),
            latitude_argument: evaluate_polynomial(&ARGUMENT_OF_LATITUDE, t),
            eccentricity_factor: evaluate_polynomial(&[1.0, -0.002516, -0.0000074], t),
        }
    }

    /// Argument of a term in radians and its eccentricity scaling.
    fn term(&self, multipliers: &[i8; 4]) -> (f64, f64) {
        let [d, m, m_prime, f] = multipliers.map(f64::from);
        let argument = d * self.elongation
            + m * self.sun_anomaly
            + m_prime * self.moon_anomaly
            + f * self.latitude_argument;
        let scale = self.eccentricity_factor.powi(i32::from(multipliers[1].abs()));
        ((argument % 360.0) * RADEG, scale)
    }
}

impl LunarTheory for TruncatedLunarTheory {
    fn geocentric_position(&self, centuries: f64) -> SphericalPoint {
        let t = centuries;
        let args = FundamentalArguments::at(t);

        let (mut sum_l, sum_r) = LONGITUDE_DISTANCE_TERMS.iter().fold(
            (0.0, 0.0),
            |(sum_l, sum_r), term| {
                let (argument, scale) = args.term(&term.multipliers);
                let (sin_a, cos_a) = argument.sin_cos();
                (
                    sum_l + term.longitude * scale * sin_a,
                    sum_r + term.distance * scale * cos_a,
                )
            },
        );
        let mut sum_b: f64 = LATITUDE_TERMS
            .iter()
            .map(|term| {
                let (argument, scale) = args.term(&term.multipliers);
                term.latitude * scale * argument.sin()
            })
            .sum();

        let a1 = (119.75 + 131.849 * t) * RADEG;
        let a2 = (53.09 + 479264.290 * t) * RADEG;
        let a3 = (313.45 + 481266.484 * t) * RADEG;
        let l_prime = args.mean_longitude * RADEG;
        let m_prime = args.moon_anomaly * RADEG;
        let f = args.latitude_argument * RADEG;

        sum_l += 3958.0 * a1.sin() + 1962.0 * (l_prime - f).sin() + 318.0 * a2.sin();
        sum_b += -2235.0 * l_prime.sin()
            + 382.0 * a3.sin()
            + 175.0 * (a1 - f).sin()
            + 175.0 * (a1 + f).sin()
            + 127.0 * (l_prime - m_prime).sin()
            - 115.0 * (l_prime + m_prime).sin();

        let longitude = (args.mean_longitude + sum_l / 1e6) * 3600.0;
        SphericalPoint {
            longitude: longitude.rem_euclid(ARCSEC_PER_CIRCLE),
            latitude: sum_b / 1e6 * 3600.0,
            distance: MEAN_DISTANCE + sum_r / 1000.0,
        }
    }
}
