//! IAU 1980 fundamental arguments (Seidelmann, 1982), in arcseconds with `T` in Julian
//! centuries since J2000.

use crate::constants::ArcSec;
use crate::theory::{evaluate_polynomial, DelaunayArguments, SeriesOrder};

/// Mean anomaly of the Moon (l)
const MOON_MEAN_ANOMALY: [ArcSec; 4] = [485866.733, 1717915922.633, 31.310, 0.064];
/// Mean anomaly of the Sun (l′)
const SUN_MEAN_ANOMALY: [ArcSec; 4] = [1287099.804, 129596581.224, -0.577, -0.012];
/// Argument of latitude of the Moon (F)
const MOON_ARGUMENT_OF_LATITUDE: [ArcSec; 4] = [335778.877, 1739527263.137, -13.257, 0.011];
/// Mean elongation of the Moon from the Sun (D)
const MOON_MEAN_ELONGATION: [ArcSec; 4] = [1072261.307, 1602961601.328, -6.891, 0.019];

/// Delaunay arguments from the IAU 1980 cubic polynomials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Iau1980Arguments;

impl DelaunayArguments for Iau1980Arguments {
    fn arguments(&self, centuries: f64, order: SeriesOrder) -> [ArcSec; 4] {
        let degree = match order {
            SeriesOrder::Linear => 2,
            SeriesOrder::Full => 4,
        };
        [
            MOON_MEAN_ANOMALY,
            SUN_MEAN_ANOMALY,
            MOON_ARGUMENT_OF_LATITUDE,
            MOON_MEAN_ELONGATION,
        ]
        .map(|polynomial| evaluate_polynomial(&polynomial[..degree], centuries))
    }
}
