use thiserror::Error;

use crate::time::CalendarDate;

#[derive(Error, Debug)]
pub enum AlmanacError {
    #[error("ROOTS finding error: {0}")]
    RootFindingError(#[from] roots::SearchError),

    #[error("{solver} did not converge after {iterations} iterations")]
    NoConvergence {
        solver: &'static str,
        iterations: usize,
    },

    #[error("Invalid calendar date: {0}")]
    InvalidDate(CalendarDate),

    #[error("Invalid season index: {0} (expected 0 to 3)")]
    InvalidSeasonIndex(u8),

    #[error("Invalid month number: {0} (expected 1 to 12)")]
    InvalidMonth(u8),

    #[error("Invalid weekday number: {0} (expected 1 to 7)")]
    InvalidWeekday(u8),
}

impl PartialEq for AlmanacError {
    fn eq(&self, other: &Self) -> bool {
        use AlmanacError::*;
        match (self, other) {
            (RootFindingError(a), RootFindingError(b)) => a == b,
            (
                NoConvergence {
                    solver: a,
                    iterations: i,
                },
                NoConvergence {
                    solver: b,
                    iterations: j,
                },
            ) => a == b && i == j,
            (InvalidDate(a), InvalidDate(b)) => a == b,
            (InvalidSeasonIndex(a), InvalidSeasonIndex(b)) => a == b,
            (InvalidMonth(a), InvalidMonth(b)) => a == b,
            (InvalidWeekday(a), InvalidWeekday(b)) => a == b,
            _ => false,
        }
    }
}
