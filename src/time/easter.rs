use crate::time::calendar::{CalendarDate, Month};

/// Date of Easter Sunday for a given year.
///
/// Years after 1582 use the Gregorian computus (Meeus, after Butcher's *Ecclesiastical
/// Calendar*); 1582 and earlier use the Julian computus, since Easter 1582 was still
/// reckoned on the old calendar.
pub fn date_of_easter(year: i32) -> CalendarDate {
    let offset = if year > 1582 {
        let golden = year.rem_euclid(19);
        let century = year.div_euclid(100);
        let year_of_century = year.rem_euclid(100);
        let g = (century - (century + 8) / 25 + 1) / 3;
        let h = (19 * golden + century - century / 4 - g + 15).rem_euclid(30);
        let l = (32 + 2 * (century % 4) + 2 * (year_of_century / 4) - h - year_of_century % 4)
            .rem_euclid(7);
        let m = (golden + 11 * h + 22 * l) / 451;
        h + l - 7 * m + 114
    } else {
        let a = (19 * year.rem_euclid(19) + 15).rem_euclid(30);
        let b = (2 * year.rem_euclid(4) + 4 * year.rem_euclid(7) - a + 34).rem_euclid(7);
        a + b + 114
    };

    // offset / 31 is 3 or 4 for every year
    let month = if offset / 31 == 3 {
        Month::March
    } else {
        Month::April
    };
    CalendarDate::new(year, month, f64::from(offset % 31 + 1))
}
