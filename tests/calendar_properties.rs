use almanac::time::{
    calendar_date, date_of_easter, is_leap_year, CalendarDate, Month, Weekday,
};
use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn julian_date_of_the_epoch_start() {
    let start = CalendarDate::new(-4712, Month::January, 1.5);
    assert_abs_diff_eq!(start.julian_date(), 0.0, epsilon = 1e-9);

    // 0.0 January is half a day earlier under the noon convention
    let zero = CalendarDate::new(-4712, Month::January, 0.0);
    assert_abs_diff_eq!(zero.julian_date(), -1.5, epsilon = 1e-9);
}

#[test]
fn round_trip_across_the_gregorian_reform() {
    for date in [
        CalendarDate::new(1582, Month::October, 4.0),
        CalendarDate::new(1582, Month::October, 15.0),
        CalendarDate::new(0, Month::March, 1.25),
        CalendarDate::new(-584, Month::May, 28.63),
        CalendarDate::new(1957, Month::October, 4.81),
    ] {
        let back = calendar_date(date.julian_date());
        assert_eq!(back.year, date.year);
        assert_eq!(back.month, date.month);
        assert_abs_diff_eq!(back.day, date.day, epsilon = 1e-6);
    }

    // the day after 4 October 1582 is 15 October 1582
    let next = calendar_date(CalendarDate::new(1582, Month::October, 4.0).julian_date() + 1.0);
    assert_eq!(next.month, Month::October);
    assert_abs_diff_eq!(next.day, 15.0, epsilon = 1e-9);
}

#[test]
fn random_round_trips() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for _ in 0..2_000 {
        let jd = rng.random_range(0.0..3_000_000.0);
        let date = calendar_date(jd);
        assert!(date.is_valid(), "{date} from {jd}");
        assert_abs_diff_eq!(date.julian_date(), jd, epsilon = 1e-6);
    }
}

#[test]
fn leap_years() {
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2000));
    assert!(is_leap_year(1500));
    assert!(!is_leap_year(2023));
}

#[test]
fn weekday_of_new_year_2000() {
    let date = CalendarDate::new(2000, Month::January, 1.0);
    assert_eq!(date.day_of_week(), Weekday::Saturday);
}

#[test]
fn dates_of_easter() {
    let cases = [
        (1954, Month::April, 18.0),
        (1818, Month::March, 22.0),
        (1993, Month::April, 11.0),
        (1992, Month::April, 19.0),
        (2000, Month::April, 23.0),
        (1243, Month::April, 12.0),
    ];
    for (year, month, day) in cases {
        let easter = date_of_easter(year);
        assert_eq!((easter.year, easter.month, easter.day), (year, month, day));
    }
}

#[test]
fn invalid_dates_are_rejected() {
    assert!(!CalendarDate::new(1582, Month::October, 10.0).is_valid());
    assert!(!CalendarDate::new(2023, Month::February, 29.0).is_valid());
    assert!(CalendarDate::new(2024, Month::February, 29.5).is_valid());
    assert!(CalendarDate::try_new(1900, Month::February, 29.0).is_err());
}
