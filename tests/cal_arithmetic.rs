use civiltime::{Duration, Error, Month, Overflow, PlainDateTime};

fn ymd(year: i64, month: Month, day: i8) -> PlainDateTime {
    PlainDateTime::ymd(year, month, day).unwrap()
}

mod months {
    use super::*;

    #[test]
    fn constrain_clamps_to_month_end() {
        let date = ymd(2021, Month::January, 31);
        let result = date.checked_add(&Duration::of_months(1), Overflow::Constrain).unwrap();
        assert_eq!(result, ymd(2021, Month::February, 28));
    }

    #[test]
    fn reject_refuses_impossible_days() {
        let date = ymd(2021, Month::January, 31);
        let result = date.checked_add(&Duration::of_months(1), Overflow::Reject);
        assert_eq!(result, Err(Error::OutOfRange("day")));
    }

    #[test]
    fn leap_year_keeps_the_29th() {
        let date = ymd(2020, Month::January, 31);
        let result = date.checked_add(&Duration::of_months(1), Overflow::Constrain).unwrap();
        assert_eq!(result, ymd(2020, Month::February, 29));
    }

    #[test]
    fn months_carry_into_years() {
        let date = ymd(2021, Month::November, 15);
        let result = date.checked_add(&Duration::of_months(3), Overflow::Reject).unwrap();
        assert_eq!(result, ymd(2022, Month::February, 15));

        let result = date.checked_add(&Duration::of_months(-23), Overflow::Reject).unwrap();
        assert_eq!(result, ymd(2019, Month::December, 15));
    }

    #[test]
    fn subtraction_still_applies_months_before_days() {
        let date = ymd(2021, Month::March, 31);
        let result = date.checked_sub(&Duration::of_months(1), Overflow::Constrain).unwrap();
        assert_eq!(result, ymd(2021, Month::February, 28));
    }
}

mod years {
    use super::*;

    #[test]
    fn from_a_leap_day() {
        let date = ymd(2020, Month::February, 29);

        let constrained = date.checked_add(&Duration::of_years(1), Overflow::Constrain).unwrap();
        assert_eq!(constrained, ymd(2021, Month::February, 28));

        let rejected = date.checked_add(&Duration::of_years(1), Overflow::Reject);
        assert_eq!(rejected, Err(Error::OutOfRange("day")));

        let four_years = date.checked_add(&Duration::of_years(4), Overflow::Reject).unwrap();
        assert_eq!(four_years, ymd(2024, Month::February, 29));
    }
}

mod ordering_of_units {
    use super::*;

    #[test]
    fn months_before_days() {
        // January 31st plus a month and a day: the month lands on the
        // clamped February 28th first, and only then does the day move.
        let date = ymd(2021, Month::January, 31);
        let duration = Duration { months: 1, days: 1, ..Duration::zero() };

        let result = date.checked_add(&duration, Overflow::Constrain).unwrap();
        assert_eq!(result, ymd(2021, Month::March, 1));
    }

    #[test]
    fn mixed_signs() {
        let date = ymd(2021, Month::January, 31);
        let duration = Duration { months: 1, days: -1, ..Duration::zero() };

        let result = date.checked_add(&duration, Overflow::Constrain).unwrap();
        assert_eq!(result, ymd(2021, Month::February, 27));
    }

    #[test]
    fn weeks_are_seven_days() {
        let date = ymd(2021, Month::June, 15);
        assert_eq!(date.checked_add(&Duration::of_weeks(2), Overflow::Reject),
                   date.checked_add(&Duration::of_days(14), Overflow::Reject));
    }
}

mod clock_units {
    use super::*;

    #[test]
    fn hours_carry_across_midnight() {
        let date = PlainDateTime::new(2021, Month::December, 31, 23, 0, 0, 0, 0, 0).unwrap();
        let result = date.checked_add(&Duration::of_hours(2), Overflow::Reject).unwrap();
        assert_eq!(result, PlainDateTime::new(2022, Month::January, 1, 1, 0, 0, 0, 0, 0).unwrap());
    }

    #[test]
    fn a_nanosecond_across_midnight() {
        let date = PlainDateTime::new(2021, Month::June, 15, 23, 59, 59, 999, 999, 999).unwrap();
        let duration = Duration { nanoseconds: 1, ..Duration::zero() };

        let result = date.checked_add(&duration, Overflow::Reject).unwrap();
        assert_eq!(result, ymd(2021, Month::June, 16));
    }

    #[test]
    fn backwards_past_midnight() {
        let date = ymd(2021, Month::June, 16);
        let duration = Duration { nanoseconds: 1, ..Duration::zero() };

        let result = date.checked_sub(&duration, Overflow::Reject).unwrap();
        assert_eq!(result, PlainDateTime::new(2021, Month::June, 15, 23, 59, 59, 999, 999, 999).unwrap());
    }
}

mod operators {
    use super::*;

    #[test]
    fn add_and_subtract() {
        let date = ymd(2021, Month::June, 15);
        assert_eq!(date + Duration::of_days(1), ymd(2021, Month::June, 16));
        assert_eq!(date - Duration::of_days(15), ymd(2021, Month::May, 31));
    }

    #[test]
    fn operators_constrain() {
        let date = ymd(2021, Month::January, 31);
        assert_eq!(date + Duration::of_months(1), ymd(2021, Month::February, 28));
    }
}

mod range {
    use super::*;

    #[test]
    fn results_stay_in_range() {
        let date = ymd(1_000_000, Month::December, 31);
        assert_eq!(date.checked_add(&Duration::of_days(1), Overflow::Reject),
                   Err(Error::OutOfRange("year")));
        assert_eq!(date.checked_add(&Duration::of_years(1), Overflow::Reject),
                   Err(Error::OutOfRange("year")));

        let date = ymd(-1_000_000, Month::January, 1);
        assert_eq!(date.checked_sub(&Duration::of_days(1), Overflow::Reject),
                   Err(Error::OutOfRange("year")));
    }

    #[test]
    fn absurd_durations_fail_cleanly() {
        let date = ymd(2021, Month::June, 15);
        let duration = Duration { hours: i64::MAX, ..Duration::zero() };
        assert_eq!(date.checked_add(&duration, Overflow::Reject),
                   Err(Error::OutOfRange("duration")));

        let duration = Duration { months: i64::MAX, ..Duration::zero() };
        assert_eq!(date.checked_add(&duration, Overflow::Reject),
                   Err(Error::OutOfRange("duration")));
        assert!(date.checked_sub(&duration, Overflow::Reject).is_err());
    }
}
