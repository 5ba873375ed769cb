use civiltime::{Date, Month, PlainDateTime, ISO};

mod datetimes {
    use super::*;

    #[test]
    fn recently() {
        let datetime = PlainDateTime::ymd(1600, Month::February, 28).unwrap();
        assert_eq!(datetime.iso().to_string(), "1600-02-28T00:00:00");
    }

    #[test]
    fn just_then() {
        let datetime = PlainDateTime::ymd(-753, Month::December, 1).unwrap();
        assert_eq!(datetime.iso().to_string(), "-0753-12-01T00:00:00");
    }

    #[test]
    fn far_far_future() {
        let datetime = PlainDateTime::ymd(10_601, Month::January, 31).unwrap();
        assert_eq!(datetime.iso().to_string(), "+10601-01-31T00:00:00");
    }

    #[test]
    fn ascending() {
        let datetime = PlainDateTime::new(2009, Month::February, 13, 23, 31, 30, 0, 0, 0).unwrap();
        assert_eq!(datetime.iso().to_string(), "2009-02-13T23:31:30");
    }

    #[test]
    fn fractions_trim_their_zeros() {
        let datetime = PlainDateTime::new(1976, Month::February, 2, 12, 34, 56, 456, 0, 0).unwrap();
        assert_eq!(datetime.iso().to_string(), "1976-02-02T12:34:56.456");

        let datetime = PlainDateTime::new(1976, Month::February, 2, 12, 34, 56, 400, 0, 0).unwrap();
        assert_eq!(datetime.iso().to_string(), "1976-02-02T12:34:56.4");

        let datetime = PlainDateTime::new(1976, Month::February, 2, 12, 34, 56, 0, 0, 1).unwrap();
        assert_eq!(datetime.iso().to_string(), "1976-02-02T12:34:56.000000001");

        let datetime = PlainDateTime::new(1976, Month::February, 2, 12, 34, 56, 123, 456, 789).unwrap();
        assert_eq!(datetime.iso().to_string(), "1976-02-02T12:34:56.123456789");
    }

    #[test]
    fn round_trips_through_text() {
        for text in ["2009-02-13T23:31:30", "1600-02-29T00:00:00",
                     "-0753-12-01T08:00:01.5", "+10601-01-31T23:59:59.999999999"] {
            let datetime = text.parse::<PlainDateTime>().unwrap();
            assert_eq!(datetime.iso().to_string(), text);
        }
    }
}

mod dates {
    use super::*;

    #[test]
    fn millisecond_gets_three_digits() {
        let date = Date::at_ms(1_231_231_231_020);
        assert_eq!(date.iso().to_string(), "2009-01-06T08:40:31.020Z");
    }

    #[test]
    fn whole_second_omits_the_fraction() {
        let date = Date::at_ms(1_231_231_231_000);
        assert_eq!(date.iso().to_string(), "2009-01-06T08:40:31Z");
    }

    #[test]
    fn epoch() {
        assert_eq!(Date::at_ms(0).iso().to_string(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn six_digit_year() {
        let date = Date::at_ms(3_935_689_963_545_198);
        assert_eq!(date.iso().to_string(), "+126687-01-19T04:05:45.198Z");
    }
}

mod debugging {
    use super::*;

    #[test]
    fn debug_wraps_the_iso_form() {
        let datetime = PlainDateTime::new(2009, Month::February, 13, 23, 31, 30, 0, 0, 0).unwrap();
        assert_eq!(format!("{:?}", datetime), "PlainDateTime(2009-02-13T23:31:30)");

        let date = Date::at_ms(1_231_231_231_020);
        assert_eq!(format!("{:?}", date), "Date(2009-01-06T08:40:31.020Z)");
    }

    #[test]
    fn display_is_the_iso_form() {
        let date = Date::at_ms(0);
        assert_eq!(date.to_string(), date.iso().to_string());
    }
}
