//! Field views over raw millisecond counts, including counts far
//! outside the four-digit years.

use civiltime::{Date, DatePiece, Month, TimePiece, Weekday};

fn check(millis: i64,
         year: i64, month: Month, day: i8,
         hour: i8, minute: i8, second: i8, millisecond: i16) {
    let date = Date::at_ms(millis);

    assert_eq!(date.epoch_milliseconds(), millis);
    assert_eq!(date.year(), year);
    assert_eq!(date.month(), month);
    assert_eq!(date.day(), day);
    assert_eq!(date.hour(), hour);
    assert_eq!(date.minute(), minute);
    assert_eq!(date.second(), second);
    assert_eq!(date.millisecond(), millisecond);
}

#[test]
fn epoch() {
    check(0, 1970, Month::January, 1, 0, 0, 0, 0);
}

#[test]
fn recent_past() {
    check(1_231_231_231_020, 2009, Month::January, 6, 8, 40, 31, 20);
}

#[test]
fn before_the_epoch() {
    check(-1_000_000_000_000, 1938, Month::April, 24, 22, 13, 20, 0);
    check(-1, 1969, Month::December, 31, 23, 59, 59, 999);
}

#[test]
fn five_digit_years() {
    check(372_027_318_331_986, 13_759, Month::January, 28, 17, 45, 31, 986);
    check(399_464_523_963_984, 14_628, Month::July, 11, 23, 46, 3, 984);
}

#[test]
fn six_digit_years() {
    check(3_935_689_963_545_198, 126_687, Month::January, 19, 4, 5, 45, 198);
    check(7_899_943_856_218_720, 252_309, Month::April, 4, 8, 56, 58, 720);
    check(7_941_202_527_925_698, 253_616, Month::September, 9, 7, 5, 25, 698);
}

#[test]
fn zero_based_month_view() {
    assert_eq!(Date::at_ms(1_231_231_231_020).month_index(), 0);
    assert_eq!(Date::at_ms(7_899_943_856_218_720).month_index(), 3);
}

#[test]
fn derived_pieces() {
    let date = Date::at_ms(1_231_231_231_020);
    assert_eq!(date.weekday(), Weekday::Tuesday);
    assert_eq!(date.yearday(), 6);
}

#[test]
fn extremes_are_representable() {
    // Every i64 count is some civil moment; none of these may panic.
    let smallest = Date::at_ms(i64::MIN);
    let largest = Date::at_ms(i64::MAX);

    assert!(smallest.year() < largest.year());
    assert_eq!(smallest.epoch_milliseconds(), i64::MIN);
    assert_eq!(largest.epoch_milliseconds(), i64::MAX);
}
