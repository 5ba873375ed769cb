use civiltime::Year;

#[test]
fn year_1600() {
    assert!(Year(1600).is_leap_year());
}

#[test]
fn year_1900() {
    assert!(!Year(1900).is_leap_year());
}

#[test]
fn year_1975() {
    assert!(!Year(1975).is_leap_year());
}

#[test]
fn year_1976() {
    assert!(Year(1976).is_leap_year());
}

#[test]
fn year_2000() {
    assert!(Year(2000).is_leap_year());
}

#[test]
fn year_2038() {
    assert!(!Year(2038).is_leap_year());
}

#[test]
fn year_zero() {
    assert!(Year(0).is_leap_year());
}

#[test]
fn year_minus_100() {
    assert!(!Year(-100).is_leap_year());
}

#[test]
fn year_minus_400() {
    assert!(Year(-400).is_leap_year());
}

#[test]
fn day_counts() {
    assert_eq!(Year(2020).days_in_year(), 366);
    assert_eq!(Year(2021).days_in_year(), 365);
}
