//! The proleptic-Gregorian day-count core: exact conversions between
//! civil fields and linear counts of days, milliseconds, and
//! nanoseconds since midnight on 1st January, 1970.
//!
//! Everything here is plain integer arithmetic with floored division,
//! so the same code handles dates before 1970 and before year zero.

use crate::cal::unit::{Month, Weekday, Year};
use crate::util::split_cycles;


pub(crate) const MILLIS_IN_SECOND: i64 = 1_000;
pub(crate) const MILLIS_IN_MINUTE: i64 = 60 * MILLIS_IN_SECOND;
pub(crate) const MILLIS_IN_HOUR:   i64 = 60 * MILLIS_IN_MINUTE;
pub(crate) const MILLIS_IN_DAY:    i64 = 24 * MILLIS_IN_HOUR;

pub(crate) const NANOS_IN_MICRO:  i64 = 1_000;
pub(crate) const NANOS_IN_MILLI:  i64 = 1_000_000;
pub(crate) const NANOS_IN_SECOND: i64 = 1_000_000_000;
pub(crate) const NANOS_IN_MINUTE: i64 = 60 * NANOS_IN_SECOND;
pub(crate) const NANOS_IN_HOUR:   i64 = 60 * NANOS_IN_MINUTE;
pub(crate) const NANOS_IN_DAY:    i64 = 24 * NANOS_IN_HOUR;

/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y: i64 = 4 * 365 + 1;

/// Number of days guaranteed to be in a century.
const DAYS_IN_100Y: i64 = 25 * DAYS_IN_4Y - 1;

/// Number of days guaranteed to be in four centuries.
const DAYS_IN_400Y: i64 = 4 * DAYS_IN_100Y + 1;

/// Number of days between  **1st January, 1970** and **1st March, 2000**.
///
/// This might seem like an odd number to calculate dates from, but it
/// means that the various divisions that follow can all start from a
/// day right after a possible leap day, at the beginning of one of the
/// 400-year cycles the Gregorian calendar repeats itself in.
const EPOCH_DIFFERENCE: i64 = 30 * 365 + 7 + 31 + 29;

/// Number of days between 1st March, year 0 and 1st January, 1970.
const DAYS_TO_UNIX_EPOCH: i64 = 719_468;

/// This rather strange triangle is an array of the number of days elapsed
/// at the end of each month, starting at the beginning of March (the first
/// month after the EPOCH above), going backwards, ignoring February.
const TIME_TRIANGLE: &[i64; 11] =
    &[31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31 + 31,  // January
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,  // December
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,  // November
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,  // October
      31 + 30 + 31 + 30 + 31 + 31 + 30,  // September
      31 + 30 + 31 + 30 + 31 + 31,  // August
      31 + 30 + 31 + 30 + 31,  // July
      31 + 30 + 31 + 30,  // June
      31 + 30 + 31,  // May
      31 + 30,  // April
      31]; // March


/// The civil fields of one calendar day, along with the derived pieces
/// that fall out of the conversion for free.
#[derive(PartialEq, Debug, Copy, Clone)]
pub(crate) struct CivilDay {
    pub year:    i64,
    pub month:   Month,
    pub day:     i8,
    pub yearday: i16,
    pub weekday: Weekday,
}

/// The civil fields of one exact sub-second moment.
#[derive(PartialEq, Debug, Copy, Clone)]
pub(crate) struct CivilInstant {
    pub date:        CivilDay,
    pub hour:        i8,
    pub minute:      i8,
    pub second:      i8,
    pub millisecond: i16,
    pub microsecond: i16,
    pub nanosecond:  i16,
}


/// Computes the number of days since the Unix epoch for the given civil
/// date, which does not need to be in range: a ‘32nd of January’ means
/// the day after the 31st, and a zeroth day means the day before the
/// first. That property is what the normalising setters lean on.
///
/// This is the closed-form civil-to-days calculation: the year is
/// shifted to start in March so any leap day lands at the very end,
/// then whole 400-year eras are split off, and the leap rule collapses
/// into two divisions on the year-of-era.
pub(crate) fn days_from_ymd(year: i64, month: Month, day: i64) -> i64 {
    let month_number = month.months_from_january() as i64 + 1;
    let year = if month_number <= 2 { year - 1 } else { year };

    let (era, year_of_era) = split_cycles(year, 400);

    let month_shifted = if month_number > 2 { month_number - 3 }
                                       else { month_number + 9 };
    let day_of_year = (153 * month_shifted + 2) / 5 + (day - 1);
    let day_of_era  = year_of_era * 365 + year_of_era / 4 - year_of_era / 100
                    + day_of_year;

    era * DAYS_IN_400Y + day_of_era - DAYS_TO_UNIX_EPOCH
}


/// Computes the civil date for the given number of days since the Unix
/// epoch, by walking down the 400-year, 100-year, and 4-year cycles of
/// the Gregorian calendar and then scanning the month triangle.
pub(crate) fn from_days_since_epoch(days_since_epoch: i64) -> CivilDay {
    let weekday = weekday_from_days(days_since_epoch);

    // Work from the 1st of March, 2000: the start of a 400-year cycle.
    let days = days_since_epoch - EPOCH_DIFFERENCE;

    // Calculate the numbers of 400-year cycles, 100-year cycles, and
    // 4-year cycles, and the number of whole years, with the remaining
    // number of days being left over. The counts below the 400-year
    // level are clamped so that the final day of a cycle, which is a
    // leap day, stays inside the cycle it ends instead of starting the
    // next one.
    let (num_400y_cycles, mut remainder) = split_cycles(days, DAYS_IN_400Y);

    let num_100y_cycles = std::cmp::min(remainder / DAYS_IN_100Y, 3);
    remainder -= num_100y_cycles * DAYS_IN_100Y;

    let num_4y_cycles = std::cmp::min(remainder / DAYS_IN_4Y, 24);
    remainder -= num_4y_cycles * DAYS_IN_4Y;

    let mut years = std::cmp::min(remainder / 365, 3);
    remainder -= years * 365;

    // A year starting on the 1st of March contains a leap day iff the
    // February it runs into is a leap February: the first year of a
    // 4-year cycle, except at the start of a non-leap century.
    let days_this_year =
        if years == 0 && !(num_4y_cycles == 0 && num_100y_cycles != 0) { 366 }
                                                                 else { 365 };

    // The remainder is the day-of-year in a March-based year; convert
    // it to the day of the ordinary January-based year it falls in.
    // There are 306 days from the 1st of March to the end of December.
    let mut day_of_year = remainder + days_this_year - 306;
    if day_of_year >= days_this_year {
        day_of_year -= days_this_year;
    }

    years += 4 * num_4y_cycles + 100 * num_100y_cycles + 400 * num_400y_cycles;

    // Find out which month the days left over correspond to, by
    // walking down the time triangle.
    let result = TIME_TRIANGLE.iter()
                              .enumerate()
                              .find(|&(_, days)| *days <= remainder);

    let (mut month, month_days) = match result {
        Some((index, days)) => (11 - index as i64, remainder - *days),
        None                => (0, remainder),  // below every entry: March
    };

    // The month value is March-based; moving it two months forward
    // makes it January-based, and may carry into the next year.
    month += 2;
    if month >= 12 {
        years += 1;
        month -= 12;
    }

    CivilDay {
        year:    years + 2000,

        // These unwraps are safe, as the month has just been wrapped
        // into 0..12, and the number of days left over is less than
        // the length of the month the triangle scan picked.
        month:   Month::from_zero(month as i8).unwrap(),
        day:     (month_days + 1) as i8,

        yearday: (day_of_year + 1) as i16,
        weekday,
    }
}


/// Computes the weekday for the given number of days since the Unix
/// epoch, which is a modulo-7 question that doesn’t need any of the
/// calendar cycle machinery.
pub(crate) fn weekday_from_days(days_since_epoch: i64) -> Weekday {
    // 1st January, 1970 was a Thursday.
    let (_, weekday) = split_cycles(days_since_epoch + 4, 7);

    // This unwrap is safe, as the number has just been wrapped into 0..7.
    Weekday::from_zero(weekday as i8).unwrap()
}


/// Computes the day of the year, from 1 to 366, for a civil date that
/// is already known to be valid.
pub(crate) fn day_of_year(year: i64, month: Month, day: i8) -> i16 {
    let mut yearday = month.days_before_start() + day as i16;
    if Year(year).is_leap_year() && month >= Month::March {
        yearday += 1;
    }
    yearday
}


/// Computes the ISO-8601 week number, from 1 to 53, for a civil date
/// that is already known to be valid.
///
/// Week 1 is the week containing the year’s first Thursday, so the
/// first few days of January can belong to the last week of the
/// previous year, and the last few days of December to week 1 of the
/// next one.
pub(crate) fn week_of_year(year: i64, month: Month, day: i8) -> i8 {
    let yearday = day_of_year(year, month, day) as i64;
    let weekday = weekday_from_days(days_from_ymd(year, month, day as i64))
                      .days_from_monday_as_one() as i64;

    let week = (yearday - weekday + 10) / 7;

    if week < 1 {
        Year(year - 1).weeks_in_year()
    }
    else if week > Year(year).weeks_in_year() as i64 {
        1
    }
    else {
        week as i8
    }
}


/// Packs civil fields into a count of milliseconds since the Unix
/// epoch. The fields do not need to be in range; out-of-range values
/// flow through `days_from_ymd` and the plain multiplications below,
/// and simply normalise.
pub(crate) fn millis_from_fields(year: i64, month: Month, day: i64,
                                 hour: i64, minute: i64, second: i64,
                                 millisecond: i64) -> i64 {
    days_from_ymd(year, month, day) * MILLIS_IN_DAY
        + hour   * MILLIS_IN_HOUR
        + minute * MILLIS_IN_MINUTE
        + second * MILLIS_IN_SECOND
        + millisecond
}


/// Packs civil fields into a count of milliseconds since the Unix
/// epoch, carrying the arithmetic out in `i128` and clamping the result
/// to the `i64` range. The normalising setters go through this, so a
/// written field can be any `i64` at all; a moment past either end of
/// the range saturates to the nearest representable count.
pub(crate) fn saturating_millis_from_fields(year: i64, month: Month, day: i64,
                                            hour: i64, minute: i64, second: i64,
                                            millisecond: i64) -> i64 {
    let month_number = month.months_from_january() as i128 + 1;
    let year = year as i128 - if month_number <= 2 { 1 } else { 0 };

    let era = year.div_euclid(400);
    let year_of_era = year.rem_euclid(400);

    let month_shifted = if month_number > 2 { month_number - 3 }
                                       else { month_number + 9 };
    let day_of_year = (153 * month_shifted + 2) / 5 + (day as i128 - 1);
    let day_of_era  = year_of_era * 365 + year_of_era / 4 - year_of_era / 100
                    + day_of_year;
    let days = era * DAYS_IN_400Y as i128 + day_of_era
             - DAYS_TO_UNIX_EPOCH as i128;

    let millis = days * MILLIS_IN_DAY as i128
        + hour        as i128 * MILLIS_IN_HOUR   as i128
        + minute      as i128 * MILLIS_IN_MINUTE as i128
        + second      as i128 * MILLIS_IN_SECOND as i128
        + millisecond as i128;

    millis.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}


/// Unpacks a count of milliseconds since the Unix epoch into civil
/// fields. Total for any input: every `i64` corresponds to some civil
/// moment, even the extremes.
pub(crate) fn fields_from_millis(millis: i64) -> CivilInstant {
    let (days, millis_of_day) = split_cycles(millis, MILLIS_IN_DAY);

    CivilInstant {
        date:        from_days_since_epoch(days),
        hour:        (millis_of_day / MILLIS_IN_HOUR)         as i8,
        minute:      (millis_of_day / MILLIS_IN_MINUTE % 60)  as i8,
        second:      (millis_of_day / MILLIS_IN_SECOND % 60)  as i8,
        millisecond: (millis_of_day % 1_000)                  as i16,
        microsecond: 0,
        nanosecond:  0,
    }
}


/// Packs the time-of-day fields into a count of nanoseconds since
/// midnight.
pub(crate) fn nanos_of_day(hour: i64, minute: i64, second: i64,
                           millisecond: i64, microsecond: i64,
                           nanosecond: i64) -> i64 {
    hour        * NANOS_IN_HOUR
        + minute      * NANOS_IN_MINUTE
        + second      * NANOS_IN_SECOND
        + millisecond * NANOS_IN_MILLI
        + microsecond * NANOS_IN_MICRO
        + nanosecond
}


/// Packs civil fields into a count of nanoseconds since the Unix epoch,
/// or `None` if the moment falls outside the roughly ±292 years that
/// fit in an `i64` of nanoseconds. The fields must already be in range.
pub(crate) fn nanos_from_fields(year: i64, month: Month, day: i64,
                                hour: i64, minute: i64, second: i64,
                                millisecond: i64, microsecond: i64,
                                nanosecond: i64) -> Option<i64> {
    let days = days_from_ymd(year, month, day);
    let time = nanos_of_day(hour, minute, second,
                            millisecond, microsecond, nanosecond);

    // For negative days, fold one day of the multiplication into the
    // time-of-day term: `days * NANOS_IN_DAY` alone can underflow for
    // moments that are in range once the positive time is added back.
    if days < 0 {
        (days + 1).checked_mul(NANOS_IN_DAY)?
                  .checked_add(time - NANOS_IN_DAY)
    }
    else {
        days.checked_mul(NANOS_IN_DAY)?
            .checked_add(time)
    }
}


/// Unpacks a count of nanoseconds since the Unix epoch into civil
/// fields. Total for any input.
pub(crate) fn fields_from_nanos(nanos: i64) -> CivilInstant {
    let (days, nanos_of_day) = split_cycles(nanos, NANOS_IN_DAY);

    CivilInstant {
        date:        from_days_since_epoch(days),
        hour:        (nanos_of_day / NANOS_IN_HOUR)           as i8,
        minute:      (nanos_of_day / NANOS_IN_MINUTE  % 60)   as i8,
        second:      (nanos_of_day / NANOS_IN_SECOND  % 60)   as i8,
        millisecond: (nanos_of_day / NANOS_IN_MILLI % 1_000)  as i16,
        microsecond: (nanos_of_day / NANOS_IN_MICRO % 1_000)  as i16,
        nanosecond:  (nanos_of_day % 1_000)                   as i16,
    }
}
