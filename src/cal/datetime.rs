//! Plain date-times: the civil value type, its validation, and its
//! calendar arithmetic.

use std::cmp::Ordering;
use std::error::Error as ErrorTrait;
use std::fmt;
use std::ops::{Add, Sub};

use crate::cal::date::Date;
use crate::cal::gregorian::{
    self, NANOS_IN_HOUR, NANOS_IN_MICRO, NANOS_IN_MILLI, NANOS_IN_MINUTE,
    NANOS_IN_SECOND, NANOS_IN_DAY,
};
use crate::cal::unit::{Month, Weekday, Year};
use crate::cal::{DatePiece, TimePiece};
use crate::duration::Duration;
use crate::util::{split_cycles, RangeExt};


/// The largest year a civil value will hold. Like the smallest, it is
/// far beyond the years the day-count calculations are exact for, so
/// the bound exists to keep arithmetic results printable and sane, not
/// to protect the calendar code.
pub const MAX_YEAR: i64 = 1_000_000;

/// The smallest year a civil value will hold.
pub const MIN_YEAR: i64 = -1_000_000;


/// A **plain date-time** is a civil date paired with a wall-clock time
/// of nanosecond precision: no time zone, no offset, just the fields a
/// person would read off a calendar and a clock.
///
/// Values are always in range: the only ways to construct one check
/// their fields first, so any `PlainDateTime` you hold names a real
/// calendar day and a real time of day.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct PlainDateTime {

    // Field order is comparison order: the derived `Ord` walks these
    // top to bottom, which is exactly chronological order for civil
    // fields.
    year:        i64,
    month:       Month,
    day:         i8,
    hour:        i8,
    minute:      i8,
    second:      i8,
    millisecond: i16,
    microsecond: i16,
    nanosecond:  i16,
}


/// How calendar arithmetic should treat a day that doesn’t exist in the
/// month it lands in, such as the 31st of February.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum Overflow {

    /// Clamp the day down to the last day of the month.
    #[default]
    Constrain,

    /// Refuse, and report an error instead.
    Reject,
}


/// A bag of optional civil fields, used to construct a date-time from
/// parts, or to derive one from an existing value with `with`.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct DateTimeLike {
    pub year:        Option<i64>,
    pub month:       Option<Month>,
    pub day:         Option<i8>,
    pub hour:        Option<i8>,
    pub minute:      Option<i8>,
    pub second:      Option<i8>,
    pub millisecond: Option<i16>,
    pub microsecond: Option<i16>,
    pub nanosecond:  Option<i16>,
}


impl PlainDateTime {

    /// Creates a new datetime from all nine of its constituent fields,
    /// or returns an error if any of them are out of range.
    #[allow(clippy::too_many_arguments)]
    pub fn new(year: i64, month: Month, day: i8,
               hour: i8, minute: i8, second: i8,
               millisecond: i16, microsecond: i16, nanosecond: i16)
        -> Result<PlainDateTime, Error>
    {
        if !year.is_within(MIN_YEAR .. MAX_YEAR + 1) {
            return Err(Error::OutOfRange("year"));
        }

        let leap_year = Year(year).is_leap_year();
        if !day.is_within(1 .. month.days_in_month(leap_year) + 1) {
            return Err(Error::OutOfRange("day"));
        }

        if !hour.is_within(0 .. 24)            { return Err(Error::OutOfRange("hour")); }
        if !minute.is_within(0 .. 60)          { return Err(Error::OutOfRange("minute")); }
        if !second.is_within(0 .. 60)          { return Err(Error::OutOfRange("second")); }
        if !millisecond.is_within(0 .. 1_000)  { return Err(Error::OutOfRange("millisecond")); }
        if !microsecond.is_within(0 .. 1_000)  { return Err(Error::OutOfRange("microsecond")); }
        if !nanosecond.is_within(0 .. 1_000)   { return Err(Error::OutOfRange("nanosecond")); }

        Ok(PlainDateTime { year, month, day, hour, minute, second,
                           millisecond, microsecond, nanosecond })
    }

    /// Creates a new datetime at midnight on the given day, or returns
    /// an error if the day is out of range.
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<PlainDateTime, Error> {
        PlainDateTime::new(year, month, day, 0, 0, 0, 0, 0, 0)
    }

    /// Creates a new datetime from a bag of optional fields. The year,
    /// month, and day are required; every time field defaults to zero.
    pub fn from_fields(fields: &DateTimeLike) -> Result<PlainDateTime, Error> {
        let year  = fields.year.ok_or(Error::MissingField("year"))?;
        let month = fields.month.ok_or(Error::MissingField("month"))?;
        let day   = fields.day.ok_or(Error::MissingField("day"))?;

        PlainDateTime::new(year, month, day,
                           fields.hour.unwrap_or(0),
                           fields.minute.unwrap_or(0),
                           fields.second.unwrap_or(0),
                           fields.millisecond.unwrap_or(0),
                           fields.microsecond.unwrap_or(0),
                           fields.nanosecond.unwrap_or(0))
    }

    /// Creates a new datetime by replacing some of this one’s fields,
    /// leaving the ones the bag doesn’t mention alone. The replaced
    /// combination is validated as a whole, so changing just the month
    /// can fail if the current day doesn’t exist in it.
    pub fn with(&self, fields: &DateTimeLike) -> Result<PlainDateTime, Error> {
        PlainDateTime::new(fields.year.unwrap_or(self.year),
                           fields.month.unwrap_or(self.month),
                           fields.day.unwrap_or(self.day),
                           fields.hour.unwrap_or(self.hour),
                           fields.minute.unwrap_or(self.minute),
                           fields.second.unwrap_or(self.second),
                           fields.millisecond.unwrap_or(self.millisecond),
                           fields.microsecond.unwrap_or(self.microsecond),
                           fields.nanosecond.unwrap_or(self.nanosecond))
    }

    /// Computes the datetime for the given number of nanoseconds since
    /// midnight, 1st January, 1970.
    ///
    /// This cannot fail: every `i64` count, which spans roughly the
    /// years 1677 to 2262, lands on a representable civil moment.
    pub fn from_epoch_nanoseconds(nanos: i64) -> PlainDateTime {
        let fields = gregorian::fields_from_nanos(nanos);

        PlainDateTime {
            year:        fields.date.year,
            month:       fields.date.month,
            day:         fields.date.day,
            hour:        fields.hour,
            minute:      fields.minute,
            second:      fields.second,
            millisecond: fields.millisecond,
            microsecond: fields.microsecond,
            nanosecond:  fields.nanosecond,
        }
    }

    /// Computes the number of nanoseconds between midnight, 1st
    /// January, 1970 and this datetime, or an error if the moment falls
    /// outside the span an `i64` of nanoseconds can name.
    pub fn epoch_nanoseconds(&self) -> Result<i64, Error> {
        gregorian::nanos_from_fields(
                self.year, self.month, self.day as i64,
                self.hour as i64, self.minute as i64, self.second as i64,
                self.millisecond as i64, self.microsecond as i64,
                self.nanosecond as i64)
            .ok_or(Error::OutOfRange("epoch nanoseconds"))
    }

    /// Converts this datetime to a millisecond-precision `Date` at the
    /// same civil moment. Microseconds and nanoseconds are dropped.
    pub fn to_date(&self) -> Date {
        Date::at_ms(gregorian::millis_from_fields(
            self.year, self.month, self.day as i64,
            self.hour as i64, self.minute as i64, self.second as i64,
            self.millisecond as i64))
    }

    /// Compares the civil order of two datetimes. This is the same as
    /// the `Ord` instance, just under the name calendar code expects.
    pub fn compare(left: &PlainDateTime, right: &PlainDateTime) -> Ordering {
        left.cmp(right)
    }

    /// Adds a duration to this datetime, returning the resulting
    /// datetime, or an error if it falls out of range.
    ///
    /// Components are applied largest first, and the order is part of
    /// the contract: years, then months, then a day overflow check
    /// under the given policy, then weeks and days, then the clock
    /// units. Month arithmetic isn’t commutative, so applying the same
    /// components in another order can name a different day.
    pub fn checked_add(&self, duration: &Duration, overflow: Overflow)
        -> Result<PlainDateTime, Error>
    {
        let year = self.year.checked_add(duration.years)
                            .ok_or(Error::OutOfRange("year"))?;

        let months = (self.month.months_from_january() as i64)
                         .checked_add(duration.months)
                         .ok_or(Error::OutOfRange("duration"))?;
        let (carried_years, month_index) = split_cycles(months, 12);
        let year = year.checked_add(carried_years)
                       .ok_or(Error::OutOfRange("year"))?;

        // This unwrap is safe, as the index has just been wrapped into 0..12.
        let month = Month::from_zero(month_index as i8).unwrap();

        if !year.is_within(MIN_YEAR .. MAX_YEAR + 1) {
            return Err(Error::OutOfRange("year"));
        }

        // The day survives the year and month steps unchanged unless it
        // no longer exists in the month it landed in.
        let last_day = month.days_in_month(Year(year).is_leap_year());
        let day = if self.day > last_day {
            match overflow {
                Overflow::Constrain => last_day,
                Overflow::Reject    => return Err(Error::OutOfRange("day")),
            }
        }
        else {
            self.day
        };

        // Days and everything below flow through the day count, so they
        // carry across month and year boundaries on their own.
        let day_delta = duration.weeks.checked_mul(7)
                            .and_then(|w| w.checked_add(duration.days))
                            .ok_or(Error::OutOfRange("duration"))?;

        let clock_delta = clock_nanos(duration).ok_or(Error::OutOfRange("duration"))?;
        let clock = gregorian::nanos_of_day(
                self.hour as i64, self.minute as i64, self.second as i64,
                self.millisecond as i64, self.microsecond as i64,
                self.nanosecond as i64)
            .checked_add(clock_delta)
            .ok_or(Error::OutOfRange("duration"))?;
        let (carried_days, clock) = split_cycles(clock, NANOS_IN_DAY);

        let days = gregorian::days_from_ymd(year, month, day as i64)
                       .checked_add(day_delta)
                       .and_then(|days| days.checked_add(carried_days))
                       .ok_or(Error::OutOfRange("duration"))?;

        // Anything this far out can’t pass the year check below, and
        // day counts near the ends of i64 aren’t safe to convert.
        if !days.is_within(-400_000_000 .. 400_000_000) {
            return Err(Error::OutOfRange("year"));
        }

        let date = gregorian::from_days_since_epoch(days);

        if !date.year.is_within(MIN_YEAR .. MAX_YEAR + 1) {
            return Err(Error::OutOfRange("year"));
        }

        Ok(PlainDateTime {
            year:        date.year,
            month:       date.month,
            day:         date.day,
            hour:        (clock / NANOS_IN_HOUR)           as i8,
            minute:      (clock / NANOS_IN_MINUTE  % 60)   as i8,
            second:      (clock / NANOS_IN_SECOND  % 60)   as i8,
            millisecond: (clock / NANOS_IN_MILLI % 1_000)  as i16,
            microsecond: (clock / NANOS_IN_MICRO % 1_000)  as i16,
            nanosecond:  (clock % 1_000)                   as i16,
        })
    }

    /// Subtracts a duration from this datetime. This is addition of the
    /// negated duration, so the components are still applied largest
    /// first: subtracting a month from the 31st of March constrains to
    /// the 28th of February, not backwards from some other day.
    pub fn checked_sub(&self, duration: &Duration, overflow: Overflow)
        -> Result<PlainDateTime, Error>
    {
        self.checked_add(&-*duration, overflow)
    }
}


/// Sums a duration’s sub-day components into nanoseconds, or `None` on
/// overflow.
fn clock_nanos(duration: &Duration) -> Option<i64> {
    let mut nanos = duration.hours.checked_mul(NANOS_IN_HOUR)?;
    nanos = nanos.checked_add(duration.minutes.checked_mul(NANOS_IN_MINUTE)?)?;
    nanos = nanos.checked_add(duration.seconds.checked_mul(NANOS_IN_SECOND)?)?;
    nanos = nanos.checked_add(duration.milliseconds.checked_mul(NANOS_IN_MILLI)?)?;
    nanos = nanos.checked_add(duration.microseconds.checked_mul(NANOS_IN_MICRO)?)?;
    nanos.checked_add(duration.nanoseconds)
}


impl DatePiece for PlainDateTime {
    fn year(&self) -> i64 { self.year }
    fn month(&self) -> Month { self.month }
    fn day(&self) -> i8 { self.day }

    fn yearday(&self) -> i16 {
        gregorian::day_of_year(self.year, self.month, self.day)
    }

    fn weekday(&self) -> Weekday {
        gregorian::weekday_from_days(
            gregorian::days_from_ymd(self.year, self.month, self.day as i64))
    }
}

impl TimePiece for PlainDateTime {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
    fn millisecond(&self) -> i16 { self.millisecond }
    fn microsecond(&self) -> i16 { self.microsecond }
    fn nanosecond(&self) -> i16 { self.nanosecond }
}


// The derived fields below don’t get their own traits: they all fall
// out of the date pieces, and only ever get asked for one at a time.
impl PlainDateTime {

    /// The ISO-8601 week number this datetime’s day falls in, from 1
    /// to 53. The first and last few days of a year can belong to a
    /// week of the neighbouring year.
    pub fn week_of_year(&self) -> i8 {
        gregorian::week_of_year(self.year, self.month, self.day)
    }

    /// The number of days in this datetime’s month.
    pub fn days_in_month(&self) -> i8 {
        self.month.days_in_month(self.in_leap_year())
    }

    /// The number of days in this datetime’s year.
    pub fn days_in_year(&self) -> i16 {
        Year(self.year).days_in_year()
    }

    /// The number of weeks in this datetime’s year, 52 or 53.
    pub fn weeks_in_year(&self) -> i8 {
        Year(self.year).weeks_in_year()
    }

    /// Whether this datetime’s year is a leap year.
    pub fn in_leap_year(&self) -> bool {
        Year(self.year).is_leap_year()
    }

    /// The number of months in a year. Always 12 in this calendar; the
    /// accessor exists so calendar-generic code has something to ask.
    pub fn months_in_year(&self) -> i8 {
        12
    }

    /// The number of days in a week. Always 7.
    pub fn days_in_week(&self) -> i8 {
        7
    }
}


impl Add<Duration> for PlainDateTime {
    type Output = PlainDateTime;

    /// Adds a duration under the `Constrain` policy.
    ///
    /// ### Panics
    ///
    /// Panics if the result falls outside the supported years. Use
    /// `checked_add` for a recoverable version.
    fn add(self, duration: Duration) -> PlainDateTime {
        self.checked_add(&duration, Overflow::Constrain)
            .expect("datetime out of range")
    }
}

impl Sub<Duration> for PlainDateTime {
    type Output = PlainDateTime;

    /// Subtracts a duration under the `Constrain` policy.
    ///
    /// ### Panics
    ///
    /// Panics if the result falls outside the supported years. Use
    /// `checked_sub` for a recoverable version.
    fn sub(self, duration: Duration) -> PlainDateTime {
        self.checked_sub(&duration, Overflow::Constrain)
            .expect("datetime out of range")
    }
}


#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {

    /// A field fell outside its valid range, or a calendar operation
    /// would have pushed it outside under the `Reject` policy.
    OutOfRange(&'static str),

    /// A required field was absent from a `DateTimeLike` bag.
    MissingField(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange(field)    => write!(f, "datetime field ‘{}’ out of range", field),
            Error::MissingField(field)  => write!(f, "datetime field ‘{}’ missing", field),
        }
    }
}

impl ErrorTrait for Error {
}
