//! Signed deltas of calendar and clock units.

use std::ops::{Add, Mul, Neg};


/// A **duration** is a signed delta to apply to a civil value: a count
/// of calendar units (years down to days) and clock units (hours down to
/// nanoseconds). Each component keeps its own sign, so `{ months: 1,
/// days: -1 }` means “forward a month, then back a day”.
///
/// A duration is a bag of components, not a normalized span: there is no
/// fixed number of days in a month, so the components only acquire a
/// concrete length when applied to a date.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Duration {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
    pub microseconds: i64,
    pub nanoseconds: i64,
}

impl Duration {

    /// Create a new zero-length duration.
    pub fn zero() -> Duration {
        Duration::default()
    }

    /// Create a new duration that’s the given number of years long.
    pub fn of_years(years: i64) -> Duration {
        Duration { years, ..Duration::zero() }
    }

    /// Create a new duration that’s the given number of months long.
    pub fn of_months(months: i64) -> Duration {
        Duration { months, ..Duration::zero() }
    }

    /// Create a new duration that’s the given number of weeks long.
    pub fn of_weeks(weeks: i64) -> Duration {
        Duration { weeks, ..Duration::zero() }
    }

    /// Create a new duration that’s the given number of days long.
    pub fn of_days(days: i64) -> Duration {
        Duration { days, ..Duration::zero() }
    }

    /// Create a new duration that’s the given number of hours long.
    pub fn of_hours(hours: i64) -> Duration {
        Duration { hours, ..Duration::zero() }
    }

    /// Create a new duration that’s the given number of minutes long.
    pub fn of_minutes(minutes: i64) -> Duration {
        Duration { minutes, ..Duration::zero() }
    }

    /// Create a new duration that’s the given number of seconds long.
    pub fn of_seconds(seconds: i64) -> Duration {
        Duration { seconds, ..Duration::zero() }
    }

    /// Returns whether every component of this duration is zero.
    pub fn is_zero(&self) -> bool {
        *self == Duration::zero()
    }
}

impl Neg for Duration {
    type Output = Duration;

    /// Negate every component. Applying `-d` exactly undoes applying
    /// `d` only for pure day-and-smaller durations; month arithmetic
    /// is not reversible in general.
    fn neg(self) -> Duration {
        Duration {
            years:        -self.years,
            months:       -self.months,
            weeks:        -self.weeks,
            days:         -self.days,
            hours:        -self.hours,
            minutes:      -self.minutes,
            seconds:      -self.seconds,
            milliseconds: -self.milliseconds,
            microseconds: -self.microseconds,
            nanoseconds:  -self.nanoseconds,
        }
    }
}

impl Add<Duration> for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration {
            years:        self.years        + rhs.years,
            months:       self.months       + rhs.months,
            weeks:        self.weeks        + rhs.weeks,
            days:         self.days         + rhs.days,
            hours:        self.hours        + rhs.hours,
            minutes:      self.minutes      + rhs.minutes,
            seconds:      self.seconds      + rhs.seconds,
            milliseconds: self.milliseconds + rhs.milliseconds,
            microseconds: self.microseconds + rhs.microseconds,
            nanoseconds:  self.nanoseconds  + rhs.nanoseconds,
        }
    }
}

impl Mul<i64> for Duration {
    type Output = Duration;

    fn mul(self, amount: i64) -> Duration {
        Duration {
            years:        self.years        * amount,
            months:       self.months       * amount,
            weeks:        self.weeks        * amount,
            days:         self.days         * amount,
            hours:        self.hours        * amount,
            minutes:      self.minutes      * amount,
            seconds:      self.seconds      * amount,
            milliseconds: self.milliseconds * amount,
            microseconds: self.microseconds * amount,
            nanoseconds:  self.nanoseconds  * amount,
        }
    }
}
