//! The coarse date-time value: one millisecond count, field views over
//! it, and setters that normalise instead of failing.

use crate::cal::gregorian::{self, CivilInstant};
use crate::cal::unit::{Month, Weekday};
use crate::cal::{DatePiece, TimePiece};


/// A **date** is an exact millisecond on the timeline, stored as a
/// signed count of milliseconds since midnight, 1st January, 1970.
///
/// Unlike `PlainDateTime`, which stores fields and validates them, a
/// `Date` stores only the linear count, derives its fields on demand,
/// and accepts *any* `i64` count. Its setters follow suit: writing an
/// out-of-range field doesn’t fail, it rolls into the neighbouring
/// fields, so setting the day to zero means the last day of the
/// previous month.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Date {
    millis: i64,
}

impl Date {

    /// Creates a new date at the given number of milliseconds since the
    /// Unix epoch.
    pub fn at_ms(millis: i64) -> Date {
        Date { millis }
    }

    /// The number of milliseconds since the Unix epoch.
    pub fn epoch_milliseconds(&self) -> i64 {
        self.millis
    }

    /// The month as a **zero-based** index, with January as 0 and
    /// December as 11. This is the numbering the setters use too; the
    /// `DatePiece::month` view is one-based like everything else.
    pub fn month_index(&self) -> i8 {
        self.fields().date.month.months_from_january() as i8
    }

    /// Replaces the year, keeping the other fields.
    pub fn set_year(&mut self, year: i64) {
        let f = self.fields();
        self.rebuild(year, f.date.month.months_from_january() as i64,
                     f.date.day as i64, f.hour as i64, f.minute as i64,
                     f.second as i64, f.millisecond as i64);
    }

    /// Replaces the month, as a zero-based index. Out-of-range indices
    /// carry into the year, and a day that doesn’t exist in the new
    /// month rolls into the month after it.
    pub fn set_month_index(&mut self, month_index: i64) {
        let f = self.fields();
        self.rebuild(f.date.year, month_index,
                     f.date.day as i64, f.hour as i64, f.minute as i64,
                     f.second as i64, f.millisecond as i64);
    }

    /// Replaces the day of the month. A zeroth day means the last day
    /// of the previous month; a 32nd of January means the 1st of
    /// February.
    pub fn set_day(&mut self, day: i64) {
        let f = self.fields();
        self.rebuild(f.date.year, f.date.month.months_from_january() as i64,
                     day, f.hour as i64, f.minute as i64,
                     f.second as i64, f.millisecond as i64);
    }

    /// Replaces the hour. Hour 24 means midnight starting the next day.
    pub fn set_hour(&mut self, hour: i64) {
        let f = self.fields();
        self.rebuild(f.date.year, f.date.month.months_from_january() as i64,
                     f.date.day as i64, hour, f.minute as i64,
                     f.second as i64, f.millisecond as i64);
    }

    /// Replaces the minute.
    pub fn set_minute(&mut self, minute: i64) {
        let f = self.fields();
        self.rebuild(f.date.year, f.date.month.months_from_january() as i64,
                     f.date.day as i64, f.hour as i64, minute,
                     f.second as i64, f.millisecond as i64);
    }

    /// Replaces the second.
    pub fn set_second(&mut self, second: i64) {
        let f = self.fields();
        self.rebuild(f.date.year, f.date.month.months_from_january() as i64,
                     f.date.day as i64, f.hour as i64, f.minute as i64,
                     second, f.millisecond as i64);
    }

    /// Replaces the millisecond.
    pub fn set_millisecond(&mut self, millisecond: i64) {
        let f = self.fields();
        self.rebuild(f.date.year, f.date.month.months_from_january() as i64,
                     f.date.day as i64, f.hour as i64, f.minute as i64,
                     f.second as i64, millisecond);
    }

    fn fields(&self) -> CivilInstant {
        gregorian::fields_from_millis(self.millis)
    }

    /// Re-packs a full field set into the stored count. The month index
    /// is wrapped into the year here; every other out-of-range field
    /// normalises through the day-count arithmetic itself. A rebuilt
    /// count past either end of the `i64` range saturates to the
    /// nearest representable moment.
    fn rebuild(&mut self, year: i64, month_index: i64, day: i64,
               hour: i64, minute: i64, second: i64, millisecond: i64) {
        let (carried_years, month_index) =
            crate::util::split_cycles(month_index, 12);

        // This unwrap is safe, as the index has just been wrapped into 0..12.
        let month = Month::from_zero(month_index as i8).unwrap();

        self.millis = gregorian::saturating_millis_from_fields(
            year.saturating_add(carried_years), month, day,
            hour, minute, second, millisecond);
    }
}


impl DatePiece for Date {
    fn year(&self) -> i64 { self.fields().date.year }
    fn month(&self) -> Month { self.fields().date.month }
    fn day(&self) -> i8 { self.fields().date.day }
    fn yearday(&self) -> i16 { self.fields().date.yearday }
    fn weekday(&self) -> Weekday { self.fields().date.weekday }
}

impl TimePiece for Date {
    fn hour(&self) -> i8 { self.fields().hour }
    fn minute(&self) -> i8 { self.fields().minute }
    fn second(&self) -> i8 { self.fields().second }
    fn millisecond(&self) -> i16 { self.fields().millisecond }

    // The count is only millisecond-precise.
    fn microsecond(&self) -> i16 { 0 }
    fn nanosecond(&self) -> i16 { 0 }
}
