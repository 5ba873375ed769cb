//! Formatting civil values as ISO-8601 text.

use std::fmt;

use crate::cal::date::Date;
use crate::cal::datetime::PlainDateTime;
use crate::cal::{DatePiece, TimePiece};
use crate::util::RangeExt;


/// Values that have a canonical ISO-8601 rendering.
pub trait ISO: Sized {

    /// Returns an adapter that, when formatted with `{}`, produces the
    /// ISO-8601 form of this value.
    fn iso(&self) -> ISOString<'_, Self> {
        ISOString(self)
    }

    /// Writes the ISO-8601 form to the given formatter.
    fn fmt_iso(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// The display adapter returned by `ISO::iso`.
#[derive(Debug, Clone, Copy)]
pub struct ISOString<'a, T>(&'a T);

impl<'a, T: ISO> fmt::Display for ISOString<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_iso(f)
    }
}


// Both value types share everything down to the seconds; they differ
// only in how the sub-second fields and the suffix are rendered.
fn fmt_date_and_clock<T>(when: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result
where T: DatePiece + TimePiece {
    let year = when.year();

    // Years from 0 to 9999 get the usual four digits; anything outside
    // gets as many digits as it needs, with an explicit sign.
    if year.is_within(0 .. 10_000) {
        write!(f, "{:04}", year)?;
    }
    else {
        write!(f, "{:+05}", year)?;
    }

    write!(f, "-{:02}-{:02}T{:02}:{:02}:{:02}",
           when.month() as i8, when.day(),
           when.hour(), when.minute(), when.second())
}


impl ISO for PlainDateTime {

    // The sub-second fields are printed as one fraction with trailing
    // zeros trimmed, so a 400ms value renders as ‘.4’ and a lone
    // nanosecond as ‘.000000001’. A zero fraction is omitted entirely.
    fn fmt_iso(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_date_and_clock(self, f)?;

        let fraction = self.millisecond() as u32 * 1_000_000
                     + self.microsecond() as u32 * 1_000
                     + self.nanosecond()  as u32;
        if fraction != 0 {
            let digits = format!("{:09}", fraction);
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }

        Ok(())
    }
}

impl ISO for Date {

    // A date prints its fraction as exactly three digits, or not at
    // all when it’s zero, and always carries the `Z` suffix: the count
    // it stores is an exact moment, not a floating civil value.
    fn fmt_iso(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_date_and_clock(self, f)?;

        let millisecond = self.millisecond();
        if millisecond != 0 {
            write!(f, ".{:03}", millisecond)?;
        }

        f.write_str("Z")
    }
}


impl fmt::Display for PlainDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_iso(f)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_iso(f)
    }
}

impl fmt::Debug for PlainDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlainDateTime({})", self.iso())
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({})", self.iso())
    }
}
