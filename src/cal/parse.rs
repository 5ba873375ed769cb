//! Parsing ISO-8601 text into civil values.
//!
//! The accepted grammar is deliberately a little laxer than strict
//! ISO-8601: months and days may be written with one digit, a space
//! works as the date/time separator alongside `T` and `t`, and a bare
//! two-digit year is read as 19xx. A trailing `Z` is accepted and
//! ignored, as civil values carry no zone.

use std::error::Error as ErrorTrait;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::cal::date::Date;
use crate::cal::datetime::{Error as DateTimeError, PlainDateTime};
use crate::cal::unit::Month;


lazy_static! {

    // The pattern only splits the input into fields; every numeric
    // range check happens on the captured text afterwards, so the
    // error for ‘2001-13-01’ names the month rather than the syntax.
    static ref DATE_TIME_PATTERN: Regex = Regex::new(r"(?x) ^
        (?P<year> [+-]? \d+ )
        - (?P<month> \d{1,2} )
        - (?P<day> \d{1,2} )
        (?: [Tt\x20]
            (?P<hour> \d{1,2} )
            : (?P<minute> \d{1,2} )
            : (?P<second> \d{1,2} )
            (?: \. (?P<fraction> \d+ ) )?
        )?
        [Zz]? $").unwrap();
}


impl FromStr for PlainDateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = split_iso_8601(input)?;

        let month = Month::from_one(fields.month)?;
        let datetime = PlainDateTime::new(fields.year, month, fields.day,
                                          fields.hour, fields.minute,
                                          fields.second, fields.millisecond,
                                          fields.microsecond, fields.nanosecond)?;
        Ok(datetime)
    }
}

impl FromStr for Date {
    type Err = Error;

    // A date is only millisecond-precise, so any micro- or nanosecond
    // digits in the input are dropped by the conversion.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let datetime = input.parse::<PlainDateTime>()?;
        Ok(datetime.to_date())
    }
}


/// The raw field values captured from one ISO-8601 string, after digit
/// expansion but before any range checking.
struct Fields {
    year:        i64,
    month:       i8,
    day:         i8,
    hour:        i8,
    minute:      i8,
    second:      i8,
    millisecond: i16,
    microsecond: i16,
    nanosecond:  i16,
}

fn split_iso_8601(input: &str) -> Result<Fields, Error> {
    let caps = DATE_TIME_PATTERN.captures(input)
        .ok_or_else(|| Error::Syntax(input.to_owned()))?;

    let year_text = &caps["year"];
    let mut year: i64 = year_text.parse()
        .map_err(|_| Error::Syntax(input.to_owned()))?;

    // A bare two-digit year is read against a fixed 1900 offset, so
    // ‘76-04-02’ is 1976-04-02. A signed year is always literal:
    // ‘-76’ means the year -76, and ‘+76’ the year 76.
    if year_text.len() == 2 && !year_text.starts_with(['+', '-']) {
        year += 1900;
    }

    // The sub-second digits are one field in the input, but three in
    // the value: right-pad to nine digits and split. More than nine
    // digits would lose precision silently, so it’s refused instead.
    let (millisecond, microsecond, nanosecond) = match caps.name("fraction") {
        Some(digits) if digits.as_str().len() > 9 => {
            return Err(Error::Syntax(input.to_owned()));
        }
        Some(digits) => {
            let padded = format!("{:0<9}", digits.as_str());
            (number(&padded[0..3]), number(&padded[3..6]), number(&padded[6..9]))
        }
        None => (0, 0, 0),
    };

    Ok(Fields {
        year,
        month: number(&caps["month"]),
        day: number(&caps["day"]),
        hour: caps.name("hour").map_or(0, |m| number(m.as_str())),
        minute: caps.name("minute").map_or(0, |m| number(m.as_str())),
        second: caps.name("second").map_or(0, |m| number(m.as_str())),
        millisecond,
        microsecond,
        nanosecond,
    })
}

// For fields the pattern has already constrained to a few digits, so
// the parse can’t fail.
fn number<T: FromStr>(input: &str) -> T
where T::Err: fmt::Debug {
    input.parse().unwrap()
}


#[derive(PartialEq, Debug, Clone)]
pub enum Error {

    /// The input didn’t have the shape of an ISO-8601 date-time at all.
    Syntax(String),

    /// The shape was right, but one of the fields was out of range.
    Date(DateTimeError),
}

impl From<DateTimeError> for Error {
    fn from(error: DateTimeError) -> Error {
        Error::Date(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax(input)  => write!(f, "not an ISO-8601 date-time: {:?}", input),
            Error::Date(error)    => error.fmt(f),
        }
    }
}

impl ErrorTrait for Error {
    fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        match self {
            Error::Syntax(_)    => None,
            Error::Date(error)  => Some(error),
        }
    }
}
