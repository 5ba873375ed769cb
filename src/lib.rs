#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Library for civil date and time values: calendar fields, linear
//! epoch counts, ISO-8601 text, and calendar-aware arithmetic, all on
//! the proleptic Gregorian calendar with no time zones in sight.
//!
//! # Examples
//!
//! ```
//! use civiltime::{Duration, Month, Overflow, PlainDateTime, DatePiece, ISO};
//!
//! let datetime = "2015-06-26T14:30:00".parse::<PlainDateTime>().unwrap();
//! assert_eq!(datetime.month(), Month::June);
//!
//! let later = datetime.checked_add(&Duration::of_months(1), Overflow::Constrain).unwrap();
//! assert_eq!(later.iso().to_string(), "2015-07-26T14:30:00");
//! ```

pub mod cal;
pub mod duration;
mod util;

pub use crate::cal::{Date, DatePiece, DateTimeLike, Error, ISO, Month,
                     Overflow, PlainDateTime, TimePiece, Weekday, Year};
pub use crate::cal::datetime::{MAX_YEAR, MIN_YEAR};
pub use crate::duration::Duration;
