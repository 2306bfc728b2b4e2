//! Carnet de identidad (CI) birth date and age derivation.
//!
//! Pipeline: raw CI text → digit cleaning → field decoding → century rule → future repair → age
//!
//! CI layout is `YYMMDDCSSSS`: two-digit year, month, day, a century digit and a
//! four-digit serial. Only the first seven digits carry meaning here.
//!
//! Every public entry point is total: a number that cannot be read as a valid,
//! non-future birth date yields `None`. [`try_parse_birth_date`] keeps the
//! rejection reason for callers that want it.

mod age;
mod birth_date;
mod deriver;
mod fields;

pub use age::*;
pub use birth_date::*;
pub use deriver::*;
pub use fields::*;

use thiserror::Error;

/// Reasons a carnet cannot be turned into a birth date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarnetError {
    #[error("Carnet has {found} digits, at least 7 are required")]
    TooFewDigits { found: usize },

    #[error("Month out of range: {0}")]
    MonthOutOfRange(u32),

    #[error("Day out of range: {0}")]
    DayOutOfRange(u32),

    #[error("Not a calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },

    #[error("Birth date {0} is after the reference date")]
    FutureDate(chrono::NaiveDate),
}

pub type CarnetResult<T> = Result<T, CarnetError>;

/// The current date on the local clock.
///
/// Only the `*_today` helpers and the FFI surface read the clock; everything
/// else takes the reference date as an argument.
pub fn local_today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
