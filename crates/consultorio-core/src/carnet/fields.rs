//! Digit cleaning and field decoding for carnet numbers.

use serde::{Deserialize, Serialize};

use super::{CarnetError, CarnetResult};

/// Digits needed to decode a birth date (`YYMMDDC`).
pub const MIN_DIGITS: usize = 7;

/// Century bucket selected by the seventh CI digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Century {
    /// Digits 0-5: born 1900-1999
    Nineteenth,
    /// Digits 6-9: born 2000-2099
    Twentieth,
}

impl Century {
    /// Map a century digit to its bucket.
    pub fn from_digit(digit: u32) -> Self {
        if digit <= 5 {
            Century::Nineteenth
        } else {
            Century::Twentieth
        }
    }

    /// First year of the century.
    pub fn base_year(self) -> i32 {
        match self {
            Century::Nineteenth => 1900,
            Century::Twentieth => 2000,
        }
    }
}

/// Fields decoded from the first seven digits of a carnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedIdentityFields {
    /// Two-digit year (0-99)
    pub year_digits: u32,
    /// Month (1-12)
    pub month: u32,
    /// Day (1-31)
    pub day: u32,
    /// Seventh digit (0-9)
    pub century_digit: u32,
}

impl ParsedIdentityFields {
    /// Decode fields from raw carnet text.
    ///
    /// Non-digit characters (spaces, dashes) are ignored and anything past the
    /// seventh digit (the serial) is not looked at. Month and day are range
    /// checked; whether the day exists in that month is left to date construction.
    pub fn parse(raw: &str) -> CarnetResult<Self> {
        let digits = clean_digits(raw);
        if digits.len() < MIN_DIGITS {
            return Err(CarnetError::TooFewDigits {
                found: digits.len(),
            });
        }

        let fields = Self {
            year_digits: digits[0] * 10 + digits[1],
            month: digits[2] * 10 + digits[3],
            day: digits[4] * 10 + digits[5],
            century_digit: digits[6],
        };

        if !(1..=12).contains(&fields.month) {
            return Err(CarnetError::MonthOutOfRange(fields.month));
        }
        if !(1..=31).contains(&fields.day) {
            return Err(CarnetError::DayOutOfRange(fields.day));
        }

        Ok(fields)
    }

    /// Century bucket for the seventh digit.
    pub fn century(&self) -> Century {
        Century::from_digit(self.century_digit)
    }

    /// Full year under the given century.
    pub fn year_in(&self, century: Century) -> i32 {
        century.base_year() + self.year_digits as i32
    }
}

/// Strip everything but ASCII digits, returning their numeric values.
pub fn clean_digits(raw: &str) -> Vec<u32> {
    raw.chars()
        .filter(char::is_ascii_digit)
        .filter_map(|c| c.to_digit(10))
        .collect()
}
