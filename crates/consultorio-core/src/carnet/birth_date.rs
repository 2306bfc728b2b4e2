//! Birth date decoding with the century rule and future-date repair.

use chrono::NaiveDate;

use super::{CarnetError, CarnetResult, Century, ParsedIdentityFields};

/// Decode the birth date encoded in a carnet, as of `today`.
///
/// Returns `None` for an absent carnet and for every carnet that does not
/// decode to a real date on or before `today`. Use [`try_parse_birth_date`]
/// to learn why a carnet was rejected.
pub fn parse_birth_date(raw: Option<&str>, today: NaiveDate) -> Option<NaiveDate> {
    let raw = raw?;
    match try_parse_birth_date(raw, today) {
        Ok(date) => Some(date),
        Err(e) => {
            log::debug!("No birth date derived from carnet: {}", e);
            None
        }
    }
}

/// Decode the birth date encoded in a carnet, keeping the rejection reason.
///
/// Digits 0-5 in the seventh position select the 1900s, 6-9 the 2000s. When a
/// 2000s date would lie after `today` the 1900s reading is tried instead. A
/// 1900s date that lies in the future is rejected outright.
pub fn try_parse_birth_date(raw: &str, today: NaiveDate) -> CarnetResult<NaiveDate> {
    let fields = ParsedIdentityFields::parse(raw)?;
    log::trace!("Decoded carnet fields: {:?}", fields);

    let century = fields.century();
    let date = build_date(&fields, century)?;
    if date <= today {
        return Ok(date);
    }

    if century == Century::Twentieth {
        let alternate = build_date(&fields, Century::Nineteenth)?;
        if alternate <= today {
            log::debug!(
                "Carnet date {} is after {}, using {} instead",
                date,
                today,
                alternate
            );
            return Ok(alternate);
        }
    }

    Err(CarnetError::FutureDate(date))
}

/// Same as [`parse_birth_date`] with today's local date.
pub fn parse_birth_date_today(raw: Option<&str>) -> Option<NaiveDate> {
    parse_birth_date(raw, super::local_today())
}

fn build_date(fields: &ParsedIdentityFields, century: Century) -> CarnetResult<NaiveDate> {
    let year = fields.year_in(century);
    NaiveDate::from_ymd_opt(year, fields.month, fields.day).ok_or(
        CarnetError::InvalidCalendarDate {
            year,
            month: fields.month,
            day: fields.day,
        },
    )
}
