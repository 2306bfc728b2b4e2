//! Age in whole years.

use chrono::{Datelike, NaiveDate};

/// Age in completed years on `today`.
///
/// `None` when the birth date is unknown or lies after `today`.
pub fn calculate_age(birth_date: Option<NaiveDate>, today: NaiveDate) -> Option<u32> {
    let birth_date = birth_date?;
    if birth_date > today {
        return None;
    }

    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        // Birthday not reached yet this year
        age -= 1;
    }

    u32::try_from(age).ok()
}

/// Same as [`calculate_age`] with today's local date.
pub fn calculate_age_today(birth_date: Option<NaiveDate>) -> Option<u32> {
    calculate_age(birth_date, super::local_today())
}

/// Age for a carnet, skipping the birth date.
pub fn age_from_carnet(raw: Option<&str>, today: NaiveDate) -> Option<u32> {
    calculate_age(super::parse_birth_date(raw, today), today)
}

/// Birth date as shown in patient views: `DD/MM/YYYY`.
pub fn format_birth_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
