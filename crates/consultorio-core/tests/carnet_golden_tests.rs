//! Golden tests for carnet birth date derivation.
//!
//! Every case pins its reference date so the century fallback and the age
//! boundaries are reproducible.

use chrono::NaiveDate;
use consultorio_core::carnet::{derive_birth_info, parse_birth_date, BirthInfo};

/// Test case from golden file.
struct GoldenCase {
    id: &'static str,
    carnet: Option<&'static str>,
    today: (i32, u32, u32),
    expected_birth_date: Option<(i32, u32, u32)>,
    expected_age: Option<u32>,
}

fn date((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "twentieth-century-basic",
            carnet: Some("03051578964"),
            today: (2024, 6, 1),
            expected_birth_date: Some((2003, 5, 15)),
            expected_age: Some(21),
        },
        GoldenCase {
            id: "twentieth-century-before-birthday",
            carnet: Some("03051578964"),
            today: (2024, 5, 14),
            expected_birth_date: Some((2003, 5, 15)),
            expected_age: Some(20),
        },
        GoldenCase {
            id: "nineteenth-century-basic",
            carnet: Some("85010112345"),
            today: (2024, 6, 1),
            expected_birth_date: Some((1985, 1, 1)),
            expected_age: Some(39),
        },
        GoldenCase {
            id: "seven-digits-only",
            carnet: Some("8501011"),
            today: (2024, 6, 1),
            expected_birth_date: Some((1985, 1, 1)),
            expected_age: Some(39),
        },
        GoldenCase {
            id: "formatted-with-spaces-and-dashes",
            carnet: Some("85-01-01 1 2345"),
            today: (2024, 6, 1),
            expected_birth_date: Some((1985, 1, 1)),
            expected_age: Some(39),
        },
        GoldenCase {
            id: "future-2000s-falls-back-to-1900s",
            carnet: Some("25031061234"),
            today: (2024, 6, 1),
            expected_birth_date: Some((1925, 3, 10)),
            expected_age: Some(99),
        },
        GoldenCase {
            id: "future-fallback-leap-day-missing-in-1900",
            carnet: Some("00022961234"),
            today: (1999, 6, 1),
            expected_birth_date: None,
            expected_age: None,
        },
        GoldenCase {
            id: "future-fallback-still-future",
            carnet: Some("60010161234"),
            today: (1950, 1, 1),
            expected_birth_date: None,
            expected_age: None,
        },
        GoldenCase {
            id: "future-1900s-no-fallback",
            carnet: Some("60010131234"),
            today: (1950, 1, 1),
            expected_birth_date: None,
            expected_age: None,
        },
        GoldenCase {
            id: "february-30",
            carnet: Some("85023012345"),
            today: (2024, 6, 1),
            expected_birth_date: None,
            expected_age: None,
        },
        GoldenCase {
            id: "april-31",
            carnet: Some("01043171234"),
            today: (2024, 6, 1),
            expected_birth_date: None,
            expected_age: None,
        },
        GoldenCase {
            id: "month-13",
            carnet: Some("85130112345"),
            today: (2024, 6, 1),
            expected_birth_date: None,
            expected_age: None,
        },
        GoldenCase {
            id: "day-32",
            carnet: Some("85013212345"),
            today: (2024, 6, 1),
            expected_birth_date: None,
            expected_age: None,
        },
        GoldenCase {
            id: "six-digits",
            carnet: Some("850101"),
            today: (2024, 6, 1),
            expected_birth_date: None,
            expected_age: None,
        },
        GoldenCase {
            id: "empty",
            carnet: Some(""),
            today: (2024, 6, 1),
            expected_birth_date: None,
            expected_age: None,
        },
        GoldenCase {
            id: "absent",
            carnet: None,
            today: (2024, 6, 1),
            expected_birth_date: None,
            expected_age: None,
        },
        GoldenCase {
            id: "letters-only",
            carnet: Some("carnet perdido"),
            today: (2024, 6, 1),
            expected_birth_date: None,
            expected_age: None,
        },
    ]
}

#[test]
fn test_golden_cases() {
    init_logging();

    for case in get_golden_cases() {
        let today = date(case.today);
        let info = derive_birth_info(case.carnet, today);

        assert_eq!(
            info.birth_date,
            case.expected_birth_date.map(date),
            "Case {}: birth date mismatch",
            case.id
        );
        assert_eq!(info.age, case.expected_age, "Case {}: age mismatch", case.id);
        assert_eq!(
            info.age_label,
            case.expected_age.map(|a| format!("{} años", a)),
            "Case {}: label mismatch",
            case.id
        );
    }
}

#[test]
fn test_trailing_serial_ignored() {
    let today = date((2024, 6, 1));
    let short = parse_birth_date(Some("8501011"), today);

    for serial in ["0000", "1234", "9999", "12345678"] {
        let full = format!("8501011{}", serial);
        assert_eq!(
            parse_birth_date(Some(&full), today),
            short,
            "Serial {} should not change the result",
            serial
        );
    }
}

#[test]
fn test_february_30_any_century_digit() {
    let today = date((2024, 6, 1));

    for year in ["00", "50", "85", "99"] {
        for century_digit in 0..=9 {
            let carnet = format!("{}0230{}1234", year, century_digit);
            assert_eq!(
                parse_birth_date(Some(&carnet), today),
                None,
                "Carnet {} should be rejected",
                carnet
            );
        }
    }
}

#[test]
fn test_idempotent_for_fixed_date() {
    let today = date((2024, 6, 1));

    for case in get_golden_cases() {
        let first = derive_birth_info(case.carnet, today);
        let second = derive_birth_info(case.carnet, today);
        assert_eq!(first, second, "Case {}: not idempotent", case.id);
    }
}

#[test]
fn test_age_changes_across_birthday() {
    let before = derive_birth_info(Some("03051578964"), date((2024, 5, 14)));
    let after = derive_birth_info(Some("03051578964"), date((2024, 5, 15)));

    assert_eq!(before.age, Some(20));
    assert_eq!(after.age, Some(21));
    assert_eq!(before.birth_date, after.birth_date);
}

#[test]
fn test_unknown_is_default() {
    let info = derive_birth_info(Some("??"), date((2024, 6, 1)));
    assert_eq!(info, BirthInfo::default());
}
