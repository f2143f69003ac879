mod common;

use int_output::{decimal, grouped};
use rand::Rng;

use crate::common::capture;

#[test]
fn test_i32_grouped() {
    let test_cases: &[(&str, i32, char)] = &[
        ("0", 0, ','),
        ("1", 1, ','),
        ("12", 12, ','),
        ("123", 123, ','),
        ("1,234", 1234, ','),
        ("12,345", 12345, ','),
        ("123,456", 123456, ','),
        ("1,234,567", 1234567, ','),
        ("12,345,678", 12345678, ','),
        ("123,456,789", 123456789, ','),
        ("1,234,567,890", 1234567890, ','),
        ("-1", -1, ','),
        ("-123", -123, ','),
        ("-1,234", -1234, ','),
        ("-123,456", -123456, ','),
        ("-1,234,567,890", -1234567890, ','),
        ("2 147 483 647", i32::MAX, ' '),
        ("-2 147 483 648", i32::MIN, ' '),
    ];

    for (expected, input, separator) in test_cases {
        assert_eq!(
            *expected,
            capture(|s| grouped::write_i32_grouped(*input, *separator, s))
        );
    }
}

#[test]
fn test_i64_grouped() {
    let test_cases: &[(&str, i64, char)] = &[
        ("0", 0, ','),
        ("1,234", 1234, ','),
        ("12,345,678,901", 12345678901, ','),
        ("123,456,789,012", 123456789012, ','),
        ("1,234,567,890,123", 1234567890123, ','),
        ("12,345,678,901,234,567", 12345678901234567, ','),
        ("1,234,567,890,123,456,789", 1234567890123456789, ','),
        ("-12,345,678,901", -12345678901, ','),
        ("-1,234,567,890,123,456,789", -1234567890123456789, ','),
        ("2 147 483 647", i32::MAX as i64, ' '),
        ("-2 147 483 648", i32::MIN as i64, ' '),
        ("9_223_372_036_854_775_807", i64::MAX, '_'),
        ("-9,223,372,036,854,775,808", i64::MIN, ','),
    ];

    for (expected, input, separator) in test_cases {
        assert_eq!(
            *expected,
            capture(|s| grouped::write_i64_grouped(*input, *separator, s))
        );
    }
}

#[test]
fn test_unsigned_grouped() {
    assert_eq!("4,294,967,295", capture(|s| grouped::write_u32_grouped(u32::MAX, ',', s)));
    assert_eq!(
        "18,446,744,073,709,551,615",
        capture(|s| grouped::write_u64_grouped(u64::MAX, ',', s))
    );
    assert_eq!(
        "9.223.372.036.854.775.808",
        capture(|s| grouped::write_u64_grouped(1 << 63, '.', s))
    );
}

#[test]
fn test_separator_is_not_validated() {
    // a digit as separator is output like any other character
    assert_eq!("120345", capture(|s| grouped::write_i32_grouped(12345, '0', s)));
    assert_eq!("1𠜱000", capture(|s| grouped::write_i32_grouped(1000, '𠜱', s)));
}

#[test]
fn test_grouped_matches_plain() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let n: i64 = rng.gen();
        let grouped = capture(|s| grouped::write_i64_grouped(n, '_', s));
        let plain = capture(|s| decimal::write_i64(n, s));
        assert_eq!(plain, grouped.replace('_', ""));
        assert!(!grouped.starts_with('_') && !grouped.ends_with('_'));
        assert!(!grouped.starts_with("-_"));

        let digits = grouped.trim_start_matches('-');
        let groups: Vec<&str> = digits.split('_').collect();
        assert!((1..=3).contains(&groups[0].len()), "{}", grouped);
        assert!(groups[1..].iter().all(|group| group.len() == 3), "{}", grouped);
    }
}
