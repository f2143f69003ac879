mod common;

use int_output::decimal;

use crate::common::capture;

#[test]
fn test_i32() {
    let test_cases: &[(&str, i32)] = &[
        ("0", 0),
        ("7", 7),
        ("10", 10),
        ("99", 99),
        ("100", 100),
        ("123456", 123456),
        ("-1", -1),
        ("-22334455", -22334455),
        ("2147483647", i32::MAX),
        ("-2147483647", i32::MIN + 1),
        ("-2147483648", i32::MIN),
    ];

    for (expected, input) in test_cases {
        assert_eq!(*expected, capture(|s| decimal::write_i32(*input, s)));
    }
}

#[test]
fn test_u32() {
    let test_cases: &[(&str, u32)] = &[
        ("0", 0),
        ("123456", 123456),
        ("2147483648", 2147483648),
        ("3456789012", 3456789012),
        ("2309737967", 0x89ABCDEF),
        ("4294967295", u32::MAX),
    ];

    for (expected, input) in test_cases {
        assert_eq!(*expected, capture(|s| decimal::write_u32(*input, s)));
    }
}

#[test]
fn test_i64() {
    let test_cases: &[(&str, i64)] = &[
        ("0", 0),
        ("123456789012345678", 123456789012345678),
        ("-2233445566778899", -2233445566778899),
        ("4294967296", 4294967296),
        ("-2147483648", i32::MIN as i64),
        ("9223372036854775807", i64::MAX),
        ("-9223372036854775808", i64::MIN),
    ];

    for (expected, input) in test_cases {
        assert_eq!(*expected, capture(|s| decimal::write_i64(*input, s)));
    }
}

#[test]
fn test_u64() {
    let test_cases: &[(&str, u64)] = &[
        ("0", 0),
        ("4294967295", u32::MAX as u64),
        ("4294967296", u32::MAX as u64 + 1),
        ("9223372036854775808", 1 << 63),
        ("12345678901234567890", 12345678901234567890),
        ("18446744073709551615", u64::MAX),
    ];

    for (expected, input) in test_cases {
        assert_eq!(*expected, capture(|s| decimal::write_u64(*input, s)));
    }
}

#[test]
fn test_fixed_width() {
    assert_eq!("0", capture(|s| decimal::write_1_digit(0, s)));
    assert_eq!("9", capture(|s| decimal::write_1_digit(9, s)));
    assert_eq!("00", capture(|s| decimal::write_2_digits(0, s)));
    assert_eq!("01", capture(|s| decimal::write_2_digits(1, s)));
    assert_eq!("21", capture(|s| decimal::write_2_digits(21, s)));
    assert_eq!("000", capture(|s| decimal::write_3_digits(0, s)));
    assert_eq!("001", capture(|s| decimal::write_3_digits(1, s)));
    assert_eq!("021", capture(|s| decimal::write_3_digits(21, s)));
    assert_eq!("321", capture(|s| decimal::write_3_digits(321, s)));
}

#[test]
fn test_fixed_width_safe() {
    let test_cases: &[(&str, i32)] = &[("0", 20), ("1", -61), ("9", 999999), ("8", i32::MIN)];
    for (expected, input) in test_cases {
        assert_eq!(*expected, capture(|s| decimal::write_1_digit_safe(*input, s)));
    }

    let test_cases: &[(&str, i32)] =
        &[("00", 10000), ("01", -501), ("21", 7654321), ("48", i32::MIN)];
    for (expected, input) in test_cases {
        assert_eq!(*expected, capture(|s| decimal::write_2_digits_safe(*input, s)));
    }

    let test_cases: &[(&str, i32)] = &[
        ("000", 2000),
        ("001", -15001),
        ("021", 66021),
        ("321", 987654321),
        ("648", i32::MIN),
    ];
    for (expected, input) in test_cases {
        assert_eq!(*expected, capture(|s| decimal::write_3_digits_safe(*input, s)));
    }
}
