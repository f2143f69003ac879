mod common;

use int_output::{Buffer, Case, CustomFormat, ErrorKind, Grouping, ToFormattedString};

use crate::common::POLICIES;

#[test]
fn test_write_formatted() {
    let test_cases: &[(&str, i64, &CustomFormat)] = &[
        ("0", 0, &POLICIES[0]),
        ("0", 0, &POLICIES[1]),
        ("0", 0, &POLICIES[2]),
        ("0", 0, &POLICIES[3]),
        ("-9,223,372,036,854,775,808", i64::MIN, &POLICIES[0]),
        ("-9 223 372 036 854 775 808", i64::MIN, &POLICIES[1]),
        ("-9𠜱223𠜱372𠜱036𠜱854𠜱775𠜱808", i64::MIN, &POLICIES[2]),
        ("-9223372036854775808", i64::MIN, &POLICIES[3]),
        ("1,234,567", 1234567, &POLICIES[0]),
        ("1𠜱234𠜱567", 1234567, &POLICIES[2]),
        ("1234567", 1234567, &POLICIES[3]),
    ];

    for (expected, input, format) in test_cases {
        // Buffer
        let mut buf = Buffer::default();
        assert_eq!(*expected, buf.write_formatted(*input, *format).unwrap());
        assert_eq!(expected.len(), buf.len());

        // ToFormattedString
        assert_eq!(expected.to_string(), input.to_formatted_string(*format));
    }
}

#[test]
fn test_every_integer_type() {
    let format = CustomFormat::default();
    let mut buf = Buffer::new();
    assert_eq!("-128", buf.write_formatted(i8::MIN, &format).unwrap());
    assert_eq!("255", buf.write_formatted(u8::MAX, &format).unwrap());
    assert_eq!("-32,768", buf.write_formatted(i16::MIN, &format).unwrap());
    assert_eq!("65,535", buf.write_formatted(u16::MAX, &format).unwrap());
    assert_eq!("4,294,967,295", buf.write_formatted(u32::MAX, &format).unwrap());
    assert_eq!(
        "18,446,744,073,709,551,615",
        buf.write_formatted(u64::MAX, &format).unwrap()
    );
    assert_eq!("-1,000", buf.write_formatted(-1000isize, &format).unwrap());
    assert_eq!("1,000", buf.write_formatted(1000usize, &format).unwrap());
}

#[test]
fn test_longest_output_fits() {
    let format = CustomFormat::builder().separator('𠜱').build();
    let mut buf = Buffer::new();
    assert!(buf.write_formatted(u64::MAX, &format).is_ok());
    assert!(buf.write_formatted(i64::MIN, &format).is_ok());
    assert_eq!(
        "-0.9223372036854775808",
        buf.write_scaled(i64::MIN, 19, &format).unwrap()
    );
}

#[test]
fn test_hex_and_scaled() {
    let mut buf = Buffer::new();
    assert_eq!("DEADFEED", buf.write_hex(0xDEADFEEDu32, Case::Upper).unwrap());
    assert_eq!("ff", buf.write_hex(-1i8, Case::Lower).unwrap());
    assert_eq!("0", buf.write_hex(0u64, Case::Lower).unwrap());

    let format = CustomFormat::builder().decimal(',').build();
    assert_eq!("-22334,455", buf.write_scaled(-22334455, 3, &format).unwrap());
    assert_eq!("0,000", buf.write_scaled(0u8, 3, &format).unwrap());
}

#[test]
fn test_capacity_error() {
    let mut buf = Buffer::new();
    let err = buf
        .write_scaled(1, 1000, &CustomFormat::default())
        .unwrap_err();
    match err.kind() {
        ErrorKind::Capacity { len, cap } => {
            assert_eq!(len, cap);
            assert!(*cap >= 44);
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
    assert!(buf.is_empty());
    assert!(!err.to_string().is_empty());

    // the buffer is reusable after an error
    assert_eq!("1", buf.write_formatted(1, &CustomFormat::default()).unwrap());
}

#[test]
fn test_builder() {
    let format = CustomFormat::builder()
        .grouping(Grouping::Posix)
        .separator('_')
        .decimal(',')
        .case(Case::Lower)
        .build();
    assert_eq!(format, format.into_builder().build());

    let changed = format.into_builder().grouping(Grouping::Standard).build();
    assert_eq!("1_000", 1000i32.to_formatted_string(&changed));
    assert_eq!("1000", 1000i32.to_formatted_string(&format));
    assert_eq!(CustomFormat::default(), CustomFormat::builder().build());
}
