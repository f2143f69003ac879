//! Decimal output, left-trimmed, most significant digit first.
//!
//! Digits are produced two at a time: a value of 100 or more is divided by 100, the quotient is
//! output recursively and the remainder follows as exactly two digits taken from the digit
//! tables. The minimum signed values, whose magnitudes have no positive counterpart of the same
//! width, are output from precomputed digit strings.

use crate::tables::{DIGITS, MIN_I32_DIGITS, MIN_I64_DIGITS, TENS_DIGITS};
use crate::Sink;

#[cfg(feature = "no-panic")]
use no_panic::no_panic;

/// The units digit of `n`.
#[inline]
#[cfg_attr(feature = "no-panic", no_panic)]
pub(crate) fn digit(n: u32) -> char {
    DIGITS[(n % 10) as usize]
}

/// The tens and units digits of `n`.
#[inline]
#[cfg_attr(feature = "no-panic", no_panic)]
pub(crate) fn digit_pair(n: u32) -> [char; 2] {
    let i = (n % 100) as usize;
    [TENS_DIGITS[i], DIGITS[i]]
}

#[inline]
pub(crate) fn write_pair<S>(n: u32, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    let [tens, units] = digit_pair(n);
    sink.put(tens)?;
    sink.put(units)
}

/// Output a value below 100 without a leading zero.
#[inline]
pub(crate) fn write_below_100<S>(n: u32, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    if n >= 10 {
        write_pair(n, sink)
    } else {
        sink.put(digit(n))
    }
}

/// Output an `i32`.
///
/// # Examples
/// ```
/// let mut s = String::new();
/// int_output::decimal::write_i32(i32::MIN, &mut s).unwrap();
/// assert_eq!(s, "-2147483648");
/// ```
pub fn write_i32<S>(n: i32, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    if n >= 0 {
        write_u32(n as u32, sink)
    } else if n == i32::MIN {
        sink.put('-')?;
        sink.put_str(MIN_I32_DIGITS)
    } else {
        sink.put('-')?;
        write_u32((-n) as u32, sink)
    }
}

/// Output a `u32`.
pub fn write_u32<S>(n: u32, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    if n >= 100 {
        write_u32(n / 100, sink)?;
        write_pair(n % 100, sink)
    } else {
        write_below_100(n, sink)
    }
}

/// Output an `i64`.
pub fn write_i64<S>(n: i64, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    if n >= 0 {
        write_u64(n as u64, sink)
    } else if n == i64::MIN {
        sink.put('-')?;
        sink.put_str(MIN_I64_DIGITS)
    } else {
        sink.put('-')?;
        write_u64((-n) as u64, sink)
    }
}

/// Output a `u64`.
pub fn write_u64<S>(n: u64, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    // reduce to 32bit math as soon as the value fits
    if n <= u64::from(u32::MAX) {
        return write_u32(n as u32, sink);
    }
    write_u64(n / 100, sink)?;
    write_pair((n % 100) as u32, sink)
}

/// Output the units digit of `n`.
pub fn write_1_digit<S>(n: u32, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    sink.put(digit(n))
}

/// Output `n` as exactly two digits, zero-padded.
///
/// Only the two low-order decimal digits of `n` are output.
///
/// # Examples
/// ```
/// let mut s = String::new();
/// int_output::decimal::write_2_digits(7, &mut s).unwrap();
/// assert_eq!(s, "07");
/// ```
pub fn write_2_digits<S>(n: u32, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    write_pair(n, sink)
}

/// Output `n` as exactly three digits, zero-padded.
///
/// Only the three low-order decimal digits of `n` are output.
pub fn write_3_digits<S>(n: u32, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    sink.put(digit(n / 100))?;
    write_pair(n % 100, sink)
}

/// Output the units digit of the magnitude of `n`, for any `i32`.
///
/// `-61` produces `"1"` and `20` produces `"0"`.
pub fn write_1_digit_safe<S>(n: i32, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    write_1_digit((n % 10).unsigned_abs(), sink)
}

/// Output the two low-order digits of the magnitude of `n`, zero-padded, for any `i32`.
pub fn write_2_digits_safe<S>(n: i32, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    write_2_digits((n % 100).unsigned_abs(), sink)
}

/// Output the three low-order digits of the magnitude of `n`, zero-padded, for any `i32`.
pub fn write_3_digits_safe<S>(n: i32, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    write_3_digits((n % 1000).unsigned_abs(), sink)
}
