//! Decimal output with an implied decimal point.
//!
//! A value written with a scale of `s` is output as if divided by 10<sup>s</sup>: the point is
//! placed `s` digits from the right. When `s` is at least the number of digits, the output
//! starts with `0` and the point, then enough zeros to make up `s` fractional digits. A scale of
//! zero or less outputs the value unchanged; any trailing zeros or exponent a negative scale
//! would imply are left to the caller.

use crate::decimal::{digit, write_pair, write_u32, write_u64};
use crate::tables::{MIN_I32_DIGITS, MIN_I64_DIGITS};
use crate::Sink;

fn write_zeros<S>(count: usize, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    for _ in 0..count {
        sink.put('0')?;
    }
    Ok(())
}

// `scale` is always positive on entry; each level consumes two digits of it.
macro_rules! scaled_magnitude {
    ($t:ty => $name:ident, $plain:ident) => {
        fn $name<S>(n: $t, scale: i32, point: char, sink: &mut S) -> Result<(), S::Error>
        where
            S: Sink + ?Sized,
        {
            if n == 0 {
                // nothing left but padding
                sink.put('0')?;
                sink.put(point)?;
                return write_zeros(scale as usize, sink);
            }
            match scale {
                1 => {
                    $plain(n / 10, sink)?;
                    sink.put(point)?;
                    sink.put(digit((n % 10) as u32))
                }
                2 => {
                    $plain(n / 100, sink)?;
                    sink.put(point)?;
                    write_pair((n % 100) as u32, sink)
                }
                _ => {
                    $name(n / 100, scale - 2, point, sink)?;
                    write_pair((n % 100) as u32, sink)
                }
            }
        }
    };
}

scaled_magnitude!(u32 => scale_u32, write_u32);
scaled_magnitude!(u64 => scale_u64, write_u64);

/// Output a fixed digit string with the point inserted `scale` places from the right.
fn write_digits_scaled<S>(
    digits: &str,
    scale: i32,
    point: char,
    sink: &mut S,
) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    let len = digits.len();
    if scale <= 0 {
        return sink.put_str(digits);
    }
    let scale = scale as usize;
    if scale >= len {
        sink.put('0')?;
        sink.put(point)?;
        write_zeros(scale - len, sink)?;
        sink.put_str(digits)
    } else {
        sink.put_range(digits, 0..len - scale)?;
        sink.put(point)?;
        sink.put_range(digits, len - scale..len)
    }
}

/// Output an `i32` with the decimal point `scale` digits from the right.
///
/// # Examples
/// ```
/// let mut s = String::new();
/// int_output::scaled::write_i32_scaled(123456, 8, '.', &mut s).unwrap();
/// assert_eq!(s, "0.00123456");
/// ```
pub fn write_i32_scaled<S>(n: i32, scale: i32, point: char, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    if n >= 0 {
        write_u32_scaled(n as u32, scale, point, sink)
    } else if n == i32::MIN {
        sink.put('-')?;
        write_digits_scaled(MIN_I32_DIGITS, scale, point, sink)
    } else {
        sink.put('-')?;
        write_u32_scaled((-n) as u32, scale, point, sink)
    }
}

/// Output a `u32` with the decimal point `scale` digits from the right.
pub fn write_u32_scaled<S>(n: u32, scale: i32, point: char, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    if scale <= 0 {
        write_u32(n, sink)
    } else {
        scale_u32(n, scale, point, sink)
    }
}

/// Output an `i64` with the decimal point `scale` digits from the right.
pub fn write_i64_scaled<S>(n: i64, scale: i32, point: char, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    if n >= 0 {
        write_u64_scaled(n as u64, scale, point, sink)
    } else if n == i64::MIN {
        sink.put('-')?;
        write_digits_scaled(MIN_I64_DIGITS, scale, point, sink)
    } else {
        sink.put('-')?;
        write_u64_scaled((-n) as u64, scale, point, sink)
    }
}

/// Output a `u64` with the decimal point `scale` digits from the right.
pub fn write_u64_scaled<S>(n: u64, scale: i32, point: char, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    if scale <= 0 {
        write_u64(n, sink)
    } else {
        scale_u64(n, scale, point, sink)
    }
}
