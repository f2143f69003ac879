//! Decimal output with the digits grouped in threes.
//!
//! The recursion is the same as for plain decimal output (peel off two digits per level), but
//! it cycles through three stages so that the separator lands every third digit counted from
//! the right:
//!
//! * stage 0 outputs its two digits as a plain pair;
//! * stage 1 outputs its pair with the separator between the tens and the units digit;
//! * stage 2 outputs the separator followed by its pair.
//!
//! A stage left with fewer than three digits outputs them with no separator at all, so the
//! result never starts or ends with a separator and never has one next to the sign.

use crate::decimal::{digit, digit_pair, write_below_100, write_pair};
use crate::tables::{MIN_I32_DIGITS, MIN_I64_DIGITS};
use crate::Sink;

macro_rules! grouped_stages {
    ($t:ty => $stage0:ident, $stage1:ident, $stage2:ident) => {
        fn $stage0<S>(n: $t, separator: char, sink: &mut S) -> Result<(), S::Error>
        where
            S: Sink + ?Sized,
        {
            if n >= 100 {
                $stage1(n / 100, separator, sink)?;
                write_pair((n % 100) as u32, sink)
            } else {
                write_below_100(n as u32, sink)
            }
        }

        fn $stage1<S>(n: $t, separator: char, sink: &mut S) -> Result<(), S::Error>
        where
            S: Sink + ?Sized,
        {
            let pair = if n >= 100 {
                $stage2(n / 100, separator, sink)?;
                (n % 100) as u32
            } else if n >= 10 {
                n as u32
            } else {
                return sink.put(digit(n as u32));
            };
            let [tens, units] = digit_pair(pair);
            sink.put(tens)?;
            sink.put(separator)?;
            sink.put(units)
        }

        fn $stage2<S>(n: $t, separator: char, sink: &mut S) -> Result<(), S::Error>
        where
            S: Sink + ?Sized,
        {
            if n >= 100 {
                $stage0(n / 100, separator, sink)?;
                sink.put(separator)?;
                write_pair((n % 100) as u32, sink)
            } else {
                write_below_100(n as u32, sink)
            }
        }
    };
}

grouped_stages!(u32 => group_u32, group_u32_1, group_u32_2);
grouped_stages!(u64 => group_u64, group_u64_1, group_u64_2);

/// Output the digits of a minimum value, which cannot go through the recursion.
fn write_min_grouped<S>(digits: &str, separator: char, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    let len = digits.len();
    let lead = match len % 3 {
        0 => 3,
        rem => rem,
    };
    sink.put('-')?;
    sink.put_range(digits, 0..lead)?;
    for start in (lead..len).step_by(3) {
        sink.put(separator)?;
        sink.put_range(digits, start..start + 3)?;
    }
    Ok(())
}

/// Output an `i32` with the digits grouped in threes.
///
/// The separator is not validated; any character may be used.
///
/// # Examples
/// ```
/// let mut s = String::new();
/// int_output::grouped::write_i32_grouped(i32::MIN, ' ', &mut s).unwrap();
/// assert_eq!(s, "-2 147 483 648");
/// ```
pub fn write_i32_grouped<S>(n: i32, separator: char, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    if n >= 0 {
        group_u32(n as u32, separator, sink)
    } else if n == i32::MIN {
        write_min_grouped(MIN_I32_DIGITS, separator, sink)
    } else {
        sink.put('-')?;
        group_u32((-n) as u32, separator, sink)
    }
}

/// Output a `u32` with the digits grouped in threes.
pub fn write_u32_grouped<S>(n: u32, separator: char, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    group_u32(n, separator, sink)
}

/// Output an `i64` with the digits grouped in threes.
///
/// # Examples
/// ```
/// let mut s = String::new();
/// int_output::grouped::write_i64_grouped(i64::MIN, ',', &mut s).unwrap();
/// assert_eq!(s, "-9,223,372,036,854,775,808");
/// ```
pub fn write_i64_grouped<S>(n: i64, separator: char, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    if n >= 0 {
        group_u64(n as u64, separator, sink)
    } else if n == i64::MIN {
        write_min_grouped(MIN_I64_DIGITS, separator, sink)
    } else {
        sink.put('-')?;
        group_u64((-n) as u64, separator, sink)
    }
}

/// Output a `u64` with the digits grouped in threes.
pub fn write_u64_grouped<S>(n: u64, separator: char, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    group_u64(n, separator, sink)
}
