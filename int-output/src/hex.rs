//! Hexadecimal output.
//!
//! The minimal forms split the value in halves: when the high half is non-zero it is output
//! minimally and the low half follows as a zero-padded field, otherwise only the low half is
//! output (minimally, by the same rule one level down). A `u64` splits into 32-bit halves, a
//! `u32` into 16-bit halves, and so on down to single digits.

use crate::tables::{HEX_DIGITS, HEX_DIGITS_LC};
use crate::Sink;

#[cfg(feature = "no-panic")]
use no_panic::no_panic;
#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// Letter case of the alphabetic hexadecimal digits.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
pub enum Case {
    /// `A` to `F`.
    #[default]
    Upper,
    /// `a` to `f`.
    Lower,
}

impl Case {
    #[inline]
    fn digits(self) -> &'static [char; 16] {
        match self {
            Case::Upper => &HEX_DIGITS,
            Case::Lower => &HEX_DIGITS_LC,
        }
    }
}

/// The hexadecimal digit for the low four bits of `n`.
#[inline]
#[cfg_attr(feature = "no-panic", no_panic)]
fn hex_digit(n: u32, case: Case) -> char {
    case.digits()[(n & 0xF) as usize]
}

fn write_8_bits<S>(n: u32, case: Case, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    if n & !0xF != 0 {
        sink.put(hex_digit(n >> 4, case))?;
    }
    sink.put(hex_digit(n, case))
}

fn write_16_bits<S>(n: u32, case: Case, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    if n & !0xFF != 0 {
        write_8_bits(n >> 8, case, sink)?;
        write_2_hex(n, case, sink)
    } else {
        write_8_bits(n, case, sink)
    }
}

/// Output a `u32` in hexadecimal with no leading zeros.
///
/// # Examples
/// ```
/// use int_output::{hex, Case};
///
/// let mut s = String::new();
/// hex::write_hex_u32(0xDEADFEED, Case::Upper, &mut s).unwrap();
/// assert_eq!(s, "DEADFEED");
/// ```
pub fn write_hex_u32<S>(n: u32, case: Case, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    if n & !0xFFFF != 0 {
        write_16_bits(n >> 16, case, sink)?;
        write_4_hex(n, case, sink)
    } else {
        write_16_bits(n, case, sink)
    }
}

/// Output a `u64` in hexadecimal with no leading zeros.
pub fn write_hex_u64<S>(n: u64, case: Case, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    let hi = (n >> 32) as u32;
    let lo = n as u32;
    if hi != 0 {
        write_hex_u32(hi, case, sink)?;
        write_8_hex(lo, case, sink)
    } else {
        write_hex_u32(lo, case, sink)
    }
}

/// Output `n` as exactly eight hexadecimal digits.
///
/// # Examples
/// ```
/// use int_output::{hex, Case};
///
/// let mut s = String::new();
/// hex::write_8_hex(0xABCD, Case::Upper, &mut s).unwrap();
/// assert_eq!(s, "0000ABCD");
/// ```
pub fn write_8_hex<S>(n: u32, case: Case, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    write_4_hex(n >> 16, case, sink)?;
    write_4_hex(n, case, sink)
}

/// Output the low 16 bits of `n` as exactly four hexadecimal digits.
pub fn write_4_hex<S>(n: u32, case: Case, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    write_2_hex(n >> 8, case, sink)?;
    write_2_hex(n, case, sink)
}

/// Output the low 8 bits of `n` as exactly two hexadecimal digits.
pub fn write_2_hex<S>(n: u32, case: Case, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    sink.put(hex_digit(n >> 4, case))?;
    sink.put(hex_digit(n, case))
}

/// Output the low 4 bits of `n` as a single hexadecimal digit.
pub fn write_1_hex<S>(n: u32, case: Case, sink: &mut S) -> Result<(), S::Error>
where
    S: Sink + ?Sized,
{
    sink.put(hex_digit(n, case))
}
