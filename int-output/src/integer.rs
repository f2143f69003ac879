use crate::hex::Case;
use crate::{decimal, grouped, hex, scaled, Sink};

/// An integer that can be written to a [`Sink`] in any of the supported representations.
///
/// This trait is sealed and cannot be implemented for types outside of this crate. Types
/// narrower than 32 bits go through the 32-bit writers, pointer-sized types through the 64-bit
/// ones. Hexadecimal output of a signed value is its two's-complement bit pattern at the
/// value's own width.
///
/// # Examples
/// ```
/// use int_output::{Case, Integer};
///
/// let mut s = String::new();
/// (-1i16).write_hex(Case::Lower, &mut s).unwrap();
/// assert_eq!(s, "ffff");
/// ```
pub trait Integer: crate::private::Sealed + Copy {
    /// Write in decimal.
    fn write_decimal<S>(self, sink: &mut S) -> Result<(), S::Error>
    where
        S: Sink + ?Sized;

    /// Write in decimal with `separator` between groups of three digits.
    fn write_grouped<S>(self, separator: char, sink: &mut S) -> Result<(), S::Error>
    where
        S: Sink + ?Sized;

    /// Write in hexadecimal with no leading zeros.
    fn write_hex<S>(self, case: Case, sink: &mut S) -> Result<(), S::Error>
    where
        S: Sink + ?Sized;

    /// Write in decimal with `point` inserted `scale` digits from the right.
    fn write_scaled<S>(self, scale: i32, point: char, sink: &mut S) -> Result<(), S::Error>
    where
        S: Sink + ?Sized;
}

macro_rules! impl_Integer {
    ($($t:ty => $unsigned:ty, $decimal:ident, $grouped:ident, $hex:ident, $scaled:ident);*) => {$(
        impl Integer for $t {
            #[inline]
            fn write_decimal<S>(self, sink: &mut S) -> Result<(), S::Error>
            where
                S: Sink + ?Sized,
            {
                decimal::$decimal(self, sink)
            }

            #[inline]
            fn write_grouped<S>(self, separator: char, sink: &mut S) -> Result<(), S::Error>
            where
                S: Sink + ?Sized,
            {
                grouped::$grouped(self, separator, sink)
            }

            #[inline]
            fn write_hex<S>(self, case: Case, sink: &mut S) -> Result<(), S::Error>
            where
                S: Sink + ?Sized,
            {
                hex::$hex(self as $unsigned, case, sink)
            }

            #[inline]
            fn write_scaled<S>(self, scale: i32, point: char, sink: &mut S) -> Result<(), S::Error>
            where
                S: Sink + ?Sized,
            {
                scaled::$scaled(self, scale, point, sink)
            }
        }

        impl crate::private::Sealed for $t {}
    )*};
}

impl_Integer!(
    i32 => u32, write_i32, write_i32_grouped, write_hex_u32, write_i32_scaled;
    u32 => u32, write_u32, write_u32_grouped, write_hex_u32, write_u32_scaled;
    i64 => u64, write_i64, write_i64_grouped, write_hex_u64, write_i64_scaled;
    u64 => u64, write_u64, write_u64_grouped, write_hex_u64, write_u64_scaled
);

// Narrow and pointer-sized types widen to one of the four types above; hex keeps the bit
// pattern of the original width.
macro_rules! impl_Integer_widening {
    ($($t:ty => $wide:ty, $bits:ty as $hex_wide:ty);*) => {$(
        impl Integer for $t {
            #[inline]
            fn write_decimal<S>(self, sink: &mut S) -> Result<(), S::Error>
            where
                S: Sink + ?Sized,
            {
                (self as $wide).write_decimal(sink)
            }

            #[inline]
            fn write_grouped<S>(self, separator: char, sink: &mut S) -> Result<(), S::Error>
            where
                S: Sink + ?Sized,
            {
                (self as $wide).write_grouped(separator, sink)
            }

            #[inline]
            fn write_hex<S>(self, case: Case, sink: &mut S) -> Result<(), S::Error>
            where
                S: Sink + ?Sized,
            {
                (self as $bits as $hex_wide).write_hex(case, sink)
            }

            #[inline]
            fn write_scaled<S>(self, scale: i32, point: char, sink: &mut S) -> Result<(), S::Error>
            where
                S: Sink + ?Sized,
            {
                (self as $wide).write_scaled(scale, point, sink)
            }
        }

        impl crate::private::Sealed for $t {}
    )*};
}

impl_Integer_widening!(
    i8 => i32, u8 as u32;
    i16 => i32, u16 as u32;
    u8 => u32, u8 as u32;
    u16 => u32, u16 as u32;
    isize => i64, usize as u64;
    usize => u64, usize as u64
);
