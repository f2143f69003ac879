use core::borrow::Borrow;
use core::fmt;
use core::ops::Deref;

use arrayvec::{ArrayString, CapacityError};

use crate::constants::MAX_BUF_LEN;
use crate::error::Error;
use crate::format::{Format, Grouping};
use crate::hex::Case;
use crate::integer::Integer;

/// <b><u>A key type</u></b>. Represents a stack-allocated buffer you can use to get a
/// formatted `&str` without heap allocation.
///
/// The buffer holds the longest grouped output of any [`Integer`] even with four-byte
/// separators. Scaled output with a scale far beyond the digit count can exceed it, in which
/// case the write returns an [`Error`] and the buffer is left empty.
///
/// # Example
/// ```
/// use int_output::{Buffer, Case, CustomFormat};
///
/// let mut buf = Buffer::new();
/// assert_eq!(buf.write_formatted(1234567u32, &CustomFormat::default()).unwrap(), "1,234,567");
/// assert_eq!(buf.write_hex(0xBEEFu16, Case::Lower).unwrap(), "beef");
/// assert_eq!(buf.write_scaled(-1234i64, 2, &CustomFormat::default()).unwrap(), "-12.34");
/// ```
#[derive(Copy, Clone, Default)]
pub struct Buffer {
    inner: ArrayString<MAX_BUF_LEN>,
}

impl Buffer {
    /// Constructs a new, empty buffer.
    #[inline(always)]
    pub fn new() -> Buffer {
        Buffer::default()
    }

    /// Returns a `&str` view of the buffer's contents.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Returns the length (in bytes) of the buffer's contents.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the buffer is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Empties the buffer.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Replaces the buffer's contents with `n` in decimal, grouped according to `format`.
    pub fn write_formatted<N, F>(&mut self, n: N, format: &F) -> Result<&str, Error>
    where
        N: Integer,
        F: Format,
    {
        self.inner.clear();
        let result = match format.grouping() {
            Grouping::Standard => n.write_grouped(format.separator(), &mut self.inner),
            Grouping::Posix => n.write_decimal(&mut self.inner),
        };
        self.finish(result)
    }

    /// Replaces the buffer's contents with `n` in hexadecimal.
    pub fn write_hex<N>(&mut self, n: N, case: Case) -> Result<&str, Error>
    where
        N: Integer,
    {
        self.inner.clear();
        let result = n.write_hex(case, &mut self.inner);
        self.finish(result)
    }

    /// Replaces the buffer's contents with `n` scaled by `scale` decimal places, using the
    /// decimal point of `format`.
    pub fn write_scaled<N, F>(&mut self, n: N, scale: i32, format: &F) -> Result<&str, Error>
    where
        N: Integer,
        F: Format,
    {
        self.inner.clear();
        let result = n.write_scaled(scale, format.decimal(), &mut self.inner);
        self.finish(result)
    }

    fn finish(&mut self, result: Result<(), CapacityError<char>>) -> Result<&str, Error> {
        match result {
            Ok(()) => Ok(self.inner.as_str()),
            Err(_) => {
                let len = self.inner.len();
                #[cfg(feature = "tracing")]
                tracing::debug!(len, cap = MAX_BUF_LEN, "output does not fit in Buffer");
                self.inner.clear();
                Err(Error::capacity(len, MAX_BUF_LEN))
            }
        }
    }
}

impl AsRef<str> for Buffer {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Buffer {
    #[inline(always)]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Deref for Buffer {
    type Target = str;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
