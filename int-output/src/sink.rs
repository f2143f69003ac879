//! The character sink that every writer in this crate emits into.

use core::fmt;
use core::ops::Range;

/// A consumer of characters, fed one character at a time in left-to-right order.
///
/// The writers in this crate never build an intermediate string; each character is handed to
/// the sink as soon as it is known. A sink that cannot fail should use
/// [`Infallible`](core::convert::Infallible) as its error type.
///
/// # Examples
/// ```
/// use int_output::{decimal, Sink};
///
/// let mut s = String::new();
/// decimal::write_i32(-1234, &mut s).unwrap();
/// s.put(';').unwrap();
/// assert_eq!(s, "-1234;");
/// ```
pub trait Sink {
    /// Error returned when the sink refuses a character.
    type Error;

    /// Consume a single character.
    fn put(&mut self, ch: char) -> Result<(), Self::Error>;

    /// Output every character of `s`.
    fn put_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for ch in s.chars() {
            self.put(ch)?;
        }
        Ok(())
    }

    /// Output the characters of `s` with character indices in `range`.
    ///
    /// Indices beyond the end of `s` are ignored.
    fn put_range(&mut self, s: &str, range: Range<usize>) -> Result<(), Self::Error> {
        let count = range.end.saturating_sub(range.start);
        for ch in s.chars().skip(range.start).take(count) {
            self.put(ch)?;
        }
        Ok(())
    }
}

impl<S> Sink for &mut S
where
    S: Sink + ?Sized,
{
    type Error = S::Error;

    #[inline]
    fn put(&mut self, ch: char) -> Result<(), Self::Error> {
        (**self).put(ch)
    }
}

#[cfg(feature = "std")]
impl Sink for String {
    type Error = core::convert::Infallible;

    #[inline]
    fn put(&mut self, ch: char) -> Result<(), Self::Error> {
        self.push(ch);
        Ok(())
    }
}

impl<const CAP: usize> Sink for arrayvec::ArrayString<CAP> {
    type Error = arrayvec::CapacityError<char>;

    #[inline]
    fn put(&mut self, ch: char) -> Result<(), Self::Error> {
        self.try_push(ch)
    }
}

/// A [`Sink`] that calls a closure for every character. Created by [`from_fn`].
#[derive(Clone, Copy, Debug)]
pub struct FnSink<F>(F);

/// Wrap a closure as a [`Sink`].
///
/// # Examples
/// ```
/// use int_output::{hex, sink, Case};
///
/// let mut count = 0;
/// hex::write_hex_u32(0xBEEF, Case::Upper, &mut sink::from_fn(|_| count += 1)).unwrap();
/// assert_eq!(count, 4);
/// ```
pub fn from_fn<F>(f: F) -> FnSink<F>
where
    F: FnMut(char),
{
    FnSink(f)
}

impl<F> Sink for FnSink<F>
where
    F: FnMut(char),
{
    type Error = core::convert::Infallible;

    #[inline]
    fn put(&mut self, ch: char) -> Result<(), Self::Error> {
        (self.0)(ch);
        Ok(())
    }
}

/// A [`Sink`] over any [`fmt::Write`] implementor, such as a [`fmt::Formatter`].
#[derive(Debug)]
pub struct FmtSink<W>(pub W);

impl<W> Sink for FmtSink<W>
where
    W: fmt::Write,
{
    type Error = fmt::Error;

    #[inline]
    fn put(&mut self, ch: char) -> Result<(), Self::Error> {
        self.0.write_char(ch)
    }
}

/// A [`Sink`] over any [`std::io::Write`] implementor; characters are written UTF-8 encoded.
///
/// No buffering is done here, so wrap unbuffered writers in a [`std::io::BufWriter`].
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W>(pub W);

#[cfg(feature = "std")]
impl<W> Sink for IoSink<W>
where
    W: std::io::Write,
{
    type Error = std::io::Error;

    fn put(&mut self, ch: char) -> Result<(), Self::Error> {
        let mut bytes = [0u8; 4];
        self.0.write_all(ch.encode_utf8(&mut bytes).as_bytes())
    }
}
