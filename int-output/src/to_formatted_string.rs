#![cfg(feature = "std")]

use crate::format::{Format, Grouping};
use crate::integer::Integer;

/// <b><u>A key trait</u></b>. Gives integers the [`to_formatted_string`] method.
///
/// # Examples
/// ```
/// use int_output::{CustomFormat, ToFormattedString};
///
/// let format = CustomFormat::builder().separator(' ').build();
/// assert_eq!(i64::MIN.to_formatted_string(&format), "-9 223 372 036 854 775 808");
/// ```
///
/// [`to_formatted_string`]: trait.ToFormattedString.html#method.to_formatted_string
pub trait ToFormattedString {
    /// Returns a new `String` with the decimal representation of `self`, grouped according to
    /// `format`.
    fn to_formatted_string<F>(&self, format: &F) -> String
    where
        F: Format;
}

impl<N> ToFormattedString for N
where
    N: Integer,
{
    fn to_formatted_string<F>(&self, format: &F) -> String
    where
        F: Format,
    {
        let n = *self;
        let mut s = String::with_capacity(crate::constants::MAX_BUF_LEN);
        let result = match format.grouping() {
            Grouping::Standard => n.write_grouped(format.separator(), &mut s),
            Grouping::Posix => n.write_decimal(&mut s),
        };
        match result {
            Ok(()) => s,
            Err(never) => match never {},
        }
    }
}
