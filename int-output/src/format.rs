use crate::hex::Case;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// Separator used between groups of three digits unless told otherwise.
pub const DEFAULT_SEPARATOR: char = ',';

/// Character used as the decimal point unless told otherwise.
pub const DEFAULT_DECIMAL: char = '.';

/// How digits are grouped.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
pub enum Grouping {
    /// Groups of three digits, e.g. 1,000,000.
    #[default]
    Standard,
    /// No grouping, e.g. 1000000.
    Posix,
}

/// Trait that abstracts over [`CustomFormat`] and any caller-defined format.
///
/// [`CustomFormat`]: struct.CustomFormat.html
pub trait Format {
    /// Returns the character used as the decimal point.
    fn decimal(&self) -> char;
    /// Returns the [`Grouping`] to use for separating digits. (see [`Grouping`])
    ///
    /// [`Grouping`]: enum.Grouping.html
    fn grouping(&self) -> Grouping;
    /// Returns the character placed between groups of digits.
    fn separator(&self) -> char;
    /// Returns the letter case of hexadecimal digits.
    fn case(&self) -> Case;
}

/// Type for representing your own custom formats. Implements [`Format`].
///
/// # Example
/// ```
/// use int_output::{Buffer, CustomFormat, Grouping};
///
/// let format = CustomFormat::builder()
///     .grouping(Grouping::Standard)
///     .separator('_')
///     .build();
///
/// let mut buf = Buffer::new();
/// assert_eq!(buf.write_formatted(-1000000i32, &format).unwrap(), "-1_000_000");
/// ```
///
/// [`Format`]: trait.Format.html
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
pub struct CustomFormat {
    pub(crate) case: Case,
    pub(crate) dec: char,
    pub(crate) grp: Grouping,
    pub(crate) sep: char,
}

impl CustomFormat {
    /// Constructs a [`CustomFormatBuilder`].
    ///
    /// [`CustomFormatBuilder`]: struct.CustomFormatBuilder.html
    pub fn builder() -> CustomFormatBuilder {
        CustomFormatBuilder::new()
    }

    /// Turns `self` into a [`CustomFormatBuilder`].
    ///
    /// [`CustomFormatBuilder`]: struct.CustomFormatBuilder.html
    pub fn into_builder(self) -> CustomFormatBuilder {
        CustomFormatBuilder { inner: self }
    }
}

impl Default for CustomFormat {
    /// Commas every three digits, a period for the decimal point and upper-case hex.
    fn default() -> Self {
        CustomFormat {
            case: Case::Upper,
            dec: DEFAULT_DECIMAL,
            grp: Grouping::Standard,
            sep: DEFAULT_SEPARATOR,
        }
    }
}

impl Format for CustomFormat {
    #[inline(always)]
    fn decimal(&self) -> char {
        self.dec
    }

    #[inline(always)]
    fn grouping(&self) -> Grouping {
        self.grp
    }

    #[inline(always)]
    fn separator(&self) -> char {
        self.sep
    }

    #[inline(always)]
    fn case(&self) -> Case {
        self.case
    }
}

/// Type for building [`CustomFormat`]s.
///
/// [`CustomFormat`]: struct.CustomFormat.html
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct CustomFormatBuilder {
    inner: CustomFormat,
}

impl CustomFormatBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Construct a [`CustomFormat`].
    ///
    /// [`CustomFormat`]: struct.CustomFormat.html
    pub fn build(self) -> CustomFormat {
        self.inner
    }

    /// Sets the letter case of hexadecimal digits.
    pub fn case(mut self, value: Case) -> Self {
        self.inner.case = value;
        self
    }

    /// Sets the character used as the decimal point.
    pub fn decimal(mut self, value: char) -> Self {
        self.inner.dec = value;
        self
    }

    /// Sets the [`Grouping`] used for separating digits.
    ///
    /// [`Grouping`]: enum.Grouping.html
    pub fn grouping(mut self, value: Grouping) -> Self {
        self.inner.grp = value;
        self
    }

    /// Sets the character placed between groups of digits. Any character is accepted.
    pub fn separator(mut self, value: char) -> Self {
        self.inner.sep = value;
        self
    }
}

impl From<CustomFormat> for CustomFormatBuilder {
    fn from(format: CustomFormat) -> Self {
        format.into_builder()
    }
}
