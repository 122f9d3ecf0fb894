use crate::constants::{MM_PER_INCH, UNITS_PER_INCH, UNITS_PER_POINT};
use crate::geometry::ErrorKind;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid page geometry: {0}")]
    Geometry(ErrorKind),
}

pub type Result<T> = std::result::Result<T, SetupError>;

/// Raised when a raw unit count cannot become a [`Length`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("length cannot be negative: {0}")]
pub struct NegativeLength(pub i64);

/// A non-negative distance in 1/72000 inch (a thousandth of a point).
///
/// Conversions from points and inches are exact. Millimetre conversions
/// round to the nearest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i64", into = "i64")
)]
pub struct Length(i64);

impl Length {
    pub const ZERO: Length = Length(0);

    /// Panics on negative input: lengths handed to the core are never negative.
    pub const fn new(units: i64) -> Self {
        assert!(units >= 0, "length cannot be negative");
        Self(units)
    }

    pub const fn from_points(points: i64) -> Self {
        Self::new(points * UNITS_PER_POINT)
    }

    pub fn from_inches(inches: f64) -> Self {
        Self::new((inches * UNITS_PER_INCH as f64).round() as i64)
    }

    pub fn from_mm(mm: f64) -> Self {
        Self::new((mm / MM_PER_INCH * UNITS_PER_INCH as f64).round() as i64)
    }

    pub const fn units(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn to_points(self) -> f64 {
        self.0 as f64 / UNITS_PER_POINT as f64
    }

    pub fn to_inches(self) -> f64 {
        self.0 as f64 / UNITS_PER_INCH as f64
    }

    pub fn to_mm(self) -> f64 {
        self.to_inches() * MM_PER_INCH
    }

    /// Multiply by `num / den`, rounding half away from zero.
    pub fn mul_ratio(self, num: i64, den: i64) -> Self {
        assert!(num >= 0 && den > 0, "ratio must be non-negative with a positive denominator");
        Self::new((self.0 * num * 2 + den) / (2 * den))
    }

    /// Multiply by an arbitrary factor, rounding to the nearest unit.
    pub fn scale(self, factor: f64) -> Self {
        assert!(factor >= 0.0, "scale factor cannot be negative");
        Self::new((self.0 as f64 * factor).round() as i64)
    }

    /// `self / other` as a decimal ratio. Panics when `other` is zero.
    pub fn ratio(self, other: Length) -> f64 {
        assert!(!other.is_zero(), "cannot take a ratio against a zero length");
        self.0 as f64 / other.0 as f64
    }

    pub fn abs_diff(self, other: Length) -> Length {
        Length(self.0.abs_diff(other.0) as i64)
    }

    pub fn saturating_sub(self, other: Length) -> Length {
        Length((self.0 - other.0).max(0))
    }

    pub fn checked_sub(self, other: Length) -> Option<Length> {
        (self.0 >= other.0).then(|| Length(self.0 - other.0))
    }
}

impl TryFrom<i64> for Length {
    type Error = NegativeLength;

    fn try_from(units: i64) -> std::result::Result<Self, Self::Error> {
        if units < 0 {
            Err(NegativeLength(units))
        } else {
            Ok(Length(units))
        }
    }
}

impl From<Length> for i64 {
    fn from(length: Length) -> Self {
        length.0
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Length) {
        self.0 += rhs.0;
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length::new(self.0 - rhs.0)
    }
}

impl Sum for Length {
    fn sum<I: Iterator<Item = Length>>(iter: I) -> Length {
        iter.fold(Length::ZERO, Add::add)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pt", self.to_points())
    }
}

/// Clamp `value` into `[min, max]`. When the range is inverted `min` wins.
pub fn snap(min: Length, max: Length, value: Length) -> Length {
    min.max(max.min(value))
}

/// Edge of the page along which the publication is bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BindingSide {
    #[default]
    Left,
    Right,
    Top,
}

impl BindingSide {
    /// The binding axis runs along the page height for top binding and
    /// along the width otherwise.
    pub fn binds_vertically(self) -> bool {
        self == BindingSide::Top
    }
}

/// Whether sheets are printed on one side or both
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetLayout {
    /// Single-sided: every page has the same inside/outside orientation
    Simplex,
    /// Double-sided: inside and outside alternate with page parity
    #[default]
    Duplex,
}

/// Page margins. Inside and outside are relative to the binding edge,
/// not to the physical left and right of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    pub top: Length,
    pub bottom: Length,
    /// Margin on the binding edge
    pub inside: Length,
    /// Margin on the edge away from the binding
    pub outside: Length,
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(Length::new(UNITS_PER_INCH))
    }
}

impl Margins {
    /// Create uniform margins on all sides
    pub fn uniform(margin: Length) -> Self {
        Self {
            top: margin,
            bottom: margin,
            inside: margin,
            outside: margin,
        }
    }

    pub fn vertical(&self) -> Length {
        self.top + self.bottom
    }

    pub fn horizontal(&self) -> Length {
        self.inside + self.outside
    }
}

/// A physical sheet size
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaperSize {
    pub name: String,
    pub width: Length,
    pub height: Length,
}

impl PaperSize {
    pub const CUSTOM_NAME: &'static str = "Custom";

    pub fn new(name: impl Into<String>, width: Length, height: Length) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// The "Custom" selector entry. It has no size and matches nothing.
    pub fn custom() -> Self {
        Self::custom_with(Length::ZERO, Length::ZERO)
    }

    /// A free-form paper size that no named entry describes
    pub fn custom_with(width: Length, height: Length) -> Self {
        Self::new(Self::CUSTOM_NAME, width, height)
    }

    pub fn is_custom(&self) -> bool {
        self.name == Self::CUSTOM_NAME
    }

    pub fn letter() -> Self {
        Self::new("Letter", Length::from_inches(8.5), Length::from_inches(11.0))
    }

    /// The same sheet turned on its side
    pub fn rotated(&self) -> Self {
        Self {
            name: self.name.clone(),
            width: self.height,
            height: self.width,
        }
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    /// Named sizes offered by the paper selector, in portrait orientation
    pub fn standard_sizes() -> Vec<PaperSize> {
        vec![
            Self::letter(),
            Self::new("Legal", Length::from_inches(8.5), Length::from_inches(14.0)),
            Self::new("Tabloid", Length::from_inches(11.0), Length::from_inches(17.0)),
            Self::new("Executive", Length::from_inches(7.25), Length::from_inches(10.5)),
            Self::new("A3", Length::from_mm(297.0), Length::from_mm(420.0)),
            Self::new("A4", Length::from_mm(210.0), Length::from_mm(297.0)),
            Self::new("A5", Length::from_mm(148.0), Length::from_mm(210.0)),
            Self::new("B5", Length::from_mm(176.0), Length::from_mm(250.0)),
        ]
    }
}

/// The trimmed size of a publication page, placed on a paper sheet
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicationPageSize {
    pub name: String,
    pub width: Length,
    pub height: Length,
}

impl PublicationPageSize {
    pub const FULL_PAGE_NAME: &'static str = "Full Page";

    pub fn new(name: impl Into<String>, width: Length, height: Length) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// The publication page is the whole paper sheet (minus gutter)
    pub fn full_page() -> Self {
        Self::new(Self::FULL_PAGE_NAME, Length::ZERO, Length::ZERO)
    }

    /// A page size without dimensions stands for the full sheet
    pub fn is_full_page(&self) -> bool {
        self.width.is_zero() && self.height.is_zero()
    }

    pub fn standard_sizes() -> Vec<PublicationPageSize> {
        vec![
            Self::full_page(),
            Self::new("Half Letter", Length::from_inches(5.5), Length::from_inches(8.5)),
            Self::new("Trade", Length::from_inches(6.0), Length::from_inches(9.0)),
            Self::new("Pocket", Length::from_inches(4.25), Length::from_inches(6.875)),
            Self::new("A5", Length::from_mm(148.0), Length::from_mm(210.0)),
            Self::new("A6", Length::from_mm(105.0), Length::from_mm(148.0)),
        ]
    }
}

impl Default for PublicationPageSize {
    fn default() -> Self {
        Self::full_page()
    }
}

/// A rectangular area, origin at the top-left corner of the page box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: Length,
    pub y: Length,
    pub width: Length,
    pub height: Length,
}

impl Rect {
    pub fn new(x: Length, y: Length, width: Length, height: Length) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> Length {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> Length {
        self.y + self.height
    }
}
