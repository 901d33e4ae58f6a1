//! Fixed-width digit strings.
//!
//! The routine only ever deals with 3-digit and 4-digit numbers, and it must
//! keep leading zeros: `0999` is a different step input than `999`. [`Digits`]
//! pairs a value with its [`Width`] so the zero padding is never lost.

use std::fmt::{self, Display};
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Width
// ============================================================================

/// Number of digits the routine operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Width {
    /// 3-digit numbers, converging to 495.
    Three,
    /// 4-digit numbers, converging to 6174.
    Four,
}

impl Width {
    /// Every supported width, narrowest first.
    pub const ALL: [Width; 2] = [Width::Three, Width::Four];

    /// Returns the number of digits.
    pub const fn digits(self) -> usize {
        match self {
            Width::Three => 3,
            Width::Four => 4,
        }
    }

    /// Returns Kaprekar's constant for this width.
    pub const fn constant(self) -> u16 {
        match self {
            Width::Three => 495,
            Width::Four => 6174,
        }
    }

    /// Returns the inclusive range of seeds accepted for this width.
    pub const fn seed_range(self) -> RangeInclusive<u32> {
        match self {
            Width::Three => 100..=999,
            Width::Four => 1000..=9999,
        }
    }

    /// Returns the width whose seed range contains `value`, if any.
    pub fn for_value(value: u32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|width| width.seed_range().contains(&value))
    }

    /// One past the largest value representable at this width.
    const fn modulus(self) -> u16 {
        match self {
            Width::Three => 1_000,
            Width::Four => 10_000,
        }
    }
}

impl Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digits())
    }
}

impl From<Width> for u8 {
    fn from(width: Width) -> Self {
        match width {
            Width::Three => 3,
            Width::Four => 4,
        }
    }
}

impl TryFrom<u8> for Width {
    type Error = InvalidWidth;

    fn try_from(digits: u8) -> Result<Self, Self::Error> {
        match digits {
            3 => Ok(Width::Three),
            4 => Ok(Width::Four),
            other => Err(InvalidWidth(other)),
        }
    }
}

/// A digit count other than 3 or 4.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unsupported width {0}: only 3 and 4 digits are supported")]
pub struct InvalidWidth(pub u8);

// ============================================================================
// Digits
// ============================================================================

/// Digits in the widest supported width.
const MAX_DIGITS: usize = 4;

/// A non-negative integer rendered at a fixed, zero-padded width.
///
/// Serializes as its padded string, e.g. `"0378"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Digits {
    value: u16,
    width: Width,
}

impl Digits {
    /// Creates a digit string, or `None` if `value` does not fit in `width`.
    pub fn new(value: u16, width: Width) -> Option<Self> {
        (value < width.modulus()).then_some(Self { value, width })
    }

    /// Kaprekar's constant for `width`.
    pub fn constant(width: Width) -> Self {
        Self {
            value: width.constant(),
            width,
        }
    }

    /// Builds a digit string from its digits, most significant first.
    ///
    /// `digits` must hold exactly `width.digits()` values in `0..=9`.
    pub(crate) fn from_digits(digits: &[u8], width: Width) -> Self {
        debug_assert_eq!(digits.len(), width.digits());
        debug_assert!(digits.iter().all(|d| *d <= 9));

        let value = digits
            .iter()
            .fold(0u16, |acc, digit| acc * 10 + u16::from(*digit));
        Self { value, width }
    }

    /// `self - smaller`, padded to the shared width.
    ///
    /// Both operands must have the same width and `smaller` must not exceed
    /// `self`; the difference then always fits.
    pub(crate) fn difference(self, smaller: Self) -> Self {
        debug_assert_eq!(self.width, smaller.width);
        Self {
            value: self.value - smaller.value,
            width: self.width,
        }
    }

    /// Returns the numeric value (leading zeros carry no weight).
    pub fn value(self) -> u16 {
        self.value
    }

    /// Returns the width.
    pub fn width(self) -> Width {
        self.width
    }

    /// Returns the digits, most significant first, including leading zeros.
    pub fn to_digits(self) -> Vec<u8> {
        let (buf, len) = self.digit_buffer();
        buf[..len].to_vec()
    }

    /// The permutation of these digits in ascending order (smallest value).
    pub fn sorted_ascending(self) -> Self {
        let (mut buf, len) = self.digit_buffer();
        buf[..len].sort_unstable();
        Self::from_digits(&buf[..len], self.width)
    }

    /// The permutation of these digits in descending order (largest value).
    pub fn sorted_descending(self) -> Self {
        let (mut buf, len) = self.digit_buffer();
        buf[..len].sort_unstable_by(|a, b| b.cmp(a));
        Self::from_digits(&buf[..len], self.width)
    }

    /// Digits in a stack buffer; only the first `len` entries are meaningful.
    fn digit_buffer(self) -> ([u8; MAX_DIGITS], usize) {
        let len = self.width.digits();
        let mut buf = [0u8; MAX_DIGITS];
        let mut rest = self.value;
        for slot in buf[..len].iter_mut().rev() {
            *slot = (rest % 10) as u8;
            rest /= 10;
        }
        (buf, len)
    }
}

impl Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.value, width = self.width.digits())
    }
}

impl From<Digits> for String {
    fn from(digits: Digits) -> Self {
        digits.to_string()
    }
}

impl FromStr for Digits {
    type Err = ParseDigitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let width = u8::try_from(s.len())
            .ok()
            .and_then(|len| Width::try_from(len).ok())
            .ok_or_else(|| ParseDigitsError::Length(s.len()))?;

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseDigitsError::NonDigit(s.to_string()));
        }

        let digits: Vec<u8> = s.bytes().map(|b| b - b'0').collect();
        Ok(Self::from_digits(&digits, width))
    }
}

impl TryFrom<String> for Digits {
    type Error = ParseDigitsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Errors from parsing a padded digit string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDigitsError {
    #[error("digit string must be 3 or 4 characters long, got {0}")]
    Length(usize),

    #[error("digit string '{0}' contains a non-digit character")]
    NonDigit(String),
}
