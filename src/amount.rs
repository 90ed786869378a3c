// Copyright (c) 2016, 2020 Brandon Thomas <bt@brand.io>

//! Validating raw amounts.
//!
//! A raw amount is coerced to a number, rendered back as its shortest decimal string, and that
//! string must have 1 to 12 integer digits and at most 2 fractional digits.

use crate::{ShekelsError, ShekelsResult};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Largest whole number of shekels that can be spelled out.
pub const MAX_SHEKELS: u64 = 999_999_999_999;

/// Largest number of agorot.
pub const MAX_AGOROT: u8 = 99;

static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^([0-9]{1,12})(?:\.([0-9]{1,2}))?$").expect("valid amount regex")
});

/// A validated, non-negative amount of shekels and agorot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount {
  shekels: u64,
  agorot: u8,
}

impl Amount {
  /// Build an amount, checking both parts are in range.
  pub fn new(shekels: u64, agorot: u8) -> ShekelsResult<Amount> {
    if shekels > MAX_SHEKELS || agorot > MAX_AGOROT {
      return Err(ShekelsError::OutOfRange { shekels, agorot });
    }
    Ok(Amount { shekels, agorot })
  }

  /// Whole shekels.
  pub fn shekels(&self) -> u64 {
    self.shekels
  }

  /// Agorot, in 0..=99.
  pub fn agorot(&self) -> u8 {
    self.agorot
  }

  /// Whether both parts are zero.
  pub fn is_zero(&self) -> bool {
    self.shekels == 0 && self.agorot == 0
  }
}

impl fmt::Display for Amount {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{:02}", self.shekels, self.agorot)
  }
}

impl FromStr for Amount {
  type Err = ShekelsError;

  /// Parse with the same coercion as [`parse_amount`]. Text worth zero, including empty or
  /// whitespace-only text, parses to a zero amount.
  fn from_str(s: &str) -> ShekelsResult<Amount> {
    parse_amount(AmountInput::Text(s)).map(|amount| amount.unwrap_or_default())
  }
}

impl Default for Amount {
  fn default() -> Self {
    Amount { shekels: 0, agorot: 0 }
  }
}

/// A raw amount as a caller may hold it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmountInput<'a> {
  /// No amount at all.
  Absent,
  /// An integer of any sign.
  Integer(i128),
  /// A floating point number.
  Float(f64),
  /// Text to be read as a number.
  Text(&'a str),
}

impl<'a> From<f64> for AmountInput<'a> {
  fn from(value: f64) -> Self {
    AmountInput::Float(value)
  }
}

impl<'a> From<&'a str> for AmountInput<'a> {
  fn from(value: &'a str) -> Self {
    AmountInput::Text(value)
  }
}

impl<'a> From<&'a String> for AmountInput<'a> {
  fn from(value: &'a String) -> Self {
    AmountInput::Text(value.as_str())
  }
}

impl<'a, T> From<Option<T>> for AmountInput<'a> where T: Into<AmountInput<'a>> {
  fn from(value: Option<T>) -> Self {
    value.map(|inner| inner.into()).unwrap_or(AmountInput::Absent)
  }
}

macro_rules! integer_input_impl {
  ($($t:ty)*) => ($(
    impl<'a> From<$t> for AmountInput<'a> {
      #[inline]
      fn from(value: $t) -> Self {
        AmountInput::Integer(value as i128)
      }
    }
  )*)
}

integer_input_impl!(usize u8 u16 u32 u64 isize i8 i16 i32 i64);

// Outcome of coercing a raw amount to a number.
enum Coerced {
  Zero,
  Rendered(String),
}

fn coerce(input: AmountInput<'_>) -> Coerced {
  match input {
    AmountInput::Absent => Coerced::Zero,
    AmountInput::Integer(0) => Coerced::Zero,
    AmountInput::Integer(value) => Coerced::Rendered(value.to_string()),
    AmountInput::Float(value) => coerce_float(value),
    AmountInput::Text(text) => coerce_text(text),
  }
}

fn coerce_float(value: f64) -> Coerced {
  // Both signs of zero, and NaN, count as no amount.
  if value == 0.0 || value.is_nan() {
    Coerced::Zero
  } else {
    Coerced::Rendered(value.to_string())
  }
}

fn coerce_text(text: &str) -> Coerced {
  let text = text.trim();
  if text.is_empty() {
    return Coerced::Zero;
  }

  let radix = match text.get(..2) {
    Some("0x") | Some("0X") => Some(16),
    Some("0o") | Some("0O") => Some(8),
    Some("0b") | Some("0B") => Some(2),
    _ => None,
  };

  let value = match radix {
    Some(radix) => u64::from_str_radix(&text[2..], radix).map(|value| value as f64).ok(),
    None => text.parse::<f64>().ok(),
  };

  match value {
    Some(value) if value == 0.0 => Coerced::Zero,
    Some(value) => Coerced::Rendered(value.to_string()),
    // Unparseable text reads as NaN, which renders as non-numeric text.
    None => Coerced::Rendered(text.to_string()),
  }
}

/// Validate a raw amount.
///
/// Returns `Ok(None)` when there is no amount (absent, empty or zero), and
/// [`ShekelsError::InvalidAmount`] when the amount is negative, not a number, has more than 12
/// integer digits or more than 2 fractional digits. A single fractional digit counts tens of
/// agorot, so `"1.2"` is one shekel and 20 agorot.
///
/// ```rust
/// use shekels::{parse_amount, Amount};
///
/// assert_eq!(parse_amount("1.2".into()).unwrap(), Some(Amount::new(1, 20).unwrap()));
/// assert_eq!(parse_amount(0u32.into()).unwrap(), None);
/// assert!(parse_amount("-5".into()).is_err());
/// ```
pub fn parse_amount(input: AmountInput<'_>) -> ShekelsResult<Option<Amount>> {
  let rendered = match coerce(input) {
    Coerced::Zero => {
      debug!("no amount given");
      return Ok(None);
    },
    Coerced::Rendered(rendered) => rendered,
  };

  let captures = match AMOUNT_RE.captures(&rendered) {
    Some(captures) => captures,
    None => {
      debug!("rejected amount {:?}", rendered);
      return Err(ShekelsError::InvalidAmount(rendered));
    },
  };

  let shekels = captures[1].parse::<u64>()
      .map_err(|_| ShekelsError::InvalidAmount(rendered.clone()))?;

  let agorot = match captures.get(2) {
    Some(fraction) if fraction.as_str().len() == 1 => fraction.as_str().parse::<u8>().map(|tens| tens * 10),
    Some(fraction) => fraction.as_str().parse::<u8>(),
    None => Ok(0),
  }.map_err(|_| ShekelsError::InvalidAmount(rendered.clone()))?;

  Amount::new(shekels, agorot).map(Some)
}
