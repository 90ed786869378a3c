// Copyright (c) 2016, 2020 Brandon Thomas <bt@brand.io>

#![deny(dead_code)]
#![deny(missing_docs)]
#![deny(unreachable_patterns)]
#![deny(unused_extern_crates)]
#![deny(unused_imports)]
#![deny(unused_qualifications)]

//! **Shekels**, a library for spelling out shekel amounts in Hebrew words.
//!
//! Usage:
//!
//! ```rust
//! use shekels::Shekels;
//!
//! let converter = Shekels::default();
//!
//! assert_eq!(converter.amount_to_words(1.23), "שקל אחד ועשרים ושלוש אגורות");
//! assert_eq!(converter.amount_to_words("abc"), "לא הוקש סכום תקין");
//! assert_eq!(converter.amount_to_words(None::<u64>), "");
//! ```
//!
//! Typed amounts can be compared loosely through their canonical keys:
//!
//! ```rust
//! assert!(shekels::phrases_match("שתים עשרה שקל", "שנים עשר שקלים חדשים"));
//! ```

pub mod amount;
pub mod canonical;
pub mod join;
pub mod scale;
pub mod words;

pub use amount::{parse_amount, Amount, AmountInput, MAX_AGOROT, MAX_SHEKELS};
pub use canonical::{canonicalize, phrases_match};
pub use words::{agorot_to_words, integer_to_words};

use log::debug;
use thiserror::Error;

/// Phrase returned in place of words when the amount is not valid ("no valid amount was entered").
pub const INVALID_AMOUNT: &'static str = "לא הוקש סכום תקין";

/// Library errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShekelsError {
  /// The raw amount is negative, not a number, or has too many digits.
  #[error("not a valid amount: {0:?}")]
  InvalidAmount(String),

  /// An amount was built from parts outside their ranges.
  #[error("{shekels} shekels and {agorot} agorot is out of range")]
  OutOfRange {
    /// Requested shekels.
    shekels: u64,
    /// Requested agorot.
    agorot: u8,
  },
}

/// Result alias for this crate.
pub type ShekelsResult<T> = Result<T, ShekelsError>;

/// *Shekels* converts amounts into their spoken Hebrew form.
#[derive(Debug, Clone, Default)]
pub struct Shekels {
  custom_invalid_phrase: Option<String>,
}

/// *ShekelsBuilder* lets you configure a *Shekels* instance.
#[derive(Debug, Clone, Default)]
pub struct ShekelsBuilder {
  custom_invalid_phrase: Option<String>,
}

impl Shekels {
  /// Configure a Shekels instance.
  pub fn builder() -> ShekelsBuilder {
    ShekelsBuilder {
      custom_invalid_phrase: None,
    }
  }

  /// Spell out a raw amount.
  ///
  /// Absent, empty and zero amounts give an empty string. Invalid amounts give the invalid
  /// phrase, which is [`INVALID_AMOUNT`] unless configured otherwise.
  ///
  /// ```rust
  /// use shekels::Shekels;
  /// let converter = Shekels::default();
  ///
  /// assert_eq!(converter.amount_to_words(2), "שני שקלים");
  /// assert_eq!(converter.amount_to_words("0.02"), "שתי אגורות");
  /// ```
  pub fn amount_to_words<'a, A>(&self, amount: A) -> String
    where A: Into<AmountInput<'a>>
  {
    match parse_amount(amount.into()) {
      Ok(Some(amount)) => self.convert_amount(amount),
      Ok(None) => String::new(),
      Err(err) => {
        debug!("{}", err);
        self.invalid_phrase().to_string()
      },
    }
  }

  /// Spell out an already validated amount. The agorot, if any, follow the shekels after the
  /// conjunction.
  pub fn convert_amount(&self, amount: Amount) -> String {
    join::join(&[
      integer_to_words(amount.shekels()),
      agorot_to_words(amount.agorot()),
    ])
  }

  /// The phrase used for invalid amounts.
  pub fn invalid_phrase(&self) -> &str {
    self.custom_invalid_phrase
        .as_ref()
        .map(|phrase| phrase.as_str())
        .unwrap_or(INVALID_AMOUNT)
  }
}

impl ShekelsBuilder {
  /// Set a custom phrase to return for invalid amounts.
  /// By default [`INVALID_AMOUNT`] is used. You can unset your override by supplying 'None'.
  pub fn set_custom_invalid_phrase(mut self, phrase: Option<&str>) -> ShekelsBuilder {
    self.custom_invalid_phrase = phrase.map(|s| s.to_string());
    self
  }

  /// Creates the Shekels instance, consuming the ShekelsBuilder.
  pub fn build(self) -> Shekels {
    Shekels {
      custom_invalid_phrase: self.custom_invalid_phrase,
    }
  }
}

/// Spell out a raw amount with the default configuration.
///
/// ```rust
/// assert_eq!(shekels::amount_to_words(11_000), "אחד עשר אלף שקלים");
/// ```
pub fn amount_to_words<'a, A>(amount: A) -> String
  where A: Into<AmountInput<'a>>
{
  Shekels::default().amount_to_words(amount)
}
