// Copyright (c) 2016, 2020 Brandon Thomas <bt@brand.io>

//! Hebrew numeral tables and the shekel/agorot converters.
//!
//! The shekel is a masculine noun and the agora a feminine one, so each gets its own numeral
//! forms. Words are produced in speech order: hundreds, then tens, then units.

use crate::join::{concat, join};
use crate::scale::{decompose, Scale, ScaleGroup};
use log::trace;
use num::Integer;

/// Plural shekel noun.
pub const SHEKELS: &'static str = "שקלים";

/// Phrase for exactly one shekel. The numeral follows the noun here.
pub const ONE_SHEKEL: &'static str = "שקל אחד";

/// Plural agora noun.
pub const AGOROT: &'static str = "אגורות";

/// Singular agora noun, used alone for exactly one agora.
pub const ONE_AGORA: &'static str = "אגורה";

/// Numeral forms for one grammatical gender. Every table is indexed by digit; slot 0 is unused.
pub struct Numerals {
  /// One through nine.
  pub units: [&'static str; 10],
  /// Eleven through nineteen, indexed by the units digit.
  pub teens: [&'static str; 10],
  /// Ten through ninety, indexed by the tens digit.
  pub tens: [&'static str; 10],
  /// Construct form of two, used when two stands alone before a noun.
  pub dual: &'static str,
}

/// Forms agreeing with a masculine noun (שקל).
pub const MASCULINE: Numerals = Numerals {
  units: [
    "",
    "אחד",
    "שניים",
    "שלושה",
    "ארבעה",
    "חמישה",
    "שישה",
    "שבעה",
    "שמונה",
    "תשעה",
  ],
  teens: [
    "",
    "אחד עשר",
    "שנים עשר",
    "שלושה עשר",
    "ארבעה עשר",
    "חמישה עשר",
    "שישה עשר",
    "שבעה עשר",
    "שמונה עשר",
    "תשעה עשר",
  ],
  tens: [
    "",
    "עשרה",
    "עשרים",
    "שלושים",
    "ארבעים",
    "חמישים",
    "שישים",
    "שבעים",
    "שמונים",
    "תשעים",
  ],
  dual: "שני",
};

/// Forms agreeing with a feminine noun (אגורה).
pub const FEMININE: Numerals = Numerals {
  units: [
    "",
    "אחת",
    "שתיים",
    "שלוש",
    "ארבע",
    "חמש",
    "שש",
    "שבע",
    "שמונה",
    "תשע",
  ],
  teens: [
    "",
    "אחת עשרה",
    "שתים עשרה",
    "שלוש עשרה",
    "ארבע עשרה",
    "חמש עשרה",
    "שש עשרה",
    "שבע עשרה",
    "שמונה עשרה",
    "תשע עשרה",
  ],
  tens: [
    "",
    "עשר",
    "עשרים",
    "שלושים",
    "ארבעים",
    "חמישים",
    "שישים",
    "שבעים",
    "שמונים",
    "תשעים",
  ],
  dual: "שתי",
};

/// Hundreds have their own words; they are not built from a digit and "hundred".
const HUNDREDS: [&'static str; 10] = [
  "",
  "מאה",
  "מאתיים",
  "שלוש מאות",
  "ארבע מאות",
  "חמש מאות",
  "שש מאות",
  "שבע מאות",
  "שמונה מאות",
  "תשע מאות",
];

/// One through ten thousand each have a collective form replacing "N thousand".
const THOUSANDS: [&'static str; 11] = [
  "",
  "אלף",
  "אלפיים",
  "שלושת אלפים",
  "ארבעת אלפים",
  "חמשת אלפים",
  "ששת אלפים",
  "שבעת אלפים",
  "שמונת אלפים",
  "תשעת אלפים",
  "עשרת אלפים",
];

// Teens are never split into units and ten.
fn tens_and_units(value: u16, numerals: &Numerals) -> Vec<&'static str> {
  let (tens, units) = value.div_rem(&10);
  if tens == 1 && units != 0 {
    return vec![numerals.teens[units as usize]];
  }

  [numerals.tens[tens as usize], numerals.units[units as usize]]
      .iter()
      .cloned()
      .filter(|word| !word.is_empty())
      .collect()
}

/// Words for 0..=999 in masculine agreement, in speech order, not yet joined.
pub fn masculine_pieces(value: u16) -> Vec<&'static str> {
  if value == 2 {
    return vec![MASCULINE.dual];
  }

  let (hundreds, rest) = value.div_rem(&100);
  let mut pieces = Vec::with_capacity(3);
  if hundreds != 0 {
    pieces.push(HUNDREDS[hundreds as usize]);
  }
  pieces.extend(tens_and_units(rest, &MASCULINE));
  pieces
}

/// Words for 0..=99 in feminine agreement, in speech order, not yet joined.
pub fn feminine_pieces(value: u8) -> Vec<&'static str> {
  if value == 2 {
    return vec![FEMININE.dual];
  }
  tens_and_units(value as u16, &FEMININE)
}

/// Top-level components contributed by one scale group.
///
/// A scaled group is always a single component, conjunction included, so that
/// "מאתיים ואחד אלף" joins as one piece against the groups around it. An unscaled group
/// returns its loose pieces for the outer join to place the conjunction among.
///
/// Panics if the group value exceeds 999.
pub fn group_words(group: ScaleGroup) -> Vec<String> {
  assert!(group.value <= 999, "scale group {} is not a 3 digit number", group.value);

  if group.value == 0 {
    return Vec::new();
  }

  let noun = match group.scale.noun() {
    Some(noun) => noun,
    None => {
      return masculine_pieces(group.value).into_iter().map(|word| word.to_string()).collect();
    },
  };

  let component = if group.scale == Scale::Thousands && (group.value as usize) < THOUSANDS.len() {
    THOUSANDS[group.value as usize].to_string()
  } else if group.value == 1 {
    noun.to_string()
  } else {
    concat(&join(&masculine_pieces(group.value)), noun)
  };

  trace!("group {} at scale {:?} -> {}", group.value, group.scale, component);
  vec![component]
}

/// Spell out a whole number of shekels.
///
/// Zero yields an empty string and one yields the fixed singular phrase.
///
/// Panics above 999,999,999,999.
pub fn integer_to_words(shekels: u64) -> String {
  match shekels {
    0 => String::new(),
    1 => ONE_SHEKEL.to_string(),
    _ => {
      let components: Vec<String> = decompose(shekels)
          .into_iter()
          .rev()
          .flat_map(group_words)
          .collect();
      concat(&join(&components), SHEKELS)
    },
  }
}

/// Spell out agorot.
///
/// Zero yields an empty string and one yields the bare singular noun.
///
/// Panics above 99.
pub fn agorot_to_words(agorot: u8) -> String {
  assert!(agorot <= 99, "{} agorot is not a 2 digit number", agorot);

  match agorot {
    0 => String::new(),
    1 => ONE_AGORA.to_string(),
    _ => concat(&join(&feminine_pieces(agorot)), AGOROT),
  }
}
