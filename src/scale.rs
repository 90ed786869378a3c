// Copyright (c) 2016, 2020 Brandon Thomas <bt@brand.io>

//! Splitting an integer into base-1000 groups.

use num::Integer;

/// The magnitude a three digit group counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
  /// Plain units, no scale noun.
  Units,
  /// Thousands (אלף).
  Thousands,
  /// Millions (מיליון).
  Millions,
  /// Billions (מיליארד).
  Billions,
}

/// Scales in increasing significance.
pub const SCALES: [Scale; 4] = [
  Scale::Units,
  Scale::Thousands,
  Scale::Millions,
  Scale::Billions,
];

impl Scale {
  /// The scale noun, or `None` for plain units.
  pub fn noun(self) -> Option<&'static str> {
    match self {
      Scale::Units => None,
      Scale::Thousands => Some("אלף"),
      Scale::Millions => Some("מיליון"),
      Scale::Billions => Some("מיליארד"),
    }
  }

  /// Position of the scale; 0 is units.
  pub fn index(self) -> usize {
    match self {
      Scale::Units => 0,
      Scale::Thousands => 1,
      Scale::Millions => 2,
      Scale::Billions => 3,
    }
  }
}

/// One base-1000 digit triplet and the scale it counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleGroup {
  /// Value of the triplet, at most 999.
  pub value: u16,
  /// Scale of the triplet.
  pub scale: Scale,
}

/// Split `number` into groups of three digits, least significant first.
///
/// Only groups up to the most significant non-zero one are returned, so zero
/// yields no groups at all.
///
/// Panics if `number` needs more groups than there are scales.
pub fn decompose(number: u64) -> Vec<ScaleGroup> {
  let mut groups = Vec::new();
  let mut rest = number;

  for scale in SCALES.iter() {
    if rest == 0 {
      break;
    }
    let (quotient, value) = rest.div_rem(&1000);
    groups.push(ScaleGroup { value: value as u16, scale: *scale });
    rest = quotient;
  }

  assert_eq!(rest, 0, "{} has more digit groups than known scales", number);
  groups
}

#[cfg(test)]
mod tests {
  use super::{decompose, Scale, ScaleGroup};

  fn values(number: u64) -> Vec<u16> {
    decompose(number).iter().map(|group| group.value).collect()
  }

  #[test]
  fn zero_has_no_groups() {
    assert!(decompose(0).is_empty());
  }

  #[test]
  fn groups_are_little_endian() {
    assert_eq!(vec![7], values(7));
    assert_eq!(vec![3, 2], values(2_003));
    assert_eq!(vec![0, 0, 1], values(1_000_000));
    assert_eq!(vec![210, 543, 876, 9], values(9_876_543_210));
    assert_eq!(vec![999, 999, 999, 999], values(999_999_999_999));
  }

  #[test]
  fn groups_carry_their_scale() {
    assert_eq!(decompose(5_004_003), vec![
      ScaleGroup { value: 3, scale: Scale::Units },
      ScaleGroup { value: 4, scale: Scale::Thousands },
      ScaleGroup { value: 5, scale: Scale::Millions },
    ]);
    assert_eq!(Some("מיליארד"), decompose(1_000_000_000)[3].scale.noun());
    assert_eq!(3, decompose(1_000_000_000)[3].scale.index());
  }

  #[test]
  fn groups_reconstruct_the_number() {
    for &number in &[1u64, 1_001, 90_807_060_504, 100_000_000_001, 999_999_999_999] {
      let rebuilt = decompose(number).iter()
          .map(|group| group.value as u64 * 1000u64.pow(group.scale.index() as u32))
          .sum::<u64>();
      assert_eq!(number, rebuilt);
    }
  }

  #[test]
  #[should_panic(expected = "more digit groups")]
  fn thirteen_digits_are_a_logic_error() {
    decompose(1_222_333_444_555);
  }
}
