//! Property-based invariant tests for amount spelling and canonical keys.
//!
//! 1. Every whole amount up to the limit spells out, ending in the right noun
//! 2. Phrases have no stray whitespace
//! 3. The conjunction goes only before the last top-level component
//! 4. Agorot-only amounts end in the agora noun and never start with the conjunction
//! 5. Amounts past twelve digits are rejected
//! 6. Canonical keys are fixed points, for arbitrary text too
//! 7. A spelled amount matches itself with the conjunctions stripped out

use proptest::prelude::*;
use shekels::scale::decompose;
use shekels::words::group_words;
use shekels::{amount_to_words, canonicalize, phrases_match, Amount, Shekels, INVALID_AMOUNT};

// ── Helpers ──────────────────────────────────────────────────────────

fn is_tidy(phrase: &str) -> bool {
  phrase.trim() == phrase && !phrase.contains("  ")
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Whole amounts spell out with the right noun
// ═════════════════════════════════════════════════════════════════════════

proptest! {
  #[test]
  fn whole_amounts_end_in_shekels(amount in 2u64..=999_999_999_999) {
    let phrase = amount_to_words(amount);
    prop_assert!(phrase.ends_with(" שקלים"), "{} -> {}", amount, phrase);
    prop_assert!(!phrase.contains("שקל אחד"));
  }
}

#[test]
fn one_shekel_is_singular() {
  assert_eq!("שקל אחד", amount_to_words(1u64));
  assert_eq!("", amount_to_words(0u64));
}

// ═════════════════════════════════════════════════════════════════════════
// 2. No stray whitespace
// ═════════════════════════════════════════════════════════════════════════

proptest! {
  #[test]
  fn phrases_are_tidy(shekels in 0u64..=999_999_999_999, agorot in 0u8..=99) {
    let amount = Amount::new(shekels, agorot).unwrap();
    let phrase = Shekels::default().convert_amount(amount);
    prop_assert!(is_tidy(&phrase), "untidy phrase {:?}", phrase);
    prop_assert_eq!(phrase.is_empty(), amount.is_zero());
  }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Conjunction placement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
  #[test]
  fn conjunction_only_before_last_component(amount in 2u64..=999_999_999_999) {
    let components: Vec<String> = decompose(amount)
        .into_iter()
        .rev()
        .flat_map(group_words)
        .collect();
    let phrase = amount_to_words(amount);
    let spoken = phrase.strip_suffix(" שקלים").unwrap();
    let (last, head) = components.split_last().unwrap();

    if head.is_empty() {
      prop_assert_eq!(spoken, last.as_str());
    } else {
      for component in head {
        prop_assert!(!component.starts_with('ו'), "{} in {}", component, phrase);
      }
      prop_assert_eq!(spoken, format!("{} ו{}", head.join(" "), last));
    }
  }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Agorot only
// ═════════════════════════════════════════════════════════════════════════

proptest! {
  #[test]
  fn agorot_only_amounts(agorot in 2u8..=99) {
    let phrase = Shekels::default().convert_amount(Amount::new(0, agorot).unwrap());
    prop_assert!(phrase.ends_with(" אגורות"), "{} -> {}", agorot, phrase);
    prop_assert!(!phrase.starts_with('ו'));
    prop_assert!(!phrase.contains("שקל"));
  }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Too many digits
// ═════════════════════════════════════════════════════════════════════════

proptest! {
  #[test]
  fn thirteen_digits_are_invalid(amount in 1_000_000_000_000u64..=u64::MAX) {
    prop_assert_eq!(INVALID_AMOUNT, amount_to_words(amount));
  }

  #[test]
  fn negative_amounts_are_invalid(amount in i64::MIN..0) {
    prop_assert_eq!(INVALID_AMOUNT, amount_to_words(amount));
  }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Canonical keys are fixed points
// ═════════════════════════════════════════════════════════════════════════

proptest! {
  #[test]
  fn canonicalize_is_idempotent(phrase in "\\PC{0,60}") {
    let key = canonicalize(&phrase);
    prop_assert_eq!(canonicalize(&key), key.clone());
    prop_assert!(is_tidy(&key));
  }

  #[test]
  fn canonicalize_is_idempotent_on_hebrew(phrase in "[א-ת ,\"\\-]{0,60}") {
    let key = canonicalize(&phrase);
    prop_assert_eq!(canonicalize(&key), key.clone());
  }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Spelled amounts match their conjunction-free form
// ═════════════════════════════════════════════════════════════════════════

proptest! {
  #[test]
  fn conjunctions_do_not_change_the_key(amount in 1u64..=999_999_999_999) {
    let phrase = amount_to_words(amount);
    let bare: String = phrase
        .split(' ')
        .map(|word| word.strip_prefix('ו').unwrap_or(word))
        .collect::<Vec<_>>()
        .join(" ");
    prop_assert!(phrases_match(&phrase, &bare), "{} vs {}", phrase, bare);
  }
}
