// Copyright (c) 2016, 2020 Brandon Thomas <bt@brand.io>

//! Canonical keys for comparing spoken amounts.
//!
//! Typed amounts vary in ways that don't change their value:
//!
//! ```text
//! שנים עשר שקלים
//! שתים עשרה שקל
//! שניים עשר שקלים חדשים
//! ```
//!
//! [`canonicalize`] strips currency words and punctuation, folds gender and spelling variants,
//! and drops the conjunction letter, so these all reduce to the same key. It is a heuristic:
//! unrelated phrases can collide.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

/// Rewrite steps, applied strictly in this order. Later steps rely on earlier ones; reordering
/// them changes the keys.
static REWRITES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
  [
    // Only Hebrew letters and spaces survive, so ש"ח becomes שח.
    (r"[^א-ת ]", ""),
    // Currency words, old and new, singular and plural.
    (r"\bו?(?:שקלים חדשים|שקל חדש|שקלים|שקל|שח|אגורות|אגורה)\b", ""),
    // "New" left over from the previous step, or standing alone.
    (r"\bו?חדש(?:ים)?\b", ""),
    // Word-final ה before a space: חמישה עשר and חמש עשרה meet here.
    (r"ה ", " "),
    (r"יי", "י"),
    (r"שתי", "שני"),
    (r"אחת", "אחד"),
    (r"חמש", "חמיש"),
    (r"שש", "שיש"),
    (r"מליון", "מיליון"),
    (r"מליארד|מילירד", "מיליארד"),
    // Every ו, wherever it sits.
    (r"ו", ""),
    (r"\s+", " "),
  ]
  .iter()
  .map(|&(pattern, replacement)| {
    (Regex::new(pattern).expect("valid canonical rewrite regex"), replacement)
  })
  .collect()
});

fn rewrite(text: &str) -> String {
  let rewritten = REWRITES.iter().fold(text.to_string(), |text, (regex, replacement)| {
    regex.replace_all(&text, *replacement).into_owned()
  });
  rewritten.trim().to_string()
}

/// Reduce a spoken amount to its canonical key.
///
/// The rewrites are repeated until the key stops changing, so a key is always its own key.
///
/// ```rust
/// use shekels::canonicalize;
///
/// assert_eq!(canonicalize("שתים עשרה שקל ושמונים אגורות"), canonicalize("שניים עשר שמונים"));
/// ```
pub fn canonicalize(phrase: &str) -> String {
  let mut key = rewrite(phrase);
  loop {
    let next = rewrite(&key);
    if next == key {
      return key;
    }
    trace!("canonical key {:?} rewritten to {:?}", key, next);
    key = next;
  }
}

/// Whether two spoken amounts share a canonical key.
pub fn phrases_match(left: &str, right: &str) -> bool {
  canonicalize(left) == canonicalize(right)
}
