// Copyright (c) 2016, 2020 Brandon Thomas <bt@brand.io>

//! Joining spoken fragments into a phrase.

/// The Hebrew conjunction. It is written as a prefix, with no space, on the word it joins.
pub const CONJUNCTION: &'static str = "ו";

/// Join fragments, prefixing the conjunction to the last non-empty fragment only.
///
/// ```rust
/// use shekels::join::join;
///
/// assert_eq!(join(&["מאה", "", "עשרים", "שלושה"]), "מאה עשרים ושלושה");
/// assert_eq!(join(&["", "אלף"]), "אלף");
/// ```
pub fn join<S: AsRef<str>>(fragments: &[S]) -> String {
  let mut kept: Vec<&str> = fragments.iter()
      .map(|fragment| fragment.as_ref())
      .filter(|fragment| !fragment.is_empty())
      .collect();

  let last = match kept.pop() {
    Some(last) => last,
    None => return String::new(),
  };

  if kept.is_empty() {
    return last.to_string();
  }

  format!("{} {}{}", kept.join(" "), CONJUNCTION, last)
}

/// Space-separate two fragments. No conjunction; an empty side yields the other.
pub fn concat(head: &str, tail: &str) -> String {
  match (head.is_empty(), tail.is_empty()) {
    (_, true) => head.to_string(),
    (true, false) => tail.to_string(),
    (false, false) => format!("{} {}", head, tail),
  }
}
