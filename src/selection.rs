//! Pure selection-set operations.

use std::collections::BTreeSet;

/// Toggle `asset_id` in `selection`: added if absent, removed if present.
///
/// Pure; the session wrapper layers display-hint clearing and the
/// selectability / max-count policy on top of this.
pub fn toggle(selection: &BTreeSet<String>, asset_id: &str) -> BTreeSet<String> {
  let mut next = selection.clone();
  if !next.remove(asset_id) {
    next.insert(asset_id.to_string());
  }
  next
}

#[cfg(test)]
mod tests {
  use super::*;

  fn set(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn toggle_adds_then_removes() {
    let s0 = set(&["a"]);
    let s1 = toggle(&s0, "b");
    assert_eq!(s1, set(&["a", "b"]));
    let s2 = toggle(&s1, "a");
    assert_eq!(s2, set(&["b"]));
  }

  #[test]
  fn toggle_twice_is_identity() {
    for start in [set(&[]), set(&["a"]), set(&["a", "b", "c"])] {
      for id in ["a", "x"] {
        assert_eq!(toggle(&toggle(&start, id), id), start);
      }
    }
  }

  #[test]
  fn toggle_does_not_mutate_input() {
    let s0 = set(&["a"]);
    let _ = toggle(&s0, "b");
    assert_eq!(s0, set(&["a"]));
  }
}
