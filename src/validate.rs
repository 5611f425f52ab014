//! Deterministic pass/fail validation of a selection against a challenge.

use std::collections::BTreeSet;

use tracing::debug;

use crate::domain::Challenge;

/// True iff `selection` equals the challenge's snapshotted correct set.
///
/// Set equality only (size plus containment both directions, i.e. an empty
/// symmetric difference): no partial credit, no ordering sensitivity, no
/// retry counting. An incorrect selection is a boolean outcome, not an error.
pub fn validate(challenge: &Challenge, selection: &BTreeSet<String>) -> bool {
  let ok = *selection == challenge.correct;
  debug!(
    target: "challenge",
    id = %challenge.id,
    ok,
    selected = selection.len(),
    expected = challenge.correct.len(),
    "Validated selection"
  );
  ok
}
