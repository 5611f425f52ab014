//! Public view structs handed to renderers (serde ready).
//!
//! These deliberately omit the ground-truth flags and the correct-answer set,
//! so no renderer can read the answer off its inputs. Keep this small and
//! stable so rendering code can evolve independently of the core.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::{Challenge, GridCell};

/// One grid slot as a renderer sees it. Placeholders carry no `asset_id`
/// and must be rendered as inert, non-focusable slots.
#[derive(Clone, Debug, Serialize)]
pub struct CellView {
  pub asset_id: Option<String>,
  pub image_url: String,
  pub name: String,
  pub selected: bool,
}

/// Everything a renderer needs for one challenge + selection snapshot.
#[derive(Clone, Debug, Serialize)]
pub struct ChallengeView {
  pub challenge_id: String,
  pub prompt: String,
  pub cells: Vec<CellView>,
  pub min_select: usize,
  pub max_select: usize,
}

/// Convert the internal challenge + selection into the public view.
pub fn to_view(challenge: &Challenge, selection: &BTreeSet<String>) -> ChallengeView {
  let cells = challenge
    .cells
    .iter()
    .map(|cell| match cell {
      GridCell::Asset(a) => CellView {
        asset_id: Some(a.id.clone()),
        image_url: a.url.clone(),
        name: a.name.clone(),
        selected: selection.contains(&a.id),
      },
      GridCell::Placeholder => CellView {
        asset_id: None,
        image_url: String::new(),
        name: String::new(),
        selected: false,
      },
    })
    .collect();

  ChallengeView {
    challenge_id: challenge.id.clone(),
    prompt: challenge.prompt_text.clone(),
    cells,
    min_select: challenge.constraints.min_select,
    max_select: challenge.constraints.max_select,
  }
}
