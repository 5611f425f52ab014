//! Domain models used by the captcha core: assets, prompts, grid cells,
//! selection constraints, and the challenge itself.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Default grid: 3×3.
pub const GRID_SIZE: usize = 9;

/// Fixed placeholder credential returned on a successful verification.
/// This is demo output only, not a verifiable token.
pub const DEMO_PASS_TOKEN: &str = "brainrot-captcha-demo-pass";

/// Where did the asset pool behind a challenge come from?
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeSource {
  ConfigBank, // from user-provided TOML dataset
  Seed,       // built-in demo dataset (last resort)
}

/// One candidate image with its ground-truth category label.
/// Immutable, sourced from a static dataset at load time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Asset {
  pub id: String,
  pub url: String,
  pub name: String,
  pub is_target: bool,
}

/// The question shown above the grid (e.g. "Select all the brain rot images").
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Prompt {
  pub id: String,
  pub text: String,
}

/// One slot of the grid. Pools smaller than the grid are padded with
/// placeholders, which are never selectable.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridCell {
  Asset(Asset),
  Placeholder,
}

impl GridCell {
  pub fn asset(&self) -> Option<&Asset> {
    match self {
      GridCell::Asset(a) => Some(a),
      GridCell::Placeholder => None,
    }
  }
}

/// Selection-count bounds checked at verification time.
/// Invariant: `min_select <= max_select`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Constraints {
  pub min_select: usize,
  pub max_select: usize,
}

/// One generated grid-selection task.
///
/// Created fresh per build and never mutated in place. The correct-answer set
/// is snapshotted at build time so edits to the backing pool between build and
/// verification cannot skew the outcome.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Challenge {
  pub id: String,
  pub prompt_id: String,
  pub prompt_text: String,
  pub source: ChallengeSource,
  pub cells: Vec<GridCell>,
  pub constraints: Constraints,
  pub correct: BTreeSet<String>,
}

impl Challenge {
  /// True if `asset_id` names a selectable (non-placeholder) cell of this grid.
  pub fn is_selectable(&self, asset_id: &str) -> bool {
    self.cells.iter().filter_map(GridCell::asset).any(|a| a.id == asset_id)
  }

  /// Number of selectable cells in the grid.
  pub fn selectable_count(&self) -> usize {
    self.cells.iter().filter(|c| c.asset().is_some()).count()
  }
}
