//! Challenge construction: pool shuffle, grid padding, id minting, and the
//! correct-answer snapshot.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{Asset, Challenge, ChallengeSource, Constraints, GridCell, Prompt};

/// Build one challenge from `pool`.
///
/// Performs a uniform-random permutation of the pool (`SliceRandom::shuffle`,
/// Fisher–Yates) and takes the first `grid_size` entries. Pools smaller than
/// the grid are padded with non-selectable placeholders; this never fails.
///
/// The correct-answer set is snapshotted here, so the challenge stays
/// self-contained even if the pool is edited afterwards.
pub fn build_challenge<R: Rng>(
  pool: &[Asset],
  prompt: &Prompt,
  source: ChallengeSource,
  grid_size: usize,
  rng: &mut R,
) -> Challenge {
  let mut taken: Vec<&Asset> = pool.iter().collect();
  taken.shuffle(rng);
  taken.truncate(grid_size);

  let correct: BTreeSet<String> = taken
    .iter()
    .filter(|a| a.is_target)
    .map(|a| a.id.clone())
    .collect();

  let mut cells: Vec<GridCell> = taken.into_iter().cloned().map(GridCell::Asset).collect();
  while cells.len() < grid_size {
    cells.push(GridCell::Placeholder);
  }

  // Fresh id per generation: fixed prompt id plus a random suffix.
  let id = format!("{}-{}", prompt.id, Uuid::new_v4().simple());
  debug!(target: "challenge", %id, targets = correct.len(), slots = cells.len(), "Built challenge grid");

  Challenge {
    id,
    prompt_id: prompt.id.clone(),
    prompt_text: prompt.text.clone(),
    source,
    cells,
    constraints: Constraints { min_select: 1, max_select: grid_size },
    correct,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::GRID_SIZE;
  use crate::seeds::{seed_assets, seed_prompts};
  use rand::rngs::StdRng;
  use rand::SeedableRng;
  use std::collections::HashSet;

  fn prompt() -> Prompt {
    seed_prompts().remove(0)
  }

  #[test]
  fn full_pool_fills_grid_without_duplicates() {
    let pool = seed_assets();
    let mut rng = StdRng::seed_from_u64(7);
    let ch = build_challenge(&pool, &prompt(), ChallengeSource::Seed, GRID_SIZE, &mut rng);

    assert_eq!(ch.cells.len(), GRID_SIZE);
    assert_eq!(ch.selectable_count(), GRID_SIZE);

    let pool_ids: HashSet<&str> = pool.iter().map(|a| a.id.as_str()).collect();
    let mut seen = HashSet::new();
    for cell in &ch.cells {
      let a = cell.asset().expect("no placeholders for a full pool");
      assert!(pool_ids.contains(a.id.as_str()), "cell asset must come from the pool");
      assert!(seen.insert(a.id.clone()), "duplicate asset in grid: {}", a.id);
    }
  }

  #[test]
  fn short_pool_is_padded_with_placeholders() {
    let pool: Vec<Asset> = seed_assets().into_iter().take(5).collect();
    let mut rng = StdRng::seed_from_u64(7);
    let ch = build_challenge(&pool, &prompt(), ChallengeSource::Seed, GRID_SIZE, &mut rng);

    assert_eq!(ch.cells.len(), GRID_SIZE);
    assert_eq!(ch.selectable_count(), 5);
    assert_eq!(ch.cells.iter().filter(|c| c.asset().is_none()).count(), 4);
  }

  #[test]
  fn empty_pool_yields_all_placeholders_and_empty_answer() {
    let mut rng = StdRng::seed_from_u64(7);
    let ch = build_challenge(&[], &prompt(), ChallengeSource::Seed, GRID_SIZE, &mut rng);

    assert_eq!(ch.cells.len(), GRID_SIZE);
    assert_eq!(ch.selectable_count(), 0);
    assert!(ch.correct.is_empty());
  }

  #[test]
  fn snapshot_matches_target_flags_of_taken_assets() {
    let pool = seed_assets();
    let mut rng = StdRng::seed_from_u64(42);
    let ch = build_challenge(&pool, &prompt(), ChallengeSource::Seed, GRID_SIZE, &mut rng);

    let expected: BTreeSet<String> = ch
      .cells
      .iter()
      .filter_map(GridCell::asset)
      .filter(|a| a.is_target)
      .map(|a| a.id.clone())
      .collect();
    assert_eq!(ch.correct, expected);
  }

  #[test]
  fn ids_are_prompt_prefixed_and_unique_across_builds() {
    let pool = seed_assets();
    let p = prompt();
    let mut rng = StdRng::seed_from_u64(1);
    let a = build_challenge(&pool, &p, ChallengeSource::Seed, GRID_SIZE, &mut rng);
    let b = build_challenge(&pool, &p, ChallengeSource::Seed, GRID_SIZE, &mut rng);
    assert!(a.id.starts_with(&format!("{}-", p.id)));
    assert_ne!(a.id, b.id);
  }

  #[test]
  fn constraints_are_fixed_one_to_grid_size() {
    let pool = seed_assets();
    let mut rng = StdRng::seed_from_u64(3);
    let ch = build_challenge(&pool, &prompt(), ChallengeSource::Seed, GRID_SIZE, &mut rng);
    assert_eq!(ch.constraints.min_select, 1);
    assert_eq!(ch.constraints.max_select, GRID_SIZE);
  }
}
