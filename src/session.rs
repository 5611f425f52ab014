//! Captcha session: the caller-owned object tying everything together.
//!
//! This module owns:
//!   - the immutable asset pool and prompt list (config bank or built-in seeds)
//!   - the currently displayed challenge and selection set
//!   - the display-only hint line
//!   - the generation counter guarding stale reloads
//!   - success/failure hooks fired once per verification attempt
//!
//! Rendering is deliberately not a concern here; renderers consume
//! [`crate::view::ChallengeView`] snapshots instead.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::builder::build_challenge;
use crate::config::load_dataset_from_env;
use crate::domain::{Asset, Challenge, ChallengeSource, Prompt, DEMO_PASS_TOKEN, GRID_SIZE};
use crate::seeds::{hard_fallback_prompt, seed_assets, seed_prompts};
use crate::selection::toggle;
use crate::validate::validate;
use crate::view::{to_view, ChallengeView};

/// Outcome of one verification attempt. `hint` is display-only copy;
/// nothing here is an error in the `Result` sense.
#[derive(Clone, Debug, Serialize)]
pub struct VerifyOutcome {
  pub passed: bool,
  pub token: Option<String>,
  pub hint: Option<String>,
}

/// Opaque handle for an in-flight reload, compared at completion time.
/// See [`CaptchaSession::begin_reload`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReloadTicket(u64);

type SuccessHook = Box<dyn FnMut(&str) + Send>;
type FailHook = Box<dyn FnMut() + Send>;

pub struct CaptchaSession {
  pool: Vec<Asset>,
  prompts: Vec<Prompt>,
  source: ChallengeSource,
  grid_size: usize,
  challenge: Challenge,
  selection: BTreeSet<String>,
  hint: Option<String>,
  generation: u64,
  last_prompt_id: Option<String>,
  on_success: Option<SuccessHook>,
  on_fail: Option<FailHook>,
}

impl CaptchaSession {
  /// Build a session over a caller-supplied dataset.
  ///
  /// An empty pool is not fatal: the grid renders as placeholders and a
  /// load hint is shown. An empty prompt list falls back to the built-in
  /// fallback prompt.
  #[instrument(level = "info", skip_all, fields(pool_len = pool.len(), prompt_count = prompts.len()))]
  pub fn new(pool: Vec<Asset>, prompts: Vec<Prompt>, source: ChallengeSource) -> Self {
    let mut s = Self {
      pool,
      prompts,
      source,
      grid_size: GRID_SIZE,
      challenge: Challenge {
        // Replaced immediately below; never observable.
        id: String::new(),
        prompt_id: String::new(),
        prompt_text: String::new(),
        source: ChallengeSource::Seed,
        cells: Vec::new(),
        constraints: crate::domain::Constraints { min_select: 1, max_select: GRID_SIZE },
        correct: BTreeSet::new(),
      },
      selection: BTreeSet::new(),
      hint: None,
      generation: 0,
      last_prompt_id: None,
      on_success: None,
      on_fail: None,
    };
    s.challenge = s.build_next();
    if s.pool.is_empty() {
      warn!(target: "challenge", "Empty asset pool; serving a placeholder-only grid");
      s.hint = Some("No images available. Check the dataset, then reload.".into());
    }
    info!(target: "challenge", id = %s.challenge.id, source = ?s.source, "Session ready");
    s
  }

  /// Build a session from CAPTCHA_DATA_PATH when set and parseable,
  /// falling back to the built-in seed dataset.
  #[instrument(level = "info", skip_all)]
  pub fn from_env() -> Self {
    if let Some(cfg) = load_dataset_from_env() {
      let assets = cfg.assets();
      let prompts = cfg.prompts();
      if !assets.is_empty() {
        return Self::new(assets, prompts, ChallengeSource::ConfigBank);
      }
      warn!(target: "brainrot_captcha", "Dataset config held no usable pictures; using seeds");
    }
    Self::new(seed_assets(), seed_prompts(), ChallengeSource::Seed)
  }

  /// Register a hook invoked with the demo token on every passed attempt.
  pub fn on_success(&mut self, hook: impl FnMut(&str) + Send + 'static) {
    self.on_success = Some(Box::new(hook));
  }

  /// Register a hook invoked on every failed attempt.
  pub fn on_fail(&mut self, hook: impl FnMut() + Send + 'static) {
    self.on_fail = Some(Box::new(hook));
  }

  pub fn challenge(&self) -> &Challenge {
    &self.challenge
  }

  pub fn selection(&self) -> &BTreeSet<String> {
    &self.selection
  }

  /// Current display hint, if any (load trouble, constraint miss, mismatch).
  pub fn hint(&self) -> Option<&str> {
    self.hint.as_deref()
  }

  /// Snapshot for renderers; carries no ground-truth flags.
  pub fn view(&self) -> ChallengeView {
    to_view(&self.challenge, &self.selection)
  }

  /// Toggle one cell. Clears any displayed hint first, then applies policy:
  /// placeholder/unknown ids are ignored, and growing the selection past
  /// `max_select` is refused with a hint.
  #[instrument(level = "debug", skip(self), fields(%asset_id))]
  pub fn toggle(&mut self, asset_id: &str) {
    self.hint = None;
    if !self.challenge.is_selectable(asset_id) {
      warn!(target: "challenge", %asset_id, "Ignoring toggle for non-selectable id");
      return;
    }
    let max = self.challenge.constraints.max_select;
    if !self.selection.contains(asset_id) && self.selection.len() >= max {
      self.hint = Some(format!("Select at most {} images.", max));
      return;
    }
    self.selection = toggle(&self.selection, asset_id);
  }

  /// Verify the current selection.
  ///
  /// Checks the count constraints first, then set equality. Exactly one of
  /// the registered hooks fires per attempt, synchronously. The challenge is
  /// left in place on failure; the user retries or reloads.
  #[instrument(level = "info", skip(self), fields(challenge_id = %self.challenge.id, selected = self.selection.len()))]
  pub fn verify(&mut self) -> VerifyOutcome {
    let n = self.selection.len();
    let c = self.challenge.constraints;

    let outcome = if n < c.min_select {
      VerifyOutcome {
        passed: false,
        token: None,
        hint: Some(format!("Select at least {} image{}.", c.min_select, if c.min_select == 1 { "" } else { "s" })),
      }
    } else if n > c.max_select {
      VerifyOutcome {
        passed: false,
        token: None,
        hint: Some(format!("Select at most {} images.", c.max_select)),
      }
    } else if validate(&self.challenge, &self.selection) {
      VerifyOutcome { passed: true, token: Some(DEMO_PASS_TOKEN.to_string()), hint: None }
    } else {
      VerifyOutcome { passed: false, token: None, hint: Some("Incorrect selection.".into()) }
    };

    self.hint = outcome.hint.clone();
    if outcome.passed {
      info!(target: "challenge", id = %self.challenge.id, "Verification passed");
      if let Some(hook) = self.on_success.as_mut() {
        hook(outcome.token.as_deref().unwrap_or(DEMO_PASS_TOKEN));
      }
    } else {
      info!(target: "challenge", id = %self.challenge.id, hint = outcome.hint.as_deref().unwrap_or(""), "Verification failed");
      if let Some(hook) = self.on_fail.as_mut() {
        hook();
      }
    }
    outcome
  }

  /// Replace the current challenge with a fresh one and clear the selection.
  /// Unrelated to the previous challenge; repeating assets by chance is fine.
  #[instrument(level = "info", skip(self))]
  pub fn reload(&mut self) {
    let ticket = self.begin_reload();
    let next = self.build_next();
    self.commit_reload(ticket, next);
  }

  /// Start a reload and obtain its ticket. Each call supersedes all earlier
  /// tickets; build the challenge, then hand both to [`Self::commit_reload`].
  pub fn begin_reload(&mut self) -> ReloadTicket {
    self.generation += 1;
    ReloadTicket(self.generation)
  }

  /// Build the next challenge without installing it.
  pub fn build_next(&mut self) -> Challenge {
    let prompt = self.next_prompt();
    build_challenge(&self.pool, &prompt, self.source.clone(), self.grid_size, &mut thread_rng())
  }

  /// Install a built challenge if its ticket is still the latest.
  /// Stale tickets are discarded and leave the session untouched.
  pub fn commit_reload(&mut self, ticket: ReloadTicket, next: Challenge) -> bool {
    if ticket.0 != self.generation {
      warn!(target: "challenge", stale = ticket.0, current = self.generation, "Discarding stale reload");
      return false;
    }
    info!(target: "challenge", id = %next.id, "Installed reloaded challenge");
    self.challenge = next;
    self.selection.clear();
    self.hint = None;
    true
  }

  /// Prompt rotation: pick at random, avoiding the previously served prompt
  /// when more than one is available.
  fn next_prompt(&mut self) -> Prompt {
    if self.prompts.is_empty() {
      warn!(target: "challenge", "No prompts configured; using hard fallback prompt");
      let p = hard_fallback_prompt();
      self.last_prompt_id = Some(p.id.clone());
      return p;
    }

    let mut rng = thread_rng();
    let candidates: Vec<&Prompt> = match &self.last_prompt_id {
      Some(last) if self.prompts.len() > 1 => {
        self.prompts.iter().filter(|p| &p.id != last).collect()
      }
      _ => self.prompts.iter().collect(),
    };
    let chosen = candidates
      .choose(&mut rng)
      .copied()
      .unwrap_or(&self.prompts[0])
      .clone();
    self.last_prompt_id = Some(chosen.id.clone());
    chosen
  }
}
