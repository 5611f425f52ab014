//! End-to-end flows over the public API: build → toggle → verify → reload,
//! plus the stale-reload guard and the embed boundary.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use brainrot_captcha::builder::build_challenge;
use brainrot_captcha::embed::FrameEmbed;
use brainrot_captcha::seeds::{seed_assets, seed_prompts};
use brainrot_captcha::selection::toggle;
use brainrot_captcha::validate::validate;
use brainrot_captcha::{Asset, CaptchaSession, ChallengeSource, Prompt, DEMO_PASS_TOKEN, GRID_SIZE};

fn pool_with_targets(total: usize, targets: usize) -> Vec<Asset> {
  (0..total)
    .map(|i| Asset {
      id: format!("a{}", i),
      url: format!("/assets/a{}.png", i),
      name: format!("Asset {}", i),
      is_target: i < targets,
    })
    .collect()
}

fn prompt() -> Prompt {
  Prompt { id: "q1".into(), text: "Select the targets".into() }
}

#[test]
fn three_of_nine_scenario() {
  let pool = pool_with_targets(9, 3);
  let mut rng = StdRng::seed_from_u64(2024);
  let ch = build_challenge(&pool, &prompt(), ChallengeSource::Seed, GRID_SIZE, &mut rng);

  // Exactly the three flagged assets pass.
  let exact: BTreeSet<String> = (0..3).map(|i| format!("a{}", i)).collect();
  assert!(validate(&ch, &exact));

  // Two of three fail.
  let two: BTreeSet<String> = (0..2).map(|i| format!("a{}", i)).collect();
  assert!(!validate(&ch, &two));

  // All nine fail, because only three are flagged.
  let all: BTreeSet<String> = (0..9).map(|i| format!("a{}", i)).collect();
  assert!(!validate(&ch, &all));
}

#[test]
fn toggling_through_the_session_reaches_a_pass() {
  let mut session = CaptchaSession::new(pool_with_targets(9, 3), vec![prompt()], ChallengeSource::ConfigBank);

  // Drive the session the way a grid renderer would: toggle each target
  // cell, throw in a stray toggle pair that cancels itself out.
  let targets: Vec<String> = session.challenge().correct.iter().cloned().collect();
  for id in &targets {
    session.toggle(id);
  }
  session.toggle("a8");
  session.toggle("a8");

  let out = session.verify();
  assert!(out.passed);
  assert_eq!(out.token.as_deref(), Some(DEMO_PASS_TOKEN));
}

#[test]
fn pure_toggle_round_trips_any_selection() {
  let base: BTreeSet<String> = ["a1", "a2"].iter().map(|s| s.to_string()).collect();
  for id in ["a1", "a9", "zz"] {
    assert_eq!(toggle(&toggle(&base, id), id), base);
  }
}

#[test]
fn short_and_empty_pools_pad_the_grid() {
  let mut rng = StdRng::seed_from_u64(9);

  let ch = build_challenge(&pool_with_targets(4, 2), &prompt(), ChallengeSource::Seed, GRID_SIZE, &mut rng);
  assert_eq!(ch.selectable_count(), 4);
  assert_eq!(ch.cells.len(), GRID_SIZE);

  let empty = build_challenge(&[], &prompt(), ChallengeSource::Seed, GRID_SIZE, &mut rng);
  assert_eq!(empty.selectable_count(), 0);
  // Vacuous set equality holds at the validator level; the session's
  // min_select constraint is what keeps this from minting a token.
  assert!(validate(&empty, &BTreeSet::new()));
  let mut session = CaptchaSession::new(Vec::new(), vec![prompt()], ChallengeSource::ConfigBank);
  assert!(!session.verify().passed);
}

#[test]
fn successive_reloads_produce_independent_ids() {
  let mut session = CaptchaSession::new(seed_assets(), seed_prompts(), ChallengeSource::Seed);
  let mut ids = vec![session.challenge().id.clone()];
  for _ in 0..5 {
    session.reload();
    ids.push(session.challenge().id.clone());
  }
  let mut unique = ids.clone();
  unique.sort();
  unique.dedup();
  assert_eq!(unique.len(), ids.len(), "reloaded challenge ids must be fresh");
}

#[test]
fn stale_reload_loses_to_the_latest_one() {
  let mut session = CaptchaSession::new(seed_assets(), seed_prompts(), ChallengeSource::Seed);

  let old_ticket = session.begin_reload();
  let old_build = session.build_next();
  let new_ticket = session.begin_reload();
  let new_build = session.build_next();
  let winner = new_build.id.clone();

  assert!(session.commit_reload(new_ticket, new_build));
  assert!(!session.commit_reload(old_ticket, old_build));
  assert_eq!(session.challenge().id, winner);
}

#[test]
fn embed_stays_isolated_from_the_session() {
  // The embed is constructed and rendered without ever touching a session;
  // its output is fully determined by url + title + fixed policy.
  let a = FrameEmbed::new("https://example.com/app", "External app");
  let b = FrameEmbed::new("https://example.com/app", "External app");
  assert_eq!(a.to_html(), b.to_html());
  assert!(a.to_html().contains("sandbox="));
}
