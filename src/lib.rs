//! brainrot-captcha · demonstration "select the images" captcha core
//!
//! - Challenge building: Fisher–Yates shuffle over a static asset pool,
//!   3×3 grid with placeholder padding, correct-answer snapshot
//! - Pure selection toggling and set-equality validation
//! - Caller-owned [`session::CaptchaSession`] with reload + stale-build guard
//! - State-isolated modal frame embed ([`embed::FrameEmbed`])
//!
//! This is a demo widget core: no server, no bot defense, and the success
//! "token" is a fixed placeholder string.
//!
//! Important env variables:
//!   CAPTCHA_DATA_PATH : path to TOML dataset (prompts + picture bank)
//!   LOG_LEVEL     : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT    : "pretty" (default) or "json"

pub mod builder;
pub mod config;
pub mod domain;
pub mod embed;
pub mod seeds;
pub mod selection;
pub mod session;
pub mod telemetry;
pub mod util;
pub mod validate;
pub mod view;

pub use domain::{Asset, Challenge, ChallengeSource, Constraints, GridCell, Prompt, DEMO_PASS_TOKEN, GRID_SIZE};
pub use session::{CaptchaSession, ReloadTicket, VerifyOutcome};
pub use view::{CellView, ChallengeView};
