//! Loading the dataset (prompts + picture bank) from TOML.
//!
//! Expected schema:
//!
//! ```toml
//! [[prompts]]
//! id = "q1"                       # optional, minted when missing
//! text = "Select all the brain rot images"
//!
//! [[pictures]]
//! id = "p1"                       # optional, minted when missing
//! image = "https://cdn.example.com/skibidi.png"
//! name = "Skibidi Toilet"
//! is_brain_rot = true
//! ```

use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::domain::{Asset, Prompt};
use crate::util::trunc_for_log;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct DatasetConfig {
  #[serde(default)]
  pub prompts: Vec<PromptCfg>,
  #[serde(default)]
  pub pictures: Vec<PictureCfg>,
}

/// Prompt entry accepted in TOML configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct PromptCfg {
  #[serde(default)]
  pub id: Option<String>,
  pub text: String,
}

/// Picture entry accepted in TOML configuration.
/// Field names mirror the demo dataset shape: an image URL, a display name,
/// and the ground-truth "brain rot" flag.
#[derive(Clone, Debug, Deserialize)]
pub struct PictureCfg {
  #[serde(default)]
  pub id: Option<String>,
  pub image: String,
  pub name: String,
  #[serde(default)]
  pub is_brain_rot: bool,
}

impl DatasetConfig {
  /// Convert picture entries into the immutable asset pool.
  /// Entries with an empty name are skipped; missing ids are minted.
  pub fn assets(&self) -> Vec<Asset> {
    self
      .pictures
      .iter()
      .filter_map(|p| {
        if p.name.trim().is_empty() || p.image.trim().is_empty() {
          error!(target: "brainrot_captcha", name = %p.name, "Skipping picture entry: missing name or image.");
          return None;
        }
        Some(Asset {
          id: p.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string()),
          url: p.image.clone(),
          name: p.name.clone(),
          is_target: p.is_brain_rot,
        })
      })
      .collect()
  }

  /// Convert prompt entries into the prompt list; missing ids are minted.
  pub fn prompts(&self) -> Vec<Prompt> {
    self
      .prompts
      .iter()
      .filter_map(|p| {
        if p.text.trim().is_empty() {
          error!(target: "brainrot_captcha", "Skipping prompt entry: empty text.");
          return None;
        }
        Some(Prompt {
          id: p.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string()),
          text: p.text.clone(),
        })
      })
      .collect()
  }
}

/// Attempt to load `DatasetConfig` from CAPTCHA_DATA_PATH.
/// On any parsing/IO error, returns None (callers fall back to seeds).
pub fn load_dataset_from_env() -> Option<DatasetConfig> {
  let path = std::env::var("CAPTCHA_DATA_PATH").ok()?;
  load_dataset(&path)
}

/// Load and parse a dataset TOML file at `path`.
pub fn load_dataset(path: &str) -> Option<DatasetConfig> {
  match std::fs::read_to_string(path) {
    Ok(s) => match toml::from_str::<DatasetConfig>(&s) {
      Ok(cfg) => {
        info!(target: "brainrot_captcha", %path, prompts = cfg.prompts.len(), pictures = cfg.pictures.len(), "Loaded dataset (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "brainrot_captcha", %path, error = %e, snippet = %trunc_for_log(&s, 120), "Failed to parse TOML dataset");
        None
      }
    },
    Err(e) => {
      error!(target: "brainrot_captcha", %path, error = %e, "Failed to read TOML dataset file");
      None
    }
  }
}
