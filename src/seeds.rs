//! Seed data: the built-in demo asset pool and prompts.
//! These guarantee the widget is usable even without an external dataset.

use crate::domain::{Asset, Prompt};

fn asset(id: &str, url: &str, name: &str, is_target: bool) -> Asset {
  Asset { id: id.into(), url: url.into(), name: name.into(), is_target }
}

/// Built-in picture bank: twelve images, five flagged as the target
/// category ("brain rot").
pub fn seed_assets() -> Vec<Asset> {
  vec![
    asset("p001", "/assets/skibidi_toilet.png", "Skibidi Toilet", true),
    asset("p002", "/assets/tralalero_tralala.png", "Tralalero Tralala", true),
    asset("p003", "/assets/tung_tung_sahur.png", "Tung Tung Tung Sahur", true),
    asset("p004", "/assets/ballerina_cappuccina.png", "Ballerina Cappuccina", true),
    asset("p005", "/assets/brr_brr_patapim.png", "Brr Brr Patapim", true),
    asset("p006", "/assets/golden_retriever.png", "Golden Retriever", false),
    asset("p007", "/assets/mountain_lake.png", "Mountain Lake", false),
    asset("p008", "/assets/city_bus.png", "City Bus", false),
    asset("p009", "/assets/espresso_cup.png", "Espresso Cup", false),
    asset("p010", "/assets/office_chair.png", "Office Chair", false),
    asset("p011", "/assets/autumn_forest.png", "Autumn Forest", false),
    asset("p012", "/assets/bicycle.png", "Bicycle", false),
  ]
}

/// Built-in prompts. Wording varies; the target category does not.
pub fn seed_prompts() -> Vec<Prompt> {
  vec![
    Prompt { id: "q001".into(), text: "Select all the brain rot images".into() },
    Prompt { id: "q002".into(), text: "Pick every brain rot character".into() },
    Prompt { id: "q003".into(), text: "Tap each image that is brain rot".into() },
  ]
}

/// Absolute last-resort prompt, used when the prompt list is empty.
pub fn hard_fallback_prompt() -> Prompt {
  Prompt { id: "q000".into(), text: "Select all the brain rot images".into() }
}
