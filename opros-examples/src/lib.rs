//! Example surveys for the opros crate.
//!
//! Two hard-coded surveys (food and music preferences, prompts in Russian)
//! plus the process-wide registry that holds them.

use std::sync::LazyLock;

use opros_types::Registry;

pub mod food;
pub mod music;

/// Registry key for the food preferences survey.
pub const FOOD_SURVEY: &str = "food_survey";

/// Registry key for the music preferences survey.
pub const MUSIC_SURVEY: &str = "music_survey";

/// Build the example registry with both surveys.
pub fn registry() -> Registry {
    Registry::new()
        .with_survey(FOOD_SURVEY, food::survey())
        .with_survey(MUSIC_SURVEY, music::survey())
}

/// The process-wide example registry.
///
/// Populated on first access and never mutated afterwards.
pub static SURVEYS: LazyLock<Registry> = LazyLock::new(registry);
