//! Contrarian mapping from a reported mood to the emotional target the
//! recommendations should steer towards.

use crate::{error::AppResult, models::MoodCategory};

/// Descriptor words for the complement of `mood`
pub fn target_tags(mood: MoodCategory) -> &'static str {
    match mood {
        MoodCategory::SadLow => "Uplifting Joy Energy Motivation Hope",
        MoodCategory::AnxiousStressed => "Calm Relaxation Breathing Focus",
        MoodCategory::DistractedAdhd => "Focus Concentration Study Productivity",
        MoodCategory::TiredInsomnia => "Sleep Rest Relaxation Soothing",
        MoodCategory::AngryFrustrated => "Peace Release Grounding Calm",
    }
}

/// Human-readable name of the mood the target tags aim for
pub fn target_mood(mood: MoodCategory) -> &'static str {
    match mood {
        MoodCategory::SadLow => "Uplifted",
        MoodCategory::AnxiousStressed => "Calm",
        MoodCategory::DistractedAdhd => "Focused",
        MoodCategory::TiredInsomnia => "Rested",
        MoodCategory::AngryFrustrated => "Peaceful",
    }
}

/// Resolves a mood label to its target tag string
///
/// Fails with `AppError::InvalidMood` for anything outside the enumeration.
pub fn resolve(mood: &str) -> AppResult<&'static str> {
    let mood: MoodCategory = mood.parse()?;
    Ok(target_tags(mood))
}
